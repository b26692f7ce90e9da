//! Column mapping for the two dashboard sheets.
//!
//! Column labels are resolved to positions once, when a snapshot is mapped,
//! so a renamed or missing column fails at load time with the column's name.

use crate::error::Result;
use crate::snapshot::SheetSnapshot;

pub const TEAM_COLUMN: &str = "Team's name/ mentor";
pub const FEEDBACK_WEEK_COLUMN: &str = "Please select the week in which you are providing feedback";
pub const INSIGHTS_COLUMN: &str =
    "To what extent did you gain new insights from this week's workshop(s)?";
pub const RECOMMENDATION_COLUMN: &str = "Based on this week's workshop(s), how likely would you recommend the Cohort Program to other founders, entrepreneurs, and innovators.";

pub const STARTUP_COLUMN: &str = "Startup Name";
pub const UPDATE_WEEK_COLUMN: &str = "Week #";
pub const REVENUE_COLUMN: &str = "Revenue generated?";
pub const GOALS_COLUMN: &str =
    "Goals for Next Week\nWhat are your top goals for the coming week?";
pub const MILESTONES_COLUMN: &str = "Product Milestones\nDid you reach any product milestones this week (e.g., prototype, demo, or feature release)?Please describe the milestone and its significance to the product's development.";
pub const MORE_MILESTONES_COLUMN: &str =
    "More\nAny other significant milestones achieved, events, meet new people?";

/// Header labels of the workshop feedback survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyColumns {
    pub team: String,
    pub week: String,
    pub insights: String,
    pub recommendation: String,
}

impl Default for SurveyColumns {
    fn default() -> Self {
        Self {
            team: TEAM_COLUMN.to_string(),
            week: FEEDBACK_WEEK_COLUMN.to_string(),
            insights: INSIGHTS_COLUMN.to_string(),
            recommendation: RECOMMENDATION_COLUMN.to_string(),
        }
    }
}

/// One survey answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    pub team: String,
    pub week: String,
    pub insights: String,
    pub recommendation: String,
}

impl SurveyColumns {
    /// Map every snapshot row onto a [`SurveyResponse`].
    pub fn map(&self, snapshot: &SheetSnapshot) -> Result<Vec<SurveyResponse>> {
        let team = snapshot.require_column(&self.team)?;
        let week = snapshot.require_column(&self.week)?;
        let insights = snapshot.require_column(&self.insights)?;
        let recommendation = snapshot.require_column(&self.recommendation)?;

        Ok(snapshot
            .rows()
            .iter()
            .map(|row| SurveyResponse {
                team: row[team].clone(),
                week: row[week].clone(),
                insights: row[insights].clone(),
                recommendation: row[recommendation].clone(),
            })
            .collect())
    }
}

/// Header labels of the weekly startup update form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateColumns {
    pub startup: String,
    pub week: String,
    pub revenue: String,
    pub goals: String,
    pub milestones: String,
    pub more_milestones: String,
}

impl Default for UpdateColumns {
    fn default() -> Self {
        Self {
            startup: STARTUP_COLUMN.to_string(),
            week: UPDATE_WEEK_COLUMN.to_string(),
            revenue: REVENUE_COLUMN.to_string(),
            goals: GOALS_COLUMN.to_string(),
            milestones: MILESTONES_COLUMN.to_string(),
            more_milestones: MORE_MILESTONES_COLUMN.to_string(),
        }
    }
}

/// One weekly update from a startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupUpdate {
    pub startup: String,
    pub week: String,
    pub revenue: String,
    pub goals: String,
    pub milestones: String,
    pub more_milestones: String,
}

impl UpdateColumns {
    /// Map every snapshot row onto a [`StartupUpdate`].
    pub fn map(&self, snapshot: &SheetSnapshot) -> Result<Vec<StartupUpdate>> {
        let startup = snapshot.require_column(&self.startup)?;
        let week = snapshot.require_column(&self.week)?;
        let revenue = snapshot.require_column(&self.revenue)?;
        let goals = snapshot.require_column(&self.goals)?;
        let milestones = snapshot.require_column(&self.milestones)?;
        let more_milestones = snapshot.require_column(&self.more_milestones)?;

        Ok(snapshot
            .rows()
            .iter()
            .map(|row| StartupUpdate {
                startup: row[startup].clone(),
                week: row[week].clone(),
                revenue: row[revenue].clone(),
                goals: row[goals].clone(),
                milestones: row[milestones].clone(),
                more_milestones: row[more_milestones].clone(),
            })
            .collect())
    }
}

/// Distinct non-empty values in first-seen order.
pub fn unique_non_empty<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

//! Chart assembly for the dashboard.

use cohortboard_core::{escape_html, to_number};
use cohortboard_viz::{BarChart, VizResult};

use crate::context::DataContext;

/// The three dashboard charts for one team and one startup.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub insights: BarChart,
    pub recommendation: BarChart,
    pub revenue: BarChart,
}

impl Dashboard {
    /// Build the charts. An empty `startup` matches no rows.
    pub fn build(context: &DataContext, team: &str, startup: &str) -> Self {
        let insights = BarChart::from_points(
            format!("Insights Gained for {team}"),
            "Week",
            "Insights",
            context
                .survey_for_team(team)
                .map(|row| (row.week.as_str(), to_number(&row.insights))),
        );

        let recommendation = BarChart::from_points(
            format!("Recommendation Likelihood for {team}"),
            "Week",
            "Recommendation Likelihood",
            context
                .survey_for_team(team)
                .map(|row| (row.week.as_str(), to_number(&row.recommendation))),
        );

        let revenue = BarChart::from_points(
            format!("Revenue Generated for {startup}"),
            "Week",
            "Revenue Generated",
            context
                .updates_for_startup(startup)
                .filter(|_| !startup.is_empty())
                .map(|row| (row.week.as_str(), to_number(&row.revenue))),
        );

        Self {
            insights,
            recommendation,
            revenue,
        }
    }

    /// Render the three charts under their section headings.
    pub fn to_html(&self) -> VizResult<String> {
        let sections = [
            ("Insights Gained", &self.insights),
            ("Recommendation Likelihood", &self.recommendation),
            ("Revenue Generated", &self.revenue),
        ];

        let mut html = String::new();
        for (heading, chart) in sections {
            html.push_str(&format!(
                "<div>\n    <h2>{}</h2>\n    {}\n</div>\n",
                escape_html(heading),
                chart.to_html_fragment()?
            ));
        }
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohortboard_sheet::{StartupUpdate, SurveyResponse};

    fn context() -> DataContext {
        let survey = vec![
            SurveyResponse {
                team: "Alpha".into(),
                week: "Week 1".into(),
                insights: "4".into(),
                recommendation: "9".into(),
            },
            SurveyResponse {
                team: "Alpha".into(),
                week: "Week 2".into(),
                insights: "n/a".into(),
                recommendation: "7".into(),
            },
            SurveyResponse {
                team: "Beta".into(),
                week: "Week 1".into(),
                insights: "2".into(),
                recommendation: "5".into(),
            },
        ];
        let updates = vec![StartupUpdate {
            startup: "Acme".into(),
            week: "1".into(),
            revenue: "1200".into(),
            goals: String::new(),
            milestones: String::new(),
            more_milestones: String::new(),
        }];
        DataContext::new(survey, updates)
    }

    #[test]
    fn test_team_filter_and_coercion() {
        let dashboard = Dashboard::build(&context(), "Alpha", "Acme");
        assert_eq!(dashboard.insights.title, "Insights Gained for Alpha");
        assert_eq!(dashboard.insights.data.labels, vec!["Week 1", "Week 2"]);
        assert_eq!(dashboard.insights.data.datasets[0].data, vec![Some(4.0), None]);
        assert_eq!(
            dashboard.recommendation.data.datasets[0].data,
            vec![Some(9.0), Some(7.0)]
        );
        assert_eq!(dashboard.revenue.data.datasets[0].data, vec![Some(1200.0)]);
    }

    #[test]
    fn test_empty_startup_matches_nothing() {
        let dashboard = Dashboard::build(&context(), "Alpha", "");
        assert!(dashboard.revenue.data.labels.is_empty());
        assert_eq!(dashboard.revenue.title, "Revenue Generated for ");
    }

    #[test]
    fn test_html_sections() {
        let html = Dashboard::build(&context(), "Beta", "Acme").to_html().unwrap();
        assert!(html.contains("<h2>Insights Gained</h2>"));
        assert!(html.contains("<h2>Recommendation Likelihood</h2>"));
        assert!(html.contains("<h2>Revenue Generated</h2>"));
        assert_eq!(html.matches("<canvas").count(), 3);
    }
}

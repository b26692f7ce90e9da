//! Prompt for the weekly goal review.

use cohortboard_sheet::StartupUpdate;

pub const GOAL_REVIEW_SYSTEM_PROMPT: &str = "You are a helpful assistant designed to analyze and process startup progress data. Your task is to review weekly updates provided by the startup team, identify the goals for the upcoming week, and determine whether each goal was achieved or is yet to be achieved. For each week, you will output a table summarizing the status of each goal, marking it as 'Achieved' or 'Yet to achieve' based on the provided achievements.";

pub const GOAL_REVIEW_INSTRUCTION: &str = "For each startup in the sheet: Review the goals  and compare it to the achievements and more_achievements listed.For each goal, check if it was accomplished or still pending.Provide a clear and concise table with the goals and their status for each week.\n";

/// Build the user message: the review instruction followed by one line per update.
pub fn goal_review_prompt(updates: &[StartupUpdate]) -> String {
    let mut prompt = String::from(GOAL_REVIEW_INSTRUCTION);
    for update in updates {
        prompt.push_str(&format!(
            "Startup Name: {} Week {}: Goals: {}, Achievements: {}, More Achievements: {}\n",
            update.startup, update.week, update.goals, update.milestones, update.more_milestones
        ));
    }
    prompt
}

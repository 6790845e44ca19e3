use crate::models::Intent;

/// Checked top to bottom; the first row with a matching pattern wins.
const RULES: &[(&[&str], Intent)] = &[
    (&["best round"], Intent::BestRound),
    (&["worst round"], Intent::WorstRound),
    (&["average score"], Intent::AverageScore),
    (&["most common course"], Intent::MostCommonCourse),
    (&["hole scores", "hole by hole"], Intent::HoleScores),
    (&["summarize", "summary"], Intent::Summary),
];

/// Maps a question onto the response shape the model should produce.
pub fn classify(question: &str) -> Intent {
    let question = question.to_lowercase();

    RULES
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| question.contains(p)))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::General)
}

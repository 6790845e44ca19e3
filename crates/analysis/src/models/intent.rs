/// Response shape requested from the model, picked from the question text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    BestRound,
    WorstRound,
    AverageScore,
    MostCommonCourse,
    HoleScores,
    Summary,
    General,
}

impl Intent {
    pub fn instruction(self) -> &'static str {
        match self {
            Self::BestRound => {
                r#"Respond with ONLY the single round that has the lowest total score, in exactly this format and with no other text:
Best Round: <course name> - <layout name>
Date: <date>
Total Score: <total score>
Hole Scores: <comma-separated hole scores>"#
            }
            Self::WorstRound => {
                r#"Respond with ONLY the single round that has the highest total score, in exactly this format and with no other text:
Worst Round: <course name> - <layout name>
Date: <date>
Total Score: <total score>
Hole Scores: <comma-separated hole scores>"#
            }
            Self::AverageScore => {
                "Calculate the average of all total scores and respond with ONLY that number, rounded to one decimal place, with no other text."
            }
            Self::MostCommonCourse => {
                "Respond with ONLY the name of the course that appears most often in the rounds, with no other text."
            }
            Self::HoleScores => {
                r#"For every round, list the course, layout, date, and every hole score, one round per line, in this format:
<course name> - <layout name> (<date>): <comma-separated hole scores>"#
            }
            Self::Summary => {
                "Summarize the player's performance in 2-3 sentences. Mention holes that are consistently strong or weak if the hole scores show a pattern."
            }
            Self::General => {
                "Answer the question directly in no more than 3 sentences. Refer to individual hole scores only when they help answer the question."
            }
        }
    }
}

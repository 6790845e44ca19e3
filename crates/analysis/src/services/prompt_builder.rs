use crate::models::RawRound;

use super::{classifier, normalizer, sorter};

const PREAMBLE: &str =
    "You are analyzing a disc golf player's rounds. Use only the data provided below.";
const NO_SCORES: &str = "No scores available.";
const SCORES_MARKER: &str = "Here are the scores:";

pub struct PromptBuilder;

impl PromptBuilder {
    /// Builds the full analysis prompt for a question over a set of rounds.
    pub fn build(question: &str, rounds: &[RawRound]) -> String {
        let intent = classifier::classify(question);
        tracing::debug!(?intent, rounds = rounds.len(), "Classified question");

        let mut prompt = format!("{}\n\n{}\n\n", PREAMBLE, intent.instruction());

        if rounds.is_empty() {
            prompt.push_str(NO_SCORES);
            return prompt;
        }

        prompt.push_str(SCORES_MARKER);
        prompt.push('\n');
        for (index, round) in sorter::sort_by_total(rounds).into_iter().enumerate() {
            prompt.push_str(&normalizer::normalize(round).line(index + 1));
            prompt.push('\n');
        }
        prompt.push_str(&format!("\nUser question: \"{}\"", question));

        prompt
    }
}

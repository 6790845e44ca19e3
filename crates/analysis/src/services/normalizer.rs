use crate::models::round::hole_score_text;
use crate::models::{NormalizedRound, RawRound};

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_DATE: &str = "Unknown Date";

const DATE_FORMAT: &str = "%B %-d, %Y";

/// Turns a raw round into its display form. Missing or malformed fields fall
/// back to placeholders; this never fails.
pub fn normalize(round: &RawRound) -> NormalizedRound {
    let date = round
        .date
        .and_then(|ts| ts.to_date())
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    NormalizedRound {
        course_name: or_placeholder(round.course_name.as_deref()),
        layout_name: or_placeholder(round.layout_name.as_deref()),
        date,
        total_score: round
            .total_score
            .map(|t| t.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        score_to_par: round.score_to_par.unwrap_or(0.0),
        hole_scores: round
            .scores
            .as_ref()
            .map(|scores| scores.iter().map(hole_score_text).collect()),
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

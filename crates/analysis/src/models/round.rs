use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::timestamp::Timestamp;

/// A round as submitted by the client. Every field is optional and a field
/// carrying the wrong JSON type is read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawRound {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub layout_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub score_to_par: Option<f64>,
    /// Hole scores in play order. Any array is kept; entries are rendered
    /// as given.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<f64>>)]
    pub scores: Option<Vec<Value>>,
}

impl RawRound {
    /// Reads one element of the `rounds` array. Anything that is not an
    /// object degrades to a round with every field missing.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Display-ready form of a round, produced by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRound {
    pub course_name: String,
    pub layout_name: String,
    pub date: String,
    pub total_score: String,
    pub score_to_par: f64,
    pub hole_scores: Option<Vec<String>>,
}

impl NormalizedRound {
    /// Renders the single listing line for this round at a 1-based position.
    pub fn line(&self, position: usize) -> String {
        let holes = self
            .hole_scores
            .as_ref()
            .map(|scores| format!(" (Holes: {})", scores.join(", ")))
            .unwrap_or_default();

        format!(
            "Round {}: {} - {} on {}, Total Score: {}, Score to Par: {}{}",
            position,
            self.course_name,
            self.layout_name,
            self.date,
            self.total_score,
            self.score_to_par,
            holes
        )
    }
}

/// Text for one hole score entry: numbers as written, strings unquoted,
/// `null` as nothing.
pub fn hole_score_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrong_types_read_as_missing() {
        let round = RawRound::from_value(json!({
            "courseName": 12,
            "layoutName": null,
            "totalScore": "fifty",
            "scoreToPar": [],
            "scores": "3,4,3",
            "date": "2023-01-01"
        }));
        assert_eq!(round, RawRound::default());
    }

    #[test]
    fn test_non_object_element_is_empty_round() {
        assert_eq!(RawRound::from_value(json!("oops")), RawRound::default());
        assert_eq!(RawRound::from_value(json!(42)), RawRound::default());
    }

    #[test]
    fn test_scores_keep_mixed_entries() {
        let round = RawRound::from_value(json!({ "scores": [3, null, "x", 4.5] }));
        assert_eq!(round.scores, Some(vec![json!(3), json!(null), json!("x"), json!(4.5)]));
    }

    #[test]
    fn test_non_array_scores_are_missing() {
        for scores in [json!("3,4"), json!({ "1": 3 }), json!(3), json!(null)] {
            let round = RawRound::from_value(json!({ "scores": scores }));
            assert_eq!(round.scores, None);
        }
    }

    #[test]
    fn test_hole_score_text() {
        assert_eq!(hole_score_text(&json!(3)), "3");
        assert_eq!(hole_score_text(&json!(2.5)), "2.5");
        assert_eq!(hole_score_text(&json!(null)), "");
        assert_eq!(hole_score_text(&json!("DNF")), "DNF");
    }

    #[test]
    fn test_camel_case_fields() {
        let round = RawRound::from_value(json!({
            "courseName": "Oakwood",
            "layoutName": "Long Tees",
            "totalScore": 72,
            "scoreToPar": 18,
            "scores": [3, 4]
        }));
        assert_eq!(round.course_name.as_deref(), Some("Oakwood"));
        assert_eq!(round.layout_name.as_deref(), Some("Long Tees"));
        assert_eq!(round.total_score, Some(72.0));
        assert_eq!(round.score_to_par, Some(18.0));
        assert_eq!(round.scores, Some(vec![json!(3), json!(4)]));
    }

    #[test]
    fn test_line_without_holes() {
        let round = NormalizedRound {
            course_name: "Oakwood".to_string(),
            layout_name: "Main".to_string(),
            date: "January 1, 2023".to_string(),
            total_score: "54".to_string(),
            score_to_par: 0.0,
            hole_scores: None,
        };
        assert_eq!(
            round.line(1),
            "Round 1: Oakwood - Main on January 1, 2023, Total Score: 54, Score to Par: 0"
        );
    }

    #[test]
    fn test_line_with_holes() {
        let round = NormalizedRound {
            course_name: "Oakwood".to_string(),
            layout_name: "Main".to_string(),
            date: "Unknown Date".to_string(),
            total_score: "10".to_string(),
            score_to_par: -1.0,
            hole_scores: Some(vec!["3".to_string(), String::new(), "3".to_string()]),
        };
        assert_eq!(
            round.line(3),
            "Round 3: Oakwood - Main on Unknown Date, Total Score: 10, Score to Par: -1 (Holes: 3, , 3)"
        );
    }
}

use crate::models::RawRound;

/// Orders rounds by ascending total score without touching the input.
/// Rounds without a total rank last; ties keep their input order.
pub fn sort_by_total(rounds: &[RawRound]) -> Vec<&RawRound> {
    let mut sorted: Vec<&RawRound> = rounds.iter().collect();
    sorted.sort_by(|a, b| sort_key(a).total_cmp(&sort_key(b)));
    sorted
}

fn sort_key(round: &RawRound) -> f64 {
    round.total_score.unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(course: &str, total: Option<f64>) -> RawRound {
        RawRound {
            course_name: Some(course.to_string()),
            total_score: total,
            ..Default::default()
        }
    }

    fn courses(sorted: &[&RawRound]) -> Vec<String> {
        sorted
            .iter()
            .map(|r| r.course_name.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_ascending() {
        let rounds = vec![round("Oakwood", Some(72.0)), round("Maple Hill", Some(55.0))];
        let sorted = sort_by_total(&rounds);
        assert_eq!(courses(&sorted), vec!["Maple Hill", "Oakwood"]);
    }

    #[test]
    fn test_missing_totals_last_in_input_order() {
        let rounds = vec![
            round("a", None),
            round("b", Some(60.0)),
            round("c", None),
            round("d", Some(-3.0)),
            round("e", Some(1.0e9)),
        ];
        let sorted = sort_by_total(&rounds);
        assert_eq!(sorted.len(), rounds.len());
        assert_eq!(courses(&sorted), vec!["d", "b", "e", "a", "c"]);
    }

    #[test]
    fn test_stable_on_ties() {
        let rounds = vec![
            round("first", Some(54.0)),
            round("second", Some(54.0)),
            round("third", Some(50.0)),
        ];
        let sorted = sort_by_total(&rounds);
        assert_eq!(courses(&sorted), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_input_untouched() {
        let rounds = vec![round("x", Some(9.0)), round("y", Some(1.0))];
        let before = rounds.clone();
        let _ = sort_by_total(&rounds);
        assert_eq!(rounds, before);
    }

    #[test]
    fn test_empty() {
        assert!(sort_by_total(&[]).is_empty());
    }
}

use crate::model::{Difficulty, Room};

/// Selector value that disables the category filter.
pub const ALL_SELECTOR: &str = "ALL";

/// Narrows `rooms` by a single selector.
///
/// `"ALL"` keeps everything, a difficulty label (`Easy`, `Medium`, `Hard`)
/// keeps rooms of that difficulty, and anything else is matched exactly
/// against room tags. A selector that matches nothing yields an empty list.
pub fn filter_by_selector<'a>(rooms: &[&'a Room], selector: &str) -> Vec<&'a Room> {
    if selector == ALL_SELECTOR {
        return rooms.to_vec();
    }

    match Difficulty::from_label(selector) {
        Some(difficulty) => rooms
            .iter()
            .copied()
            .filter(|r| r.difficulty == difficulty)
            .collect(),
        None => rooms
            .iter()
            .copied()
            .filter(|r| r.tags.iter().any(|tag| tag == selector))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{room, titles};

    fn sample() -> Vec<Room> {
        vec![
            room("Mansion", Difficulty::Hard, 4.8, 127, &["Horror", "Co-op"]),
            room("Prison", Difficulty::Medium, 4.5, 45, &["Action"]),
            room("Lab", Difficulty::Easy, 4.7, 92, &["Puzzle"]),
            room("Temple", Difficulty::Medium, 4.6, 201, &["Adventure", "Co-op"]),
        ]
    }

    #[test]
    fn all_is_identity() {
        let rooms = sample();
        let refs: Vec<&Room> = rooms.iter().collect();
        let result = filter_by_selector(&refs, ALL_SELECTOR);
        assert_eq!(titles(&result), titles(&refs));
    }

    #[test]
    fn filters_by_difficulty_preserving_order() {
        let rooms = sample();
        let refs: Vec<&Room> = rooms.iter().collect();
        let result = filter_by_selector(&refs, "Medium");
        assert_eq!(titles(&result), vec!["Prison", "Temple"]);
    }

    #[test]
    fn filters_by_exact_tag() {
        let rooms = sample();
        let refs: Vec<&Room> = rooms.iter().collect();
        assert_eq!(titles(&filter_by_selector(&refs, "Co-op")), vec!["Mansion", "Temple"]);
        assert!(filter_by_selector(&refs, "co-op").is_empty());
        assert!(filter_by_selector(&refs, "Coop").is_empty());
    }

    #[test]
    fn unknown_selector_is_empty_not_error() {
        let rooms = sample();
        let refs: Vec<&Room> = rooms.iter().collect();
        assert!(filter_by_selector(&refs, "Racing").is_empty());
        assert!(filter_by_selector(&refs, "").is_empty());
    }

    #[test]
    fn difficulty_label_wins_over_tag_of_same_name() {
        let rooms = vec![
            room("Tagged", Difficulty::Easy, 1.0, 1, &["Hard"]),
            room("Actual", Difficulty::Hard, 1.0, 1, &[]),
        ];
        let refs: Vec<&Room> = rooms.iter().collect();
        assert_eq!(titles(&filter_by_selector(&refs, "Hard")), vec!["Actual"]);
    }

    #[test]
    fn empty_collection() {
        assert!(filter_by_selector(&[], "Easy").is_empty());
        assert!(filter_by_selector(&[], ALL_SELECTOR).is_empty());
    }
}

use crate::model::Answer;
use std::collections::HashSet;

/// Checkbox list over the shuffled display order. Every toggle re-emits the
/// full selection.
pub fn ui(
    ui: &mut egui::Ui,
    options: &[String],
    order: &[usize],
    checked: &mut Vec<bool>,
) -> Option<Answer> {
    let mut changed = false;
    for &idx in order {
        let (Some(option), Some(flag)) = (options.get(idx), checked.get_mut(idx)) else {
            continue;
        };
        if ui.checkbox(flag, option).changed() {
            changed = true;
        }
    }
    if changed {
        let selected: Vec<String> = checked
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .filter_map(|(i, _)| options.get(i).cloned())
            .collect();
        Some(Answer::Texts(selected))
    } else {
        None
    }
}

/// Correct iff the selection has the same size as the correct set and every
/// picked value belongs to it. Order-independent.
pub fn score(options: &[String], correct: &[usize], answer: &Answer) -> bool {
    let Answer::Texts(picked) = answer else {
        return false;
    };
    if picked.len() != correct.len() {
        return false;
    }
    let correct_set: HashSet<&String> = correct.iter().filter_map(|&i| options.get(i)).collect();
    picked.iter().all(|p| correct_set.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Vec<String> {
        vec!["A".into(), "B".into(), "C".into(), "D".into()]
    }

    #[test]
    fn selection_is_order_independent() {
        let a = Answer::Texts(vec!["C".into(), "A".into()]);
        assert!(score(&abcd(), &[0, 2], &a));
    }

    #[test]
    fn wrong_member_fails_even_with_right_count() {
        let a = Answer::Texts(vec!["A".into(), "B".into()]);
        assert!(!score(&abcd(), &[0, 2], &a));
    }

    #[test]
    fn subset_and_superset_both_fail() {
        assert!(!score(&abcd(), &[0, 2], &Answer::Texts(vec!["A".into()])));
        assert!(!score(
            &abcd(),
            &[0, 2],
            &Answer::Texts(vec!["A".into(), "C".into(), "D".into()])
        ));
    }

    #[test]
    fn duplicates_follow_membership_semantics() {
        // Length plus set membership, so a duplicated correct value passes.
        // Checkboxes cannot produce duplicates; this only matters for
        // imported attempt data.
        let a = Answer::Texts(vec!["A".into(), "A".into()]);
        assert!(score(&abcd(), &[0, 2], &a));
    }
}

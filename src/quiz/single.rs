use crate::model::Answer;

/// Radio list over the shuffled display order. Emits the picked option string
/// on every change.
pub fn ui(
    ui: &mut egui::Ui,
    options: &[String],
    order: &[usize],
    selected: &mut Option<usize>,
) -> Option<Answer> {
    let mut emitted = None;
    for &idx in order {
        let Some(option) = options.get(idx) else {
            continue;
        };
        if ui.radio_value(selected, Some(idx), option).changed() {
            emitted = Some(Answer::Text(option.clone()));
        }
    }
    emitted
}

/// Correct iff the answer is the option text at the stored correct index.
pub fn score(options: &[String], correct: &[usize], answer: &Answer) -> bool {
    let Answer::Text(picked) = answer else {
        return false;
    };
    correct
        .first()
        .and_then(|&i| options.get(i))
        .is_some_and(|option| option == picked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Call 101".into(), "Hide".into(), "Panic".into()]
    }

    #[test]
    fn matching_option_text_is_correct() {
        assert!(score(&options(), &[0], &Answer::Text("Call 101".into())));
    }

    #[test]
    fn other_option_or_free_text_is_incorrect() {
        assert!(!score(&options(), &[0], &Answer::Text("Hide".into())));
        assert!(!score(&options(), &[0], &Answer::Text("call 101".into())));
    }

    #[test]
    fn out_of_range_correct_index_never_panics() {
        assert!(!score(&options(), &[9], &Answer::Text("Call 101".into())));
        assert!(!score(&options(), &[], &Answer::Text("Call 101".into())));
    }
}

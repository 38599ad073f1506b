use crate::model::Answer;

pub fn ui(ui: &mut egui::Ui, picked: &mut Option<bool>) -> Option<Answer> {
    let mut emitted = None;
    if ui.radio_value(picked, Some(true), "True").changed() {
        emitted = Some(Answer::Flag(true));
    }
    if ui.radio_value(picked, Some(false), "False").changed() {
        emitted = Some(Answer::Flag(false));
    }
    emitted
}

/// `correct[0] == 0` encodes "true is the right answer".
pub fn score(correct: &[usize], answer: &Answer) -> bool {
    let Answer::Flag(value) = answer else {
        return false;
    };
    (correct.first() == Some(&0)) == *value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_means_true_is_correct() {
        assert!(score(&[0], &Answer::Flag(true)));
        assert!(!score(&[0], &Answer::Flag(false)));
    }

    #[test]
    fn one_means_false_is_correct() {
        assert!(score(&[1], &Answer::Flag(false)));
        assert!(!score(&[1], &Answer::Flag(true)));
    }

    #[test]
    fn missing_correctness_data_rejects_true() {
        assert!(score(&[], &Answer::Flag(false)));
        assert!(!score(&[], &Answer::Flag(true)));
    }
}

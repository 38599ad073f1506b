use crate::model::Answer;

/// The steps are listed in the user's current order with move up/down
/// controls. Each move re-emits the full order of canonical indices; nothing
/// is emitted until the user has rearranged at least once.
pub fn ui(
    ui: &mut egui::Ui,
    steps: &[String],
    order: &mut Vec<usize>,
    touched: &mut bool,
) -> Option<Answer> {
    ui.label("Arrange the steps into the correct order:");
    ui.add_space(4.0);

    let mut swap: Option<(usize, usize)> = None;
    for (pos, &step_idx) in order.iter().enumerate() {
        let Some(step) = steps.get(step_idx) else {
            continue;
        };
        ui.horizontal(|ui| {
            if ui
                .add_enabled(pos > 0, egui::Button::new("⬆").small())
                .clicked()
            {
                swap = Some((pos, pos - 1));
            }
            if ui
                .add_enabled(pos + 1 < order.len(), egui::Button::new("⬇").small())
                .clicked()
            {
                swap = Some((pos, pos + 1));
            }
            ui.label(format!("{}. {}", pos + 1, step));
        });
    }

    if let Some((a, b)) = swap {
        order.swap(a, b);
        *touched = true;
        Some(Answer::Order(order.clone()))
    } else {
        None
    }
}

/// Correct iff the submitted order is exactly the canonical `[0..n)`.
pub fn score(steps: &[String], answer: &Answer) -> bool {
    let Answer::Order(order) = answer else {
        return false;
    };
    order.len() == steps.len() && order.iter().copied().eq(0..steps.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Vec<String> {
        vec!["Raise alarm".into(), "Evacuate".into(), "Call 101".into()]
    }

    #[test]
    fn canonical_order_is_correct() {
        assert!(score(&steps(), &Answer::Order(vec![0, 1, 2])));
    }

    #[test]
    fn any_single_transposition_is_incorrect() {
        assert!(!score(&steps(), &Answer::Order(vec![1, 0, 2])));
        assert!(!score(&steps(), &Answer::Order(vec![0, 2, 1])));
        assert!(!score(&steps(), &Answer::Order(vec![2, 1, 0])));
    }

    #[test]
    fn wrong_length_is_incorrect() {
        assert!(!score(&steps(), &Answer::Order(vec![0, 1])));
        assert!(!score(&steps(), &Answer::Order(vec![0, 1, 2, 3])));
    }
}

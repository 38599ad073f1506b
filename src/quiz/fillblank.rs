use crate::model::Answer;

/// Single-line input; emits the trimmed text on every edit that leaves it
/// non-empty.
pub fn ui(ui: &mut egui::Ui, input: &mut String) -> Option<Answer> {
    ui.label("Type your answer:");
    let response = ui.add(
        egui::TextEdit::singleline(input)
            .hint_text("Your answer")
            .desired_width(280.0),
    );
    if response.changed() && !input.trim().is_empty() {
        Some(Answer::Text(input.trim().to_string()))
    } else {
        None
    }
}

/// Case-insensitive membership of the trimmed answer in the accepted list.
pub fn score(correct_answers: &[String], answer: &Answer) -> bool {
    let Answer::Text(text) = answer else {
        return false;
    };
    let given = text.trim().to_lowercase();
    correct_answers.iter().any(|c| c.to_lowercase() == given)
}

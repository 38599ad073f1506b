use crate::app::LearnApp;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

pub fn ui_quiz_unavailable(app: &mut LearnApp, ctx: &Context) {
    let (title, max_attempts, last_score) = match app
        .unavailable_quiz
        .as_deref()
        .and_then(|id| app.store.quiz(id))
    {
        Some(quiz) => {
            let last = app
                .current_user_id
                .as_deref()
                .and_then(|u| app.store.last_result(u, &quiz.id))
                .map(|a| a.result.score);
            (quiz.title.clone(), quiz.max_attempts, last)
        }
        None => {
            app.back_to_lesson();
            return;
        }
    };

    centered_panel(ctx, 220.0, 440.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(&title);
            ui.add_space(10.0);
            ui.label(RichText::new("🔒 No attempts left").size(20.0));
            ui.label(format!(
                "You have used all {max_attempts} allowed attempts."
            ));
            if let Some(score) = last_score {
                ui.small(format!("Your last score was {score}%."));
            }
            ui.label("Ask an administrator to reset your attempts.");
            ui.add_space(16.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 340.0);
            if ui
                .add_sized([btn_w, 36.0], Button::new("🔙 Back to lesson"))
                .clicked()
            {
                app.back_to_lesson();
            }
        });
    });
}

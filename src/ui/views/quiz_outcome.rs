use crate::app::LearnApp;
use crate::quiz::policy;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

pub fn ui_quiz_outcome(app: &mut LearnApp, ctx: &Context) {
    let Some(outcome) = app.outcome.as_ref() else {
        app.back_to_lesson();
        return;
    };
    let quiz_id = outcome.quiz_id.clone();
    let title = outcome.quiz_title.clone();
    let passing = outcome.passing_score;
    let score = outcome.result.score;
    let passed = outcome.result.passed;
    let seconds = outcome.result.time_spent / 1000;

    let retake_open = app
        .store
        .quiz(&quiz_id)
        .zip(app.current_user_id.as_deref())
        .is_some_and(|(quiz, user_id)| {
            policy::attempt_allowed(quiz.max_attempts, app.store.attempts_used(user_id, &quiz_id))
        });

    let now = ctx.input(|i| i.time);
    centered_panel(ctx, 260.0, 460.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(&title);
            ui.add_space(10.0);
            if passed {
                ui.label(
                    RichText::new(format!("🎉 Passed with {score}%"))
                        .size(22.0)
                        .color(egui::Color32::DARK_GREEN),
                );
            } else {
                ui.label(
                    RichText::new(format!("❌ {score}% (needs {passing}%)"))
                        .size(22.0)
                        .color(ui.visuals().error_fg_color),
                );
            }
            ui.small(format!("Time spent: {}:{:02}", seconds / 60, seconds % 60));
            ui.add_space(16.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 340.0);
            if !passed && retake_open {
                if ui
                    .add_sized([btn_w, 36.0], Button::new("🔄 Try again"))
                    .clicked()
                {
                    app.retake_quiz(now);
                    return;
                }
                ui.add_space(5.0);
            }
            if ui
                .add_sized([btn_w, 36.0], Button::new("🔙 Back to lesson"))
                .clicked()
            {
                app.back_to_lesson();
            }
        });
    });
}

use crate::app::LearnApp;
use crate::ui::layout::simple_panel;
use egui::{Button, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut LearnApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    // Header facts first, so the session borrow does not cross into the panel.
    let Some((title, index, count, is_last, answered, remaining)) =
        app.session.as_ref().map(|s| {
            (
                s.quiz().title.clone(),
                s.current_index(),
                s.question_count(),
                s.is_last(),
                s.current_answered(),
                s.remaining_secs(now),
            )
        })
    else {
        // update() already resets the state; nothing to draw this frame.
        return;
    };

    let mut advance = false;
    let mut finish = false;
    let mut abandon = false;

    simple_panel(ctx, 720.0, |ui| {
        ui.horizontal(|ui| {
            ui.heading(&title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(secs) = remaining {
                    let text = format!("⏱ {}:{:02}", secs / 60, secs % 60);
                    let label = if secs <= 10 {
                        RichText::new(text).color(ui.visuals().error_fg_color).strong()
                    } else {
                        RichText::new(text)
                    };
                    ui.label(label);
                }
            });
        });
        ui.label(format!("Question {} of {}", index + 1, count));
        ui.separator();
        ui.add_space(8.0);

        ScrollArea::vertical().show(ui, |ui| {
            ui.strong(app.session.as_ref().map(|s| s.current_question().text.clone()).unwrap_or_default());
            ui.add_space(8.0);
            if let Some(session) = app.session.as_mut() {
                session.show_current(ui);
            }
        });

        ui.add_space(14.0);
        ui.horizontal(|ui| {
            let next_label = if is_last { "Finish ✅" } else { "Next ➡" };
            if ui
                .add_enabled(answered, Button::new(next_label).min_size(egui::vec2(120.0, 32.0)))
                .clicked()
            {
                if is_last {
                    finish = true;
                } else {
                    advance = true;
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✖ Abandon").clicked() {
                    abandon = true;
                }
            });
        });
    });

    if advance {
        if let Some(session) = app.session.as_mut() {
            session.advance();
        }
    }
    if finish {
        app.finish_quiz(now);
    }
    if abandon {
        app.abandon_quiz();
    }
}

use crate::app::LearnApp;
use crate::ui::layout::simple_panel;
use egui::{Button, Context, RichText, ScrollArea};

pub fn ui_course(app: &mut LearnApp, ctx: &Context) {
    let Some(course) = app
        .current_course_id
        .as_deref()
        .and_then(|id| app.store.course(id))
        .cloned()
    else {
        app.goto_home();
        return;
    };

    simple_panel(ctx, 640.0, |ui| {
        ui.heading(&course.title);
        if !course.description.is_empty() {
            ui.label(&course.description);
        }
        if course.lock_until_passed {
            ui.small("Lessons unlock in order.");
        }
        ui.add_space(10.0);

        let mut open: Option<String> = None;
        ScrollArea::vertical().show(ui, |ui| {
            for (i, lesson) in course.lessons.iter().enumerate() {
                let locked = app.lesson_locked(&course, i);
                let completed = app
                    .lesson_progress(&course.id, &lesson.id)
                    .map(|p| p.completed)
                    .unwrap_or(false);
                ui.horizontal(|ui| {
                    let marker = if completed {
                        "✅"
                    } else if locked {
                        "🔒"
                    } else {
                        "📖"
                    };
                    ui.label(format!("{marker} {}. {}", i + 1, lesson.title));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add_enabled(!locked, Button::new("Open"))
                            .clicked()
                        {
                            open = Some(lesson.id.clone());
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });
        if let Some(id) = open {
            app.open_lesson(&id);
        }

        ui.add_space(12.0);
        if ui.button("🔙 All courses").clicked() {
            app.goto_home();
        }
        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).color(ui.visuals().warn_fg_color));
        }
    });
}

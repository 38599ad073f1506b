use crate::app::LearnApp;
use crate::shortcode::{self, Segment};
use crate::ui::layout::simple_panel;
use egui::{Button, Context, RichText, ScrollArea};
use egui_commonmark::CommonMarkViewer;

pub fn ui_lesson(app: &mut LearnApp, ctx: &Context) {
    let Some((course_id, lesson)) = app.current_course_id.as_deref().and_then(|cid| {
        let course = app.store.course(cid)?;
        let lid = app.current_lesson_id.as_deref()?;
        let lesson = course.lessons.iter().find(|l| l.id == lid)?;
        Some((cid.to_string(), lesson.clone()))
    }) else {
        app.back_to_course();
        return;
    };

    let now = ctx.input(|i| i.time);
    let segments = shortcode::segments(&lesson.content);
    let has_quizzes = segments.iter().any(|s| matches!(s, Segment::Quiz(_)));
    let completed = app
        .lesson_progress(&course_id, &lesson.id)
        .map(|p| p.completed)
        .unwrap_or(false);

    simple_panel(ctx, 720.0, |ui| {
        ui.horizontal(|ui| {
            ui.heading(&lesson.title);
            if completed {
                ui.label(RichText::new("✅ completed").color(egui::Color32::DARK_GREEN));
            }
        });
        ui.add_space(8.0);

        let mut start: Option<String> = None;
        ScrollArea::vertical().show(ui, |ui| {
            for segment in &segments {
                match segment {
                    Segment::Text(text) => {
                        CommonMarkViewer::new().show(ui, &mut app.cm_cache, text);
                    }
                    Segment::Quiz(id) => quiz_card(app, ui, id, &mut start),
                    Segment::Image(path) => {
                        media_card(ui, "🖼", "Image", path);
                    }
                    Segment::Video(path) => {
                        media_card(ui, "🎬", "Video", path);
                    }
                    Segment::File(path) => {
                        media_card(ui, "📄", "Attachment", path);
                    }
                }
                ui.add_space(6.0);
            }

            if !has_quizzes && !completed {
                ui.add_space(8.0);
                if ui.button("✅ Mark lesson as completed").clicked() {
                    app.mark_lesson_read(&course_id, &lesson.id);
                }
            }
        });
        if let Some(id) = start {
            app.open_quiz(&id, now);
        }

        ui.add_space(12.0);
        if ui.button("🔙 Back to course").clicked() {
            app.back_to_course();
        }
        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).color(ui.visuals().warn_fg_color));
        }
    });
}

/// Embedded quiz block: title, attempt status, last score, start button.
fn quiz_card(app: &LearnApp, ui: &mut egui::Ui, quiz_id: &str, start: &mut Option<String>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        let Some(quiz) = app.store.quiz(quiz_id) else {
            ui.label(format!("⚠ Quiz {quiz_id} is missing"));
            return;
        };
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong(format!("📝 {}", quiz.title));
                let mut info = format!("{} questions", quiz.questions.len());
                if quiz.time_limit > 0 {
                    info.push_str(&format!(", {} s limit", quiz.time_limit));
                }
                ui.small(info);
                if let Some(user_id) = app.current_user_id.as_deref() {
                    let used = app.store.attempts_used(user_id, quiz_id);
                    if quiz.max_attempts > 0 {
                        ui.small(format!("Attempts: {used}/{}", quiz.max_attempts));
                    }
                    if let Some(last) = app.store.last_result(user_id, quiz_id) {
                        let verdict = if last.result.passed { "passed" } else { "failed" };
                        ui.small(format!("Last score: {}% ({verdict})", last.result.score));
                    }
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(Button::new("▶ Start quiz")).clicked() {
                    *start = Some(quiz_id.to_string());
                }
            });
        });
    });
}

fn media_card(ui: &mut egui::Ui, icon: &str, kind: &str, path: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(format!("{icon} {kind}: {path}"));
    });
}

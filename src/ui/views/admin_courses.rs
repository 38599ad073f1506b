use crate::app::LearnApp;
use crate::model::AppState;
use crate::ui::helpers::{admin_tabs, message_line};
use crate::ui::layout::simple_panel;
use egui::{Button, Context, RichText, ScrollArea, TextEdit};

pub fn ui_admin_courses(app: &mut LearnApp, ctx: &Context) {
    simple_panel(ctx, 760.0, |ui| {
        ui.heading("Administration");
        admin_tabs(app, ui, AppState::AdminCourses);
        ui.add_space(8.0);

        if app.course_editor.is_some() {
            editor_form(app, ui);
        } else {
            course_list(app, ui);
        }
        message_line(app, ui);
    });
}

fn course_list(app: &mut LearnApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if ui.button("➕ New course").clicked() {
            app.edit_course(None);
        }
        if ui.button("⬇ Export JSON").clicked() {
            let json = app.store.export_courses_json();
            app.message = match crate::storage::download_file(
                "courses.json",
                &json,
                "application/json",
            ) {
                Ok(()) => "Courses exported to courses.json".into(),
                Err(e) => e,
            };
        }
    });
    ui.add_space(8.0);

    let mut edit: Option<String> = None;
    let mut delete: Option<String> = None;
    ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
        for course in &app.store.courses {
            ui.horizontal(|ui| {
                ui.strong(&course.title);
                ui.small(format!("({} lessons)", course.lessons.len()));
                if course.lock_until_passed {
                    ui.small("sequential");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🗑 Delete").clicked() {
                        delete = Some(course.id.clone());
                    }
                    if ui.button("✏ Edit").clicked() {
                        edit = Some(course.id.clone());
                    }
                });
            });
            ui.add_space(2.0);
        }
    });
    if let Some(id) = edit {
        app.edit_course(Some(&id));
    }
    if let Some(id) = delete {
        app.store.delete_course(&id);
        app.message = "Course deleted".into();
    }

    ui.add_space(12.0);
    ui.collapsing("Import courses from JSON", |ui| {
        ui.add(
            TextEdit::multiline(&mut app.import_buffer)
                .hint_text("Paste an exported courses.json here")
                .code_editor()
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        if ui.button("⬆ Import (replaces all courses)").clicked() {
            match app.store.import_courses_json(&app.import_buffer) {
                Ok(n) => {
                    app.message = format!("Imported {n} courses");
                    app.import_buffer.clear();
                }
                Err(e) => app.message = e,
            }
        }
    });
}

fn editor_form(app: &mut LearnApp, ui: &mut egui::Ui) {
    let mut save = false;
    let mut cancel = false;
    {
        let editor = app.course_editor.as_mut().expect("editor open");
        ui.strong(match &editor.id {
            Some(id) => format!("Editing course {id}"),
            None => "New course".to_string(),
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Title:");
            ui.add(TextEdit::singleline(&mut editor.title).desired_width(320.0));
        });
        ui.horizontal(|ui| {
            ui.label("Description:");
            ui.add(TextEdit::singleline(&mut editor.description).desired_width(320.0));
        });
        ui.checkbox(
            &mut editor.lock_until_passed,
            "Lessons unlock in order (previous one must be completed)",
        );
        ui.add_space(8.0);

        ui.strong("Lessons");
        ui.small("Content is markdown; embed quizzes and media with [quiz:id], [img:path], [video:path], [file:path].");
        let mut remove: Option<usize> = None;
        ScrollArea::vertical().max_height(280.0).show(ui, |ui| {
            for (i, lesson) in editor.lessons.iter_mut().enumerate() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(format!("{}.", i + 1));
                        ui.add(
                            TextEdit::singleline(&mut lesson.title)
                                .hint_text("Lesson title")
                                .desired_width(300.0),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("🗑").clicked() {
                                    remove = Some(i);
                                }
                            },
                        );
                    });
                    ui.add(
                        TextEdit::multiline(&mut lesson.content)
                            .hint_text("Lesson content (markdown)")
                            .desired_rows(4)
                            .desired_width(f32::INFINITY),
                    );
                });
                ui.add_space(4.0);
            }
        });
        if let Some(i) = remove {
            editor.lessons.remove(i);
        }
        if ui.button("➕ Add lesson").clicked() {
            editor.add_lesson();
        }

        if !editor.error.is_empty() {
            ui.add_space(6.0);
            ui.label(RichText::new(&editor.error).color(ui.visuals().error_fg_color));
        }
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.add(Button::new("💾 Save course")).clicked() {
                save = true;
            }
            if ui.button("Cancel").clicked() {
                cancel = true;
            }
        });
    }
    if save {
        app.save_course_editor();
    }
    if cancel {
        app.course_editor = None;
    }
}

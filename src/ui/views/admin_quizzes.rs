use crate::app::LearnApp;
use crate::model::AppState;
use crate::ui::helpers::{admin_tabs, message_line};
use crate::ui::layout::simple_panel;
use egui::{Button, Context, RichText, ScrollArea, TextEdit};

pub fn ui_admin_quizzes(app: &mut LearnApp, ctx: &Context) {
    simple_panel(ctx, 760.0, |ui| {
        ui.heading("Administration");
        admin_tabs(app, ui, AppState::AdminQuizzes);
        ui.add_space(8.0);

        if app.quiz_editor.is_some() {
            editor_form(app, ui);
        } else {
            quiz_list(app, ui);
        }
        message_line(app, ui);
    });
}

fn quiz_list(app: &mut LearnApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if ui.button("➕ New quiz").clicked() {
            app.edit_quiz(None);
        }
        if ui.button("⬇ Export JSON").clicked() {
            let json = app.store.export_quizzes_json();
            app.message = match crate::storage::download_file(
                "quizzes.json",
                &json,
                "application/json",
            ) {
                Ok(()) => "Quizzes exported to quizzes.json".into(),
                Err(e) => e,
            };
        }
    });
    ui.add_space(8.0);

    let mut edit: Option<String> = None;
    let mut delete: Option<String> = None;
    ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
        for quiz in &app.store.quizzes {
            ui.horizontal(|ui| {
                ui.strong(&quiz.title);
                if !quiz.category.is_empty() {
                    ui.small(format!("[{}]", quiz.category));
                }
                ui.small(format!("{} questions", quiz.questions.len()));
                if quiz.max_attempts > 0 {
                    ui.small(format!("max {} attempts", quiz.max_attempts));
                }
                if quiz.time_limit > 0 {
                    ui.small(format!("{} s", quiz.time_limit));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🗑 Delete").clicked() {
                        delete = Some(quiz.id.clone());
                    }
                    if ui.button("✏ Edit").clicked() {
                        edit = Some(quiz.id.clone());
                    }
                });
            });
            ui.add_space(2.0);
        }
    });
    if let Some(id) = edit {
        app.edit_quiz(Some(&id));
    }
    if let Some(id) = delete {
        app.store.delete_quiz(&id);
        app.message = "Quiz deleted".into();
    }

    ui.add_space(12.0);
    ui.collapsing("Import quizzes from JSON", |ui| {
        ui.add(
            TextEdit::multiline(&mut app.import_buffer)
                .hint_text("Paste an exported quizzes.json here")
                .code_editor()
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        if ui.button("⬆ Import (replaces all quizzes)").clicked() {
            match app.store.import_quizzes_json(&app.import_buffer) {
                Ok(n) => {
                    app.message = format!("Imported {n} quizzes");
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
        let editor = app.quiz_editor.as_mut().expect("editor open");
        ui.strong(match &editor.id {
            Some(id) => format!("Editing quiz {id}"),
            None => "New quiz".to_string(),
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Title:");
            ui.add(TextEdit::singleline(&mut editor.title).desired_width(300.0));
            ui.label("Category:");
            ui.add(TextEdit::singleline(&mut editor.category).desired_width(140.0));
        });
        ui.horizontal(|ui| {
            ui.label("Time limit (s, 0 = none):");
            ui.add(TextEdit::singleline(&mut editor.time_limit).desired_width(60.0));
            ui.label("Max attempts (0 = unlimited):");
            ui.add(TextEdit::singleline(&mut editor.max_attempts).desired_width(60.0));
            ui.label("Passing score (%):");
            ui.add(TextEdit::singleline(&mut editor.passing_score).desired_width(60.0));
        });
        ui.checkbox(&mut editor.shuffle, "Shuffle answer options");
        ui.add_space(8.0);

        ui.strong("Questions (JSON)");
        ui.small("Same format as the quiz export; saving validates it.");
        ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
            ui.add(
                TextEdit::multiline(&mut editor.questions_json)
                    .code_editor()
                    .desired_rows(14)
                    .desired_width(f32::INFINITY),
            );
        });

        if !editor.error.is_empty() {
            ui.add_space(6.0);
            ui.label(RichText::new(&editor.error).color(ui.visuals().error_fg_color));
        }
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.add(Button::new("💾 Save quiz")).clicked() {
                save = true;
            }
            if ui.button("Cancel").clicked() {
                cancel = true;
            }
        });
    }
    if save {
        app.save_quiz_editor();
    }
    if cancel {
        app.quiz_editor = None;
    }
}

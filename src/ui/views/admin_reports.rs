use crate::app::LearnApp;
use crate::model::AppState;
use crate::ui::helpers::{admin_tabs, message_line};
use crate::ui::layout::simple_panel;
use chrono::TimeZone;
use egui::{Context, RichText, ScrollArea, TextEdit};

pub fn ui_admin_reports(app: &mut LearnApp, ctx: &Context) {
    simple_panel(ctx, 820.0, |ui| {
        ui.heading("Administration");
        admin_tabs(app, ui, AppState::AdminReports);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("➕ New user").clicked() {
                app.edit_user(None);
            }
            if ui.button("⬇ Export JSON").clicked() {
                app.export_report_json();
            }
            if ui.button("⬇ Export CSV").clicked() {
                app.export_report_csv();
            }
        });
        ui.add_space(8.0);

        if app.user_editor.is_some() {
            user_form(app, ui);
            ui.add_space(8.0);
        }

        let stats = app.all_user_stats();
        if stats.is_empty() {
            ui.label("No registered users yet.");
            message_line(app, ui);
            return;
        }

        let mut reset: Option<(String, String)> = None;
        let mut delete: Option<String> = None;
        let mut edit: Option<String> = None;
        ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("user_stats")
                .num_columns(7)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Name");
                    ui.strong("Department");
                    ui.strong("Lessons");
                    ui.strong("Avg score");
                    ui.strong("Courses done");
                    ui.strong("Last activity");
                    ui.strong("");
                    ui.end_row();
                    for row in &stats {
                        ui.label(&row.name);
                        ui.label(&row.department);
                        ui.label(format!(
                            "{}/{} ({}%)",
                            row.completed_lessons, row.total_lessons, row.completion_rate
                        ));
                        ui.label(format!("{}%", row.average_score));
                        ui.label(row.courses_completed.to_string());
                        ui.label(row.last_activity.map(format_day).unwrap_or_default());
                        ui.horizontal(|ui| {
                            if ui.button("✏").on_hover_text("Edit user").clicked() {
                                edit = Some(row.user_id.clone());
                            }
                            if ui.button("🗑").on_hover_text("Delete user").clicked() {
                                delete = Some(row.user_id.clone());
                            }
                        });
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            ui.collapsing("Attempt counters", |ui| {
                for row in &stats {
                    let Some(per_quiz) = app.store.results.get(&row.user_id) else {
                        continue;
                    };
                    for (quiz_id, attempts) in per_quiz {
                        if attempts.is_empty() {
                            continue;
                        }
                        let title = app
                            .store
                            .quiz(quiz_id)
                            .map(|q| q.title.clone())
                            .unwrap_or_else(|| quiz_id.clone());
                        ui.horizontal(|ui| {
                            ui.label(format!(
                                "{}, {title}: {} attempts",
                                row.name,
                                attempts.len()
                            ));
                            if ui.button("Reset").clicked() {
                                reset = Some((row.user_id.clone(), quiz_id.clone()));
                            }
                        });
                    }
                }
            });
        });
        if let Some((user_id, quiz_id)) = reset {
            app.store.reset_attempts(&user_id, &quiz_id);
            app.message = "Attempts reset".into();
        }
        if let Some(user_id) = edit {
            app.edit_user(Some(&user_id));
        }
        if let Some(user_id) = delete {
            app.delete_user(&user_id);
            app.message = "User deleted".into();
        }
        message_line(app, ui);
    });
}

fn user_form(app: &mut LearnApp, ui: &mut egui::Ui) {
    let mut save = false;
    let mut cancel = false;
    {
        let editor = app.user_editor.as_mut().expect("editor open");
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(match &editor.id {
                Some(_) => "Edit user",
                None => "New user",
            });
            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.add(TextEdit::singleline(&mut editor.name).desired_width(200.0));
                ui.label("Department:");
                ui.add(TextEdit::singleline(&mut editor.department).desired_width(160.0));
                if ui.button("💾 Save").clicked() {
                    save = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
            if !editor.error.is_empty() {
                ui.label(RichText::new(&editor.error).color(ui.visuals().error_fg_color));
            }
        });
    }
    if save {
        app.save_user_editor();
    }
    if cancel {
        app.user_editor = None;
    }
}

fn format_day(millis: i64) -> String {
    chrono::Utc
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

use crate::app::LearnApp;
use crate::ui::layout::simple_panel;
use egui::{Button, Context, RichText, ScrollArea};

pub fn ui_home(app: &mut LearnApp, ctx: &Context) {
    simple_panel(ctx, 640.0, |ui| {
        ui.heading("Courses");
        ui.add_space(8.0);

        if app.store.courses.is_empty() {
            ui.label("No courses yet. An administrator has to create one.");
            return;
        }

        let mut open: Option<String> = None;
        ScrollArea::vertical().show(ui, |ui| {
            for course in &app.store.courses {
                let (done, total) = app.course_completion(course);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(&course.title);
                            if !course.description.is_empty() {
                                ui.label(&course.description);
                            }
                            ui.small(format!("{done}/{total} lessons completed"));
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.add(Button::new("Open ▶")).clicked() {
                                    open = Some(course.id.clone());
                                }
                            },
                        );
                    });
                });
                ui.add_space(6.0);
            }
        });
        if let Some(id) = open {
            app.open_course(&id);
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&app.message).color(ui.visuals().warn_fg_color));
        }
    });
}

use crate::app::LearnApp;
use crate::model::AppState;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText, TextEdit};

pub fn ui_register(app: &mut LearnApp, ctx: &Context) {
    centered_panel(ctx, 240.0, 420.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("New profile");
            ui.add_space(12.0);

            ui.add(
                TextEdit::singleline(&mut app.login_form.name)
                    .hint_text("Name")
                    .desired_width(280.0),
            );
            ui.add_space(6.0);
            ui.add(
                TextEdit::singleline(&mut app.login_form.department)
                    .hint_text("Department (optional)")
                    .desired_width(280.0),
            );
            ui.add_space(14.0);

            let mut submit = false;
            let mut back = false;
            ui.horizontal(|ui| {
                let half = (ui.available_width() - 8.0) / 2.0;
                if ui.add_sized([half, 34.0], Button::new("Create")).clicked() {
                    submit = true;
                }
                if ui.add_sized([half, 34.0], Button::new("🔙 Back")).clicked() {
                    back = true;
                }
            });
            if submit {
                let name = app.login_form.name.clone();
                let department = app.login_form.department.clone();
                app.register_user(&name, &department);
            }
            if back {
                app.message.clear();
                app.state = AppState::Login;
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new(&app.message).color(ui.visuals().warn_fg_color));
            }
        });
    });
}

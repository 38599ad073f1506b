use crate::app::LearnApp;
use crate::model::AppState;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText, TextEdit};

pub fn ui_admin_login(app: &mut LearnApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 380.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("Administrator");
            ui.add_space(12.0);

            ui.add(
                TextEdit::singleline(&mut app.login_form.admin_user)
                    .hint_text("User")
                    .desired_width(240.0),
            );
            ui.add_space(6.0);
            let pass = ui.add(
                TextEdit::singleline(&mut app.login_form.admin_pass)
                    .hint_text("Password")
                    .password(true)
                    .desired_width(240.0),
            );
            ui.add_space(14.0);

            let enter = pass.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let mut submit = enter;
            let mut back = false;
            ui.horizontal(|ui| {
                let half = (ui.available_width() - 8.0) / 2.0;
                if ui.add_sized([half, 34.0], Button::new("Sign in")).clicked() {
                    submit = true;
                }
                if ui.add_sized([half, 34.0], Button::new("🔙 Back")).clicked() {
                    back = true;
                }
            });
            if submit {
                app.try_admin_login();
            }
            if back {
                app.message.clear();
                app.state = if app.current_user_id.is_some() {
                    AppState::Home
                } else {
                    AppState::Login
                };
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new(&app.message).color(ui.visuals().error_fg_color));
            }
        });
    });
}

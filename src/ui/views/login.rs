use crate::app::LearnApp;
use crate::model::AppState;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

pub fn ui_login(app: &mut LearnApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("LearnLab");
            ui.label("Training courses and quizzes");
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 320.0);
            let mut picked: Option<String> = None;
            for user in &app.store.users {
                let label = if user.department.is_empty() {
                    user.name.clone()
                } else {
                    format!("{} ({})", user.name, user.department)
                };
                if ui.add_sized([btn_w, 32.0], Button::new(label)).clicked() {
                    picked = Some(user.id.clone());
                }
                ui.add_space(4.0);
            }
            if let Some(id) = picked {
                app.sign_in(&id);
                return;
            }

            ui.add_space(8.0);
            if ui
                .add_sized([btn_w, 36.0], Button::new("➕ New profile"))
                .clicked()
            {
                app.message.clear();
                app.state = AppState::Register;
            }
            ui.add_space(4.0);
            if ui.add_sized([btn_w, 28.0], Button::new("Administrator")).clicked() {
                app.message.clear();
                app.state = AppState::AdminLogin;
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new(&app.message).color(ui.visuals().warn_fg_color));
            }
        });
    });
}

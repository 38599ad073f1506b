use crate::app::LearnApp;
use crate::model::AppState;
use crate::ui::helpers::{admin_tabs, message_line};
use crate::ui::layout::simple_panel;
use egui::Context;

pub fn ui_admin_dashboard(app: &mut LearnApp, ctx: &Context) {
    simple_panel(ctx, 720.0, |ui| {
        ui.heading("Administration");
        admin_tabs(app, ui, AppState::AdminDashboard);
        ui.add_space(8.0);

        let totals = app.dashboard_totals();
        egui::Grid::new("dashboard_totals")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Registered users");
                ui.label(totals.users.to_string());
                ui.end_row();
                ui.strong("Courses");
                ui.label(totals.courses.to_string());
                ui.end_row();
                ui.strong("Quizzes");
                ui.label(totals.quizzes.to_string());
                ui.end_row();
                ui.strong("Recorded attempts");
                ui.label(totals.attempts.to_string());
                ui.end_row();
            });

        ui.add_space(16.0);
        if ui.button("🔙 Leave admin mode").clicked() {
            app.leave_admin();
        }
        message_line(app, ui);
    });
}

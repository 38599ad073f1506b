use crate::app::LearnApp;
use crate::model::AppState;
use egui::{RichText, Ui};

/// Tab strip shared by every admin screen.
pub fn admin_tabs(app: &mut LearnApp, ui: &mut Ui, active: AppState) {
    let tabs = [
        (AppState::AdminDashboard, "📊 Dashboard"),
        (AppState::AdminCourses, "📚 Courses"),
        (AppState::AdminQuizzes, "📝 Quizzes"),
        (AppState::AdminReports, "👥 Reports"),
    ];
    let mut goto: Option<AppState> = None;
    ui.horizontal(|ui| {
        for (tab, label) in tabs {
            if ui.selectable_label(active == tab, label).clicked() && tab != active {
                goto = Some(tab);
            }
        }
    });
    ui.separator();
    if let Some(tab) = goto {
        app.goto_admin(tab);
    }
}

pub fn message_line(app: &LearnApp, ui: &mut Ui) {
    if !app.message.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new(&app.message).color(ui.visuals().warn_fg_color));
    }
}

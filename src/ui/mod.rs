mod helpers;
pub mod layout;
pub mod views;

use crate::app::LearnApp;
use crate::model::AppState;
use eframe::{set_value, App, Frame, APP_KEY};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for LearnApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // The countdown has no event of its own in immediate mode: poll the
        // clock every frame and keep frames coming while a timed attempt runs.
        if self.state == AppState::Quiz {
            match &self.session {
                Some(session) => {
                    let now = ctx.input(|i| i.time);
                    if session.expired(now) {
                        self.finish_quiz(now);
                    } else if session.remaining_secs(now).is_some() {
                        ctx.request_repaint_after(std::time::Duration::from_millis(250));
                    }
                }
                // A Quiz state without a session cannot render anything.
                None => self.back_to_lesson(),
            }
        }

        if !matches!(self.state, AppState::Login | AppState::Register) {
            top_panel(self, ctx);
        }
        bottom_panel(ctx);

        match self.state {
            AppState::Login => views::login::ui_login(self, ctx),
            AppState::Register => views::register::ui_register(self, ctx),
            AppState::AdminLogin => views::admin_login::ui_admin_login(self, ctx),
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Course => views::course::ui_course(self, ctx),
            AppState::Lesson => views::lesson::ui_lesson(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::QuizOutcome => views::quiz_outcome::ui_quiz_outcome(self, ctx),
            AppState::QuizUnavailable => views::quiz_unavailable::ui_quiz_unavailable(self, ctx),
            AppState::AdminDashboard => views::admin_dashboard::ui_admin_dashboard(self, ctx),
            AppState::AdminCourses => views::admin_courses::ui_admin_courses(self, ctx),
            AppState::AdminQuizzes => views::admin_quizzes::ui_admin_quizzes(self, ctx),
            AppState::AdminReports => views::admin_reports::ui_admin_reports(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}

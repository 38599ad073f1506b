use super::*;

impl LearnApp {
    pub fn goto_home(&mut self) {
        self.current_course_id = None;
        self.current_lesson_id = None;
        self.session = None;
        self.message.clear();
        self.state = AppState::Home;
    }

    pub fn open_course(&mut self, course_id: &str) {
        if self.store.course(course_id).is_none() {
            self.message = format!("Course {course_id} no longer exists");
            return;
        }
        self.current_course_id = Some(course_id.to_string());
        self.current_lesson_id = None;
        self.state = AppState::Course;
    }

    pub fn open_lesson(&mut self, lesson_id: &str) {
        self.current_lesson_id = Some(lesson_id.to_string());
        self.state = AppState::Lesson;
    }

    pub fn back_to_course(&mut self) {
        self.current_lesson_id = None;
        self.session = None;
        self.state = if self.current_course_id.is_some() {
            AppState::Course
        } else {
            AppState::Home
        };
    }

    pub fn back_to_lesson(&mut self) {
        self.session = None;
        self.outcome = None;
        self.unavailable_quiz = None;
        self.state = if self.current_lesson_id.is_some() {
            AppState::Lesson
        } else {
            AppState::Home
        };
    }

    pub fn logout(&mut self) {
        self.current_user_id = None;
        self.current_course_id = None;
        self.current_lesson_id = None;
        self.admin_mode = false;
        self.session = None;
        self.outcome = None;
        self.login_form = LoginForm::default();
        self.message.clear();
        self.state = AppState::Login;
    }

    pub fn goto_admin(&mut self, tab: AppState) {
        if !self.admin_mode {
            self.state = AppState::AdminLogin;
            return;
        }
        debug_assert!(matches!(
            tab,
            AppState::AdminDashboard
                | AppState::AdminCourses
                | AppState::AdminQuizzes
                | AppState::AdminReports
        ));
        self.message.clear();
        self.state = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_missing_course_stays_put() {
        let mut app = LearnApp::default();
        app.state = AppState::Home;
        app.open_course("nope");
        assert_eq!(app.state, AppState::Home);
        assert!(app.current_course_id.is_none());
        assert!(!app.message.is_empty());
    }

    #[test]
    fn logout_clears_identity_and_navigation() {
        let mut app = LearnApp::default();
        app.store.ensure_seeded();
        app.register_user("Ada", "QA");
        app.open_course(&app.store.courses[0].id.clone());
        app.logout();
        assert_eq!(app.state, AppState::Login);
        assert!(app.current_user_id.is_none());
        assert!(app.current_course_id.is_none());
    }

    #[test]
    fn admin_tabs_require_admin_mode() {
        let mut app = LearnApp::default();
        app.goto_admin(AppState::AdminDashboard);
        assert_eq!(app.state, AppState::AdminLogin);
        app.admin_mode = true;
        app.goto_admin(AppState::AdminDashboard);
        assert_eq!(app.state, AppState::AdminDashboard);
    }
}

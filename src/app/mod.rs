use crate::model::{AppState, QuizResult, UserProfile};
use crate::quiz::QuizSession;
use crate::storage::ContentStore;
use egui_commonmark::CommonMarkCache;
use serde::{Deserialize, Serialize};

pub mod editor;
pub mod navigation;
pub mod progress;
pub mod quiz_flow;
pub mod reports;
pub mod users;

pub use editor::{CourseEditor, QuizEditor};
pub use reports::UserStats;

/// Outcome of the most recent attempt, kept for the result screen.
pub struct QuizOutcome {
    pub quiz_id: String,
    pub quiz_title: String,
    pub passing_score: u32,
    pub result: QuizResult,
}

/// Input buffers for the login and registration screens.
#[derive(Default)]
pub struct LoginForm {
    pub name: String,
    pub department: String,
    pub admin_user: String,
    pub admin_pass: String,
}

/// Admin-side form for creating or renaming a user profile.
pub struct UserEditor {
    /// `None` creates a new profile on save.
    pub id: Option<String>,
    pub name: String,
    pub department: String,
    pub error: String,
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct LearnApp {
    pub store: ContentStore,
    pub current_user_id: Option<String>,
    pub current_course_id: Option<String>,
    pub current_lesson_id: Option<String>,
    pub admin_mode: bool,
    pub state: AppState,
    pub message: String,
    #[serde(skip)]
    pub session: Option<QuizSession>,
    #[serde(skip)]
    pub outcome: Option<QuizOutcome>,
    /// Set instead of a session when the attempt gate refuses entry.
    #[serde(skip)]
    pub unavailable_quiz: Option<String>,
    #[serde(skip)]
    pub login_form: LoginForm,
    #[serde(skip)]
    pub course_editor: Option<CourseEditor>,
    #[serde(skip)]
    pub quiz_editor: Option<QuizEditor>,
    #[serde(skip)]
    pub user_editor: Option<UserEditor>,
    #[serde(skip)]
    pub import_buffer: String,
    #[serde(skip)]
    pub cm_cache: CommonMarkCache,
}

impl Default for LearnApp {
    fn default() -> Self {
        Self {
            store: ContentStore::default(),
            current_user_id: None,
            current_course_id: None,
            current_lesson_id: None,
            admin_mode: false,
            state: AppState::Login,
            message: String::new(),
            session: None,
            outcome: None,
            unavailable_quiz: None,
            login_form: LoginForm::default(),
            course_editor: None,
            quiz_editor: None,
            user_editor: None,
            import_buffer: String::new(),
            cm_cache: CommonMarkCache::default(),
        }
    }
}

impl LearnApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: LearnApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.store.ensure_seeded();
        app.normalize_restored_state();
        app
    }

    /// Live attempts and their outcomes do not survive a restart; a restored
    /// snapshot pointing at one of those screens falls back to solid ground.
    fn normalize_restored_state(&mut self) {
        match self.state {
            AppState::Quiz | AppState::QuizOutcome | AppState::QuizUnavailable => {
                self.state = if self.current_lesson_id.is_some() {
                    AppState::Lesson
                } else {
                    AppState::Home
                };
            }
            _ => {}
        }
        if self.current_user_id.is_none() && !self.admin_mode {
            self.state = AppState::Login;
        }
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current_user_id
            .as_deref()
            .and_then(|id| self.store.user(id))
    }
}

use super::*;
use crate::storage::{generate_id, now_millis};

/// Fixed panel credentials, matching the deployments this replaces.
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "123";

impl LearnApp {
    /// Creates a profile and signs it in. Name is mandatory, department is
    /// free text for the reports.
    pub fn register_user(&mut self, name: &str, department: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.message = "Enter your name to register".into();
            return;
        }
        let user = UserProfile {
            id: generate_id("user"),
            name: name.to_string(),
            department: department.trim().to_string(),
            registered_at: now_millis(),
        };
        let id = user.id.clone();
        self.store.save_user(user);
        self.sign_in(&id);
    }

    pub fn sign_in(&mut self, user_id: &str) {
        if self.store.user(user_id).is_none() {
            self.message = "That profile no longer exists".into();
            return;
        }
        self.current_user_id = Some(user_id.to_string());
        self.login_form = LoginForm::default();
        self.goto_home();
    }

    pub fn try_admin_login(&mut self) {
        if self.login_form.admin_user == ADMIN_USER && self.login_form.admin_pass == ADMIN_PASS {
            self.admin_mode = true;
            self.login_form = LoginForm::default();
            self.message.clear();
            self.state = AppState::AdminDashboard;
        } else {
            self.message = "Wrong administrator credentials".into();
        }
    }

    pub fn leave_admin(&mut self) {
        self.admin_mode = false;
        if self.current_user_id.is_some() {
            self.goto_home();
        } else {
            self.state = AppState::Login;
        }
    }

    pub fn delete_user(&mut self, user_id: &str) {
        self.store.delete_user(user_id);
        if self.current_user_id.as_deref() == Some(user_id) {
            self.current_user_id = None;
        }
    }

    pub fn edit_user(&mut self, user_id: Option<&str>) {
        self.user_editor = Some(match user_id.and_then(|id| self.store.user(id)) {
            Some(user) => UserEditor {
                id: Some(user.id.clone()),
                name: user.name.clone(),
                department: user.department.clone(),
                error: String::new(),
            },
            None => UserEditor {
                id: None,
                name: String::new(),
                department: String::new(),
                error: String::new(),
            },
        });
    }

    pub fn save_user_editor(&mut self) {
        let Some(editor) = self.user_editor.as_mut() else {
            return;
        };
        if editor.name.trim().is_empty() {
            editor.error = "the profile needs a name".into();
            return;
        }
        let existing = editor
            .id
            .as_deref()
            .and_then(|id| self.store.user(id))
            .cloned();
        let user = UserProfile {
            id: editor
                .id
                .clone()
                .unwrap_or_else(|| generate_id("user")),
            name: editor.name.trim().to_string(),
            department: editor.department.trim().to_string(),
            registered_at: existing.map(|u| u.registered_at).unwrap_or_else(now_millis),
        };
        self.store.save_user(user);
        self.user_editor = None;
        self.message = "User saved".into();
    }
}

use crate::model::{
    AttemptRecord, Course, LessonProgress, Quiz, QuizResult, UserProfile,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `prefix-<millis>-<000..999>`, same shape the original exports carry.
pub fn generate_id(prefix: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("{}-{}-{}", prefix, now_millis(), suffix)
}

/// Everything the platform persists: courses, quizzes, registered users,
/// per-user lesson progress and per-(user, quiz) attempt histories. Lives
/// inside the app struct and rides the eframe storage snapshot, so on the
/// web build it ends up in localStorage.
#[derive(Serialize, Deserialize, Default)]
pub struct ContentStore {
    pub courses: Vec<Course>,
    pub quizzes: Vec<Quiz>,
    pub users: Vec<UserProfile>,
    /// user id -> course id -> lesson id -> progress
    pub progress: HashMap<String, HashMap<String, HashMap<String, LessonProgress>>>,
    /// user id -> quiz id -> append-only attempt history
    pub results: HashMap<String, HashMap<String, Vec<AttemptRecord>>>,
}

impl ContentStore {
    /// Loads the embedded starter content on first run.
    pub fn ensure_seeded(&mut self) {
        if self.courses.is_empty() && self.quizzes.is_empty() {
            let (courses, quizzes) = crate::data::seed_content();
            self.courses = courses;
            self.quizzes = quizzes;
        }
    }

    // --- Courses ---

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn save_course(&mut self, course: Course) {
        match self.courses.iter_mut().find(|c| c.id == course.id) {
            Some(slot) => *slot = course,
            None => self.courses.push(course),
        }
    }

    pub fn delete_course(&mut self, id: &str) {
        self.courses.retain(|c| c.id != id);
    }

    // --- Quizzes ---

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    pub fn save_quiz(&mut self, quiz: Quiz) {
        match self.quizzes.iter_mut().find(|q| q.id == quiz.id) {
            Some(slot) => *slot = quiz,
            None => self.quizzes.push(quiz),
        }
    }

    pub fn delete_quiz(&mut self, id: &str) {
        self.quizzes.retain(|q| q.id != id);
    }

    // --- Users ---
    // The profile registry is the canonical user enumeration; progress and
    // result keys are never scanned for identity.

    pub fn user(&self, id: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn save_user(&mut self, user: UserProfile) {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user,
            None => self.users.push(user),
        }
    }

    /// Removes the profile together with all of the user's data.
    pub fn delete_user(&mut self, id: &str) {
        self.users.retain(|u| u.id != id);
        self.progress.remove(id);
        self.results.remove(id);
    }

    // --- Lesson progress ---

    pub fn user_progress(&self, user_id: &str) -> HashMap<String, HashMap<String, LessonProgress>> {
        self.progress.get(user_id).cloned().unwrap_or_default()
    }

    pub fn course_progress(&self, user_id: &str, course_id: &str) -> HashMap<String, LessonProgress> {
        self.progress
            .get(user_id)
            .and_then(|p| p.get(course_id))
            .cloned()
            .unwrap_or_default()
    }

    pub fn save_lesson_progress(
        &mut self,
        user_id: &str,
        course_id: &str,
        lesson_id: &str,
        mut progress: LessonProgress,
    ) {
        progress.updated_at = now_millis();
        self.progress
            .entry(user_id.to_string())
            .or_default()
            .entry(course_id.to_string())
            .or_default()
            .insert(lesson_id.to_string(), progress);
    }

    // --- Attempt history ---

    pub fn attempts_used(&self, user_id: &str, quiz_id: &str) -> usize {
        self.results
            .get(user_id)
            .and_then(|r| r.get(quiz_id))
            .map(|a| a.len())
            .unwrap_or(0)
    }

    pub fn last_result(&self, user_id: &str, quiz_id: &str) -> Option<&AttemptRecord> {
        self.results
            .get(user_id)
            .and_then(|r| r.get(quiz_id))
            .and_then(|a| a.last())
    }

    pub fn push_result(&mut self, user_id: &str, quiz_id: &str, result: QuizResult) {
        self.results
            .entry(user_id.to_string())
            .or_default()
            .entry(quiz_id.to_string())
            .or_default()
            .push(AttemptRecord {
                result,
                timestamp: now_millis(),
            });
    }

    pub fn reset_attempts(&mut self, user_id: &str, quiz_id: &str) {
        if let Some(per_quiz) = self.results.get_mut(user_id) {
            per_quiz.remove(quiz_id);
        }
    }

    // --- Import / export ---

    pub fn export_courses_json(&self) -> String {
        serde_json::to_string_pretty(&self.courses).unwrap_or_else(|_| "[]".into())
    }

    pub fn export_quizzes_json(&self) -> String {
        serde_json::to_string_pretty(&self.quizzes).unwrap_or_else(|_| "[]".into())
    }

    /// Replaces the course collection; on a parse error the store is left
    /// untouched and the message is returned for the UI.
    pub fn import_courses_json(&mut self, json: &str) -> Result<usize, String> {
        let courses: Vec<Course> =
            serde_json::from_str(json).map_err(|e| format!("course import failed: {e}"))?;
        let n = courses.len();
        self.courses = courses;
        Ok(n)
    }

    pub fn import_quizzes_json(&mut self, json: &str) -> Result<usize, String> {
        let quizzes: Vec<Quiz> =
            serde_json::from_str(json).map_err(|e| format!("quiz import failed: {e}"))?;
        let n = quizzes.len();
        self.quizzes = quizzes;
        Ok(n)
    }
}

/// Hands a generated export to the user: written next to the binary on
/// native, downloaded through a Blob anchor in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn download_file(filename: &str, content: &str, _mime: &str) -> Result<(), String> {
    std::fs::write(filename, content).map_err(|e| format!("could not write {filename}: {e}"))
}

#[cfg(target_arch = "wasm32")]
pub fn download_file(filename: &str, content: &str, mime: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "blob creation failed".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "object url failed".to_string())?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "anchor failed".to_string())?
        .dyn_into()
        .map_err(|_| "anchor cast failed".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

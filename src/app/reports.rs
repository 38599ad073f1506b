use super::*;
use crate::storage::download_file;
use serde::Serialize;

/// Aggregated per-user numbers for the reports tab, computed from lesson
/// progress. `average_score` is over completed lessons only.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub user_id: String,
    pub name: String,
    pub department: String,
    pub total_lessons: usize,
    pub completed_lessons: usize,
    pub courses_completed: usize,
    pub average_score: u32,
    /// Completed lessons as a percentage of all lessons.
    pub completion_rate: u32,
    pub last_activity: Option<i64>,
}

pub struct DashboardTotals {
    pub users: usize,
    pub courses: usize,
    pub quizzes: usize,
    pub attempts: usize,
}

impl LearnApp {
    pub fn user_stats(&self, user: &UserProfile) -> UserStats {
        let progress = self.store.user_progress(&user.id);
        let mut total_lessons = 0;
        let mut completed_lessons = 0;
        let mut courses_completed = 0;
        let mut score_sum: u64 = 0;
        for course in &self.store.courses {
            let course_progress = progress.get(&course.id);
            total_lessons += course.lessons.len();
            let mut course_done = !course.lessons.is_empty();
            for lesson in &course.lessons {
                let lesson_progress =
                    course_progress.and_then(|per_lesson| per_lesson.get(&lesson.id));
                match lesson_progress {
                    Some(p) if p.completed => {
                        completed_lessons += 1;
                        score_sum += p.score as u64;
                    }
                    _ => course_done = false,
                }
            }
            if course_done {
                courses_completed += 1;
            }
        }
        let last_activity = progress
            .values()
            .flat_map(|per_lesson| per_lesson.values())
            .map(|p| p.updated_at)
            .max();
        UserStats {
            user_id: user.id.clone(),
            name: user.name.clone(),
            department: user.department.clone(),
            total_lessons,
            completed_lessons,
            courses_completed,
            average_score: if completed_lessons > 0 {
                (score_sum as f64 / completed_lessons as f64).round() as u32
            } else {
                0
            },
            completion_rate: if total_lessons > 0 {
                (100.0 * completed_lessons as f64 / total_lessons as f64).round() as u32
            } else {
                0
            },
            last_activity,
        }
    }

    pub fn all_user_stats(&self) -> Vec<UserStats> {
        self.store.users.iter().map(|u| self.user_stats(u)).collect()
    }

    pub fn dashboard_totals(&self) -> DashboardTotals {
        DashboardTotals {
            users: self.store.users.len(),
            courses: self.store.courses.len(),
            quizzes: self.store.quizzes.len(),
            attempts: self
                .store
                .results
                .values()
                .flat_map(|per_quiz| per_quiz.values())
                .map(|attempts| attempts.len())
                .sum(),
        }
    }

    pub fn export_report_json(&mut self) {
        let stats = self.all_user_stats();
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => {
                self.message = match download_file("user_report.json", &json, "application/json") {
                    Ok(()) => "Report exported to user_report.json".into(),
                    Err(e) => e,
                }
            }
            Err(e) => self.message = format!("report serialization failed: {e}"),
        }
    }

    pub fn export_report_csv(&mut self) {
        match report_csv(&self.all_user_stats()) {
            Ok(csv) => {
                self.message = match download_file("user_report.csv", &csv, "text/csv") {
                    Ok(()) => "Report exported to user_report.csv".into(),
                    Err(e) => e,
                }
            }
            Err(e) => self.message = e,
        }
    }
}

fn report_csv(stats: &[UserStats]) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in stats {
        writer
            .serialize(row)
            .map_err(|e| format!("csv row failed: {e}"))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("csv flush failed: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("csv encoding failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, QuizResult};

    fn app_with_seed_user() -> LearnApp {
        let mut app = LearnApp::default();
        app.store.ensure_seeded();
        app.register_user("Ada", "QA");
        app
    }

    fn passing() -> QuizResult {
        QuizResult {
            score: 100,
            passed: true,
            answers: vec![Some(Answer::Flag(true))],
            time_spent: 1000,
        }
    }

    #[test]
    fn fresh_user_has_zeroed_stats() {
        let app = app_with_seed_user();
        let user = app.current_user().cloned().unwrap();
        let stats = app.user_stats(&user);
        assert_eq!(stats.total_lessons, 2);
        assert_eq!(stats.completed_lessons, 0);
        assert_eq!(stats.courses_completed, 0);
        assert_eq!(stats.average_score, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.last_activity, None);
    }

    #[test]
    fn stats_follow_lesson_completion() {
        let mut app = app_with_seed_user();
        let user_id = app.current_user_id.clone().unwrap();
        app.store.push_result(&user_id, "quiz-basics", passing());
        app.refresh_lesson_completion("quiz-basics");

        let user = app.current_user().cloned().unwrap();
        let stats = app.user_stats(&user);
        assert_eq!(stats.completed_lessons, 1);
        assert_eq!(stats.completion_rate, 50);
        assert_eq!(stats.average_score, 100);
        assert_eq!(stats.courses_completed, 0);
        assert!(stats.last_activity.is_some());
    }

    #[test]
    fn completing_every_lesson_completes_the_course() {
        let mut app = app_with_seed_user();
        let user_id = app.current_user_id.clone().unwrap();
        app.store.push_result(&user_id, "quiz-basics", passing());
        app.refresh_lesson_completion("quiz-basics");
        app.store.push_result(&user_id, "quiz-equipment", passing());
        app.refresh_lesson_completion("quiz-equipment");

        let user = app.current_user().cloned().unwrap();
        let stats = app.user_stats(&user);
        assert_eq!(stats.completed_lessons, 2);
        assert_eq!(stats.completion_rate, 100);
        assert_eq!(stats.courses_completed, 1);
    }

    #[test]
    fn csv_report_has_a_header_and_one_row_per_user() {
        let mut app = LearnApp::default();
        app.register_user("Ada", "QA");
        app.register_user("Grace", "Ops");
        let csv = report_csv(&app.all_user_stats()).expect("csv");
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("averageScore"));
    }

    #[test]
    fn dashboard_counts_attempts_across_users() {
        let mut app = LearnApp::default();
        app.store.ensure_seeded();
        app.register_user("Ada", "QA");
        let first = app.current_user_id.clone().unwrap();
        app.register_user("Grace", "Ops");
        let second = app.current_user_id.clone().unwrap();
        app.store.push_result(&first, "q1", passing());
        app.store.push_result(&second, "q1", passing());
        let totals = app.dashboard_totals();
        assert_eq!(totals.users, 2);
        assert_eq!(totals.attempts, 2);
        assert_eq!(totals.courses, app.store.courses.len());
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A course groups lessons; `lock_until_passed` gates lesson n on lesson n-1.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lock_until_passed: bool,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// Markdown content, may embed [quiz:id], [img:path], [video:path], [file:path].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default = "default_max_score")]
    pub max_score: u32,
    /// Seconds for the whole attempt, 0 = unlimited.
    #[serde(default)]
    pub time_limit: u32,
    /// 0 = unlimited.
    #[serde(default)]
    pub max_attempts: u32,
    /// Percent required to pass.
    #[serde(default = "default_passing_score")]
    pub passing_score: u32,
    #[serde(default)]
    pub shuffle: bool,
}

fn default_max_score() -> u32 {
    100
}

fn default_passing_score() -> u32 {
    80
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    /// The prompt. Older exports used the key "question".
    #[serde(alias = "question")]
    pub text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Tagged over the wire exactly like the JSON exports ("type": "single", ...).
/// Correctness data always refers to the canonical (unshuffled) option order.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum QuestionKind {
    #[serde(rename = "single")]
    Single {
        options: Vec<String>,
        /// One index into `options`.
        correct: Vec<usize>,
    },
    #[serde(rename = "multiple")]
    Multiple {
        options: Vec<String>,
        correct: Vec<usize>,
    },
    #[serde(rename = "truefalse")]
    TrueFalse {
        /// `[0]` means "true" is correct, `[1]` means "false".
        correct: Vec<usize>,
    },
    #[serde(rename = "fillblank", rename_all = "camelCase")]
    FillBlank { correct_answers: Vec<String> },
    #[serde(rename = "sequence")]
    Sequence {
        /// Stored in the correct order; the user sees them shuffled.
        steps: Vec<String>,
    },
    #[serde(rename = "dragdrop")]
    DragDrop {
        items: Vec<String>,
        targets: Vec<String>,
        mappings: Vec<Mapping>,
    },
    #[serde(rename = "dragdrop-categories")]
    DragDropCategories {
        items: Vec<String>,
        categories: Vec<Category>,
    },
    #[serde(rename = "hotspot")]
    Hotspot {
        #[serde(default)]
        image: String,
        zones: Vec<Zone>,
    },
    #[serde(rename = "hotspot-multiple")]
    HotspotMultiple {
        #[serde(default)]
        image: String,
        zones: Vec<Zone>,
    },
    #[serde(rename = "hotspot-sequence")]
    HotspotSequence {
        #[serde(default)]
        image: String,
        /// In required click order.
        zones: Vec<Zone>,
    },
    /// Unrecognised "type" tags from imports land here instead of failing.
    #[serde(other)]
    Unknown,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Single { .. } => "Single choice",
            QuestionKind::Multiple { .. } => "Multiple choice",
            QuestionKind::TrueFalse { .. } => "True / false",
            QuestionKind::FillBlank { .. } => "Fill in the blank",
            QuestionKind::Sequence { .. } => "Ordering",
            QuestionKind::DragDrop { .. } => "Matching (drag & drop)",
            QuestionKind::DragDropCategories { .. } => "Categorisation",
            QuestionKind::Hotspot { .. } => "Image hotspot",
            QuestionKind::HotspotMultiple { .. } => "Image hotspot (multiple)",
            QuestionKind::HotspotSequence { .. } => "Image hotspot (sequence)",
            QuestionKind::Unknown => "Unknown",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub item: String,
    pub target: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub correct_items: Vec<String>,
}

/// A circular tolerance region in percent coordinates of the image surface.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub x: f32,
    pub y: f32,
    pub tolerance: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Per-variant answer payload. Untagged so persisted attempt histories keep
/// the original type-erased shapes (string, string[], bool, index[], map,
/// click[]); only the scoring code interprets them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Answer {
    Flag(bool),
    Text(String),
    Texts(Vec<String>),
    Order(Vec<usize>),
    Clicks(Vec<Point>),
    Placement(BTreeMap<String, String>),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    /// 0..=100, rounded.
    pub score: u32,
    pub passed: bool,
    /// One slot per question, `None` = unanswered.
    pub answers: Vec<Option<Answer>>,
    /// Milliseconds.
    pub time_spent: u64,
}

/// One finished attempt as persisted in the per-(user, quiz) history.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AttemptRecord {
    #[serde(flatten)]
    pub result: QuizResult,
    pub timestamp: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub registered_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub passed_at: Option<i64>,
    #[serde(default)]
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Login,
    Register,
    AdminLogin,
    Home,
    Course,
    Lesson,
    Quiz,
    QuizOutcome,
    QuizUnavailable,
    AdminDashboard,
    AdminCourses,
    AdminQuizzes,
    AdminReports,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_roundtrips_with_original_json_shape() {
        let json = r#"{
            "text": "What to do in case of fire?",
            "type": "single",
            "options": ["Call 101", "Hide under the desk", "Panic"],
            "correct": [0]
        }"#;
        let q: Question = serde_json::from_str(json).expect("parse single");
        match &q.kind {
            QuestionKind::Single { options, correct } => {
                assert_eq!(options.len(), 3);
                assert_eq!(correct, &vec![0]);
            }
            other => panic!("wrong kind: {other:?}"),
        }
        let back = serde_json::to_value(&q).expect("serialize");
        assert_eq!(back["type"], "single");
        assert_eq!(back["text"], "What to do in case of fire?");
    }

    #[test]
    fn question_accepts_legacy_prompt_key() {
        let json = r#"{"question": "True?", "type": "truefalse", "correct": [0]}"#;
        let q: Question = serde_json::from_str(json).expect("parse legacy");
        assert_eq!(q.text, "True?");
    }

    #[test]
    fn unknown_question_type_degrades_instead_of_failing() {
        let json = r#"{"text": "?", "type": "essay"}"#;
        let q: Question = serde_json::from_str(json).expect("parse unknown");
        assert!(matches!(q.kind, QuestionKind::Unknown));
    }

    #[test]
    fn dragdrop_categories_tag_matches_export_format() {
        let json = r#"{
            "text": "Sort these",
            "type": "dragdrop-categories",
            "items": ["Hammer", "Apple"],
            "categories": [
                {"name": "Tools", "correctItems": ["Hammer"]},
                {"name": "Food", "correctItems": ["Apple"]}
            ]
        }"#;
        let q: Question = serde_json::from_str(json).expect("parse categories");
        match &q.kind {
            QuestionKind::DragDropCategories { categories, .. } => {
                assert_eq!(categories[0].correct_items, vec!["Hammer".to_string()]);
            }
            other => panic!("wrong kind: {other:?}"),
        }
    }

    #[test]
    fn answers_serialize_as_raw_values() {
        let a = Answer::Texts(vec!["A".into(), "C".into()]);
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"["A","C"]"#);
        let b = Answer::Flag(true);
        assert_eq!(serde_json::to_string(&b).unwrap(), "true");
        let c: Answer = serde_json::from_str(r#"{"Bolt":"Fastener"}"#).unwrap();
        assert!(matches!(c, Answer::Placement(_)));
    }

    #[test]
    fn quiz_defaults_match_authoring_defaults() {
        let q: Quiz = serde_json::from_str(r#"{"id": "quiz-1", "title": "T"}"#).unwrap();
        assert_eq!(q.max_score, 100);
        assert_eq!(q.passing_score, 80);
        assert_eq!(q.max_attempts, 0);
        assert_eq!(q.time_limit, 0);
        assert!(!q.shuffle);
    }
}

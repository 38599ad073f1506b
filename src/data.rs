use crate::model::{Course, Quiz};
use serde::Deserialize;

#[derive(Deserialize)]
struct SeedFile {
    courses: Vec<Course>,
    quizzes: Vec<Quiz>,
}

/// Starter courses and quizzes from the embedded YAML bank.
pub fn seed_content() -> (Vec<Course>, Vec<Quiz>) {
    let file_content = include_str!("data/seed_content.yaml");
    let seed: SeedFile =
        serde_yaml::from_str(file_content).expect("embedded seed content must parse");
    (seed.courses, seed.quizzes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionKind;

    #[test]
    fn seed_parses_and_is_nonempty() {
        let (courses, quizzes) = seed_content();
        assert!(!courses.is_empty());
        assert!(!quizzes.is_empty());
        assert!(courses.iter().all(|c| !c.lessons.is_empty()));
        assert!(quizzes.iter().all(|q| !q.questions.is_empty()));
    }

    #[test]
    fn every_seed_question_has_a_known_kind() {
        let (_, quizzes) = seed_content();
        for quiz in &quizzes {
            for question in &quiz.questions {
                assert!(
                    !matches!(question.kind, QuestionKind::Unknown),
                    "seed question fell through to Unknown: {}",
                    question.text
                );
            }
        }
    }

    #[test]
    fn seed_lessons_reference_seed_quizzes() {
        let (courses, quizzes) = seed_content();
        for course in &courses {
            for lesson in &course.lessons {
                for id in crate::shortcode::quiz_ids(&lesson.content) {
                    assert!(
                        quizzes.iter().any(|q| q.id == id),
                        "lesson {} references missing quiz {id}",
                        lesson.id
                    );
                }
            }
        }
    }
}

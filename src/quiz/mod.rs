pub mod dragdrop;
pub mod fillblank;
pub mod hotspot;
pub mod multiple;
pub mod policy;
pub mod sequence;
pub mod session;
pub mod single;
pub mod truefalse;

pub use session::{QuizSession, SessionError};

use crate::model::{Answer, Point, Question, QuestionKind};
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

/// Interaction buffer for the question currently on screen. Holds partial
/// input (a half-filled mapping, clicks so far) until a terminal action emits
/// an externally visible `Answer`. Rebuilt on every presentation; display
/// orders are shuffled copies of canonical indices, the question itself is
/// never touched.
#[derive(Debug, Clone)]
pub enum Interaction {
    Choice {
        order: Vec<usize>,
        /// Canonical index of the picked option.
        selected: Option<usize>,
    },
    MultiChoice {
        order: Vec<usize>,
        /// Indexed by canonical option index.
        checked: Vec<bool>,
    },
    Toggle {
        picked: Option<bool>,
    },
    Blank {
        input: String,
    },
    Arrange {
        /// Canonical step indices in the user's current order.
        order: Vec<usize>,
        /// No answer is emitted until the user has moved something.
        touched: bool,
    },
    Assign {
        /// Display order of the items column.
        item_order: Vec<usize>,
        placed: BTreeMap<String, String>,
    },
    Clicks {
        points: Vec<Point>,
    },
    /// Unknown question kinds render a placeholder and collect nothing.
    Inert,
}

impl Interaction {
    pub fn for_question(question: &Question, shuffle: bool) -> Self {
        match &question.kind {
            QuestionKind::Single { options, .. } => Interaction::Choice {
                order: display_order(options.len(), shuffle),
                selected: None,
            },
            QuestionKind::Multiple { options, .. } => Interaction::MultiChoice {
                order: display_order(options.len(), shuffle),
                checked: vec![false; options.len()],
            },
            QuestionKind::TrueFalse { .. } => Interaction::Toggle { picked: None },
            QuestionKind::FillBlank { .. } => Interaction::Blank {
                input: String::new(),
            },
            // The presented order must not leak the solution, so these two
            // shuffle regardless of the quiz-level flag.
            QuestionKind::Sequence { steps } => Interaction::Arrange {
                order: display_order(steps.len(), true),
                touched: false,
            },
            QuestionKind::DragDrop { items, .. }
            | QuestionKind::DragDropCategories { items, .. } => Interaction::Assign {
                item_order: display_order(items.len(), true),
                placed: BTreeMap::new(),
            },
            QuestionKind::Hotspot { .. }
            | QuestionKind::HotspotMultiple { .. }
            | QuestionKind::HotspotSequence { .. } => Interaction::Clicks { points: vec![] },
            QuestionKind::Unknown => Interaction::Inert,
        }
    }
}

fn display_order(len: usize, shuffle: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    if shuffle {
        order.shuffle(&mut rand::thread_rng());
    }
    order
}

/// Renders the interactive surface for one question and returns the new
/// answer value whenever an input event produced one.
pub fn question_ui(
    ui: &mut egui::Ui,
    question: &Question,
    interaction: &mut Interaction,
) -> Option<Answer> {
    match (&question.kind, interaction) {
        (
            QuestionKind::Single { options, .. },
            Interaction::Choice { order, selected },
        ) => single::ui(ui, options, order, selected),
        (
            QuestionKind::Multiple { options, .. },
            Interaction::MultiChoice { order, checked },
        ) => multiple::ui(ui, options, order, checked),
        (QuestionKind::TrueFalse { .. }, Interaction::Toggle { picked }) => {
            truefalse::ui(ui, picked)
        }
        (QuestionKind::FillBlank { .. }, Interaction::Blank { input }) => {
            fillblank::ui(ui, input)
        }
        (QuestionKind::Sequence { steps }, Interaction::Arrange { order, touched }) => {
            sequence::ui(ui, steps, order, touched)
        }
        (
            QuestionKind::DragDrop { items, targets, .. },
            Interaction::Assign { item_order, placed },
        ) => dragdrop::ui_match(ui, items, targets, item_order, placed),
        (
            QuestionKind::DragDropCategories { items, categories },
            Interaction::Assign { item_order, placed },
        ) => {
            let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
            dragdrop::ui_categories(ui, items, &names, item_order, placed)
        }
        (QuestionKind::Hotspot { image, .. }, Interaction::Clicks { points }) => {
            hotspot::ui(ui, image, points, hotspot::ClickMode::Single)
        }
        (QuestionKind::HotspotMultiple { image, .. }, Interaction::Clicks { points }) => {
            hotspot::ui(ui, image, points, hotspot::ClickMode::Numbered)
        }
        (QuestionKind::HotspotSequence { image, .. }, Interaction::Clicks { points }) => {
            hotspot::ui(ui, image, points, hotspot::ClickMode::Numbered)
        }
        (QuestionKind::Unknown, _) => {
            ui.colored_label(ui.visuals().warn_fg_color, "⚠ Unknown question type.");
            None
        }
        // Kind and buffer drifted apart; render nothing rather than panic.
        _ => {
            log::warn!("interaction buffer does not match question kind");
            None
        }
    }
}

/// Pure correctness check for one submitted answer. `None` (unanswered) and
/// shape mismatches score as incorrect, never as an error.
pub fn score_question(question: &Question, answer: Option<&Answer>) -> bool {
    let Some(answer) = answer else {
        return false;
    };
    match &question.kind {
        QuestionKind::Single { options, correct } => single::score(options, correct, answer),
        QuestionKind::Multiple { options, correct } => multiple::score(options, correct, answer),
        QuestionKind::TrueFalse { correct } => truefalse::score(correct, answer),
        QuestionKind::FillBlank { correct_answers } => fillblank::score(correct_answers, answer),
        QuestionKind::Sequence { steps } => sequence::score(steps, answer),
        QuestionKind::DragDrop { items, mappings, .. } => {
            dragdrop::score_match(items, mappings, answer)
        }
        QuestionKind::DragDropCategories { items, categories } => {
            dragdrop::score_categories(items, categories, answer)
        }
        QuestionKind::Hotspot { zones, .. } => hotspot::score_single(zones, answer),
        QuestionKind::HotspotMultiple { zones, .. } => hotspot::score_multiple(zones, answer),
        QuestionKind::HotspotSequence { zones, .. } => hotspot::score_sequence(zones, answer),
        QuestionKind::Unknown => {
            log::error!("cannot score unknown question type: {:?}", question.text);
            false
        }
    }
}

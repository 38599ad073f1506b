use crate::model::{Answer, Category, Mapping};
use std::collections::BTreeMap;

/// Matching mode: every item gets assigned to one target. Pointer drag is a
/// poor fit for immediate mode, so assignment happens through a combo box per
/// item; each placement re-emits the full item→target map.
pub fn ui_match(
    ui: &mut egui::Ui,
    items: &[String],
    targets: &[String],
    item_order: &[usize],
    placed: &mut BTreeMap<String, String>,
) -> Option<Answer> {
    ui.label("Match every item with a target:");
    ui.add_space(4.0);
    assign_rows(ui, items, targets, item_order, placed)
}

/// Categorisation mode: same surface, the "targets" are category names.
pub fn ui_categories(
    ui: &mut egui::Ui,
    items: &[String],
    category_names: &[&str],
    item_order: &[usize],
    placed: &mut BTreeMap<String, String>,
) -> Option<Answer> {
    ui.label("Sort every item into its category:");
    ui.add_space(4.0);
    let owned: Vec<String> = category_names.iter().map(|n| n.to_string()).collect();
    assign_rows(ui, items, &owned, item_order, placed)
}

fn assign_rows(
    ui: &mut egui::Ui,
    items: &[String],
    targets: &[String],
    item_order: &[usize],
    placed: &mut BTreeMap<String, String>,
) -> Option<Answer> {
    let mut changed = false;
    for &idx in item_order {
        let Some(item) = items.get(idx) else {
            continue;
        };
        ui.horizontal(|ui| {
            ui.label(item);
            let current = placed.get(item).cloned();
            let mut selected = current.clone();
            egui::ComboBox::from_id_salt(("assign", idx))
                .selected_text(selected.as_deref().unwrap_or("—"))
                .show_ui(ui, |ui| {
                    for target in targets {
                        ui.selectable_value(&mut selected, Some(target.clone()), target);
                    }
                });
            if selected != current {
                if let Some(target) = selected {
                    placed.insert(item.clone(), target);
                    changed = true;
                }
            }
        });
    }
    changed.then(|| Answer::Placement(placed.clone()))
}

/// Correct iff the submitted map covers every item and equals the map built
/// from the stored mappings.
pub fn score_match(items: &[String], mappings: &[Mapping], answer: &Answer) -> bool {
    let Answer::Placement(placed) = answer else {
        return false;
    };
    if placed.len() < items.len() {
        return false;
    }
    let correct: BTreeMap<&str, &str> = mappings
        .iter()
        .map(|m| (m.item.as_str(), m.target.as_str()))
        .collect();
    placed.len() == correct.len()
        && placed
            .iter()
            .all(|(item, target)| correct.get(item.as_str()) == Some(&target.as_str()))
}

/// Correct iff every item is assigned to the category whose `correct_items`
/// contains it.
pub fn score_categories(items: &[String], categories: &[Category], answer: &Answer) -> bool {
    let Answer::Placement(placed) = answer else {
        return false;
    };
    if placed.len() < items.len() {
        return false;
    }
    let correct: BTreeMap<&str, &str> = categories
        .iter()
        .flat_map(|c| c.correct_items.iter().map(|i| (i.as_str(), c.name.as_str())))
        .collect();
    placed
        .iter()
        .all(|(item, category)| correct.get(item.as_str()) == Some(&category.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mappings() -> Vec<Mapping> {
        vec![
            Mapping {
                item: "Bolt".into(),
                target: "Fastener".into(),
            },
            Mapping {
                item: "Saw".into(),
                target: "Cutter".into(),
            },
        ]
    }

    fn items() -> Vec<String> {
        vec!["Bolt".into(), "Saw".into()]
    }

    fn placement(pairs: &[(&str, &str)]) -> Answer {
        Answer::Placement(
            pairs
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        )
    }

    #[test]
    fn exact_mapping_is_correct() {
        let a = placement(&[("Bolt", "Fastener"), ("Saw", "Cutter")]);
        assert!(score_match(&items(), &mappings(), &a));
    }

    #[test]
    fn swapped_targets_are_incorrect() {
        let a = placement(&[("Bolt", "Cutter"), ("Saw", "Fastener")]);
        assert!(!score_match(&items(), &mappings(), &a));
    }

    #[test]
    fn partial_coverage_is_incorrect() {
        let a = placement(&[("Bolt", "Fastener")]);
        assert!(!score_match(&items(), &mappings(), &a));
    }

    fn categories() -> Vec<Category> {
        vec![
            Category {
                name: "Tools".into(),
                correct_items: vec!["Hammer".into(), "Saw".into()],
            },
            Category {
                name: "Food".into(),
                correct_items: vec!["Apple".into()],
            },
        ]
    }

    #[test]
    fn every_item_in_its_category_is_correct() {
        let items: Vec<String> = vec!["Hammer".into(), "Saw".into(), "Apple".into()];
        let a = placement(&[("Hammer", "Tools"), ("Saw", "Tools"), ("Apple", "Food")]);
        assert!(score_categories(&items, &categories(), &a));
    }

    #[test]
    fn one_misplaced_item_fails() {
        let items: Vec<String> = vec!["Hammer".into(), "Saw".into(), "Apple".into()];
        let a = placement(&[("Hammer", "Tools"), ("Saw", "Food"), ("Apple", "Food")]);
        assert!(!score_categories(&items, &categories(), &a));
    }
}

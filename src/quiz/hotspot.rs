use crate::model::{Answer, Point, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMode {
    /// One answer click; a later click replaces it.
    Single,
    /// Clicks accumulate and are drawn with their ordinal.
    Numbered,
}

/// A fixed-aspect click surface standing in for the question image. Clicks
/// are captured in percent coordinates of the surface, the same convention
/// the stored zones use.
pub fn ui(
    ui: &mut egui::Ui,
    image: &str,
    points: &mut Vec<Point>,
    mode: ClickMode,
) -> Option<Answer> {
    let caption = match mode {
        ClickMode::Single => "Click the correct area",
        ClickMode::Numbered => "Click the correct areas in order",
    };
    ui.label(caption);
    if !image.is_empty() {
        ui.small(format!("Image: {image}"));
    }
    ui.add_space(4.0);

    let width = ui.available_width().min(480.0);
    let size = egui::vec2(width, width * 0.625);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
    painter.rect_stroke(
        rect,
        4.0,
        ui.visuals().widgets.noninteractive.bg_stroke,
        egui::StrokeKind::Inside,
    );

    let mut emitted = None;
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let point = Point {
                x: ((pos.x - rect.left()) / rect.width() * 100.0).round(),
                y: ((pos.y - rect.top()) / rect.height() * 100.0).round(),
            };
            match mode {
                ClickMode::Single => {
                    points.clear();
                    points.push(point);
                }
                ClickMode::Numbered => points.push(point),
            }
            emitted = Some(Answer::Clicks(points.clone()));
        }
    }

    // Markers for feedback, numbered when order matters.
    for (i, p) in points.iter().enumerate() {
        let center = egui::pos2(
            rect.left() + rect.width() * p.x / 100.0,
            rect.top() + rect.height() * p.y / 100.0,
        );
        painter.circle_filled(center, 9.0, egui::Color32::from_rgb(0x3a, 0x7b, 0xd5));
        if mode == ClickMode::Numbered {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                (i + 1).to_string(),
                egui::FontId::proportional(11.0),
                egui::Color32::WHITE,
            );
        }
    }

    emitted
}

fn in_zone(click: &Point, zone: &Zone) -> bool {
    let dx = click.x - zone.x;
    let dy = click.y - zone.y;
    (dx * dx + dy * dy).sqrt() < zone.tolerance
}

/// Correct iff the click lands inside some zone's tolerance circle.
pub fn score_single(zones: &[Zone], answer: &Answer) -> bool {
    let Answer::Clicks(clicks) = answer else {
        return false;
    };
    let Some(click) = clicks.first() else {
        return false;
    };
    zones.iter().any(|z| in_zone(click, z))
}

/// Correct iff click and zone counts match and a greedy first-match
/// assignment pairs every click with a distinct zone.
pub fn score_multiple(zones: &[Zone], answer: &Answer) -> bool {
    let Answer::Clicks(clicks) = answer else {
        return false;
    };
    if clicks.len() != zones.len() {
        return false;
    }
    let mut used = vec![false; zones.len()];
    for click in clicks {
        let found = zones
            .iter()
            .enumerate()
            .find(|(i, z)| !used[*i] && in_zone(click, z));
        match found {
            Some((i, _)) => used[i] = true,
            None => return false,
        }
    }
    true
}

/// Correct iff click i lies within zone i for every i and counts match.
pub fn score_sequence(zones: &[Zone], answer: &Answer) -> bool {
    let Answer::Clicks(clicks) = answer else {
        return false;
    };
    clicks.len() == zones.len()
        && clicks
            .iter()
            .zip(zones.iter())
            .all(|(click, zone)| in_zone(click, zone))
}

use regex::Regex;
use std::sync::OnceLock;

/// One piece of lesson content after shortcode expansion. Text segments are
/// rendered as markdown, the rest become embedded widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Quiz(String),
    Image(String),
    Video(String),
    File(String),
}

fn shortcode_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[(quiz|img|video|file):([^\]]+)\]").expect("shortcode pattern")
    })
}

/// Splits lesson content into text and shortcode segments in document order.
/// Unknown bracket constructs stay inside the surrounding text.
pub fn segments(content: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for caps in shortcode_re().captures_iter(content) {
        let whole = caps.get(0).expect("match");
        if whole.start() > cursor {
            out.push(Segment::Text(content[cursor..whole.start()].to_string()));
        }
        let arg = caps[2].trim().to_string();
        out.push(match &caps[1] {
            "quiz" => Segment::Quiz(arg),
            "img" => Segment::Image(arg),
            "video" => Segment::Video(arg),
            _ => Segment::File(arg),
        });
        cursor = whole.end();
    }
    if cursor < content.len() {
        out.push(Segment::Text(content[cursor..].to_string()));
    }
    out
}

/// Quiz ids referenced by a lesson, in document order. Drives both embedding
/// and the lesson completion check.
pub fn quiz_ids(content: &str) -> Vec<String> {
    segments(content)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Quiz(id) => Some(id),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_single_segment() {
        assert_eq!(
            segments("Just a paragraph."),
            vec![Segment::Text("Just a paragraph.".into())]
        );
    }

    #[test]
    fn shortcodes_split_the_text_in_document_order() {
        let content = "Intro [img:diagram.png] middle [quiz:quiz-1] outro";
        assert_eq!(
            segments(content),
            vec![
                Segment::Text("Intro ".into()),
                Segment::Image("diagram.png".into()),
                Segment::Text(" middle ".into()),
                Segment::Quiz("quiz-1".into()),
                Segment::Text(" outro".into()),
            ]
        );
    }

    #[test]
    fn all_four_shortcode_kinds_parse() {
        let content = "[quiz:q][img:i.png][video:v.mp4][file:f.pdf]";
        assert_eq!(
            segments(content),
            vec![
                Segment::Quiz("q".into()),
                Segment::Image("i.png".into()),
                Segment::Video("v.mp4".into()),
                Segment::File("f.pdf".into()),
            ]
        );
    }

    #[test]
    fn unknown_bracket_constructs_stay_literal() {
        let content = "See [note:1] and [quiz:q1].";
        assert_eq!(
            segments(content),
            vec![
                Segment::Text("See [note:1] and ".into()),
                Segment::Quiz("q1".into()),
                Segment::Text(".".into()),
            ]
        );
    }

    #[test]
    fn quiz_ids_come_back_in_order() {
        let content = "[quiz:b] text [img:x.png] [quiz:a]";
        assert_eq!(quiz_ids(content), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn ids_are_trimmed() {
        assert_eq!(quiz_ids("[quiz: quiz-7 ]"), vec!["quiz-7".to_string()]);
    }
}

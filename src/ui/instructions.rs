use egui::RichText;

use super::theme::DisplayTheme;

/// Student instructions shown on every exam screen. Spans wrapped in
/// `{...}` are rendered as highlighted keyword chips.
pub const INSTRUCTIONS: [&str; 6] = [
    "All students should be in the classroom at 7:45 a.m.",
    "Students should leave all things related to the exam subject out of the exam class.",
    "Students are {not allowed} to use correction pen on the answer sheet.",
    "Students should write name, date, subject, and grade on the answer sheet.",
    "If a student does not know the answer to a question, he/she should write \"I don't know\" or cross out the space for the answer.",
    "Students {should not} have mobiles in the exam room.",
];

/// A piece of an instruction line after splitting on highlight markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlight(&'a str),
}

/// Split `{keyword}` markers out of a line.
///
/// An opening brace without a closing one is kept as plain text.
pub fn parse_highlights(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open + 1..].find('}').map(|i| open + 1 + i) else {
            break;
        };
        if open > 0 {
            segments.push(Segment::Plain(&rest[..open]));
        }
        segments.push(Segment::Highlight(&rest[open + 1..close]));
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Plain(rest));
    }
    segments
}

pub fn render_instructions(ui: &mut egui::Ui, theme: &DisplayTheme) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Student Instructions")
                .size(16.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new("READ CAREFULLY")
                    .size(11.0)
                    .strong()
                    .color(theme.primary),
            );
        });
    });
    ui.add_space(6.0);

    for (index, line) in INSTRUCTIONS.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new(format!("{}.", index + 1))
                    .strong()
                    .color(theme.primary),
            );
            for segment in parse_highlights(line) {
                match segment {
                    Segment::Plain(text) => {
                        ui.label(RichText::new(text).size(15.0).color(theme.text_primary));
                    }
                    Segment::Highlight(text) => {
                        ui.label(
                            RichText::new(text)
                                .size(15.0)
                                .strong()
                                .color(theme.danger)
                                .background_color(theme.danger.gamma_multiply(0.12)),
                        );
                    }
                }
            }
        });
        ui.add_space(6.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_single_segment() {
        let segments = parse_highlights("No markers here.");
        assert_eq!(segments, vec![Segment::Plain("No markers here.")]);
    }

    #[test]
    fn test_single_highlight_splits_line() {
        let segments = parse_highlights("Students are {not allowed} to talk.");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("Students are "),
                Segment::Highlight("not allowed"),
                Segment::Plain(" to talk."),
            ]
        );
    }

    #[test]
    fn test_multiple_highlights() {
        let segments = parse_highlights("{a} and {b}");
        assert_eq!(
            segments,
            vec![
                Segment::Highlight("a"),
                Segment::Plain(" and "),
                Segment::Highlight("b"),
            ]
        );
    }

    #[test]
    fn test_unmatched_brace_stays_plain() {
        let segments = parse_highlights("odd {marker without end");
        assert_eq!(segments, vec![Segment::Plain("odd {marker without end")]);
    }

    #[test]
    fn test_empty_line_yields_no_segments() {
        assert!(parse_highlights("").is_empty());
    }
}

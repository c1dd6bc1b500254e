//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, FeedbackPeg, Peg, peg_letter};

/// How pegs are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PegStyle {
    #[default]
    Emoji,
    Letters,
}

/// Emoji for each peg value, indexed by `peg - 1`
const PEG_EMOJI: [&str; 8] = ["🔴", "🟢", "🔵", "⚪", "🟡", "🟣", "🟠", "🟤"];

/// Palette names, indexed by `peg - 1`
pub const PEG_NAMES: [&str; 8] = [
    "Red", "Green", "Blue", "White", "Yellow", "Purple", "Orange", "browN",
];

/// Glyph for one code peg
#[must_use]
pub fn peg_glyph(peg: Peg, style: PegStyle) -> String {
    match style {
        PegStyle::Emoji => usize::from(peg)
            .checked_sub(1)
            .and_then(|i| PEG_EMOJI.get(i))
            .map_or_else(|| "❔".to_string(), |s| (*s).to_string()),
        PegStyle::Letters => peg_letter(peg).to_string(),
    }
}

/// Glyph for one feedback peg
#[must_use]
pub const fn feedback_glyph(peg: FeedbackPeg, style: PegStyle) -> &'static str {
    match (peg, style) {
        (FeedbackPeg::Exact, PegStyle::Emoji) => "🔳",
        (FeedbackPeg::Partial, PegStyle::Emoji) => "🔲",
        (FeedbackPeg::Miss, PegStyle::Emoji) => "➖",
        (FeedbackPeg::Exact, PegStyle::Letters) => "X",
        (FeedbackPeg::Partial, PegStyle::Letters) => "O",
        (FeedbackPeg::Miss, PegStyle::Letters) => "-",
    }
}

/// Format a code, pegs separated by spaces
#[must_use]
pub fn code_to_glyphs(code: &Code, style: PegStyle) -> String {
    code.pegs()
        .iter()
        .map(|&peg| peg_glyph(peg, style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a code compactly, no separators
#[must_use]
pub fn code_to_compact(code: &Code, style: PegStyle) -> String {
    code.pegs().iter().map(|&peg| peg_glyph(peg, style)).collect()
}

/// Format feedback as sorted pegs, e.g. "XXO-"
#[must_use]
pub fn feedback_to_glyphs(feedback: Feedback, positions: usize, style: PegStyle) -> String {
    feedback
        .pegs(positions)
        .into_iter()
        .map(|peg| feedback_glyph(peg, style))
        .collect()
}

/// Hidden secret placeholder
#[must_use]
pub fn hidden_code(positions: usize, style: PegStyle) -> String {
    let glyph = match style {
        PegStyle::Emoji => "❔",
        PegStyle::Letters => "?",
    };
    vec![glyph; positions].join(" ")
}

/// The available colors, e.g. "🔴 Red  🟢 Green" or "R Red  G Green"
#[must_use]
pub fn palette_legend(colors: Peg, style: PegStyle) -> String {
    (1..=colors)
        .map(|peg| format!("{} {}", peg_glyph(peg, style), PEG_NAMES[usize::from(peg) - 1]))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Lay codes out `per_row` to a line, comma separated
#[must_use]
pub fn candidate_rows(codes: &[Code], per_row: usize, style: PegStyle) -> Vec<String> {
    codes
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|code| code_to_compact(code, style))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(pegs: &[u8]) -> Code {
        Code::from_pegs(pegs.to_vec())
    }

    #[test]
    fn code_glyphs_in_both_styles() {
        let c = code(&[1, 4, 3, 1]);
        assert_eq!(code_to_glyphs(&c, PegStyle::Letters), "R W B R");
        assert_eq!(code_to_glyphs(&c, PegStyle::Emoji), "🔴 ⚪ 🔵 🔴");
        assert_eq!(code_to_compact(&c, PegStyle::Letters), "RWBR");
    }

    #[test]
    fn feedback_glyphs_sorted() {
        let feedback = Feedback::new(1, 2);
        assert_eq!(feedback_to_glyphs(feedback, 4, PegStyle::Letters), "XOO-");
        assert_eq!(feedback_to_glyphs(feedback, 4, PegStyle::Emoji), "🔳🔲🔲➖");
    }

    #[test]
    fn unknown_peg_has_placeholder() {
        assert_eq!(peg_glyph(0, PegStyle::Emoji), "❔");
        assert_eq!(peg_glyph(0, PegStyle::Letters), "?");
    }

    #[test]
    fn hidden_code_matches_length() {
        assert_eq!(hidden_code(4, PegStyle::Letters), "? ? ? ?");
    }

    #[test]
    fn legend_lists_configured_colors() {
        assert_eq!(palette_legend(2, PegStyle::Letters), "R Red  G Green");
    }

    #[test]
    fn candidate_rows_wrap() {
        let codes: Vec<Code> = (1..=7).map(|p| code(&[p, p])).collect();
        let rows = candidate_rows(&codes, 5, PegStyle::Letters);
        assert_eq!(rows, vec!["RR, GG, BB, WW, YY", "PP, OO"]);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}

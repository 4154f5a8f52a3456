//! Rulebooks for the dialog subcommands.

use crate::sequence::{DialogAnswer, Rule, Rulebook};

use super::lines;

fn contains(answer: &DialogAnswer, needle: &str) -> bool {
    answer.text().is_some_and(|text| text.contains(needle))
}

fn cancelled(answer: &DialogAnswer) -> bool {
    answer.is_cancelled()
}

/// `confirm`: believing π is exactly 3 is the wrong answer
pub fn confirm_rules() -> Rulebook {
    Rulebook::new()
        .rule(Rule::fixed(
            "engineer",
            |a| *a == DialogAnswer::Confirmed(true),
            lines::CONFIRM_ENGINEER,
        ))
        .rule(Rule::fixed(
            "correct",
            |a| *a == DialogAnswer::Confirmed(false),
            lines::CONFIRM_CORRECT,
        ))
}

/// `select`: substring checks in priority order
///
/// Labels are matched by substring, so the π check wins for any label that
/// mentions π and the `e` check catches most of the rest.
pub fn fighter_rules() -> Rulebook {
    Rulebook::new()
        .rule(Rule::fixed("cancelled", cancelled, lines::SELECT_CANCELLED))
        .rule(Rule::fixed("correct", |a| contains(a, "π"), lines::SELECT_PI))
        .rule(Rule::fixed("euler", |a| contains(a, "e"), lines::SELECT_EULER))
        .rule(Rule::fixed("phi", |a| contains(a, "φ"), lines::SELECT_PHI))
        .rule(Rule::fixed("tau", |a| contains(a, "τ"), lines::SELECT_TAU))
        .rule(Rule::fixed(
            "imaginary",
            |a| contains(a, "i"),
            lines::SELECT_IMAGINARY,
        ))
}

// ============================================================================
// Recitation
// ============================================================================

/// How well a recitation of π went
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecitationTier {
    /// `3` or `3.`
    SingleDigit,
    /// `3.1`, `3.14` or `3.141`
    Schoolbook,
    /// `3.1415` or `3.14159`
    FiveIsh,
    /// A correct prefix longer than 20 characters
    LongPrefix,
    /// A correct prefix longer than 10 characters
    DoubleDigits,
    /// Any other correct prefix, including nothing at all
    TechnicallyCorrect,
    /// Not a prefix of π
    TotallyWrong,
}

impl RecitationTier {
    /// Tiers in evaluation order
    pub const ALL: [RecitationTier; 7] = [
        Self::SingleDigit,
        Self::Schoolbook,
        Self::FiveIsh,
        Self::LongPrefix,
        Self::DoubleDigits,
        Self::TechnicallyCorrect,
        Self::TotallyWrong,
    ];

    /// Classify raw input; whitespace anywhere is ignored
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let clean = clean(raw);
        let prefix = lines::PI_REFERENCE.starts_with(clean.as_str());

        match clean.as_str() {
            "3" | "3." => Self::SingleDigit,
            "3.1" | "3.14" | "3.141" => Self::Schoolbook,
            "3.1415" | "3.14159" => Self::FiveIsh,
            _ if prefix && clean.len() > 20 => Self::LongPrefix,
            _ if prefix && clean.len() > 10 => Self::DoubleDigits,
            _ if prefix => Self::TechnicallyCorrect,
            _ => Self::TotallyWrong,
        }
    }

    /// Rule name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SingleDigit => "single-digit",
            Self::Schoolbook => "schoolbook",
            Self::FiveIsh => "five-ish",
            Self::LongPrefix => "long-prefix",
            Self::DoubleDigits => "double-digits",
            Self::TechnicallyCorrect => "technically-correct",
            Self::TotallyWrong => "totally-wrong",
        }
    }

    /// What π says about `raw`
    #[must_use]
    pub fn response(self, raw: &str) -> String {
        match self {
            Self::SingleDigit => lines::INPUT_SINGLE_DIGIT.to_string(),
            Self::Schoolbook => lines::INPUT_SCHOOLBOOK.to_string(),
            Self::FiveIsh => lines::INPUT_FIVE_ISH.to_string(),
            // "3." is not a digit
            Self::LongPrefix => lines::recited_long(clean(raw).len().saturating_sub(2)),
            Self::DoubleDigits => lines::INPUT_DOUBLE_DIGITS.to_string(),
            Self::TechnicallyCorrect => lines::recited_technically(raw),
            Self::TotallyWrong => lines::recited_wrong(raw),
        }
    }
}

fn clean(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `input`: cancellation, then exactly one recitation tier
pub fn recitation_rules() -> Rulebook {
    RecitationTier::ALL.into_iter().fold(
        Rulebook::new().rule(Rule::fixed("cancelled", cancelled, lines::INPUT_CANCELLED)),
        |book, tier| {
            book.rule(Rule::new(
                tier.name(),
                move |a| a.text().is_some_and(|t| RecitationTier::classify(t) == tier),
                move |a| tier.response(a.text().unwrap_or_default()),
            ))
        },
    )
}

// ============================================================================
// Poem
// ============================================================================

fn excerpt(poem: &str) -> String {
    let mut quoted: String = poem.chars().take(lines::POEM_QUOTE_LIMIT).collect();
    if poem.chars().count() > lines::POEM_QUOTE_LIMIT {
        quoted.push_str("...");
    }
    quoted
}

fn mentions(answer: &DialogAnswer, words: &[&str]) -> bool {
    answer.text().is_some_and(|text| {
        let lower = text.to_lowercase();
        words.iter().any(|w| lower.contains(w))
    })
}

/// `editor-dialog`: tau is checked before π
pub fn poem_rules() -> Rulebook {
    Rulebook::new()
        .rule(Rule::fixed("cancelled", cancelled, lines::POEM_CANCELLED))
        .rule(Rule::fixed(
            "tau",
            |a| mentions(a, &["tau", "τ"]),
            lines::POEM_TAU,
        ))
        .rule(Rule::new(
            "on-topic",
            |a| mentions(a, &["pi", "π"]),
            |a| lines::poem_on_topic(&excerpt(a.text().unwrap_or_default())),
        ))
        .rule(Rule::new(
            "off-topic",
            |a| a.text().is_some(),
            |a| lines::poem_off_topic(&excerpt(a.text().unwrap_or_default())),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> DialogAnswer {
        DialogAnswer::Text(s.to_string())
    }

    fn verdict(book: &Rulebook, answer: &DialogAnswer) -> &'static str {
        book.judge(answer).map_or("none", |v| v.rule)
    }

    #[test]
    fn test_confirm_branches() {
        let book = confirm_rules();
        assert_eq!(verdict(&book, &DialogAnswer::Confirmed(true)), "engineer");
        assert_eq!(verdict(&book, &DialogAnswer::Confirmed(false)), "correct");
    }

    #[test]
    fn test_fighter_branches() {
        let book = fighter_rules();
        assert_eq!(verdict(&book, &DialogAnswer::Cancelled), "cancelled");
        assert_eq!(verdict(&book, &text(lines::SELECT_OPTIONS[0])), "correct");
        assert_eq!(verdict(&book, &text("e (euler)")), "euler");
        assert_eq!(verdict(&book, &text("φ")), "phi");
        assert_eq!(verdict(&book, &text("τ")), "tau");
        assert_eq!(verdict(&book, &text("i")), "imaginary");
        assert_eq!(verdict(&book, &text("xyz")), "none");
    }

    #[test]
    fn test_labels_mentioning_pi_are_correct() {
        let book = fighter_rules();
        assert_eq!(verdict(&book, &text(lines::SELECT_OPTIONS[1])), "correct");
        assert_eq!(verdict(&book, &text(lines::SELECT_OPTIONS[3])), "correct");
    }

    #[test]
    fn test_recitation_tiers() {
        let cases = [
            ("3", RecitationTier::SingleDigit),
            ("3.", RecitationTier::SingleDigit),
            (" 3 . 1 4 ", RecitationTier::Schoolbook),
            ("3.141", RecitationTier::Schoolbook),
            ("3.14159", RecitationTier::FiveIsh),
            ("3.1415926", RecitationTier::TechnicallyCorrect),
            ("3.141592653", RecitationTier::DoubleDigits),
            (lines::PI_REFERENCE, RecitationTier::LongPrefix),
            ("", RecitationTier::TechnicallyCorrect),
            ("2.71828", RecitationTier::TotallyWrong),
            ("3.15", RecitationTier::TotallyWrong),
            (
                "3.14159265358979323846264338327950288419716939937510999",
                RecitationTier::TotallyWrong,
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(RecitationTier::classify(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_long_prefix_counts_decimals() {
        let response = RecitationTier::LongPrefix.response(lines::PI_REFERENCE);
        assert!(response.starts_with("🥧 50 digits?!"));
    }

    #[test]
    fn test_wrong_recitation_quotes_raw_input() {
        let book = recitation_rules();
        let judged = book.judge(&text(" 4 2 ")).unwrap();
        assert_eq!(judged.rule, "totally-wrong");
        assert!(judged.text.starts_with("🥧 ' 4 2 '?!?!"));
    }

    #[test]
    fn test_every_text_answer_gets_one_recitation_verdict() {
        let book = recitation_rules();
        for input in ["3", "3.14", "3.1415", "3.14159265358979", "nope", "", "π"] {
            let judged = book.judge(&text(input)).unwrap();
            assert_eq!(judged.rule, RecitationTier::classify(input).name());
        }
        assert_eq!(verdict(&book, &DialogAnswer::Cancelled), "cancelled");
    }

    #[test]
    fn test_poem_branches() {
        let book = poem_rules();
        assert_eq!(verdict(&book, &DialogAnswer::Cancelled), "cancelled");
        assert_eq!(verdict(&book, &text("Ode to TAU and PI")), "tau");
        assert_eq!(verdict(&book, &text("τ")), "tau");
        assert_eq!(verdict(&book, &text(lines::POEM_TEMPLATE)), "on-topic");
        assert_eq!(verdict(&book, &text("Apple PIE")), "on-topic");
        assert_eq!(verdict(&book, &text("roses and violets")), "off-topic");
    }

    #[test]
    fn test_poem_excerpt_is_capped() {
        let long = "π".repeat(250);
        let quoted = excerpt(&long);
        assert_eq!(quoted.chars().count(), 203);
        assert!(quoted.ends_with("..."));
        assert_eq!(excerpt("short"), "short");
    }
}

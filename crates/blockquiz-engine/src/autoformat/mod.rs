//! Text-pattern rules that turn a text block into a custom block.
//!
//! Rules run against the complete text of the block being edited. A rule
//! either matches the whole block or leaves it alone; there is no partial
//! conversion.
//!
//! The structured MCQ syntax follows the learnr quiz notation
//! (<https://bookdown.org/yihui/rmarkdown/learnr-quiz.html>). Two dialects
//! are accepted because earlier revisions of the editor disagreed on the
//! separators; see [`McqDialect`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::blocks::mcq;
use crate::models::{AiAttrs, Answer, Block, McqAttrs};

/// Accepted spellings of the structured `question(...)` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum McqDialect {
    /// `question("Q", answer("a"), answer("b", correct = TRUE))` followed
    /// by a newline. Commas separate the question from the answers and the
    /// answers from each other.
    #[default]
    Learnr,
    /// `question("Q", answer("a") answer("b", correct=TRUE))`. Answers are
    /// separated by whitespace or newlines only, the answer list may be
    /// omitted entirely and no trailing newline is needed.
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `?/` opens an AI block
    AiShortcut,
    /// `???` opens an MCQ block with a worked example
    McqShortcut,
    /// `question("...", answer("..."), ...)` becomes an MCQ block
    McqStructured,
}

fn ai_shortcut_regex() -> &'static Regex {
    static AI_SHORTCUT: OnceLock<Regex> = OnceLock::new();
    AI_SHORTCUT.get_or_init(|| Regex::new(r"^\?/$").expect("Invalid AI shortcut regex"))
}

fn mcq_shortcut_regex() -> &'static Regex {
    static MCQ_SHORTCUT: OnceLock<Regex> = OnceLock::new();
    MCQ_SHORTCUT.get_or_init(|| Regex::new(r"^\?{3}\s*$").expect("Invalid MCQ shortcut regex"))
}

fn learnr_regex() -> &'static Regex {
    static LEARNR: OnceLock<Regex> = OnceLock::new();
    LEARNR.get_or_init(|| {
        Regex::new(concat!(
            r#"^\s*(?:\{r [^\n]+, echo=FALSE\}\r?\n)?"#,
            r#"question\("([^"]+)"\s*,\s*"#,
            r#"((?:answer\("[^"]+"\s*,?\s*(?:correct\s*=\s*TRUE)?\s*\)[,\s]*)*)"#,
            r#"\)\r?\n\s*$"#,
        ))
        .expect("Invalid learnr MCQ regex")
    })
}

fn compact_regex() -> &'static Regex {
    static COMPACT: OnceLock<Regex> = OnceLock::new();
    COMPACT.get_or_init(|| {
        Regex::new(concat!(
            r#"^\s*(?:\{r [^\n]+, echo=FALSE\}\r?\n)?"#,
            r#"question\("([^"]+)""#,
            r#"(?:,\s*((?:\n?\s*answer\("[^"]+"(?:,\s*correct\s*=\s*TRUE)?\))+))?"#,
            r#"\s*\)\s*$"#,
        ))
        .expect("Invalid compact MCQ regex")
    })
}

fn answer_regex() -> &'static Regex {
    static ANSWER: OnceLock<Regex> = OnceLock::new();
    ANSWER.get_or_init(|| {
        Regex::new(r#"answer\("([^"]+)"\s*,?\s*(correct\s*=\s*TRUE)?\s*\)"#)
            .expect("Invalid answer regex")
    })
}

/// Extract question and ordered answers from structured quiz text.
///
/// Returns `None` unless the whole text is a well-formed `question(...)`
/// call in the given dialect.
pub fn parse_structured_mcq(text: &str, dialect: McqDialect) -> Option<McqAttrs> {
    let regex = match dialect {
        McqDialect::Learnr => learnr_regex(),
        McqDialect::Compact => compact_regex(),
    };
    let caps = regex.captures(text)?;
    let question_text = caps[1].to_string();
    let answers_block = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    let answers = answer_regex()
        .captures_iter(answers_block)
        .map(|answer| Answer::new(&answer[1], answer.get(2).is_some()))
        .collect();

    Some(McqAttrs::new(question_text, answers))
}

/// First rule whose pattern the text block satisfies, with the block it
/// converts into
pub fn match_rule(text: &str, dialect: McqDialect) -> Option<(Rule, Block)> {
    if ai_shortcut_regex().is_match(text) {
        return Some((Rule::AiShortcut, Block::Ai(AiAttrs::default())));
    }
    if mcq_shortcut_regex().is_match(text) {
        return Some((Rule::McqShortcut, Block::Mcq(mcq::shortcut_example())));
    }
    parse_structured_mcq(text, dialect).map(|attrs| (Rule::McqStructured, Block::Mcq(attrs)))
}

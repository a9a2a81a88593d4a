//! Card text parser.
//!
//! Turns the `front|back` text a user types into an ordered list of cards.

use crate::error::FlashcardError;
use crate::model::QnA;

/// Separator between the front and back of a card.
pub const SEPARATOR: char = '|';

/// Parse newline-separated `question|answer` lines.
///
/// Each line is split on its first `|` and both sides are trimmed. Any line
/// without a separator or with an empty side rejects the whole input, so a
/// partial set is never produced.
pub fn parse_cards(raw: &str) -> Result<Vec<QnA>, FlashcardError> {
    raw.split('\n')
        .enumerate()
        .map(|(i, line)| parse_line(line).ok_or(FlashcardError::MalformedCard { line: i + 1 }))
        .collect()
}

fn parse_line(line: &str) -> Option<QnA> {
    let (question, answer) = line.split_once(SEPARATOR)?;
    let (question, answer) = (question.trim(), answer.trim());
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some(QnA::new(question, answer))
}

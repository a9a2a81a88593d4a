//! Practice session state machine and front-end page dispatch.
//!
//! A session walks a set's cards in order. Each card is shown question side
//! first; it may be flipped any number of times, then marked correct or
//! incorrect, which moves to the next card. After the last card the session
//! is finished and can produce a [`ScoreRecord`].

use std::fmt;

use thiserror::Error;

use crate::model::{QnA, ScoreRecord};

/// Which face of the current card is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Question,
    Answer,
}

impl Side {
    fn flipped(self) -> Self {
        match self {
            Side::Question => Side::Answer,
            Side::Answer => Side::Question,
        }
    }
}

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeState {
    Showing { index: usize, side: Side },
    Finished,
}

/// Reasons a finished session cannot be turned into a score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("session is not finished")]
    NotFinished,
    #[error("a username is required to save a score")]
    EmptyUsername,
    #[error("no cards were answered")]
    NoAnswers,
}

/// An in-progress practice run over one flashcard set.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    set_name: String,
    cards: Vec<QnA>,
    state: PracticeState,
    correct: u32,
    incorrect: u32,
}

impl PracticeSession {
    pub fn new(set_name: impl Into<String>, cards: Vec<QnA>) -> Self {
        let state = if cards.is_empty() {
            PracticeState::Finished
        } else {
            PracticeState::Showing {
                index: 0,
                side: Side::Question,
            }
        };
        Self {
            set_name: set_name.into(),
            cards,
            state,
            correct: 0,
            incorrect: 0,
        }
    }

    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    pub fn state(&self) -> PracticeState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == PracticeState::Finished
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card being shown, if any.
    pub fn current_card(&self) -> Option<&QnA> {
        match self.state {
            PracticeState::Showing { index, .. } => self.cards.get(index),
            PracticeState::Finished => None,
        }
    }

    /// Text of the visible face of the current card.
    pub fn visible_text(&self) -> Option<&str> {
        match self.state {
            PracticeState::Showing { index, side } => {
                let card = self.cards.get(index)?;
                Some(match side {
                    Side::Question => card.question.as_str(),
                    Side::Answer => card.answer.as_str(),
                })
            }
            PracticeState::Finished => None,
        }
    }

    pub fn flip(&mut self) {
        if let PracticeState::Showing { index, side } = self.state {
            self.state = PracticeState::Showing {
                index,
                side: side.flipped(),
            };
        }
    }

    pub fn mark_correct(&mut self) {
        if !self.is_finished() {
            self.correct += 1;
            self.advance();
        }
    }

    pub fn mark_incorrect(&mut self) {
        if !self.is_finished() {
            self.incorrect += 1;
            self.advance();
        }
    }

    fn advance(&mut self) {
        if let PracticeState::Showing { index, .. } = self.state {
            let next = index + 1;
            self.state = if next >= self.cards.len() {
                PracticeState::Finished
            } else {
                PracticeState::Showing {
                    index: next,
                    side: Side::Question,
                }
            };
        }
    }

    /// `(correct, incorrect)` so far.
    pub fn tally(&self) -> (u32, u32) {
        (self.correct, self.incorrect)
    }

    /// `floor(correct / answered * 100)`, or `None` if nothing was answered.
    pub fn percent(&self) -> Option<u32> {
        let answered = self.correct + self.incorrect;
        if answered == 0 {
            return None;
        }
        Some(((self.correct as f64 / answered as f64) * 100.0).floor() as u32)
    }

    /// Build the record to save for `username`.
    pub fn score_record(&self, username: &str) -> Result<ScoreRecord, ScoreError> {
        if !self.is_finished() {
            return Err(ScoreError::NotFinished);
        }
        if username.is_empty() {
            return Err(ScoreError::EmptyUsername);
        }
        let percent = self.percent().ok_or(ScoreError::NoAnswers)?;
        Ok(ScoreRecord::new(
            username,
            self.set_name.clone(),
            percent.to_string(),
        ))
    }
}

/// Pages of the study front end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    List,
    Create,
    Practice {
        name: String,
    },
    Scores,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::List => write!(f, "list"),
            Page::Create => write!(f, "create"),
            Page::Practice { name } => write!(f, "practice ({name})"),
            Page::Scores => write!(f, "scores"),
        }
    }
}

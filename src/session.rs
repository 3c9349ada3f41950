//! Round state machine: sequences a fixed number of questions and keeps score.

use chrono::Utc;
use thiserror::Error;

use crate::questions::QuizQuestion;
use crate::statistics::GameRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no question available in the current session state")]
    OutOfRange,
    #[error("not enough questions: have {have}, need {need}")]
    NotEnoughQuestions { have: usize, need: usize },
    #[error("a round must contain at least one question")]
    EmptyRound,
}

/// What the caller learns from submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub was_correct: bool,
    pub is_round_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    InProgress,
    Complete,
}

/// One playthrough of a fixed-length question sequence.
///
/// `current_index` and `correct_count` only ever increase within a round;
/// the only way out of `Complete` is another call to [`QuizSession::start`].
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    total: usize,
    current_index: usize,
    correct_count: usize,
    phase: Phase,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            total: 0,
            current_index: 0,
            correct_count: 0,
            phase: Phase::NotStarted,
        }
    }

    /// Begin a round over the first `total` questions of `questions`.
    pub fn start(
        &mut self,
        mut questions: Vec<QuizQuestion>,
        total: usize,
    ) -> Result<(), SessionError> {
        if total == 0 {
            return Err(SessionError::EmptyRound);
        }
        if questions.len() < total {
            return Err(SessionError::NotEnoughQuestions {
                have: questions.len(),
                need: total,
            });
        }

        questions.truncate(total);
        self.questions = questions;
        self.total = total;
        self.current_index = 0;
        self.correct_count = 0;
        self.phase = Phase::InProgress;
        Ok(())
    }

    pub fn current_question(&self) -> Result<&QuizQuestion, SessionError> {
        match self.phase {
            Phase::InProgress => Ok(&self.questions[self.current_index]),
            _ => Err(SessionError::OutOfRange),
        }
    }

    /// Score `answer` against the current question and advance.
    ///
    /// On the last question the session moves to `Complete` and the index
    /// stays put; further submissions fail until [`QuizSession::start`].
    pub fn submit_answer(&mut self, answer: bool) -> Result<AnswerOutcome, SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::OutOfRange);
        }

        let was_correct = answer == self.questions[self.current_index].correct_answer;
        if was_correct {
            self.correct_count += 1;
        }

        let is_round_complete = self.current_index == self.total - 1;
        if is_round_complete {
            self.phase = Phase::Complete;
        } else {
            self.current_index += 1;
        }

        Ok(AnswerOutcome {
            was_correct,
            is_round_complete,
        })
    }

    /// Summary of a completed round, stamped with the current time.
    pub fn result(&self) -> Result<GameRecord, SessionError> {
        match self.phase {
            Phase::Complete => Ok(GameRecord {
                correct: self.correct_count as u32,
                total: self.total as u32,
                date: Utc::now(),
            }),
            _ => Err(SessionError::OutOfRange),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// 1-based number of the question currently on screen.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

//! Round lifecycle: loading questions, accepting answers, finishing up.

use std::time::Instant;

use super::super::{
    app::App,
    types::{AnswerFlash, FEEDBACK_DELAY, Screen},
};

/// Helper struct for driving a round through the quiz session.
pub struct RoundHandler<'a> {
    app: &'a mut App,
}

impl<'a> RoundHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Load a fresh question set and start a new round. Any load failure
    /// lands on the retry screen with the source's message.
    pub fn start_round(&mut self) {
        self.app.flash = None;
        self.app.load_error = None;

        let questions = match self.app.source.load_questions() {
            Ok(mut questions) => {
                self.app.source.question_shuffle(&mut questions);
                questions
            }
            Err(err) => {
                tracing::warn!("question load failed: {err}");
                self.app.log(format!("Question load failed: {err}"));
                self.app.load_error = Some(err.to_string());
                self.app.screen = Screen::LoadFailed;
                return;
            }
        };

        match self.app.session.start(questions, self.app.total) {
            Ok(()) => {
                self.app.log(format!("Round started: {} questions", self.app.total));
                self.app.screen = Screen::Quiz;
            }
            Err(err) => {
                self.app.log(format!("Could not start round: {err}"));
                self.app.load_error = Some(err.to_string());
                self.app.screen = Screen::LoadFailed;
            }
        }
    }

    /// Submit a yes/no answer. Ignored while feedback for the previous
    /// answer is still on screen.
    pub fn submit_answer(&mut self, answer: bool) {
        if self.app.screen != Screen::Quiz || self.app.flash.is_some() {
            return;
        }

        let (question_text, question_number, poster_len) = match self.app.session.current_question()
        {
            Ok(question) => (
                question.text.clone(),
                self.app.session.question_number(),
                question.image.len(),
            ),
            Err(_) => return,
        };

        match self.app.session.submit_answer(answer) {
            Ok(outcome) => {
                self.app.log(if outcome.was_correct {
                    "Answer correct"
                } else {
                    "Answer incorrect"
                });
                self.app.flash = Some(AnswerFlash {
                    question_text,
                    question_number,
                    poster_len,
                    was_correct: outcome.was_correct,
                    round_complete: outcome.is_round_complete,
                    shown_at: Instant::now(),
                });
            }
            Err(err) => {
                self.app.log(format!("Answer rejected: {err}"));
            }
        }
    }

    /// Clear the answer feedback once its delay has elapsed; on the last
    /// question this is also what moves the app to the summary screen.
    pub fn advance_if_due(&mut self) {
        let due = self
            .app
            .flash
            .as_ref()
            .is_some_and(|flash| flash.shown_at.elapsed() >= FEEDBACK_DELAY);
        if !due {
            return;
        }

        let round_complete = self
            .app
            .flash
            .take()
            .map(|flash| flash.round_complete)
            .unwrap_or(false);

        if round_complete {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        match self.app.session.result() {
            Ok(record) => {
                self.app
                    .log(format!("Round finished: {}/{}", record.correct, record.total));
                if let Err(err) = self.app.stats.record(record.clone()) {
                    tracing::error!("failed to persist game record: {err}");
                    self.app.log(format!("Failed to persist game record: {err}"));
                }
                self.app.last_result = Some(record);
                self.app.screen = Screen::Results;
            }
            Err(err) => {
                self.app.log(format!("Round result unavailable: {err}"));
            }
        }
    }
}

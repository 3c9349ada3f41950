use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const MAX_LOG_LINES: usize = 300;

/// How long answer feedback stays on screen before the next question.
pub const FEEDBACK_DELAY: Duration = Duration::from_secs(1);

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap();
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap().clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Which view is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Quiz,
    Results,
    LoadFailed,
}

/// Feedback for the question just answered, held until the delay expires.
///
/// The session advances the moment an answer is submitted, so the answered
/// question's display data is captured here for the feedback interval.
pub struct AnswerFlash {
    pub question_text: String,
    pub question_number: usize,
    pub poster_len: usize,
    pub was_correct: bool,
    pub round_complete: bool,
    pub shown_at: Instant,
}

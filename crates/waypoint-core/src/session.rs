//! Assessment session state.
//!
//! The engine itself is stateless; interactive response collection lives
//! here as an explicit session struct with an injected clock. No ambient
//! timers, so tests control time completely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AssessmentResponse, SKIP_SENTINEL};

/// Source of "now" for session timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Mutable state of one in-progress assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub id: Uuid,
    /// Raw collected responses in collection order, duplicates included.
    pub responses: Vec<AssessmentResponse>,
    /// Index of the next question to present.
    pub current_index: usize,
    pub started_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub completed: bool,
    /// Total questions in the questionnaire this session walks.
    pub total_questions: usize,
}

impl AssessmentSession {
    /// Start a fresh session over `total_questions` items.
    pub fn new(total_questions: usize, clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self {
            id: Uuid::new_v4(),
            responses: Vec::new(),
            current_index: 0,
            started_at: now,
            last_activity: now,
            completed: false,
            total_questions,
        }
    }

    /// Record an answer and advance.
    pub fn record_answer(&mut self, question_id: &str, value: f64, clock: &dyn Clock) {
        self.push_response(question_id, value, clock);
    }

    /// Record an explicit skip and advance.
    pub fn record_skip(&mut self, question_id: &str, clock: &dyn Clock) {
        self.push_response(question_id, SKIP_SENTINEL, clock);
    }

    fn push_response(&mut self, question_id: &str, value: f64, clock: &dyn Clock) {
        let now = clock.now();
        self.responses.push(AssessmentResponse {
            question_id: question_id.to_string(),
            value,
            timestamp: now,
        });
        self.last_activity = now;
        self.current_index += 1;
        if self.current_index >= self.total_questions {
            self.completed = true;
        }
    }

    /// Fraction of the questionnaire walked so far, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.total_questions == 0 {
            return 1.0;
        }
        (self.current_index as f64 / self.total_questions as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn new_session_starts_empty_and_incomplete() {
        let clock = fixed();
        let session = AssessmentSession::new(3, &clock);
        assert!(session.responses.is_empty());
        assert_eq!(session.progress(), 0.0);
        assert!(!session.completed);
        assert_eq!(session.started_at, clock.now());
    }

    #[test]
    fn answers_advance_progress_and_touch_activity() {
        let clock = fixed();
        let mut session = AssessmentSession::new(2, &clock);
        session.record_answer("q1", 4.0, &clock);
        assert_eq!(session.responses.len(), 1);
        assert!((session.progress() - 0.5).abs() < 1e-12);
        assert!(!session.completed);

        session.record_skip("q2", &clock);
        assert!(session.completed);
        assert_eq!(session.progress(), 1.0);
        assert!(session.responses[1].is_skip());
    }

    #[test]
    fn empty_questionnaire_is_immediately_complete_progress() {
        let clock = fixed();
        let session = AssessmentSession::new(0, &clock);
        assert_eq!(session.progress(), 1.0);
    }

    #[test]
    fn timestamps_come_from_the_injected_clock() {
        let clock = fixed();
        let mut session = AssessmentSession::new(1, &clock);
        session.record_answer("q1", 3.0, &clock);
        assert_eq!(session.responses[0].timestamp, clock.now());
        assert_eq!(session.last_activity, clock.now());
    }
}

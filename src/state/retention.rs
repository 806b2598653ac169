//! Retention mode: a shared countdown and a stream of random targets.
//!
//! The countdown starts at [`START_SECONDS`]. A passing grade clears the
//! current node, adds [`REWARD_SECONDS`] and draws a new target; a failing one
//! costs [`PENALTY_SECONDS`] (floored at zero) and keeps the target. The run
//! ends only when a tick finds the countdown exhausted.

use super::editor::{Preview, SessionMode, SubmitGate, run_preview, starter_code};
use crate::grading::{GradeRequest, GradeResponse};
use crate::model::{GameSession, Level};

pub const START_SECONDS: u32 = 90;
pub const REWARD_SECONDS: u32 = 15;
pub const PENALTY_SECONDS: u32 = 5;
pub const PASS_SCORE: u8 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundFeedback {
    pub message: &'static str,
    pub penalty: bool,
}

impl RoundFeedback {
    fn success(plain: bool) -> Self {
        Self {
            message: if plain { "Great! +15s" } else { "SUCCESS! +15S!" },
            penalty: false,
        }
    }

    fn failure(plain: bool) -> Self {
        Self {
            message: if plain { "Incorrect! -5s" } else { "FAILED: -5S PENALTY!" },
            penalty: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetentionSession {
    catalog: &'static [Level],
    target: &'static Level,
    code: String,
    preview: Preview,
    time_left: u32,
    elapsed_secs: u64,
    nodes_cleared: u32,
    gate: SubmitGate,
    feedback: Option<RoundFeedback>,
    finished: bool,
    plain: bool,
}

impl RetentionSession {
    /// `first_index` picks the opening target; it wraps around the catalog.
    /// The catalog must not be empty.
    pub fn new(catalog: &'static [Level], first_index: usize, plain: bool) -> Self {
        let target = &catalog[first_index % catalog.len()];
        Self {
            catalog,
            target,
            code: starter_code(target.language, SessionMode::Retention).to_string(),
            preview: Preview::Idle,
            time_left: START_SECONDS,
            elapsed_secs: 0,
            nodes_cleared: 0,
            gate: SubmitGate::default(),
            feedback: None,
            finished: false,
            plain,
        }
    }

    pub fn target(&self) -> &'static Level {
        self.target
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn nodes_cleared(&self) -> u32 {
        self.nodes_cleared
    }

    pub fn feedback(&self) -> Option<RoundFeedback> {
        self.feedback
    }

    pub fn is_evaluating(&self) -> bool {
        self.gate.is_pending()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// One countdown step. Returns the finished session exactly once, on the
    /// tick that exhausts the clock.
    pub fn tick(&mut self) -> Option<GameSession> {
        if self.finished {
            return None;
        }
        self.elapsed_secs += 1;
        if self.time_left <= 1 {
            self.time_left = 0;
            self.finished = true;
            self.gate.cancel();
            log::info!("retention run over: {} nodes", self.nodes_cleared);
            return Some(GameSession::retention(self.nodes_cleared, self.elapsed_secs));
        }
        self.time_left -= 1;
        None
    }

    pub fn set_code(&mut self, code: String) {
        if !self.finished {
            self.code = code;
        }
    }

    pub fn run(&mut self) {
        self.preview = run_preview(self.target.language, &self.code, self.plain, SessionMode::Retention);
    }

    pub fn begin_submit(&mut self) -> Option<(u64, GradeRequest)> {
        if self.finished {
            return None;
        }
        let ticket = self.gate.begin()?;
        self.feedback = None;
        Some((
            ticket,
            GradeRequest {
                objective: self.target.objective.to_string(),
                code: self.code.clone(),
                language: self.target.language,
            },
        ))
    }

    /// Applies the answer for `ticket`. `next_index` chooses the next target
    /// if the node is cleared. Returns false when the answer is stale.
    pub fn apply_grade(&mut self, ticket: u64, response: &GradeResponse, next_index: usize) -> bool {
        if self.finished || !self.gate.settle(ticket) {
            return false;
        }
        if response.score < PASS_SCORE {
            self.time_left = self.time_left.saturating_sub(PENALTY_SECONDS);
            self.feedback = Some(RoundFeedback::failure(self.plain));
        } else {
            self.nodes_cleared += 1;
            self.time_left += REWARD_SECONDS;
            self.feedback = Some(RoundFeedback::success(self.plain));
            self.target = &self.catalog[next_index % self.catalog.len()];
            self.code = starter_code(self.target.language, SessionMode::Retention).to_string();
            self.preview = Preview::Idle;
        }
        true
    }

    /// Leaves the run without producing a session.
    pub fn abort(&mut self) {
        self.finished = true;
        self.gate.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LEVELS;
    use crate::model::Grade;

    fn answer(score: u8) -> GradeResponse {
        GradeResponse { score, feedback: String::new(), is_correct: score >= 50 }
    }

    fn submit(s: &mut RetentionSession, score: u8, next: usize) {
        let (t, _) = s.begin_submit().unwrap();
        assert!(s.apply_grade(t, &answer(score), next));
    }

    #[test]
    fn failure_costs_five_seconds_and_keeps_target() {
        let mut s = RetentionSession::new(LEVELS, 3, false);
        s.set_code("nope".into());
        let before = s.target().id;
        submit(&mut s, 40, 9);
        assert_eq!(s.time_left(), 85);
        assert_eq!(s.nodes_cleared(), 0);
        assert_eq!(s.target().id, before);
        assert_eq!(s.code(), "nope");
        assert!(s.feedback().unwrap().penalty);
    }

    #[test]
    fn success_adds_time_and_draws_new_target() {
        let mut s = RetentionSession::new(LEVELS, 0, false);
        submit(&mut s, 50, 6);
        assert_eq!(s.time_left(), 105);
        assert_eq!(s.nodes_cleared(), 1);
        assert_eq!(s.target().id, LEVELS[6].id);
        assert_eq!(s.code(), "// START CODING\n");
        assert!(!s.feedback().unwrap().penalty);
    }

    #[test]
    fn penalty_floors_at_zero() {
        let mut s = RetentionSession::new(LEVELS, 0, false);
        for _ in 0..87 {
            assert!(s.tick().is_none());
        }
        assert_eq!(s.time_left(), 3);
        submit(&mut s, 0, 0);
        assert_eq!(s.time_left(), 0);
        assert!(!s.is_finished());
        let done = s.tick().unwrap();
        assert_eq!(done.retention_score, Some(0));
        assert_eq!(done.grade, Grade::B);
    }

    #[test]
    fn countdown_ends_run_once_with_node_grade() {
        let mut s = RetentionSession::new(LEVELS, 0, false);
        for i in 0..6 {
            submit(&mut s, 90, i);
        }
        let mut finished = Vec::new();
        for _ in 0..(START_SECONDS + 6 * REWARD_SECONDS + 5) {
            if let Some(session) = s.tick() {
                finished.push(session);
            }
        }
        assert_eq!(finished.len(), 1);
        let session = &finished[0];
        assert!(session.is_retention());
        assert_eq!(session.retention_score, Some(6));
        assert_eq!(session.grade, Grade::S);
        assert_eq!(session.level_id, crate::model::RETENTION_LEVEL_ID);
        assert_eq!(s.time_left(), 0);
    }

    #[test]
    fn submit_is_single_flight() {
        let mut s = RetentionSession::new(LEVELS, 0, false);
        let (t, _) = s.begin_submit().unwrap();
        assert!(s.begin_submit().is_none());
        assert!(s.apply_grade(t, &answer(80), 1));
        assert!(!s.apply_grade(t, &answer(80), 1), "replayed answer has no effect");
        assert_eq!(s.nodes_cleared(), 1);
        assert_eq!(s.time_left(), 105);
    }

    #[test]
    fn clock_keeps_running_while_grading() {
        let mut s = RetentionSession::new(LEVELS, 0, false);
        let (t, _) = s.begin_submit().unwrap();
        s.tick();
        s.tick();
        assert_eq!(s.time_left(), 88);
        assert!(s.apply_grade(t, &answer(10), 0));
        assert_eq!(s.time_left(), 83);
    }

    #[test]
    fn answers_after_the_end_are_ignored() {
        let mut s = RetentionSession::new(LEVELS, 0, false);
        let (t, _) = s.begin_submit().unwrap();
        while s.tick().is_none() {}
        assert!(!s.apply_grade(t, &answer(100), 2));
        assert_eq!(s.nodes_cleared(), 0);
        assert!(s.begin_submit().is_none());
    }

    #[test]
    fn abort_produces_nothing() {
        let mut s = RetentionSession::new(LEVELS, 0, false);
        let (t, _) = s.begin_submit().unwrap();
        s.abort();
        assert!(!s.apply_grade(t, &answer(100), 2));
        assert!(s.tick().is_none());
    }
}

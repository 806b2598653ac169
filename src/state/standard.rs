//! Standard gameplay session for a single level.
//!
//! Lifecycle: `Editing` (clock running) -> `begin_submit` -> `Evaluating`
//! (clock frozen) -> `apply_grade` -> `Reviewing` -> either `commit` (emits the
//! [`GameSession`]) or `edit` (back to `Editing`, buffer kept).

use super::editor::{Preview, SessionMode, SubmitGate, run_preview, starter_code};
use crate::catalog::{DISCOVERY_OBJECTIVE, is_discovery};
use crate::grading::{GradeRequest, GradeResponse};
use crate::model::{GameSession, Level};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StandardPhase {
    Editing,
    Evaluating,
    Reviewing(GradeResponse),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandardSession {
    level: &'static Level,
    code: String,
    preview: Preview,
    elapsed_secs: u64,
    attempts: u32,
    phase: StandardPhase,
    gate: SubmitGate,
    plain: bool,
}

pub fn discovery_feedback(plain: bool) -> &'static str {
    if plain {
        "Perfect! You've learned how to submit your work. The secret goal was simply to test the system. Now you know how the AI evaluation works!"
    } else {
        "EVAL_COMPLETE: Discovery parameters met. The secret objective was to verify submission functionality. Link established."
    }
}

impl StandardSession {
    pub fn new(level: &'static Level, plain: bool) -> Self {
        Self {
            level,
            code: starter_code(level.language, SessionMode::Standard).to_string(),
            preview: Preview::Idle,
            elapsed_secs: 0,
            attempts: 0,
            phase: StandardPhase::Editing,
            gate: SubmitGate::default(),
            plain,
        }
    }

    pub fn level(&self) -> &'static Level {
        self.level
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn phase(&self) -> &StandardPhase {
        &self.phase
    }

    pub fn is_evaluating(&self) -> bool {
        matches!(self.phase, StandardPhase::Evaluating)
    }

    pub fn result(&self) -> Option<&GradeResponse> {
        match &self.phase {
            StandardPhase::Reviewing(r) => Some(r),
            _ => None,
        }
    }

    /// One wall-clock second. Counts only while editing.
    pub fn tick(&mut self) {
        if self.phase == StandardPhase::Editing {
            self.elapsed_secs += 1;
        }
    }

    pub fn set_code(&mut self, code: String) {
        if self.phase == StandardPhase::Editing {
            self.code = code;
        }
    }

    pub fn run(&mut self) {
        self.preview = run_preview(self.level.language, &self.code, self.plain, SessionMode::Standard);
    }

    /// Starts a grading round. Returns `None` while a request is outstanding
    /// or a result is on screen.
    pub fn begin_submit(&mut self) -> Option<(u64, GradeRequest)> {
        if self.phase != StandardPhase::Editing {
            return None;
        }
        let ticket = self.gate.begin()?;
        self.phase = StandardPhase::Evaluating;
        self.attempts += 1;
        let objective = if is_discovery(self.level) {
            DISCOVERY_OBJECTIVE
        } else {
            self.level.objective
        };
        Some((
            ticket,
            GradeRequest {
                objective: objective.to_string(),
                code: self.code.clone(),
                language: self.level.language,
            },
        ))
    }

    /// Applies a grading answer. Returns false (and changes nothing) when the
    /// ticket is not the one being awaited.
    pub fn apply_grade(&mut self, ticket: u64, response: GradeResponse) -> bool {
        if !self.gate.settle(ticket) {
            return false;
        }
        let response = if is_discovery(self.level) {
            GradeResponse {
                score: 100,
                feedback: discovery_feedback(self.plain).to_string(),
                is_correct: true,
            }
        } else {
            response
        };
        self.phase = StandardPhase::Reviewing(response);
        true
    }

    /// Discards the shown result and resumes editing.
    pub fn edit(&mut self) {
        if matches!(self.phase, StandardPhase::Reviewing(_)) {
            self.phase = StandardPhase::Editing;
        }
    }

    pub fn commit(&self) -> Option<GameSession> {
        let result = self.result()?;
        Some(GameSession::standard(
            self.level,
            self.code.clone(),
            result.score,
            self.elapsed_secs,
            self.attempts,
        ))
    }

    /// Screen teardown: any late answer is dropped.
    pub fn abandon(&mut self) {
        self.gate.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_level;
    use crate::model::Grade;

    fn graded(score: u8) -> GradeResponse {
        GradeResponse { score, feedback: "ok".into(), is_correct: score >= 50 }
    }

    #[test]
    fn starts_with_language_template() {
        let html = StandardSession::new(find_level("0-2").unwrap(), false);
        assert_eq!(html.code(), "<!-- Your HTML here -->\n");
        let js = StandardSession::new(find_level("0-6").unwrap(), false);
        assert_eq!(js.code(), "// Your code here\n");
    }

    #[test]
    fn clock_runs_only_while_editing() {
        let mut s = StandardSession::new(find_level("0-2").unwrap(), false);
        s.tick();
        s.tick();
        let (ticket, _) = s.begin_submit().unwrap();
        s.tick();
        assert_eq!(s.elapsed_secs(), 2);
        s.apply_grade(ticket, graded(70));
        s.tick();
        assert_eq!(s.elapsed_secs(), 2);
        s.edit();
        s.tick();
        assert_eq!(s.elapsed_secs(), 3);
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut s = StandardSession::new(find_level("0-3").unwrap(), false);
        let first = s.begin_submit();
        assert!(first.is_some());
        assert!(s.begin_submit().is_none());
        assert!(s.is_evaluating());
    }

    #[test]
    fn request_carries_level_objective_and_code() {
        let level = find_level("0-4").unwrap();
        let mut s = StandardSession::new(level, false);
        s.set_code("body { color: green; }".into());
        let (_, req) = s.begin_submit().unwrap();
        assert_eq!(req.objective, level.objective);
        assert_eq!(req.code, "body { color: green; }");
        assert_eq!(req.language, level.language);
    }

    #[test]
    fn stale_ticket_is_rejected() {
        let mut s = StandardSession::new(find_level("0-3").unwrap(), false);
        let (ticket, _) = s.begin_submit().unwrap();
        assert!(!s.apply_grade(ticket + 7, graded(99)));
        assert!(s.is_evaluating());
        assert!(s.apply_grade(ticket, graded(99)));
    }

    #[test]
    fn edit_keeps_the_buffer_and_commit_grades() {
        let mut s = StandardSession::new(find_level("0-3").unwrap(), false);
        s.set_code("<p>SYSTEM_NORMAL</p>".into());
        let (t, _) = s.begin_submit().unwrap();
        s.apply_grade(t, graded(60));
        s.edit();
        assert_eq!(s.code(), "<p>SYSTEM_NORMAL</p>");
        assert!(s.commit().is_none());
        let (t, _) = s.begin_submit().unwrap();
        s.apply_grade(t, graded(86));
        let session = s.commit().unwrap();
        assert_eq!(session.grade, Grade::A);
        assert_eq!(session.accuracy, 86);
        assert_eq!(session.attempts, 2);
        assert_eq!(session.level_id, "0-3");
    }

    #[test]
    fn discovery_level_is_scripted() {
        let mut s = StandardSession::new(find_level("0-1").unwrap(), true);
        s.set_code("hello".into());
        let (t, req) = s.begin_submit().unwrap();
        assert_eq!(req.objective, DISCOVERY_OBJECTIVE);
        assert!(s.apply_grade(t, GradeResponse::connection_failure()));
        let r = s.result().unwrap();
        assert_eq!(r.score, 100);
        assert!(r.is_correct);
        assert_eq!(r.feedback, discovery_feedback(true));
        assert_eq!(s.commit().unwrap().grade, Grade::S);
    }

    #[test]
    fn abandoned_session_drops_late_answers() {
        let mut s = StandardSession::new(find_level("0-3").unwrap(), false);
        let (t, _) = s.begin_submit().unwrap();
        s.abandon();
        assert!(!s.apply_grade(t, graded(100)));
        assert!(s.result().is_none());
    }

    #[test]
    fn run_preview_is_cosmetic() {
        let mut s = StandardSession::new(find_level("0-8").unwrap(), true);
        s.run();
        assert_eq!(s.preview(), &Preview::Console("[System] Running your code...".into()));
        assert_eq!(s.elapsed_secs(), 0);
    }
}

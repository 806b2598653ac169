use crate::model::{GameSession, Profile, level_ordinal};

/// Score a standard session needs for its time to count as a clear.
pub const PASSING_SCORE: u8 = 50;

/// Merges a finished session into a profile. Every tracked stat is a max-merge
/// (or min for the best time), so applying the same session twice is a no-op.
pub fn apply_session(profile: &Profile, session: &GameSession) -> Profile {
    let mut next = profile.clone();
    if let Some(nodes) = session.retention_score {
        next.retention_best = next.retention_best.max(nodes);
        return next;
    }
    next.levels_completed = next.levels_completed.max(level_ordinal(&session.level_id));
    next.accuracy_rate = next.accuracy_rate.max(session.accuracy.min(100));
    if session.accuracy >= PASSING_SCORE {
        next.fastest_clear = Some(match next.fastest_clear {
            Some(best) => best.min(session.elapsed_secs),
            None => session.elapsed_secs,
        });
    }
    next
}

//! Player roster: the only persistent gameplay state.

use std::rc::Rc;
use yew::Reducible;

use super::progression::apply_session;
use crate::model::{GameSession, Profile};

pub const MAX_PROFILES: usize = 6;

/// Reserved profile that can never be wiped.
pub const ADMIN_PROFILE_ID: &str = "sys_architect_001";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("profile registry is full ({max} profiles)")]
    CapacityReached { max: usize },
    #[error("profile {id} is protected and cannot be deleted")]
    Protected { id: String },
    #[error("no profile with id {id}")]
    NotFound { id: String },
}

impl ProfileError {
    /// Refusal text shown to the player.
    pub fn player_message(&self) -> &'static str {
        match self {
            ProfileError::CapacityReached { .. } => "SYSTEM ERROR: USER REGISTRY FULL.",
            ProfileError::Protected { .. } => "SYSTEM ERROR: CANNOT DELETE ARCHITECT ENTITY.",
            ProfileError::NotFound { .. } => "SYSTEM ERROR: USER NOT FOUND.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileRoster {
    profiles: Vec<Profile>,
}

impl ProfileRoster {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.profiles.len() >= MAX_PROFILES
    }

    pub fn find(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn is_protected(id: &str) -> bool {
        id == ADMIN_PROFILE_ID
    }

    /// Best `levelsCompleted` over every profile; drives theme unlocks.
    pub fn max_levels_cleared(&self) -> u32 {
        self.profiles.iter().map(|p| p.levels_completed).max().unwrap_or(0)
    }

    /// Adds `USR_<n>`. The id is the creation timestamp, suffixed if taken.
    pub fn create(&mut self, created: u64) -> Result<&Profile, ProfileError> {
        if self.is_full() {
            return Err(ProfileError::CapacityReached { max: MAX_PROFILES });
        }
        let mut id = created.to_string();
        let mut n = 1;
        while self.find(&id).is_some() {
            id = format!("{}-{}", created, n);
            n += 1;
        }
        let name = format!("USR_{}", self.profiles.len() + 1);
        self.profiles.push(Profile::new(id, name, created));
        let idx = self.profiles.len() - 1;
        Ok(&self.profiles[idx])
    }

    pub fn delete(&mut self, id: &str) -> Result<Profile, ProfileError> {
        if Self::is_protected(id) {
            return Err(ProfileError::Protected { id: id.to_string() });
        }
        let idx = self
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProfileError::NotFound { id: id.to_string() })?;
        Ok(self.profiles.remove(idx))
    }

    /// Replaces the record whose id matches, as a whole.
    pub fn update(&mut self, profile: Profile) -> Result<(), ProfileError> {
        let slot = self
            .profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or_else(|| ProfileError::NotFound { id: profile.id.clone() })?;
        *slot = profile;
        Ok(())
    }

    pub fn record_session(&mut self, profile_id: &str, session: &GameSession) -> Result<(), ProfileError> {
        let current = self
            .find(profile_id)
            .ok_or_else(|| ProfileError::NotFound { id: profile_id.to_string() })?;
        let next = apply_session(current, session);
        self.update(next)
    }

    pub fn mark_tutorial_seen(&mut self, profile_id: &str) -> Result<(), ProfileError> {
        let mut next = self
            .find(profile_id)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound { id: profile_id.to_string() })?;
        next.has_seen_tutorial_prompt = true;
        self.update(next)
    }
}

#[derive(Clone, Debug)]
pub enum ProfileAction {
    Create { created: u64 },
    Delete { id: String },
    RecordSession { profile_id: String, session: GameSession },
    MarkTutorialSeen { profile_id: String },
}

impl Reducible for ProfileRoster {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        let outcome = match action {
            ProfileAction::Create { created } => new.create(created).map(|p| {
                log::info!("created profile {} ({})", p.name, p.id);
            }),
            ProfileAction::Delete { id } => new.delete(&id).map(|p| {
                log::info!("deleted profile {} ({})", p.name, p.id);
            }),
            ProfileAction::RecordSession { profile_id, session } => {
                log::info!("recording {} ({}) for {}", session.level_id, session.grade.letter(), profile_id);
                new.record_session(&profile_id, &session)
            }
            ProfileAction::MarkTutorialSeen { profile_id } => new.mark_tutorial_seen(&profile_id),
        };
        match outcome {
            Ok(()) if new != *self => Rc::new(new),
            Ok(()) => self,
            Err(e) => {
                log::warn!("profile action refused: {e}");
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_level;

    #[test]
    fn creation_stops_at_capacity() {
        let mut roster = ProfileRoster::default();
        for i in 0..MAX_PROFILES as u64 {
            roster.create(1000 + i).unwrap();
        }
        assert_eq!(roster.create(9999), Err(ProfileError::CapacityReached { max: MAX_PROFILES }));
        assert_eq!(roster.len(), MAX_PROFILES);
        assert_eq!(roster.list()[5].name, "USR_6");
    }

    #[test]
    fn duplicate_timestamps_get_distinct_ids() {
        let mut roster = ProfileRoster::default();
        let a = roster.create(7).unwrap().id.clone();
        let b = roster.create(7).unwrap().id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn admin_profile_cannot_be_deleted() {
        let mut roster = ProfileRoster::new(vec![
            Profile::new(ADMIN_PROFILE_ID, "ARCHITECT", 0),
            Profile::new("2", "USR_2", 0),
        ]);
        let before = roster.clone();
        assert!(matches!(roster.delete(ADMIN_PROFILE_ID), Err(ProfileError::Protected { .. })));
        assert_eq!(roster, before);
        assert_eq!(roster.delete("2").map(|p| p.name), Ok("USR_2".to_string()));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn reducer_leaves_state_untouched_on_refusal() {
        let roster = Rc::new(ProfileRoster::new(vec![Profile::new(ADMIN_PROFILE_ID, "ARCHITECT", 0)]));
        let next = roster.clone().reduce(ProfileAction::Delete { id: ADMIN_PROFILE_ID.into() });
        assert!(Rc::ptr_eq(&roster, &next));
    }

    #[test]
    fn session_only_mutates_the_named_profile() {
        let mut roster = ProfileRoster::new(vec![Profile::new("a", "USR_1", 0), Profile::new("b", "USR_2", 0)]);
        let level = find_level("0-2").unwrap();
        let session = GameSession::standard(level, "<h1>Hello Terminal</h1>".into(), 97, 14, 1);
        roster.record_session("b", &session).unwrap();
        assert_eq!(roster.find("a"), Some(&Profile::new("a", "USR_1", 0)));
        assert_eq!(roster.find("b").map(|p| p.levels_completed), Some(2));
        assert_eq!(roster.max_levels_cleared(), 2);
    }

    #[test]
    fn tutorial_flag_is_one_shot() {
        let mut roster = ProfileRoster::new(vec![Profile::new("a", "USR_1", 0)]);
        roster.mark_tutorial_seen("a").unwrap();
        roster.mark_tutorial_seen("a").unwrap();
        assert!(roster.find("a").unwrap().has_seen_tutorial_prompt);
        assert!(matches!(roster.mark_tutorial_seen("zz"), Err(ProfileError::NotFound { .. })));
    }
}

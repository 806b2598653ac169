//! Screen routing.
//!
//! Each [`Screen`] variant carries exactly the data that screen needs, so a
//! screen can never be active without its context. [`Screen::next`] is the
//! whole transition table; anything not listed is a [`NavError`].

use std::rc::Rc;
use yew::Reducible;

use crate::model::{GameSession, Level};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Profiles,
    Options,
    LevelSelect { profile_id: String },
    Briefing { profile_id: String, level: &'static Level },
    Gameplay { profile_id: String, level: &'static Level },
    Retention { profile_id: String },
    Result {
        profile_id: String,
        /// Level that produced the session; `None` for retention runs.
        level: Option<&'static Level>,
        session: GameSession,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Start,
    Configure,
    Back,
    ChooseProfile(String),
    ChooseLevel(&'static Level),
    StartLevel,
    StartRetention,
    /// Abort a gameplay screen without recording anything.
    Exit,
    Finish(GameSession),
    Continue,
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("no transition from {from} on {event}")]
    InvalidTransition { from: &'static str, event: &'static str },
    #[error("{screen} cannot finish with a {kind} session")]
    SessionMismatch { screen: &'static str, kind: &'static str },
    #[error("cannot retry: the finished session has no level")]
    MissingLevel,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu => "MENU",
            Screen::Profiles => "PROFILES",
            Screen::Options => "OPTIONS",
            Screen::LevelSelect { .. } => "LEVEL_SELECT",
            Screen::Briefing { .. } => "BRIEFING",
            Screen::Gameplay { .. } => "GAMEPLAY",
            Screen::Retention { .. } => "RETENTION_MODE",
            Screen::Result { .. } => "RESULT",
        }
    }

    /// Profile whose progress the current screen may change.
    pub fn active_profile(&self) -> Option<&str> {
        match self {
            Screen::Menu | Screen::Profiles | Screen::Options => None,
            Screen::LevelSelect { profile_id }
            | Screen::Briefing { profile_id, .. }
            | Screen::Gameplay { profile_id, .. }
            | Screen::Retention { profile_id }
            | Screen::Result { profile_id, .. } => Some(profile_id),
        }
    }

    pub fn next(self, event: NavEvent) -> Result<Screen, NavError> {
        use NavEvent as E;
        let from = self.name();
        let event_name = event.name();
        let next = match (self, event) {
            (Screen::Menu, E::Start) => Screen::Profiles,
            (Screen::Menu, E::Configure) => Screen::Options,
            (Screen::Options, E::Back) => Screen::Menu,
            (Screen::Profiles, E::ChooseProfile(profile_id)) => Screen::LevelSelect { profile_id },
            (Screen::Profiles, E::Back) => Screen::Menu,
            (Screen::LevelSelect { profile_id }, E::ChooseLevel(level)) => Screen::Briefing { profile_id, level },
            (Screen::LevelSelect { profile_id }, E::StartRetention) => Screen::Retention { profile_id },
            (Screen::LevelSelect { .. }, E::Back) => Screen::Profiles,
            (Screen::Briefing { profile_id, level }, E::StartLevel) => Screen::Gameplay { profile_id, level },
            (Screen::Briefing { profile_id, .. }, E::Back) => Screen::LevelSelect { profile_id },
            (Screen::Gameplay { profile_id, level }, E::Finish(session)) => {
                if session.is_retention() {
                    return Err(NavError::SessionMismatch { screen: from, kind: "retention" });
                }
                Screen::Result { profile_id, level: Some(level), session }
            }
            (Screen::Retention { profile_id }, E::Finish(session)) => {
                if !session.is_retention() {
                    return Err(NavError::SessionMismatch { screen: from, kind: "standard" });
                }
                Screen::Result { profile_id, level: None, session }
            }
            (Screen::Gameplay { profile_id, .. } | Screen::Retention { profile_id }, E::Exit) => {
                Screen::LevelSelect { profile_id }
            }
            (Screen::Result { profile_id, .. }, E::Continue) => Screen::LevelSelect { profile_id },
            (Screen::Result { profile_id, level, session }, E::Retry) => {
                if session.is_retention() {
                    Screen::Retention { profile_id }
                } else {
                    let level = level.ok_or(NavError::MissingLevel)?;
                    Screen::Gameplay { profile_id, level }
                }
            }
            _ => return Err(NavError::InvalidTransition { from, event: event_name }),
        };
        Ok(next)
    }
}

impl NavEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NavEvent::Start => "start",
            NavEvent::Configure => "configure",
            NavEvent::Back => "back",
            NavEvent::ChooseProfile(_) => "choose-profile",
            NavEvent::ChooseLevel(_) => "choose-level",
            NavEvent::StartLevel => "start-level",
            NavEvent::StartRetention => "start-retention",
            NavEvent::Exit => "exit",
            NavEvent::Finish(_) => "finish",
            NavEvent::Continue => "continue",
            NavEvent::Retry => "retry",
        }
    }
}

/// Reducer wrapper: rejected transitions are logged and leave the screen as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    pub screen: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self { screen: Screen::Menu }
    }
}

impl Reducible for Navigator {
    type Action = NavEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.screen.clone().next(action) {
            Ok(screen) => {
                log::debug!("screen {} -> {}", self.screen.name(), screen.name());
                Rc::new(Navigator { screen })
            }
            Err(e) => {
                log::error!("navigation rejected: {e}");
                self
            }
        }
    }
}

//! Process-wide settings: theme, accessibility flags and the red-team override.

use std::rc::Rc;
use yew::Reducible;

use crate::model::Theme;
use crate::storage::{
    KEY_RED_TEAM, KEY_RED_TEAM_REVEALED, KEY_REMOVE_EFFECTS, KEY_SIMPLE_MODE, KEY_THEME, KeyValueStore,
    StorageError, read_bool, write_bool,
};

/// Header taps (with no profile active) that expose red-team mode.
pub const REVEAL_TAPS: u32 = 5;

pub const REVEAL_ALERT: &str =
    "CRITICAL_ERROR: Anti-Cheat sub-routines exposed. Red Team Mode Available in Configuration.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub plain_language: bool,
    pub reduced_effects: bool,
    /// Red-team mode: paste blocking is off while set.
    pub red_team: bool,
    /// One-way flag; once true it stays true.
    pub red_team_revealed: bool,
}

impl Settings {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let theme = store.get(KEY_THEME).and_then(|t| Theme::parse(&t)).unwrap_or_default();
        let red_team_revealed = read_bool(store, KEY_RED_TEAM_REVEALED);
        Self {
            theme,
            plain_language: read_bool(store, KEY_SIMPLE_MODE),
            reduced_effects: read_bool(store, KEY_REMOVE_EFFECTS),
            red_team: red_team_revealed && read_bool(store, KEY_RED_TEAM),
            red_team_revealed,
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(KEY_THEME, self.theme.as_str())?;
        write_bool(store, KEY_SIMPLE_MODE, self.plain_language)?;
        write_bool(store, KEY_REMOVE_EFFECTS, self.reduced_effects)?;
        write_bool(store, KEY_RED_TEAM, self.red_team)?;
        write_bool(store, KEY_RED_TEAM_REVEALED, self.red_team_revealed)
    }

    pub fn anti_cheat_enabled(&self) -> bool {
        !self.red_team
    }
}

#[derive(Clone, Debug)]
pub enum SettingsAction {
    /// Rejected when the theme is still locked for `max_levels_cleared`.
    SetTheme { theme: Theme, max_levels_cleared: u32 },
    TogglePlainLanguage,
    ToggleReducedEffects,
    /// Ignored until red-team mode has been revealed.
    ToggleRedTeam,
    RevealRedTeam,
}

impl Reducible for Settings {
    type Action = SettingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            SettingsAction::SetTheme { theme, max_levels_cleared } => {
                if !theme.is_unlocked(max_levels_cleared) {
                    log::warn!("theme {} is locked ({} levels cleared)", theme.as_str(), max_levels_cleared);
                    return self;
                }
                new.theme = theme;
            }
            SettingsAction::TogglePlainLanguage => new.plain_language = !new.plain_language,
            SettingsAction::ToggleReducedEffects => new.reduced_effects = !new.reduced_effects,
            SettingsAction::ToggleRedTeam => {
                if !new.red_team_revealed {
                    return self;
                }
                new.red_team = !new.red_team;
            }
            SettingsAction::RevealRedTeam => new.red_team_revealed = true,
        }
        if new == *self { self } else { Rc::new(new) }
    }
}

/// Counts taps on the hidden header hotspot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealGesture {
    taps: u32,
}

impl RevealGesture {
    pub fn taps(&self) -> u32 {
        self.taps
    }

    /// Returns true exactly once: on the tap that reaches [`REVEAL_TAPS`]
    /// while red-team mode is still hidden. Taps made while a profile is
    /// active are ignored.
    pub fn tap(&mut self, profile_active: bool, already_revealed: bool) -> bool {
        if profile_active {
            return false;
        }
        self.taps = self.taps.saturating_add(1);
        self.taps >= REVEAL_TAPS && !already_revealed
    }
}

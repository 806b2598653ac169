pub mod clock;
pub mod editor;
pub mod navigator;
pub mod profiles;
pub mod progression;
pub mod retention;
pub mod settings;
pub mod standard;

pub use clock::SecondTicker;
pub use editor::{Preview, SessionMode, SubmitGate, paste_warning};
pub use navigator::{NavError, NavEvent, Navigator, Screen};
pub use profiles::{ADMIN_PROFILE_ID, MAX_PROFILES, ProfileAction, ProfileError, ProfileRoster};
pub use progression::apply_session;
pub use retention::{RetentionSession, RoundFeedback};
pub use settings::{RevealGesture, Settings, SettingsAction};
pub use standard::{StandardPhase, StandardSession};

pub mod app;
pub mod briefing;
pub mod card;
pub mod code_editor;
pub mod gameplay;
pub mod level_select;
pub mod main_menu;
pub mod options_view;
pub mod output_pane;
pub mod profile_select;
pub mod profile_stats;
pub mod result_view;
pub mod retention_view;
pub mod time_display;
pub mod tutorial_prompt;

pub use app::{App, AppProps, GameContext};

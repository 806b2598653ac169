//! Project EnCode: a browser coding-puzzle game.
//!
//! The pure game core (`model`, `catalog`, `state`) has no browser
//! dependencies and is tested natively. `components` holds the Yew views,
//! `grading` the remote evaluator and `storage` the persistence seam.

pub mod catalog;
pub mod components;
pub mod config;
pub mod grading;
pub mod model;
pub mod state;
pub mod storage;
pub mod util;

//! Folia showcase: a scroll-driven product presentation.
//!
//! The library holds the section-transition core and its collaborators;
//! the `folia-showcase` binary renders it with egui.

pub mod catalog;
pub mod color;
pub mod config;
pub mod input;
pub mod orchestrator;
pub mod scene;
pub mod session;
pub mod tween;

pub use config::{ConfigError, ShowcaseConfig};
pub use orchestrator::{Navigation, NavigationIntent, Orchestrator, Rejection};
pub use session::{Frame, Showcase, ShowcaseError};

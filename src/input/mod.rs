//! Input Adapters
//!
//! Each adapter turns one kind of raw input into a [`NavigationIntent`].
//! None of them touch section state: every intent funnels through
//! [`Orchestrator::handle`](crate::orchestrator::Orchestrator::handle).
//!
//! - `wheel`: scroll wheel, gated by the animating flag
//! - `keys`:  arrow/page/home/end keys
//! - `touch`: vertical swipe recognizer
//! - `dots`:  navigation dots (one per section)

pub mod dots;
pub mod keys;
pub mod touch;
pub mod wheel;

pub use dots::{DotState, NavDots};
pub use keys::key_intent;
pub use touch::{Swipe, SwipeDirection, SwipeRecognizer};
pub use wheel::WheelAdapter;

pub use crate::orchestrator::NavigationIntent;

use crate::scene::Panel;

/// Intent for a click on a panel's "continue" control, if it has one.
pub fn continue_intent(panel: &Panel) -> Option<NavigationIntent> {
    match panel {
        Panel::Continue { to, .. } => Some(NavigationIntent::JumpTo(*to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continue_jumps_to_its_target() {
        let panel = Panel::Continue { to: 2, label: "Explore".into() };
        assert_eq!(continue_intent(&panel), Some(NavigationIntent::JumpTo(2)));
        assert_eq!(continue_intent(&Panel::Configurator), None);
    }
}

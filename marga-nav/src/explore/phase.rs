//! Exploration phases.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// One state of the exploration controller.
///
/// The phases run in order across an episode; only `Bootstrap` may skip
/// ahead (straight to `Sweep` when the robot stumbles into the goal room
/// before closing its wall-follow loop).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Left-hand wall-follow until the loop closes at the start cell
    Bootstrap,

    /// Flood-guided search toward the center goal room
    Search,

    /// Full-coverage sweep; carries the current sweep target, `None` until
    /// one is chosen (or when none remain)
    Sweep { destination: Option<Cell> },

    /// Emit the reset signal and return to the start pose
    Reset,

    /// Optimized second run; terminal, the harness decides when the episode ends
    Replay,
}

impl Phase {
    /// Phase name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Bootstrap => "Bootstrap",
            Phase::Search => "Search",
            Phase::Sweep { .. } => "Sweep",
            Phase::Reset => "Reset",
            Phase::Replay => "Replay",
        }
    }

    /// Is this the terminal phase?
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Replay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Phase::Bootstrap.name(), "Bootstrap");
        assert_eq!(Phase::Sweep { destination: None }.name(), "Sweep");
    }

    #[test]
    fn test_only_replay_is_terminal() {
        assert!(Phase::Replay.is_terminal());
        assert!(!Phase::Reset.is_terminal());
        assert!(!Phase::Bootstrap.is_terminal());
    }
}

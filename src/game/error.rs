use thiserror::Error;

use super::state::Position;

/// Collaborator contract violations. Snake death is game state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Position),

    #[error("no gate pairing matches head {head} or gate cell {gate}")]
    UnknownGate { head: Position, gate: Position },

    #[error("gate exit {exit} leads outside the grid at {landing}")]
    GateExitOutOfBounds { exit: Position, landing: Position },

    #[error("no free cell left to place {0}")]
    NoFreeCell(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

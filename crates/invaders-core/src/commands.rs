//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// An input action from the input collaborator.
    Input { action: InputAction, phase: ActionPhase },
    /// Answer to the "Continue?" prompt.
    AnswerContinue { yes: bool },
    /// Answer to the name prompt.
    SubmitName { name: String },
}

impl PlayerCommand {
    pub fn input(action: InputAction, phase: ActionPhase) -> Self {
        PlayerCommand::Input { action, phase }
    }
}

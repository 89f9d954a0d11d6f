//! Messages shared between the host and the game loop thread.

use invaders_core::commands::PlayerCommand;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    PlayerCommand(PlayerCommand),
    Shutdown,
}

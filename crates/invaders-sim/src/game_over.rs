//! Game-over state machine.
//!
//! Pure transitions over `SessionPhase`; the engine performs the side effects
//! (reset, persistence, events) each step asks for.
//!
//! ```text
//! Playing -> LifeLost -> {Playing, GameOverPrompt}
//! GameOverPrompt -> {NewGameRequested, ScoreEvaluation}
//! ScoreEvaluation -> {NamePrompt, SessionEnd}
//! NamePrompt -> SessionEnd
//! ```

use invaders_core::constants::{CONTINUE_PROMPT, DEFAULT_HIGH_SCORE_NAME, NAME_PROMPT};
use invaders_core::enums::SessionPhase;
use invaders_core::events::DialogRequest;

/// What the engine must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    /// Lives remain; keep playing.
    Resume,
    /// Lives exhausted; show the continue prompt.
    PromptContinue,
    /// Reset the session, then call `restarted`.
    ResetSession,
    /// Ask for the high-score name.
    PromptName,
    /// Persist `{name, score}`, then the session is over.
    SaveAndEnd { name: String },
    /// Session over without saving.
    End,
    /// The input did not match the current phase.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct GameOverFlow {
    phase: SessionPhase,
}

impl GameOverFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    /// A life was just taken; `lives_remaining` is the new count.
    pub fn life_lost(&mut self, lives_remaining: u32) -> FlowStep {
        if self.phase != SessionPhase::Playing {
            return FlowStep::Ignored;
        }
        self.phase = SessionPhase::LifeLost;
        if lives_remaining > 0 {
            self.phase = SessionPhase::Playing;
            FlowStep::Resume
        } else {
            self.phase = SessionPhase::GameOverPrompt;
            FlowStep::PromptContinue
        }
    }

    /// Answer to the continue prompt.
    pub fn answer_continue(&mut self, yes: bool, score: u32, high_score: u32) -> FlowStep {
        if self.phase != SessionPhase::GameOverPrompt {
            return FlowStep::Ignored;
        }
        if yes {
            self.phase = SessionPhase::NewGameRequested;
            return FlowStep::ResetSession;
        }
        self.phase = SessionPhase::ScoreEvaluation;
        if score > high_score {
            self.phase = SessionPhase::NamePrompt;
            FlowStep::PromptName
        } else {
            self.phase = SessionPhase::SessionEnd;
            FlowStep::End
        }
    }

    /// Answer to the name prompt. A blank name falls back to the default.
    pub fn submit_name(&mut self, name: &str) -> FlowStep {
        if self.phase != SessionPhase::NamePrompt {
            return FlowStep::Ignored;
        }
        self.phase = SessionPhase::SessionEnd;
        let name = name.trim();
        let name = if name.is_empty() {
            DEFAULT_HIGH_SCORE_NAME
        } else {
            name
        };
        FlowStep::SaveAndEnd {
            name: name.to_string(),
        }
    }

    /// The reset requested by `ResetSession` is done.
    pub fn restarted(&mut self) {
        if self.phase == SessionPhase::NewGameRequested {
            self.phase = SessionPhase::Playing;
        }
    }

    /// The dialog the UI collaborator should currently show.
    pub fn pending_dialog(&self) -> Option<DialogRequest> {
        match self.phase {
            SessionPhase::GameOverPrompt => Some(DialogRequest::Confirm {
                prompt: CONTINUE_PROMPT.to_string(),
            }),
            SessionPhase::NamePrompt => Some(DialogRequest::Text {
                prompt: NAME_PROMPT.to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_lost_with_lives_left_resumes() {
        let mut flow = GameOverFlow::new();
        assert_eq!(flow.life_lost(2), FlowStep::Resume);
        assert_eq!(flow.phase(), SessionPhase::Playing);
        assert!(flow.pending_dialog().is_none());
    }

    #[test]
    fn last_life_prompts_once() {
        let mut flow = GameOverFlow::new();
        assert_eq!(flow.life_lost(0), FlowStep::PromptContinue);
        assert_eq!(flow.phase(), SessionPhase::GameOverPrompt);
        assert_eq!(flow.life_lost(0), FlowStep::Ignored);
        assert!(matches!(
            flow.pending_dialog(),
            Some(DialogRequest::Confirm { .. })
        ));
    }

    #[test]
    fn continue_resets() {
        let mut flow = GameOverFlow::new();
        flow.life_lost(0);
        assert_eq!(flow.answer_continue(true, 0, 0), FlowStep::ResetSession);
        assert_eq!(flow.phase(), SessionPhase::NewGameRequested);
        flow.restarted();
        assert!(flow.is_playing());
    }

    #[test]
    fn decline_with_new_high_score_asks_for_name() {
        let mut flow = GameOverFlow::new();
        flow.life_lost(0);
        assert_eq!(flow.answer_continue(false, 12_000, 500), FlowStep::PromptName);
        assert!(matches!(
            flow.pending_dialog(),
            Some(DialogRequest::Text { .. })
        ));
        assert_eq!(
            flow.submit_name("  Neo "),
            FlowStep::SaveAndEnd { name: "Neo".into() }
        );
        assert_eq!(flow.phase(), SessionPhase::SessionEnd);
        assert_eq!(flow.submit_name("again"), FlowStep::Ignored);
    }

    #[test]
    fn decline_without_high_score_ends() {
        let mut flow = GameOverFlow::new();
        flow.life_lost(0);
        assert_eq!(flow.answer_continue(false, 500, 500), FlowStep::End);
        assert_eq!(flow.phase(), SessionPhase::SessionEnd);
        assert!(flow.pending_dialog().is_none());
    }

    #[test]
    fn blank_name_uses_default() {
        let mut flow = GameOverFlow::new();
        flow.life_lost(0);
        flow.answer_continue(false, 1, 0);
        assert_eq!(
            flow.submit_name("   "),
            FlowStep::SaveAndEnd { name: "CPU".into() }
        );
    }

    #[test]
    fn answers_outside_prompts_are_ignored() {
        let mut flow = GameOverFlow::new();
        assert_eq!(flow.answer_continue(true, 0, 0), FlowStep::Ignored);
        assert_eq!(flow.submit_name("Neo"), FlowStep::Ignored);
        assert!(flow.is_playing());
    }
}

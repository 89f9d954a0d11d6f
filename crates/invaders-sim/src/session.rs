//! Score/lives tracker and achievement latches.

use invaders_core::constants::*;
use invaders_core::enums::Achievement;
use invaders_core::state::ScoreView;

/// Mutable session counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub score: u32,
    pub lives: u32,
    /// Never reset within a session; drives level advancement.
    pub enemies_destroyed: u32,
    /// 0 until the first level starts.
    pub level: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            enemies_destroyed: 0,
            level: 0,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take one life, saturating at zero. Returns the lives left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Count one destroyed enemy and award its points. Returns true when the
    /// kill count lands on a positive multiple of the level threshold.
    pub fn record_kill(&mut self) -> bool {
        self.enemies_destroyed += 1;
        self.score += ENEMY_KILL_REWARD;
        self.enemies_destroyed % LEVEL_KILL_THRESHOLD == 0
    }

    /// Move to the next level. Returns the new level number.
    pub fn next_level(&mut self) -> u32 {
        self.level += 1;
        self.level
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            lives: self.lives,
            level: self.level,
            enemies_destroyed: self.enemies_destroyed,
        }
    }
}

/// One-way latches, one per achievement.
#[derive(Debug, Clone, Default)]
pub struct Achievements {
    unlocked: Vec<Achievement>,
}

impl Achievements {
    /// Check every predicate against the current counters and latch the ones
    /// that hold. Returns only achievements unlocked by this call.
    pub fn evaluate(&mut self, session: &SessionState) -> Vec<Achievement> {
        let mut newly = Vec::new();
        for achievement in Achievement::ALL {
            if !self.is_unlocked(achievement) && predicate_holds(achievement, session) {
                self.unlocked.push(achievement);
                newly.push(achievement);
            }
        }
        newly
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement)
    }

    /// Unlocked achievements in unlock order.
    pub fn unlocked(&self) -> &[Achievement] {
        &self.unlocked
    }
}

fn predicate_holds(achievement: Achievement, session: &SessionState) -> bool {
    match achievement {
        Achievement::Hitman => session.enemies_destroyed >= HITMAN_KILLS,
        Achievement::MasterScorer => session.score >= MASTER_SCORER_POINTS,
    }
}

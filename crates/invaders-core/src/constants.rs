//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play area ---

/// Play area width in pixels.
pub const PLAY_AREA_WIDTH: f64 = 600.0;

/// Play area height in pixels.
pub const PLAY_AREA_HEIGHT: f64 = 800.0;

// --- Session ---

/// Lives at the start of every session.
pub const STARTING_LIVES: u32 = 3;

/// Points awarded per destroyed enemy.
pub const ENEMY_KILL_REWARD: u32 = 200;

/// Cumulative kills per level advance (advance on every positive multiple).
pub const LEVEL_KILL_THRESHOLD: u32 = 40;

// --- Achievements ---

/// Kills needed for the Hitman achievement.
pub const HITMAN_KILLS: u32 = 5;

/// Score needed for the Master Scorer achievement.
pub const MASTER_SCORER_POINTS: u32 = 10_000;

// --- Player ---

/// Player ship size (square).
pub const PLAYER_SIZE: f64 = 40.0;

/// Distance moved per tick while a move action is held.
pub const PLAYER_STEP: f64 = 5.0;

/// Minimum gap kept between the player and the side walls.
pub const PLAYER_EDGE_MARGIN: f64 = 5.0;

// --- Projectiles ---

/// Player bullet travel per tick (pixels).
pub const PLAYER_BULLET_SPEED: f64 = 10.0;

/// Enemy bullet travel per tick (pixels).
pub const ENEMY_BULLET_SPEED: f64 = 5.0;

/// Bullet hitbox width.
pub const BULLET_WIDTH: f64 = 8.0;

/// Bullet hitbox height.
pub const BULLET_HEIGHT: f64 = 20.0;

/// Horizontal offset from the player center to the bullet spawn point.
pub const PLAYER_BULLET_OFFSET_X: f64 = 8.0;

// --- Enemies ---

/// Enemy size (square).
pub const ENEMY_SIZE: f64 = 40.0;

/// Gap between enemies in the wave grid.
pub const ENEMY_SPACING: f64 = 20.0;

/// Wave grid columns.
pub const WAVE_COLUMNS: u32 = 8;

/// Wave grid rows.
pub const WAVE_ROWS: u32 = 5;

/// Y coordinate of the first wave row.
pub const WAVE_TOP_Y: f64 = 100.0;

/// Steady downward drift (px/s).
pub const ENEMY_DESCENT_SPEED: f64 = 3.0;

/// Horizontal patrol speed (px/s).
pub const ENEMY_PATROL_SPEED: f64 = 12.0;

/// Maximum patrol distance from the spawn column before turning around.
pub const ENEMY_PATROL_RANGE: f64 = 10.0;

/// Enemies stop descending once their top edge reaches this row.
pub const ENEMY_FLOOR_Y: f64 = PLAY_AREA_HEIGHT - 240.0;

/// Default per-enemy, per-tick probability of dropping a bullet.
pub const ENEMY_FIRE_CHANCE: f64 = 0.0008;

// --- Level transition ---

/// Banner duration in seconds.
pub const LEVEL_BANNER_SECS: u64 = 3;

/// Banner duration in ticks; the wave spawns when it expires.
pub const LEVEL_BANNER_TICKS: u64 = LEVEL_BANNER_SECS * TICK_RATE as u64;

/// Banner size.
pub const LEVEL_BANNER_WIDTH: f64 = 160.0;
pub const LEVEL_BANNER_HEIGHT: f64 = 44.0;

// --- Persistence / dialogs ---

/// Name used for the default high-score record.
pub const DEFAULT_HIGH_SCORE_NAME: &str = "CPU";

/// File name of the persisted high-score record.
pub const SAVE_DATA_NAME: &str = "hiscore.json";

/// Continue prompt shown when lives run out.
pub const CONTINUE_PROMPT: &str = "Game Over. Continue?";

/// Prompt shown when the session beat the high score.
pub const NAME_PROMPT: &str = "Enter your name";

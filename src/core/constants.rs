// Critical hits
pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const CRIT_CHANCE_PER_LUCK: f64 = 0.01;
pub const CRIT_MULTIPLIER: f64 = 1.5;

// Fleeing
pub const BASE_FLEE_CHANCE: f64 = 0.3;
pub const FLEE_CHANCE_PER_DEXTERITY: f64 = 0.02;

// Initiative dice (inclusive ranges)
pub const PLAYER_INITIATIVE_DIE: (u32, u32) = (1, 6);
pub const ENEMY_INITIATIVE_DIE: (u32, u32) = (1, 5);
pub const DEXTERITY_PER_INITIATIVE: u32 = 3;

// Attribute divisors for derived values (all floored)
pub const STRENGTH_DAMAGE_DIVISOR: u32 = 2;
pub const INTELLIGENCE_DAMAGE_DIVISOR: u32 = 2;
pub const WISDOM_HEALING_DIVISOR: u32 = 2;
pub const CONSTITUTION_ARMOR_DIVISOR: u32 = 4;
pub const MIN_ENEMY_DAMAGE: u32 = 1;

// Enemy defaults applied when a template leaves a field out
pub const DEFAULT_ENEMY_DAMAGE: (u32, u32) = (1, 3);
pub const DEFAULT_ESSENCE_REWARD: (u32, u32) = (1, 5);
pub const DEFAULT_EXPERIENCE_REWARD: (u32, u32) = (5, 14);
pub const DEFAULT_DROP_CHANCE: f64 = 0.3;

// Player defaults
pub const BASE_ATTRIBUTE_VALUE: u32 = 10;
pub const NUM_ATTRIBUTES: usize = 7;
pub const BASE_PLAYER_HEALTH: u32 = 50;
pub const BASE_PLAYER_ENERGY: u32 = 30;
pub const BASE_WEAPON_DAMAGE: u32 = 5;

// Notification display durations
pub const NOTIFY_INFO_MS: u64 = 3_000;
pub const NOTIFY_SUCCESS_MS: u64 = 4_000;
pub const NOTIFY_WARNING_MS: u64 = 4_000;
pub const NOTIFY_ERROR_MS: u64 = 5_000;

//! Program-wide constants.

/// Lamports per SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Coordinate scale: micro-degrees per decimal degree.
/// 40.748817 degrees is stored as 40_748_817.
pub const MICRO_DEGREES_PER_DEGREE: i64 = 1_000_000;

/// Highest valid rarity tier tag (Whale).
pub const MAX_RARITY_TIER: u8 = 4;

use anchor_lang::prelude::*;

/// Custom error codes for the geodrop settlement program.
#[error_code]
pub enum GeoDropError {
    #[msg("You are not authorized to perform this action")]
    Unauthorized,

    #[msg("This airdrop has expired")]
    AirdropExpired,

    #[msg("This airdrop is no longer active")]
    AirdropInactive,

    #[msg("Maximum claims reached for this airdrop")]
    MaxClaimsReached,

    #[msg("You have already claimed this airdrop")]
    AlreadyClaimed,

    #[msg("Treasury has insufficient funds")]
    InsufficientTreasuryFunds,

    #[msg("Invalid rarity tier")]
    InvalidRarity,

    #[msg("Expiry timestamp must be in the future")]
    InvalidExpiry,

    #[msg("Reward amount must be greater than zero")]
    InvalidRewardAmount,

    #[msg("Fund amount must be greater than zero")]
    InvalidFundAmount,

    #[msg("Math overflow")]
    MathOverflow,
}

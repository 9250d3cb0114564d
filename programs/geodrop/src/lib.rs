use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("H3CJqfiRQCsZq2QTx3zaCUMNChmp9nie9CAA8zkvkpvs");

#[program]
pub mod geodrop {
    use super::*;

    /// Initialize the singleton treasury PDA and fund it with SOL.
    /// The initializing signer becomes the permanent authority.
    pub fn initialize_treasury(ctx: Context<InitializeTreasury>, fund_amount: u64) -> Result<()> {
        instructions::initialize_treasury::initialize_treasury(ctx, fund_amount)
    }

    /// Top up the treasury with additional SOL (authority only).
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury::fund_treasury(ctx, amount)
    }

    /// Create a new geolocated airdrop (authority only).
    ///
    /// Coordinates are micro-degrees (degrees x 1e6); the program stores them
    /// verbatim and never verifies a claimer's physical position.
    #[allow(clippy::too_many_arguments)]
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        id: u64,
        latitude: i64,
        longitude: i64,
        reward_amount: u64,
        expiry_timestamp: i64,
        max_claims: u8,
        rarity: u8,
    ) -> Result<()> {
        instructions::create_airdrop::create_airdrop(
            ctx,
            id,
            latitude,
            longitude,
            reward_amount,
            expiry_timestamp,
            max_claims,
            rarity,
        )
    }

    /// Claim an airdrop reward. Creates a ClaimReceipt PDA (double-claim
    /// guard) and transfers the reward from the treasury to the claimer.
    pub fn claim_airdrop(ctx: Context<ClaimAirdrop>) -> Result<()> {
        instructions::claim_airdrop::claim_airdrop(ctx)
    }
}

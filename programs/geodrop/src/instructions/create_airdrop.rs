use anchor_lang::prelude::*;

use crate::error::GeoDropError;
use crate::state::{Airdrop, Rarity, Treasury};

/// Publish a new geolocated airdrop.
///
/// Authority-gated: this is the sole access-control checkpoint in the
/// program. Each airdrop is a PDA seeded with `[b"airdrop", id.to_le_bytes()]`,
/// so reusing an id fails at account creation. No funds move here; rewards
/// are paid from the pooled treasury balance at claim time.
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
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.treasury.authority,
        GeoDropError::Unauthorized
    );

    let tier = Rarity::from_u8(rarity)?;

    let now = Clock::get()?.unix_timestamp;
    require!(expiry_timestamp > now, GeoDropError::InvalidExpiry);
    require!(reward_amount > 0, GeoDropError::InvalidRewardAmount);

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.id = id;
    airdrop.latitude = latitude;
    airdrop.longitude = longitude;
    airdrop.reward_amount = reward_amount;
    airdrop.expiry_timestamp = expiry_timestamp;
    airdrop.max_claims = max_claims;
    airdrop.claims_count = 0;
    airdrop.rarity = tier as u8;
    airdrop.active = true;
    airdrop.creator = ctx.accounts.authority.key();
    airdrop.bump = ctx.bumps.airdrop;

    msg!(
        "Airdrop #{} created at ({}, {}): {} lamports, rarity {}, expires {}",
        id,
        latitude,
        longitude,
        reward_amount,
        tier as u8,
        expiry_timestamp
    );

    emit!(AirdropCreated {
        id,
        latitude,
        longitude,
        reward_amount,
        expiry_timestamp,
        max_claims,
        rarity: tier as u8,
        creator: airdrop.creator,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct CreateAirdrop<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Airdrop::SIZE,
        seeds = [b"airdrop", id.to_le_bytes().as_ref()],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    #[account(
        seeds = [b"treasury"],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct AirdropCreated {
    pub id: u64,
    pub latitude: i64,
    pub longitude: i64,
    pub reward_amount: u64,
    pub expiry_timestamp: i64,
    pub max_claims: u8,
    pub rarity: u8,
    pub creator: Pubkey,
}

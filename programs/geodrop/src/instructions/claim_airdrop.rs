use anchor_lang::prelude::*;

use crate::error::GeoDropError;
use crate::state::{Airdrop, ClaimReceipt, Treasury};
use crate::utils::settlement::{self, ClaimGate};

/// Claim an airdrop reward.
///
/// The ClaimReceipt PDA is seeded with `[b"claim", airdrop, claimer]`: if
/// this wallet has already claimed, the address is occupied and the `init`
/// constraint fails before any state changes, so a double claim can never
/// pay twice regardless of submission ordering. All mutations here (treasury
/// debit, claimer credit, counter, flag, receipt) commit or abort together.
pub fn claim_airdrop(ctx: Context<ClaimAirdrop>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let airdrop = &ctx.accounts.airdrop;
    settlement::check_claimable(
        ClaimGate {
            active: airdrop.active,
            claims_count: airdrop.claims_count,
            max_claims: airdrop.max_claims,
            expiry_timestamp: airdrop.expiry_timestamp,
        },
        now,
    )?;

    let reward = airdrop.reward_amount;

    // Solvency is judged on account lamports above the rent-exempt floor,
    // not on the total_deposited tracking field.
    let treasury_info = ctx.accounts.treasury.to_account_info();
    let min_rent = Rent::get()?.minimum_balance(treasury_info.data_len());
    let available = treasury_info
        .lamports()
        .checked_sub(min_rent)
        .ok_or(GeoDropError::InsufficientTreasuryFunds)?;
    require!(available >= reward, GeoDropError::InsufficientTreasuryFunds);

    // The treasury is a program-owned PDA: debit/credit lamports directly,
    // no CPI needed.
    **treasury_info.try_borrow_mut_lamports()? -= reward;
    **ctx.accounts.claimer.to_account_info().try_borrow_mut_lamports()? += reward;

    let airdrop = &mut ctx.accounts.airdrop;
    let (next_count, still_active) =
        settlement::advance_claims(airdrop.claims_count, airdrop.max_claims)?;
    airdrop.claims_count = next_count;
    airdrop.active = still_active;

    let airdrop_key = ctx.accounts.airdrop.key();
    let claimer_key = ctx.accounts.claimer.key();

    let receipt = &mut ctx.accounts.claim_receipt;
    receipt.airdrop = airdrop_key;
    receipt.claimer = claimer_key;
    receipt.claimed_at = now;
    receipt.bump = ctx.bumps.claim_receipt;

    msg!(
        "Airdrop #{} claimed by {}: {} lamports transferred",
        ctx.accounts.airdrop.id,
        claimer_key,
        reward
    );

    emit!(AirdropClaimed {
        id: ctx.accounts.airdrop.id,
        airdrop: airdrop_key,
        claimer: claimer_key,
        reward_amount: reward,
        claims_count: next_count,
        active: still_active,
        claimed_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimAirdrop<'info> {
    #[account(
        mut,
        seeds = [b"airdrop", airdrop.id.to_le_bytes().as_ref()],
        bump = airdrop.bump,
    )]
    pub airdrop: Account<'info, Airdrop>,

    #[account(
        mut,
        seeds = [b"treasury"],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// Double-claim guard: `init` fails if a receipt already exists for
    /// this (airdrop, claimer) pair.
    #[account(
        init,
        payer = claimer,
        space = 8 + ClaimReceipt::SIZE,
        seeds = [b"claim", airdrop.key().as_ref(), claimer.key().as_ref()],
        bump
    )]
    pub claim_receipt: Account<'info, ClaimReceipt>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct AirdropClaimed {
    pub id: u64,
    pub airdrop: Pubkey,
    pub claimer: Pubkey,
    pub reward_amount: u64,
    pub claims_count: u8,
    pub active: bool,
    pub claimed_at: i64,
}

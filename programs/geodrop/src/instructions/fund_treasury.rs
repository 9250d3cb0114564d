use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::GeoDropError;
use crate::state::Treasury;

/// Deposit additional SOL into the treasury.
///
/// Only the treasury authority may fund. `total_deposited` is a cumulative
/// audit counter and only ever grows; the live balance is the account's
/// lamports.
pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, GeoDropError::InvalidFundAmount);
    require_keys_eq!(
        ctx.accounts.authority.key(),
        ctx.accounts.treasury.authority,
        GeoDropError::Unauthorized
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        amount,
    )?;

    let treasury = &mut ctx.accounts.treasury;
    treasury.total_deposited = treasury
        .total_deposited
        .checked_add(amount)
        .ok_or(GeoDropError::MathOverflow)?;

    emit!(TreasuryFunded {
        authority: treasury.authority,
        amount,
        total_deposited: treasury.total_deposited,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(
        mut,
        seeds = [b"treasury"],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TreasuryFunded {
    pub authority: Pubkey,
    pub amount: u64,
    pub total_deposited: u64,
}

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::state::Treasury;

/// Create and fund the singleton treasury PDA.
///
/// First caller wins: the PDA seeds are fixed, so a second initialization
/// fails because the address is already occupied. The initializer becomes
/// the permanent authority for funding and airdrop creation.
pub fn initialize_treasury(ctx: Context<InitializeTreasury>, fund_amount: u64) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    treasury.authority = ctx.accounts.authority.key();
    treasury.total_deposited = fund_amount;
    treasury.bump = ctx.bumps.treasury;

    if fund_amount > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.authority.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            fund_amount,
        )?;
    }

    msg!(
        "Treasury initialized by {} with {} lamports",
        ctx.accounts.authority.key(),
        fund_amount
    );

    emit!(TreasuryInitialized {
        authority: ctx.accounts.treasury.authority,
        fund_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Treasury::SIZE,
        seeds = [b"treasury"],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TreasuryInitialized {
    pub authority: Pubkey,
    pub fund_amount: u64,
}

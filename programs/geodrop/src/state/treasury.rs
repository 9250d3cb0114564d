use anchor_lang::prelude::*;

/// Singleton treasury PDA holding the pooled reward funds.
/// Seeds: `[b"treasury"]` — only one valid address exists.
#[account]
pub struct Treasury {
    /// Identity permitted to fund the treasury and create airdrops.
    /// Set once at initialization; never transferable.
    pub authority: Pubkey,
    /// Cumulative lamports ever deposited (audit counter, not a live balance).
    pub total_deposited: u64,
    /// PDA bump.
    pub bump: u8,
}

impl Treasury {
    pub const SIZE: usize =
        32 + // authority
        8 +  // total_deposited
        1;   // bump
}

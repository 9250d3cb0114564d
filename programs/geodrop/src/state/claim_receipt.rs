use anchor_lang::prelude::*;

/// Permanent proof that `claimer` already claimed `airdrop`.
/// Seeds: `[b"claim", airdrop, claimer]` — the address itself is the
/// uniqueness constraint, so at most one receipt can exist per pair.
#[account]
pub struct ClaimReceipt {
    /// The airdrop PDA that was claimed.
    pub airdrop: Pubkey,
    /// The wallet that claimed it.
    pub claimer: Pubkey,
    /// Unix timestamp of the successful claim.
    pub claimed_at: i64,
    /// PDA bump.
    pub bump: u8,
}

impl ClaimReceipt {
    pub const SIZE: usize =
        32 + // airdrop
        32 + // claimer
        8 +  // claimed_at
        1;   // bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_matches_serialized_layout() {
        let receipt = ClaimReceipt {
            airdrop: Pubkey::new_unique(),
            claimer: Pubkey::new_unique(),
            claimed_at: 1_700_000_000,
            bump: 254,
        };
        let mut buf = Vec::new();
        receipt.serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), ClaimReceipt::SIZE);
    }
}

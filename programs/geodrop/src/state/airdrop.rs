use anchor_lang::prelude::*;

use crate::constants::LAMPORTS_PER_SOL;
use crate::error::GeoDropError;

/// One published reward campaign.
/// Seeds: `[b"airdrop", id.to_le_bytes()]` — the id is unique by derivation.
#[account]
pub struct Airdrop {
    /// Externally chosen campaign id, immutable.
    pub id: u64,
    /// Latitude in micro-degrees (degrees x 1e6), e.g. 40.748817 -> 40_748_817.
    /// Informational only; no on-chain geofence check.
    pub latitude: i64,
    /// Longitude in micro-degrees.
    pub longitude: i64,
    /// Reward in lamports paid per successful claim.
    pub reward_amount: u64,
    /// Unix timestamp at/after which no claim may succeed.
    pub expiry_timestamp: i64,
    /// Total number of successful claims this drop will honor.
    pub max_claims: u8,
    /// Successful claims so far.
    pub claims_count: u8,
    /// Rarity tier tag (0 = Fish ... 4 = Whale), stored verbatim.
    pub rarity: u8,
    /// False once `claims_count` reaches `max_claims`; never reopens.
    pub active: bool,
    /// The authority that created this drop.
    pub creator: Pubkey,
    /// PDA bump.
    pub bump: u8,
}

impl Airdrop {
    pub const SIZE: usize =
        8 +  // id
        8 +  // latitude
        8 +  // longitude
        8 +  // reward_amount
        8 +  // expiry_timestamp
        1 +  // max_claims
        1 +  // claims_count
        1 +  // rarity
        1 +  // active
        32 + // creator
        1;   // bump
}

/// Rarity tiers. Display/config metadata only: the program stores the tag
/// and never enforces reward-vs-tier consistency.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Rarity {
    Fish = 0,
    Turtle = 1,
    Dolphin = 2,
    Shark = 3,
    Whale = 4,
}

impl Rarity {
    pub fn from_u8(tag: u8) -> core::result::Result<Self, GeoDropError> {
        match tag {
            0 => Ok(Rarity::Fish),
            1 => Ok(Rarity::Turtle),
            2 => Ok(Rarity::Dolphin),
            3 => Ok(Rarity::Shark),
            4 => Ok(Rarity::Whale),
            _ => Err(GeoDropError::InvalidRarity),
        }
    }

    /// Suggested reward per tier (client display hint, not enforced).
    pub fn suggested_reward_lamports(&self) -> u64 {
        match self {
            Rarity::Fish => LAMPORTS_PER_SOL / 10,
            Rarity::Turtle => LAMPORTS_PER_SOL / 4,
            Rarity::Dolphin => LAMPORTS_PER_SOL / 2,
            Rarity::Shark => LAMPORTS_PER_SOL,
            Rarity::Whale => 2 * LAMPORTS_PER_SOL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_RARITY_TIER, MICRO_DEGREES_PER_DEGREE};

    #[test]
    fn size_matches_serialized_layout() {
        let airdrop = Airdrop {
            id: 1,
            latitude: 40 * MICRO_DEGREES_PER_DEGREE + 748_817,
            longitude: -73 * MICRO_DEGREES_PER_DEGREE - 985_428,
            reward_amount: LAMPORTS_PER_SOL / 10,
            expiry_timestamp: 1_700_000_000,
            max_claims: 5,
            claims_count: 0,
            rarity: Rarity::Fish as u8,
            active: true,
            creator: Pubkey::new_unique(),
            bump: 253,
        };
        let mut buf = Vec::new();
        airdrop.serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), Airdrop::SIZE);
    }

    #[test]
    fn rarity_round_trips_all_tiers() {
        for tag in 0..=MAX_RARITY_TIER {
            let tier = Rarity::from_u8(tag).unwrap();
            assert_eq!(tier as u8, tag);
        }
    }

    #[test]
    fn rarity_rejects_out_of_range_tags() {
        for tag in [5u8, 6, 100, u8::MAX] {
            assert!(matches!(
                Rarity::from_u8(tag),
                Err(GeoDropError::InvalidRarity)
            ));
        }
    }

    #[test]
    fn suggested_rewards_ascend_with_tier() {
        let tiers = [
            Rarity::Fish,
            Rarity::Turtle,
            Rarity::Dolphin,
            Rarity::Shark,
            Rarity::Whale,
        ];
        for pair in tiers.windows(2) {
            assert!(
                pair[0].suggested_reward_lamports() < pair[1].suggested_reward_lamports()
            );
        }
        assert_eq!(Rarity::Fish.suggested_reward_lamports(), 100_000_000);
        assert_eq!(Rarity::Whale.suggested_reward_lamports(), 2_000_000_000);
    }
}

pub mod initialize_treasury;
pub mod fund_treasury;
pub mod create_airdrop;
pub mod claim_airdrop;

pub use initialize_treasury::*;
pub use fund_treasury::*;
pub use create_airdrop::*;
pub use claim_airdrop::*;

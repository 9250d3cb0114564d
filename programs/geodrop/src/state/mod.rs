pub mod airdrop;
pub mod claim_receipt;
pub mod treasury;

pub use airdrop::*;
pub use claim_receipt::*;
pub use treasury::*;

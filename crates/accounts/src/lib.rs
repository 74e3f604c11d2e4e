//! Accounts domain module (account ledger entity and withdrawal policies).
//!
//! Pure domain logic only: no IO, no persistence concerns. Operations return
//! typed outcomes; rendering them is the caller's business.

pub mod account;

pub use account::{
    Account, AccountPolicy, DepositOutcome, InterestOutcome, WithdrawOutcome, WithdrawRejection,
    total_accounts,
};

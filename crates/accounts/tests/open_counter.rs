//! Process-exact assertions for the open-account counter.
//!
//! This file holds a single test on purpose: it runs as its own test binary,
//! so no other test can open accounts in the same process and perturb the
//! exact counts. In-module unit tests only assert monotonic deltas.

use passbook_accounts::{Account, AccountPolicy, total_accounts};
use passbook_core::AccountNumber;

#[test]
fn total_accounts_counts_only_successful_opens() {
    assert_eq!(total_accounts(), 0);

    let _savings = Account::open(
        AccountNumber::new("SA123"),
        "Alice",
        5000.0,
        AccountPolicy::Savings { interest_rate: 3.5 },
    )
    .unwrap();
    assert_eq!(total_accounts(), 1);

    // A failed open must not count.
    let failed = Account::open(
        AccountNumber::new("XX000"),
        "Mallory",
        -1.0,
        AccountPolicy::Standard,
    );
    assert!(failed.is_err());
    assert_eq!(total_accounts(), 1);

    let _current = Account::open(
        AccountNumber::new("CA456"),
        "Bob",
        10000.0,
        AccountPolicy::Current { overdraft_limit: 5000.0 },
    )
    .unwrap();
    assert_eq!(total_accounts(), 2);
}

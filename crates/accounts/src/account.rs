use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use passbook_core::{AccountNumber, DomainError, DomainResult};

/// Accounts successfully opened in this process.
///
/// Zero at process start, incremented once per successful [`Account::open`],
/// never decremented (accounts are never closed). Relaxed ordering is enough:
/// the counter carries no synchronization duties.
static TOTAL_ACCOUNTS: AtomicU64 = AtomicU64::new(0);

/// Total accounts opened in this process so far.
pub fn total_accounts() -> u64 {
    TOTAL_ACCOUNTS.load(Ordering::Relaxed)
}

/// Withdrawal policy attached to an account.
///
/// The policy tags the account variant and carries the variant-specific
/// configuration; withdrawal behavior dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AccountPolicy {
    /// Base policy: withdrawals must stay within the balance.
    Standard,
    /// No overdraft; interest accrues manually at `interest_rate` percent.
    Savings { interest_rate: f64 },
    /// Overdraft allowed down to `-overdraft_limit`.
    Current { overdraft_limit: f64 },
}

/// Outcome of a deposit request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DepositOutcome {
    /// The amount was credited; `balance` is the post-deposit balance.
    Deposited { amount: f64, balance: f64 },
    /// Non-positive amounts are refused without touching the balance.
    Rejected,
}

impl DepositOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DepositOutcome::Deposited { .. })
    }
}

impl core::fmt::Display for DepositOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DepositOutcome::Deposited { amount, balance } => {
                write!(f, "{amount} deposited successfully. Current balance: {balance}")
            }
            DepositOutcome::Rejected => f.write_str("Deposit amount must be greater than zero."),
        }
    }
}

/// Outcome of a withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WithdrawOutcome {
    /// The amount was debited; `balance` is the post-withdrawal balance.
    Withdrawn { amount: f64, balance: f64 },
    /// The request violated the account's withdrawal policy.
    Rejected(WithdrawRejection),
}

impl WithdrawOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, WithdrawOutcome::Withdrawn { .. })
    }
}

impl core::fmt::Display for WithdrawOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WithdrawOutcome::Withdrawn { amount, balance } => {
                write!(f, "{amount} withdrawn successfully. Current balance: {balance}")
            }
            WithdrawOutcome::Rejected(rejection) => core::fmt::Display::fmt(rejection, f),
        }
    }
}

/// Why a withdrawal was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawRejection {
    /// Standard-rule refusal. A non-positive amount and an insufficient
    /// balance fold into one rejection kind; that ambiguity is deliberate.
    InvalidOrInsufficient,
    /// Savings accounts refuse any amount above the balance outright.
    SavingsOverdraw,
    /// Current accounts refuse amounts that would breach the overdraft limit.
    OverdraftExceeded,
}

impl core::fmt::Display for WithdrawRejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            WithdrawRejection::InvalidOrInsufficient => "Insufficient balance or invalid amount.",
            WithdrawRejection::SavingsOverdraw => "Savings account cannot be overdrawn.",
            WithdrawRejection::OverdraftExceeded => {
                "Withdrawal exceeds overdraft limit or invalid amount."
            }
        };
        f.write_str(msg)
    }
}

/// Outcome of a manual interest accrual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InterestOutcome {
    /// Interest was credited; `balance` is the post-accrual balance.
    Accrued { interest: f64, balance: f64 },
    /// The account's policy does not bear interest.
    NotInterestBearing,
}

impl core::fmt::Display for InterestOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterestOutcome::Accrued { interest, balance } => {
                write!(f, "Interest of {interest} added. Current balance: {balance}")
            }
            InterestOutcome::NotInterestBearing => {
                f.write_str("Account does not accrue interest.")
            }
        }
    }
}

/// The account ledger entity: identity plus a mutable balance, with
/// withdrawal behavior selected by the attached policy.
///
/// Identity (number, holder) is immutable after opening; the balance changes
/// only through [`Account::deposit`], [`Account::withdraw`] and
/// [`Account::add_interest`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    balance: f64,
    policy: AccountPolicy,
}

impl Account {
    /// Open an account with an opening balance.
    ///
    /// The opening balance must be non-negative; this is the only hard
    /// failure in the domain. Counts the account as opened on success.
    pub fn open(
        number: AccountNumber,
        holder: impl Into<String>,
        initial_balance: f64,
        policy: AccountPolicy,
    ) -> DomainResult<Self> {
        if initial_balance < 0.0 {
            return Err(DomainError::validation("initial balance cannot be negative"));
        }

        TOTAL_ACCOUNTS.fetch_add(1, Ordering::Relaxed);

        Ok(Self {
            number,
            holder: holder.into(),
            balance: initial_balance,
            policy,
        })
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder
    }

    pub fn policy(&self) -> AccountPolicy {
        self.policy
    }

    /// Current balance; the caller renders the balance line.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Credit `amount` if it is positive; otherwise refuse without change.
    pub fn deposit(&mut self, amount: f64) -> DepositOutcome {
        if amount > 0.0 {
            self.balance += amount;
            DepositOutcome::Deposited {
                amount,
                balance: self.balance,
            }
        } else {
            DepositOutcome::Rejected
        }
    }

    /// Debit `amount` under the account's withdrawal policy.
    pub fn withdraw(&mut self, amount: f64) -> WithdrawOutcome {
        match self.policy {
            AccountPolicy::Standard => self.withdraw_within_balance(amount),
            AccountPolicy::Savings { .. } => {
                if amount > self.balance {
                    WithdrawOutcome::Rejected(WithdrawRejection::SavingsOverdraw)
                } else {
                    // Defer to the standard rule, which re-checks amount > 0.
                    self.withdraw_within_balance(amount)
                }
            }
            AccountPolicy::Current { overdraft_limit } => {
                if amount > 0.0 && self.balance - amount >= -overdraft_limit {
                    self.balance -= amount;
                    WithdrawOutcome::Withdrawn {
                        amount,
                        balance: self.balance,
                    }
                } else {
                    WithdrawOutcome::Rejected(WithdrawRejection::OverdraftExceeded)
                }
            }
        }
    }

    /// Standard rule: the amount must be positive and within the balance.
    fn withdraw_within_balance(&mut self, amount: f64) -> WithdrawOutcome {
        if amount > 0.0 && amount <= self.balance {
            self.balance -= amount;
            WithdrawOutcome::Withdrawn {
                amount,
                balance: self.balance,
            }
        } else {
            WithdrawOutcome::Rejected(WithdrawRejection::InvalidOrInsufficient)
        }
    }

    /// Credit `balance * interest_rate / 100` on a savings account.
    ///
    /// No compounding period, no upper bound; accrual is a manual trigger.
    /// Non-savings accounts refuse without change.
    pub fn add_interest(&mut self) -> InterestOutcome {
        match self.policy {
            AccountPolicy::Savings { interest_rate } => {
                let interest = self.balance * interest_rate / 100.0;
                self.balance += interest;
                InterestOutcome::Accrued {
                    interest,
                    balance: self.balance,
                }
            }
            _ => InterestOutcome::NotInterestBearing,
        }
    }
}

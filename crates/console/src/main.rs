//! Scripted console demo: open two accounts and drive their operations.

use std::io::Write;

use passbook_accounts::{Account, AccountPolicy, total_accounts};
use passbook_core::AccountNumber;

fn main() -> anyhow::Result<()> {
    passbook_observability::init();

    let stdout = std::io::stdout();
    run(&mut stdout.lock())?;

    Ok(())
}

/// Drive the demo scenario against `out`.
///
/// Rendering goes through the outcome `Display` impls, so the emitted lines
/// are exactly the message contract. The only fallible step is opening an
/// account; operation rejections are ordinary lines, not errors.
fn run(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Creating a Savings Account...")?;
    let mut savings = Account::open(
        AccountNumber::new("SA123"),
        "Alice",
        5000.0,
        AccountPolicy::Savings { interest_rate: 3.5 },
    )?;
    tracing::info!(number = %savings.number(), holder = savings.holder_name(), "account opened");
    writeln!(out, "Account Balance: {}", savings.balance())?;

    writeln!(out)?;
    writeln!(out, "Performing Savings Account Operations...")?;
    writeln!(out, "{}", savings.deposit(2000.0))?;
    writeln!(out, "{}", savings.withdraw(1000.0))?;
    writeln!(out, "{}", savings.add_interest())?;

    writeln!(out)?;
    writeln!(out, "Creating a Current Account...")?;
    let mut current = Account::open(
        AccountNumber::new("CA456"),
        "Bob",
        10000.0,
        AccountPolicy::Current { overdraft_limit: 5000.0 },
    )?;
    tracing::info!(number = %current.number(), holder = current.holder_name(), "account opened");
    writeln!(out, "Account Balance: {}", current.balance())?;

    writeln!(out)?;
    writeln!(out, "Performing Current Account Operations...")?;
    writeln!(out, "{}", current.deposit(5000.0))?;
    writeln!(out, "{}", current.withdraw(20000.0))?;
    writeln!(out, "{}", current.withdraw(5000.0))?;

    writeln!(out)?;
    writeln!(out, "Total Accounts Created: {}", total_accounts())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test on purpose: the footer count is process-exact only while this
    // test binary opens no accounts elsewhere.
    #[test]
    fn scenario_transcript_matches_the_message_contract() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();

        // The 20000 withdrawal drains the account to exactly -overdraft_limit,
        // which the inclusive limit check accepts; the following 5000
        // withdrawal is the one that breaches the limit.
        let expected = "\
Creating a Savings Account...
Account Balance: 5000

Performing Savings Account Operations...
2000 deposited successfully. Current balance: 7000
1000 withdrawn successfully. Current balance: 6000
Interest of 210 added. Current balance: 6210

Creating a Current Account...
Account Balance: 10000

Performing Current Account Operations...
5000 deposited successfully. Current balance: 15000
20000 withdrawn successfully. Current balance: -5000
Withdrawal exceeds overdraft limit or invalid amount.

Total Accounts Created: 2
";
        assert_eq!(transcript, expected);
    }
}

//! Seeds show command handler.

use crate::GatewayOpts;
use anyhow::Context;
use gateway_types::{AccountType, CardType, OperationType};
use seeds::SeedsResult;
use std::fmt::Write;

/// Run the seeds show command.
pub fn run_seeds_show(scenario: &str, opts: GatewayOpts) -> anyhow::Result<()> {
    let store = opts.dump_store();
    let result = store
        .load(scenario)
        .with_context(|| format!("Failed to load seeds '{scenario}'"))?;

    println!("Seeds: {}", store.path_for(scenario).display());
    print!("{}", format_seeds_summary(&result));
    Ok(())
}

/// Entity counts of a seeds result, one line per non-empty kind.
pub fn format_seeds_summary(result: &SeedsResult) -> String {
    let mut summary = String::new();
    let _ = writeln!(summary, "Users: {}", result.users_count());

    for account_type in AccountType::ALL {
        let count = result.accounts_count(account_type);
        if count > 0 {
            let _ = writeln!(summary, "Accounts {account_type}: {count}");
        }
    }
    for card_type in [CardType::Physical, CardType::Virtual] {
        let count = result.cards_count(card_type);
        if count > 0 {
            let _ = writeln!(summary, "Cards {card_type}: {count}");
        }
    }
    for operation_type in OperationType::ALL {
        let count = result.operations_count(operation_type);
        if count > 0 {
            let _ = writeln!(summary, "Operations {operation_type}: {count}");
        }
    }
    summary
}

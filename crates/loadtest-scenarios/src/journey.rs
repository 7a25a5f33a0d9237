//! The new-user accounts journey shared by the HTTP and gRPC scenarios.

use loadtest_runner::TaskSpec;

/// Steps of a virtual user that registers itself and then works with its
/// accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountsTask {
    CreateUser,
    OpenDepositAccount,
    GetAccounts,
}

/// Weights 2 / 2 / 6: reads dominate, writes keep the user fresh.
pub const ACCOUNTS_JOURNEY: [TaskSpec<AccountsTask>; 3] = [
    TaskSpec::new(AccountsTask::CreateUser, "create_user", 2),
    TaskSpec::new(AccountsTask::OpenDepositAccount, "open_deposit_account", 2),
    TaskSpec::new(AccountsTask::GetAccounts, "get_accounts", 6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journey_weights() {
        let weights: Vec<u32> = ACCOUNTS_JOURNEY.iter().map(|spec| spec.weight).collect();
        assert_eq!(weights, vec![2, 2, 6]);
        assert_eq!(ACCOUNTS_JOURNEY[0].task, AccountsTask::CreateUser);
    }
}

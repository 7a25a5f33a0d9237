use crate::plan::{SeedAccountsPlan, SeedUsersPlan, SeedsPlan};
use crate::scenario::SeedsScenario;

/// Existing users with a debit-card account to issue virtual cards on:
/// 300 users, each with one debit-card account and no operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistingUserIssueVirtualCard;

impl SeedsScenario for ExistingUserIssueVirtualCard {
    fn scenario(&self) -> &'static str {
        "existing_user_issue_virtual_card"
    }

    fn plan(&self) -> SeedsPlan {
        SeedsPlan::new(SeedUsersPlan::new(300).with_debit_card_accounts(SeedAccountsPlan::new(1)))
    }
}

use crate::plan::{SeedAccountsPlan, SeedUsersPlan, SeedsPlan};
use crate::scenario::SeedsScenario;
use gateway_types::OperationType;

/// Existing users with a credit-card account that already has a purchase
/// history: 300 users, each with one credit-card account carrying five
/// purchases, one top-up and one cash withdrawal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistingUserGetOperations;

impl SeedsScenario for ExistingUserGetOperations {
    fn scenario(&self) -> &'static str {
        "existing_user_get_operations"
    }

    fn plan(&self) -> SeedsPlan {
        SeedsPlan::new(
            SeedUsersPlan::new(300).with_credit_card_accounts(
                SeedAccountsPlan::new(1)
                    .with_operations(OperationType::Purchase, 5)
                    .with_operations(OperationType::TopUp, 1)
                    .with_operations(OperationType::CashWithdrawal, 1),
            ),
        )
    }
}

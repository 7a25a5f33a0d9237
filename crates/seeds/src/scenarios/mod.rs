//! Concrete seeding scenarios.

mod existing_user_get_operations;
mod existing_user_issue_virtual_card;

pub use existing_user_get_operations::ExistingUserGetOperations;
pub use existing_user_issue_virtual_card::ExistingUserIssueVirtualCard;

//! Seed plan definitions.
//!
//! A plan declares how many entities of each kind to create. Quantities
//! compose multiplicatively down the tree:
//!
//! ```text
//! SeedsPlan
//!   └── users: SeedUsersPlan { count }
//!         ├── deposit_accounts      ─┐
//!         ├── savings_accounts       │ Option<SeedAccountsPlan { count }>
//!         ├── debit_card_accounts    │   ├── physical_cards / virtual_cards: SeedCardsPlan
//!         └── credit_card_accounts  ─┘   └── *_operations: SeedOperationsPlan
//! ```
//!
//! Absent sub-plans behave as count 0. Counts are unsigned, so negative or
//! fractional counts are rejected while parsing and never clamped.

use crate::error::{Result, SeedsError};
use gateway_types::{AccountType, CardType, OperationType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Leaf plans
// ============================================================================

/// Number of operations of one type to make per account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedOperationsPlan {
    #[serde(default)]
    pub count: u64,
}

impl SeedOperationsPlan {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

impl TryFrom<i64> for SeedOperationsPlan {
    type Error = SeedsError;

    fn try_from(count: i64) -> Result<Self> {
        Ok(Self::new(non_negative(count, "operations")?))
    }
}

/// Number of cards of one kind to issue per account, on top of the cards
/// the gateway issues when the account is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCardsPlan {
    #[serde(default)]
    pub count: u64,
}

impl SeedCardsPlan {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

impl TryFrom<i64> for SeedCardsPlan {
    type Error = SeedsError;

    fn try_from(count: i64) -> Result<Self> {
        Ok(Self::new(non_negative(count, "cards")?))
    }
}

fn non_negative(count: i64, what: &str) -> Result<u64> {
    u64::try_from(count)
        .map_err(|_| SeedsError::Validation(format!("{what} count must be >= 0, got {count}")))
}

// ============================================================================
// Account plan
// ============================================================================

/// Accounts of one type per user, with their cards and operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedAccountsPlan {
    pub count: u64,
    pub physical_cards: SeedCardsPlan,
    pub virtual_cards: SeedCardsPlan,
    pub purchase_operations: SeedOperationsPlan,
    pub top_up_operations: SeedOperationsPlan,
    pub cash_withdrawal_operations: SeedOperationsPlan,
    pub fee_operations: SeedOperationsPlan,
    pub cashback_operations: SeedOperationsPlan,
    pub transfer_operations: SeedOperationsPlan,
    pub bill_payment_operations: SeedOperationsPlan,
}

impl SeedAccountsPlan {
    pub fn new(count: u64) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn try_new(count: i64) -> Result<Self> {
        Ok(Self::new(non_negative(count, "accounts")?))
    }

    pub fn with_cards(mut self, card_type: CardType, count: u64) -> Self {
        *self.cards_mut(card_type) = SeedCardsPlan::new(count);
        self
    }

    pub fn with_operations(mut self, operation_type: OperationType, count: u64) -> Self {
        *self.operations_mut(operation_type) = SeedOperationsPlan::new(count);
        self
    }

    /// Cards of `card_type` the plan issues per account.
    pub fn cards(&self, card_type: CardType) -> u64 {
        match card_type {
            CardType::Physical => self.physical_cards.count,
            CardType::Virtual => self.virtual_cards.count,
        }
    }

    /// Operations of `operation_type` per account.
    pub fn operations(&self, operation_type: OperationType) -> u64 {
        match operation_type {
            OperationType::Purchase => self.purchase_operations.count,
            OperationType::TopUp => self.top_up_operations.count,
            OperationType::CashWithdrawal => self.cash_withdrawal_operations.count,
            OperationType::Fee => self.fee_operations.count,
            OperationType::Cashback => self.cashback_operations.count,
            OperationType::Transfer => self.transfer_operations.count,
            OperationType::BillPayment => self.bill_payment_operations.count,
        }
    }

    /// Total operations of every type per account, saturating at `u64::MAX`.
    pub fn total_operations(&self) -> u64 {
        OperationType::ALL
            .iter()
            .map(|operation_type| self.operations(*operation_type))
            .fold(0, u64::saturating_add)
    }

    fn cards_mut(&mut self, card_type: CardType) -> &mut SeedCardsPlan {
        match card_type {
            CardType::Physical => &mut self.physical_cards,
            CardType::Virtual => &mut self.virtual_cards,
        }
    }

    fn operations_mut(&mut self, operation_type: OperationType) -> &mut SeedOperationsPlan {
        match operation_type {
            OperationType::Purchase => &mut self.purchase_operations,
            OperationType::TopUp => &mut self.top_up_operations,
            OperationType::CashWithdrawal => &mut self.cash_withdrawal_operations,
            OperationType::Fee => &mut self.fee_operations,
            OperationType::Cashback => &mut self.cashback_operations,
            OperationType::Transfer => &mut self.transfer_operations,
            OperationType::BillPayment => &mut self.bill_payment_operations,
        }
    }
}

// ============================================================================
// User and root plans
// ============================================================================

/// Users to create, with one optional account plan per account type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedUsersPlan {
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_accounts: Option<SeedAccountsPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_accounts: Option<SeedAccountsPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_card_accounts: Option<SeedAccountsPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_accounts: Option<SeedAccountsPlan>,
}

impl SeedUsersPlan {
    pub fn new(count: u64) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn try_new(count: i64) -> Result<Self> {
        Ok(Self::new(non_negative(count, "users")?))
    }

    pub fn with_accounts(mut self, account_type: AccountType, plan: SeedAccountsPlan) -> Self {
        *self.accounts_mut(account_type) = Some(plan);
        self
    }

    pub fn with_deposit_accounts(self, plan: SeedAccountsPlan) -> Self {
        self.with_accounts(AccountType::Deposit, plan)
    }

    pub fn with_savings_accounts(self, plan: SeedAccountsPlan) -> Self {
        self.with_accounts(AccountType::Savings, plan)
    }

    pub fn with_debit_card_accounts(self, plan: SeedAccountsPlan) -> Self {
        self.with_accounts(AccountType::DebitCard, plan)
    }

    pub fn with_credit_card_accounts(self, plan: SeedAccountsPlan) -> Self {
        self.with_accounts(AccountType::CreditCard, plan)
    }

    /// Account plan for `account_type`, if one was declared.
    pub fn accounts(&self, account_type: AccountType) -> Option<&SeedAccountsPlan> {
        match account_type {
            AccountType::Deposit => self.deposit_accounts.as_ref(),
            AccountType::Savings => self.savings_accounts.as_ref(),
            AccountType::DebitCard => self.debit_card_accounts.as_ref(),
            AccountType::CreditCard => self.credit_card_accounts.as_ref(),
        }
    }

    /// Declared account plans with a non-zero count, in build order.
    pub fn active_accounts(&self) -> impl Iterator<Item = (AccountType, &SeedAccountsPlan)> {
        AccountType::ALL.into_iter().filter_map(|account_type| {
            self.accounts(account_type)
                .filter(|plan| plan.count > 0)
                .map(|plan| (account_type, plan))
        })
    }

    fn accounts_mut(&mut self, account_type: AccountType) -> &mut Option<SeedAccountsPlan> {
        match account_type {
            AccountType::Deposit => &mut self.deposit_accounts,
            AccountType::Savings => &mut self.savings_accounts,
            AccountType::DebitCard => &mut self.debit_card_accounts,
            AccountType::CreditCard => &mut self.credit_card_accounts,
        }
    }
}

/// Root of a seed plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedsPlan {
    pub users: SeedUsersPlan,
}

impl SeedsPlan {
    pub fn new(users: SeedUsersPlan) -> Self {
        Self { users }
    }

    /// Load a plan from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a plan from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| SeedsError::Validation(format!("Invalid seeds plan: {e}")))
    }

    /// Parse a plan from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SeedsError::Validation(format!("Invalid seeds plan: {e}")))
    }

    // Totals below are for reporting and saturate at `u64::MAX`.

    /// Total accounts of `account_type` across all users.
    pub fn total_accounts(&self, account_type: AccountType) -> u64 {
        self.users
            .accounts(account_type)
            .map_or(0, |plan| self.users.count.saturating_mul(plan.count))
    }

    /// Total operations of `operation_type` across all users and accounts.
    pub fn total_operations(&self, operation_type: OperationType) -> u64 {
        self.users
            .active_accounts()
            .map(|(_, plan)| {
                self.users
                    .count
                    .saturating_mul(plan.count)
                    .saturating_mul(plan.operations(operation_type))
            })
            .fold(0, u64::saturating_add)
    }

    /// Gateway calls a successful build issues.
    pub fn expected_calls(&self) -> u64 {
        let per_user = self
            .users
            .active_accounts()
            .map(|(_, plan)| {
                let per_account = 1u64
                    .saturating_add(plan.physical_cards.count)
                    .saturating_add(plan.virtual_cards.count)
                    .saturating_add(plan.total_operations());
                plan.count.saturating_mul(per_account)
            })
            .fold(0, u64::saturating_add);
        self.users.count.saturating_mul(per_user.saturating_add(1))
    }
}

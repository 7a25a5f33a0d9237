//! Seeds result: identifiers of everything a build created.
//!
//! The result mirrors the plan tree but holds only ids and kinds, in
//! creation order (user-major, then account, then card, then operation).
//! It is what gets persisted as a dump and what load scenarios read back.

use gateway_types::{AccountType, CardType, OperationType};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCardResult {
    pub card_id: String,
    pub card_type: CardType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOperationResult {
    pub operation_id: String,
    pub operation_type: OperationType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAccountResult {
    pub account_id: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub cards: Vec<SeedCardResult>,
    #[serde(default)]
    pub operations: Vec<SeedOperationResult>,
}

impl SeedAccountResult {
    pub fn new(account_id: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            account_id: account_id.into(),
            account_type,
            cards: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// Card that operations are charged against: the first physical card,
    /// otherwise the first card of any kind.
    pub fn default_card(&self) -> Option<&SeedCardResult> {
        self.cards
            .iter()
            .find(|card| card.card_type == CardType::Physical)
            .or_else(|| self.cards.first())
    }

    pub fn cards_of(&self, card_type: CardType) -> impl Iterator<Item = &SeedCardResult> {
        self.cards
            .iter()
            .filter(move |card| card.card_type == card_type)
    }

    pub fn operations_of(
        &self,
        operation_type: OperationType,
    ) -> impl Iterator<Item = &SeedOperationResult> {
        self.operations
            .iter()
            .filter(move |operation| operation.operation_type == operation_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUserResult {
    pub user_id: String,
    #[serde(default)]
    pub accounts: Vec<SeedAccountResult>,
}

impl SeedUserResult {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            accounts: Vec::new(),
        }
    }

    pub fn accounts_of(&self, account_type: AccountType) -> impl Iterator<Item = &SeedAccountResult> {
        self.accounts
            .iter()
            .filter(move |account| account.account_type == account_type)
    }

    /// First account of `account_type`, if the user has one.
    pub fn first_account_of(&self, account_type: AccountType) -> Option<&SeedAccountResult> {
        self.accounts_of(account_type).next()
    }
}

/// Everything one build created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedsResult {
    #[serde(default)]
    pub users: Vec<SeedUserResult>,
}

impl SeedsResult {
    pub fn users_count(&self) -> usize {
        self.users.len()
    }

    pub fn accounts_count(&self, account_type: AccountType) -> usize {
        self.users
            .iter()
            .map(|user| user.accounts_of(account_type).count())
            .sum()
    }

    pub fn cards_count(&self, card_type: CardType) -> usize {
        self.accounts()
            .map(|account| account.cards_of(card_type).count())
            .sum()
    }

    pub fn operations_count(&self, operation_type: OperationType) -> usize {
        self.accounts()
            .map(|account| account.operations_of(operation_type).count())
            .sum()
    }

    /// Every account of every user, in creation order.
    pub fn accounts(&self) -> impl Iterator<Item = &SeedAccountResult> {
        self.users.iter().flat_map(|user| user.accounts.iter())
    }

    pub fn get_random_user<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&SeedUserResult> {
        self.users.choose(rng)
    }
}

/// Hands out seeded users round-robin to concurrent virtual users.
#[derive(Debug)]
pub struct SeedsCursor {
    result: Arc<SeedsResult>,
    next: AtomicUsize,
}

impl SeedsCursor {
    pub fn new(result: Arc<SeedsResult>) -> Self {
        Self {
            result,
            next: AtomicUsize::new(0),
        }
    }

    pub fn result(&self) -> &SeedsResult {
        &self.result
    }

    /// Next user in creation order, wrapping around; `None` if the result is empty.
    pub fn next_user(&self) -> Option<&SeedUserResult> {
        let users = &self.result.users;
        if users.is_empty() {
            return None;
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed) % users.len();
        users.get(index)
    }
}

//! Seed builder: turns a [`SeedsPlan`] into a [`SeedsResult`].
//!
//! Calls are issued one at a time through a [`SeedsGateway`]. There are no
//! retries; the first failing call aborts the build and nothing after it is
//! attempted.

use crate::error::{Result, SeedsError};
use crate::gateway::SeedsGateway;
use crate::plan::{SeedAccountsPlan, SeedsPlan};
use crate::result::{
    SeedAccountResult, SeedCardResult, SeedOperationResult, SeedUserResult, SeedsResult,
};
use gateway_types::{AccountType, CardType, OperationType};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Log progress every this many users.
const PROGRESS_INTERVAL: u64 = 50;

/// Metrics from a build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildMetrics {
    pub users_created: u64,
    pub accounts_opened: u64,
    pub cards_issued: u64,
    pub operations_made: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl BuildMetrics {
    /// Gateway calls issued.
    pub fn calls(&self) -> u64 {
        self.users_created + self.accounts_opened + self.cards_issued + self.operations_made
    }

    /// Calculate calls per second.
    pub fn calls_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.calls() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

pub struct SeedsBuilder<'a, G: SeedsGateway + ?Sized> {
    gateway: &'a G,
    metrics: BuildMetrics,
}

impl<'a, G: SeedsGateway + ?Sized> SeedsBuilder<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self {
            gateway,
            metrics: BuildMetrics::default(),
        }
    }

    /// Metrics of the entities created so far, including by a failed build.
    pub fn metrics(&self) -> &BuildMetrics {
        &self.metrics
    }

    /// Build every entity the plan declares.
    pub async fn build(&mut self, plan: &SeedsPlan) -> Result<SeedsResult> {
        let start_time = Instant::now();
        self.metrics = BuildMetrics::default();

        info!(
            "Building seeds: {} users, {} gateway calls expected",
            plan.users.count,
            plan.expected_calls()
        );

        let mut result = SeedsResult::default();
        let outcome = self.build_users(plan, &mut result).await;
        self.metrics.total_duration = start_time.elapsed();

        match outcome {
            Ok(()) => {
                info!(
                    "Built seeds in {:?}: {} users, {} accounts, {} cards, {} operations ({:.2} calls/sec)",
                    self.metrics.total_duration,
                    self.metrics.users_created,
                    self.metrics.accounts_opened,
                    self.metrics.cards_issued,
                    self.metrics.operations_made,
                    self.metrics.calls_per_second()
                );
                Ok(result)
            }
            Err(e) => {
                tracing::error!(
                    "Seeds build aborted after {} successful calls: {e}",
                    self.metrics.calls()
                );
                Err(e)
            }
        }
    }

    async fn build_users(&mut self, plan: &SeedsPlan, result: &mut SeedsResult) -> Result<()> {
        for index in 0..plan.users.count {
            let user = self.build_user(plan).await?;
            result.users.push(user);

            let built = index + 1;
            if built % PROGRESS_INTERVAL == 0 || built == plan.users.count {
                info!("Seeded {}/{} users", built, plan.users.count);
            }
        }
        Ok(())
    }

    /// Create one user and everything beneath it.
    pub async fn build_user(&mut self, plan: &SeedsPlan) -> Result<SeedUserResult> {
        let user = self.gateway.create_user().await?;
        self.metrics.users_created += 1;
        debug!("Created user {}", user.id);

        let mut result = SeedUserResult::new(user.id);
        for (account_type, accounts_plan) in plan.users.active_accounts() {
            for _ in 0..accounts_plan.count {
                let account = self
                    .build_account(&result.user_id, account_type, accounts_plan)
                    .await?;
                result.accounts.push(account);
            }
        }
        Ok(result)
    }

    /// Open one account, issue its planned cards and make its planned operations.
    pub async fn build_account(
        &mut self,
        user_id: &str,
        account_type: AccountType,
        plan: &SeedAccountsPlan,
    ) -> Result<SeedAccountResult> {
        let account = self.gateway.open_account(account_type, user_id).await?;
        self.metrics.accounts_opened += 1;
        debug!(
            "Opened {} account {} with {} cards",
            account_type,
            account.id,
            account.cards.len()
        );

        let mut result = SeedAccountResult::new(account.id, account_type);
        result.cards = account
            .cards
            .into_iter()
            .map(|card| SeedCardResult {
                card_id: card.id,
                card_type: card.card_type,
            })
            .collect();

        for card_type in [CardType::Physical, CardType::Virtual] {
            for _ in 0..plan.cards(card_type) {
                let card = self
                    .gateway
                    .issue_card(card_type, user_id, &result.account_id)
                    .await?;
                self.metrics.cards_issued += 1;
                debug!("Issued {} card {}", card_type, card.id);
                result.cards.push(SeedCardResult {
                    card_id: card.id,
                    card_type,
                });
            }
        }

        if plan.total_operations() == 0 {
            return Ok(result);
        }

        let card_id = result
            .default_card()
            .map(|card| card.card_id.clone())
            .ok_or_else(|| {
                SeedsError::Validation(format!(
                    "{} account {} has no card to make operations with",
                    account_type, result.account_id
                ))
            })?;

        for operation_type in OperationType::ALL {
            for _ in 0..plan.operations(operation_type) {
                let operation = self
                    .gateway
                    .make_operation(operation_type, &card_id, &result.account_id)
                    .await?;
                self.metrics.operations_made += 1;
                debug!("Made {} operation {}", operation_type, operation.id);
                result.operations.push(SeedOperationResult {
                    operation_id: operation.id,
                    operation_type,
                });
            }
        }

        Ok(result)
    }
}

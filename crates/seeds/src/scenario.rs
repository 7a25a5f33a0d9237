//! Seeding scenarios: a named plan whose result is persisted under that name.

use crate::builder::SeedsBuilder;
use crate::dumps::DumpStore;
use crate::error::Result;
use crate::gateway::SeedsGateway;
use crate::plan::SeedsPlan;
use crate::result::SeedsResult;
use crate::scenarios::{ExistingUserGetOperations, ExistingUserIssueVirtualCard};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
pub trait SeedsScenario: Send + Sync {
    /// Dump name; load scenarios read the result back under this name.
    fn scenario(&self) -> &'static str;

    fn plan(&self) -> SeedsPlan;

    /// Build the plan through `gateway` and save the result to `store`.
    async fn build(&self, gateway: &dyn SeedsGateway, store: &DumpStore) -> Result<SeedsResult> {
        info!("Building seeds scenario '{}'", self.scenario());

        let mut builder = SeedsBuilder::new(gateway);
        let result = builder.build(&self.plan()).await?;
        let path = store.save(self.scenario(), &result)?;

        info!(
            "Seeds scenario '{}' saved to {}",
            self.scenario(),
            path.display()
        );
        Ok(result)
    }

    /// Read back the result of a previous [`build`](Self::build).
    fn load(&self, store: &DumpStore) -> Result<SeedsResult> {
        store.load(self.scenario())
    }
}

/// Every seeding scenario, in listing order.
pub fn seeds_scenarios() -> Vec<Box<dyn SeedsScenario>> {
    vec![
        Box::new(ExistingUserGetOperations),
        Box::new(ExistingUserIssueVirtualCard),
    ]
}

pub fn find_seeds_scenario(name: &str) -> Option<Box<dyn SeedsScenario>> {
    seeds_scenarios()
        .into_iter()
        .find(|scenario| scenario.scenario() == name)
}

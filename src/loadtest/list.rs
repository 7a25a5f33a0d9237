//! List command handler.

use loadtest_scenarios::LoadScenario;
use seeds::seeds_scenarios;
use std::fmt::Write;

/// Run the list command.
pub fn run_list() {
    print!("{}", format_scenario_list());
}

/// Seeds scenarios with their plan size, then load scenarios with their
/// transport and required seeds.
pub fn format_scenario_list() -> String {
    let mut list = String::from("Seeds scenarios:\n");
    for scenario in seeds_scenarios() {
        let plan = scenario.plan();
        let _ = writeln!(
            list,
            "  {:<36} {} users, {} gateway calls",
            scenario.scenario(),
            plan.users.count,
            plan.expected_calls()
        );
    }

    list.push_str("\nLoad scenarios:\n");
    for scenario in LoadScenario::ALL {
        let _ = write!(
            list,
            "  {:<36} [{}] {}",
            scenario.name(),
            scenario.transport(),
            scenario.description()
        );
        if let Some(seeds) = scenario.seeds_scenario() {
            let _ = write!(list, " (needs seeds '{seeds}')");
        }
        list.push('\n');
    }
    list
}

// ============================================================================
// Generic Sums Demo
// Prints the four-line call-style report for the default scenario
// ============================================================================

use generic_sums::prelude::*;

fn main() -> Result<(), ScenarioError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    let scenario = Scenario::default();
    scenario.validate()?;

    let report = SumReport::build(&scenario);
    println!("{}", report);

    Ok(())
}

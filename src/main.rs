use oraclefuzz::{TargetRegistry, run_main};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bundled reference subjects, registered in campaign order
    let registry = TargetRegistry::with_defaults();

    run_main(registry)?;
    Ok(())
}

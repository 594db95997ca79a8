use anyhow::{Context, Result};

use miniclassify::experiment::{Experiment, ExperimentConfig};


fn main() -> Result<()> {
    // [USAGE] ./miniclassify [config.json]
    let config = match std::env::args().nth(1) {
        Some(path) => ExperimentConfig::from_json_file(&path)
            .with_context(|| format!("Failed to read the configuration {path}"))?,
        None => ExperimentConfig::default(),
    };

    let report = Experiment::new(config)
        .run()
        .context("Failed to run the experiment")?;

    println!("{report}");
    Ok(())
}

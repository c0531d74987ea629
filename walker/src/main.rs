use std::{env, fs};

use anyhow::{Context, Result};
use log::info;
use ndspace_walker::{WalkConfiguration, walk};

const DEFAULT_CONFIGURATION: &str = "walk.toml";

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIGURATION.into());
    let toml = fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let configuration = WalkConfiguration::from_toml(&toml, &path)?;

    info!(
        "Walking {} ({} elements) {:?}",
        configuration.extents,
        configuration.extents.num_elements(),
        configuration.walk
    );

    let visited = walk(&configuration.extents, &configuration.walk, |position| {
        println!("{}\t{position}", position.get_index()?);
        Ok(())
    })?;

    info!("Visited {visited} positions");
    Ok(())
}

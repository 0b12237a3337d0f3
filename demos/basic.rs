//! Draw a handful of values from a source configured by `RANDGEN_SEED`.
//!
//! `RANDGEN_SEED=42 cargo run --example basic` prints the same values on
//! every run; without the variable the seed is picked by the OS and shown so
//! the run can be replayed.

use miette::Result;
use randgen::{telemetry, RandomSource, SourceConfig};

fn main() -> Result<()> {
    telemetry::init_tracing();
    miette::set_panic_hook();

    let config = SourceConfig::from_env()?;
    tracing::info!(%config, "building random source");

    let mut source = RandomSource::from_config(&config);
    println!("seed:      {}", source.seed());
    println!("raw:       {}", source.get());
    println!("d6:        {}", source.get_between(7, 1)?);
    println!("percent:   {:.2}", source.get_percent());
    println!("fill:      {:?}", source.fill_container(&[0; 5], 0, Some(100))?);

    let replay = source.scramble().seed();
    println!("scrambled: {replay}");
    Ok(())
}

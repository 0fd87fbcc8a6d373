use anyhow::Result;

use assetembed::{config::EmbedConfig, font::embed_font};

fn main() -> Result<()> {
    env_logger::init();

    let config = EmbedConfig::load()?;
    embed_font(&config.font)?;

    println!("done");
    Ok(())
}

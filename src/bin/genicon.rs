use anyhow::Result;

use assetembed::{
    config::EmbedConfig,
    icon::embed_icon,
    preview::{NoPreview, Preview, WindowPreview},
};

fn main() -> Result<()> {
    env_logger::init();

    let config = EmbedConfig::load()?;
    let preview: &dyn Preview = if config.icon.preview { &WindowPreview } else { &NoPreview };
    embed_icon(&config.icon, preview)?;

    println!("done");
    Ok(())
}

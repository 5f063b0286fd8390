use std::path::PathBuf;

use anyhow::Context;
use geosketch::{default_config_path, init_logging, Script, SketchConfig, BUILD_DATE, VERSION};
use tracing::info;

const USAGE: &str = "usage: geosketch <script.(json|toml)> [config.(json|toml)]";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args_os().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        anyhow::bail!(USAGE);
    };

    let config = match args.next().map(PathBuf::from) {
        Some(path) => SketchConfig::load_from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match default_config_path() {
            Ok(path) => SketchConfig::load_or_default(&path)?,
            Err(_) => SketchConfig::default(),
        },
    };

    info!("geosketch {} (built {})", VERSION, BUILD_DATE);
    let script = Script::load(&script_path)?;
    let collection = script.run(&config)?;

    println!("{}", serde_json::to_string_pretty(&collection)?);
    Ok(())
}

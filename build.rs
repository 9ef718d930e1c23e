use std::{env, error::Error, fs, path::Path};

// The board module also rejects a build with zero or two board features
#[allow(dead_code)]
#[path = "src/board.rs"]
mod board;
#[allow(dead_code)]
#[path = "src/defaults.rs"]
mod defaults;
#[allow(dead_code)]
#[path = "src/raw_config.rs"]
mod raw_config;
#[allow(dead_code)]
#[path = "src/url.rs"]
mod url;
#[allow(dead_code)]
#[path = "src/validate.rs"]
mod validate;

use raw_config::RawConfig;

const CONFIG_FILE: &str = "cfg.toml";
const TEMPLATE_FILE: &str = "cfg.toml.example";

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed={CONFIG_FILE}");
    println!("cargo:rerun-if-changed={TEMPLATE_FILE}");

    let path = if Path::new(CONFIG_FILE).exists() {
        CONFIG_FILE
    } else {
        println!("cargo:warning={CONFIG_FILE} not found, building with {TEMPLATE_FILE}");
        TEMPLATE_FILE
    };

    // Read, parse and check against the selected board
    let toml_str = fs::read_to_string(path)?;
    let raw = RawConfig::parse(&toml_str).map_err(|e| format!("{path}: {e}"))?;
    raw.validate().map_err(|e| format!("{path}: {e}"))?;

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, raw.to_rust())?;
    Ok(())
}

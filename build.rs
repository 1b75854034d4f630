//! Build script for the track export CLI.
//!
//! Copies the `.env.example` template from the crate root into the user's
//! local data directory, next to the optional `.env` the application loads
//! from there.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to the local data directory.
///
/// # Destination Location
///
/// - Linux: `~/.local/share/trackcsv/.env.example`
/// - macOS: `~/Library/Application Support/trackcsv/.env.example`
/// - Windows: `%LOCALAPPDATA%/trackcsv/.env.example`
///
/// A missing template only produces a cargo warning; directory or copy
/// failures fail the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("trackcsv");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}

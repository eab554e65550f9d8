//! Build script for TuneNest.
//!
//! Copies the configuration templates from the crate root into the user's
//! local data directory so a fresh install finds them where the binary looks
//! for `.env` and `playlists.json`:
//!
//! - Linux: `~/.local/share/tunenest/`
//! - macOS: `~/Library/Application Support/tunenest/`
//! - Windows: `%LOCALAPPDATA%/tunenest/`
//!
//! Missing templates produce a cargo warning instead of failing the build.

use std::{env, fs, path::PathBuf};

const TEMPLATES: [&str; 2] = [".env.example", "playlists.example.json"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for template in TEMPLATES {
        println!("cargo:rerun-if-changed={template}");
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("tunenest");
    fs::create_dir_all(&out_dir)?;

    for template in TEMPLATES {
        let source = manifest_dir.join(template);
        if source.is_file() {
            let contents = fs::read_to_string(&source)?;
            fs::write(out_dir.join(template), contents)?;
        } else {
            println!("cargo:warning={template} not found at {}", source.display());
        }
    }

    Ok(())
}

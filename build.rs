//! Build script for spotkit.
//!
//! Copies the configuration templates (`.env.example` and `scopes.txt.example`)
//! from the crate root into the local data directory, so an installed binary
//! has them next to where it looks for its `.env` file:
//! - Linux: `~/.local/share/spotkit/`
//! - macOS: `~/Library/Application Support/spotkit/`
//! - Windows: `%LOCALAPPDATA%/spotkit/`
//!
//! Missing templates and an unwritable data directory only produce cargo
//! warnings.

use std::{env, fs, path::PathBuf};

const TEMPLATES: [&str; 2] = [".env.example", "scopes.txt.example"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for template in TEMPLATES {
        println!("cargo:rerun-if-changed={template}");
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotkit");
    if let Err(e) = fs::create_dir_all(&out_dir) {
        println!("cargo:warning=cannot create {}: {e}", out_dir.display());
        return Ok(());
    }

    for template in TEMPLATES {
        let source = manifest_dir.join(template);
        if source.is_file() {
            if let Err(e) = fs::copy(&source, out_dir.join(template)) {
                println!("cargo:warning=cannot copy {template}: {e}");
            }
        } else {
            println!("cargo:warning={template} not found at {}", source.display());
        }
    }

    Ok(())
}

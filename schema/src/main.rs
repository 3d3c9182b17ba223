use std::{fs, path::PathBuf};

use anyhow::Result;
use recognition::{GestureScript, RecognizerConfig};
use schemars::schema_for;

const VSCODE_DIR: &str = "../.vscode";

fn main() -> Result<()> {
    let vscode_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(VSCODE_DIR);
    fs::create_dir_all(&vscode_dir)?;

    let config_schema = serde_json::to_string_pretty(&schema_for!(RecognizerConfig))?;
    fs::write(
        vscode_dir.join("recognizer_config.schema.json"),
        config_schema,
    )?;

    let gesture_schema = serde_json::to_string_pretty(&schema_for!(GestureScript))?;
    fs::write(
        vscode_dir.join("gesture_script.schema.json"),
        gesture_schema,
    )?;
    Ok(())
}

//! package.json rewriting and SWC patches

use crate::error::{Result, ScaffoldError};
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

/// File name of the project manifest inside every bundled template
pub const MANIFEST_FILE: &str = "package.json";

const REACT_PLUGIN: &str = "@vitejs/plugin-react";
const REACT_SWC_PLUGIN: &str = "@vitejs/plugin-react-swc";
const REACT_SWC_DEPENDENCY: &str = r#""@vitejs/plugin-react-swc": "^3.5.0""#;

static REACT_DEPENDENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""@vitejs/plugin-react": ".+?""#).expect("dependency pattern is valid")
});

/// Replace the `name` field and render with two-space indentation and a
/// trailing newline. Key order is preserved.
pub fn rename_manifest(content: &str, package_name: &str) -> Result<String> {
    let mut manifest: Value = serde_json::from_str(content)?;

    match manifest.as_object_mut() {
        Some(object) => {
            object.insert("name".to_string(), Value::String(package_name.to_string()));
        }
        None => {
            return Err(ScaffoldError::InvalidManifest(
                "package.json must be a JSON object".to_string(),
            ))
        }
    }

    let mut rendered = serde_json::to_string_pretty(&manifest)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Swap the React plugin dependency for its SWC counterpart
pub fn patch_manifest_for_swc(content: &str) -> String {
    REACT_DEPENDENCY
        .replace(content, REACT_SWC_DEPENDENCY)
        .into_owned()
}

/// Point the Vite config import at the SWC plugin
pub fn patch_vite_config_for_swc(content: &str) -> String {
    content.replacen(REACT_PLUGIN, REACT_SWC_PLUGIN, 1)
}

/// Apply both SWC patches inside a materialized project
pub async fn setup_react_swc(root: &Path, is_typescript: bool) -> Result<()> {
    edit_file(&root.join(MANIFEST_FILE), patch_manifest_for_swc).await?;

    let config = if is_typescript {
        "vite.config.ts"
    } else {
        "vite.config.js"
    };
    edit_file(&root.join(config), patch_vite_config_for_swc).await
}

async fn edit_file(path: &Path, edit: impl FnOnce(&str) -> String) -> Result<()> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| ScaffoldError::io(path, e))?;
    fs::write(path, edit(&content))
        .await
        .map_err(|e| ScaffoldError::io(path, e))
}

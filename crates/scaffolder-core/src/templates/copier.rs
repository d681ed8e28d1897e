//! Copying a bundled template into the project directory

use crate::error::{Result, ScaffoldError};
use crate::templates::manifest::{self, MANIFEST_FILE};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

/// Top-level entries stored under a different name inside templates
/// (package registries drop dotfiles like `.gitignore`)
const RENAME_FILES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

/// Directory of the bundled template for a (SWC-stripped) id
pub fn template_dir(template_root: &Path, template_id: &str) -> PathBuf {
    template_root.join(format!("template-{}", template_id))
}

fn destination_name(name: &str) -> &str {
    RENAME_FILES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

/// Write the template for `template_id` into `target_dir`.
///
/// `template_id` has the SWC marker already stripped (`react-swc-ts` arrives
/// as `react-ts` with `is_swc` set); the SWC patches run after copying.
/// The manifest is written with `package_name` as its name. Returns the paths
/// written, relative to `target_dir`.
pub async fn copy_template(
    template_root: &Path,
    template_id: &str,
    is_swc: bool,
    target_dir: &Path,
    package_name: &str,
) -> Result<Vec<PathBuf>> {
    let source_dir = template_dir(template_root, template_id);

    if !source_dir.is_dir() {
        return Err(ScaffoldError::TemplateNotFound(source_dir));
    }
    let manifest_path = source_dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(ScaffoldError::ManifestMissing(manifest_path));
    }

    fs::create_dir_all(target_dir)
        .await
        .map_err(|e| ScaffoldError::io(target_dir, e))?;

    let mut written = Vec::new();

    for entry in WalkDir::new(&source_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(&source_dir).to_path_buf();
            ScaffoldError::io(path, e.into())
        })?;

        let relative = entry
            .path()
            .strip_prefix(&source_dir)
            .unwrap_or(entry.path());
        if relative == Path::new(MANIFEST_FILE) {
            continue;
        }

        let destination = rename_top_level(relative);
        let target_path = target_dir.join(&destination);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .map_err(|e| ScaffoldError::io(&target_path, e))?;
            continue;
        }

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::io(parent, e))?;
        }
        fs::copy(entry.path(), &target_path)
            .await
            .map_err(|e| ScaffoldError::io(entry.path(), e))?;

        debug!(file = %destination.display(), "copied");
        written.push(destination);
    }

    let content = fs::read_to_string(&manifest_path)
        .await
        .map_err(|e| ScaffoldError::io(&manifest_path, e))?;
    let renamed = manifest::rename_manifest(&content, package_name)?;
    let target_manifest = target_dir.join(MANIFEST_FILE);
    fs::write(&target_manifest, renamed)
        .await
        .map_err(|e| ScaffoldError::io(&target_manifest, e))?;
    written.push(PathBuf::from(MANIFEST_FILE));

    if is_swc {
        debug!(template = template_id, "applying SWC patches");
        manifest::setup_react_swc(target_dir, template_id.ends_with("-ts")).await?;
    }

    Ok(written)
}

/// Apply the rename table to the first path component only
fn rename_top_level(relative: &Path) -> PathBuf {
    let mut components = relative.components();
    let Some(first) = components.next() else {
        return relative.to_path_buf();
    };

    let first = first.as_os_str().to_string_lossy();
    let mut renamed = PathBuf::from(destination_name(&first));
    let rest = components.as_path();
    if !rest.as_os_str().is_empty() {
        renamed.push(rest);
    }
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(path, content).unwrap();
    }

    fn fake_template(root: &Path, id: &str, config: &str) {
        let dir = template_dir(root, id);
        write(
            &dir.join("package.json"),
            r#"{"name":"starter","devDependencies":{"@vitejs/plugin-react":"^4.2.1"}}"#,
        );
        write(&dir.join("_gitignore"), "node_modules\n");
        write(&dir.join("index.html"), "<div id=\"app\"></div>\n");
        write(&dir.join("src/main.ts"), "console.log('hi')\n");
        write(&dir.join("src/_gitignore"), "nested\n");
        write(
            &dir.join(config),
            "import react from '@vitejs/plugin-react'\nexport default {}\n",
        );
    }

    #[test]
    fn test_destination_name() {
        assert_eq!(destination_name("_gitignore"), ".gitignore");
        assert_eq!(destination_name("index.html"), "index.html");
    }

    #[test]
    fn test_rename_only_applies_top_level() {
        assert_eq!(rename_top_level(Path::new("_gitignore")), PathBuf::from(".gitignore"));
        assert_eq!(
            rename_top_level(Path::new("src/_gitignore")),
            PathBuf::from("src/_gitignore")
        );
    }

    #[tokio::test]
    async fn test_copy_template_writes_tree() {
        let templates = tempdir().unwrap();
        let project = tempdir().unwrap();
        fake_template(templates.path(), "vue-ts", "vite.config.ts");

        let target = project.path().join("app");
        let written = copy_template(templates.path(), "vue-ts", false, &target, "my-app")
            .await
            .unwrap();

        assert!(target.join(".gitignore").exists());
        assert!(!target.join("_gitignore").exists());
        assert!(target.join("src/main.ts").exists());
        assert!(target.join("src/_gitignore").exists());
        assert!(written.contains(&PathBuf::from("package.json")));

        let manifest = std_fs::read_to_string(target.join("package.json")).unwrap();
        assert!(manifest.contains(r#""name": "my-app""#));
        assert!(manifest.ends_with("}\n"));
        // no SWC patch for a non-SWC id
        assert!(manifest.contains(r#""@vitejs/plugin-react": "^4.2.1""#));
        let config = std_fs::read_to_string(target.join("vite.config.ts")).unwrap();
        assert!(!config.contains("plugin-react-swc"));
    }

    #[tokio::test]
    async fn test_copy_swc_variant_patches_files() {
        let templates = tempdir().unwrap();
        let project = tempdir().unwrap();
        fake_template(templates.path(), "react-ts", "vite.config.ts");

        copy_template(templates.path(), "react-ts", true, project.path(), "swc-app")
            .await
            .unwrap();

        let manifest = std_fs::read_to_string(project.path().join("package.json")).unwrap();
        assert!(manifest.contains(r#""@vitejs/plugin-react-swc": "^3.5.0""#));
        let config = std_fs::read_to_string(project.path().join("vite.config.ts")).unwrap();
        assert!(config.contains("'@vitejs/plugin-react-swc'"));
    }

    #[tokio::test]
    async fn test_copy_swc_javascript_variant_uses_js_config() {
        let templates = tempdir().unwrap();
        let project = tempdir().unwrap();
        fake_template(templates.path(), "react", "vite.config.js");

        copy_template(templates.path(), "react", true, project.path(), "swc-js")
            .await
            .unwrap();

        let config = std_fs::read_to_string(project.path().join("vite.config.js")).unwrap();
        assert!(config.contains("'@vitejs/plugin-react-swc'"));
    }

    #[tokio::test]
    async fn test_missing_template_dir() {
        let templates = tempdir().unwrap();
        let project = tempdir().unwrap();

        let err = copy_template(templates.path(), "lit", false, project.path(), "x")
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateNotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_manifest() {
        let templates = tempdir().unwrap();
        let project = tempdir().unwrap();
        write(&template_dir(templates.path(), "lit").join("index.html"), "x");

        let err = copy_template(templates.path(), "lit", false, project.path(), "x")
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestMissing(_)));
    }
}

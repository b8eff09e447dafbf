//! Path utilities.
//!
//! This module handles conversions between:
//! - Source paths (the `.tex` documents being converted)
//! - Output paths (where the converted text is written)

use std::path::{Path, PathBuf};

/// Derive the output path for a source document.
///
/// A trailing `.tex` is replaced by `.{extension}`; any other name simply
/// gets `.{extension}` appended. The file lands next to its source unless
/// `output_dir` is given.
///
/// # Examples
/// ```ignore
/// output_path_for("docs/paper.tex", "txt", None) => "docs/paper.txt"
/// output_path_for("notes", "txt", None) => "notes.txt"
/// output_path_for("docs/paper.tex", "html", Some("out")) => "out/paper.html"
/// ```
pub fn output_path_for(source: &Path, extension: &str, output_dir: Option<&Path>) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".tex").unwrap_or(&file_name);
    let output_name = format!("{stem}.{extension}");

    match output_dir {
        Some(dir) => dir.join(output_name),
        None => source.with_file_name(output_name),
    }
}

/// Resolve `path` against `base_path` unless it is already absolute.
pub fn resolve_against(base_path: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_output_path_replaces_tex() {
        assert_eq!(
            output_path_for(Path::new("docs/paper.tex"), "txt", None),
            PathBuf::from("docs/paper.txt")
        );
    }

    #[test]
    fn test_output_path_without_tex_suffix() {
        assert_eq!(
            output_path_for(Path::new("notes"), "txt", None),
            PathBuf::from("notes.txt")
        );
        assert_eq!(
            output_path_for(Path::new("paper.TEX"), "txt", None),
            PathBuf::from("paper.TEX.txt")
        );
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        assert_eq!(
            output_path_for(Path::new("v1.2.tex"), "txt", None),
            PathBuf::from("v1.2.txt")
        );
    }

    #[test]
    fn test_output_path_into_directory() {
        assert_eq!(
            output_path_for(Path::new("docs/paper.tex"), "html", Some(Path::new("/site"))),
            PathBuf::from("/site/paper.html")
        );
    }

    #[test]
    fn test_resolve_against() {
        assert_eq!(
            resolve_against(Path::new("/project"), Path::new("a.tex")),
            PathBuf::from("/project/a.tex")
        );
        assert_eq!(
            resolve_against(Path::new("/project"), Path::new("/abs/a.tex")),
            PathBuf::from("/abs/a.tex")
        );
    }

    #[test]
    fn test_base_path_from_config() {
        assert_eq!(
            base_path_from_config(Path::new("/project/latexpage.yaml")),
            PathBuf::from("/project")
        );
        assert_eq!(
            base_path_from_config(Path::new("latexpage.yaml")),
            PathBuf::from("")
        );
    }
}

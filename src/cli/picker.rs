//! Resume file selection.
//!
//! The terminal has no file dialog, so this module stands in for it:
//! - discover candidate resumes (`*.pdf`, `*.docx`, `*.txt`) under the working directory
//! - let the user pick one by number or type a path
//! - turn a path into [`FileMeta`] using filesystem metadata only
//!
//! File contents are never opened.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::{FileMeta, ResumeKind, mime_for_extension};
use crate::error::{AppError, EXIT_INPUT};

/// Prompt the user to select a resume from the current directory tree.
///
/// Behavior:
/// - list discovered resume files
/// - accept either a number (from the list) or an explicit path
/// - `q` cancels
pub fn prompt_for_resume_path(max_depth: usize) -> Result<PathBuf, AppError> {
    let files = discover_resume_files(Path::new("."), max_depth);
    if files.is_empty() {
        return Err(AppError::new(
            EXIT_INPUT,
            "No .pdf/.docx/.txt files found. Provide one with `careercraft check-resume <file>`.",
        ));
    }

    println!("Found {} candidate file(s):", files.len());
    for (idx, path) in files.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, pretty_path(path));
    }

    loop {
        print!("Select a file by number (1-{}) or type a path (q to quit): ", files.len());
        io::stdout()
            .flush()
            .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::new(
                EXIT_INPUT,
                "No input received. Provide a path with `careercraft check-resume <file>`.",
            ));
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(AppError::new(EXIT_INPUT, "Canceled."));
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=files.len()).contains(&choice) {
                return Ok(files[choice - 1].clone());
            }
            println!("Invalid choice: {choice}. Enter a number between 1 and {}.", files.len());
            continue;
        }

        let candidate = PathBuf::from(input);
        match read_file_meta(&candidate) {
            Ok(_) => return Ok(candidate),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
    }
}

/// Describe a file the way a browser file handle would: name, size, declared type.
///
/// The declared type is inferred from the extension.
pub fn read_file_meta(path: &Path) -> Result<FileMeta, AppError> {
    let meta = fs::metadata(path).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("File not found: {} ({e})", path.display()))
    })?;
    if meta.is_dir() {
        return Err(AppError::new(
            EXIT_INPUT,
            format!("Expected a file, got a directory: {}", path.display()),
        ));
    }

    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string());
    let mime = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(mime_for_extension)
        .unwrap_or("application/octet-stream");

    Ok(FileMeta::new(name, meta.len(), mime))
}

/// Discover candidate resume files under `root` (deterministic order).
///
/// This is used by both the basic text prompt and the Ratatui TUI.
pub fn discover_resume_files(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut out = Vec::new();
    find_resume_files_inner(root, 0, max_depth, &mut out);
    out.sort_by(|a, b| pretty_path(a).cmp(&pretty_path(b)));
    out
}

fn find_resume_files_inner(root: &Path, depth: usize, max_depth: usize, out: &mut Vec<PathBuf>) {
    if depth > max_depth {
        return;
    }

    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        if file_type.is_dir() {
            if should_skip_dir(&path) {
                continue;
            }
            find_resume_files_inner(&path, depth + 1, max_depth, out);
            continue;
        }

        if file_type.is_file() && has_resume_extension(&path) {
            out.push(path);
        }
    }
}

fn has_resume_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ResumeKind::ALL
                .iter()
                .any(|kind| ext.eq_ignore_ascii_case(kind.extension()))
        })
        == Some(true)
}

fn should_skip_dir(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    matches!(name, ".git" | "target" | "node_modules")
}

pub fn pretty_path(path: &Path) -> String {
    let stripped = path.strip_prefix("./").unwrap_or(path);
    stripped.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MIME_DOCX, MIME_PDF, validate_upload};

    fn touch(path: &Path, bytes: usize) {
        fs::write(path, vec![b'x'; bytes]).unwrap();
    }

    #[test]
    fn discovers_resume_extensions_and_skips_build_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/old")).unwrap();
        fs::create_dir_all(root.join("target")).unwrap();
        touch(&root.join("cv.PDF"), 10);
        touch(&root.join("docs/letter.docx"), 10);
        touch(&root.join("docs/old/notes.txt"), 10);
        touch(&root.join("photo.png"), 10);
        touch(&root.join("target/build.txt"), 10);

        let found = discover_resume_files(root, 4);
        let names: Vec<String> = found
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().display().to_string())
            .collect();
        assert_eq!(names.len(), 3, "{names:?}");
        assert!(names.iter().any(|n| n.ends_with("cv.PDF")));
        assert!(!names.iter().any(|n| n.contains("target")));
        assert!(!names.iter().any(|n| n.ends_with("photo.png")));
    }

    #[test]
    fn depth_limit_applies() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        touch(&dir.path().join("a/b/deep.pdf"), 1);
        assert!(discover_resume_files(dir.path(), 1).is_empty());
        assert_eq!(discover_resume_files(dir.path(), 2).len(), 1);
    }

    #[test]
    fn meta_uses_size_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        touch(&path, 2048);

        let meta = read_file_meta(&path).unwrap();
        assert_eq!(meta.name, "resume.docx");
        assert_eq!(meta.size_bytes, 2048);
        assert_eq!(meta.mime, MIME_DOCX);
        assert!(validate_upload(&meta).is_ok());
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume");
        touch(&path, 1);
        let meta = read_file_meta(&path).unwrap();
        assert_eq!(meta.mime, "application/octet-stream");
        assert_ne!(meta.mime, MIME_PDF);
        assert!(validate_upload(&meta).is_err());
    }

    #[test]
    fn directories_and_missing_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_file_meta(dir.path()).is_err());
        assert!(read_file_meta(&dir.path().join("nope.pdf")).is_err());
    }
}

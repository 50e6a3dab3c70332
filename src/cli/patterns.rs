// src/cli/patterns.rs
//
// Expand `--in`/`--out` arguments. Wildcards (`*`, `?`) are honoured in the
// file-name component only.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn has_wildcard(s: &str) -> bool {
    s.contains('*') || s.contains('?')
}

/// Expand a path or single-component pattern into sorted matching files.
///
/// A literal path that names an existing file is returned as-is; nothing
/// matching yields an empty list.
pub fn expand_pattern(pattern: &str) -> Vec<PathBuf> {
    let path = Path::new(pattern);

    let name_pattern = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) if has_wildcard(name) => name,
        _ => return existing_file(path),
    };

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let search_dir = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let mut matches: Vec<PathBuf> = WalkDir::new(search_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let name = e.file_name().to_str()?;
            wildcard_match(name_pattern, name).then(|| parent.join(name))
        })
        .collect();

    if matches.is_empty() {
        return existing_file(path);
    }

    matches.sort();
    matches
}

fn existing_file(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        Vec::new()
    }
}

/// Match `name` against a pattern where `*` is any run and `?` any one char
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let n: Vec<char> = name.chars().collect();

    let (mut pi, mut ni) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while ni < n.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == n[ni]) {
            pi += 1;
            ni += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some((pi, ni));
            pi += 1;
        } else if let Some((sp, sn)) = star {
            // backtrack: let the last star swallow one more char
            pi = sp + 1;
            ni = sn + 1;
            star = Some((sp, sn + 1));
        } else {
            return false;
        }
    }

    p[pi..].iter().all(|&c| c == '*')
}

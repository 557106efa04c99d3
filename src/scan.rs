use crate::error::Result;
use crate::name::camel_case;
use crate::svg::normalize_whitespace;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning a directory for an icon with matching content
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Identifier of an existing icon whose SVG content matches, if any
    pub existing: Option<String>,
    /// Files that could not be read, with the reason (scan continues past them)
    pub skipped: Vec<(PathBuf, String)>,
}

/// Scans `dir` for a generated file whose embedded SVG matches `payload`.
///
/// Candidates are the directory's direct children ending in `.ts` or `.tsx`.
/// The first back-tick-delimited block of each candidate (greedy, spanning
/// newlines) is compared against the payload with all whitespace removed; the
/// first match wins and is reported as that file's normalized stem. A missing
/// directory yields an empty outcome, and unreadable files are recorded in
/// `skipped` rather than aborting the scan.
///
/// # Errors
///
/// Returns `SvgconError::Regex` if the extraction pattern fails to compile.
pub fn find_existing_icon(payload: &str, dir: &Path) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();

    if !dir.is_dir() {
        return Ok(outcome);
    }

    let literal = Regex::new(r"(?s)`(.*)`")?;
    let normalized_payload = normalize_whitespace(payload);

    // Sorted so "first match" is deterministic across platforms
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                outcome.skipped.push((path, e.to_string()));
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !file_name.ends_with(".ts") && !file_name.ends_with(".tsx") {
            continue;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                outcome.skipped.push((path.to_path_buf(), e.to_string()));
                continue;
            }
        };

        if let Some(capture) = literal.captures(&content)
            && normalize_whitespace(capture[1].trim()) == normalized_payload
        {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            outcome.existing = Some(camel_case(stem));
            break;
        }
    }

    Ok(outcome)
}

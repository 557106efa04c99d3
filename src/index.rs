use crate::error::{Result, SvgconError};
use std::fs;
use std::path::Path;

/// Marker identifying import lines for generated SVG constants
pub const SVG_IMPORT_ANCHOR: &str = "from '@assets/svg/";

/// Marker identifying image asset imports, the fallback insertion anchor
pub const IMAGES_IMPORT_ANCHOR: &str = "from '@assets/images/";

/// Closing line of the export object block
const EXPORT_BLOCK_END: &str = "};";

/// Result of patching the index, with the transformed line sequence
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome {
    /// The patched file as an ordered sequence of lines
    pub lines: Vec<String>,
    /// Whether a new import line was inserted
    pub import_inserted: bool,
    /// Whether a new export entry was inserted
    pub export_inserted: bool,
    /// Whether the export block terminator (`};`) was found at all
    pub export_block_found: bool,
}

/// The import line expected for an identifier. Forward slashes on every
/// platform; the path is a bundler alias, not a filesystem path.
pub fn import_line(identifier: &str) -> String {
    format!("import {identifier} from '@assets/svg/{identifier}';")
}

/// Inserts the import line and export entry for `identifier` into the index,
/// returning a new line sequence (the input is never mutated).
///
/// The import goes after the last `@assets/svg/` import; failing that, after
/// the last `@assets/images/` import with a blank line opening the new
/// subgroup; failing that, at the very top of the file. The export entry goes
/// directly before the last line that trims to `};`. Both insertions are
/// skipped when an identical line already exists, so the transform is
/// idempotent. A missing `};` line only skips the export step; the import
/// insertion stands.
///
/// The `};` anchor is deliberately over-broad (the bottommost such line,
/// whatever construct it closes) to match the established index layout.
pub fn patch_lines(lines: &[String], identifier: &str) -> PatchOutcome {
    let mut lines = lines.to_vec();

    let import = import_line(identifier);
    let mut import_inserted = false;
    if !lines.iter().any(|l| l == &import) {
        if let Some(i) = lines.iter().rposition(|l| l.contains(SVG_IMPORT_ANCHOR)) {
            lines.insert(i + 1, import);
        } else if let Some(i) = lines.iter().rposition(|l| l.contains(IMAGES_IMPORT_ANCHOR)) {
            lines.insert(i + 1, String::new());
            lines.insert(i + 2, import);
        } else {
            lines.insert(0, import);
        }
        import_inserted = true;
    }

    let export = format!("  {identifier},");
    let mut export_inserted = false;
    let export_block_found;
    if let Some(i) = lines.iter().rposition(|l| l.trim() == EXPORT_BLOCK_END) {
        export_block_found = true;
        if !lines.iter().any(|l| l == &export) {
            lines.insert(i, export);
            export_inserted = true;
        }
    } else {
        export_block_found = false;
    }

    PatchOutcome {
        lines,
        import_inserted,
        export_inserted,
        export_block_found,
    }
}

/// Reads the index file, applies `patch_lines`, and writes the result back,
/// preserving whether the file ended with a newline.
///
/// # Errors
///
/// - `SvgconError::IndexNotFound` if the file does not exist (nothing is written).
/// - `SvgconError::Io` for read or write failures.
pub fn patch_index_file(path: &Path, identifier: &str) -> Result<PatchOutcome> {
    if !path.is_file() {
        return Err(SvgconError::IndexNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let had_trailing_newline = content.ends_with('\n');
    let lines: Vec<String> = content.lines().map(str::to_string).collect();

    let outcome = patch_lines(&lines, identifier);

    let mut patched = outcome.lines.join("\n");
    if had_trailing_newline {
        patched.push('\n');
    }
    fs::write(path, patched)?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn to_lines(content: &str) -> Vec<String> {
        content.lines().map(str::to_string).collect()
    }

    const INDEX: &str = "\
import logo from '@assets/images/logo';

import arrowLeft from '@assets/svg/arrowLeft';
import arrowRight from '@assets/svg/arrowRight';

export let icons = {
  arrowLeft,
  arrowRight,
};
";

    #[test]
    fn test_import_inserted_after_last_svg_import() {
        let outcome = patch_lines(&to_lines(INDEX), "myIcon");
        assert!(outcome.import_inserted);
        assert!(outcome.export_inserted);
        assert!(outcome.export_block_found);

        let i = outcome
            .lines
            .iter()
            .position(|l| l == "import myIcon from '@assets/svg/myIcon';")
            .unwrap();
        assert_eq!(outcome.lines[i - 1], "import arrowRight from '@assets/svg/arrowRight';");
    }

    #[test]
    fn test_export_inserted_before_closing_brace() {
        let outcome = patch_lines(&to_lines(INDEX), "myIcon");
        let i = outcome.lines.iter().position(|l| l == "  myIcon,").unwrap();
        assert_eq!(outcome.lines[i + 1], "};");
    }

    #[test]
    fn test_patch_is_idempotent() {
        let once = patch_lines(&to_lines(INDEX), "myIcon");
        let twice = patch_lines(&once.lines, "myIcon");

        assert!(!twice.import_inserted);
        assert!(!twice.export_inserted);
        assert_eq!(once.lines, twice.lines);
    }

    #[test]
    fn test_images_anchor_fallback_opens_subgroup() {
        let index = "\
import logo from '@assets/images/logo';

export let icons = {
};
";
        let outcome = patch_lines(&to_lines(index), "myIcon");
        assert_eq!(outcome.lines[0], "import logo from '@assets/images/logo';");
        assert_eq!(outcome.lines[1], "");
        assert_eq!(outcome.lines[2], "import myIcon from '@assets/svg/myIcon';");
    }

    #[test]
    fn test_no_anchor_inserts_at_top() {
        let index = "\
export let icons = {
};
";
        let outcome = patch_lines(&to_lines(index), "myIcon");
        assert_eq!(outcome.lines[0], "import myIcon from '@assets/svg/myIcon';");
        assert!(outcome.export_inserted);
    }

    #[test]
    fn test_missing_terminator_keeps_import() {
        let index = "import arrowLeft from '@assets/svg/arrowLeft';\n";
        let outcome = patch_lines(&to_lines(index), "myIcon");

        assert!(outcome.import_inserted);
        assert!(!outcome.export_block_found);
        assert!(!outcome.export_inserted);
        assert!(outcome.lines.contains(&import_line("myIcon")));
    }

    #[test]
    fn test_bottommost_closing_brace_wins() {
        // The anchor matches the last `};` line regardless of what it closes
        let index = "\
import arrowLeft from '@assets/svg/arrowLeft';

export let icons = {
  arrowLeft,
};

const sizes = {
  small: 16,
};
";
        let outcome = patch_lines(&to_lines(index), "myIcon");
        let i = outcome.lines.iter().position(|l| l == "  myIcon,").unwrap();
        assert_eq!(outcome.lines[i - 1], "  small: 16,");
    }

    #[test]
    fn test_indented_terminator_matches() {
        let index = "\
export let icons = {
  };
";
        let outcome = patch_lines(&to_lines(index), "myIcon");
        assert!(outcome.export_block_found);
        // Import lands at the top (no anchors), export right before the brace
        assert_eq!(outcome.lines[2], "  myIcon,");
        assert_eq!(outcome.lines[3], "  };");
    }

    #[test]
    fn test_empty_file_gets_import_only() {
        let outcome = patch_lines(&[], "myIcon");
        assert_eq!(outcome.lines, vec![import_line("myIcon")]);
        assert!(!outcome.export_block_found);
    }

    #[test]
    fn test_patch_index_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.ts");
        fs::write(&path, INDEX).unwrap();

        let outcome = patch_index_file(&path, "myIcon").unwrap();
        assert!(outcome.import_inserted);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("import myIcon from '@assets/svg/myIcon';"));
        assert!(content.contains("\n  myIcon,\n};"));
        assert!(content.ends_with('\n'));

        // Second application leaves the file untouched
        patch_index_file(&path, "myIcon").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_trailing_newline_absence_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.ts");
        fs::write(&path, INDEX.trim_end()).unwrap();

        patch_index_file(&path, "myIcon").unwrap();
        assert!(!fs::read_to_string(&path).unwrap().ends_with('\n'));
    }

    #[test]
    fn test_missing_index_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.ts");

        let result = patch_index_file(&path, "myIcon");
        assert!(matches!(result, Err(SvgconError::IndexNotFound { .. })));
        assert!(!path.exists());
    }
}

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the generated icon constant files
pub const ICON_FILE_EXT: &str = "tsx";

/// Renders the source for an icon constant module: the trimmed SVG markup in a
/// template literal, followed by a default export of the same identifier.
pub fn render_icon_module(identifier: &str, svg: &str) -> String {
    format!(
        "const {identifier} = `\n{}\n`;\n\nexport default {identifier};",
        svg.trim()
    )
}

/// Writes `<output_dir>/<identifier>.tsx`, creating the directory if needed.
///
/// An existing file with the same name is overwritten without confirmation.
///
/// # Errors
///
/// Returns `SvgconError::Io` if the directory cannot be created or the file
/// cannot be written.
pub fn write_icon_file(svg: &str, identifier: &str, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(format!("{identifier}.{ICON_FILE_EXT}"));
    fs::write(&path, render_icon_module(identifier, svg))?;

    Ok(path)
}

//! # svgcon
//!
//! A library and CLI tool for turning SVG markup on the system clipboard into
//! TypeScript icon-constant files, keeping a central icon index file in sync.
//! Designed for component-library workflows where every icon lives in its own
//! generated module and is re-exported from one shared index.
//!
//! ## Features
//!
//! - Normalize free-form icon names into camel-case identifiers
//! - Emit `<identifier>.tsx` files wrapping the SVG in a template literal
//! - Patch import and export lines into the index without disturbing its layout
//! - Detect duplicates by comparing whitespace-normalized SVG content
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```no_run
//! use std::path::Path;
//! use svgcon::{emit, index, name};
//!
//! let identifier = name::camel_case("my-new-icon");
//! let svg = "<svg><path/></svg>";
//!
//! emit::write_icon_file(svg, &identifier, Path::new("assets/svg"))?;
//! index::patch_index_file(Path::new("src/constants/icons.ts"), &identifier)?;
//! # Ok::<(), svgcon::SvgconError>(())
//! ```
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Copy an SVG, then run and type the icon name at the prompt
//! svgcon
//!
//! # Point at a different project layout
//! svgcon --output-dir app/assets/svg --index-file app/src/icons.ts
//! ```

pub mod emit;
pub mod error;
pub mod index;
pub mod name;
pub mod scan;
pub mod svg;

// Re-export main types and functions for convenience
pub use error::{Result, SvgconError};
pub use index::PatchOutcome;
pub use scan::ScanOutcome;

use clap::Parser;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;
use svgcon::{emit, index, name, scan, svg};

const LONG_HELP: &str = r#"
Workflow:
  1. Copy SVG markup to the clipboard
  2. Run svgcon and type the icon name at the prompt
  3. A <name>.tsx constant file lands in the output directory
  4. The index file gains matching import and export lines

Examples:
  # Defaults: assets/svg and src/constants/icons.ts
  svgcon
  # Custom project layout
  svgcon --output-dir app/assets/svg --index-file app/src/icons.ts

Index file expectations:
  Imports referencing '@assets/svg/...' (or '@assets/images/...' as a
  fallback anchor) and an export object block closed by a line that is
  exactly '};'. New lines are inserted next to the existing ones; the
  rest of the file is left untouched.
"#;

/// Clipboard-to-constant generator for SVG icon libraries.
#[derive(Parser, Debug)]
#[command(
    name = "svgcon",
    version,
    about = "Generate SVG icon constant files from the clipboard and keep the icon index in sync.",
    after_long_help = LONG_HELP
)]
struct Cli {
    /// Directory receiving the generated icon files
    #[arg(long, value_name = "DIR", default_value = "assets/svg")]
    output_dir: PathBuf,

    /// Index file aggregating the icon imports and exports
    #[arg(long, value_name = "FILE", default_value = "src/constants/icons.ts")]
    index_file: PathBuf,

    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => LogLevel::Error,
        (false, 0) => LogLevel::Warn,
        (false, 1) => LogLevel::Info,
        (false, _) => LogLevel::Debug,
    };

    // Startup capability check: without clipboard access nothing else works
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            eprintln!("Error: clipboard access is unavailable: {e}");
            eprintln!("  svgcon requires a system clipboard (on Linux, an X11 or Wayland session).");
            std::process::exit(1);
        }
    };

    run(&cli, &mut clipboard, log_level);
}

/// One interactive invocation. Every failure past the startup check prints a
/// message and returns; the process still exits normally.
fn run(cli: &Cli, clipboard: &mut arboard::Clipboard, log_level: LogLevel) {
    let raw_name: String = match Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Icon name (e.g. my-new-icon)")
        .allow_empty(true)
        .interact_text()
    {
        Ok(input) => input,
        Err(_) => {
            // Interrupting the prompt is a cancellation, not an error
            println!("Operation cancelled.");
            return;
        }
    };

    if raw_name.trim().is_empty() {
        eprintln!("Error: the icon name cannot be empty.");
        return;
    }

    let payload = match clipboard.get_text() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: could not read the clipboard: {e}");
            return;
        }
    };

    if let Err(e) = svg::validate_payload(&payload) {
        eprintln!("Error: {e}");
        eprintln!("  Copy the SVG markup and try again.");
        return;
    }

    let identifier = name::camel_case(&raw_name);
    if identifier.is_empty() {
        eprintln!("Error: '{raw_name}' contains no usable identifier characters.");
        return;
    }

    log(
        log_level,
        LogLevel::Debug,
        &format!("Scanning {} for duplicate content...", cli.output_dir.display()),
    );
    match scan::find_existing_icon(&payload, &cli.output_dir) {
        Ok(outcome) => {
            for (path, reason) in &outcome.skipped {
                log(
                    log_level,
                    LogLevel::Warn,
                    &format!("Could not read {}: {reason}", path.display()),
                );
            }
            if let Some(existing) = outcome.existing {
                println!("This icon already exists as '{existing}'. Nothing was written.");
                return;
            }
        }
        Err(e) => {
            eprintln!("Error: duplicate scan failed: {e}");
            return;
        }
    }

    let icon_path = match emit::write_icon_file(&payload, &identifier, &cli.output_dir) {
        Ok(path) => path,
        Err(e) => {
            // Without the icon file the index must not be touched
            eprintln!("Error: failed to create the icon file: {e}");
            return;
        }
    };
    println!("✓ Created icon file: {}", icon_path.display());

    match index::patch_index_file(&cli.index_file, &identifier) {
        Ok(outcome) => {
            if outcome.import_inserted {
                println!("✓ Added import for '{identifier}'.");
            }
            if outcome.export_inserted {
                println!("✓ Added export for '{identifier}'.");
            }
            if !outcome.export_block_found {
                log(
                    log_level,
                    LogLevel::Warn,
                    "No export block terminator ('};') found; the export entry was skipped.",
                );
            }
            println!("✓ Updated index file: {}", cli.index_file.display());
        }
        Err(e) => eprintln!("Error: {e}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

fn log(current_level: LogLevel, message_level: LogLevel, message: &str) {
    if message_level >= current_level {
        eprintln!(
            "[{}] {}",
            match message_level {
                LogLevel::Debug => "DEBUG",
                LogLevel::Info => "INFO",
                LogLevel::Warn => "WARN",
                LogLevel::Error => "ERROR",
            },
            message
        );
    }
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Colored terminal output.
    Ansi,
    /// The render snapshot as JSON.
    Json,
}

/// When to emit color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Only when stdout is a terminal.
    Auto,
    Always,
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "codeview")]
#[command(version, about = "Display source code with syntax colors, folds and diffs")]
pub struct Args {
    /// Source file to display (the new version when --diff is given)
    pub file: PathBuf,

    /// Language tag; guessed from the file extension when omitted
    #[arg(short, long, value_name = "TAG")]
    pub language: Option<String>,

    /// Color theme: vs-dark, light, dracula or nord
    #[arg(short, long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Show line numbers
    #[arg(short = 'n', long)]
    pub line_numbers: bool,

    /// Number shown for the first line
    #[arg(long, value_name = "N")]
    pub start_line: Option<usize>,

    /// Lines to highlight, e.g. "2,4-6"
    #[arg(long, value_name = "SPEC")]
    pub highlight: Option<String>,

    /// Line to mark as active
    #[arg(long, value_name = "N")]
    pub active_line: Option<usize>,

    /// Enable brace folding
    #[arg(long)]
    pub fold: bool,

    /// Collapse the fold starting at LINE (repeatable, implies --fold)
    #[arg(long, value_name = "LINE")]
    pub collapse: Vec<usize>,

    /// Diff OLD_FILE against FILE
    #[arg(long, value_name = "OLD_FILE")]
    pub diff: Option<PathBuf>,

    /// Reveal the code with a typewriter effect
    #[arg(long)]
    pub typing: bool,

    /// Delay between typewriter frames, in milliseconds
    #[arg(long, value_name = "MS")]
    pub typing_speed: Option<u64>,

    /// Never animate, even if the config enables it
    #[arg(long, conflicts_with = "typing")]
    pub no_typing: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Ansi)]
    pub format: Format,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// JSON config file; flags override its values
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

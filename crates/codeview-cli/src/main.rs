//! `codeview` - terminal demo for the codeview crates.
//!
//! Renders a source file as a colored code block.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p codeview-cli -- src/main.rs -n --theme dracula
//! cargo run -p codeview-cli -- new.js --diff old.js
//! cargo run -p codeview-cli -- app.tsx --fold --collapse 12 --highlight 3,7-9
//! cargo run -p codeview-cli -- demo.py --typing --typing-speed 30
//! cargo run -p codeview-cli -- lib.ts --format json
//! ```
//!
//! Settings can also come from a JSON file (`--config`), with flags taking precedence:
//!
//! ```json
//! { "theme": "nord", "show_line_numbers": true, "highlight_lines": "2,4-6" }
//! ```
//!
//! Set `RUST_LOG=codeview_highlight=debug` to see dispatch decisions on stderr.

mod args;
mod config;
mod error;
mod render;
mod theme;
mod typing;

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use codeview_core::FoldState;
use codeview_lang::Language;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, ColorMode, Format};
use crate::config::Config;
use crate::error::CliError;
use crate::render::Renderer;
use crate::theme::ThemeName;

/// Tag used when neither `--language` nor the extension names a language.
const FALLBACK_LANGUAGE: &str = "plaintext";

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    run(args)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_args(&args);
    let theme: ThemeName = config.theme.parse()?;

    let code = read_source(&args.file)?;
    let language = resolve_language(&args);
    tracing::debug!(%language, %theme, "rendering {}", args.file.display());
    let view = config.view(&language);

    let mut folds = FoldState::new();
    for line in &args.collapse {
        folds.collapse(*line);
    }
    folds.retain_existing(&view.fold_ranges(&code));

    let snapshot = match &args.diff {
        Some(old_path) => {
            let old = read_source(old_path)?;
            Some(view.render_diff(&old, &code))
        }
        None => None,
    };

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let mut out = stdout.lock();

    if args.format == Format::Json {
        let snapshot = snapshot.unwrap_or_else(|| view.render(&code, &folds));
        serde_json::to_writer_pretty(&mut out, &snapshot).map_err(CliError::from)?;
        writeln!(out).map_err(CliError::from)?;
        return Ok(());
    }

    let color = match args.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty,
    };
    let renderer = Renderer::new(theme.palette(), color);

    match snapshot {
        Some(diff) => {
            renderer
                .write_snapshot(&mut out, &diff)
                .context("failed to write the diff")?;
        }
        None if config.typing_effect && is_tty => {
            let delay = Duration::from_millis(config.typing_speed_ms);
            typing::play(&mut out, &view, &code, &folds, &renderer, delay)
                .context("typewriter playback failed")?;
        }
        None => {
            if config.typing_effect {
                tracing::debug!("stdout is not a terminal; skipping the typewriter effect");
            }
            renderer
                .write_snapshot(&mut out, &view.render(&code, &folds))
                .context("failed to write the code block")?;
        }
    }
    Ok(())
}

fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn resolve_language(args: &Args) -> String {
    if let Some(language) = &args.language {
        return language.clone();
    }
    args.file
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .map_or_else(
            || {
                tracing::debug!(
                    "no language for {}; rendering as plain text",
                    args.file.display()
                );
                FALLBACK_LANGUAGE.to_string()
            },
            |lang| lang.tag().to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_extension() {
        let args = Args::try_parse_from(["codeview", "src/App.TSX"]).unwrap();
        assert_eq!(resolve_language(&args), "tsx");

        let args = Args::try_parse_from(["codeview", "notes.txt"]).unwrap();
        assert_eq!(resolve_language(&args), FALLBACK_LANGUAGE);

        let args = Args::try_parse_from(["codeview", "x.txt", "-l", "sql"]).unwrap();
        assert_eq!(resolve_language(&args), "sql");
    }
}

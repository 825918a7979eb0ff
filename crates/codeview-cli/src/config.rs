//! File-backed settings, overridden by command-line flags.

use std::fs;
use std::path::Path;

use codeview_core::HighlightSpec;
use codeview_highlight::CodeView;
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::error::CliError;

const DEFAULT_TYPING_SPEED_MS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Theme name, see [`crate::theme::ThemeName`].
    pub theme: String,
    pub show_line_numbers: bool,
    pub start_line_number: usize,
    pub highlight_lines: Option<HighlightSpec>,
    pub active_line: Option<usize>,
    pub code_folding: bool,
    pub typing_effect: bool,
    pub typing_speed_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "vs-dark".to_string(),
            show_line_numbers: false,
            start_line_number: 1,
            highlight_lines: None,
            active_line: None,
            code_folding: false,
            typing_effect: false,
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
        }
    }
}

impl Config {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay the values given on the command line.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(theme) = &args.theme {
            self.theme = theme.clone();
        }
        if args.line_numbers {
            self.show_line_numbers = true;
        }
        if let Some(start) = args.start_line {
            self.start_line_number = start;
        }
        if let Some(spec) = &args.highlight {
            self.highlight_lines = Some(HighlightSpec::from(spec.as_str()));
        }
        if args.active_line.is_some() {
            self.active_line = args.active_line;
        }
        if args.fold || !args.collapse.is_empty() {
            self.code_folding = true;
        }
        if args.typing {
            self.typing_effect = true;
        }
        if args.no_typing {
            self.typing_effect = false;
        }
        if let Some(speed) = args.typing_speed {
            self.typing_speed_ms = speed;
        }
    }

    /// Build the render options for `language`.
    pub fn view(&self, language: &str) -> CodeView {
        CodeView::new(language)
            .show_line_numbers(self.show_line_numbers)
            .start_line_number(self.start_line_number)
            .highlight_lines(HighlightSpec::resolve_optional(
                self.highlight_lines.as_ref(),
            ))
            .active_line(self.active_line)
            .code_folding(self.code_folding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"theme": "nord", "highlight_lines": [2, 3]}"#).unwrap();
        assert_eq!(
            config,
            Config {
                theme: "nord".to_string(),
                highlight_lines: Some(HighlightSpec::Lines(vec![2, 3])),
                ..Config::default()
            }
        );
        assert_eq!(config.typing_speed_ms, 20);
    }

    #[test]
    fn test_string_highlight_spec() {
        let config: Config = serde_json::from_str(r#"{"highlight_lines": "1-2"}"#).unwrap();
        assert_eq!(
            config.highlight_lines,
            Some(HighlightSpec::Text("1-2".to_string()))
        );
    }

    #[test]
    fn test_flags_override_file() {
        let mut config = Config {
            theme: "light".to_string(),
            typing_effect: true,
            start_line_number: 5,
            ..Config::default()
        };
        let args = Args::try_parse_from([
            "codeview",
            "x.ts",
            "--theme",
            "dracula",
            "--no-typing",
            "--collapse",
            "4",
        ])
        .unwrap();
        config.apply_args(&args);
        assert_eq!(config.theme, "dracula");
        assert!(!config.typing_effect);
        assert!(config.code_folding);
        assert_eq!(config.start_line_number, 5);
    }

    #[test]
    fn test_load_reports_path() {
        let err = Config::load(Path::new("/definitely/missing/codeview.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/missing/codeview.json"));
    }
}

//! Output Rendering
//!
//! Human-readable output for deploy runs. NDJSON lives in
//! `infrastructure::events`.

use std::path::Path;

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use crate::application::{DeployPlan, DeployReport};
use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::{ConfigWarning, DeployMode};

/// Extra opt-out on top of `NO_COLOR`
pub const NO_COLOR_ENV_VAR: &str = "REFDEPLOY_NO_COLOR";

mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
    write: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
            write: "→",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[WARN]",
            write: "->",
            skip: "[ ]",
        }
    }
}

/// What the terminal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
    pub unicode: bool,
}

impl Theme {
    /// Detect from stdout and the environment
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    fn detect_with(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let term_is_dumb = get_env("TERM")
            .map(|t| t.eq_ignore_ascii_case("dumb"))
            .unwrap_or(false);
        let no_color = get_env("NO_COLOR").is_some() || get_env(NO_COLOR_ENV_VAR).is_some();

        Self {
            color: is_tty && !term_is_dumb && !no_color,
            unicode: !term_is_dumb,
        }
    }

    /// No color, ASCII icons
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }

    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, message: &str) -> String {
        format!(
            "{} {}",
            self.paint(self.icons().check, colors::SUCCESS),
            message
        )
    }

    pub fn error(&self, message: &str) -> String {
        format!("{} {}", self.paint(self.icons().cross, colors::ERROR), message)
    }

    pub fn warning(&self, message: &str) -> String {
        format!("{} {}", self.paint(self.icons().warn, colors::WARNING), message)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
        }
    }
}

fn relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

/// Event sink printing progress lines
///
/// Entry lines go to stdout at `-v` and above. Dangling-source warnings
/// always go to stderr.
pub struct TextEventSink {
    theme: Theme,
    verbose: u8,
}

impl TextEventSink {
    pub fn new(theme: Theme, verbose: u8) -> Self {
        Self { theme, verbose }
    }

    /// Line for an event, if one is shown at this verbosity
    pub fn line_for(&self, event: &DeployEvent) -> Option<String> {
        let icons = self.theme.icons();
        match event {
            DeployEvent::Started {
                game_dir,
                mode,
                entry_count,
            } if self.verbose > 0 => Some(format!(
                "Deploying {} entries to {} ({})",
                entry_count,
                game_dir.display(),
                mode
            )),
            DeployEvent::ScaffoldEnsured { path } if self.verbose > 1 => Some(format!(
                "  {} mkdir {}",
                self.theme.paint(icons.write, colors::DIM),
                path.display()
            )),
            DeployEvent::GroupSkipped { group } if self.verbose > 0 => Some(format!(
                "  {} skipped group {}",
                self.theme.paint(icons.skip, colors::DIM),
                group
            )),
            DeployEvent::EntryDeployed {
                kind,
                source,
                destination,
                replaced,
                ..
            } if self.verbose > 0 => Some(format!(
                "  {} {} {} <- {}{}",
                self.theme.paint(icons.write, colors::DIM),
                kind,
                destination.display(),
                source.display(),
                if *replaced { " (replaced)" } else { "" }
            )),
            DeployEvent::DanglingSource { source } => Some(self.theme.warning(&format!(
                "source {} does not exist yet, link will dangle",
                source.display()
            ))),
            _ => None,
        }
    }
}

impl DeployEventSink for TextEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Some(line) = self.line_for(&event) else {
            return;
        };
        if matches!(event, DeployEvent::DanglingSource { .. }) {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Plan listing for `--dry_run`
///
/// Destinations are shown relative to the game dir, sources relative to
/// the working directory.
pub fn render_plan(plan: &DeployPlan) -> String {
    let mut out = format!(
        "Dry run: {} into {}\n",
        plan.mode,
        plan.game_dir.display()
    );

    for dir in &plan.scaffold {
        out.push_str(&format!(
            "  mkdir {}\n",
            relative(dir, &plan.game_dir).display()
        ));
    }
    for group in &plan.skipped_groups {
        out.push_str(&format!("  skip  group {}\n", group));
    }
    for entry in &plan.entries {
        out.push_str(&format!(
            "  {:<5} {} <- {}\n",
            entry.kind.to_string(),
            relative(&entry.destination, &plan.game_dir).display(),
            relative(&entry.source, &plan.cwd).display()
        ));
    }

    out.push_str(&format!(
        "{} entries, nothing written\n",
        plan.entry_count()
    ));
    out
}

/// One-line summary of a finished run
pub fn render_summary(report: &DeployReport) -> String {
    let mut line = format!("{} entries {}", report.deployed_count(), report.mode.verb());
    let replaced = report.replaced_count();
    if replaced > 0 {
        line.push_str(&format!(", {} replaced", replaced));
    }
    match report.skipped_groups.len() {
        0 => {}
        1 => line.push_str(", 1 group skipped"),
        n => line.push_str(&format!(", {} groups skipped", n)),
    }
    line
}

/// Final line after a successful run
pub fn render_success(mode: DeployMode, theme: &Theme) -> String {
    theme.success(mode.success_message())
}

/// Unknown-key warnings from the manifest loader
pub fn render_warnings(warnings: &[ConfigWarning], theme: &Theme) -> Vec<String> {
    warnings
        .iter()
        .map(|w| {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            let mut message = format!("unknown manifest key '{}' in {}", w.key_path, location);
            if let Some(suggestion) = &w.suggestion {
                message.push_str(&format!(" (did you mean '{}'?)", suggestion));
            }
            theme.warning(&message)
        })
        .collect()
}

//! Command line interface for the selection palette
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Many CLI options are documented with
//! examples to help users understand the expected format.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::core::config_file::ConfigFile;
use crate::core::state::outline::ElementId;
use crate::editing::selection::{BooleanOp, Category, Derivation, Selector};

/// bezy-selection CLI arguments
///
/// Examples:
///   bezy-selection --edit MyFont.ufo --glyph a --category handles
///   bezy-selection --edit MyFont.ufo --glyph a --category lines --filter extremes
///   bezy-selection --edit MyFont.ufo --glyph a --select node:0:4 --category handles --op subtract
///   bezy-selection --edit MyFont.ufo --glyph o --select node:0:0 --select node:0:3 --derive continue
///   bezy-selection --edit MyFont.ufo --glyph a --category guides --cycle
///   bezy-selection --new-config
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "bezy-selection",
    version,
    about = "Structural selection palette for glyph outlines",
    long_about = "Runs one selection palette action against a glyph of a UFO source: select a category of elements (smooth curves, sharp curves, lines, handles, components, anchors, guides, hints) combined with the current selection, or derive a new selection from it (grow, shrink, continue, between, undo-last, linked-hints)."
)]
pub struct CliArgs {
    /// Path to the UFO source holding the glyph
    #[clap(
        long = "edit",
        short = 'e',
        help = "UFO source to read",
        long_help = "Path to a UFO version 3 directory. The glyph named by --glyph is loaded from it together with the font's global guidelines."
    )]
    pub font_source: Option<PathBuf>,

    /// Name of the glyph to select in
    #[clap(long = "glyph", short = 'g', help = "Glyph to select in")]
    pub glyph: Option<String>,

    /// Layer to read the glyph from
    #[clap(
        long = "layer",
        help = "Layer to read the glyph from",
        long_help = "Name of the UFO layer holding the glyph. Defaults to the font's default layer."
    )]
    pub layer: Option<String>,

    /// Elements that are selected before the action runs, in order
    ///
    /// Element keys: node:<path>:<index>, anchor:<i>, component:<i>,
    /// guide:local:<i>, guide:global:<i>, hint:<i>
    #[clap(
        long = "select",
        short = 's',
        help = "Seed the selection with an element (repeatable)",
        long_help = "Seed the current selection with an element before the action runs. Repeat the flag to select several; the order given is the selection order that continue, between and undo-last look at. Keys: node:<path>:<index>, anchor:<i>, component:<i>, guide:local:<i>, guide:global:<i>, hint:<i>"
    )]
    pub select: Vec<String>,

    /// Palette row to apply
    #[clap(
        long = "category",
        short = 'c',
        help = "Category to select",
        long_help = "Palette row to apply: smooth-curves, sharp-curves, lines, handles, components, anchors, guides or hints.",
        conflicts_with = "derive"
    )]
    pub category: Option<String>,

    /// Filter option for the category
    #[clap(
        long = "filter",
        short = 'f',
        help = "Filter option for the category",
        long_help = "Filter option for the category, e.g. extremes, non-extremes, locked, entry, global, corners. Defaults to the option stored in settings.json, or all.",
        requires = "category"
    )]
    pub filter: Option<String>,

    /// How the category combines with the current selection
    #[clap(
        long = "op",
        help = "add (default), subtract or intersect",
        requires = "category"
    )]
    pub op: Option<String>,

    /// Selection command to run instead of a category
    #[clap(
        long = "derive",
        short = 'd',
        help = "Selection command to run",
        long_help = "Derive a new selection from the current one: grow, shrink, continue, between, undo-last or linked-hints."
    )]
    pub derive: Option<String>,

    /// Advance the category's stored filter after the run
    #[clap(
        long = "cycle",
        help = "Advance the category's stored filter and save it",
        long_help = "After the action, move the category's filter in settings.json to its next option, wrapping back to the first.",
        requires = "category"
    )]
    pub cycle: bool,

    /// Write logs to ~/.config/bezy-selection/logs/ instead of stderr
    #[clap(long = "log-file", help = "Write logs to the config logs directory")]
    pub log_file: bool,

    /// Initialize user configuration directory with settings
    ///
    /// This creates the ~/.config/bezy-selection directory with:
    /// - settings.json: log level and the stored filter of every row
    /// - logs/: target of --log-file
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings",
        long_help = "Initialize the ~/.config/bezy-selection directory with a settings.json file and a logs directory."
    )]
    pub new_config: bool,
}

/// The single action one invocation performs
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Category {
        category: Category,
        filter: Option<String>,
        op: BooleanOp,
    },
    Derive(Derivation),
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that the source exists and every key parses before
    /// the glyph is loaded, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if self.new_config {
            return Ok(());
        }

        let Some(path) = &self.font_source else {
            return Err("No font source given.\nPass a UFO directory with --edit.".to_string());
        };
        if !path.exists() {
            return Err(format!(
                "Font source does not exist: {}\nMake sure the path is correct and the file exists.",
                path.display()
            ));
        }
        if !path.is_dir() || !path.join("metainfo.plist").exists() {
            return Err(format!(
                "Not a valid UFO directory: missing metainfo.plist in {}\nMake sure this is a valid UFO directory.",
                path.display()
            ));
        }

        if self.glyph.is_none() {
            return Err("No glyph given.\nName the glyph to select in with --glyph.".to_string());
        }

        self.seed_elements()?;
        self.action()?;
        Ok(())
    }

    /// Parse the `--select` keys
    pub fn seed_elements(&self) -> Result<Vec<ElementId>, String> {
        self.select
            .iter()
            .map(|key| {
                ElementId::parse(key).ok_or_else(|| {
                    format!(
                        "Unknown element key: '{key}'\nExpected node:<path>:<index>, anchor:<i>, component:<i>, guide:local:<i>, guide:global:<i> or hint:<i>"
                    )
                })
            })
            .collect()
    }

    /// The action this invocation asks for
    pub fn action(&self) -> Result<Action, String> {
        match (&self.category, &self.derive) {
            (Some(category), None) => {
                let category = Category::from_str(category).ok_or_else(|| {
                    let available = Category::ALL
                        .iter()
                        .map(Category::as_str)
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("Unknown category: '{category}'\nAvailable categories: {available}")
                })?;
                if let Some(filter) = &self.filter {
                    Selector::new(category, filter).map_err(|_| {
                        format!(
                            "Unknown filter '{filter}' for {}\nAvailable filters: {}",
                            category.as_str(),
                            category.filter_keys().join(", ")
                        )
                    })?;
                }
                let op = match &self.op {
                    Some(op) => BooleanOp::from_str(op).ok_or_else(|| {
                        format!(
                            "Unknown operation: '{op}'\nAvailable operations: add, subtract, intersect"
                        )
                    })?,
                    None => BooleanOp::default(),
                };
                Ok(Action::Category {
                    category,
                    filter: self.filter.clone(),
                    op,
                })
            }
            (None, Some(derive)) => {
                let derivation = Derivation::from_str(derive).ok_or_else(|| {
                    let available = Derivation::ALL
                        .iter()
                        .map(Derivation::as_str)
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("Unknown selection command: '{derive}'\nAvailable commands: {available}")
                })?;
                Ok(Action::Derive(derivation))
            }
            (Some(_), Some(_)) => Err("Pass either --category or --derive, not both.".to_string()),
            (None, None) => Err("Nothing to do.\nPass --category or --derive.".to_string()),
        }
    }

    /// Get the log level from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. RUST_LOG (handled by the subscriber's env filter)
    /// 2. Config file setting (~/.config/bezy-selection/settings.json)
    /// 3. Built-in default (warn)
    pub fn get_log_level(&self, config: Option<&ConfigFile>) -> String {
        if let Some(level) = config.and_then(|config| config.log_level.clone()) {
            debug!("Using log level from config: {}", level);
            return level;
        }
        "warn".to_string()
    }
}

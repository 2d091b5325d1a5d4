//! Application runner logic
//!
//! Loads the glyph, seeds the selection, runs the single palette action
//! the command line asks for and prints the outcome

use anyhow::{bail, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::core::cli::{Action, CliArgs};
use crate::core::config_file::ConfigFile;
use crate::core::state::{FilterState, FontMaster, GlyphLayer};
use crate::data::ufo;
use crate::editing::selection::{
    compose, BooleanOp, Category, Selection, SelectionContext, SelectionDelta,
};
use crate::logging;

/// What one invocation did, printed as JSON
#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    pub glyph: String,
    pub action: String,
    pub selection: Selection,
    pub delta: SelectionDelta,
    pub revision: u64,
    /// Why the selection was left alone, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unchanged: Option<String>,
}

/// Create and run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to the selection session.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    cli_args.validate().map_err(anyhow::Error::msg)?;

    // Logging isn't up yet, so a broken settings file is reported below
    let loaded = ConfigFile::try_load();
    let config = match &loaded {
        Ok(config) => config.clone().unwrap_or_default(),
        Err(_) => ConfigFile::default(),
    };
    let level = cli_args.get_log_level(Some(&config));
    let _guard = logging::init_logging(&level, cli_args.log_file)?;
    if let Err(e) = &loaded {
        warn!("Ignoring settings: {:#}", e);
    }

    let Some(path) = cli_args.font_source.as_ref() else {
        bail!("No font source given");
    };
    let glyph_name = cli_args.glyph.as_deref().unwrap_or_default();
    let (master, mut layer) = ufo::load_editing_session(path, glyph_name, cli_args.layer.as_deref())?;

    let report = execute(&cli_args, &master, &mut layer, &config.filters)?;

    if cli_args.cycle {
        if let Action::Category { category, .. } = cli_args.action().map_err(anyhow::Error::msg)? {
            if let Some(next) = cycle_stored_filter(&ConfigFile::config_path(), category)? {
                info!("{} filter is now '{}'", category.name(), next);
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Advance `category`'s filter in the settings file at `path`
///
/// A settings file that exists but can't be read is left untouched.
pub fn cycle_stored_filter(path: &Path, category: Category) -> Result<Option<&'static str>> {
    let mut config = match ConfigFile::try_load_from(path) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            warn!("Not saving the {} filter: {:#}", category.as_str(), e);
            return Ok(None);
        }
    };
    let next = config.filters.cycle(category);
    config.save_to(path)?;
    Ok(Some(next))
}

/// Seed the selection from `--select` and run the action on `layer`
///
/// A selection action that cannot apply is not an error here: the report
/// carries the reason and the selection is left as seeded.
pub fn execute(
    cli_args: &CliArgs,
    master: &FontMaster,
    layer: &mut GlyphLayer,
    filters: &FilterState,
) -> Result<SelectionReport> {
    let seeds = cli_args.seed_elements().map_err(anyhow::Error::msg)?;
    if let Some(missing) = seeds
        .iter()
        .find(|element| !layer.contains_element(**element, master))
    {
        bail!(
            "Element {} does not exist in glyph '{}'",
            missing,
            layer.glyph_name
        );
    }
    compose::apply(layer, &seeds, BooleanOp::Add);
    debug!("Seeded {} elements", layer.selection().len());

    let action = cli_args.action().map_err(anyhow::Error::msg)?;
    let mut context = SelectionContext::new(layer, master);
    let (label, outcome) = match &action {
        Action::Category {
            category,
            filter,
            op,
        } => {
            let label = format!("{} {}", op.as_str(), category.as_str());
            let outcome = match filter {
                Some(key) => {
                    let mut filters = filters.clone();
                    filters
                        .set(*category, key)
                        .and_then(|_| context.select_category(*category, &filters, *op))
                }
                None => context.select_category(*category, filters, *op),
            };
            (label, outcome)
        }
        Action::Derive(derivation) => (derivation.as_str().to_string(), context.derive(*derivation)),
    };

    let (delta, unchanged) = match outcome {
        Ok(delta) => (delta, None),
        Err(error) => (SelectionDelta::default(), Some(error.to_string())),
    };

    Ok(SelectionReport {
        glyph: layer.glyph_name.clone(),
        action: label,
        selection: layer.selection().clone(),
        delta,
        revision: layer.revision(),
        unchanged,
    })
}

//! Taxon CLI - interactive category tree editor
//!
//! Usage: taxon <COMMAND>
//!
//! Commands:
//!   edit    Edit a taxonomy snapshot in the terminal
//!   tree    Print the category hierarchy
//!   export  Print the snapshot as JSON

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use taxon::config::{Config, LogLevel};
use taxon::domain::ports::TaxonomyRepository;
use taxon::infrastructure::{seed, DialoguerPrompter, JsonTaxonomyRepository, Snapshot};
use taxon::ui::{detect_capabilities, widgets::run_interactive};
use taxon::{logging, Taxonomy, TreeEditor};

/// Taxon - interactive category tree editor
#[derive(Parser, Debug)]
#[command(name = "taxon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/taxon/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Edit a taxonomy snapshot in the terminal
    Edit {
        #[command(flatten)]
        source: Source,

        /// Do not write the snapshot back on quit
        #[arg(long)]
        no_save: bool,
    },

    /// Print the category hierarchy, fully expanded
    Tree {
        #[command(flatten)]
        source: Source,
    },

    /// Print the snapshot as JSON
    Export {
        #[command(flatten)]
        source: Source,
    },
}

#[derive(Args, Debug)]
struct Source {
    /// Snapshot file (JSON)
    file: Option<PathBuf>,

    /// Start from the built-in sample taxonomy instead of FILE's contents
    #[arg(long)]
    seed: bool,
}

impl Source {
    fn load(&self) -> Result<Taxonomy> {
        if self.seed {
            return seed::sample_taxonomy().context("sample taxonomy is invalid");
        }
        let Some(file) = &self.file else {
            bail!("a snapshot FILE is required unless --seed is given");
        };
        JsonTaxonomyRepository::new()
            .load(file)
            .with_context(|| format!("failed to load {}", file.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }
    init_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Edit { source, no_save } => cmd_edit(&config, &source, no_save),
        Commands::Tree { source } => cmd_tree(&config, &source),
        Commands::Export { source } => cmd_export(&source),
    }
}

fn init_logging(config: &Config, verbose: u8) -> Result<()> {
    let level = config.log.level.raised_by(verbose);
    if level == LogLevel::Off {
        return Ok(());
    }
    let Some(dir) = config.log.dir.clone().or_else(logging::default_log_dir) else {
        return Ok(());
    };
    logging::init_logging(level, &dir)?;
    Ok(())
}

fn cmd_edit(config: &Config, source: &Source, no_save: bool) -> Result<()> {
    let caps = detect_capabilities();
    if !caps.is_tty {
        bail!("taxon edit needs an interactive terminal");
    }

    let taxonomy = source.load()?;
    let options = config.ui.render_options(caps.supports_unicode);
    let mut editor = TreeEditor::new(taxonomy).with_options(options);
    let mut prompter = DialoguerPrompter::new();
    run_interactive(&mut editor, &mut prompter, caps, config.ui.mouse)?;

    match (&source.file, no_save) {
        (Some(file), false) => save(editor.taxonomy(), file),
        _ => Ok(()),
    }
}

fn save(taxonomy: &Taxonomy, file: &Path) -> Result<()> {
    JsonTaxonomyRepository::new()
        .save(taxonomy, file)
        .with_context(|| format!("failed to save {}", file.display()))?;
    println!("Saved {}", file.display());
    Ok(())
}

fn cmd_tree(config: &Config, source: &Source) -> Result<()> {
    let taxonomy = source.load()?;
    let caps = detect_capabilities();
    let mut options = config.ui.render_options(caps.supports_unicode);
    options.show_content = false;

    let mut editor = TreeEditor::new(taxonomy).with_options(options);
    editor.expand_all();
    for line in editor.render().lines {
        println!("{}", line.text.trim_end());
    }
    Ok(())
}

fn cmd_export(source: &Source) -> Result<()> {
    let taxonomy = source.load()?;
    println!("{}", Snapshot::capture(&taxonomy).to_json()?);
    Ok(())
}

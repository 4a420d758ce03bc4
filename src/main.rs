//! mdpad - A terminal editor for a single markdown document.
//!
//! # Usage
//!
//! ```bash
//! mdpad notes.md
//! mdpad --dir ~/notes
//! mdpad --width 60 --height 16 --save
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdpad::app::App;
use mdpad::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use mdpad::picker::{DEFAULT_EXTENSION, FilePicker, discover_documents};
use mdpad::ui::{DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH};

/// A terminal editor for a single markdown document
#[derive(Parser, Debug)]
#[command(name = "mdpad", version, about, long_about = None)]
struct Cli {
    /// Document to edit; without it a picker lists the documents in --dir
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Directory searched by the picker
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Extension of documents offered by the picker
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Width of the document frame in columns
    #[arg(long, value_name = "N")]
    width: Option<u16>,

    /// Height of the document frame in rows
    #[arg(long, value_name = "N")]
    height: Option<u16>,

    /// Hide the line-number gutter
    #[arg(long)]
    no_line_numbers: bool,

    /// Write log output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            no_line_numbers: self.no_line_numbers,
            width: self.width,
            height: self.height,
            extension: self
                .extension
                .as_deref()
                .map(|ext| ext.trim_start_matches('.').to_string()),
            dir: self.dir.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn resolve_flags(cli: &Cli) -> Result<ConfigFlags> {
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    Ok(file_flags.union(&cli_flags))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let effective = resolve_flags(&cli)?;

    init_tracing(effective.log_file.as_deref())?;

    let file = match cli.file {
        Some(file) => file,
        None => {
            let dir = effective.dir.clone().unwrap_or_else(|| PathBuf::from("."));
            let extension = effective.extension.as_deref().unwrap_or(DEFAULT_EXTENSION);
            let documents = discover_documents(&dir, extension)?;
            if documents.is_empty() {
                println!("No markdown files found.");
                return Ok(());
            }
            let mut picker = FilePicker::new(documents);
            match App::pick_document(&mut picker)? {
                Some(path) => path,
                None => return Ok(()),
            }
        }
    };

    let mut app = App::new(file)
        .with_frame_size(
            effective.width.unwrap_or(DEFAULT_FRAME_WIDTH),
            effective.height.unwrap_or(DEFAULT_FRAME_HEIGHT),
        )
        .with_line_numbers(!effective.no_line_numbers);

    let summary = app.run().context("Application error")?;
    tracing::info!(
        path = %summary.file_path.display(),
        exit = ?summary.exit,
        modified = summary.modified,
        "session finished"
    );

    if let Some(err) = summary.save_error {
        let path = err.path().to_path_buf();
        return Err(err).with_context(|| format!("Changes to {} were not saved", path.display()));
    }
    Ok(())
}

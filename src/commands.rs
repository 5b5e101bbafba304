use std::io::Write;
use std::path::{Path, PathBuf};

use minic::{Renderer, Session};
use minic_config::Config;
use minic_core::Stage;

use crate::error::{CliError, Result};

#[derive(Debug)]
pub struct CheckOptions {
    pub files: Vec<PathBuf>,
    pub last_stage: Stage,
    pub config: Option<PathBuf>,
    pub show_locations: bool,
}

pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => minic_config::load_config_file(path)?,
        None => minic_config::load_config(Some("."))?,
    };
    Ok(config)
}

/// Analyses every file in its own session. Returns `false` when any stage reported diagnostics.
pub fn check(options: &CheckOptions, config: &Config, out: &mut impl Write) -> Result<bool> {
    let show_locations = options.show_locations || config.show_locations;
    let mut all_passed = true;

    for path in &options.files {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "analysing file");

        let mut session = Session::new(config.declaration_mode);
        session.load(source.as_str());
        let renderer = Renderer::new(&source, show_locations);

        for report in session.run_through(options.last_stage)? {
            writeln!(out, "== {}: {} ==", path.display(), report.stage)?;
            writeln!(out, "{}", renderer.render(report))?;
            all_passed &= report.result.is_pass();
        }
    }

    Ok(all_passed)
}

pub fn init(path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let config_path = minic_config::write_default_config(path.unwrap_or(Path::new(".")))?;
    writeln!(out, "Created {}", config_path.display())?;
    Ok(())
}

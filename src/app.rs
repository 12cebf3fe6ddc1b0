//! Application entry point: load settings, build the tables, assemble the
//! glyph plan and write it out.

use anyhow::{Context, Result};
use emoji2text_config::Config;
use emoji2text_fonts::{FontPlan, SourceFont, build_font};
use emoji2text_registry::EmojiTables;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{RunMode, RuntimeOptions};

/// Usage line printed when the source font is missing.
const USAGE: &str = "Usage: emoji2text [SOURCE_FONT]";

pub struct App {
    config: Config,
    mode: RunMode,
}

impl App {
    /// Load the config file (if any) and apply the command-line overrides.
    pub fn new(options: RuntimeOptions) -> Result<Self> {
        let mut config = Config::load(options.config.as_deref()).context("Failed to load config")?;
        crate::debug::apply_config_level(config.log_level);

        if let Some(path) = options.registry {
            config = config.with_emoji_test_file(path);
        }
        if let Some(path) = options.source_font {
            config = config.with_source_font(path);
        }
        if let Some(dir) = options.output_dir {
            config = config.with_output_dir(dir);
        }
        log::debug!("Effective config: {config:?}");

        Ok(Self {
            config,
            mode: options.mode,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run to completion and return the process exit code.
    pub fn run(&self) -> Result<i32> {
        match self.mode {
            RunMode::Tables => {
                let tables = self.build_tables()?;
                let json = serde_json::to_string_pretty(&tables)
                    .context("Failed to serialize emoji tables")?;
                println!("{json}");
                Ok(0)
            }
            RunMode::Build => self.generate(),
        }
    }

    fn build_tables(&self) -> Result<EmojiTables> {
        let path = &self.config.emoji_test_file;
        EmojiTables::build(path)
            .with_context(|| format!("Failed to build emoji tables from {}", path.display()))
    }

    fn generate(&self) -> Result<i32> {
        let source_path = &self.config.source_font;
        if !source_path.exists() {
            eprintln!("Error: Source font not found at {}", source_path.display());
            eprintln!("{USAGE}");
            return Ok(1);
        }

        let tables = self.build_tables()?;
        let source = SourceFont::open(source_path)?;

        println!("Copying necessary glyphs...");
        let (plan, stats) = build_font(&source, &tables, &self.config.font)?;
        println!("Created {} emoji glyphs", stats.emoji);
        println!("Created {} compositions", stats.compositions);

        let path = self.config.output_path("plan.json");
        let size = write_plan(&plan, &path)?;
        println!("Generated glyph plan {}: {}KB", path.display(), size / 1024);
        Ok(0)
    }
}

/// Write `plan` as pretty JSON to `path`, returning the file size in bytes.
///
/// The file is written next to its destination and renamed into place, so a
/// crash never leaves a truncated plan behind.
pub fn write_plan(plan: &FontPlan, path: &Path) -> Result<u64> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_vec_pretty(plan).context("Failed to serialize glyph plan")?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);
    fs::write(&temp_path, &json)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to move plan into place at {}", path.display()));
    }

    log::info!("Wrote {} glyphs to {}", plan.len(), path.display());
    Ok(json.len() as u64)
}

//! Initialize a new Neuropath project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE, DATA_DIR};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing Neuropath project...", "→".blue());

    let data_dir = base_path.join(DATA_DIR);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    println!("  {} Created {}", "✓".green(), data_dir.display());

    let config_path = base_path.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    let gitignore_path = data_dir.join(".gitignore");
    if !gitignore_path.exists() {
        std::fs::write(&gitignore_path, "state.json\n")?;
        println!("  {} Created {}", "✓".green(), gitignore_path.display());
    }

    println!();
    println!("{} Neuropath project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} neuropath node add emotion \"anxious\"", "1.".blue());
    println!("  {} neuropath connect 0 1 --strength 0.5 --weight 0.8", "2.".blue());
    println!("  {} neuropath pathway create \"my pattern\" 0 1", "3.".blue());
    println!("  {} neuropath assess", "4.".blue());

    Ok(())
}

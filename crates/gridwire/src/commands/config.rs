use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();

    let yaml = serde_yaml::to_string(&config)?;
    if yaml.trim() == "{}" {
        println!("{}", "No settings configured. Defaults apply:".dimmed());
        println!("  defaults.theme     light");
        println!("  defaults.windowed  false");
    } else {
        print!("{yaml}");
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green(),
        path.display().to_string().dimmed()
    );
    Ok(())
}

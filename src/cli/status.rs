//! Status command implementation

use colored::Colorize;

use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}\n", "ghorg Configuration Status".bold());

    let path = Config::resolve_path(config_path)?;
    println!("Config file: {}", path.display().to_string().cyan());
    if !path.exists() {
        println!("  {} file does not exist yet; defaults apply", "○".dimmed());
    }

    let config = Config::load_at(config_path)?;

    if let Some(ref org) = config.default_org {
        println!("{} Default organization: {}", "✓".green(), org);
    } else {
        println!("{} No default organization set", "○".dimmed());
        println!("  → Add `default_org` to the config file to set one");
    }

    if let Some(ref host) = config.api_host {
        println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
    }

    if let Some(ref format) = config.preferences.format {
        println!("{} Preferred format: {}", "○".dimmed(), format);
    }

    println!();

    Ok(())
}

//! Organization command implementation

use colored::Colorize;
use log::debug;

use crate::cli::OutputFormat;
use crate::client::{GithubClient, GithubOrgClient, access_nested};
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::output::json;

/// Run the org command: show metadata, or a single raw field
pub async fn get(
    format: Option<OutputFormat>,
    login: Option<&str>,
    field: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let config = Config::load_at(config_path)?;
    let format = crate::cli::resolve_format(format, &config);

    let login = login
        .map(str::to_owned)
        .or_else(|| config.default_org.clone())
        .ok_or(ConfigError::MissingOrg)?;

    let api = GithubClient::new(config.api_host.as_deref())?;
    let client = GithubOrgClient::new(api, login);

    debug!("Fetching organization {}", client.login());
    let org = client.org().await?;

    if let Some(path) = field {
        let value = serde_json::to_value(org)?;
        let parts: Vec<&str> = path.split('.').collect();
        let field_value = access_nested(&value, &parts)?;

        // Bare strings print unquoted; everything else as JSON
        match field_value {
            serde_json::Value::String(s) => println!("{}", s),
            other => println!("{}", other),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Table => {
            println!("{}", org.login.bold());
            println!();
            println!("  ID:        {}", org.id);
            if let Some(ref name) = org.name {
                println!("  Name:      {}", name);
            }
            if let Some(ref description) = org.description {
                println!("  About:     {}", description);
            }
            if let Some(count) = org.public_repos {
                println!("  Repos:     {}", count);
            }
            println!("  Repos URL: {}", org.repos_url);
        }
        OutputFormat::Json => {
            let output = json::format_json(org)?;
            println!("{}", output);
        }
    }

    Ok(())
}

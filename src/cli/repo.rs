//! Repository listing command implementation

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::{GithubClient, GithubOrgClient, fetch_ordered};
use crate::config::Config;
use crate::error::Result;
use crate::output::{json, table};

/// Maximum concurrent organization fetches
const MAX_CONCURRENT_FETCHES: usize = 8;

/// Repository names for one organization, for JSON output
#[derive(Debug, Serialize)]
struct OrgRepos {
    org: String,
    repos: Vec<String>,
}

/// Repository row for table display
#[derive(Tabled)]
struct RepoRow {
    #[tabled(rename = "ORG")]
    org: String,
    #[tabled(rename = "REPOSITORY")]
    repo: String,
}

/// Run the repos command across one or more organizations
pub async fn list(
    format: Option<OutputFormat>,
    logins: Vec<String>,
    license: Option<String>,
    config_path: Option<&str>,
) -> Result<()> {
    let config = Config::load_at(config_path)?;
    let format = crate::cli::resolve_format(format, &config);

    let api = GithubClient::new(config.api_host.as_deref())?;

    debug!("Listing repositories for {} organization(s)", logins.len());

    let results: Vec<OrgRepos> = fetch_ordered(
        logins,
        move |login| {
            let api = api.clone();
            let license = license.clone();
            async move {
                let client = GithubOrgClient::new(api, login);
                let repos = client.public_repos(license.as_deref()).await?;
                debug!("{}: {} repositories", client.login(), repos.len());
                Ok(OrgRepos {
                    org: client.login().to_string(),
                    repos,
                })
            }
        },
        MAX_CONCURRENT_FETCHES,
    )
    .await?;

    match format {
        OutputFormat::Table => {
            let rows: Vec<RepoRow> = results
                .iter()
                .flat_map(|entry| {
                    entry.repos.iter().map(|name| RepoRow {
                        org: entry.org.clone(),
                        repo: name.clone(),
                    })
                })
                .collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&results)?);
        }
    }

    Ok(())
}

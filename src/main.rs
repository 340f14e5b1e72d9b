use anyhow::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::{CommandFactory, Parser};

use repoctl::args::Args;
use repoctl::batch::{Batch, Target};
use repoctl::client::Client;
use repoctl::error::Error;
use repoctl::models::repository::RepositoryConfig;

const API: &str = "https://api.github.com";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let Some(token) = args.token else {
        Args::command().print_help()?;
        return Ok(());
    };

    let targets = args
        .repos
        .iter()
        .map(|t| t.parse::<Target>())
        .collect::<Result<Vec<_>, _>>()?;

    if targets.is_empty() {
        return Err(Error::Input("no repos specified".to_string()).into());
    }

    let auth = STANDARD.encode(format!(":{token}"));

    let defaults = RepositoryConfig {
        license_template: "apache-2.0".to_string(),
        has_issues: true,
        description: args.description.unwrap_or_default(),
        ..Default::default()
    };

    let batch = Batch {
        client: Client::new(API, auth),
        create: args.create,
        sync_org: args.org,
        defaults,
        add_users: args.add,
        remove_users: args.remove,
        targets,
    };

    batch.run().await
}

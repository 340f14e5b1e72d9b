//! Named remote operations, each a fixed verb and URL template over the
//! client. No retries; each fails exactly when `require_success` fails.

use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::models::repository::RepositoryConfig;

pub async fn create_repository(
    client: &Client,
    org: &str,
    config: &RepositoryConfig,
) -> Result<()> {
    let body = serde_json::to_string(config)?;
    client
        .require_success(Method::POST, &format!("/orgs/{org}/repos"), Some(body))
        .await
}

pub async fn edit_repository(
    client: &Client,
    org: &str,
    name: &str,
    config: &RepositoryConfig,
) -> Result<()> {
    let body = serde_json::to_string(config)?;
    client
        .require_success(Method::PATCH, &format!("/repos/{org}/{name}"), Some(body))
        .await
}

pub async fn add_collaborator(client: &Client, org: &str, repo: &str, user: &str) -> Result<()> {
    let body = r#"{"permission":"admin"}"#.to_string();
    client
        .require_success(
            Method::PUT,
            &format!("/repos/{org}/{repo}/collaborators/{user}"),
            Some(body),
        )
        .await
}

pub async fn remove_collaborator(client: &Client, org: &str, repo: &str, user: &str) -> Result<()> {
    client
        .require_success(
            Method::DELETE,
            &format!("/repos/{org}/{repo}/collaborators/{user}"),
            None,
        )
        .await
}

pub async fn add_member(client: &Client, org: &str, user: &str) -> Result<()> {
    let body = r#"{"role":"member"}"#.to_string();
    client
        .require_success(
            Method::PUT,
            &format!("/orgs/{org}/memberships/{user}"),
            Some(body),
        )
        .await
}

pub async fn remove_member(client: &Client, org: &str, user: &str) -> Result<()> {
    client
        .require_success(
            Method::DELETE,
            &format!("/orgs/{org}/memberships/{user}"),
            None,
        )
        .await
}

/// Existence probe: success means the resource exists, any failure means
/// absent or inaccessible. The two cases are not distinguished.
pub async fn probe_exists(client: &Client, path: &str) -> Result<()> {
    client.require_success(Method::GET, path, None).await
}

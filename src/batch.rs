use std::str::FromStr;

use anyhow::{Context, Result};

use crate::client::Client;
use crate::error::Error;
use crate::models::repository::RepositoryConfig;
use crate::ops;

/// An (organization, repository) pair parsed from an `ORG/REPO` token.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub org: String,
    pub repo: String,
}

impl Target {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [org, repo] if !org.is_empty() && !repo.is_empty() => Ok(Self {
                org: (*org).to_string(),
                repo: (*repo).to_string(),
            }),
            _ => Err(Error::Input(format!(
                "repos must be in format ORG/REPO, got {s:?}"
            ))),
        }
    }
}

/// Applies the selected operations across every target in input order,
/// halting on the first failure. No rollback of prior successes.
pub struct Batch {
    pub client: Client,
    pub create: bool,
    pub sync_org: bool,
    pub defaults: RepositoryConfig,
    pub add_users: Vec<String>,
    pub remove_users: Vec<String>,
    pub targets: Vec<Target>,
}

impl Batch {
    pub async fn run(&self) -> Result<()> {
        self.validate_users().await?;

        for target in &self.targets {
            self.provision(target).await?;
            self.add_collaborators(target).await?;
            self.remove_collaborators(target).await?;
        }

        Ok(())
    }

    /// Resolves every add- and remove-list user before any repository is
    /// touched; one unknown user aborts the whole run.
    async fn validate_users(&self) -> Result<()> {
        for user in self.add_users.iter().chain(&self.remove_users) {
            ops::probe_exists(&self.client, &format!("/users/{user}"))
                .await
                .map_err(|e| Error::Validation {
                    user: user.clone(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }

    async fn provision(&self, target: &Target) -> Result<()> {
        let config = self.defaults.named(&target.repo);
        let name = target.full_name();

        if self.create {
            ops::create_repository(&self.client, &target.org, &config)
                .await
                .with_context(|| format!("failed to create repo {name:?}"))?;
            println!("{name:?} created");
        } else {
            ops::edit_repository(&self.client, &target.org, &target.repo, &config)
                .await
                .with_context(|| format!("failed to edit repo {name:?}"))?;
            println!("{name:?} edited");
        }

        Ok(())
    }

    async fn add_collaborators(&self, target: &Target) -> Result<()> {
        let name = target.full_name();

        for user in &self.add_users {
            ops::add_collaborator(&self.client, &target.org, &target.repo, user)
                .await
                .with_context(|| format!("failed to add user {user:?} to {name:?}"))?;
            println!("- added {user:?} to {name:?}");

            if self.sync_org {
                self.sync_membership(target, user).await?;
            }
        }

        Ok(())
    }

    async fn sync_membership(&self, target: &Target, user: &str) -> Result<()> {
        let org = &target.org;
        let probe = format!("/orgs/{org}/members/{user}");

        if ops::probe_exists(&self.client, &probe).await.is_ok() {
            println!("- {user:?} is already a member of {org:?}");
        } else {
            ops::add_member(&self.client, org, user)
                .await
                .with_context(|| format!("failed to add member {user:?} to org {org:?}"))?;
            println!("- added {user:?} to {org:?}");
        }

        Ok(())
    }

    async fn remove_collaborators(&self, target: &Target) -> Result<()> {
        let name = target.full_name();

        for user in &self.remove_users {
            ops::remove_collaborator(&self.client, &target.org, &target.repo, user)
                .await
                .with_context(|| format!("failed to remove user {user:?} from {name:?}"))?;
            println!("- removed {user:?} from {name:?}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_parses_org_repo() {
        let target: Target = "myorg/myrepo".parse().unwrap();
        assert_eq!(target.org, "myorg");
        assert_eq!(target.repo, "myrepo");
        assert_eq!(target.full_name(), "myorg/myrepo");
    }

    #[test]
    fn target_rejects_missing_slash() {
        assert!("orgname".parse::<Target>().is_err());
    }

    #[test]
    fn target_rejects_extra_segments() {
        assert!("a/b/c".parse::<Target>().is_err());
    }

    #[test]
    fn target_rejects_empty_segments() {
        assert!("/repo".parse::<Target>().is_err());
        assert!("org/".parse::<Target>().is_err());
        assert!("/".parse::<Target>().is_err());
    }

    #[test]
    fn target_parse_error_is_input_kind() {
        match "a/b/c".parse::<Target>() {
            Err(Error::Input(msg)) => assert!(msg.contains("ORG/REPO")),
            other => panic!("expected input error, got {other:?}"),
        }
    }
}

use serde::Serialize;

fn is_false(v: &bool) -> bool {
    !*v
}

fn is_zero(v: &u64) -> bool {
    *v == 0
}

/// Remote-facing repository description. Every field except `archived` is
/// omitted from the wire payload when it equals its zero value, so edit
/// calls only apply explicit changes without clobbering remote fields.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct RepositoryConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub homepage: String,

    #[serde(skip_serializing_if = "is_false")]
    pub private: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub has_issues: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub has_projects: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub has_wiki: bool,

    #[serde(skip_serializing_if = "is_zero")]
    pub team_id: u64,

    #[serde(skip_serializing_if = "is_false")]
    pub auto_init: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub gitignore_template: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_template: String,

    #[serde(skip_serializing_if = "is_false")]
    pub allow_squash_merge: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub allow_merge_commit: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub allow_rebase_merge: bool,

    // Always serialized, even when false.
    pub archived: bool,
}

impl RepositoryConfig {
    /// Per-target config: the shared defaults with the target's repository
    /// name, built fresh so no state leaks between targets.
    pub fn named(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "repoctl", about = "Batch-provision GitHub organization repositories")]
pub struct Args {
    /// user API token (required)
    #[arg(short = 't')]
    pub token: Option<String>,

    /// create repositories instead of editing them
    #[arg(short = 'c')]
    pub create: bool,

    /// also add new collaborators to the organization
    #[arg(short = 'o')]
    pub org: bool,

    /// admin collaborators to add
    #[arg(short = 'a', value_delimiter = ',')]
    pub add: Vec<String>,

    /// admin collaborators to remove
    #[arg(short = 'r', value_delimiter = ',')]
    pub remove: Vec<String>,

    /// repository description
    #[arg(short = 'd')]
    pub description: Option<String>,

    /// repositories in ORG/REPO format
    pub repos: Vec<String>,
}

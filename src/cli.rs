use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::client::DEFAULT_LIMIT;

#[derive(Parser)]
#[command(name = "redmine")]
#[command(about = "A read-only viewer for your assigned Redmine issues", version)]
#[command(after_help = "EXAMPLES:
    redmine issues                        List your open assigned issues
    redmine issues --status New           Only issues with status New
    redmine issues --status New --priority High
    redmine filters                       Show the statuses/priorities present
    redmine issue view 1234               Show issue details
    redmine issue open 1234               Open the issue in a browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Show full error chains on failure
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect issues
    #[command(after_help = "EXAMPLES:
    redmine issue list --status \"In Progress\"
    redmine issue view 1234
    redmine issue open 1234")]
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
    /// List your assigned issues (alias for 'issue list')
    #[command(after_help = "EXAMPLES:
    redmine issues
    redmine issues --status New --status \"In Progress\"
    redmine issues --priority High --json")]
    Issues(IssueListArgs),
    /// Show the distinct statuses and priorities among your issues
    #[command(after_help = "EXAMPLES:
    redmine filters
    redmine filters --json")]
    Filters {
        /// Maximum number of issues to inspect
        #[arg(long, short, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    redmine completions bash > ~/.bash_completion.d/redmine
    redmine completions zsh > ~/.zfunc/_redmine
    redmine completions fish > ~/.config/fish/completions/redmine.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    redmine init")]
    Init,
}

#[derive(Subcommand)]
pub enum IssueCommands {
    /// List your assigned issues
    #[command(after_help = "EXAMPLES:
    redmine issue list
    redmine issue list --status New --priority High")]
    List(IssueListArgs),
    /// Show issue details
    #[command(after_help = "EXAMPLES:
    redmine issue view 1234")]
    View {
        /// Issue id
        id: u64,
    },
    /// Open an issue's web page in the browser
    #[command(after_help = "EXAMPLES:
    redmine issue open 1234")]
    Open {
        /// Issue id
        id: u64,
    },
}

#[derive(Args, Clone)]
pub struct IssueListArgs {
    /// Only show issues with this status (repeatable; any match passes)
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,

    /// Only show issues with this priority (repeatable; any match passes)
    #[arg(long = "priority", value_name = "PRIORITY")]
    pub priorities: Vec<String>,

    /// Maximum number of issues to fetch
    #[arg(long, short, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

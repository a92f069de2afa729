use std::path::PathBuf;

use clap::Parser;

/// Display name of the command, shown as the one-line help.
pub const COMMAND_NAME: &str = "View remote";

/// Stable identifier for launchers and editor integrations that register the command.
pub const COMMAND_ID: &str = "view-remote-repo";

#[derive(Parser, Debug)]
#[command(name = "repolink")]
#[command(about = COMMAND_NAME, long_about = None)]
#[command(
    after_help = "Prints the hosting-provider web URL of the git repository containing PATH.\n\
                  SSH remotes (git@host:owner/repo.git) are rewritten to https://host/owner/repo;\n\
                  HTTPS remotes lose their .git suffix; other remote shapes are printed unchanged."
)]
#[command(version)]
pub struct Cli {
    /// File or directory inside the repository (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Remote to resolve (defaults to the `remote` config value, then `origin`)
    #[arg(short, long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Also open the URL in a browser
    #[arg(short, long)]
    pub open: bool,

    /// User config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show debug logs (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitlocalstats")]
#[command(about = "Contribution graph of your commits across local git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(
        long,
        global = true,
        env = "GITLOCALSTATS_REPOS",
        help = "Path to the repository list (defaults to ~/.gitlocalstats)"
    )]
    pub repos_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find git repositories under a folder and add them to the list
    Scan {
        #[arg(help = "Folder to scan recursively")]
        folder: PathBuf,
    },
    /// Show the last six months of commits by one author
    Stats {
        #[arg(long, help = "Author email to count commits for")]
        email: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.common.verbose);

        match self.command {
            Commands::Scan { folder } => crate::scan::exec(self.common, folder),
            Commands::Stats { email, json } => crate::heat::exec(self.common, email, json),
        }
    }
}

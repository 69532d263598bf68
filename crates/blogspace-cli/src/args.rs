use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blogspace")]
#[command(about = "Terminal client for the BlogSpace blogging service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the config file and the session token
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the post list to stdout without entering the TUI
    Posts,

    /// Clear the stored session token
    Logout,

    /// Print the resolved configuration
    Config,
}

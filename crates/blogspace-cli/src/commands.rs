use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use anyhow::Result;
use blogspace_app::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.api_url);

    match cli.command {
        None => handlers::tui::handle(&ctx),
        Some(Commands::Posts) => handlers::posts::handle(&ctx),
        Some(Commands::Logout) => handlers::logout::handle(&ctx),
        Some(Commands::Config) => handlers::config::handle(&ctx),
    }
}

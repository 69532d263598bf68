use crate::context::ExecutionContext;
use anyhow::Result;
use blogspace_app::TokenStore;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let store = ctx.token_store();

    if store.load()?.is_none() {
        println!("No active session.");
        return Ok(());
    }

    store.clear()?;
    println!("Logged out.");
    Ok(())
}

use crate::context::ExecutionContext;
use anyhow::Result;
use blogspace_app::TokenStore;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    let has_session = ctx.token_store().load()?.is_some();

    println!("data dir:          {}", ctx.data_dir().display());
    println!("api base url:      {}", ctx.api_base_url()?);
    println!("clear stale token: {}", config.clear_stale_token);
    println!("session token:     {}", if has_session { "stored" } else { "none" });
    Ok(())
}

use crate::context::ExecutionContext;
use crate::views::posts::print_posts;
use anyhow::Result;
use blogspace_client::BlogApi;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let api = ctx.api()?;
    let posts = api.list_posts()?;
    print_posts(&posts)?;
    Ok(())
}

use crate::context::ExecutionContext;
use anyhow::Result;
use blogspace_app::Controller;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let api = ctx.api()?;
    let store = ctx.token_store();
    let clear_stale_token = ctx.config()?.clear_stale_token;

    let mut controller = Controller::new(api, store, clear_stale_token);
    controller.startup();

    crate::ui::run(&mut controller)
}

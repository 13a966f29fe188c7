//! Reset command implementation

use anyhow::Result;

use super::AppContext;

/// Delete the acting user's record, or the whole state with `--all`
pub fn reset_command(ctx: &mut AppContext, all: bool) -> Result<()> {
    if all {
        ctx.engine.reset_all();
        println!("All gamification state reset.");
    } else if ctx.engine.reset_user(&ctx.user_id) {
        println!("Reset record for {}.", ctx.user_id);
    } else {
        println!("No record for {} to reset.", ctx.user_id);
    }
    Ok(())
}

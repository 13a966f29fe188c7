//! Streak command implementation

use anyhow::Result;

use super::AppContext;

pub fn streak_command(ctx: &mut AppContext, record: bool) -> Result<()> {
    if record {
        ctx.engine.record_streak(&ctx.user_id)?;
    }
    let summary = ctx.engine.user_summary(&ctx.user_id);
    match summary.streak.last_active_date {
        Some(last) => println!(
            "🔥 {} day streak (last active {last})",
            summary.streak.count
        ),
        None => println!("No streak yet - complete a lesson or play a game to start one."),
    }
    Ok(())
}

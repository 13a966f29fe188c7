//! Login / logout commands

use anyhow::Result;

use brainiac::session::Session;

use super::AppContext;

/// Log in as a user: persist the session, seed the record if it is new,
/// and count today's activity toward the streak.
pub fn login_command(ctx: &mut AppContext, user_id: &str) -> Result<()> {
    let session = Session {
        user_id: Some(user_id.to_string()),
    };
    session.save(&Session::path(&ctx.data_dir))?;

    ctx.user_id = user_id.to_string();
    ctx.engine.record_streak(user_id)?;

    let summary = ctx.engine.user_summary(user_id);
    println!(
        "Welcome, {}! Level {} with {} XP.",
        user_id, summary.level, summary.xp
    );
    Ok(())
}

pub fn logout_command(ctx: &AppContext) -> Result<()> {
    Session::default().save(&Session::path(&ctx.data_dir))?;
    println!("Logged out. Acting as guest from now on.");
    Ok(())
}

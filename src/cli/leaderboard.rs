//! Leaderboard command implementation

use anyhow::Result;

use super::AppContext;

pub fn leaderboard_command(ctx: &mut AppContext) -> Result<()> {
    let board = ctx.engine.leaderboard();
    if board.is_empty() {
        println!("Leaderboard is empty - nobody has earned XP yet.");
        return Ok(());
    }

    println!("Leaderboard:\n");
    for (rank, entry) in board.iter().enumerate() {
        let marker = match rank {
            0 => "🥇",
            1 => "🥈",
            2 => "🥉",
            _ => "  ",
        };
        println!("  {} #{} {} - {} XP", marker, rank + 1, entry.user_id, entry.xp);
    }
    Ok(())
}

//! Games hub commands

use anyhow::Result;
use clap::Subcommand;

use brainiac::catalog::GAMES;

use super::AppContext;

#[derive(Subcommand)]
pub enum GameAction {
    /// List the games hub with lock state for this user
    List,

    /// Record a finished game round
    Record {
        game_id: String,

        #[arg(long)]
        score: u64,
    },
}

pub fn game_command(ctx: &mut AppContext, action: GameAction) -> Result<()> {
    match action {
        GameAction::List => {
            println!("Games ({}):\n", GAMES.len());
            for game in GAMES {
                let unlocked = ctx.engine.game_unlocked(&ctx.user_id, game.id)?;
                println!(
                    "  {} {} [{}]",
                    if unlocked { "🎮" } else { "🔒" },
                    game.title,
                    game.id
                );
                println!("    {}", game.description);
                if !unlocked {
                    println!("    unlocks with lesson: {}", game.gate);
                }
            }
            Ok(())
        }
        GameAction::Record { game_id, score } => {
            ctx.engine.record_streak(&ctx.user_id)?;
            ctx.engine.record_game(&ctx.user_id, &game_id, score)?;
            Ok(())
        }
    }
}

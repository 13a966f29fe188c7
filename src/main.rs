use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "brainiac")]
#[command(about = "Brainiac - gamification engine for the Brainiac learning platform")]
#[command(version)]
struct Cli {
    /// Directory holding the state blob and session file
    /// (defaults to ~/.brainiac)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.brainiac/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Act as this user instead of the logged-in session user
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the learner dashboard: XP, level, streak, badges, path
    Summary,

    /// Lesson catalog and progression
    Lesson {
        #[command(subcommand)]
        action: cli::lesson::LessonAction,
    },

    /// Take a lesson quiz; run without --answers to see the questions
    Quiz {
        lesson_id: String,

        /// Comma-separated 0-based answer indices, one per question
        #[arg(long, value_delimiter = ',')]
        answers: Vec<usize>,
    },

    /// Mini games hub
    Game {
        #[command(subcommand)]
        action: cli::game::GameAction,
    },

    /// Show the daily streak (extend it with --record)
    Streak {
        /// Count today as an active day
        #[arg(long)]
        record: bool,
    },

    /// Show the top-10 leaderboard
    Leaderboard,

    /// Teacher tools over the whole class
    Class {
        #[command(subcommand)]
        action: cli::class::ClassAction,
    },

    /// Queue a lesson assignment for a group of learners
    Assign {
        lesson_id: String,

        #[arg(long, default_value = "all")]
        group: String,
    },

    /// Log in as a user (also records today's activity)
    Login { user_id: String },

    /// Log out the current session
    Logout,

    /// Delete the acting user's record, or everything with --all
    Reset {
        #[arg(long)]
        all: bool,
    },

    /// Write a starter ~/.brainiac/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if let Some(Commands::Init { force }) = &cli.command {
        return cli::init::init_command(cli.config, *force);
    }

    let mut ctx = cli::open(cli.config, cli.data_dir, cli.user)?;

    match cli.command {
        Some(Commands::Summary) | None => cli::summary::summary_command(&mut ctx)?,
        Some(Commands::Lesson { action }) => cli::lesson::lesson_command(&mut ctx, action)?,
        Some(Commands::Quiz { lesson_id, answers }) => {
            cli::quiz::quiz_command(&mut ctx, &lesson_id, &answers)?
        }
        Some(Commands::Game { action }) => cli::game::game_command(&mut ctx, action)?,
        Some(Commands::Streak { record }) => cli::streak::streak_command(&mut ctx, record)?,
        Some(Commands::Leaderboard) => cli::leaderboard::leaderboard_command(&mut ctx)?,
        Some(Commands::Class { action }) => cli::class::class_command(&mut ctx, action)?,
        Some(Commands::Assign { lesson_id, group }) => {
            cli::class::assign_command(&mut ctx, &lesson_id, &group)?
        }
        Some(Commands::Login { user_id }) => cli::session::login_command(&mut ctx, &user_id)?,
        Some(Commands::Logout) => cli::session::logout_command(&ctx)?,
        Some(Commands::Reset { all }) => cli::reset::reset_command(&mut ctx, all)?,
        Some(Commands::Init { .. }) => unreachable!("handled above"),
    }

    Ok(())
}

//! CLI command implementations

pub mod class;
pub mod game;
pub mod init;
pub mod leaderboard;
pub mod lesson;
pub mod quiz;
pub mod reset;
pub mod session;
pub mod streak;
pub mod summary;

use std::path::PathBuf;

use anyhow::Result;

use brainiac::catalog::badge_meta;
use brainiac::config::Config;
use brainiac::engine::Engine;
use brainiac::session::{GUEST_USER, Session};
use brainiac::store::JsonFileStore;
use brainiac::{EventSink, GamificationEvent, LessonStatus};

/// Everything a command needs: the engine, the acting user and the
/// resolved locations.
pub struct AppContext {
    pub engine: Engine,
    pub config: Config,
    pub data_dir: PathBuf,
    pub user_id: String,
}

/// Resolve config, data directory and acting user, and open the engine.
///
/// The acting user is, in order: `--user`, the login session, the
/// config's default user, guest.
pub fn open(
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    user: Option<String>,
) -> Result<AppContext> {
    let config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    let data_dir = data_dir.unwrap_or_else(|| config.data_dir());

    let mut engine = Engine::new(Box::new(JsonFileStore::in_dir(&data_dir)));
    engine.subscribe(Box::new(Notifier));

    let session = Session::load(&Session::path(&data_dir));
    let user_id = user
        .or(session.user_id)
        .or_else(|| config.default_user.clone())
        .unwrap_or_else(|| GUEST_USER.to_string());

    Ok(AppContext {
        engine,
        config,
        data_dir,
        user_id,
    })
}

/// Prints engine notifications as they happen, the CLI's stand-in for the
/// portal's toast popups.
struct Notifier;

impl EventSink for Notifier {
    fn on_event(&mut self, event: &GamificationEvent) {
        match event {
            GamificationEvent::XpChanged {
                amount, new_total, reason, ..
            } => {
                println!("  ✨ +{amount} XP ({reason}) - total {new_total}");
            }
            GamificationEvent::BadgeAwarded { badge, .. } => {
                let meta = badge_meta(&badge.kind);
                println!("  {} Badge earned: {}", meta.icon, badge.name);
            }
            GamificationEvent::StreakChanged { count, .. } => {
                println!("  🔥 Streak: {count} day(s)");
            }
            GamificationEvent::LessonCompleted {
                lesson_id,
                score,
                total_possible,
                ..
            } => {
                println!("  ✅ Lesson {lesson_id} completed: {score}/{total_possible}");
            }
            GamificationEvent::GameRecorded { game_id, score, .. } => {
                println!("  🎮 {game_id}: scored {score}");
            }
            GamificationEvent::LessonCreated { lesson_id } => {
                println!("  📘 Lesson created: {lesson_id}");
            }
        }
    }
}

/// Marker shown next to a lesson on the learning path
pub(crate) fn status_icon(status: LessonStatus) -> &'static str {
    match status {
        LessonStatus::Completed => "✅",
        LessonStatus::Unlocked => "▶️",
        LessonStatus::Locked => "🔒",
    }
}

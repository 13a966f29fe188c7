//! Summary command implementation

use anyhow::Result;

use brainiac::catalog::badge_meta;
use brainiac::engine::leveling;

use super::{AppContext, status_icon};

/// Show the learner dashboard: XP, level, streak, badges and the path
pub fn summary_command(ctx: &mut AppContext) -> Result<()> {
    let summary = ctx.engine.user_summary(&ctx.user_id);

    println!("Learner: {}", summary.user_id);
    println!(
        "  Level {}  ({} XP, {} to next level)",
        summary.level,
        summary.xp,
        leveling::xp_to_next_level(summary.xp)
    );
    match summary.streak.last_active_date {
        Some(last) => println!(
            "  Streak: {} day(s), last active {}",
            summary.streak.count, last
        ),
        None => println!("  Streak: none yet"),
    }
    println!(
        "  Games: {} played, high score {}",
        summary.stats.games_played, summary.stats.high_score
    );

    if !summary.badges.is_empty() {
        println!("\nBadges ({}):", summary.badges.len());
        for badge in &summary.badges {
            let meta = badge_meta(&badge.kind);
            println!("  {} {} - {}", meta.icon, badge.name, meta.description);
        }
    }

    println!("\nLearning path:");
    let grade_filter = ctx.config.grade_filter.as_deref();
    for progress in &summary.learning_path {
        let Some(lesson) = ctx.engine.catalog().get(&progress.lesson_id) else {
            continue;
        };
        if let Some(filter) = grade_filter {
            if lesson.grade != filter {
                continue;
            }
        }
        let mut line = format!(
            "  {} {} [{}]",
            status_icon(progress.status),
            lesson.title,
            progress.lesson_id
        );
        if let (Some(best), Some(last)) = (progress.best_score, progress.last_score) {
            line.push_str(&format!("  best {best}, last {last}"));
            if last == best && last > 0 {
                line.push_str("  (improved!)");
            }
        }
        println!("{line}");
    }

    if let Some(last) = &summary.last_opened {
        println!("\nLast opened: {last}");
    }
    if let Some(next) = ctx.engine.next_unlocked_lesson(&ctx.user_id) {
        println!("Continue with: {next}");
    }

    Ok(())
}

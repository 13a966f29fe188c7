//! Teacher tools: class report, CSV export, top-performer awards,
//! assignments

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;

use brainiac::report::{class_report, roster_csv};

use super::AppContext;

#[derive(Subcommand)]
pub enum ClassAction {
    /// Class metrics and roster
    Report,

    /// Export the roster as CSV
    Export {
        /// Output file
        #[arg(long, default_value = "brainiac-class.csv")]
        out: PathBuf,
    },

    /// Award the Top Performer badge to the top 3 learners by XP
    AwardTop,

    /// List queued assignments
    Assignments,
}

pub fn class_command(ctx: &mut AppContext, action: ClassAction) -> Result<()> {
    match action {
        ClassAction::Report => {
            let report = class_report(ctx.engine.state());
            if report.students.is_empty() {
                println!("No learners yet.");
                return Ok(());
            }
            println!(
                "Class: {} learner(s), avg completion {}%, avg high score {}\n",
                report.students.len(),
                report.avg_completion_pct,
                report.avg_high_score
            );
            for s in &report.students {
                println!(
                    "  {}  XP {} | Level {} | Badges {} | Completed {}/{}",
                    s.user_id, s.xp, s.level, s.badge_count, s.completed, s.total_lessons
                );
            }
            Ok(())
        }
        ClassAction::Export { out } => {
            let csv = roster_csv(ctx.engine.state());
            std::fs::write(&out, csv)
                .with_context(|| format!("Failed to write roster to {}", out.display()))?;
            println!("Wrote {}", out.display());
            Ok(())
        }
        ClassAction::AwardTop => {
            let top = ctx.engine.award_top_performers(3);
            if top.is_empty() {
                println!("No learners to award.");
            } else {
                println!("Top performers: {}", top.join(", "));
            }
            Ok(())
        }
        ClassAction::Assignments => {
            let assignments = ctx.engine.assignments();
            if assignments.is_empty() {
                println!("No assignments queued.");
                return Ok(());
            }
            println!("Assignments ({}):\n", assignments.len());
            for a in assignments {
                println!(
                    "  {} -> {} (queued {})",
                    a.lesson_id,
                    a.group,
                    a.at.format("%Y-%m-%d %H:%M")
                );
            }
            Ok(())
        }
    }
}

/// Queue a lesson assignment for a group of learners
pub fn assign_command(ctx: &mut AppContext, lesson_id: &str, group: &str) -> Result<()> {
    ctx.engine.assign(lesson_id, group)?;
    println!(
        "Assignment queued: {lesson_id} for {group} ({} total)",
        ctx.engine.assignments().len()
    );
    Ok(())
}

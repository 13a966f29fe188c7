//! Lesson commands: list the catalog, complete with an external score,
//! create new lessons (teacher action)

use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;

use brainiac::{Lesson, QuizQuestion};

use super::{AppContext, status_icon};

#[derive(Subcommand)]
pub enum LessonAction {
    /// List the catalog with this user's progress
    List,

    /// Record a lesson completion with an externally graded score
    Complete {
        lesson_id: String,

        #[arg(long)]
        score: u64,

        #[arg(long)]
        total: u64,
    },

    /// Append a new lesson to the catalog (locked for every learner)
    Create {
        /// Lesson id; generated when omitted
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "6-7")]
        grade: String,

        /// Lessons this one unlocks on completion
        #[arg(long, value_delimiter = ',')]
        unlocks: Vec<String>,

        /// Optional single quiz question
        #[arg(long)]
        question: Option<String>,

        /// Choices for the question; the first one is correct
        #[arg(long = "choice")]
        choices: Vec<String>,
    },
}

pub fn lesson_command(ctx: &mut AppContext, action: LessonAction) -> Result<()> {
    match action {
        LessonAction::List => list(ctx),
        LessonAction::Complete {
            lesson_id,
            score,
            total,
        } => {
            ctx.engine.record_streak(&ctx.user_id)?;
            ctx.engine
                .complete_lesson(&ctx.user_id, &lesson_id, score, total)?;
            Ok(())
        }
        LessonAction::Create {
            id,
            title,
            grade,
            unlocks,
            question,
            choices,
        } => {
            let id = id.unwrap_or_else(|| format!("custom-{}", Utc::now().timestamp_millis()));
            let quiz = match question {
                Some(prompt) if !choices.is_empty() => vec![QuizQuestion {
                    prompt,
                    choices,
                    correct: 0,
                }],
                _ => Vec::new(),
            };
            ctx.engine.create_lesson(Lesson {
                id: id.clone(),
                title,
                unlocks,
                grade,
                quiz,
            })?;
            println!("Created lesson {id} (locked for all learners)");
            Ok(())
        }
    }
}

fn list(ctx: &mut AppContext) -> Result<()> {
    let summary = ctx.engine.user_summary(&ctx.user_id);
    println!("Lessons ({}):\n", ctx.engine.catalog().len());
    for lesson in ctx.engine.catalog().iter() {
        let status = summary
            .learning_path
            .iter()
            .find(|p| p.lesson_id == lesson.id)
            .map(|p| p.status)
            .unwrap_or(brainiac::LessonStatus::Locked);
        println!(
            "  {} {} [{}] grade {} - {} question(s)",
            status_icon(status),
            lesson.title,
            lesson.id,
            lesson.grade,
            lesson.quiz.len()
        );
        if !lesson.unlocks.is_empty() {
            println!("    unlocks: {}", lesson.unlocks.join(", "));
        }
    }
    Ok(())
}

//! Quiz command implementation

use anyhow::Result;

use super::AppContext;

/// Open a lesson's quiz. Without answers, show the questions; with
/// answers, grade the sheet and complete the lesson.
pub fn quiz_command(ctx: &mut AppContext, lesson_id: &str, answers: &[usize]) -> Result<()> {
    let lesson = ctx.engine.open_lesson(&ctx.user_id, lesson_id)?;

    if answers.is_empty() {
        println!("Quiz: {} ({} questions)\n", lesson.title, lesson.quiz.len());
        for (i, q) in lesson.quiz.iter().enumerate() {
            println!("  {}. {}", i + 1, q.prompt);
            for (j, choice) in q.choices.iter().enumerate() {
                println!("     [{j}] {choice}");
            }
        }
        println!("\nSubmit with: brainiac quiz {lesson_id} --answers 0,1,...");
        return Ok(());
    }

    ctx.engine.record_streak(&ctx.user_id)?;
    let outcome = ctx.engine.submit_quiz(&ctx.user_id, lesson_id, answers)?;

    println!(
        "\nScore: {}/{}{}",
        outcome.score,
        outcome.total_possible,
        if outcome.a_plus { "  (A+)" } else { "" }
    );
    Ok(())
}

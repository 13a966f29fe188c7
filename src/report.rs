//! Class-level reporting for the teacher portal: roster rows, aggregate
//! metrics and CSV export.

use crate::domain::EngineState;

/// One roster row per learner
#[derive(Debug, Clone)]
pub struct StudentRow {
    pub user_id: String,
    pub xp: u64,
    pub level: u32,
    pub badge_count: usize,
    pub completed: usize,
    pub total_lessons: usize,
    pub high_score: u64,
}

/// Aggregated view of the whole class
#[derive(Debug, Clone)]
pub struct ClassReport {
    pub students: Vec<StudentRow>,
    /// Mean per-student completion percentage, rounded
    pub avg_completion_pct: u32,
    /// Mean per-student game high score, rounded
    pub avg_high_score: u32,
}

/// Build the class report. Students appear in first-seen order.
pub fn class_report(state: &EngineState) -> ClassReport {
    let mut students: Vec<StudentRow> = state
        .users
        .iter()
        .map(|(user_id, u)| StudentRow {
            user_id: user_id.clone(),
            xp: u.xp,
            level: u.level(),
            badge_count: u.badges.len(),
            completed: u.completed_count(),
            total_lessons: u.learning_path.len(),
            high_score: u.stats.high_score,
        })
        .collect();
    let seq_of = |row: &StudentRow| state.users[&row.user_id].seq;
    students.sort_by_key(seq_of);

    let count = students.len().max(1) as f64;
    let completion_sum: f64 = students
        .iter()
        .map(|s| s.completed as f64 / (s.total_lessons.max(1) as f64) * 100.0)
        .sum();
    let score_sum: f64 = students.iter().map(|s| s.high_score as f64).sum();

    ClassReport {
        avg_completion_pct: (completion_sum / count).round() as u32,
        avg_high_score: (score_sum / count).round() as u32,
        students,
    }
}

/// Render the roster as CSV, one line per student
pub fn roster_csv(state: &EngineState) -> String {
    let report = class_report(state);
    let mut rows = vec![csv_row(&[
        "User",
        "XP",
        "Level",
        "Badges",
        "Completed",
        "HighScore",
    ])];
    for s in &report.students {
        rows.push(csv_row(&[
            &s.user_id,
            &s.xp.to_string(),
            &s.level.to_string(),
            &s.badge_count.to_string(),
            &s.completed.to_string(),
            &s.high_score.to_string(),
        ]));
    }
    rows.join("\n")
}

fn csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn metrics_average_over_students() {
        let mut engine = Engine::in_memory();
        // One student completes 2 of 4 lessons, the other none
        engine.complete_lesson("amrita", "physics-1", 3, 3).unwrap();
        engine
            .complete_lesson("amrita", "chemistry-1", 2, 3)
            .unwrap();
        engine.ensure_user("ravi");

        let report = class_report(engine.state());
        assert_eq!(report.students.len(), 2);
        // (50% + 0%) / 2
        assert_eq!(report.avg_completion_pct, 25);
        assert_eq!(report.students[0].user_id, "amrita");
    }

    #[test]
    fn csv_escapes_quotes() {
        let mut engine = Engine::in_memory();
        engine.ensure_user("say \"hi\"");
        let csv = roster_csv(engine.state());
        assert!(csv.contains("\"say \"\"hi\"\"\""));
        assert!(csv.starts_with("\"User\","));
    }
}

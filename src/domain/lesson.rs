use serde::{Deserialize, Serialize};

/// Progress state of a lesson on a learner's path.
///
/// Transitions are monotonic: `Locked` → `Unlocked` → `Completed`. The
/// engine never moves a lesson backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Locked,
    Unlocked,
    Completed,
}

impl std::fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonStatus::Locked => write!(f, "locked"),
            LessonStatus::Unlocked => write!(f, "unlocked"),
            LessonStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A single multiple-choice quiz question attached to a lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text shown to the learner
    pub prompt: String,

    /// Answer choices, in display order
    pub choices: Vec<String>,

    /// Index into `choices` of the correct answer
    pub correct: usize,
}

/// A lesson in the global catalog, shared by all learners
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Stable identifier (e.g. "physics-1")
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Lesson ids unlocked when this lesson is completed
    #[serde(default)]
    pub unlocks: Vec<String>,

    /// Grade band this lesson targets (e.g. "6-7")
    pub grade: String,

    /// Quiz questions graded on submission
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

impl Lesson {
    /// Grade a full set of answers against the quiz.
    ///
    /// Returns `(correct_count, total_questions)`. Answers beyond the quiz
    /// length are ignored; the engine validates length before grading.
    pub fn grade(&self, answers: &[usize]) -> (u64, u64) {
        let correct = self
            .quiz
            .iter()
            .zip(answers.iter())
            .filter(|(q, a)| q.correct == **a)
            .count() as u64;
        (correct, self.quiz.len() as u64)
    }
}

/// The global ordered lesson catalog.
///
/// Immutable at runtime except through the create-lesson administrative
/// operation, which appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    /// Look up a lesson by id
    pub fn get(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn contains(&self, lesson_id: &str) -> bool {
        self.get(lesson_id).is_some()
    }

    /// Append a new lesson (create-lesson administrative action)
    pub fn push(&mut self, lesson: Lesson) {
        self.lessons.push(lesson);
    }

    /// Lessons in fixed catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter()
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Seed a fresh learning path: first catalog lesson unlocked, the rest
    /// locked.
    pub fn seed_progress(&self) -> Vec<LessonProgress> {
        self.lessons
            .iter()
            .enumerate()
            .map(|(i, lesson)| {
                if i == 0 {
                    LessonProgress::unlocked(&lesson.id)
                } else {
                    LessonProgress::locked(&lesson.id)
                }
            })
            .collect()
    }
}

/// Per-learner, per-lesson progress record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonProgress {
    pub lesson_id: String,

    pub status: LessonStatus,

    /// Highest score ever achieved on this lesson's quiz
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_score: Option<u64>,

    /// Score of the most recent completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_score: Option<u64>,

    /// Legacy single-score field; migrated into best/last on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
}

impl LessonProgress {
    pub fn locked(lesson_id: &str) -> Self {
        Self {
            lesson_id: lesson_id.to_string(),
            status: LessonStatus::Locked,
            best_score: None,
            last_score: None,
            score: None,
        }
    }

    pub fn unlocked(lesson_id: &str) -> Self {
        Self {
            status: LessonStatus::Unlocked,
            ..Self::locked(lesson_id)
        }
    }

    /// Record a completion: status becomes `Completed`, `last_score` is the
    /// new score and `best_score` keeps the maximum.
    pub fn complete(&mut self, score: u64) {
        self.status = LessonStatus::Completed;
        self.last_score = Some(score);
        self.best_score = Some(self.best_score.unwrap_or(0).max(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LessonCatalog {
        LessonCatalog::new(vec![
            Lesson {
                id: "a".into(),
                title: "A".into(),
                unlocks: vec!["b".into()],
                grade: "6-7".into(),
                quiz: vec![],
            },
            Lesson {
                id: "b".into(),
                title: "B".into(),
                unlocks: vec![],
                grade: "6-7".into(),
                quiz: vec![],
            },
        ])
    }

    #[test]
    fn seed_unlocks_only_first_lesson() {
        let path = catalog().seed_progress();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].status, LessonStatus::Unlocked);
        assert_eq!(path[1].status, LessonStatus::Locked);
    }

    #[test]
    fn complete_keeps_best_score() {
        let mut progress = LessonProgress::unlocked("a");
        progress.complete(3);
        assert_eq!(progress.best_score, Some(3));
        assert_eq!(progress.last_score, Some(3));

        progress.complete(1);
        assert_eq!(progress.best_score, Some(3));
        assert_eq!(progress.last_score, Some(1));
    }

    #[test]
    fn grade_counts_correct_answers() {
        let lesson = Lesson {
            id: "q".into(),
            title: "Quiz".into(),
            unlocks: vec![],
            grade: "6-7".into(),
            quiz: vec![
                QuizQuestion {
                    prompt: "1+1?".into(),
                    choices: vec!["1".into(), "2".into()],
                    correct: 1,
                },
                QuizQuestion {
                    prompt: "2+2?".into(),
                    choices: vec!["4".into(), "5".into()],
                    correct: 0,
                },
            ],
        };
        assert_eq!(lesson.grade(&[1, 0]), (2, 2));
        assert_eq!(lesson.grade(&[0, 0]), (1, 2));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of badge, carrying its own qualifying data.
///
/// Each kind renders a stable wire code (`level-up-4`, `streak-7`, ...)
/// used for persistence and for at-most-once-per-code award semantics.
/// Codes from older state blobs that no kind recognizes round-trip through
/// [`BadgeKind::Legacy`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum BadgeKind {
    /// Reached a new level through XP; carries the level reached
    LevelUp(u32),
    /// Kept a learning streak alive; carries the day count
    Streak(u32),
    /// Scored 90% or better on a lesson quiz; carries the lesson id
    QuizAPlus(String),
    /// High score in a mini game; carries the game id
    GameHighScore(String),
    /// Awarded by a teacher to the top of the class leaderboard
    TopPerformer,
    /// Unrecognized code from an older state blob, preserved verbatim
    Legacy(String),
}

impl BadgeKind {
    /// The stable wire code for this badge kind
    pub fn code(&self) -> String {
        match self {
            Self::LevelUp(level) => format!("level-up-{level}"),
            Self::Streak(days) => format!("streak-{days}"),
            Self::QuizAPlus(lesson_id) => format!("quiz-aplus-{lesson_id}"),
            Self::GameHighScore(game_id) => format!("game-mathninja-{game_id}"),
            Self::TopPerformer => "teacher-top".to_string(),
            Self::Legacy(code) => code.clone(),
        }
    }

    /// Parse a wire code back into a kind
    pub fn parse(code: &str) -> Self {
        if let Some(rest) = code.strip_prefix("level-up-") {
            if let Ok(level) = rest.parse() {
                return Self::LevelUp(level);
            }
        }
        if let Some(rest) = code.strip_prefix("streak-") {
            if let Ok(days) = rest.parse() {
                return Self::Streak(days);
            }
        }
        if let Some(rest) = code.strip_prefix("quiz-aplus-") {
            if !rest.is_empty() {
                return Self::QuizAPlus(rest.to_string());
            }
        }
        if let Some(rest) = code.strip_prefix("game-mathninja-") {
            if !rest.is_empty() {
                return Self::GameHighScore(rest.to_string());
            }
        }
        if code == "teacher-top" {
            return Self::TopPerformer;
        }
        Self::Legacy(code.to_string())
    }
}

impl From<BadgeKind> for String {
    fn from(kind: BadgeKind) -> String {
        kind.code()
    }
}

impl From<String> for BadgeKind {
    fn from(code: String) -> Self {
        BadgeKind::parse(&code)
    }
}

impl std::fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A badge held by a learner, awarded at most once per code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    /// Display name shown in the badge grid (e.g. "Level 4", "A+ Quiz")
    pub name: String,

    /// The kind, serialized as its wire code
    #[serde(rename = "code")]
    pub kind: BadgeKind,

    /// When the badge was awarded
    pub awarded_at: DateTime<Utc>,
}

impl Badge {
    pub fn new(name: impl Into<String>, kind: BadgeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            awarded_at: Utc::now(),
        }
    }

    pub fn code(&self) -> String {
        self.kind.code()
    }
}

//! The gamification state engine.
//!
//! [`Engine`] is the single authority for all mutations to learner records:
//! XP accrual and level-up badges, daily streaks, lesson completion and
//! unlocking, mini-game scores and the leaderboard. Every operation runs to
//! completion before the next begins (the execution model is synchronous
//! and single-threaded); callers in a concurrent environment must serialize
//! access externally.
//!
//! Each mutation validates first, then mutates, then notifies subscribed
//! [`EventSink`]s in mutation order, then persists the whole state through
//! the injected [`StateStore`]. Persistence is best-effort: a failed save
//! is logged, never surfaced to the mutating caller.

mod error;
pub mod leaderboard;
pub mod leveling;

pub use error::EngineError;
pub use leaderboard::LEADERBOARD_SIZE;

use chrono::{Local, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::domain::{
    Assignment, Badge, BadgeKind, EngineState, EventSink, GamificationEvent, LeaderboardEntry,
    Lesson, LessonCatalog, LessonStatus, UserRecord, UserSummary,
};
use crate::engine::leveling::XpRewards;
use crate::store::{MemoryStore, StateStore};

/// Outcome of a graded quiz submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u64,
    pub total_possible: u64,
    pub a_plus: bool,
}

/// The gamification state engine
pub struct Engine {
    state: EngineState,
    store: Box<dyn StateStore>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl Engine {
    /// Create an engine backed by the given store, loading whatever state
    /// it holds (or the seeded default).
    pub fn new(store: Box<dyn StateStore>) -> Self {
        let state = store.load();
        Self {
            state,
            store,
            sinks: Vec::new(),
        }
    }

    /// Engine over a fresh in-memory store; state dies with the engine
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }

    /// Subscribe an observer to change notifications
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn catalog(&self) -> &LessonCatalog {
        &self.state.catalog
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.state.leaderboard
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.state.assignments
    }

    // ========================================
    // USER LIFECYCLE
    // ========================================

    /// Get or create the record for a user id.
    ///
    /// New records are seeded from the catalog: first lesson unlocked, the
    /// rest locked. Idempotent; a second call returns the record unchanged.
    pub fn ensure_user(&mut self, user_id: &str) -> &UserRecord {
        if self.ensure_user_internal(user_id) {
            self.persist();
        }
        self.state.users.get(user_id).expect("user just ensured")
    }

    /// Read-only projection of a user's state, seeding the user first
    pub fn user_summary(&mut self, user_id: &str) -> UserSummary {
        if self.ensure_user_internal(user_id) {
            self.persist();
        }
        UserSummary::of(user_id, &self.state.users[user_id])
    }

    /// Remove one user's record entirely (logout / data reset).
    ///
    /// Returns whether a record existed.
    pub fn reset_user(&mut self, user_id: &str) -> bool {
        let removed = self.state.users.remove(user_id).is_some();
        if removed {
            info!(user = user_id, "reset user record");
            self.state.leaderboard =
                leaderboard::recompute(&self.state.users, LEADERBOARD_SIZE);
            self.persist();
        }
        removed
    }

    /// Reset the whole state to the seeded default
    pub fn reset_all(&mut self) {
        info!("reset all gamification state");
        self.state = EngineState::default();
        self.persist();
    }

    // ========================================
    // XP & BADGES
    // ========================================

    /// Add XP to a user and recompute everything derived from it.
    ///
    /// If the derived level increased, exactly one level-up badge is
    /// awarded for the final level reached, regardless of how many levels
    /// the jump crossed. The leaderboard is recomputed afterwards.
    pub fn add_xp(&mut self, user_id: &str, amount: u64, reason: &str) -> Result<(), EngineError> {
        self.add_xp_internal(user_id, amount, reason);
        self.persist();
        Ok(())
    }

    /// Award a badge unless the user already holds one with the same code
    pub fn award_badge(
        &mut self,
        user_id: &str,
        name: &str,
        kind: BadgeKind,
    ) -> Result<(), EngineError> {
        if self.award_badge_internal(user_id, name.to_string(), kind) {
            self.persist();
        }
        Ok(())
    }

    // ========================================
    // STREAKS
    // ========================================

    /// Record activity for today (local calendar date)
    pub fn record_streak(&mut self, user_id: &str) -> Result<(), EngineError> {
        self.record_streak_on(user_id, Local::now().date_naive())
    }

    /// Record activity for an explicit calendar date.
    ///
    /// No-op if the date was already counted. Extends the streak when the
    /// date directly follows the last active day, otherwise resets it to 1.
    /// Every 7th day awards a streak badge.
    pub fn record_streak_on(
        &mut self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<(), EngineError> {
        self.ensure_user_internal(user_id);
        let count = {
            let user = self.state.users.get_mut(user_id).expect("user just ensured");
            if user.streak.last_active_date == Some(today) {
                return Ok(());
            }
            let extends = user.streak.last_active_date.and_then(|d| d.succ_opt()) == Some(today);
            let count = if extends { user.streak.count + 1 } else { 1 };
            user.streak.count = count;
            user.streak.last_active_date = Some(today);
            count
        };
        debug!(user = user_id, count, "streak recorded");

        if count % XpRewards::STREAK_BADGE_INTERVAL == 0 {
            self.award_badge_internal(
                user_id,
                format!("{count}-day Streak"),
                BadgeKind::Streak(count),
            );
        }
        self.emit(GamificationEvent::StreakChanged {
            user_id: user_id.to_string(),
            count,
        });
        self.persist();
        Ok(())
    }

    // ========================================
    // LESSONS
    // ========================================

    /// Complete a lesson with a quiz score.
    ///
    /// Marks the lesson completed (best/last scores updated), awards the
    /// lesson XP, unlocks dependent lessons that are still locked, and
    /// grants the A+ badge at a 90% score ratio.
    pub fn complete_lesson(
        &mut self,
        user_id: &str,
        lesson_id: &str,
        score: u64,
        total_possible: u64,
    ) -> Result<(), EngineError> {
        if score > total_possible {
            return Err(EngineError::InvalidScore {
                score,
                total: total_possible,
            });
        }
        let unlocks = match self.state.catalog.get(lesson_id) {
            Some(lesson) => lesson.unlocks.clone(),
            None => return Err(EngineError::UnknownLesson(lesson_id.to_string())),
        };

        self.ensure_user_internal(user_id);
        {
            let user = self.state.users.get_mut(user_id).expect("user just ensured");
            let Some(progress) = user.progress_mut(lesson_id) else {
                return Err(EngineError::UnknownLesson(lesson_id.to_string()));
            };
            progress.complete(score);
        }
        info!(user = user_id, lesson = lesson_id, score, total_possible, "lesson completed");

        self.add_xp_internal(
            user_id,
            XpRewards::lesson(score, total_possible),
            "lesson-complete",
        );

        // Unlock downstream lessons; never downgrade one already open
        {
            let user = self.state.users.get_mut(user_id).expect("user just ensured");
            for unlock_id in &unlocks {
                if let Some(progress) = user.progress_mut(unlock_id) {
                    if progress.status == LessonStatus::Locked {
                        progress.status = LessonStatus::Unlocked;
                    }
                }
            }
        }

        if leveling::is_a_plus(score, total_possible) {
            self.award_badge_internal(
                user_id,
                "A+ Quiz".to_string(),
                BadgeKind::QuizAPlus(lesson_id.to_string()),
            );
        }

        self.emit(GamificationEvent::LessonCompleted {
            user_id: user_id.to_string(),
            lesson_id: lesson_id.to_string(),
            score,
            total_possible,
        });
        self.persist();
        Ok(())
    }

    /// Grade a full answer sheet against a lesson's quiz and complete the
    /// lesson with the result.
    pub fn submit_quiz(
        &mut self,
        user_id: &str,
        lesson_id: &str,
        answers: &[usize],
    ) -> Result<QuizOutcome, EngineError> {
        let lesson = self
            .state
            .catalog
            .get(lesson_id)
            .cloned()
            .ok_or_else(|| EngineError::UnknownLesson(lesson_id.to_string()))?;
        if answers.len() != lesson.quiz.len() {
            return Err(EngineError::AnswerMismatch {
                given: answers.len(),
                expected: lesson.quiz.len(),
            });
        }
        let (score, total_possible) = lesson.grade(answers);
        self.complete_lesson(user_id, lesson_id, score, total_possible)?;
        Ok(QuizOutcome {
            score,
            total_possible,
            a_plus: leveling::is_a_plus(score, total_possible),
        })
    }

    /// Mark a lesson as opened (the "continue where you left off" pointer)
    /// and return it for display.
    pub fn open_lesson(&mut self, user_id: &str, lesson_id: &str) -> Result<Lesson, EngineError> {
        let lesson = self
            .state
            .catalog
            .get(lesson_id)
            .cloned()
            .ok_or_else(|| EngineError::UnknownLesson(lesson_id.to_string()))?;
        self.ensure_user_internal(user_id);
        let user = self.state.users.get_mut(user_id).expect("user just ensured");
        user.last_opened = Some(lesson_id.to_string());
        self.persist();
        Ok(lesson)
    }

    /// First unlocked lesson in catalog order; falls back to the first
    /// non-locked (i.e. completed) lesson when everything open is done.
    pub fn next_unlocked_lesson(&mut self, user_id: &str) -> Option<String> {
        if self.ensure_user_internal(user_id) {
            self.persist();
        }
        let user = &self.state.users[user_id];
        user.learning_path
            .iter()
            .find(|p| p.status == LessonStatus::Unlocked)
            .or_else(|| {
                user.learning_path
                    .iter()
                    .find(|p| p.status != LessonStatus::Locked)
            })
            .map(|p| p.lesson_id.clone())
    }

    /// Append a lesson to the catalog and a locked progress entry to every
    /// existing learner (teacher's create-lesson action).
    pub fn create_lesson(&mut self, lesson: Lesson) -> Result<(), EngineError> {
        if self.state.catalog.contains(&lesson.id) {
            return Err(EngineError::DuplicateLesson(lesson.id));
        }
        let lesson_id = lesson.id.clone();
        info!(lesson = %lesson_id, "lesson created");
        self.state.catalog.push(lesson);
        for user in self.state.users.values_mut() {
            user.learning_path
                .push(crate::domain::LessonProgress::locked(&lesson_id));
        }
        self.emit(GamificationEvent::LessonCreated { lesson_id });
        self.persist();
        Ok(())
    }

    /// Queue a lesson assignment for a group of learners
    pub fn assign(&mut self, lesson_id: &str, group: &str) -> Result<(), EngineError> {
        if !self.state.catalog.contains(lesson_id) {
            return Err(EngineError::UnknownLesson(lesson_id.to_string()));
        }
        self.state.assignments.push(Assignment {
            lesson_id: lesson_id.to_string(),
            group: group.to_string(),
            at: Utc::now(),
        });
        self.persist();
        Ok(())
    }

    // ========================================
    // GAMES
    // ========================================

    /// Record a mini-game round: play counters, capped XP, and the Math
    /// Ninja badge for scores of 20 or more.
    pub fn record_game(
        &mut self,
        user_id: &str,
        game_id: &str,
        score: u64,
    ) -> Result<(), EngineError> {
        if crate::catalog::game(game_id).is_none() {
            return Err(EngineError::UnknownGame(game_id.to_string()));
        }
        self.ensure_user_internal(user_id);
        {
            let user = self.state.users.get_mut(user_id).expect("user just ensured");
            user.stats.games_played += 1;
            user.stats.high_score = user.stats.high_score.max(score);
        }
        debug!(user = user_id, game = game_id, score, "game recorded");

        self.add_xp_internal(user_id, XpRewards::game(score), &format!("game-{game_id}"));

        if score >= XpRewards::GAME_BADGE_THRESHOLD {
            self.award_badge_internal(
                user_id,
                "Math Ninja".to_string(),
                BadgeKind::GameHighScore(game_id.to_string()),
            );
        }
        self.emit(GamificationEvent::GameRecorded {
            user_id: user_id.to_string(),
            game_id: game_id.to_string(),
            score,
        });
        self.persist();
        Ok(())
    }

    /// Whether a game's gating lesson is open for this user
    pub fn game_unlocked(&mut self, user_id: &str, game_id: &str) -> Result<bool, EngineError> {
        let game = crate::catalog::game(game_id)
            .ok_or_else(|| EngineError::UnknownGame(game_id.to_string()))?;
        if self.ensure_user_internal(user_id) {
            self.persist();
        }
        let user = &self.state.users[user_id];
        Ok(match user.progress(game.gate) {
            Some(progress) => progress.status != LessonStatus::Locked,
            None => true,
        })
    }

    // ========================================
    // CLASS ACTIONS
    // ========================================

    /// Award the Top Performer badge to the `top_n` users by XP.
    ///
    /// Idempotent per user; returns the ids considered.
    pub fn award_top_performers(&mut self, top_n: usize) -> Vec<String> {
        let top: Vec<String> = leaderboard::recompute(&self.state.users, top_n)
            .into_iter()
            .map(|e| e.user_id)
            .collect();
        let mut awarded_any = false;
        for user_id in &top {
            awarded_any |= self.award_badge_internal(
                user_id,
                "Top Performer".to_string(),
                BadgeKind::TopPerformer,
            );
        }
        if awarded_any {
            self.persist();
        }
        top
    }

    // ========================================
    // INTERNALS
    // ========================================

    /// Create the user record if missing. Returns whether it was created.
    fn ensure_user_internal(&mut self, user_id: &str) -> bool {
        if self.state.users.contains_key(user_id) {
            return false;
        }
        let seq = self.state.next_seq;
        self.state.next_seq += 1;
        let record = UserRecord::seeded(seq, &self.state.catalog);
        self.state.users.insert(user_id.to_string(), record);
        info!(user = user_id, seq, "created user record");
        true
    }

    /// XP accrual shared by the public operation and lesson/game flows.
    /// Emits the level-up badge (if any) before the xp-changed event.
    fn add_xp_internal(&mut self, user_id: &str, amount: u64, reason: &str) {
        self.ensure_user_internal(user_id);
        let (old_level, new_total, new_level) = {
            let user = self.state.users.get_mut(user_id).expect("user just ensured");
            let old_level = user.level();
            user.xp += amount;
            (old_level, user.xp, user.level())
        };
        debug!(user = user_id, amount, new_total, reason, "xp added");

        if new_level > old_level {
            self.award_badge_internal(
                user_id,
                format!("Level {new_level}"),
                BadgeKind::LevelUp(new_level),
            );
        }
        self.state.leaderboard = leaderboard::recompute(&self.state.users, LEADERBOARD_SIZE);
        self.emit(GamificationEvent::XpChanged {
            user_id: user_id.to_string(),
            amount,
            new_total,
            reason: reason.to_string(),
        });
    }

    /// Append a badge unless its code is already held. Returns whether the
    /// badge was awarded.
    fn award_badge_internal(&mut self, user_id: &str, name: String, kind: BadgeKind) -> bool {
        self.ensure_user_internal(user_id);
        let badge = {
            let user = self.state.users.get_mut(user_id).expect("user just ensured");
            if user.has_badge(&kind) {
                return false;
            }
            let badge = Badge::new(name, kind);
            user.badges.push(badge.clone());
            badge
        };
        info!(user = user_id, code = %badge.kind, "badge awarded");
        self.emit(GamificationEvent::BadgeAwarded {
            user_id: user_id.to_string(),
            badge,
        });
        true
    }

    fn emit(&mut self, event: GamificationEvent) {
        debug!(event = event.name(), "notify");
        for sink in &mut self.sinks {
            sink.on_event(&event);
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            warn!("failed to persist state: {e:#}");
        }
    }
}

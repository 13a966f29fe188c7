//! Leaderboard derivation

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::domain::{LeaderboardEntry, UserRecord};

/// Number of entries kept on the leaderboard
pub const LEADERBOARD_SIZE: usize = 10;

/// Recompute the top-N leaderboard from scratch.
///
/// Sorted by XP descending; ties resolve to whoever was seen first
/// (lower `seq`), so repeated recomputes are stable.
pub fn recompute(users: &BTreeMap<String, UserRecord>, size: usize) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<(&String, &UserRecord)> = users.iter().collect();
    entries.sort_by_key(|(_, u)| (Reverse(u.xp), u.seq));
    entries
        .into_iter()
        .take(size)
        .map(|(user_id, u)| LeaderboardEntry {
            user_id: user_id.clone(),
            xp: u.xp,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn user(seq: u64, xp: u64) -> UserRecord {
        let mut u = UserRecord::seeded(seq, &default_catalog());
        u.xp = xp;
        u
    }

    #[test]
    fn sorts_by_xp_then_first_seen() {
        let mut users = BTreeMap::new();
        users.insert("zoe".to_string(), user(1, 50));
        users.insert("amy".to_string(), user(2, 50));
        users.insert("kim".to_string(), user(3, 120));

        let board = recompute(&users, LEADERBOARD_SIZE);
        let ids: Vec<&str> = board.iter().map(|e| e.user_id.as_str()).collect();
        // kim leads on XP; zoe beats amy on the tie because she was seen first
        assert_eq!(ids, ["kim", "zoe", "amy"]);
    }

    #[test]
    fn truncates_to_size() {
        let mut users = BTreeMap::new();
        for i in 0..15 {
            users.insert(format!("u{i}"), user(i, i * 10));
        }
        let board = recompute(&users, LEADERBOARD_SIZE);
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board[0].xp, 140);
    }
}

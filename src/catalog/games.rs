//! The mini-game registry.
//!
//! Each game is gated behind a lesson on the learning path: the game is
//! playable once that lesson is no longer locked.

/// A mini game in the games hub
#[derive(Debug, Clone)]
pub struct GameDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Lesson whose progress gates this game
    pub gate: &'static str,
}

/// All built-in games
pub static GAMES: &[GameDef] = &[
    GameDef {
        id: "projectile-motion",
        title: "Projectile Motion",
        description: "Compute range, time of flight, or max height given v0, theta, g.",
        gate: "physics-1",
    },
    GameDef {
        id: "equation-balancer",
        title: "Equation Balancer",
        description: "Balance real chemical equations by choosing correct coefficients.",
        gate: "chemistry-1",
    },
    GameDef {
        id: "logic-truth-table",
        title: "Logic Truth Table",
        description: "Fill the truth table for a given boolean expression.",
        gate: "math-1",
    },
    GameDef {
        id: "shortest-path",
        title: "Shortest Path",
        description: "Find the shortest distance on a weighted graph (Dijkstra).",
        gate: "math-1",
    },
    GameDef {
        id: "calculus-derivative",
        title: "Derivative Challenge",
        description: "Compute f'(x0) for a given function.",
        gate: "math-1",
    },
    GameDef {
        id: "speed-arithmetic",
        title: "Speed Arithmetic",
        description: "Solve math problems against the clock!",
        gate: "math-1",
    },
    GameDef {
        id: "memory-match",
        title: "Memory Match",
        description: "Flip cards to match element symbols quickly.",
        gate: "chemistry-1",
    },
    GameDef {
        id: "ohms-law",
        title: "Ohm's Law",
        description: "Find V=IR. Compute voltage, current, or resistance.",
        gate: "physics-1",
    },
];

/// Look up a game by id
pub fn game(id: &str) -> Option<&'static GameDef> {
    GAMES.iter().find(|g| g.id == id)
}

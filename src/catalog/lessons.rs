//! The built-in lesson catalog and its quiz bank.
//!
//! Four starter lessons in a single unlock chain; teachers append custom
//! lessons at runtime through the create-lesson operation.

use crate::domain::{Lesson, LessonCatalog, QuizQuestion};

fn question(prompt: &str, choices: &[&str], correct: usize) -> QuizQuestion {
    QuizQuestion {
        prompt: prompt.to_string(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
        correct,
    }
}

/// Build the default catalog seeded into fresh state
pub fn default_catalog() -> LessonCatalog {
    LessonCatalog::new(vec![
        Lesson {
            id: "physics-1".to_string(),
            title: "Intro to Forces".to_string(),
            unlocks: vec!["chemistry-1".to_string()],
            grade: "6-7".to_string(),
            quiz: vec![
                question(
                    "What is the equation for Newton's second law?",
                    &["F = ma", "V = IR", "E = mc^2", "P = VI"],
                    0,
                ),
                question(
                    "A net force causes an object to ...",
                    &[
                        "Remain at rest",
                        "Accelerate",
                        "Move at constant velocity",
                        "Gain mass",
                    ],
                    1,
                ),
                question(
                    "Unit of force is ...",
                    &["Joule", "Watt", "Newton", "Pascal"],
                    2,
                ),
            ],
        },
        Lesson {
            id: "chemistry-1".to_string(),
            title: "Periodic Table".to_string(),
            unlocks: vec!["biology-1".to_string()],
            grade: "6-7".to_string(),
            quiz: vec![
                question("Symbol for Oxygen is ...", &["Ox", "O", "Og", "On"], 1),
                question(
                    "Atomic number counts ...",
                    &["Electrons", "Protons", "Neutrons", "Molecules"],
                    1,
                ),
                question(
                    "H2O is commonly called ...",
                    &["Hydrogen gas", "Water", "Ozone", "Salt"],
                    1,
                ),
            ],
        },
        Lesson {
            id: "biology-1".to_string(),
            title: "Cells & Organisms".to_string(),
            unlocks: vec!["math-1".to_string()],
            grade: "6-7".to_string(),
            quiz: vec![
                question(
                    "Basic unit of life is ...",
                    &["Atom", "Cell", "Organ", "DNA"],
                    1,
                ),
                question(
                    "Plants make food by ...",
                    &[
                        "Respiration",
                        "Photosynthesis",
                        "Fermentation",
                        "Digestion",
                    ],
                    1,
                ),
                question(
                    "DNA carries ...",
                    &["Energy", "Genetic information", "Minerals", "Water"],
                    1,
                ),
            ],
        },
        Lesson {
            id: "math-1".to_string(),
            title: "Basics of Algebra".to_string(),
            unlocks: vec![],
            grade: "6-7".to_string(),
            quiz: vec![
                question("5 + 7 = ?", &["10", "11", "12", "13"], 2),
                question("Solve: 3x = 12, x = ?", &["2", "3", "4", "6"], 2),
                question("Which is even?", &["7", "9", "11", "12"], 3),
            ],
        },
    ])
}

//! poker-eval: poker hand classification and comparison
//!
//! Goals:
//! - Classify 5 to 7 cards into the best of the ten standard categories
//! - Pick the five cards that realize it and a key that totally orders hands
//! - No panics for invalid input; use `Result` for the two input errors
//!
//! ## Quick start: evaluate and compare
//! ```
//! use poker_eval::cards::parse_cards;
//! use poker_eval::evaluator::{compare, evaluate, Category};
//! use std::cmp::Ordering;
//!
//! let a = evaluate(&parse_cards("2s 2h 2d 3s 3h Qs Ks").unwrap()).unwrap();
//! let b = evaluate(&parse_cards("As Ah Kd Qc 9s 4h 2c").unwrap()).unwrap();
//! assert_eq!(a.category, Category::FullHouse);
//! assert_eq!(b.category, Category::Pair);
//! assert_eq!(compare(&a, &b), Ordering::Greater);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-eval -- eval As Ks Qs Js Ts 2c 3d
//! cargo run --bin poker-eval -- deal --players 6 --seed 42
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

pub use evaluator::{compare, evaluate, Category, ComparisonKey, EvaluatedHand};
pub use hand::InvalidInputError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

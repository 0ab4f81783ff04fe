//! # loto90-engine: 90-Ball Bingo Fairness Core
//!
//! A deterministic fairness engine for a 90-ball bingo variant: card and
//! series generation under strict structural rules, pure quine/bingo/jackpot
//! verification, claim validation with at-most-once crediting, and jackpot
//! pool accounting — with reproducible RNG for audit and regression testing.
//!
//! The engine is a library: UI, sessions, payments and persistence are
//! external collaborators. It operates entirely on in-memory structures and
//! defines no wire or storage format.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card, series and grid rules (3×9, 15 numbers, column ranges)
//! - [`generator`] - Deterministic card/series generation with ChaCha20 RNG
//! - [`evaluator`] - Pure quine, bingo and jackpot verification
//! - [`claims`] - Claim validation, double-claim protection, batch auto-check
//! - [`game`] - Game state, called-number sequence, winner records
//! - [`jackpot`] - Jackpot pool growth, award and reset, audit trail
//! - [`config`] - Engine configuration (threshold, rate, pool minimum)
//! - [`logger`] - Claim audit logging and ClaimRecord serialization
//! - [`errors`] - Error types for claims, draws, ledger and config
//!
//! ## Quick Start
//!
//! ```rust
//! use loto90_engine::claims::ClaimValidator;
//! use loto90_engine::config::EngineConfig;
//! use loto90_engine::game::{Game, GameStatus};
//! use loto90_engine::generator::CardGenerator;
//!
//! let mut generator = CardGenerator::new(Some(42));
//! let card = generator.generate_card(1, 7, 3);
//!
//! let mut game = Game::new(7);
//! game.set_status(GameStatus::Active);
//! for n in card.row_numbers(0) {
//!     game.call_number(n).unwrap();
//! }
//!
//! let validator = ClaimValidator::new(EngineConfig::default());
//! let claim = validator.validate_quine(&mut game, &card, 3).unwrap();
//! assert_eq!(claim.row, 0);
//! assert_eq!(claim.draw_count, 5);
//! ```
//!
//! ## Deterministic Generation
//!
//! All cards are reproducible using seeded RNG:
//!
//! ```rust
//! use loto90_engine::generator::CardGenerator;
//!
//! // Same seed produces same cards
//! let mut g1 = CardGenerator::new(Some(42));
//! let mut g2 = CardGenerator::new(Some(42));
//! assert_eq!(g1.generate_card(1, 7, 3), g2.generate_card(1, 7, 3));
//! ```
//!
//! ## Series Partition
//!
//! A six-card series covers every number 1–90 exactly once:
//!
//! ```rust
//! use loto90_engine::generator::CardGenerator;
//!
//! let mut generator = CardGenerator::new(Some(7));
//! let series = generator.generate_series(100, 1, 1);
//! assert!(series.covers_full_range());
//! ```

pub mod cards;
pub mod claims;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod game;
pub mod generator;
pub mod jackpot;
pub mod logger;

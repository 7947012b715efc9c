#![deny(missing_docs)]

//! The design philosophy underlying `zk_card_clash` is pedagogical, yet uncompromising
//! about correctness. Each module encapsulates one concern of an educational card
//! game about zero-knowledge proofs, illustrating how modest abstractions compose
//! into a complete game engine that a frontend can drive without owning any rules
//! itself.
//!
//! # zk_card_clash
//!
//! **ZK Card Clash** teaches zero-knowledge cryptography by letting the player
//! assemble protocols out of technology cards. A scenario poses a problem in a
//! handful of stages; the player fills each stage with a card from the dealt
//! hand; the engine scores the solution against the paths its designers wrote
//! down and decides what unlocks next. This crate is the whole engine: content
//! loading, scoring, progression, persistence, pacing, and the screen
//! controller that sequences them. Rendering is somebody else's job.
//!
//! ## Features
//!
//! * **Content catalog** via the [`Catalog`](catalog/struct.Catalog.html) type:
//!   validated card tables and world/scenario definitions, parsed from JSON in
//!   both the current and the legacy on-disk shapes, plus a built-in pack of
//!   three worlds embedded at compile time.
//! * **Scoring**: [`score_solution`](scoring/fn.score_solution.html) grades a
//!   completed board from 0 to 100 against the optimal path, the recognized
//!   alternative paths, and per-stage credit, then applies the hint penalty
//!   and maps the score to a feedback tier.
//! * **Progression**: the [`progress`](progress/index.html) module tracks
//!   per-scenario completion, world unlocks, and the attempt state machine a
//!   single play session moves through.
//! * **Persistence**: the [`store`](store/index.html) module saves the progress
//!   blob through a [`ProgressStore`](store/trait.ProgressStore.html) trait,
//!   with a file-backed store for real sessions and an in-memory store for
//!   tests and demos.
//! * **Screen control**: a [`GameController`](controller/struct.GameController.html)
//!   owns all of the above behind screen-aware methods, so a frontend can stay
//!   a dumb renderer.
//! * **Math labs**: the [`modmath`](modmath/index.html),
//!   [`dlog`](dlog/index.html), [`curve`](curve/index.html),
//!   [`hashlab`](hashlab/index.html) and [`commitment`](commitment/index.html)
//!   modules back the game's interactive widgets with real arithmetic: modular
//!   exponentiation drills, a pace-limited discrete-log search, a toy elliptic
//!   curve, digest comparisons, and a blinded polynomial commitment.
//!
//! ## Usage
//!
//! The following example plays the first scenario of the built-in pack
//! perfectly:
//!
//! ```rust
//! use zk_card_clash::{Catalog, GameController, MemoryStore, PathMatching, DEFAULT_NAMESPACE};
//!
//! let mut game = GameController::new(
//!     Catalog::builtin(),
//!     Box::new(MemoryStore::new()),
//!     DEFAULT_NAMESPACE,
//!     PathMatching::Lenient,
//! )
//! .unwrap();
//!
//! game.start_scenario("sealed-bid").unwrap();
//! game.place_card(0, "salt-cellar").unwrap();
//! game.place_card(1, "sha-forge").unwrap();
//! game.place_card(2, "merkle-loom").unwrap();
//!
//! let outcome = game.submit_solution().unwrap();
//! assert_eq!(outcome.score, 100);
//! ```
//!
//! Scores at or above [`UNLOCK_THRESHOLD`] open the next scenario; finishing a
//! world's last scenario with every other scenario also passed unlocks the next
//! world. All of that policy lives here, not in the frontend.

pub mod catalog;
pub mod commitment;
mod content;
pub mod controller;
pub mod curve;
pub mod dlog;
pub mod error;
pub mod hashlab;
pub mod modmath;
pub mod pacing;
pub mod progress;
pub mod scoring;
pub mod store;

pub use catalog::{
    AlternativePath, Card, CardId, Catalog, CompletionCriteria, FeedbackContent, Scenario,
    ScenarioId, Stage, World, WorldId,
};
pub use commitment::{
    commit_polynomial, eval_polynomial, open_polynomial, random_blinding, verify_opening,
    PolynomialCommitment, PolynomialOpening,
};
pub use controller::{
    Advance, GameController, HintView, ScenarioSummary, Screen, SubmitOutcome, WorldSummary,
    ADVANCE_DELAY, HINT_LIMIT,
};
pub use curve::{CurvePoint, ToyCurve};
pub use dlog::{DlogSearch, PacedSearch, SearchStatus};
pub use error::{CatalogError, ClashError};
pub use hashlab::{avalanche_bits, blake2b_256, digest_report, sha256, sha3_256, DigestReport};
pub use modmath::{
    add_mod, ext_gcd, gcd, is_probable_prime, mod_inv, mod_pow, mul_mod, random_inverse_practice,
    random_pow_practice, sub_mod, InversePractice, PowPractice,
};
pub use pacing::Ticker;
pub use progress::{Attempt, CompletedScenario, PlayerProgress, UNLOCK_THRESHOLD};
pub use scoring::{score_solution, FeedbackTier, PathMatching, Verdict, HINT_PENALTY};
pub use store::{FileStore, MemoryStore, ProgressStore, DEFAULT_NAMESPACE};

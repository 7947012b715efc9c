//! Error taxonomy shared across the engine.
//!
//! Catalog loading and engine operations fail with typed errors rather
//! than sentinel values, so a frontend can map each case to its own
//! message instead of string-matching.

use thiserror::Error;

/// Failure while parsing or validating catalog content.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON payload did not parse.
    #[error("malformed catalog JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Two entries of the same kind share an id.
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId {
        /// Entry kind, e.g. `"card"` or `"scenario"`.
        kind: &'static str,
        /// The offending id.
        id: String,
    },
    /// A scenario declares no stages, so stage scoring would divide by zero.
    #[error("scenario `{0}` has no stages")]
    NoStages(String),
    /// The optimal path length disagrees with the stage count.
    #[error("scenario `{scenario}`: optimal path lists {path_len} cards for {stage_count} stages")]
    PathLengthMismatch {
        /// Scenario id.
        scenario: String,
        /// Cards in the declared optimal path.
        path_len: usize,
        /// Stages in the scenario.
        stage_count: usize,
    },
    /// A stage names no optimal card in either the plural or legacy singular field.
    #[error("scenario `{scenario}` stage `{stage}` names no optimal card")]
    MissingOptimalCard {
        /// Scenario id.
        scenario: String,
        /// Stage id.
        stage: String,
    },
    /// The scenario carries neither canonical nor legacy feedback text.
    #[error("scenario `{0}` defines no feedback text in either format")]
    MissingFeedback(String),
    /// The catalog holds no worlds at all.
    #[error("catalog contains no worlds")]
    Empty,
}

/// Failure of a game operation.
///
/// The variants cover both lookup problems (unknown ids, locked content)
/// and sequencing problems (acting without an active scenario, placing
/// onto an occupied slot). Operations that would previously have relied
/// on the caller to pre-check now report these directly.
#[derive(Debug, Error)]
pub enum ClashError {
    /// No world with this id exists in the catalog.
    #[error("unknown world `{0}`")]
    UnknownWorld(String),
    /// No scenario with this id exists in the catalog.
    #[error("unknown scenario `{0}`")]
    UnknownScenario(String),
    /// No card with this id exists in the card table.
    #[error("unknown card `{0}`")]
    UnknownCard(String),
    /// The card exists but the scenario does not deal it.
    #[error("card `{card}` is not available in scenario `{scenario}`")]
    CardNotAvailable {
        /// Card id.
        card: String,
        /// Scenario id.
        scenario: String,
    },
    /// The world has not been unlocked yet.
    #[error("world `{0}` is still locked")]
    WorldLocked(String),
    /// The scenario's predecessor has not been passed yet.
    #[error("scenario `{0}` is still locked")]
    ScenarioLocked(String),
    /// The operation needs an in-progress scenario and none is active.
    #[error("no scenario is in progress")]
    NoActiveScenario,
    /// A stage index fell outside the scenario's stage list.
    #[error("stage index {index} out of range for {stage_count} stages")]
    InvalidStage {
        /// Index the caller supplied.
        index: usize,
        /// Stages the scenario actually has.
        stage_count: usize,
    },
    /// The target stage already holds a card.
    #[error("stage {0} already holds a card")]
    SlotOccupied(usize),
    /// The target stage holds no card to remove.
    #[error("stage {0} is already empty")]
    SlotEmpty(usize),
    /// Placement was requested with no card selected.
    #[error("no card is selected")]
    NothingSelected,
    /// Submission was attempted while stages were still empty.
    #[error("cannot submit with empty stages at {0:?}")]
    IncompleteSolution(Vec<usize>),
    /// All hints for this attempt have been spent.
    #[error("hint limit reached")]
    HintLimit,
    /// Catalog content failed to load or validate.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The progress store could not read or write its backing file.
    #[error("progress store I/O failure: {0}")]
    Store(#[from] std::io::Error),
    /// The saved progress blob could not be encoded or decoded.
    #[error("progress blob failed to (de)serialize: {0}")]
    Save(#[from] serde_json::Error),
}

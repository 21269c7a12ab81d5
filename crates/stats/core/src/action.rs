//! Scored actions and the counter each one lands on.
//!
//! A scored action is a `(category, result)` pair. Not every pair is legal:
//! attack, block and service count their best outcome as a *point*, while
//! defense, reception and set count it as a *perfect*. [`CounterSlot`] is the
//! typed lookup table that turns a legal pair into the raw counter it
//! increments, so no caller ever assembles a counter name from strings.

/// One of the six volleyball action categories.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionCategory {
    Attack,
    Block,
    Service,
    Defense,
    Reception,
    Set,
}

impl ActionCategory {
    /// All categories in canonical order.
    pub const ALL: [ActionCategory; 6] = [
        ActionCategory::Attack,
        ActionCategory::Block,
        ActionCategory::Service,
        ActionCategory::Defense,
        ActionCategory::Reception,
        ActionCategory::Set,
    ];

    /// The result that counts as success for this category.
    pub const fn best_result(self) -> ActionResult {
        match self {
            Self::Attack | Self::Block | Self::Service => ActionResult::Point,
            Self::Defense | Self::Reception | Self::Set => ActionResult::Perfect,
        }
    }

    /// True for the categories whose best outcome is a point.
    pub const fn scores_points(self) -> bool {
        matches!(self.best_result(), ActionResult::Point)
    }

    /// Position of this category in [`ActionCategory::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Outcome reported for a single action.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionResult {
    #[strum(to_string = "point", serialize = "points")]
    Point,
    #[strum(to_string = "perfect", serialize = "perfects")]
    Perfect,
    #[strum(to_string = "neutral", serialize = "neutrals")]
    Neutral,
    #[strum(to_string = "error", serialize = "errors")]
    Error,
}

/// Which of the three raw counters of a category an action lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Best,
    Neutral,
    Error,
}

/// Returns false for the combinations that cannot happen on court.
///
/// `perfect` is invalid for attack/block/service and `point` is invalid for
/// defense/reception/set. `neutral` and `error` are valid everywhere.
pub const fn valid_pair(category: ActionCategory, result: ActionResult) -> bool {
    match result {
        ActionResult::Point => category.scores_points(),
        ActionResult::Perfect => !category.scores_points(),
        ActionResult::Neutral | ActionResult::Error => true,
    }
}

/// Address of one raw counter inside a statistics shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterSlot {
    pub category: ActionCategory,
    pub outcome: Outcome,
}

impl CounterSlot {
    pub const fn new(category: ActionCategory, outcome: Outcome) -> Self {
        Self { category, outcome }
    }

    /// Maps a scored action to its counter, or `None` when the pair is invalid.
    pub const fn for_action(category: ActionCategory, result: ActionResult) -> Option<Self> {
        if !valid_pair(category, result) {
            return None;
        }
        let outcome = match result {
            ActionResult::Point | ActionResult::Perfect => Outcome::Best,
            ActionResult::Neutral => Outcome::Neutral,
            ActionResult::Error => Outcome::Error,
        };
        Some(Self::new(category, outcome))
    }
}

impl core::fmt::Display for CounterSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let suffix = match self.outcome {
            Outcome::Best if self.category.scores_points() => "points",
            Outcome::Best => "perfects",
            Outcome::Neutral => "neutrals",
            Outcome::Error => "errors",
        };
        write!(f, "{}_{}", self.category, suffix)
    }
}

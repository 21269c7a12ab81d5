//! The statistics shape shared by games, teams and players.
//!
//! Every entity carries the same shape: six categories with a best/neutral/error
//! raw counter each, a derived per-category total and effectiveness, and a set
//! of cross-category aggregates. Only the raw counters are ever written by an
//! action; everything else is produced by [`recompute`].
//!
//! # Invariants
//!
//! For a shape returned by [`recompute`]:
//! - `line.total == line.best + line.neutrals + line.errors` for each category
//! - `line.effectiveness == round(best / total, 2)`, or `0.00` when total is 0
//! - `totals.points` sums the best counters of attack, block and service
//! - `totals.perfects` sums the best counters of defense, reception and set
//! - `totals.actions == points + perfects + neutrals + errors`
//! - `totals.effectiveness == round((points + perfects) / actions, 2)`

mod effectiveness;

pub use effectiveness::Effectiveness;

use crate::action::{ActionCategory, CounterSlot, Outcome};

/// The three directly-written counters of one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawCounts {
    pub best: u64,
    pub neutrals: u64,
    pub errors: u64,
}

impl RawCounts {
    pub const fn new(best: u64, neutrals: u64, errors: u64) -> Self {
        Self {
            best,
            neutrals,
            errors,
        }
    }
}

/// Raw counters for all six categories, indexed by [`ActionCategory::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawCounters([RawCounts; 6]);

impl RawCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: ActionCategory) -> RawCounts {
        self.0[category.index()]
    }

    pub fn set(&mut self, category: ActionCategory, counts: RawCounts) {
        self.0[category.index()] = counts;
    }

    /// Builder-style variant of [`RawCounters::set`].
    #[must_use]
    pub fn with(mut self, category: ActionCategory, counts: RawCounts) -> Self {
        self.set(category, counts);
        self
    }
}

/// Raw and derived values for a single category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CategoryLine {
    /// Points for attack/block/service, perfects for defense/reception/set.
    pub best: u64,
    pub neutrals: u64,
    pub errors: u64,
    pub total: u64,
    pub effectiveness: Effectiveness,
}

impl CategoryLine {
    fn from_raw(raw: RawCounts) -> Self {
        let total = raw.best + raw.neutrals + raw.errors;
        Self {
            best: raw.best,
            neutrals: raw.neutrals,
            errors: raw.errors,
            total,
            effectiveness: Effectiveness::ratio(raw.best, total),
        }
    }

    pub const fn raw(&self) -> RawCounts {
        RawCounts::new(self.best, self.neutrals, self.errors)
    }

    fn counter_mut(&mut self, outcome: Outcome) -> &mut u64 {
        match outcome {
            Outcome::Best => &mut self.best,
            Outcome::Neutral => &mut self.neutrals,
            Outcome::Error => &mut self.errors,
        }
    }

    fn counter(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Best => self.best,
            Outcome::Neutral => self.neutrals,
            Outcome::Error => self.errors,
        }
    }
}

/// Cross-category aggregates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Totals {
    pub points: u64,
    pub perfects: u64,
    pub neutrals: u64,
    pub errors: u64,
    pub actions: u64,
    pub effectiveness: Effectiveness,
}

/// Complete statistics shape of one entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Statistics {
    pub attack: CategoryLine,
    pub block: CategoryLine,
    pub service: CategoryLine,
    pub defense: CategoryLine,
    pub reception: CategoryLine,
    pub set: CategoryLine,
    pub totals: Totals,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self, category: ActionCategory) -> &CategoryLine {
        match category {
            ActionCategory::Attack => &self.attack,
            ActionCategory::Block => &self.block,
            ActionCategory::Service => &self.service,
            ActionCategory::Defense => &self.defense,
            ActionCategory::Reception => &self.reception,
            ActionCategory::Set => &self.set,
        }
    }

    fn line_mut(&mut self, category: ActionCategory) -> &mut CategoryLine {
        match category {
            ActionCategory::Attack => &mut self.attack,
            ActionCategory::Block => &mut self.block,
            ActionCategory::Service => &mut self.service,
            ActionCategory::Defense => &mut self.defense,
            ActionCategory::Reception => &mut self.reception,
            ActionCategory::Set => &mut self.set,
        }
    }

    /// Current value of one raw counter.
    pub fn counter(&self, slot: CounterSlot) -> u64 {
        self.line(slot.category).counter(slot.outcome)
    }

    /// Adds `delta` to one raw counter and returns the new value.
    ///
    /// Derived fields are left untouched: the shape is stale until the next
    /// [`recompute`].
    pub fn increment(&mut self, slot: CounterSlot, delta: u64) -> u64 {
        let counter = self.line_mut(slot.category).counter_mut(slot.outcome);
        *counter += delta;
        *counter
    }

    /// Extracts the raw counters, ignoring every derived field.
    pub fn raw(&self) -> RawCounters {
        let mut raw = RawCounters::new();
        for category in ActionCategory::ALL {
            raw.set(category, self.line(category).raw());
        }
        raw
    }

    /// Shape re-derived from this shape's own raw counters.
    #[must_use]
    pub fn recomputed(&self) -> Self {
        recompute(&self.raw())
    }

    /// Copies every derived field of `derived` into this shape, keeping this
    /// shape's raw counters.
    pub fn adopt_derived(&mut self, derived: &Statistics) {
        for category in ActionCategory::ALL {
            let source = derived.line(category);
            let line = self.line_mut(category);
            line.total = source.total;
            line.effectiveness = source.effectiveness;
        }
        self.totals = derived.totals;
    }

    /// True when every derived field agrees with the raw counters.
    pub fn is_consistent(&self) -> bool {
        *self == self.recomputed()
    }
}

/// Derives a complete, internally consistent statistics shape from raw counters.
///
/// Pure and total: the same input always produces the same output and a
/// division by zero yields `0.00`.
pub fn recompute(raw: &RawCounters) -> Statistics {
    let mut stats = Statistics::new();
    let mut totals = Totals::default();

    for category in ActionCategory::ALL {
        let line = CategoryLine::from_raw(raw.get(category));
        if category.scores_points() {
            totals.points += line.best;
        } else {
            totals.perfects += line.best;
        }
        totals.neutrals += line.neutrals;
        totals.errors += line.errors;
        *stats.line_mut(category) = line;
    }

    totals.actions = totals.points + totals.perfects + totals.neutrals + totals.errors;
    totals.effectiveness = Effectiveness::ratio(totals.points + totals.perfects, totals.actions);
    stats.totals = totals;
    stats
}

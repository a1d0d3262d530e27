use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a bracket schedule violates its structural invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule has no brackets at all.
    #[error("schedule '{schedule}' has no brackets")]
    Empty { schedule: String },

    /// The last bracket has a finite upper bound, so income above it is untaxed.
    #[error("schedule '{schedule}' must end with an unbounded bracket")]
    MissingUnboundedBracket { schedule: String },

    /// An unbounded bracket appears before the end of the schedule.
    #[error("schedule '{schedule}' has an unbounded bracket at position {index} before the end")]
    UnboundedBeforeEnd { schedule: String, index: usize },

    /// Upper bounds must be positive and strictly increasing.
    #[error(
        "schedule '{schedule}' bracket {index} has upper bound {bound}, which must exceed {previous}"
    )]
    NonIncreasingBound {
        schedule: String,
        index: usize,
        bound: Decimal,
        previous: Decimal,
    },

    /// Marginal rates are fractions in `[0, 1)`.
    #[error("schedule '{schedule}' bracket {index} has rate {rate}, expected a fraction in [0, 1)")]
    RateOutOfRange {
        schedule: String,
        index: usize,
        rate: Decimal,
    },
}

/// One slice of a progressive schedule.
///
/// `upper_bound` of `None` means the bracket applies to all remaining income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub rate: Decimal,
    pub upper_bound: Option<Decimal>,
}

impl Bracket {
    pub const fn bounded(
        rate: Decimal,
        upper_bound: Decimal,
    ) -> Self {
        Self {
            rate,
            upper_bound: Some(upper_bound),
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            rate,
            upper_bound: None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.upper_bound.is_none()
    }
}

/// An ordered, validated progressive bracket schedule.
///
/// Brackets are stored in ascending bound order and the final bracket is
/// always unbounded. The only way to obtain a schedule is through
/// [`BracketSchedule::new`], so every instance upholds those invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketSchedule {
    name: String,
    brackets: Vec<Bracket>,
}

impl BracketSchedule {
    /// Validates `brackets` and builds a named schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the list is empty, does not end with an
    /// unbounded bracket, has an unbounded bracket elsewhere, has bounds that
    /// are not strictly increasing, or has a rate outside `[0, 1)`.
    pub fn new(
        name: impl Into<String>,
        brackets: Vec<Bracket>,
    ) -> Result<Self, ScheduleError> {
        let name = name.into();
        validate(&name, &brackets)?;
        Ok(Self { name, brackets })
    }

    /// Builds a schedule from tables that are known to be well formed.
    pub(crate) fn from_trusted(
        name: &str,
        brackets: Vec<Bracket>,
    ) -> Self {
        debug_assert!(validate(name, &brackets).is_ok(), "invalid built-in schedule {name}");
        Self {
            name: name.to_string(),
            brackets,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }
}

fn validate(
    name: &str,
    brackets: &[Bracket],
) -> Result<(), ScheduleError> {
    let last = brackets.len().checked_sub(1).ok_or_else(|| ScheduleError::Empty {
        schedule: name.to_string(),
    })?;

    let mut previous = Decimal::ZERO;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate >= Decimal::ONE {
            return Err(ScheduleError::RateOutOfRange {
                schedule: name.to_string(),
                index,
                rate: bracket.rate,
            });
        }

        match bracket.upper_bound {
            None if index != last => {
                return Err(ScheduleError::UnboundedBeforeEnd {
                    schedule: name.to_string(),
                    index,
                });
            }
            None => {}
            Some(_) if index == last => {
                return Err(ScheduleError::MissingUnboundedBracket {
                    schedule: name.to_string(),
                });
            }
            Some(bound) => {
                if bound <= previous {
                    return Err(ScheduleError::NonIncreasingBound {
                        schedule: name.to_string(),
                        index,
                        bound,
                        previous,
                    });
                }
                previous = bound;
            }
        }
    }

    Ok(())
}

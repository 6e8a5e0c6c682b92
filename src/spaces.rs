//! # Spaces
//!
//! Minimal descriptions of the observation and action spaces of an
//! environment, bundled into an [`EnvSpec`]. Components take an `EnvSpec` at
//! construction to derive their dimensions and, for the action space, the
//! per-dimension bounds used for clipping.

use {
    serde::{
        Serialize,
        Deserialize,
    },
    std::ops::RangeInclusive,
};


/// The shape of a single observation or action.
///
/// A [`Space::Box`] is a rank-1 continuous space with one inclusive range per
/// dimension; the flat dimension is the number of ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Space {
    Box(Vec<RangeInclusive<f64>>),
    Discrete(usize),
}
impl Space {
    /// A box with the same `low..=high` bounds in every dimension.
    pub fn uniform_box(
        low: f64,
        high: f64,
        dim: usize,
    ) -> Self {
        Space::Box(vec![low..=high; dim])
    }

    /// The length of the flattened vector representation.
    pub fn flat_dim(&self) -> usize {
        match self {
            Space::Box(ranges) => ranges.len(),
            Space::Discrete(_) => 1,
        }
    }

    pub fn is_continuous(&self) -> bool {
        matches!(self, Space::Box(_))
    }

    /// Whether every bound is finite. Only meaningful for continuous spaces.
    pub fn is_bounded(&self) -> bool {
        match self {
            Space::Box(ranges) => ranges
                .iter()
                .all(|r| r.start().is_finite() && r.end().is_finite()),
            Space::Discrete(_) => false,
        }
    }

    /// The `(low, high)` bound vectors of a continuous space.
    pub fn bounds(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        match self {
            Space::Box(ranges) => Some((
                ranges.iter().map(|r| *r.start()).collect(),
                ranges.iter().map(|r| *r.end()).collect(),
            )),
            Space::Discrete(_) => None,
        }
    }
}


/// Observation and action space description of an environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvSpec {
    pub observation_space: Space,
    pub action_space: Space,
}
impl EnvSpec {
    pub fn new(
        observation_space: Space,
        action_space: Space,
    ) -> Self {
        Self {
            observation_space,
            action_space,
        }
    }

    pub fn obs_dim(&self) -> usize {
        self.observation_space.flat_dim()
    }

    pub fn action_dim(&self) -> usize {
        self.action_space.flat_dim()
    }
}

//! Criteria, their fixed AHP weights and benefit/cost polarity.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// Number of derived decision criteria.
pub const CRITERIA_COUNT: usize = 5;

/// One of the five derived decision criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criterion {
    /// Screen exposure: mean of daily screen time and social media time.
    C1,
    /// Negativity ratio of social interactions.
    C2,
    /// Sleep hours.
    C3,
    /// Physical activity minutes.
    C4,
    /// Distress composite of anxiety, stress and inverted mood.
    C5,
}

/// Whether a higher criterion value is preferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Benefit,
    Cost,
}

impl Polarity {
    /// Returns the display label for this polarity.
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Benefit => "Benefit",
            Polarity::Cost => "Cost",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// AHP-derived weight per criterion, in [`Criterion::ALL`] order. Sums to 1.
pub const CRITERIA_WEIGHTS: [f64; CRITERIA_COUNT] = [0.18, 0.32, 0.11, 0.07, 0.32];

impl Criterion {
    /// All criteria in column order.
    pub const ALL: [Criterion; CRITERIA_COUNT] = [
        Criterion::C1,
        Criterion::C2,
        Criterion::C3,
        Criterion::C4,
        Criterion::C5,
    ];

    /// Column position of this criterion.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Fixed weight of this criterion.
    pub const fn weight(&self) -> f64 {
        CRITERIA_WEIGHTS[self.index()]
    }

    /// Fixed polarity of this criterion.
    pub const fn polarity(&self) -> Polarity {
        match self {
            Criterion::C3 | Criterion::C4 => Polarity::Benefit,
            Criterion::C1 | Criterion::C2 | Criterion::C5 => Polarity::Cost,
        }
    }

    /// Returns true for benefit criteria.
    pub const fn is_benefit(&self) -> bool {
        matches!(self.polarity(), Polarity::Benefit)
    }

    /// Short label ("C1".."C5").
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::C1 => "C1",
            Criterion::C2 => "C2",
            Criterion::C3 => "C3",
            Criterion::C4 => "C4",
            Criterion::C5 => "C5",
        }
    }

    /// Human-readable name.
    pub fn description(&self) -> &'static str {
        match self {
            Criterion::C1 => "Screen exposure",
            Criterion::C2 => "Negative interaction ratio",
            Criterion::C3 => "Sleep hours",
            Criterion::C4 => "Physical activity",
            Criterion::C5 => "Distress composite",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per criterion.
///
/// Used for every row of every matrix in the pipeline (criteria, normalized,
/// weighted) and for the ideal points. Serializes as a `{"C1": .., ..}` map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CriteriaVector([f64; CRITERIA_COUNT]);

impl CriteriaVector {
    pub const ZERO: Self = Self([0.0; CRITERIA_COUNT]);

    /// Wraps values given in [`Criterion::ALL`] order.
    pub fn new(values: [f64; CRITERIA_COUNT]) -> Self {
        Self(values)
    }

    /// Builds a vector by evaluating `f` for each criterion.
    pub fn from_fn(mut f: impl FnMut(Criterion) -> f64) -> Self {
        let mut values = [0.0; CRITERIA_COUNT];
        for criterion in Criterion::ALL {
            values[criterion.index()] = f(criterion);
        }
        Self(values)
    }

    /// Returns the value for a criterion.
    pub fn get(&self, criterion: Criterion) -> f64 {
        self.0[criterion.index()]
    }

    /// Values in [`Criterion::ALL`] order.
    pub fn values(&self) -> &[f64; CRITERIA_COUNT] {
        &self.0
    }

    /// Iterates `(criterion, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Euclidean distance to another vector.
    pub fn distance_to(&self, other: &CriteriaVector) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl Index<Criterion> for CriteriaVector {
    type Output = f64;

    fn index(&self, criterion: Criterion) -> &f64 {
        &self.0[criterion.index()]
    }
}

impl Serialize for CriteriaVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CRITERIA_COUNT))?;
        for (criterion, value) in self.iter() {
            map.serialize_entry(criterion.label(), &value)?;
        }
        map.end()
    }
}

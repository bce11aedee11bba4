//! Tagged metric values and their running totals.

use std::fmt;

/// A single value supplied for a metric in one update.
///
/// Devices report whatever they find meaningful, so a value may be a number,
/// a piece of text or explicitly absent ([`MetricValue::Null`]). Only numeric
/// values participate in running totals; every value, `Null` included, is
/// recorded in history and becomes the latest value for its metric.
///
/// Conversions exist from the common primitive types, so callers rarely spell
/// out the variants:
///
/// ```
/// use exec_tracker::MetricValue;
///
/// assert_eq!(MetricValue::from(3), MetricValue::Int(3));
/// assert_eq!(MetricValue::from(0.5), MetricValue::Float(0.5));
/// assert_eq!(MetricValue::from("adjoint"), MetricValue::Text("adjoint".to_string()));
/// assert_eq!(MetricValue::from(None::<i64>), MetricValue::Null);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum MetricValue {
    /// No value was available for this metric in this update.
    Null,

    /// An integer value, e.g. an execution count.
    Int(i64),

    /// A floating-point value, e.g. a duration in seconds.
    Float(f64),

    /// A textual value. Recorded in history and latest but never summed.
    Text(String),
}

impl MetricValue {
    /// Whether this value participates in running totals.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for MetricValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for MetricValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        Self::Int(
            value
                .try_into()
                .expect("metric value exceeds i64 range - this indicates an unrealistic scenario"),
        )
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for MetricValue {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T> From<Option<T>> for MetricValue
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

/// The running sum of every numeric value supplied for one metric.
///
/// A total starts as [`MetricTotal::Int`] and stays integral as long as only
/// integer values are added. The first floating-point contribution promotes it
/// to [`MetricTotal::Float`] permanently.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum MetricTotal {
    /// Sum of exclusively integer contributions.
    Int(i64),

    /// Sum that has received at least one floating-point contribution.
    Float(f64),
}

impl MetricTotal {
    pub(crate) const ZERO: Self = Self::Int(0);

    /// Adds one numeric contribution to this total.
    ///
    /// Integer accumulation is checked; overflowing i64 panics because a total
    /// that large indicates an unrealistic scenario, not a condition to recover
    /// from.
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "float addition saturates to infinity instead of panicking"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer totals large enough to lose precision as f64 are unrealistic"
    )]
    pub(crate) fn add(&mut self, contribution: &MetricValue) {
        match (*self, contribution) {
            (Self::Int(total), MetricValue::Int(value)) => {
                *self = Self::Int(total.checked_add(*value).expect(
                    "metric total overflows i64 - this indicates an unrealistic scenario",
                ));
            }
            (Self::Int(total), MetricValue::Float(value)) => {
                *self = Self::Float(total as f64 + value);
            }
            (Self::Float(total), MetricValue::Int(value)) => {
                *self = Self::Float(total + *value as f64);
            }
            (Self::Float(total), MetricValue::Float(value)) => {
                *self = Self::Float(total + value);
            }
            (_, MetricValue::Null | MetricValue::Text(_)) => {}
        }
    }

    /// Folds another total into this one, with the same promotion rules as
    /// individual contributions.
    pub(crate) fn combine(&mut self, other: Self) {
        match other {
            Self::Int(value) => self.add(&MetricValue::Int(value)),
            Self::Float(value) => self.add(&MetricValue::Float(value)),
        }
    }

    /// The total as a floating-point number, whatever its current variant.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer totals large enough to lose precision as f64 are unrealistic"
    )]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(value) => *value as f64,
            Self::Float(value) => *value,
        }
    }
}

impl fmt::Display for MetricTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

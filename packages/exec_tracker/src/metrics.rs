//! Ordered metric collections passed to tracker updates.

use crate::MetricValue;

/// An ordered collection of named metric values for one tracker update.
///
/// This is how a device describes one unit of work: a handful of free-form
/// name/value pairs, in an order the caller chooses. The order matters - it
/// determines the order in which metric names first appear in totals, history
/// and the printed report.
///
/// # Examples
///
/// ```
/// use exec_tracker::{MetricValue, Metrics};
///
/// let metrics = Metrics::new()
///     .with("executions", 1)
///     .with("shots", 10)
///     .with("batch_len", None::<i64>);
///
/// let names: Vec<_> = metrics.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["executions", "shots", "batch_len"]);
/// assert_eq!(metrics.iter().count(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    entries: Vec<(String, MetricValue)>,
}

impl Metrics {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a metric, consuming and returning the collection for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Sets a metric in place: replaces the value of an existing name at its
    /// current position, or appends the pair if the name is not yet present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<MetricValue>) {
        let name = name.into();
        let value = value.into();

        if let Some((_, existing)) = self
            .entries
            .iter_mut()
            .find(|(entry_name, _)| *entry_name == name)
        {
            *existing = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Iterates over the name/value pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Whether the collection holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of name/value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, MetricValue)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (String, MetricValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, MetricValue)> for Metrics {
    fn extend<I: IntoIterator<Item = (String, MetricValue)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Metrics {
    type Item = (String, MetricValue);
    type IntoIter = std::vec::IntoIter<(String, MetricValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Metrics {
    type Item = (&'a str, &'a MetricValue);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, MetricValue)>,
        fn(&'a (String, MetricValue)) -> (&'a str, &'a MetricValue),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let project: fn(&'a (String, MetricValue)) -> (&'a str, &'a MetricValue) =
            |(name, value)| (name.as_str(), value);
        self.entries.iter().map(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_appends_in_call_order() {
        let metrics = Metrics::new().with("executions", 1).with("shots", 10);

        let pairs: Vec<_> = metrics.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("executions", &MetricValue::Int(1)),
                ("shots", &MetricValue::Int(10)),
            ]
        );
    }

    #[test]
    fn set_replaces_in_place_keeping_position() {
        let mut metrics = Metrics::new().with("executions", 1).with("time", 99.0);
        metrics.set("time", 0.25);

        let pairs: Vec<_> = metrics.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("executions", &MetricValue::Int(1)),
                ("time", &MetricValue::Float(0.25)),
            ]
        );
    }

    #[test]
    fn set_appends_unknown_name() {
        let mut metrics = Metrics::new().with("executions", 1);
        metrics.set("time", 0.25);

        assert_eq!(metrics.len(), 2);
        let names: Vec<_> = metrics.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["executions", "time"]);
    }

    #[test]
    fn collects_from_pair_iterator() {
        let metrics: Metrics = vec![
            ("executions".to_string(), MetricValue::Int(1)),
            ("shots".to_string(), MetricValue::Null),
        ]
        .into_iter()
        .collect();

        assert_eq!(metrics.len(), 2);
        let pairs: Vec<_> = (&metrics).into_iter().collect();
        assert_eq!(pairs.first(), Some(&("executions", &MetricValue::Int(1))));
    }

    #[test]
    fn empty_collection_reports_empty() {
        assert!(Metrics::new().is_empty());
        assert!(!Metrics::new().with("executions", 1).is_empty());
    }
}

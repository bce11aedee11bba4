//! Snapshots of accumulated tracking data.

use std::fmt;

use crate::accumulator::Accumulator;
use crate::metric_map::MetricMap;
use crate::{MetricTotal, MetricValue};

/// An owned snapshot of a tracker's totals, history and latest values.
///
/// A `Report` is produced under the tracker's lock and shares no state with
/// the live tracker, so it can be inspected, sent to other threads and merged
/// with other reports while tracking continues.
///
/// Its [`Display`](fmt::Display) form is the single report line the tracker
/// prints per recorded unit of work: `Totals: ` followed by each total in
/// insertion order as `name = value`, tab-terminated, then a newline. The
/// exact byte layout is a compatibility contract with consumers that parse
/// the output.
///
/// # Examples
///
/// ```
/// use exec_tracker::{Metrics, Tracker};
///
/// let tracker = Tracker::new();
/// tracker.update(Metrics::new().with("a", 1).with("b", 2));
///
/// let report = tracker.to_report();
/// assert_eq!(report.to_string(), "Totals: a = 1\tb = 2\t\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Report {
    totals: MetricMap<MetricTotal>,
    history: MetricMap<Vec<MetricValue>>,
    latest: MetricMap<MetricValue>,
}

impl Report {
    /// Creates an empty report.
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a report by copying accumulated data.
    pub(crate) fn from_accumulator(accumulator: &Accumulator) -> Self {
        Self {
            totals: accumulator.totals.clone(),
            history: accumulator.history.clone(),
            latest: accumulator.latest.clone(),
        }
    }

    /// The running total for one metric, if it has received a numeric value.
    #[must_use]
    pub fn total(&self, name: &str) -> Option<MetricTotal> {
        self.totals.get(name).copied()
    }

    /// Every value ever recorded for one metric, in call order.
    #[must_use]
    pub fn history(&self, name: &str) -> Option<&[MetricValue]> {
        self.history.get(name).map(Vec::as_slice)
    }

    /// The most recently recorded value for one metric, `Null` included.
    #[must_use]
    pub fn latest(&self, name: &str) -> Option<&MetricValue> {
        self.latest.get(name)
    }

    /// Iterates over the totals in the order metric names first received a
    /// numeric value.
    pub fn totals(&self) -> impl Iterator<Item = (&str, MetricTotal)> {
        self.totals.iter().map(|(name, total)| (name, *total))
    }

    /// Iterates over the per-metric histories in the order metric names were
    /// first recorded.
    pub fn histories(&self) -> impl Iterator<Item = (&str, &[MetricValue])> {
        self.history
            .iter()
            .map(|(name, values)| (name, values.as_slice()))
    }

    /// Iterates over the latest values in the order metric names were first
    /// recorded.
    pub fn latests(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.latest.iter()
    }

    /// Whether no update has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Merges two reports into a new report.
    ///
    /// Totals for the same metric name add (with the usual integer-to-float
    /// promotion), histories concatenate with `a`'s values first, and the
    /// latest value comes from `b` where both reports have one. Names from
    /// `a` keep their positions; names only in `b` follow in `b`'s order.
    #[must_use]
    pub fn merge(a: &Self, b: &Self) -> Self {
        let mut merged = a.clone();

        for (name, b_total) in b.totals() {
            merged
                .totals
                .get_or_insert_with(name, || MetricTotal::ZERO)
                .combine(b_total);
        }

        for (name, b_values) in b.histories() {
            merged
                .history
                .get_or_insert_with(name, Vec::new)
                .extend_from_slice(b_values);
        }

        for (name, b_latest) in b.latests() {
            merged.latest.insert(name.to_string(), b_latest.clone());
        }

        merged
    }

    /// Prints the report line to stdout.
    ///
    /// Prints exactly what the tracker prints when recording without a
    /// callback, the empty-bodied `Totals: ` line included.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Totals: ")?;
        for (name, total) in self.totals.iter() {
            write!(f, "{name} = {total}\t")?;
        }
        writeln!(f)
    }
}

//! The accumulated state behind a tracker.

use crate::metric_map::MetricMap;
use crate::{MetricTotal, MetricValue, Metrics};

/// Plain accumulated data: running totals, full history and latest values.
///
/// Mutated only through [`apply`](Self::apply) and [`clear`](Self::clear);
/// all locking and reporting concerns live in the tracker that owns this.
///
/// The three maps hold independent insertion orders. A metric first seen as
/// `Null` appears in history and latest immediately but only enters totals
/// once a numeric value arrives, so its position may differ between the maps.
#[derive(Clone, Debug, Default)]
pub(crate) struct Accumulator {
    pub(crate) totals: MetricMap<MetricTotal>,
    pub(crate) history: MetricMap<Vec<MetricValue>>,
    pub(crate) latest: MetricMap<MetricValue>,
}

impl Accumulator {
    /// Applies one update, pair by pair in the order given.
    ///
    /// Every value is appended to history and becomes the latest value for
    /// its name. Numeric values are additionally summed into totals, with the
    /// total lazily initialized to zero on the first numeric value.
    pub(crate) fn apply(&mut self, metrics: Metrics) {
        for (name, value) in metrics {
            self.history
                .get_or_insert_with(&name, Vec::new)
                .push(value.clone());

            if value.is_numeric() {
                self.totals
                    .get_or_insert_with(&name, || MetricTotal::ZERO)
                    .add(&value);
            }

            self.latest.insert(name, value);
        }
    }

    /// Discards all accumulated data.
    pub(crate) fn clear(&mut self) {
        self.totals.clear();
        self.history.clear();
        self.latest.clear();
    }

    /// Whether no update has been recorded since construction or the last clear.
    pub(crate) fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

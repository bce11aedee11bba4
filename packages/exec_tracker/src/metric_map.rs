//! Insertion-ordered map keyed by metric name.

/// A map from metric name to `V` that preserves first-insertion order.
///
/// The report format depends on metric order being the order in which names
/// were first recorded, so a hash map is not suitable. Metric cardinality is
/// tiny in all realistic usage (a handful of names per device), so entries
/// live in a `Vec` and lookup is a linear scan.
#[derive(Clone, Debug)]
pub(crate) struct MetricMap<V> {
    entries: Vec<(String, V)>,
}

// Not derived - the derive would require `V: Default`.
impl<V> Default for MetricMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MetricMap<V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    /// Returns the value for `name`, inserting `default()` first if the name
    /// is not yet present. A fresh name lands at the end of the order.
    pub(crate) fn get_or_insert_with(
        &mut self,
        name: &str,
        default: impl FnOnce() -> V,
    ) -> &mut V {
        if let Some(index) = self
            .entries
            .iter()
            .position(|(entry_name, _)| entry_name == name)
        {
            let (_, value) = self
                .entries
                .get_mut(index)
                .expect("position() returned an index within bounds");
            value
        } else {
            self.entries.push((name.to_string(), default()));
            let (_, value) = self
                .entries
                .last_mut()
                .expect("entry was pushed on the previous line");
            value
        }
    }

    /// Sets the value for `name`, replacing any existing value in place so the
    /// name keeps its original position in the order.
    pub(crate) fn insert(&mut self, name: String, value: V) {
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

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

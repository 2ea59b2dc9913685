use std::fmt;

/// A named predicate counted over the full filtered result set.
pub(crate) struct Counter<T> {
    label: String,
    predicate: Box<dyn Fn(&T) -> bool>,
}

impl<T> Counter<T> {
    pub(crate) fn new(label: String, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            label,
            predicate: Box::new(predicate),
        }
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    fn count(&self, records: &[T]) -> usize {
        records
            .iter()
            .filter(|record| (self.predicate)(*record))
            .count()
    }
}

impl<T> fmt::Debug for Counter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("label", &self.label)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateCount {
    pub label: String,
    pub count: usize,
}

/// Summary counters in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aggregates {
    counts: Vec<AggregateCount>,
}

impl Aggregates {
    pub(crate) fn zeroed<T>(counters: &[Counter<T>]) -> Self {
        Self {
            counts: counters
                .iter()
                .map(|counter| AggregateCount {
                    label: counter.label().to_owned(),
                    count: 0,
                })
                .collect(),
        }
    }

    pub(crate) fn tally<T>(counters: &[Counter<T>], records: &[T]) -> Self {
        Self {
            counts: counters
                .iter()
                .map(|counter| AggregateCount {
                    label: counter.label().to_owned(),
                    count: counter.count(records),
                })
                .collect(),
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AggregateCount> {
        self.counts.iter()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

//! Output sinks for functions whose only observable result is a stream
//!
//! `count_up_and_down`, `print_all_pairs`, `log_at_least` and `log_at_most`
//! write to an injected sink instead of the console, so tests can capture
//! the stream exactly.

/// One item written by a reference function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emission {
    /// A single value
    Value(u64),
    /// An ordered pair
    Pair(u64, u64),
}

/// Destination for emitted items
pub trait OutputSink {
    /// Accept one item, in emission order
    fn emit(&mut self, item: Emission);
}

/// Collects every emission in order
#[derive(Clone, Debug, Default)]
pub struct VecSink {
    items: Vec<Emission>,
}

impl VecSink {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in order
    pub fn items(&self) -> &[Emission] {
        &self.items
    }

    /// Emitted values only, pairs skipped
    pub fn values(&self) -> Vec<u64> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Emission::Value(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// Emitted pairs only
    pub fn pairs(&self) -> Vec<(u64, u64)> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Emission::Pair(i, j) => Some((*i, *j)),
                _ => None,
            })
            .collect()
    }

    /// Number of emissions collected
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing has been emitted
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop everything collected so far
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl OutputSink for VecSink {
    fn emit(&mut self, item: Emission) {
        self.items.push(item);
    }
}

/// Discards everything; used when timing so output cost stays out of the measurement
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    #[inline]
    fn emit(&mut self, _item: Emission) {}
}

/// Forwards emissions to `tracing` at info level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn emit(&mut self, item: Emission) {
        match item {
            Emission::Value(v) => tracing::info!("{}", v),
            Emission::Pair(i, j) => tracing::info!("{} {}", i, j),
        }
    }
}

/// Counts emissions without keeping them
#[derive(Clone, Copy, Debug, Default)]
pub struct CountingSink {
    pub count: u64,
}

impl OutputSink for CountingSink {
    #[inline]
    fn emit(&mut self, _item: Emission) {
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_filters() {
        let mut sink = VecSink::new();
        sink.emit(Emission::Value(1));
        sink.emit(Emission::Pair(0, 1));
        sink.emit(Emission::Value(2));

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.values(), vec![1, 2]);
        assert_eq!(sink.pairs(), vec![(0, 1)]);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_counting_sink() {
        let mut sink = CountingSink::default();
        for v in 0..7 {
            sink.emit(Emission::Value(v));
        }
        assert_eq!(sink.count, 7);
    }
}

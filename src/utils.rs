//! Utility functions and traits for inspecting `ChainedHashSet` chains

use std::fmt;

use crate::ChainedHashSet;

/// Extension trait reporting how elements are spread over the buckets
pub trait ChainStatistics {
    /// Returns the length of every bucket's chain, in bucket order
    fn chain_lengths(&self) -> Vec<usize>;

    /// Returns the length of the longest chain
    fn longest_chain(&self) -> usize {
        self.chain_lengths().into_iter().max().unwrap_or(0)
    }

    /// Returns the mean chain length over non-empty buckets, or 0.0 if every bucket is empty
    #[allow(clippy::cast_precision_loss)]
    fn average_chain_length(&self) -> f64 {
        let (occupied, nodes) = self
            .chain_lengths()
            .into_iter()
            .filter(|&len| len > 0)
            .fold((0_usize, 0_usize), |(occupied, nodes), len| {
                (occupied.saturating_add(1), nodes.saturating_add(len))
            });
        if occupied == 0 { 0.0 } else { nodes as f64 / occupied as f64 }
    }

    /// Collects a snapshot of the statistics
    fn snapshot(&self) -> ChainStats;
}

/// Point-in-time statistics of a `ChainedHashSet`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Number of buckets
    pub capacity: usize,
    /// Number of non-empty buckets
    pub usage: usize,
    /// Number of stored nodes
    pub total_nodes: usize,
    /// Share of non-empty buckets
    pub load_factor: f64,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Mean length of the non-empty chains
    pub average_chain_length: f64,
}

impl fmt::Display for ChainStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} buckets={}/{} load={:.2} longest={} avg={:.2}",
            self.total_nodes,
            self.usage,
            self.capacity,
            self.load_factor,
            self.longest_chain,
            self.average_chain_length
        )
    }
}

impl<E> ChainStatistics for ChainedHashSet<E> {
    fn chain_lengths(&self) -> Vec<usize> {
        self.buckets().map(Iterator::count).collect()
    }

    fn snapshot(&self) -> ChainStats {
        ChainStats {
            capacity: self.capacity(),
            usage: self.usage(),
            total_nodes: self.total_nodes(),
            load_factor: self.load_factor(),
            longest_chain: self.longest_chain(),
            average_chain_length: self.average_chain_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_lengths() {
        let mut set = ChainedHashSet::with_capacity(4);
        set.extend([1, 5, 9, 2]);

        assert_eq!(set.chain_lengths(), vec![0, 3, 1, 0]);
        assert_eq!(set.longest_chain(), 3);
        assert!((set.average_chain_length() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_statistics() {
        let set: ChainedHashSet<u32> = ChainedHashSet::new();
        assert_eq!(set.longest_chain(), 0);
        assert!(set.average_chain_length().abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot() {
        let set: ChainedHashSet<u32> = (0..10).collect();
        let stats = set.snapshot();

        assert_eq!(stats.total_nodes, 10);
        assert_eq!(stats.capacity, set.capacity());
        assert_eq!(stats.usage, set.usage());
        assert_eq!(set.chain_lengths().iter().sum::<usize>(), 10);
        assert!(stats.to_string().starts_with("nodes=10 "));
    }
}

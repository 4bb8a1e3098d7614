//! # Chainset
//!
//! A Rust implementation of a hash set using separate chaining.
//!
//! `ChainedHashSet` keeps an array of buckets, each holding a singly linked chain of the
//! elements that hashed to it. Elements are placed by their own [`ElementHash`] and compared
//! with `Eq`. New elements are prepended to their chain, equal elements are kept side by side,
//! and once the share of occupied buckets reaches the load factor threshold (75% by default)
//! the next insertion first rehashes everything into twice as many buckets.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainset::ChainedHashSet;
//!
//! // Create a set with four buckets
//! let mut set = ChainedHashSet::with_capacity(4);
//!
//! // 1 and 5 collide in bucket 1, so 5 becomes the head of the chain
//! set.add(1);
//! set.add(5);
//!
//! assert!(set.contains(&1));
//! assert!(!set.contains(&9));
//! assert_eq!(set.usage(), 1);
//! assert_eq!(set.total_nodes(), 2);
//! assert_eq!(set.bucket(1).unwrap().copied().collect::<Vec<_>>(), vec![5, 1]);
//! ```
//!
//! ## Other Element Types
//!
//! ```rust
//! use chainset::{ChainedHashSet, Hashed};
//!
//! // Strings bring their own hash
//! let words: ChainedHashSet<String> = ["apple", "banana"].iter().map(|w| w.to_string()).collect();
//! assert!(words.contains(&"apple".to_string()));
//!
//! // Anything implementing `Hash` can be stored through `Hashed`
//! let mut points = ChainedHashSet::new();
//! points.add(Hashed((3, 4)));
//! assert!(points.contains(&Hashed((3, 4))));
//! ```
//!
//! ## Absent Elements
//!
//! ```rust
//! use chainset::{ChainedHashSet, Error};
//!
//! let mut set: ChainedHashSet<i32> = ChainedHashSet::new();
//! assert!(matches!(set.try_add(None), Err(Error::InvalidArgument(_))));
//! assert_eq!(set.try_contains(Some(&1)), Ok(false));
//! ```

/// Singly linked chains stored in the buckets
mod chain;
/// Module implementing the separate-chaining hash set
mod chained_hash_set;
/// Human readable rendering of the bucket array
mod describe;
/// Hash codes carried by the elements themselves
mod element_hash;
/// Error types
mod error;
/// Utility functions and traits for the hash set
mod utils;

pub use chain::Chain;
pub use chained_hash_set::{
    ChainedHashSet, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR_THRESHOLD, RESIZE_FACTOR,
};
pub use element_hash::{ElementHash, HashCode, Hashed};
pub use error::{Error, Result};
pub use utils::{ChainStatistics, ChainStats};

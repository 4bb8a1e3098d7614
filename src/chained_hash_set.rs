use std::mem;

use crate::{
    chain::{self, Chain, Link, Node},
    element_hash::{ElementHash, HashCode},
    error::{Error, Result},
};

/// Number of buckets used when no usable capacity is requested
pub const DEFAULT_CAPACITY: usize = 4;

/// Default load factor threshold, as a percentage (0-100)
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: usize = 75;

/// Factor the bucket array grows by on every rehash
pub const RESIZE_FACTOR: usize = 2;

/// A hash set backed by an array of buckets, each holding a singly linked chain.
///
/// Elements are placed by their own [`ElementHash`] and compared with `Eq`. Colliding elements
/// are prepended to the chain of their bucket, and equal elements are not deduplicated, so the
/// set behaves as a multiset. Once the share of occupied buckets reaches the load factor
/// threshold, the next insertion first moves every node into a bucket array twice as long.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock to share it between threads.
#[derive(Debug)]
pub struct ChainedHashSet<E> {
    /// Bucket array, each slot holding the head of a chain
    buckets: Vec<Link<E>>,
    /// Number of buckets holding a non-empty chain
    usage: usize,
    /// Number of nodes stored across all chains
    total_nodes: usize,
    /// Cached `usage / buckets.len()`, refreshed after every structural change
    load_factor: f64,
    /// Threshold for load factor before rehashing - stored as percentage (0-100)
    load_factor_threshold: usize,
}

/// Allocates `len` empty buckets
fn empty_buckets<E>(len: usize) -> Vec<Link<E>> {
    let mut buckets = Vec::with_capacity(len);
    buckets.resize_with(len, || None);
    buckets
}

/// Maps a hash code onto one of `bucket_count` buckets as `|hash| mod bucket_count`.
///
/// The absolute value is taken in `u64`, so `HashCode::MIN` maps like every other hash.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
fn bucket_index(hash: HashCode, bucket_count: usize) -> usize {
    debug_assert_ne!(bucket_count, 0);
    // the remainder is below `bucket_count`, so narrowing back is lossless
    (hash.unsigned_abs() % bucket_count as u64) as usize
}

impl<E> Default for ChainedHashSet<E>
where
    E: ElementHash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Extend<E> for ChainedHashSet<E>
where
    E: ElementHash + Eq,
{
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for content in iter {
            self.add(content);
        }
    }
}

impl<E> FromIterator<E> for ChainedHashSet<E>
where
    E: ElementHash + Eq,
{
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<E> Drop for ChainedHashSet<E> {
    fn drop(&mut self) {
        for slot in &mut self.buckets {
            chain::unlink_all(slot);
        }
    }
}

impl<E> ChainedHashSet<E>
where
    E: ElementHash + Eq,
{
    /// Creates a new `ChainedHashSet` with the default number of buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new `ChainedHashSet` with `capacity` buckets.
    ///
    /// Zero, negative and unrepresentable requests fall back to [`DEFAULT_CAPACITY`].
    pub fn with_capacity<C: TryInto<usize>>(capacity: C) -> Self {
        let capacity = match capacity.try_into() {
            Ok(capacity) if capacity > 0 => capacity,
            _ => DEFAULT_CAPACITY,
        };

        Self {
            buckets: empty_buckets(capacity),
            usage: 0,
            total_nodes: 0,
            load_factor: 0.0,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
        }
    }

    /// Adds `content` to the set.
    ///
    /// If the load factor has reached the threshold, the set is rehashed before the element is
    /// placed. The new node becomes the head of its bucket's chain. Equal elements are kept as
    /// separate nodes.
    pub fn add(&mut self, content: E) {
        if self.threshold_reached() {
            self.rehash();
        }

        let index = bucket_index(content.element_hash(), self.buckets.len());
        log::trace!("adding element to bucket {index} of {}", self.buckets.len());
        self.place(index, Node::new(content));
        self.total_nodes = self.total_nodes.saturating_add(1);
        self.refresh_load_factor();
    }

    /// Adds an element that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `content` is `None`; the set is left untouched.
    pub fn try_add(&mut self, content: Option<E>) -> Result<()> {
        let content = content.ok_or(Error::InvalidArgument("cannot add an absent element"))?;
        self.add(content);
        Ok(())
    }

    /// Returns true if an element equal to `target` is stored in the set
    pub fn contains(&self, target: &E) -> bool {
        let index = bucket_index(target.element_hash(), self.buckets.len());
        self.bucket(index).is_some_and(|mut chain| chain.any(|content| content == target))
    }

    /// Looks up an element that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `target` is `None`.
    pub fn try_contains(&self, target: Option<&E>) -> Result<bool> {
        let target = target.ok_or(Error::InvalidArgument("cannot look up an absent element"))?;
        Ok(self.contains(target))
    }

    /// Moves every node into a new bucket array twice as long.
    ///
    /// Old buckets are swept in index order and each chain from head to tail; every node is
    /// prepended to its new bucket, so nodes that meet again in one bucket end up reversed.
    /// The number of stored nodes never changes.
    pub fn rehash(&mut self) {
        let new_len = self.buckets.len().saturating_mul(RESIZE_FACTOR);
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_len));
        let old_len = old_buckets.len();
        self.usage = 0;

        for mut cursor in old_buckets {
            while let Some(mut node) = cursor {
                cursor = node.next.take();
                let index = bucket_index(node.content.element_hash(), new_len);
                self.place(index, node);
            }
        }

        self.refresh_load_factor();
        log::debug!(
            "rehashed {} nodes from {old_len} to {new_len} buckets, usage {}",
            self.total_nodes,
            self.usage
        );
    }

    /// Head-inserts `node` into bucket `index`, counting the bucket if it was empty
    fn place(&mut self, index: usize, node: Box<Node<E>>) {
        let Some(slot) = self.buckets.get_mut(index) else { return };
        if chain::push_front(slot, node) {
            self.usage = self.usage.saturating_add(1);
        }
    }

    /// Whether the next insertion has to rehash first
    #[allow(clippy::cast_precision_loss)]
    fn threshold_reached(&self) -> bool {
        self.load_factor >= self.load_factor_threshold as f64 / 100.0
    }

    /// Recomputes the cached load factor from the current usage and bucket count
    #[allow(clippy::cast_precision_loss)]
    fn refresh_load_factor(&mut self) {
        self.load_factor = self.usage as f64 / self.buckets.len() as f64;
    }

    /// Provide a way to configure the load factor threshold
    pub fn set_load_factor_threshold(&mut self, threshold: usize) {
        self.load_factor_threshold = threshold.clamp(1, 100);
    }
}

impl<E> ChainedHashSet<E> {
    /// Returns the number of buckets holding at least one element
    #[must_use]
    pub fn usage(&self) -> usize {
        self.usage
    }

    /// Returns the number of nodes stored in the set, duplicates included
    #[must_use]
    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    /// Returns the number of elements in the set, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.total_nodes
    }

    /// Returns true if the set holds no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_nodes == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the share of occupied buckets, as of the last insertion or rehash
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the load factor threshold as a percentage
    #[must_use]
    pub fn load_factor_threshold(&self) -> usize {
        self.load_factor_threshold
    }

    /// Returns the chain stored in bucket `index`, or `None` past the last bucket
    #[must_use]
    pub fn bucket(&self, index: usize) -> Option<Chain<'_, E>> {
        self.buckets.get(index).map(Chain::new)
    }

    /// Returns an iterator over the chain of every bucket, in index order
    pub fn buckets(&self) -> impl ExactSizeIterator<Item = Chain<'_, E>> {
        self.buckets.iter().map(Chain::new)
    }

    /// Returns an iterator over all stored elements, bucket by bucket.
    ///
    /// The order depends on hashes and insertion history and is not part of the contract.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.buckets().flatten()
    }
}

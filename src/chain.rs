//! Singly linked chains stored in each bucket

use std::iter::FusedIterator;

/// Link to the next node of a chain, or the end of it
pub(crate) type Link<E> = Option<Box<Node<E>>>;

/// A node of a bucket chain, owning one element and the rest of the chain
#[derive(Debug)]
pub(crate) struct Node<E> {
    /// The stored element
    pub(crate) content: E,
    /// The next node in the same bucket
    pub(crate) next: Link<E>,
}

impl<E> Node<E> {
    /// Creates a detached node holding `content`
    pub(crate) fn new(content: E) -> Box<Self> {
        Box::new(Self { content, next: None })
    }
}

/// Makes `node` the new head of the chain in `slot`.
///
/// Returns `true` when the slot was empty before, i.e. the bucket just became occupied.
pub(crate) fn push_front<E>(slot: &mut Link<E>, mut node: Box<Node<E>>) -> bool {
    node.next = slot.take();
    let was_empty = node.next.is_none();
    *slot = Some(node);
    was_empty
}

/// Drops a chain node by node, so long chains never recurse through `Box` destructors
pub(crate) fn unlink_all<E>(slot: &mut Link<E>) {
    let mut cursor = slot.take();
    while let Some(mut node) = cursor {
        cursor = node.next.take();
    }
}

/// Iterator over the elements of one bucket chain, from head to tail
#[derive(Debug)]
pub struct Chain<'a, E> {
    /// The node to yield next
    cursor: Option<&'a Node<E>>,
}

impl<'a, E> Chain<'a, E> {
    /// Starts iterating at the head stored in `slot`
    pub(crate) fn new(slot: &'a Link<E>) -> Self {
        Self { cursor: slot.as_deref() }
    }
}

impl<'a, E> Iterator for Chain<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(&node.content)
    }
}

impl<E> Clone for Chain<'_, E> {
    fn clone(&self) -> Self {
        Self { cursor: self.cursor }
    }
}

impl<E> FusedIterator for Chain<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_front_reports_empty_slot() {
        let mut slot: Link<i32> = None;
        assert!(push_front(&mut slot, Node::new(1)));
        assert!(!push_front(&mut slot, Node::new(5)));
        assert!(!push_front(&mut slot, Node::new(9)));

        let items: Vec<_> = Chain::new(&slot).copied().collect();
        assert_eq!(items, vec![9, 5, 1]);
    }

    #[test]
    fn test_empty_chain() {
        let slot: Link<i32> = None;
        assert_eq!(Chain::new(&slot).count(), 0);
    }

    #[test]
    fn test_unlink_all_long_chain() {
        let mut slot: Link<u32> = None;
        for i in 0..200_000 {
            push_front(&mut slot, Node::new(i));
        }
        unlink_all(&mut slot);
        assert!(slot.is_none());
    }
}

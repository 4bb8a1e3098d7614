//! Diagnostic rendering of the bucket array

use std::fmt::{self, Display};

use crate::ChainedHashSet;

/// Marker printed for a bucket without a chain
const EMPTY_BUCKET: &str = "empty";

/// Separator between two nodes of a chain
const NODE_SEPARATOR: &str = " --> ";

impl<E: Display> Display for ChainedHashSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Underlying array usage / length: {}/{}", self.usage(), self.capacity())?;
        write!(f, "\nTotal number of nodes: {}", self.total_nodes())?;

        for (index, chain) in self.buckets().enumerate() {
            write!(f, "\n[ {index:2} ]: ")?;
            let mut nodes = chain.peekable();
            if nodes.peek().is_none() {
                f.write_str(EMPTY_BUCKET)?;
                continue;
            }
            for (position, content) in nodes.enumerate() {
                if position > 0 {
                    f.write_str(NODE_SEPARATOR)?;
                }
                write!(f, "{content}")?;
            }
        }

        Ok(())
    }
}

impl<E: Display> ChainedHashSet<E> {
    /// Renders usage, node count and every bucket's chain, one bucket per line
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::ChainedHashSet;

    #[test]
    fn test_describe_lists_every_bucket() {
        let mut set = ChainedHashSet::with_capacity(4);
        set.add(1);
        set.add(5);
        set.add(2);

        let expected = "Underlying array usage / length: 2/4\n\
                        Total number of nodes: 3\n\
                        [  0 ]: empty\n\
                        [  1 ]: 5 --> 1\n\
                        [  2 ]: 2\n\
                        [  3 ]: empty";
        assert_eq!(set.describe(), expected);
        assert_eq!(set.to_string(), expected);
    }

    #[test]
    fn test_describe_empty_set() {
        let set: ChainedHashSet<String> = ChainedHashSet::with_capacity(1);
        assert_eq!(
            set.describe(),
            "Underlying array usage / length: 0/1\nTotal number of nodes: 0\n[  0 ]: empty"
        );
    }
}

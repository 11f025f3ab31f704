use std::fmt;

use crate::annotations::Annotated;

/// A singly linked list node. `next` refers to the type being defined, which only works because
/// the `Box` gives the field a known size.
#[derive(Annotated)]
pub struct Node {
    pub value: i64,
    pub next: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: i64) -> Self {
        Self { value, next: None }
    }

    pub fn with_next(value: i64, next: Node) -> Self {
        Self {
            value,
            next: Some(Box::new(next)),
        }
    }

    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    /// The values of this node and every node after it.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        std::iter::successors(Some(self), |node| node.next()).map(|node| node.value)
    }

    pub fn len(&self) -> usize {
        self.values().count()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.values();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
        }
        for value in values {
            write!(f, " -> {value}")?;
        }
        Ok(())
    }
}

// Clone, PartialEq, Debug and Drop walk the chain in a loop; derived impls recurse once per node.
impl Clone for Node {
    fn clone(&self) -> Self {
        let mut rest = self.values().skip(1).collect::<Vec<_>>();
        let mut next = None;
        while let Some(value) = rest.pop() {
            next = Some(Box::new(Node { value, next }));
        }
        Node {
            value: self.value,
            next,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.values().eq(other.values())
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(&NodeValues(self)).finish()
    }
}

struct NodeValues<'a>(&'a Node);

impl fmt::Debug for NodeValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.values()).finish()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

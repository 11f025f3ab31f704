use tracing::trace;

/// A last-in-first-out stack over a single element type.
///
/// The element type is fixed when the stack is created, so `Stack<i64>` and `Stack<String>`
/// are different types and the compiler won't let you mix them up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        trace!(len = self.items.len(), "pushed onto stack");
    }

    /// Removes and returns the top of the stack, failing if there is nothing to remove.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let item = self.items.pop().ok_or(StackError::Empty)?;
        trace!(len = self.items.len(), "popped from stack");
        Ok(item)
    }

    /// Looks at the top of the stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("pop from empty stack")]
    Empty,
}

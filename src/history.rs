/// A mutating edit, recorded so it can be undone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    AddPoint,
    AddVertex,
    DrawLine,
    CreateSet,
}

/// Stack of edits, most recent last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    stack: Vec<Action>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.stack.push(action);
    }

    /// Take the most recent edit.
    ///
    /// Underflow is the caller's bug; check [`History::is_empty`] first.
    pub fn pop(&mut self) -> Result<Action, &'static str> {
        self.stack.pop().ok_or("history is empty")
    }

    pub fn last(&self) -> Option<Action> {
        self.stack.last().copied()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn actions(&self) -> &[Action] {
        &self.stack
    }

    /// Pop until the most recent edit is one of `boundary`, leaving that edit in place.
    ///
    /// Empties the stack if no boundary edit is present.
    pub fn remove_until(&mut self, boundary: &[Action]) {
        while let Some(last) = self.stack.last() {
            if boundary.contains(last) {
                break;
            }
            self.stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Action::*;

    fn history(actions: &[Action]) -> History {
        let mut h = History::new();
        actions.iter().for_each(|&a| h.push(a));
        h
    }

    #[test]
    fn push_pop() {
        let mut h = history(&[AddPoint, AddVertex]);
        assert_eq!(h.len(), 2);
        assert_eq!(h.last(), Some(AddVertex));
        assert_eq!(h.pop(), Ok(AddVertex));
        assert_eq!(h.pop(), Ok(AddPoint));
        assert!(h.is_empty());
        assert_eq!(h.pop(), Err("history is empty"));
    }

    #[test]
    fn remove_until_keeps_boundary() {
        let mut h = history(&[AddPoint, CreateSet, AddPoint, AddVertex, DrawLine, AddVertex]);
        h.remove_until(&[CreateSet, AddPoint]);
        assert_eq!(h.actions(), &[AddPoint, CreateSet, AddPoint]);

        // already on a boundary
        h.remove_until(&[AddPoint]);
        assert_eq!(h.actions(), &[AddPoint, CreateSet, AddPoint]);

        h.remove_until(&[CreateSet]);
        assert_eq!(h.actions(), &[AddPoint, CreateSet]);
    }

    #[test]
    fn remove_until_without_boundary_empties() {
        let mut h = history(&[AddVertex, DrawLine, AddVertex]);
        h.remove_until(&[CreateSet, AddPoint]);
        assert!(h.is_empty());

        // no-op on empty
        h.remove_until(&[CreateSet]);
        assert!(h.is_empty());
    }

    #[test]
    fn clear() {
        let mut h = history(&[AddPoint, CreateSet]);
        h.clear();
        assert_eq!(h.len(), 0);
        assert_eq!(h.last(), None);
    }
}

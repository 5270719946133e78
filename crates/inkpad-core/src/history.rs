//! Bounded undo/redo history of snapshots.

/// Maximum number of undo states to keep by default.
pub const MAX_UNDO_HISTORY: usize = 50;

/// Undo and redo stacks of full-state snapshots.
///
/// The caller owns the current state; the history only holds the states
/// around it and swaps them in and out.
#[derive(Debug, Clone)]
pub struct History<T> {
    undo_stack: Vec<T>,
    redo_stack: Vec<T>,
    limit: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(MAX_UNDO_HISTORY)
    }
}

impl<T> History<T> {
    /// Create an empty history keeping at most `limit` undo states.
    ///
    /// A limit of zero is treated as one.
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record `snapshot` as the state before a new change.
    ///
    /// Clears the redo stack and drops the oldest state past the limit.
    pub fn record(&mut self, snapshot: T) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.limit {
            let excess = self.undo_stack.len() - self.limit;
            self.undo_stack.drain(..excess);
        }
    }

    /// Step back: returns the state to restore, keeping `current` for redo.
    ///
    /// Hands `current` back as `Err` if there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Result<T, T> {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.redo_stack.push(current);
                Ok(snapshot)
            }
            None => Err(current),
        }
    }

    /// Step forward: returns the state to restore, keeping `current` for undo.
    pub fn redo(&mut self, current: T) -> Result<T, T> {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                self.undo_stack.push(current);
                Ok(snapshot)
            }
            None => Err(current),
        }
    }

    /// Drop every redo state.
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The most recent undo state, if any.
    pub fn last_undo(&self) -> Option<&T> {
        self.undo_stack.last()
    }
}

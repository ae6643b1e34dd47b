use crate::document::CanvasDocument;

/// One full-document snapshot, taken after a mutating action.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub snapshot: CanvasDocument,
}

/// Linear undo/redo log over canvas snapshots.
///
/// `past` always holds at least the initial empty document; its last entry is the
/// document currently shown. `future` is the redo stack, with its head at the end.
#[derive(Debug)]
pub struct History {
    past: Vec<HistoryEntry>,
    future: Vec<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Creates a history holding only the empty canvas
    pub fn new() -> Self {
        Self {
            past: vec![HistoryEntry {
                snapshot: CanvasDocument::new(),
            }],
            future: Vec::new(),
        }
    }

    /// Record `document` as the result of a new action and drop anything redoable
    pub fn commit(&mut self, document: CanvasDocument) {
        self.past.push(HistoryEntry { snapshot: document });
        self.future.clear();
    }

    /// Step back one entry. Returns false when only the initial snapshot is left.
    pub fn undo(&mut self) -> bool {
        if self.past.len() <= 1 {
            return false;
        }
        match self.past.pop() {
            Some(entry) => {
                self.future.push(entry);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone entry. Returns false when nothing was undone.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(entry) => {
                self.past.push(entry);
                true
            }
            None => false,
        }
    }

    /// Clearing is an ordinary undoable action, not a history reset
    pub fn clear(&mut self) {
        self.commit(CanvasDocument::new());
    }

    /// The document shown right now
    pub fn current(&self) -> &CanvasDocument {
        // `past` is never empty
        &self.past[self.past.len() - 1].snapshot
    }

    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of actions that can be undone
    pub fn undo_depth(&self) -> usize {
        self.past.len() - 1
    }

    /// Number of actions that can be redone
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

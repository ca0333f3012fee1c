use super::{Command, CommandError, CommandResult};
use crate::document::Document;
use log::debug;

/// Linear undo/redo history for one document.
///
/// All committed commands are kept in order; `applied` counts how many of
/// them, from the front, are currently applied to the document. Everything
/// past that point has been undone and is retained only as a pending redo
/// candidate. The history lives as long as its document and is never
/// persisted.
pub struct CommandHistory {
    /// Commands in the order they were committed
    commands: Vec<Command>,
    /// Number of commands currently applied to the document
    applied: usize,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            applied: 0,
        }
    }

    /// Record a command the caller has already applied to the document.
    ///
    /// Committing is not executing: the edit itself happened through
    /// [`Document`] before this call, and the history does not check that
    /// contract. If any commands are pending redo they are dropped first,
    /// since the document has diverged and they could no longer replay
    /// against it.
    pub fn commit(&mut self, command: Command) {
        if self.applied < self.commands.len() {
            debug!(
                "dropping {} stale redo entries",
                self.commands.len() - self.applied
            );
            self.commands.truncate(self.applied);
        }
        self.commands.push(command);
        self.applied = self.commands.len();
    }

    /// Returns true if there is an applied command that can be undone
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    /// Returns true if there is an undone command that can be redone
    pub fn can_redo(&self) -> bool {
        self.applied < self.commands.len()
    }

    /// Revert the most recently applied command.
    ///
    /// Does nothing when there is nothing to undo; the UI is expected to
    /// have disabled the control. Returns whether a command was reverted.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        if self.applied == 0 {
            return false;
        }
        self.applied -= 1;
        self.commands[self.applied].revert(document);
        true
    }

    /// Re-apply the most recently undone command.
    ///
    /// Does nothing when there is nothing to redo. Returns whether a
    /// command was applied.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        if self.applied == self.commands.len() {
            return false;
        }
        self.commands[self.applied].apply(document);
        self.applied += 1;
        true
    }

    /// Remove and return the most recently applied command *without*
    /// reverting it. Commands pending redo are kept.
    ///
    /// This is for coalescing: when each step of a gesture was committed
    /// separately, the caller can discard the previous entry and commit one
    /// command covering the whole gesture, since the document already holds
    /// the combined result. Calling this with no applied command is a
    /// programming error and fails rather than corrupting the history.
    pub fn discard(&mut self) -> CommandResult<Command> {
        if self.applied == 0 {
            return Err(CommandError::InvalidOperation(
                "discard with no applied command",
            ));
        }
        self.applied -= 1;
        Ok(self.commands.remove(self.applied))
    }

    /// Drop every entry and reset the cursor. The document is not touched.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.applied = 0;
    }

    /// Number of commands currently recorded, applied or not
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

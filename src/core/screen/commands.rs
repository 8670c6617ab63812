//=========================================================================
// Screen Commands
//=========================================================================
//
// Queue for navigation requests made from inside screen callbacks.
//
// Screens queue commands here during their update. The screen manager
// drains the queue as soon as the requesting screen's update returns;
// structural changes still wait for the next flush.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::{Screen, ScreenId};
use crate::core::transition::ScreenTransition;

//=== ScreenCommand =======================================================

/// A navigation request queued by a screen.
pub(crate) enum ScreenCommand {
    /// Register a new screen under a pre-allocated id.
    Add {
        id: ScreenId,
        screen: Box<dyn Screen>,
        transition: Option<ScreenTransition>,
    },

    /// Remove a screen (transition off if it has a transition).
    Remove(ScreenId),

    /// Remove every screen the manager owns.
    RemoveAll,

    /// Remove every screen, then register a new one.
    TransitionTo {
        id: ScreenId,
        screen: Box<dyn Screen>,
        transition: Option<ScreenTransition>,
    },

    /// Toggle whether a screen receives update and draw calls.
    SetActive(ScreenId, bool),
}

impl fmt::Debug for ScreenCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { id, screen, .. } => write!(f, "Add({}, {})", id, screen.name()),
            Self::Remove(id) => write!(f, "Remove({})", id),
            Self::RemoveAll => write!(f, "RemoveAll"),
            Self::TransitionTo { id, screen, .. } => {
                write!(f, "TransitionTo({}, {})", id, screen.name())
            }
            Self::SetActive(id, active) => write!(f, "SetActive({}, {})", id, active),
        }
    }
}

//=== ScreenCommands ======================================================

/// Command queue plus the id allocator shared by host and screens.
///
/// Ids are handed out when a command is queued so the requesting screen
/// can keep a handle to a screen that does not exist yet.
#[derive(Debug)]
pub(crate) struct ScreenCommands {
    queue: Vec<ScreenCommand>,
    next_id: u64,
}

impl ScreenCommands {
    pub(crate) fn new() -> Self {
        Self {
            queue: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns a fresh, never reused screen id.
    pub(crate) fn allocate_id(&mut self) -> ScreenId {
        let id = ScreenId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queues a command for the manager.
    pub(crate) fn push(&mut self, command: ScreenCommand) {
        self.queue.push(command);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Takes all queued commands, leaving the queue empty.
    pub(crate) fn take(&mut self) -> Vec<ScreenCommand> {
        std::mem::take(&mut self.queue)
    }
}

impl Default for ScreenCommands {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut commands = ScreenCommands::new();
        let a = commands.allocate_id();
        let b = commands.allocate_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn take_drains_in_fifo_order() {
        let mut commands = ScreenCommands::new();
        let id = commands.allocate_id();
        commands.push(ScreenCommand::Remove(id));
        commands.push(ScreenCommand::RemoveAll);

        let drained = commands.take();
        assert!(commands.is_empty());
        assert!(matches!(drained[0], ScreenCommand::Remove(x) if x == id));
        assert!(matches!(drained[1], ScreenCommand::RemoveAll));
    }

    #[test]
    fn debug_output_names_command() {
        let mut commands = ScreenCommands::new();
        let id = commands.allocate_id();
        let text = format!("{:?}", ScreenCommand::SetActive(id, false));
        assert_eq!(text, "SetActive(screen#1, false)");
    }
}

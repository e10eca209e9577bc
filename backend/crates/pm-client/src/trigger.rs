//! Continuations: what runs after a dialog finishes.
//!
//! Controllers never open other dialogs themselves. They hand back a
//! [`Command`] and the caller decides how to run it.

use pm_core::EditTab;

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditParameters {
    pub active_tab: EditTab,
}

impl EditParameters {
    pub fn tab(active_tab: EditTab) -> Self {
        Self { active_tab }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SprintAdd {
        trigger: Trigger,
        form_data: BTreeMap<String, String>,
    },
    SprintEdit {
        sprint_id: i64,
        trigger: Trigger,
        parameters: EditParameters,
    },
    /// Reload one tab of an open sprint dialog
    ReloadTab { sprint_id: i64, tab: EditTab },
    /// Reload the project backlog view
    ReloadBacklog { project_id: i64 },
}

/// Optional command to run once an operation completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trigger(Option<Box<Command>>);

impl Trigger {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn new(command: Command) -> Self {
        Self(Some(Box::new(command)))
    }

    pub fn command(&self) -> Option<&Command> {
        self.0.as_deref()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn fire(self) -> Option<Command> {
        self.0.map(|command| *command)
    }

    /// Like [`Trigger::fire`], but drops a command that would re-open the
    /// edit dialog of `sprint_id`.
    pub fn fire_unless_edit_of(self, sprint_id: i64) -> Option<Command> {
        match self.fire() {
            Some(Command::SprintEdit { sprint_id: id, .. }) if id == sprint_id => None,
            other => other,
        }
    }
}

impl From<Command> for Trigger {
    fn from(command: Command) -> Self {
        Self::new(command)
    }
}

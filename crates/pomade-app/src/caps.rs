// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

// Every list-view action is declared up front in a typed capability set.
// Hosts construct one per mount instead of passing optional callbacks and
// letting the view infer what exists at render time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Edit,
    Delete,
    ChangeStatus,
    ManageTags,
    ManageNotes,
    ManageConsent,
    ManageInvites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub change_status: bool,
    pub manage_tags: bool,
    pub manage_notes: bool,
    pub manage_consent: bool,
    pub manage_invites: bool,
}

impl Capabilities {
    pub const fn all() -> Self {
        Self {
            create: true,
            edit: true,
            delete: true,
            change_status: true,
            manage_tags: true,
            manage_notes: true,
            manage_consent: true,
            manage_invites: true,
        }
    }

    pub const fn read_only() -> Self {
        Self {
            create: false,
            edit: false,
            delete: false,
            change_status: false,
            manage_tags: false,
            manage_notes: false,
            manage_consent: false,
            manage_invites: false,
        }
    }

    pub const fn allows(self, action: Action) -> bool {
        match action {
            Action::Create => self.create,
            Action::Edit => self.edit,
            Action::Delete => self.delete,
            Action::ChangeStatus => self.change_status,
            Action::ManageTags => self.manage_tags,
            Action::ManageNotes => self.manage_notes,
            Action::ManageConsent => self.manage_consent,
            Action::ManageInvites => self.manage_invites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Capabilities};

    const ACTIONS: [Action; 8] = [
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::ChangeStatus,
        Action::ManageTags,
        Action::ManageNotes,
        Action::ManageConsent,
        Action::ManageInvites,
    ];

    #[test]
    fn all_allows_every_action() {
        let caps = Capabilities::all();
        for action in ACTIONS {
            assert!(caps.allows(action));
        }
    }

    #[test]
    fn read_only_allows_nothing() {
        let caps = Capabilities::read_only();
        for action in ACTIONS {
            assert!(!caps.allows(action));
        }
    }

    #[test]
    fn default_matches_read_only() {
        assert_eq!(Capabilities::default(), Capabilities::read_only());
    }

    #[test]
    fn partial_capability_set_gates_per_action() {
        let caps = Capabilities {
            edit: true,
            manage_tags: true,
            ..Capabilities::read_only()
        };
        assert!(caps.allows(Action::Edit));
        assert!(caps.allows(Action::ManageTags));
        assert!(!caps.allows(Action::Delete));
        assert!(!caps.allows(Action::ManageInvites));
    }
}

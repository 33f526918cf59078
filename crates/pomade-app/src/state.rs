// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::CustomerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Bookings,
    Customers,
    Team,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Bookings, Self::Customers, Self::Team];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bookings => "bookings",
            Self::Customers => "customers",
            Self::Team => "team",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub section: Section,
    pub profile_drawer: Option<CustomerId>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            section: Section::Bookings,
            profile_drawer: None,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextSection,
    PrevSection,
    OpenProfile(CustomerId),
    CloseProfile,
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SectionChanged(Section),
    ProfileOpened(CustomerId),
    ProfileClosed,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextSection => self.rotate_section(1),
            AppCommand::PrevSection => self.rotate_section(-1),
            AppCommand::OpenProfile(customer_id) => {
                self.profile_drawer = Some(customer_id.clone());
                vec![
                    AppEvent::ProfileOpened(customer_id),
                    self.set_status("profile open"),
                ]
            }
            AppCommand::CloseProfile => {
                self.profile_drawer = None;
                vec![AppEvent::ProfileClosed, self.set_status("profile closed")]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_section(&mut self, delta: isize) -> Vec<AppEvent> {
        let sections = Section::ALL;
        let current = sections
            .iter()
            .position(|section| *section == self.section)
            .unwrap_or(0) as isize;
        let len = sections.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.section = sections[next];
        vec![AppEvent::SectionChanged(self.section)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use pomade_app::{BookingStatus, CustomerId, EmployeeId, EmployeeStatus, RoleId, ServiceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastVisitWindow {
    Week,
    Month,
    Quarter,
    // A window string this build does not know: a real constraint that
    // matches no customer, never a pass-through.
    Unrecognized,
}

impl LastVisitWindow {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Unrecognized => "unrecognized",
        }
    }

    // "all" and "" are the neutral sentinel: no constraint at all.
    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "" | "all" => None,
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "quarter" => Some(Self::Quarter),
            _ => Some(Self::Unrecognized),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentFilter {
    Email,
    Sms,
    Both,
    None,
    Unrecognized,
}

impl ConsentFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Both => "both",
            Self::None => "none",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "" | "all" => Option::None,
            "email" => Some(Self::Email),
            "sms" => Some(Self::Sms),
            "both" => Some(Self::Both),
            "none" => Some(Self::None),
            _ => Some(Self::Unrecognized),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingCriteria {
    pub employee_id: Option<EmployeeId>,
    pub service_id: Option<ServiceId>,
    pub status: Option<BookingStatus>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub customer_id: Option<CustomerId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingCriteriaChange {
    Employee(Option<EmployeeId>),
    Service(Option<ServiceId>),
    Status(Option<BookingStatus>),
    DateFrom(Option<String>),
    DateTo(Option<String>),
    Customer(Option<CustomerId>),
}

impl BookingCriteria {
    pub fn apply(&mut self, change: BookingCriteriaChange) {
        match change {
            BookingCriteriaChange::Employee(value) => self.employee_id = value,
            BookingCriteriaChange::Service(value) => self.service_id = value,
            BookingCriteriaChange::Status(value) => self.status = value,
            BookingCriteriaChange::DateFrom(value) => self.date_from = normalize_text(value),
            BookingCriteriaChange::DateTo(value) => self.date_to = normalize_text(value),
            BookingCriteriaChange::Customer(value) => self.customer_id = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.employee_id.is_some())
            + usize::from(self.service_id.is_some())
            + usize::from(self.status.is_some())
            + usize::from(self.date_from.is_some())
            + usize::from(self.date_to.is_some())
            + usize::from(self.customer_id.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerCriteria {
    pub search: Option<String>,
    pub tags: Vec<String>,
    pub last_visit: Option<LastVisitWindow>,
    pub marketing_opt_in: Option<ConsentFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerCriteriaChange {
    Search(String),
    Tags(Vec<String>),
    ToggleTag(String),
    LastVisit(Option<LastVisitWindow>),
    Marketing(Option<ConsentFilter>),
}

impl CustomerCriteria {
    pub fn apply(&mut self, change: CustomerCriteriaChange) {
        match change {
            CustomerCriteriaChange::Search(value) => self.search = normalize_text(Some(value)),
            CustomerCriteriaChange::Tags(values) => self.tags = dedup_tags(values),
            CustomerCriteriaChange::ToggleTag(tag) => {
                if let Some(index) = self.tags.iter().position(|existing| *existing == tag) {
                    self.tags.remove(index);
                } else {
                    self.tags.push(tag);
                }
            }
            CustomerCriteriaChange::LastVisit(value) => self.last_visit = value,
            CustomerCriteriaChange::Marketing(value) => self.marketing_opt_in = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // A tags vector counts as one active filter however many tags it holds.
    pub fn active_count(&self) -> usize {
        usize::from(self.search.is_some())
            + usize::from(!self.tags.is_empty())
            + usize::from(self.last_visit.is_some())
            + usize::from(self.marketing_opt_in.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamCriteria {
    pub role_id: Option<RoleId>,
    pub status: Option<EmployeeStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamCriteriaChange {
    Role(Option<RoleId>),
    Status(Option<EmployeeStatus>),
    Search(String),
}

impl TeamCriteria {
    pub fn apply(&mut self, change: TeamCriteriaChange) {
        match change {
            TeamCriteriaChange::Role(value) => self.role_id = value,
            TeamCriteriaChange::Status(value) => self.status = value,
            TeamCriteriaChange::Search(value) => self.search = normalize_text(Some(value)),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.role_id.is_some())
            + usize::from(self.status.is_some())
            + usize::from(self.search.is_some())
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

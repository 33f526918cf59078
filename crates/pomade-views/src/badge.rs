// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use pomade_app::{BookingStatus, EmployeeStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Yellow,
    Blue,
    Purple,
    Green,
    Red,
    Slate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

pub const fn booking_status_badge(status: BookingStatus) -> Badge {
    match status {
        BookingStatus::Pending => Badge {
            label: "Pending",
            tone: BadgeTone::Yellow,
        },
        BookingStatus::Confirmed => Badge {
            label: "Confirmed",
            tone: BadgeTone::Blue,
        },
        BookingStatus::InProgress => Badge {
            label: "In Progress",
            tone: BadgeTone::Purple,
        },
        BookingStatus::Completed => Badge {
            label: "Completed",
            tone: BadgeTone::Green,
        },
        BookingStatus::Cancelled => Badge {
            label: "Cancelled",
            tone: BadgeTone::Red,
        },
        BookingStatus::NoShow => Badge {
            label: "No Show",
            tone: BadgeTone::Slate,
        },
        BookingStatus::Unknown => Badge {
            label: "Unknown",
            tone: BadgeTone::Slate,
        },
    }
}

pub const fn employee_status_badge(status: EmployeeStatus) -> Badge {
    match status {
        EmployeeStatus::Active => Badge {
            label: "Active",
            tone: BadgeTone::Green,
        },
        EmployeeStatus::Invited => Badge {
            label: "Invited",
            tone: BadgeTone::Yellow,
        },
        EmployeeStatus::Disabled => Badge {
            label: "Disabled",
            tone: BadgeTone::Red,
        },
        EmployeeStatus::Unknown => Badge {
            label: "Unknown",
            tone: BadgeTone::Slate,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{BadgeTone, booking_status_badge, employee_status_badge};
    use pomade_app::{BookingStatus, EmployeeStatus};

    #[test]
    fn booking_badges_cover_every_status() {
        for status in BookingStatus::ALL {
            assert!(!booking_status_badge(status).label.is_empty());
        }
        assert_eq!(
            booking_status_badge(BookingStatus::Confirmed).tone,
            BadgeTone::Blue
        );
        assert_eq!(
            booking_status_badge(BookingStatus::NoShow).tone,
            BadgeTone::Slate
        );
    }

    #[test]
    fn employee_badges_cover_every_status() {
        for status in EmployeeStatus::ALL {
            assert!(!employee_status_badge(status).label.is_empty());
        }
        assert_eq!(
            employee_status_badge(EmployeeStatus::Active).tone,
            BadgeTone::Green
        );
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use pomade_app::{Booking, Customer, Employee};
use time::macros::format_description;
use time::{Date, Duration, Month};

use crate::criteria::{
    BookingCriteria, ConsentFilter, CustomerCriteria, LastVisitWindow, TeamCriteria,
};

pub fn parse_iso_date(value: &str) -> Option<Date> {
    Date::parse(value, &format_description!("[year]-[month]-[day]")).ok()
}

pub fn filter_bookings(bookings: &[Booking], criteria: &BookingCriteria) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|booking| booking_passes(booking, criteria))
        .cloned()
        .collect()
}

pub fn booking_passes(booking: &Booking, criteria: &BookingCriteria) -> bool {
    if let Some(employee_id) = &criteria.employee_id {
        if booking.employee_id != *employee_id {
            return false;
        }
    }
    if let Some(service_id) = &criteria.service_id {
        if booking.service_id != *service_id {
            return false;
        }
    }
    if let Some(status) = criteria.status {
        if booking.status != status {
            return false;
        }
    }
    if let Some(customer_id) = &criteria.customer_id {
        if booking.customer_id != *customer_id {
            return false;
        }
    }

    if criteria.date_from.is_some() || criteria.date_to.is_some() {
        // Lexicographic compare on YYYY-MM-DD is numerically sound, but only
        // once both sides validate as dates. Malformed dates fail closed.
        if parse_iso_date(&booking.date).is_none() {
            return false;
        }
        if let Some(from) = &criteria.date_from {
            if parse_iso_date(from).is_none() || booking.date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(to) = &criteria.date_to {
            if parse_iso_date(to).is_none() || booking.date.as_str() > to.as_str() {
                return false;
            }
        }
    }

    true
}

pub fn filter_customers(
    customers: &[Customer],
    criteria: &CustomerCriteria,
    now: Date,
) -> Vec<Customer> {
    customers
        .iter()
        .filter(|customer| customer_passes(customer, criteria, now))
        .cloned()
        .collect()
}

pub fn customer_passes(customer: &Customer, criteria: &CustomerCriteria, now: Date) -> bool {
    if let Some(search) = &criteria.search {
        let needle = search.to_lowercase();
        let name_hit = customer.name.to_lowercase().contains(&needle);
        let email_hit = customer.email.to_lowercase().contains(&needle);
        // Phone stays raw: digits do not case-fold.
        let phone_hit = customer.phone.contains(&needle);
        if !(name_hit || email_hit || phone_hit) {
            return false;
        }
    }

    // OR within the tags field: one shared tag is enough.
    if !criteria.tags.is_empty()
        && !criteria
            .tags
            .iter()
            .any(|tag| customer.tags.iter().any(|owned| owned == tag))
    {
        return false;
    }

    match criteria.last_visit {
        None => {}
        Some(LastVisitWindow::Unrecognized) => return false,
        Some(window) => {
            let Some(raw) = &customer.last_booking_date else {
                return false;
            };
            let Some(last_visit) = parse_iso_date(raw) else {
                return false;
            };
            if last_visit < window_cutoff(window, now) {
                return false;
            }
        }
    }

    match criteria.marketing_opt_in {
        None => {}
        Some(ConsentFilter::Email) => {
            if !customer.marketing_consent.email {
                return false;
            }
        }
        Some(ConsentFilter::Sms) => {
            if !customer.marketing_consent.sms {
                return false;
            }
        }
        Some(ConsentFilter::Both) => {
            if !(customer.marketing_consent.email && customer.marketing_consent.sms) {
                return false;
            }
        }
        Some(ConsentFilter::None) => {
            if customer.marketing_consent.email || customer.marketing_consent.sms {
                return false;
            }
        }
        Some(ConsentFilter::Unrecognized) => return false,
    }

    true
}

pub fn filter_team(employees: &[Employee], criteria: &TeamCriteria) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| employee_passes(employee, criteria))
        .cloned()
        .collect()
}

pub fn employee_passes(employee: &Employee, criteria: &TeamCriteria) -> bool {
    if let Some(role_id) = &criteria.role_id {
        if employee.role_id != *role_id {
            return false;
        }
    }
    if let Some(status) = criteria.status {
        if employee.status != status {
            return false;
        }
    }
    if let Some(search) = &criteria.search {
        let needle = search.to_lowercase();
        if !employee.name.to_lowercase().contains(&needle)
            && !employee.email.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    true
}

fn window_cutoff(window: LastVisitWindow, now: Date) -> Date {
    match window {
        LastVisitWindow::Week => now - Duration::days(7),
        LastVisitWindow::Month => months_back(now, 1),
        LastVisitWindow::Quarter => months_back(now, 3),
        LastVisitWindow::Unrecognized => now,
    }
}

// Calendar-month arithmetic, clamping the day to the target month's length.
fn months_back(date: Date, months: i32) -> Date {
    let total = date.year() * 12 + date.month() as i32 - 1 - months;
    let year = total.div_euclid(12);
    let month = Month::try_from((total.rem_euclid(12) + 1) as u8).expect("month index in 1..=12");
    let mut day = date.day();
    loop {
        if let Ok(clamped) = Date::from_calendar_date(year, month, day) {
            return clamped;
        }
        day -= 1;
    }
}

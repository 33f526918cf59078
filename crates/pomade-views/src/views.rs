// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use pomade_app::{Booking, Customer, CustomerId};

pub const HISTORY_LIMIT: usize = 10;

// Unique tag union for building the tag-filter menu. Pure derived value,
// recomputed from the snapshot on every call.
pub fn all_tags(customers: &[Customer]) -> Vec<String> {
    let mut tags: Vec<String> = customers
        .iter()
        .flat_map(|customer| customer.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

// Profile-drawer history: this customer's bookings, most recent first,
// capped at HISTORY_LIMIT.
pub fn booking_history(bookings: &[Booking], customer_id: &CustomerId) -> Vec<Booking> {
    let mut history: Vec<Booking> = bookings
        .iter()
        .filter(|booking| booking.customer_id == *customer_id)
        .cloned()
        .collect();
    history.sort_by(|a, b| {
        (b.date.as_str(), b.time.as_str()).cmp(&(a.date.as_str(), a.time.as_str()))
    });
    history.truncate(HISTORY_LIMIT);
    history
}

#[cfg(test)]
mod tests {
    use super::{HISTORY_LIMIT, all_tags, booking_history};
    use pomade_app::{Booking, BookingStatus, Customer, CustomerId, MarketingConsent};

    fn customer_with_tags(id: &str, tags: &[&str]) -> Customer {
        Customer {
            id: id.into(),
            name: "Ana Reyes".to_owned(),
            email: "ana@example.com".to_owned(),
            phone: "555-0134".to_owned(),
            tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
            notes: Vec::new(),
            marketing_consent: MarketingConsent::default(),
            created_at: "2026-01-01T09:00:00Z".to_owned(),
            last_booking_date: None,
        }
    }

    fn booking_at(id: &str, customer: &str, date: &str, time: &str) -> Booking {
        Booking {
            id: id.into(),
            customer_id: customer.into(),
            customer_name: "Ana Reyes".to_owned(),
            service_id: "s1".into(),
            service_name: "Haircut".to_owned(),
            employee_id: "e1".into(),
            employee_name: "Sam Ortiz".to_owned(),
            date: date.to_owned(),
            time: time.to_owned(),
            duration: 30,
            status: BookingStatus::Completed,
            notes: String::new(),
            created_at: "2026-01-01T09:00:00Z".to_owned(),
        }
    }

    #[test]
    fn all_tags_is_sorted_and_unique() {
        let customers = vec![
            customer_with_tags("c1", &["vip", "new"]),
            customer_with_tags("c2", &["new", "regular"]),
            customer_with_tags("c3", &[]),
        ];
        assert_eq!(
            all_tags(&customers),
            vec!["new".to_owned(), "regular".to_owned(), "vip".to_owned()]
        );
    }

    #[test]
    fn all_tags_of_empty_collection_is_empty() {
        assert!(all_tags(&[]).is_empty());
    }

    #[test]
    fn history_caps_at_ten_most_recent() {
        let mut bookings = Vec::new();
        for day in 1..=15 {
            bookings.push(booking_at(
                &format!("b{day}"),
                "c1",
                &format!("2026-01-{day:02}"),
                "10:00",
            ));
        }
        // Another customer's booking never shows up in c1's history.
        bookings.push(booking_at("other", "c2", "2026-01-20", "10:00"));

        let history = booking_history(&bookings, &CustomerId::from("c1"));
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].date, "2026-01-15");
        assert_eq!(history[9].date, "2026-01-06");
        assert!(history.iter().all(|b| b.customer_id.as_str() == "c1"));
    }

    #[test]
    fn history_orders_same_day_bookings_by_time() {
        let bookings = vec![
            booking_at("morning", "c1", "2026-02-01", "09:00"),
            booking_at("evening", "c1", "2026-02-01", "17:30"),
            booking_at("noon", "c1", "2026-02-01", "12:00"),
        ];
        let history = booking_history(&bookings, &CustomerId::from("c1"));
        let ids: Vec<&str> = history.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["evening", "noon", "morning"]);
    }
}

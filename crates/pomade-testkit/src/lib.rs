// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use pomade_app::{
    Booking, BookingStatus, Customer, CustomerNote, Employee, EmployeeStatus, MarketingConsent,
    PendingInvite, Role, RolePermissions, Service, Snapshot,
};
use time::macros::format_description;
use time::{Date, Duration, Month};

const FIRST_NAMES: [&str; 16] = [
    "Ana", "Bea", "Cam", "Dee", "Elio", "Fern", "Gia", "Hugo", "Iris", "Jules", "Kira", "Luca",
    "Mona", "Noor", "Omar", "Pia",
];
const LAST_NAMES: [&str; 16] = [
    "Reyes", "Flores", "Doyle", "Marsh", "Ortiz", "Tran", "Waters", "Kim", "Silva", "Novak",
    "Abara", "Haddad", "Lindqvist", "Costa", "Okafor", "Vega",
];

const SERVICE_NAMES: [&str; 10] = [
    "Haircut",
    "Beard Trim",
    "Color",
    "Highlights",
    "Blowout",
    "Deep Condition",
    "Kids Cut",
    "Hot Towel Shave",
    "Updo",
    "Perm",
];

const TAG_POOL: [&str; 8] = [
    "vip", "new", "regular", "color", "student", "senior", "walk-in", "lapsed",
];

const BOOKING_NOTES: [&str; 6] = [
    "prefers window seat",
    "sensitive scalp",
    "running 10 min late last time",
    "bring reference photo",
    "allergic to ammonia dye",
    "",
];

const TIME_SLOTS: [&str; 10] = [
    "09:00", "09:45", "10:30", "11:15", "12:00", "13:30", "14:15", "15:00", "16:30", "17:15",
];

const BOOKING_STATUSES: [BookingStatus; 6] = [
    BookingStatus::Pending,
    BookingStatus::Confirmed,
    BookingStatus::InProgress,
    BookingStatus::Completed,
    BookingStatus::Cancelled,
    BookingStatus::NoShow,
];

const CONSENT_COMBOS: [MarketingConsent; 4] = [
    MarketingConsent { email: true, sms: true },
    MarketingConsent { email: true, sms: false },
    MarketingConsent { email: false, sms: true },
    MarketingConsent { email: false, sms: false },
];

pub const REFERENCE_YEAR: i32 = 2026;

pub fn reference_today() -> Date {
    Date::from_calendar_date(REFERENCE_YEAR, Month::March, 15).expect("reference date is valid")
}

pub fn format_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .expect("date format is valid")
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0xD6E8_FEB8_6659_FD93;
        if state == 0 {
            state = 0x9E37_79B9_7F4A_7C15;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

#[derive(Debug, Clone)]
pub struct SalonFaker {
    rng: DeterministicRng,
}

impl SalonFaker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeterministicRng::new(if seed == 0 { 1 } else { seed }),
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.rng.int_n(pool.len())]
    }

    fn person_name(&mut self) -> String {
        format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }

    fn email_for(&mut self, name: &str, domain: &str) -> String {
        format!("{}@{domain}", name.to_lowercase().replace(' ', "."))
    }

    fn phone(&mut self) -> String {
        format!("555-{:04}", self.rng.int_n(10_000))
    }

    fn date_within_days_back(&mut self, days: i64) -> Date {
        reference_today() - Duration::days(self.rng.int_n(days as usize + 1) as i64)
    }

    fn tag_set(&mut self) -> Vec<String> {
        let count = self.rng.int_n(4);
        let mut tags: Vec<String> = Vec::with_capacity(count);
        while tags.len() < count {
            let tag = self.pick(&TAG_POOL).to_owned();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    pub fn roles(&mut self) -> Vec<Role> {
        vec![
            role("r1", "Owner", "Full access to every area", RolePermissions {
                manage_team: true,
                manage_bookings: true,
                manage_customers: true,
                manage_services: true,
                view_reports: true,
                manage_settings: true,
                manage_billing: true,
                assign_roles: true,
            }),
            role("r2", "Manager", "Day-to-day operations", RolePermissions {
                manage_team: true,
                manage_bookings: true,
                manage_customers: true,
                manage_services: true,
                view_reports: true,
                manage_settings: false,
                manage_billing: false,
                assign_roles: false,
            }),
            role("r3", "Stylist", "Own schedule and customers", RolePermissions {
                manage_team: false,
                manage_bookings: true,
                manage_customers: true,
                manage_services: false,
                view_reports: false,
                manage_settings: false,
                manage_billing: false,
                assign_roles: false,
            }),
            role("r4", "Receptionist", "Front desk and bookings", RolePermissions {
                manage_team: false,
                manage_bookings: true,
                manage_customers: false,
                manage_services: false,
                view_reports: false,
                manage_settings: false,
                manage_billing: false,
                assign_roles: false,
            }),
        ]
    }

    pub fn services(&mut self) -> Vec<Service> {
        SERVICE_NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| Service {
                id: format!("s{}", index + 1).into(),
                name: (*name).to_owned(),
            })
            .collect()
    }

    pub fn employees(&mut self, count: usize, roles: &[Role]) -> Vec<Employee> {
        (0..count)
            .map(|index| {
                let name = self.person_name();
                let email = self.email_for(&name, "salon.example");
                let role = &roles[self.rng.int_n(roles.len())];
                let status = match index {
                    0 => EmployeeStatus::Active,
                    _ => [
                        EmployeeStatus::Active,
                        EmployeeStatus::Active,
                        EmployeeStatus::Invited,
                        EmployeeStatus::Disabled,
                    ][self.rng.int_n(4)],
                };
                let joined = self.date_within_days_back(700);
                Employee {
                    id: format!("e{}", index + 1).into(),
                    user_id: match status {
                        EmployeeStatus::Invited => None,
                        _ => Some(format!("u{}", index + 1).into()),
                    },
                    name,
                    email,
                    phone: self.phone(),
                    role_id: role.id.clone(),
                    role_name: role.name.clone(),
                    status,
                    joined_at: match status {
                        EmployeeStatus::Invited => None,
                        _ => Some(format_date(joined)),
                    },
                    last_active_at: match status {
                        EmployeeStatus::Active => Some(format_date(self.date_within_days_back(7))),
                        _ => None,
                    },
                }
            })
            .collect()
    }

    pub fn customers(&mut self, count: usize) -> Vec<Customer> {
        (0..count)
            .map(|index| {
                let name = self.person_name();
                let email = self.email_for(&name, "example.com");
                // Every fourth customer has never visited.
                let last_booking = if index % 4 == 3 {
                    None
                } else {
                    Some(format_date(self.date_within_days_back(180)))
                };
                let note_count = self.rng.int_n(3);
                let notes = (0..note_count)
                    .map(|note_index| CustomerNote {
                        id: format!("n{}-{}", index + 1, note_index + 1).into(),
                        content: self.pick(&BOOKING_NOTES).to_owned(),
                        created_at: format!("{}T10:00:00Z", format_date(self.date_within_days_back(90))),
                        created_by: "u1".into(),
                    })
                    .collect();
                Customer {
                    id: format!("c{}", index + 1).into(),
                    name,
                    email,
                    phone: self.phone(),
                    tags: self.tag_set(),
                    notes,
                    marketing_consent: CONSENT_COMBOS[self.rng.int_n(CONSENT_COMBOS.len())],
                    created_at: format!("{}T09:00:00Z", format_date(self.date_within_days_back(720))),
                    last_booking_date: last_booking,
                }
            })
            .collect()
    }

    pub fn bookings(
        &mut self,
        count: usize,
        customers: &[Customer],
        employees: &[Employee],
        services: &[Service],
    ) -> Vec<Booking> {
        (0..count)
            .map(|index| {
                let customer = &customers[self.rng.int_n(customers.len())];
                let employee = &employees[self.rng.int_n(employees.len())];
                let service = &services[self.rng.int_n(services.len())];
                let date = self.date_within_days_back(120);
                Booking {
                    id: format!("b{}", index + 1).into(),
                    customer_id: customer.id.clone(),
                    customer_name: customer.name.clone(),
                    service_id: service.id.clone(),
                    service_name: service.name.clone(),
                    employee_id: employee.id.clone(),
                    employee_name: employee.name.clone(),
                    date: format_date(date),
                    time: self.pick(&TIME_SLOTS).to_owned(),
                    duration: [30, 45, 60, 75, 90][self.rng.int_n(5)],
                    status: BOOKING_STATUSES[self.rng.int_n(BOOKING_STATUSES.len())],
                    notes: self.pick(&BOOKING_NOTES).to_owned(),
                    created_at: format!("{}T08:30:00Z", format_date(date - Duration::days(3))),
                }
            })
            .collect()
    }

    pub fn pending_invites(&mut self, count: usize, roles: &[Role]) -> Vec<PendingInvite> {
        (0..count)
            .map(|index| {
                let name = self.person_name();
                let role = &roles[self.rng.int_n(roles.len())];
                let invited = self.date_within_days_back(14);
                PendingInvite {
                    id: format!("i{}", index + 1).into(),
                    email: self.email_for(&name, "example.com"),
                    role_id: role.id.clone(),
                    role_name: role.name.clone(),
                    invited_by: "Sam Ortiz".to_owned(),
                    invited_at: format_date(invited),
                    expires_at: format_date(invited + Duration::days(14)),
                }
            })
            .collect()
    }

    pub fn snapshot(&mut self) -> Snapshot {
        let roles = self.roles();
        let services = self.services();
        let employees = self.employees(6, &roles);
        let customers = self.customers(12);
        let bookings = self.bookings(40, &customers, &employees, &services);
        let pending_invites = self.pending_invites(2, &roles);
        Snapshot {
            bookings,
            customers,
            employees,
            roles,
            services,
            pending_invites,
        }
    }
}

fn role(id: &str, name: &str, description: &str, permissions: RolePermissions) -> Role {
    Role {
        id: id.into(),
        name: name.to_owned(),
        description: description.to_owned(),
        permissions,
    }
}

#[cfg(test)]
mod tests {
    use super::SalonFaker;

    #[test]
    fn same_seed_produces_identical_snapshots() {
        let first = SalonFaker::new(7).snapshot();
        let second = SalonFaker::new(7).snapshot();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let first = SalonFaker::new(7).snapshot();
        let second = SalonFaker::new(8).snapshot();
        assert_ne!(first, second);
    }

    #[test]
    fn bookings_reference_generated_entities() {
        let snapshot = SalonFaker::new(3).snapshot();
        for booking in &snapshot.bookings {
            assert!(snapshot.customers.iter().any(|c| c.id == booking.customer_id));
            assert!(snapshot.employees.iter().any(|e| e.id == booking.employee_id));
            assert!(snapshot.services.iter().any(|s| s.id == booking.service_id));
        }
    }

    #[test]
    fn customer_tags_are_deduplicated() {
        let snapshot = SalonFaker::new(11).snapshot();
        for customer in &snapshot.customers {
            let mut seen = customer.tags.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), customer.tags.len());
        }
    }

    #[test]
    fn some_customers_have_never_visited() {
        let snapshot = SalonFaker::new(5).snapshot();
        assert!(snapshot
            .customers
            .iter()
            .any(|c| c.last_booking_date.is_none()));
        assert!(snapshot
            .customers
            .iter()
            .any(|c| c.last_booking_date.is_some()));
    }

    #[test]
    fn employee_zero_is_always_active() {
        for seed in [1, 2, 3, 4, 5] {
            let snapshot = SalonFaker::new(seed).snapshot();
            assert_eq!(
                snapshot.employees[0].status,
                pomade_app::EmployeeStatus::Active
            );
        }
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use pomade_app::{BookingStatus, CustomerId, EmployeeStatus, Snapshot};
use pomade_testkit::SalonFaker;
use pomade_views::{
    BookingCriteria, BookingCriteriaChange, ConsentFilter, CustomerCriteria,
    CustomerCriteriaChange, LastVisitWindow, TeamCriteria, TeamCriteriaChange, all_tags,
    booking_history, booking_status_badge, employee_status_badge, filter_bookings,
    filter_customers, filter_team,
};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::thread;
use time::{Date, OffsetDateTime};

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `pomade --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let snapshot = load_snapshot(&options, &config)?;
    if options.check_only {
        return Ok(());
    }

    let Some(command) = options.command else {
        print_help();
        return Ok(());
    };

    let delay = config.delay();
    if !delay.is_zero() {
        // Presentation-only; carries no correctness semantics.
        thread::sleep(delay);
    }

    let today = OffsetDateTime::now_utc().date();
    match command {
        Command::Bookings(criteria) => print_bookings(&snapshot, &criteria),
        Command::Customers(criteria) => print_customers(&snapshot, &criteria, today),
        Command::Team(criteria) => print_team(&snapshot, &criteria),
        Command::History { customer_id } => print_history(&snapshot, customer_id.as_ref())?,
        Command::Tags => print_tags(&snapshot),
    }
    Ok(())
}

fn load_snapshot(options: &CliOptions, config: &Config) -> Result<Snapshot> {
    if options.demo {
        return Ok(SalonFaker::new(options.seed).snapshot());
    }

    let Some(path) = options.snapshot_path.clone().or_else(|| config.snapshot_path()) else {
        bail!("no snapshot source; pass --snapshot <path>, set [data].snapshot_path, or use --demo");
    };
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("read snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("decode snapshot {}", path.display()))?;
    Ok(snapshot)
}

fn print_bookings(snapshot: &Snapshot, criteria: &BookingCriteria) {
    let filtered = filter_bookings(&snapshot.bookings, criteria);
    print_active(criteria.active_count());
    println!("{} of {} bookings", filtered.len(), snapshot.bookings.len());
    for booking in &filtered {
        println!(
            "{} {}  {:<11} {} / {} with {}",
            booking.date,
            booking.time,
            booking_status_badge(booking.status).label,
            booking.customer_name,
            booking.service_name,
            booking.employee_name,
        );
    }
}

fn print_customers(snapshot: &Snapshot, criteria: &CustomerCriteria, today: Date) {
    let filtered = filter_customers(&snapshot.customers, criteria, today);
    print_active(criteria.active_count());
    println!("{} of {} customers", filtered.len(), snapshot.customers.len());
    for customer in &filtered {
        let last_visit = customer.last_booking_date.as_deref().unwrap_or("never");
        let tags = if customer.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", customer.tags.join(", "))
        };
        println!(
            "{:<20} {:<30} {}  last visit: {last_visit}{tags}",
            customer.name, customer.email, customer.phone,
        );
    }
}

fn print_team(snapshot: &Snapshot, criteria: &TeamCriteria) {
    let filtered = filter_team(&snapshot.employees, criteria);
    print_active(criteria.active_count());
    println!("{} of {} team members", filtered.len(), snapshot.employees.len());
    for employee in &filtered {
        println!(
            "{:<20} {:<14} {:<9} {}",
            employee.name,
            employee.role_name,
            employee_status_badge(employee.status).label,
            employee.email,
        );
    }
}

fn print_history(snapshot: &Snapshot, customer_id: Option<&CustomerId>) -> Result<()> {
    let Some(customer_id) = customer_id else {
        bail!("history requires --customer <id>");
    };
    let Some(customer) = snapshot
        .customers
        .iter()
        .find(|customer| customer.id == *customer_id)
    else {
        bail!("no customer with id {customer_id}");
    };

    let history = booking_history(&snapshot.bookings, customer_id);
    println!("{}: {} recent booking(s)", customer.name, history.len());
    for booking in &history {
        println!(
            "{} {}  {:<11} {}",
            booking.date,
            booking.time,
            booking_status_badge(booking.status).label,
            booking.service_name,
        );
    }
    Ok(())
}

fn print_tags(snapshot: &Snapshot) {
    for tag in all_tags(&snapshot.customers) {
        println!("{tag}");
    }
}

fn print_active(count: usize) {
    if count > 0 {
        println!("filters active: {count}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Bookings(BookingCriteria),
    Customers(CustomerCriteria),
    Team(TeamCriteria),
    History { customer_id: Option<CustomerId> },
    Tags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    snapshot_path: Option<PathBuf>,
    demo: bool,
    seed: u64,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
    command: Option<Command>,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        snapshot_path: None,
        demo: false,
        seed: 42,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
        command: None,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = require_value(&mut iter, "--config")?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--snapshot" => {
                let value = require_value(&mut iter, "--snapshot")?;
                options.snapshot_path = Some(PathBuf::from(value.as_ref()));
            }
            "--demo" => {
                options.demo = true;
            }
            "--seed" => {
                let value = require_value(&mut iter, "--seed")?;
                options.seed = value
                    .as_ref()
                    .parse()
                    .map_err(|_| anyhow!("--seed requires an unsigned integer"))?;
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            arg if !arg.starts_with('-') && options.command.is_none() => {
                options.command = Some(match arg {
                    "bookings" => Command::Bookings(BookingCriteria::default()),
                    "customers" => Command::Customers(CustomerCriteria::default()),
                    "team" => Command::Team(TeamCriteria::default()),
                    "history" => Command::History { customer_id: None },
                    "tags" => Command::Tags,
                    unknown => {
                        bail!("unknown command {unknown:?}; run with --help to see supported commands")
                    }
                });
            }
            flag => apply_command_flag(&mut options.command, flag, &mut iter)?,
        }
    }

    Ok(options)
}

fn apply_command_flag<I, S>(command: &mut Option<Command>, flag: &str, iter: &mut I) -> Result<()>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let Some(command) = command.as_mut() else {
        bail!("unknown argument {flag:?}; run with --help to see supported options");
    };

    match command {
        Command::Bookings(criteria) => {
            let value = require_value(iter, flag)?;
            let value = value.as_ref();
            match flag {
                "--employee" => {
                    criteria.apply(BookingCriteriaChange::Employee(id_arg(value).map(Into::into)));
                }
                "--service" => {
                    criteria.apply(BookingCriteriaChange::Service(id_arg(value).map(Into::into)));
                }
                "--status" => {
                    criteria.apply(BookingCriteriaChange::Status(booking_status_arg(value)));
                }
                "--from" => {
                    criteria.apply(BookingCriteriaChange::DateFrom(Some(value.to_owned())));
                }
                "--to" => {
                    criteria.apply(BookingCriteriaChange::DateTo(Some(value.to_owned())));
                }
                "--customer" => {
                    criteria.apply(BookingCriteriaChange::Customer(id_arg(value).map(Into::into)));
                }
                unknown => bail!("unknown argument {unknown:?} for `bookings`"),
            }
        }
        Command::Customers(criteria) => {
            let value = require_value(iter, flag)?;
            let value = value.as_ref();
            match flag {
                "--search" => {
                    criteria.apply(CustomerCriteriaChange::Search(value.to_owned()));
                }
                "--tag" => {
                    criteria.apply(CustomerCriteriaChange::ToggleTag(value.to_owned()));
                }
                "--last-visit" => {
                    criteria.apply(CustomerCriteriaChange::LastVisit(
                        LastVisitWindow::from_arg(value),
                    ));
                }
                "--marketing" => {
                    criteria.apply(CustomerCriteriaChange::Marketing(ConsentFilter::from_arg(
                        value,
                    )));
                }
                unknown => bail!("unknown argument {unknown:?} for `customers`"),
            }
        }
        Command::Team(criteria) => {
            let value = require_value(iter, flag)?;
            let value = value.as_ref();
            match flag {
                "--role" => {
                    criteria.apply(TeamCriteriaChange::Role(id_arg(value).map(Into::into)));
                }
                "--status" => {
                    criteria.apply(TeamCriteriaChange::Status(employee_status_arg(value)));
                }
                "--search" => {
                    criteria.apply(TeamCriteriaChange::Search(value.to_owned()));
                }
                unknown => bail!("unknown argument {unknown:?} for `team`"),
            }
        }
        Command::History { customer_id } => match flag {
            "--customer" => {
                let value = require_value(iter, flag)?;
                *customer_id = Some(CustomerId::from(value.as_ref()));
            }
            unknown => bail!("unknown argument {unknown:?} for `history`"),
        },
        Command::Tags => bail!("unknown argument {flag:?} for `tags`"),
    }

    Ok(())
}

fn require_value<I, S>(iter: &mut I, flag: &str) -> Result<S>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    iter.next().ok_or_else(|| anyhow!("{flag} requires a value"))
}

fn id_arg(value: &str) -> Option<&str> {
    match value {
        "" | "all" => None,
        other => Some(other),
    }
}

// Unrecognized enum values become a matches-nothing constraint so the list
// degrades to empty instead of erroring out.
fn booking_status_arg(value: &str) -> Option<BookingStatus> {
    match value {
        "" | "all" => None,
        other => Some(BookingStatus::parse(other).unwrap_or(BookingStatus::Unknown)),
    }
}

fn employee_status_arg(value: &str) -> Option<EmployeeStatus> {
    match value {
        "" | "all" => None,
        other => Some(EmployeeStatus::parse(other).unwrap_or(EmployeeStatus::Unknown)),
    }
}

fn print_help() {
    println!("pomade: salon list views over a data snapshot");
    println!();
    println!("commands:");
    println!("  bookings   [--employee ID] [--service ID] [--status S] [--from DATE] [--to DATE] [--customer ID]");
    println!("  customers  [--search Q] [--tag T]... [--last-visit week|month|quarter|all] [--marketing email|sms|both|none|all]");
    println!("  team       [--role ID] [--status active|invited|disabled|all] [--search Q]");
    println!("  history    --customer ID");
    println!("  tags");
    println!();
    println!("options:");
    println!("  --snapshot <path>        Load entities from a JSON snapshot");
    println!("  --demo                   Use a seeded demo snapshot instead of a file");
    println!("  --seed <n>               Seed for --demo (default 42)");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config and snapshot source, then exit");
    println!("  --help                   Show this help");
}

//! Demo data seeding.
//!
//! Loads the bundled district list and demo listings, registers their
//! hosts, and books a demo guest into the first few listings through the
//! normal admission path. Safe to run more than once: when listings are
//! already present the seed is skipped entirely.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::engine::{default_demo_stay, Engine, EngineError};
use crate::model::{BookingRequest, Role, User};

/// District names the original demo exposed in its search UI. Loaded and
/// handed to the caller as explicit configuration.
pub const DISTRICTS_JSON: &str = include_str!("../data/districts.json");
pub const DEMO_LISTINGS_JSON: &str = include_str!("../data/demo_listings.json");

pub const DEMO_GUEST_EMAIL: &str = "demo.guest@example.com";
const DEMO_GUEST_NAME: &str = "Demo Guest";
const MAX_DEMO_BOOKINGS: usize = 3;

#[derive(Debug)]
pub enum SeedError {
    Parse(serde_json::Error),
    Engine(EngineError),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Parse(e) => write!(f, "malformed seed data: {e}"),
            SeedError::Engine(e) => write!(f, "seeding failed: {e}"),
        }
    }
}

impl std::error::Error for SeedError {}

#[derive(Debug, Deserialize)]
struct DemoListing {
    host_email: String,
    host_name: String,
    location: String,
    description: String,
    nightly_price: f64,
    open_dates: Vec<String>,
}

/// What a seed run actually did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub listings: usize,
    pub bookings: usize,
    pub skipped: usize,
}

pub fn load_districts(json: &str) -> Result<Vec<String>, SeedError> {
    serde_json::from_str(json).map_err(SeedError::Parse)
}

/// Seed demo hosts, listings, and a handful of guest bookings. A malformed
/// entry is logged and skipped; malformed JSON fails the whole run.
pub async fn seed_demo(engine: &Engine, json: &str) -> Result<SeedSummary, SeedError> {
    if !engine.list_listings().await.is_empty() {
        info!("listings already present, skipping demo seed");
        return Ok(SeedSummary::default());
    }

    let entries: Vec<DemoListing> = serde_json::from_str(json).map_err(SeedError::Parse)?;
    let mut summary = SeedSummary::default();
    let mut seeded = Vec::new();

    for entry in entries {
        let open_dates = match parse_open_dates(&entry.open_dates) {
            Ok(dates) => dates,
            Err(bad) => {
                warn!(location = %entry.location, date = %bad, "malformed open date, skipping entry");
                summary.skipped += 1;
                continue;
            }
        };
        let host = match resolve_user(engine, &entry.host_email, &entry.host_name, Role::Host).await
        {
            Ok(host) => host,
            Err(e) => {
                warn!(email = %entry.host_email, "could not register host: {e}");
                summary.skipped += 1;
                continue;
            }
        };
        match engine
            .create_listing(
                host.id,
                &entry.location,
                &entry.description,
                entry.nightly_price,
                open_dates,
            )
            .await
        {
            Ok(listing) => {
                seeded.push(listing);
                summary.listings += 1;
            }
            Err(e) => {
                warn!(location = %entry.location, "could not create demo listing: {e}");
                summary.skipped += 1;
            }
        }
    }
    info!("seeded {} demo listings", summary.listings);

    let guest = resolve_user(engine, DEMO_GUEST_EMAIL, DEMO_GUEST_NAME, Role::Guest)
        .await
        .map_err(SeedError::Engine)?;

    for listing in &seeded {
        if summary.bookings >= MAX_DEMO_BOOKINGS {
            break;
        }
        if listing.open_dates.is_empty() {
            continue;
        }
        let stay = default_demo_stay(&listing.open_dates, chrono::Utc::now().date_naive());
        match engine
            .create_booking(BookingRequest::new(guest.id, listing.id, stay))
            .await
        {
            Ok(_) => summary.bookings += 1,
            Err(e) => warn!(listing = %listing.id, "demo booking rejected: {e}"),
        }
    }
    info!("created {} demo bookings for {DEMO_GUEST_EMAIL}", summary.bookings);

    Ok(summary)
}

fn parse_open_dates(raw: &[String]) -> Result<BTreeSet<NaiveDate>, String> {
    let mut dates = BTreeSet::new();
    for s in raw {
        match s.parse::<NaiveDate>() {
            Ok(d) => {
                dates.insert(d);
            }
            Err(_) => return Err(s.clone()),
        }
    }
    Ok(dates)
}

/// Register the user, resolving a duplicate email to the existing
/// registration. Any other failure is the caller's to handle.
async fn resolve_user(
    engine: &Engine,
    email: &str,
    name: &str,
    role: Role,
) -> Result<User, EngineError> {
    match engine.register_user(email, name, role).await {
        Ok(user) => Ok(user),
        Err(EngineError::EmailTaken(_)) => match engine.find_user_by_email(email).await {
            Some(user) => Ok(user),
            None => Err(EngineError::EmailTaken(email.to_string())),
        },
        Err(e) => Err(e),
    }
}

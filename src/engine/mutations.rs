use std::collections::BTreeSet;

use chrono::NaiveDate;
use ulid::Ulid;

use crate::limits::*;
use crate::model::*;
use crate::observability;

use super::availability::{default_demo_stay, first_missing_date};
use super::conflict::{check_no_conflict, today, validate_stay};
use super::{Engine, EngineError};

fn validate_listing_fields(
    location: &str,
    description: &str,
    open_dates: &BTreeSet<NaiveDate>,
) -> Result<(), EngineError> {
    if location.len() > MAX_LOCATION_LEN {
        return Err(EngineError::LimitExceeded("location too long"));
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(EngineError::LimitExceeded("description too long"));
    }
    if open_dates.len() > MAX_OPEN_DATES {
        return Err(EngineError::LimitExceeded("too many open dates"));
    }
    Ok(())
}

impl Engine {
    /// Two-outcome registration: the persisted user, or `EmailTaken` when
    /// the address is already registered. Callers resolve the conflict
    /// themselves; there is no detached fallback object.
    pub async fn register_user(
        &self,
        email: &str,
        name: &str,
        role: Role,
    ) -> Result<User, EngineError> {
        if email.len() > MAX_EMAIL_LEN {
            return Err(EngineError::LimitExceeded("email too long"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(EngineError::LimitExceeded("name too long"));
        }
        if self.users.find_by_email(email).await.is_some() {
            return Err(EngineError::EmailTaken(email.to_string()));
        }

        let user = User {
            id: Ulid::new(),
            email: email.to_string(),
            name: name.to_string(),
            role,
        };
        self.users.save(user.clone()).await;
        metrics::counter!(observability::USERS_REGISTERED_TOTAL).increment(1);
        Ok(user)
    }

    pub async fn create_listing(
        &self,
        host_id: Ulid,
        location: &str,
        description: &str,
        nightly_price: f64,
        open_dates: BTreeSet<NaiveDate>,
    ) -> Result<Listing, EngineError> {
        validate_listing_fields(location, description, &open_dates)?;
        if self.users.find_by_id(host_id).await.is_none() {
            return Err(EngineError::NotFound(host_id));
        }

        let listing = Listing {
            id: Ulid::new(),
            host_id,
            location: location.to_string(),
            description: description.to_string(),
            nightly_price,
            open_dates,
        };
        self.listings.save(listing.clone()).await;
        metrics::gauge!(observability::LISTINGS_ACTIVE)
            .set(self.listings.find_all().await.len() as f64);
        Ok(listing)
    }

    /// The only mutation path for a listing after creation. Location is
    /// fixed at creation time.
    pub async fn update_listing(
        &self,
        id: Ulid,
        description: &str,
        nightly_price: f64,
        open_dates: BTreeSet<NaiveDate>,
    ) -> Result<Listing, EngineError> {
        let mut listing = self
            .listings
            .find_by_id(id)
            .await
            .ok_or(EngineError::NotFound(id))?;
        validate_listing_fields(&listing.location, description, &open_dates)?;

        listing.description = description.to_string();
        listing.nightly_price = nightly_price;
        listing.open_dates = open_dates;
        self.listings.save(listing.clone()).await;
        Ok(listing)
    }

    /// Admit a booking request: resolve the listing, validate the date
    /// order, require every stay date in the listing's open-date set, and
    /// scan existing bookings for an overlap. On success the booking is
    /// persisted with status `Pending` — the single store write of the
    /// request. No write happens on any failure path.
    pub async fn create_booking(
        &self,
        request: BookingRequest,
    ) -> Result<Booking, EngineError> {
        let result = self.admit(request).await;
        let outcome = observability::admission_outcome(&result);
        metrics::counter!(observability::ADMISSIONS_TOTAL, "outcome" => outcome).increment(1);
        result
    }

    async fn admit(&self, request: BookingRequest) -> Result<Booking, EngineError> {
        let listing = self
            .listings
            .find_by_id(request.listing_id)
            .await
            .ok_or(EngineError::NotFound(request.listing_id))?;

        validate_stay(&request.stay)?;
        if let Some(missing) = first_missing_date(&listing.open_dates, &request.stay) {
            return Err(EngineError::DateNotAvailable(missing));
        }

        let existing = self.bookings.find_by_listing(listing.id).await;
        check_no_conflict(&existing, &request.stay, request.id)?;

        let booking = Booking {
            id: request.id.unwrap_or_else(Ulid::new),
            user_id: request.user_id,
            listing_id: listing.id,
            stay: request.stay,
            status: BookingStatus::Pending,
        };
        self.bookings.save(booking.clone()).await;
        Ok(booking)
    }

    /// Unchecked demo path: derives the stay from the listing's calendar
    /// and persists a `Confirmed` booking unconditionally. Only the
    /// user/listing lookups can fail; none of the admission checks run
    /// here.
    pub async fn create_demo_booking(
        &self,
        user_id: Ulid,
        listing_id: Ulid,
    ) -> Result<Booking, EngineError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .ok_or(EngineError::NotFound(user_id))?;
        let listing = self
            .listings
            .find_by_id(listing_id)
            .await
            .ok_or(EngineError::NotFound(listing_id))?;

        let booking = Booking {
            id: Ulid::new(),
            user_id: user.id,
            listing_id: listing.id,
            stay: default_demo_stay(&listing.open_dates, today()),
            status: BookingStatus::Confirmed,
        };
        self.bookings.save(booking.clone()).await;
        metrics::counter!(observability::DEMO_BOOKINGS_TOTAL).increment(1);
        Ok(booking)
    }
}

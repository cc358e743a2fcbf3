use ulid::Ulid;

use crate::model::{Booking, Listing, Stay, User};

use super::availability::covers_stay;
use super::conflict::validate_stay;
use super::{Engine, EngineError};

impl Engine {
    pub async fn find_listing(&self, id: Ulid) -> Option<Listing> {
        self.listings.find_by_id(id).await
    }

    pub async fn list_listings(&self) -> Vec<Listing> {
        self.listings.find_all().await
    }

    /// Case-insensitive substring match on location, keeping only listings
    /// whose open-date set covers the whole stay. Existing bookings are not
    /// consulted here; admission re-checks conflicts authoritatively.
    /// Results are sorted by listing id for a stable order.
    pub async fn search_listings(
        &self,
        location: &str,
        stay: &Stay,
    ) -> Result<Vec<Listing>, EngineError> {
        validate_stay(stay)?;

        let needle = location.to_lowercase();
        let mut matches: Vec<Listing> = self
            .listings
            .find_all()
            .await
            .into_iter()
            .filter(|l| l.location.to_lowercase().contains(&needle))
            .filter(|l| covers_stay(&l.open_dates, stay))
            .collect();
        matches.sort_by_key(|l| l.id);
        Ok(matches)
    }

    pub async fn find_user(&self, id: Ulid) -> Option<User> {
        self.users.find_by_id(id).await
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users.find_by_email(email).await
    }

    /// All bookings made by a user, any status, unordered.
    pub async fn bookings_by_user(&self, user_id: Ulid) -> Vec<Booking> {
        self.bookings.find_by_user(user_id).await
    }

    /// All bookings against a listing, any status, unordered.
    pub async fn bookings_for_listing(&self, listing_id: Ulid) -> Vec<Booking> {
        self.bookings.find_by_listing(listing_id).await
    }
}

use async_trait::async_trait;
use dashmap::DashMap;
use ulid::Ulid;

use crate::model::{Booking, Listing, User};

// ── Store contracts ──────────────────────────────────────────────
//
// Simple keyed lookups with no business logic. Any backing store
// satisfies these as long as writes are visible to subsequent reads
// from the same process.

#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn find_by_id(&self, id: Ulid) -> Option<Listing>;
    async fn save(&self, listing: Listing);
    async fn find_all(&self) -> Vec<Listing>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn find_by_id(&self, id: Ulid) -> Option<Booking>;
    async fn save(&self, booking: Booking);
    /// All bookings against a listing, any status, unordered.
    async fn find_by_listing(&self, listing_id: Ulid) -> Vec<Booking>;
    /// All bookings made by a user, any status, unordered.
    async fn find_by_user(&self, user_id: Ulid) -> Vec<Booking>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Ulid) -> Option<User>;
    async fn find_by_email(&self, email: &str) -> Option<User>;
    async fn save(&self, user: User);
}

// ── In-memory implementation ─────────────────────────────────────

/// One shared in-process store backing all three contracts.
pub struct InMemoryStore {
    listings: DashMap<Ulid, Listing>,
    bookings: DashMap<Ulid, Booking>,
    users: DashMap<Ulid, User>,
    /// Secondary index: email → user id.
    emails: DashMap<String, Ulid>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            listings: DashMap::new(),
            bookings: DashMap::new(),
            users: DashMap::new(),
            emails: DashMap::new(),
        }
    }
}

#[async_trait]
impl ListingStore for InMemoryStore {
    async fn find_by_id(&self, id: Ulid) -> Option<Listing> {
        self.listings.get(&id).map(|e| e.value().clone())
    }

    async fn save(&self, listing: Listing) {
        self.listings.insert(listing.id, listing);
    }

    async fn find_all(&self) -> Vec<Listing> {
        self.listings.iter().map(|e| e.value().clone()).collect()
    }
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn find_by_id(&self, id: Ulid) -> Option<Booking> {
        self.bookings.get(&id).map(|e| e.value().clone())
    }

    async fn save(&self, booking: Booking) {
        self.bookings.insert(booking.id, booking);
    }

    async fn find_by_listing(&self, listing_id: Ulid) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|e| e.value().listing_id == listing_id)
            .map(|e| e.value().clone())
            .collect()
    }

    async fn find_by_user(&self, user_id: Ulid) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|e| e.value().user_id == user_id)
            .map(|e| e.value().clone())
            .collect()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_by_id(&self, id: Ulid) -> Option<User> {
        self.users.get(&id).map(|e| e.value().clone())
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        let id = *self.emails.get(email)?.value();
        self.users.get(&id).map(|e| e.value().clone())
    }

    async fn save(&self, user: User) {
        self.emails.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user);
    }
}

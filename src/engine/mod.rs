mod availability;
mod conflict;
mod error;
mod mutations;
mod queries;
mod store;

pub use availability::{covers_stay, default_demo_stay, first_missing_date};
pub use error::EngineError;
pub use store::{BookingStore, InMemoryStore, ListingStore, UserStore};

use std::sync::Arc;

/// Booking admission engine. Owns trait handles to its store
/// collaborators; the stores decide persistence, the engine decides
/// admission.
///
/// The admit path reads existing bookings, checks for overlap, then
/// writes — this sequence is not atomic against concurrent admissions
/// for the same listing. A deployment admitting concurrently must
/// serialize per listing or enforce the overlap constraint in the
/// store itself.
pub struct Engine {
    listings: Arc<dyn ListingStore>,
    bookings: Arc<dyn BookingStore>,
    users: Arc<dyn UserStore>,
}

impl Engine {
    pub fn new(
        listings: Arc<dyn ListingStore>,
        bookings: Arc<dyn BookingStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            listings,
            bookings,
            users,
        }
    }

    /// Engine over a single shared in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store.clone(), store)
    }
}

//! End-to-end booking flow exercised through the public crate API.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use innkeep::engine::{Engine, EngineError};
use innkeep::model::{BookingRequest, BookingStatus, Role, Stay};
use innkeep::seed;

fn dec(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 12, d).unwrap()
}

#[tokio::test]
async fn full_booking_flow() {
    let engine = Engine::in_memory();

    let host = engine
        .register_user("meera@example.com", "Meera", Role::Host)
        .await
        .unwrap();
    let guest = engine
        .register_user("ravi@example.com", "Ravi", Role::Guest)
        .await
        .unwrap();

    let open: BTreeSet<NaiveDate> = (1..=10).map(dec).collect();
    let listing = engine
        .create_listing(host.id, "Vizianagaram", "riverside homestay", 2100.0, open)
        .await
        .unwrap();

    // Search finds the listing for a covered stay.
    let found = engine
        .search_listings("vizia", &Stay::new(dec(2), dec(5)))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, listing.id);

    // The stay is admitted as pending.
    let booking = engine
        .create_booking(BookingRequest::new(guest.id, listing.id, Stay::new(dec(2), dec(5))))
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);

    // A stay checking in on the first one's check-out day is fine.
    let second = engine
        .create_booking(BookingRequest::new(guest.id, listing.id, Stay::new(dec(5), dec(7))))
        .await
        .unwrap();

    // An overlapping request is turned away with the conflicting booking.
    let clash = engine
        .create_booking(BookingRequest::new(guest.id, listing.id, Stay::new(dec(6), dec(8))))
        .await;
    assert_eq!(clash, Err(EngineError::OverlapConflict(second.id)));

    // The demo path never rejects.
    let demo = engine.create_demo_booking(guest.id, listing.id).await.unwrap();
    assert_eq!(demo.status, BookingStatus::Confirmed);

    let mine = engine.bookings_by_user(guest.id).await;
    assert_eq!(mine.len(), 3);
}

#[tokio::test]
async fn seeded_data_is_immediately_queryable() {
    let engine = Engine::in_memory();
    let summary = seed::seed_demo(&engine, seed::DEMO_LISTINGS_JSON).await.unwrap();
    assert!(summary.listings > 0);
    assert!(summary.bookings > 0);

    let listings = engine.list_listings().await;
    assert_eq!(listings.len(), summary.listings);

    let guest = engine
        .find_user_by_email(seed::DEMO_GUEST_EMAIL)
        .await
        .unwrap();
    assert_eq!(engine.bookings_by_user(guest.id).await.len(), summary.bookings);

    // Every seeded booking went through admission against its listing's
    // calendar.
    for booking in engine.bookings_by_user(guest.id).await {
        let listing = engine.find_listing(booking.listing_id).await.unwrap();
        assert!(innkeep::engine::covers_stay(&listing.open_dates, &booking.stay));
        assert_eq!(booking.status, BookingStatus::Pending);
    }
}

use tracing::info;

use innkeep::engine::Engine;
use innkeep::model::{BookingRequest, Role, Stay};
use innkeep::seed;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("INNKEEP_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    innkeep::observability::init(metrics_port);

    let demo_mode: bool = std::env::var("INNKEEP_DEMO_MODE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(true);

    let engine = Engine::in_memory();

    let districts = seed::load_districts(seed::DISTRICTS_JSON)?;
    info!("innkeep demo starting");
    info!("  districts: {}", districts.len());
    info!("  demo_mode: {demo_mode}");
    info!(
        "  metrics: {}",
        metrics_port.map_or("disabled".to_string(), |p| format!(
            "http://0.0.0.0:{p}/metrics"
        ))
    );

    if demo_mode {
        let summary = seed::seed_demo(&engine, seed::DEMO_LISTINGS_JSON).await?;
        info!(
            "seeded {} listings, {} bookings ({} entries skipped)",
            summary.listings, summary.bookings, summary.skipped
        );
    } else {
        info!("demo mode disabled, skipping data seeding");
    }

    // Walkthrough: search a seeded listing's location, admit a one-night
    // stay on its last open date, then show the guest's bookings.
    let Some(listing) = engine.list_listings().await.into_iter().next() else {
        info!("no listings present, nothing to demonstrate");
        return Ok(());
    };
    let guest = match engine.find_user_by_email(seed::DEMO_GUEST_EMAIL).await {
        Some(user) => user,
        None => {
            engine
                .register_user(seed::DEMO_GUEST_EMAIL, "Demo Guest", Role::Guest)
                .await?
        }
    };
    let Some(&last_open) = listing.open_dates.iter().next_back() else {
        info!("listing has no open dates, nothing to demonstrate");
        return Ok(());
    };
    let check_out = last_open.succ_opt().ok_or("calendar overflow")?;
    let stay = Stay::new(last_open, check_out);

    let matches = engine.search_listings(&listing.location, &stay).await?;
    info!(
        "search '{}' for {} → {} found {} listing(s)",
        listing.location,
        stay.check_in,
        stay.check_out,
        matches.len()
    );

    match engine
        .create_booking(BookingRequest::new(guest.id, listing.id, stay))
        .await
    {
        Ok(booking) => info!(
            "admitted booking {} [{} → {}] with status {:?}",
            booking.id, booking.stay.check_in, booking.stay.check_out, booking.status
        ),
        Err(e) => tracing::warn!("booking rejected: {e}"),
    }

    let bookings = engine.bookings_by_user(guest.id).await;
    info!("{} now holds {} booking(s)", guest.email, bookings.len());

    Ok(())
}

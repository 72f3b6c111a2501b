//! Walks a form submission through three requests and prints what each
//! page render would see.

use flash_alert::{Alert, AlertManager, MemorySession};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut session = MemorySession::new();

    // Request 1: the form handler validates and redirects
    let form_valid = false;
    let mut alerts = AlertManager::new(&mut session);
    alerts
        .when(form_valid)?
        .otherwise("Please fix the highlighted fields", "danger", "Validation failed")?;
    let keys = alerts.keys().clone();
    drop(alerts);
    session.age_flash_data();

    // Request 2: the redirected page renders the alert
    match Alert::load(&session, &keys)? {
        Some(alert) => info!("Rendering alert: {:?}", alert),
        None => info!("No alert to render"),
    }
    session.age_flash_data();

    // Request 3: already gone
    info!("Alert after reload: {:?}", Alert::load(&session, &keys)?);

    Ok(())
}

//! Minimal embedding example for parks-core
//!
//! This example demonstrates using parks-core as a library in a custom
//! front end. The application owns the store, subscribes a view to it,
//! submits a park and hands a record to a detail view.

use parks_core::{
    MemoryParkStore, ParkPatch, ParkStore, StoreEvent, SubmissionForm, display_order, handoff,
};
use tokio_stream::StreamExt;
use tracing::info;

/// A view that re-renders whenever the store changes
struct ListView<S: ParkStore> {
    store: S,
}

impl<S: ParkStore> ListView<S> {
    fn render(&self) {
        for park in display_order(&self.store.list()) {
            let badge = if park.is_user_submitted() { " (new)" } else { "" };
            println!("  {} - {}{}", park.name, park.address, badge);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // One store for the whole application
    let store = MemoryParkStore::with_windsor_seed();

    let view = ListView {
        store: store.clone(),
    };
    let mut events = store.watch();
    let renderer = tokio::spawn(async move {
        while let Some(event) = events.next().await {
            info!("Re-rendering after {:?}", event);
            view.render();
            if matches!(event, StoreEvent::Patched { .. }) {
                break;
            }
        }
    });

    // Submission flow: validate first, then append
    let mut form = SubmissionForm::new()
        .with_name("Riverfront Off-Leash Area")
        .with_address("Riverside Dr W, Windsor, ON");
    form.toggle_feature("Open Space");
    form.toggle_feature("Parking");
    form.set_rating(4);

    let park = store.append(form.validate()?);
    info!("Submitted park {}", park.id);

    // A later correction goes through patch
    store.patch(&park.id, ParkPatch::new().description("Along the Detroit River"));

    renderer.await?;

    // Navigation hand-off to a detail view, with the record as it is now
    let current = store.get(&park.id).ok_or("submitted park disappeared")?;
    let payload = handoff::encode(&current)?;
    let detail = handoff::decode(&payload)?;
    println!("Detail view payload: {}", serde_json::to_string_pretty(&detail)?);

    Ok(())
}

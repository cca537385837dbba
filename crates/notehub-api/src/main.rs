//! NoteHub API server entry point.

use anyhow::Context;
use chrono::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use notehub_api::{router, AppState};
use notehub_core::{CollectionAccess, NoteAccess, StoredNote, UserRecord};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT - "json" or "text" (default: "text")
    //   RUST_LOG   - standard env filter (default: "notehub_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "notehub_api=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let code_ttl_minutes: i64 = std::env::var("NOTEHUB_CODE_TTL_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);
    let state = AppState::new(Duration::minutes(code_ttl_minutes));

    if std::env::var("NOTEHUB_SEED_DEMO").is_ok() {
        seed_demo(&state).await;
    }

    let bind = std::env::var("NOTEHUB_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    tracing::info!(addr = %bind, "notehub-api listening");

    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Seed a small demo data set and log the ids to poke at with curl.
async fn seed_demo(state: &AppState) {
    let owner = UserRecord::new(Uuid::new_v4(), "demo@notehub.dev");
    let owner_id = owner.id;
    state.store.insert_user(owner).await;

    let collection_id = Uuid::new_v4();
    state
        .store
        .insert_collection(collection_id, CollectionAccess::public())
        .await;

    let note = StoredNote {
        id: Uuid::new_v4(),
        owner_id,
        collection_id,
        title: "Welcome to NoteHub".to_string(),
        content: "This note is public in a public collection.".to_string(),
        access: NoteAccess::public(),
    };
    let note_id = note.id;
    state.store.insert_note(note).await;

    let private = StoredNote {
        id: Uuid::new_v4(),
        owner_id,
        collection_id,
        title: "Owner-only draft".to_string(),
        content: "Private note; only the owner may view it.".to_string(),
        access: NoteAccess::private(),
    };
    let private_id = private.id;
    state.store.insert_note(private).await;

    tracing::info!(
        user_id = %owner_id,
        collection_id = %collection_id,
        note_id = %note_id,
        private_note_id = %private_id,
        "demo data seeded"
    );
}

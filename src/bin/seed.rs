#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! Out-of-band seeder for the shared affirmation pool. The API never writes
//! to `soul_notes`; run this once against a fresh database.

use soulspace_server::config::Config;
use soulspace_server::domain::soul_note;
use soulspace_server::error::AppError;
use soulspace_server::storage::soul_note_repo::SoulNoteRepository;
use soulspace_server::{storage, telemetry};

const SEED_NOTES: [(&str, &str); 10] = [
    ("Take a deep breath. You are exactly where you need to be.", "Comfort"),
    ("The quiet moments are where you find your true strength.", "Reflection"),
    ("You are worthy of rest, peace, and gentle moments.", "Comfort"),
    ("Every pause is a step forward.", "Encouragement"),
    ("Let your worries drift away like clouds.", "Peace"),
    ("You carry kindness in your heart.", "Encouragement"),
    ("Be gentle with yourself today.", "Comfort"),
    ("Growth happens in stillness too.", "Mindfulness"),
    ("Your presence is a gift.", "Encouragement"),
    ("The sun will rise again, and so will you.", "Peace"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    telemetry::init_telemetry(&config.telemetry);

    let pool = storage::init_pool(&config.database_url).await?;
    storage::run_migrations(&pool).await?;

    let repo = SoulNoteRepository::new(pool);
    for (message, category) in SEED_NOTES {
        soul_note::validate_message(message).map_err(AppError::Validation)?;
        repo.create(message, Some(category)).await?;
    }

    tracing::info!(count = SEED_NOTES.len(), "Seeded soul notes");
    Ok(())
}

//! Schema migration and initial product master data.
//!
//! Run once against a fresh database:
//!
//! ```text
//! DATABASE_URL=mysql://... cargo run --bin seed
//! ```
//!
//! Safe to re-run; products whose code already exists are skipped.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pos_api::config::Config;

const INITIAL_PRODUCTS: &[(&str, &str, i64)] = &[
    ("4901681328401", "P-B3A12-BK", 2000),
    ("4901681328402", "P-B3A12-BL", 2000),
    ("4901681328403", "P-B3A12-R", 2000),
    ("4901681328416", "P-B3A12-S", 2000),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let pool = config.database.create_pool().await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    for (code, name, price) in INITIAL_PRODUCTS {
        let exists: Option<(i64,)> =
            sqlx::query_as("SELECT prd_id FROM prd_mst WHERE code = ?")
                .bind(code)
                .fetch_optional(&pool)
                .await?;

        if exists.is_some() {
            tracing::info!(code, "Product already seeded, skipping");
            continue;
        }

        sqlx::query("INSERT INTO prd_mst (code, name, price) VALUES (?, ?, ?)")
            .bind(code)
            .bind(name)
            .bind(price)
            .execute(&pool)
            .await?;

        tracing::info!(code, name, price, "Product seeded");
    }

    Ok(())
}

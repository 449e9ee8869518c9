// src/bin/write_schema_snapshot.rs
use anyhow::{Context, Result};
use std::env;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path =
        env::var("SCHEMA_SNAPSHOT_PATH").unwrap_or_else(|_| "schema.graphql".to_string());
    let sdl = scribe_core::presentation::graphql::schema_sdl();
    std::fs::write(&output_path, sdl)
        .with_context(|| format!("failed to write schema snapshot to {output_path}"))?;
    println!("GraphQL schema snapshot written to {output_path}");
    Ok(())
}

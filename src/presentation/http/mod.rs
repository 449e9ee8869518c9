// src/presentation/http/mod.rs
pub mod routes;
pub mod state;

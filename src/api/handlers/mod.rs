// src/api/handlers/mod.rs
mod assets;
mod health;
mod sentiment;
pub mod ws;

pub use assets::static_file_handler;
pub use health::health_check;
pub use sentiment::{analyze_sentiment, AnalysisResponse};
pub use ws::{ws_handler, FormSession};

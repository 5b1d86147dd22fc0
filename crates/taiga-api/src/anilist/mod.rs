pub mod client;
pub mod error;
pub mod types;

pub use client::{keep_resolved, pick_exact_match, AniListClient};
pub use error::AniListError;

//! AniList metadata client and the normalized media domain model.
//!
//! The `anilist` module hides the GraphQL specifics of the remote
//! service; everything downstream works with the flat [`Media`] record
//! and the [`MediaQuery`] union.

pub mod anilist;
pub mod model;

pub use anilist::{keep_resolved, pick_exact_match, AniListClient, AniListError};
pub use model::{
    EntityRef, Media, MediaKind, MediaQuery, Person, StaffEdge, Studio, TitleSort,
};

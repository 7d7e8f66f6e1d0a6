//! Repository layer: one struct per entity, each holding a `PgPool`
//!
//! All database access goes through these repositories so handlers and
//! services never build SQL themselves.

pub mod audiovisual;
pub mod book;
pub mod reference;
pub mod title;
pub mod user;

pub use audiovisual::AudiovisualRepository;
pub use book::BookRepository;
pub use reference::{
    BookshopRepository, EditorialRepository, GenreRepository, PlatformRepository,
};
pub use title::TitleRepository;
pub use user::UserRepository;

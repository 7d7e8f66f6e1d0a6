//! Database models for the watchdue API

pub mod audiovisual;
pub mod book;
pub mod reference;
pub mod title;
pub mod user;

pub use audiovisual::{Audiovisual, AudiovisualInput};
pub use book::{Book, BookInput};
pub use reference::{Bookshop, Editorial, Genre, GenreInput, Platform, VenueInput};
pub use title::{TitleInfo, TitleSuggestion};
pub use user::{AuthTokens, Claims, User};

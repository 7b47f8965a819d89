//! DEV Models - entity records mirroring the DEV REST API's JSON shapes.
//!
//! Every type here is a passive value populated at decode time. Read shapes
//! live here; the write-side body schemas accepted on create/update live next
//! to the endpoints that send them in `devto-api`, because the remote API does
//! not accept the same shape it returns.

mod de;
pub mod models;

// Re-export key types
pub use models::article::{Article, ArticleFlareTag, ArticleVariant, SharedOrganization};
pub use models::comment::Comment;
pub use models::listing::{Listing, ListingCategory};
pub use models::organization::Organization;
pub use models::podcast::{Podcast, PodcastEpisode};
pub use models::profile_image::ProfileImage;
pub use models::tag::Tag;
pub use models::user::{ReadingList, ReadingListStatus, User};
pub use models::webhook::Webhook;

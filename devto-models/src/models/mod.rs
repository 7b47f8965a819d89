//! Entity model definitions.

pub mod article;
pub mod comment;
pub mod listing;
pub mod organization;
pub mod podcast;
pub mod profile_image;
pub mod tag;
pub mod user;
pub mod webhook;

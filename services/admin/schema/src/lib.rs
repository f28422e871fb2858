//! sea-orm entities for the capvote platform tables the admin service touches.

pub mod caption_votes;
pub mod captions;
pub mod humor_flavor_steps;
pub mod humor_flavors;
pub mod images;
pub mod profiles;

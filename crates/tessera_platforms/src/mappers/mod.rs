//! One mapper per supported platform.

mod bluesky;
mod facebook;
mod generic;
mod gmb;
mod instagram;
mod linkedin;
mod pinterest;
mod reddit;
mod snapchat;
mod threads;
mod tiktok;
mod twitter;
mod youtube;

pub use bluesky::BlueskyMapper;
pub use facebook::FacebookMapper;
pub use generic::GenericMapper;
pub use gmb::GmbMapper;
pub use instagram::InstagramMapper;
pub use linkedin::LinkedinMapper;
pub use pinterest::PinterestMapper;
pub use reddit::RedditMapper;
pub use snapchat::SnapchatMapper;
pub use threads::ThreadsMapper;
pub use tiktok::TiktokMapper;
pub use twitter::TwitterMapper;
pub use youtube::YoutubeMapper;

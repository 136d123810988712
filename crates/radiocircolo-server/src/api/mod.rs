pub mod client;
pub mod podcasts;

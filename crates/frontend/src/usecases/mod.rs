pub mod preload;
pub mod repo_cards;

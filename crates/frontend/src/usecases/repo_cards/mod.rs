//! Featured repository cards on the home page.
//!
//! The home renderer leaves a `#repo-grid` placeholder listing repository
//! URLs; once it is in the document the metadata is fetched (or taken from
//! the session cache) and the placeholder is replaced with cards.

pub mod api;
pub mod view;

pub use api::{cache_key, parse_repo_url, RepoCardError, RepoCards};
pub use view::augment_repo_grid;

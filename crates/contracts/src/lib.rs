//! Shared data model for the portfolio site.
//!
//! Every record here mirrors a JSON document served next to the site:
//! `data/global.json`, `data/pages/{page}.json` and the repository metadata
//! returned by the GitHub REST API. Optional fields default, unknown fields
//! are ignored.

pub mod github;
pub mod pages;
pub mod shared;

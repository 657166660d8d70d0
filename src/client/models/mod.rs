//! GitHub API data models
//!
//! Domain types returned by the GitHub REST API, organized by resource type.

mod org;
mod repo;

pub use org::Org;
pub use repo::{License, Repo};

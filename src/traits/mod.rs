//! Trait definitions for Tracker operations.
//!
//! Each resource type implements the traits it supports, encapsulating
//! API differences in the implementations.

mod fetch_all;
mod resource;

pub use fetch_all::FetchAll;
pub use resource::Resource;

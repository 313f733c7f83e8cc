//! HTTP plumbing shared by the bridge and page components.

pub mod client;

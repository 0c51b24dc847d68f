//! HTTP client construction and single-request probing.
mod client;
mod probe;
mod target;


pub use client::build_client;
pub use probe::{HttpProbe, Probe, ProbeRequest};
pub use target::{request_url, stamped_url, validate_target};

//! Core library for the `roundprobe` CLI.
//!
//! A round-based HTTP smoke/load runner: every round issues one GET per
//! configured path concurrently, waits a bounded time for each completion,
//! and asserts that every completion it observes returned the expected
//! status. Host test suites can drive [`runner::LoadRunner`] directly; the
//! `roundprobe` binary wraps the same entry point.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod runner;

//! Core library for the `limitprobe` CLI.
//!
//! `limitprobe` sends one fixed GET request in a loop for a bounded time and
//! reports each response against a "success" and an "error" (rate-limited)
//! status code, stopping as soon as the error code shows up. The library
//! holds the argument types, the request template and transport, and the
//! probe loop itself; the binary wires them to the terminal.
pub mod args;
pub mod error;
pub mod http;
pub mod probe;

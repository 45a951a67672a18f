//! Minimal HTTP/1.1 responder.
//!
//! This is deliberately not a web framework. Every request gets the same
//! answer, so the layer reduces to three pieces:
//!
//! - **`head`**: drains the request head (everything up to the first blank
//!   line) without parsing method, path, or headers
//! - **`response`**: the fixed `200 OK` HTML response
//! - **`writer`**: serializes a response and writes it to the client
//!
//! ```text
//!   drain head ──▶ build response ──▶ write ──▶ close
//! ```
//!
//! No keep-alive, no chunked transfer, no status codes other than 200.

pub mod head;
pub mod response;
pub mod writer;

//! Test doubles for the image backend.

#![allow(dead_code)]

pub mod mock_backend;
pub mod mock_server;

#[allow(unused_imports)]
pub use mock_backend::{MockBackend, MockBehavior};
#[allow(unused_imports)]
pub use mock_server::{MockServer, MockServerResponse};

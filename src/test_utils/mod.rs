//! Test utilities for unit and HTTP-level testing.
//!
//! This module provides:
//! - In-memory and failing implementations of the store and mail ports
//! - A configuration fixture
//! - `TestAppStateBuilder` for exercising routes without Postgres or Resend

mod app_state_builder;
mod mocks;

pub use app_state_builder::*;
pub use mocks::*;

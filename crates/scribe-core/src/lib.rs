//! # Scribe Core
//!
//! The domain layer of the Scribe content generator.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, the ports infrastructure implements, and calendar-day bucketing.

pub mod calendar;
pub mod domain;
pub mod error;
pub mod ports;

pub use calendar::{Clock, ManualClock, SystemClock};
pub use error::{DomainError, RepoError};

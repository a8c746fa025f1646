//! # Blog Core
//!
//! The domain layer of the blog post API.
//! This crate contains the post lifecycle and its validation rules, with no
//! storage or HTTP dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::DomainError;
pub use validation::{Validateable, ValidationErrors};

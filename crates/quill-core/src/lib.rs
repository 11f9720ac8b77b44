//! # Quill Core
//!
//! The domain layer of the Quill blog platform.
//! This crate contains the post and comment model, the storage ports and the
//! blog service. It performs no I/O of its own.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::BlogService;

//! Core types and errors for the gatedns DNS registration workflow.
//!
//! This crate provides the foundational types used across the gatedns
//! workspace:
//!
//! - **Types**: Request, registry, and DNS provider wire types
//! - **Errors**: Flat error handling with [`GateDnsError`]
//! - **Hostnames**: The canonical hostname generator used for ELB records
//!
//! # Example
//!
//! ```rust,ignore
//! use gatedns_core::{ApplicationRequest, Exposure, Result};
//!
//! fn describe(request: &ApplicationRequest) -> Result<()> {
//!     println!("app: {}", request.app);
//!     println!("target: {}/{}", request.environment, request.region);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/gatedns-core/1.0.0")]

mod error;
pub mod hostname;
pub mod types;

pub use error::{GateDnsError, Result};
pub use types::*;

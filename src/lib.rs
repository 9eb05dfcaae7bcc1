//! # Combined Design Patterns
//!
//! Five classic object-composition patterns, each in its Rust form:
//!
//! ## Pattern 1: Creational Patterns
//! - Singleton (OnceLock)
//! - Factory Method (trait objects)
//!
//! ## Pattern 2: Structural Patterns
//! - Adapter (borrowed legacy system behind the `Product` trait)
//! - Composite (owned children behind the `Component` trait)
//!
//! ## Pattern 3: Behavioral Patterns
//! - Observer (subject holding borrowed observers)
//!
//! Every operation writes to a caller-supplied `std::io::Write`, so the
//! demonstration can be captured in tests. Run it with:
//! ```bash
//! cargo run --bin combined_patterns
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod p1_creational;
pub mod p2_structural;
pub mod p3_behavioral;

pub use config::DemoConfig;
pub use driver::run_demo;
pub use error::{PatternError, Result};

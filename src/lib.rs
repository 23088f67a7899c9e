//! growvec - a growable array with pluggable element lifecycle
//!
//! `Vector` keeps its own geometric capacity schedule and routes every
//! element through caller-chosen duplicate / destroy / default operations.
//! `SString` is a byte string that hands out `Vector`s of owned pieces, and
//! `camel_caser` turns free text into one camelCase identifier per sentence.
//!
//! # Example
//!
//! ```
//! use growvec::{camel_caser, SString, Vector};
//!
//! let mut numbers: Vector<i32> = Vector::new()?;
//! for i in 0..9 {
//!     numbers.push_back(&i)?;
//! }
//! assert_eq!(numbers.capacity(), 16);
//!
//! let mut greeting = SString::from_literal("hello world");
//! greeting.substitute(0, "world", "there")?;
//! assert_eq!(greeting.to_string(), "hello there");
//!
//! let ids = camel_caser("The cat sat. A dog ran!")?.into_strings();
//! assert_eq!(ids, vec!["theCatSat", "aDogRan"]);
//! # Ok::<(), growvec::GrowError>(())
//! ```

pub mod camel;
pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod sstring;
pub mod vector;

pub use camel::{camel_caser, camel_caser_with_policy, CamelCased};
pub use engine::{execute_command, ExecutionContext, ExecutionResult};
pub use error::{GrowError, Result};
pub use output::{format_output, OutputFormat};
pub use sstring::{string_vector, string_vector_with, SString, StringOps};
pub use vector::{Callbacks, ElementOps, GrowthPolicy, Shallow, Vector};

//! Hand-managed growable array of `f64`.
//!
//! [`ArrayD`] owns a contiguous boxed buffer and tracks its logical size
//! separately from the allocated capacity:
//!
//! ```text
//! storage: [ v0 | v1 | ... | v(size-1) | unused ... ]
//!            <------- size --------->
//!            <---------------- capacity ------------->
//! ```
//!
//! Indices and sizes are signed so that negative requests are reported as
//! errors instead of being unrepresentable. Every failed operation leaves
//! the array untouched.
//!
//! # Capacity policy
//!
//! - **Insert into a full array:** capacity grows by
//!   [`ArrayConfig::growth_factor`] (at least [`ArrayConfig::min_capacity`]).
//! - **Resize past capacity:** capacity becomes exactly the requested size.
//! - **Remove / resize down / clear:** capacity is kept (high-water mark).
//! - **[`ArrayD::shrink_to_fit`]:** the only way capacity goes down.
//!
//! ```rust
//! use labkit_arrayd::{ArrayD, ArrayError};
//!
//! let mut arr = ArrayD::from(&[1.0, 2.0, 3.0][..]);
//! arr.insert(9.0, 1).unwrap();
//! assert_eq!(arr.as_slice(), &[1.0, 9.0, 2.0, 3.0]);
//! assert_eq!(arr.remove(0), Ok(1.0));
//! assert!(matches!(arr.get(3), Err(ArrayError::OutOfRange { .. })));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;

pub use array::ArrayD;
pub use config::ArrayConfig;
pub use error::ArrayError;

//! Single module with all `relovec` exports
//!
//! # Examples
//!
//! Import all into current scope:
//!
//! ```
//! use relovec::prelude::*;
//! ```
//!
//! Import all, named:
//!
//! ```
//! use relovec::prelude as rv;
//! let v: rv::Vector<u8> = rv::Vector::new();
//! ```

pub use crate::error::AllocError;
pub use crate::init::{CloneFrom, FillWithDefault, FromFn, MoveFrom};
pub use crate::raw::RawBuf;
pub use crate::relocate::{ByClone, ByMove, ByRelocate, Relocate, Relocation};
pub use crate::vector;
pub use crate::vector::{IntoIter, Vector};
pub use crate::Initializer;
#[cfg(feature = "macro")]
pub use relovec_macro::Relocate;

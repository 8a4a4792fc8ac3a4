//! Pathnet Core - identity objects and relations
//!
//! This crate defines the atomic pieces every network is made of. An
//! [`Object`] is a unique identifier, the [`Relation`] it stands for (the
//! ordered components it connects or traverses) and an open [`Attributes`]
//! bag.
//!
//! # Example
//!
//! ```
//! use pathnet_core::{Object, Relation};
//!
//! let mut vw = Object::new("vw", ["v", "w"]);
//! vw.set("weight", 4);
//!
//! assert_eq!(vw.weight().unwrap(), 4.0);
//! assert_eq!(vw.weight_with(false, 1.0).unwrap(), 1.0);
//! assert_eq!(
//!     Relation::from(["w", "v"]).canonical(false),
//!     vw.relation().canonical(false),
//! );
//! ```

mod attributes;
mod error;
mod object;
mod relation;
mod uid;

pub use attributes::Attributes;
pub use error::{CoreError, Result};
pub use object::{Object, WeightKey, DEFAULT_WEIGHT, WEIGHT_KEY};
pub use relation::Relation;
pub use uid::{UidAllocator, UidOrigin, SYSTEM_UID_PREFIX};

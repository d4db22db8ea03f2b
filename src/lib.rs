//! Groups of bijections of finite sets
//!
//! This crate enumerates every bijection of a finite set onto itself and packages them as the
//! symmetric group of that set, with composition, identity and inverses.
//!
//! The elements of a set are first fixed in a [`Domain`] snapshot, which assigns each element an
//! index of type [`El`]. Bijections are then stored as [`Perm`]utations of those indices, which
//! keeps them plain values with well-defined equality and hashing.
//!
//! ```
//! use bijection_group::BijectionGroup;
//!
//! let group = BijectionGroup::new(vec![1, 2, 3]).unwrap();
//! assert_eq!(group.order(), 6);
//!
//! let rotate = group.from_pairs(vec![(1, 2), (2, 3), (3, 1)]).unwrap();
//! let cubed = group.pow(&rotate, 3).unwrap();
//! assert_eq!(cubed, group.identity());
//! ```
pub mod action;
pub mod assign;
pub mod bijection;
pub mod domain;
pub mod error;
pub mod fold;
pub mod generate;
pub mod group;
pub mod perm;

pub use bijection::{bijections_of, bijections_of_with_config, Bijection};
pub use domain::Domain;
pub use group::{bijection_group, BijectionGroup, Config, Group};
pub use perm::Perm;

/// Index of an element within a [`Domain`].
///
/// Indices are non-negative integers (`u32`).
pub type El = u32;

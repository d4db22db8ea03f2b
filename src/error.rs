//! Error types for permutations, domains, bijections, groups and folds.
use thiserror::Error;

use crate::El;

/// Any errors that might occur while building a [`Perm`](crate::Perm).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PermError {
    /// An image lies outside of `0..degree`.
    #[error("image {image} at index {index} is out of range for degree {degree}")]
    OutOfRange { index: usize, image: El, degree: usize },
    /// Two indices share the same image.
    #[error("image {image} appears more than once")]
    NotInjective { image: El },
    /// Two permutations of different degrees were combined.
    #[error("degree mismatch: expected {expected}, found {found}")]
    DegreeMismatch { expected: usize, found: usize },
    /// The degree does not fit into an [`El`].
    #[error("degree {0} exceeds the largest representable element")]
    DegreeTooLarge(usize),
}

/// Any errors that might occur while taking a [`Domain`](crate::Domain) snapshot.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The same element was supplied at two positions.
    #[error("element at position {second} duplicates the element at position {first}")]
    DuplicateElement { first: usize, second: usize },
    /// The domain has more elements than an [`El`] can index.
    #[error("domain of {0} elements exceeds the largest representable element")]
    TooLarge(usize),
}

/// Any errors that might occur while building a [`Bijection`](crate::Bijection) from a mapping.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BijectionError {
    /// A source element of the mapping is not part of the domain.
    #[error("a source element is not part of the domain")]
    UnknownSource,
    /// An image of the mapping is not part of the domain.
    #[error("an image is not part of the domain")]
    UnknownImage,
    /// A domain element has no image.
    #[error("domain element at index {0} has no image")]
    MissingSource(El),
    /// A domain element is given more than one image.
    #[error("domain element at index {0} is given more than one image")]
    DuplicateSource(El),
    /// A domain element is the image of more than one source.
    #[error("domain element at index {0} is the image of more than one source")]
    DuplicateImage(El),
    /// The positional images do not form a permutation.
    #[error("images do not form a permutation: {0}")]
    Perm(#[from] PermError),
}

/// Group law checked by [`BijectionGroup::check_laws`](crate::BijectionGroup::check_laws).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Law {
    Closure,
    Identity,
    Inverse,
    Associativity,
}

/// Any errors that might occur while building or operating on a
/// [`BijectionGroup`](crate::BijectionGroup).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    /// An operand is not a bijection over the group's own domain.
    #[error("bijection is not defined over the group's domain")]
    DomainMismatch,
    /// Enumerating all bijections of the domain was refused.
    #[error("domain of {size} elements exceeds the configured maximum of {max}")]
    DomainTooLarge { size: usize, max: usize },
    /// A group law does not hold over the carrier set.
    #[error("group law violated: {0:?}")]
    LawViolation(Law),
    /// Taking the domain snapshot failed.
    #[error("invalid domain: {0}")]
    Domain(#[from] DomainError),
    /// Building a bijection failed.
    #[error("invalid bijection: {0}")]
    Bijection(#[from] BijectionError),
}

/// Any errors that might occur within [`zip`](crate::fold::zip).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FoldError {
    /// There must be exactly one operator fewer than there are operands.
    #[error("{operators} operators cannot fold {operands} operands")]
    CountMismatch { operands: usize, operators: usize },
    /// An operator produced no result.
    #[error("operator `{op}` at step {step} produced no result")]
    Undefined { step: usize, op: String },
}

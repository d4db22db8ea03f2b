//! Permutations of index sets.
use std::fmt;

use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::action::RightAction;
use crate::assign::{Assign, AssignFn, AssignValue};
use crate::error::PermError;
use crate::El;

/// A permutation of the index set {0, ..., n-1}.
///
/// A permutation rearranges the elements of a finite set. It is a bijection from a set to the same
/// set. Here n is the permutation's degree, which is fixed on construction. Bijections of
/// arbitrary finite sets are represented by a permutation of the indices of a
/// [`Domain`](crate::Domain) snapshot.
///
/// The permutation is stored as the images of 0, ..., n-1. Every constructor ensures these form a
/// permutation, so any [`Perm`] value is a bijection.
///
/// Composing permutations via [`RightAction`] panics when the degrees differ.
/// Use [`Perm::then`] for a checked composition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Perm {
    images: Box<[El]>,
}

impl Perm {
    /// The identity permutation of the given degree.
    ///
    /// Panics when the degree does not fit into an [`El`].
    pub fn identity(degree: usize) -> Perm {
        assert!(degree <= El::max_value() as usize);
        Perm {
            images: (0..degree as El).collect(),
        }
    }

    /// Create a permutation from a vector containing the images of 0..n.
    pub fn from_vec(images: Vec<El>) -> Result<Perm, PermError> {
        Self::from_vec_with_scratch(images, &mut vec![])
    }

    /// Create a permutation from a vector containing the images of 0..n.
    ///
    /// The last parameter is used as scratch space and will be overwritten.
    pub fn from_vec_with_scratch(
        images: Vec<El>,
        scratch: &mut Vec<bool>,
    ) -> Result<Perm, PermError> {
        let degree = images.len();
        if degree > El::max_value() as usize {
            return Err(PermError::DegreeTooLarge(degree));
        }

        let seen = scratch;
        seen.clear();
        seen.resize(degree, false);

        for (index, &image) in images.iter().enumerate() {
            let i = image as usize;
            if i >= degree {
                return Err(PermError::OutOfRange {
                    index,
                    image,
                    degree,
                });
            }
            if seen[i] {
                return Err(PermError::NotInjective { image });
            }
            seen[i] = true;
        }

        Ok(Perm {
            images: images.into_boxed_slice(),
        })
    }

    /// Wrap images already known to form a permutation.
    pub(crate) fn from_vec_unchecked(images: Vec<El>) -> Perm {
        debug_assert!(Self::from_vec(images.clone()).is_ok());
        Perm {
            images: images.into_boxed_slice(),
        }
    }

    /// Number of points this permutation acts on.
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// The images of 0, ..., n-1.
    pub fn images(&self) -> &[El] {
        &self.images
    }

    /// The image of a single index.
    ///
    /// Indices outside of 0..n are fixed.
    pub fn image(&self, el: El) -> El {
        self.images.get(el as usize).cloned().unwrap_or(el)
    }

    /// Whether this permutation fixes every index.
    pub fn is_identity(&self) -> bool {
        self.images
            .iter()
            .enumerate()
            .all(|(i, &p_i)| i as El == p_i)
    }

    /// The permutation applying `self` first, then `next`.
    pub fn then(&self, next: &Perm) -> Result<Perm, PermError> {
        self.check_degree(next)?;
        Ok(next.right_apply(self.clone()))
    }

    fn check_degree(&self, other: &Perm) -> Result<(), PermError> {
        if self.degree() == other.degree() {
            Ok(())
        } else {
            Err(PermError::DegreeMismatch {
                expected: self.degree(),
                found: other.degree(),
            })
        }
    }

    fn resize_uninitialized(&mut self, degree: usize) {
        if self.images.len() != degree {
            self.images = vec![0; degree].into_boxed_slice();
        }
    }

    /// The inverse of this permutation.
    pub fn inverse<'a>(&'a self) -> impl AssignValue<Perm, Scratch = ()> + 'a {
        AssignFn(move |target: &mut Perm| {
            target.resize_uninitialized(self.degree());
            for (i, &p_i) in self.images.iter().enumerate() {
                target.images[p_i as usize] = i as El;
            }
        })
    }

    /// The square of this permutation.
    pub fn square<'a>(&'a self) -> impl AssignValue<Perm, Scratch = ()> + 'a {
        AssignFn(move |target: &mut Perm| {
            target.clone_from(self);
            self.right_apply_to(target);
        })
    }

    /// A power of this permutation.
    ///
    /// Negative exponents raise the inverse. This performs exponentiation by squaring.
    pub fn pow<E>(&self, exponent: E) -> Power<E> {
        Power {
            base: self,
            exponent,
        }
    }

    /// The proper cycles of this permutation.
    ///
    /// Each cycle starts at its smallest index and cycles are ordered by that index. Fixed points
    /// are omitted.
    pub fn cycles(&self) -> Vec<Vec<El>> {
        let mut seen = vec![false; self.degree()];
        let mut cycles = vec![];

        for start in 0..self.degree() {
            if seen[start] || self.images[start] as usize == start {
                continue;
            }
            let mut cycle = vec![];
            let mut el = start;
            while !seen[el] {
                seen[el] = true;
                cycle.push(el as El);
                el = self.images[el] as usize;
            }
            cycles.push(cycle);
        }

        cycles
    }

    /// The smallest positive `k` such that `self` raised to `k` is the identity.
    ///
    /// This is the least common multiple of the cycle lengths. Returns `None` if it overflows
    /// `usize`.
    pub fn order(&self) -> Option<usize> {
        self.cycles().iter().try_fold(1usize, |acc, cycle| {
            let len = cycle.len();
            (acc / acc.gcd(&len)).checked_mul(len)
        })
    }
}

impl From<Perm> for Vec<El> {
    fn from(perm: Perm) -> Vec<El> {
        perm.images.into_vec()
    }
}

/// Composition of a permutation on the right.
///
/// `p.right_apply(q)` maps each index `i` to `p(q(i))`.
impl RightAction<Perm> for Perm {
    type Scratch = ();

    fn right_apply_to_with_scratch(&self, perm: &mut Perm, _: &mut ()) {
        assert_eq!(self.degree(), perm.degree());
        for el in perm.images.iter_mut() {
            *el = self.images[*el as usize];
        }
    }
}

/// Cycle notation, e.g. `(0 2 1)(3 4)`. The identity is written `()`.
impl fmt::Display for Perm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return f.write_str("()");
        }
        for cycle in cycles {
            f.write_str("(")?;
            for (i, el) in cycle.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                fmt::Display::fmt(el, f)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A power of a permutation, see [`Perm::pow`].
pub struct Power<'a, E> {
    pub base: &'a Perm,
    pub exponent: E,
}

impl<'a, E> AssignValue<Perm> for Power<'a, E>
where
    E: Integer + ToPrimitive,
{
    type Scratch = Perm;

    fn assign_to_with_scratch(self, target: &mut Perm, scratch: &mut Perm) {
        let Power {
            base: perm,
            exponent: exp,
        } = self;

        if exp < E::zero() {
            // Roles are swapped so the final inversion writes into the real target
            let (target, scratch) = (scratch, target);

            // Only half the exponent is negated, so `MIN` of a signed type cannot overflow
            let odd = exp.is_odd();
            let half_exp = E::zero() - exp / (E::one() + E::one());

            scratch.assign_with_scratch(perm.pow(half_exp), target);
            target.assign(scratch.square());
            if odd {
                perm.right_apply_to(target);
            }

            scratch.assign(target.inverse());
            return;
        }

        match exp.to_usize() {
            Some(0) => target.clone_from(&Perm::identity(perm.degree())),
            Some(1) => target.clone_from(perm),
            Some(2) => target.assign(perm.square()),
            Some(3) => {
                target.assign(perm.square());
                perm.right_apply_to(target);
            }
            _ => {
                let odd = exp.is_odd();
                let half_exp = exp / (E::one() + E::one());

                scratch.assign_with_scratch(perm.pow(half_exp), target);
                target.assign(scratch.square());

                if odd {
                    perm.right_apply_to(target);
                }
            }
        }
    }

    fn get_with_scratch(self, scratch: &mut Perm) -> Perm {
        let mut result = Perm::default();
        self.assign_to_with_scratch(&mut result, scratch);
        result
    }
}

//! Bijections of finite sets and their exhaustive enumeration.
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::assign::AssignValue;
use crate::domain::Domain;
use crate::error::{BijectionError, GroupError, PermError};
use crate::generate::permutations_in_place;
use crate::group::Config;
use crate::perm::Perm;
use crate::El;

/// A bijection of a [`Domain`] onto itself.
///
/// The bijection sends the i-th element of the domain snapshot to the element at index `perm[i]`.
/// Bijections over the same domain share the snapshot.
///
/// Two bijections are equal when they are defined over equal domains and send every element to
/// the same image.
pub struct Bijection<T> {
    domain: Arc<Domain<T>>,
    perm: Perm,
}

impl<T> Clone for Bijection<T> {
    fn clone(&self) -> Self {
        Bijection {
            domain: self.domain.clone(),
            perm: self.perm.clone(),
        }
    }
}

impl<T> Bijection<T>
where
    T: Eq + Hash,
{
    fn from_parts(domain: Arc<Domain<T>>, perm: Perm) -> Bijection<T> {
        debug_assert_eq!(domain.len(), perm.degree());
        Bijection { domain, perm }
    }

    /// The bijection sending every element to itself.
    pub fn identity(domain: Arc<Domain<T>>) -> Bijection<T> {
        let perm = Perm::identity(domain.len());
        Self::from_parts(domain, perm)
    }

    /// Create a bijection from the indices of the images of each domain element, in snapshot
    /// order.
    pub fn from_images(
        domain: Arc<Domain<T>>,
        images: Vec<El>,
    ) -> Result<Bijection<T>, BijectionError> {
        if images.len() != domain.len() {
            return Err(PermError::DegreeMismatch {
                expected: domain.len(),
                found: images.len(),
            }
            .into());
        }
        let perm = Perm::from_vec(images)?;
        Ok(Self::from_parts(domain, perm))
    }

    /// Create a bijection from `(source, image)` pairs.
    ///
    /// Every domain element must appear exactly once as a source and exactly once as an image.
    pub fn from_pairs<I, B>(domain: Arc<Domain<T>>, pairs: I) -> Result<Bijection<T>, BijectionError>
    where
        I: IntoIterator<Item = (B, B)>,
        B: Borrow<T>,
    {
        let n = domain.len();
        let mut images: Vec<Option<El>> = vec![None; n];
        let mut hit = vec![false; n];

        for (source, image) in pairs {
            let source = domain
                .index_of(source.borrow())
                .ok_or(BijectionError::UnknownSource)?;
            let image = domain
                .index_of(image.borrow())
                .ok_or(BijectionError::UnknownImage)?;

            if images[source as usize].replace(image).is_some() {
                return Err(BijectionError::DuplicateSource(source));
            }
            if hit[image as usize] {
                return Err(BijectionError::DuplicateImage(image));
            }
            hit[image as usize] = true;
        }

        let images = images
            .into_iter()
            .enumerate()
            .map(|(i, image)| image.ok_or(BijectionError::MissingSource(i as El)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_parts(domain, Perm::from_vec_unchecked(images)))
    }

    /// The image of an element, or `None` if it is not part of the domain.
    pub fn apply(&self, element: &T) -> Option<&T> {
        let el = self.domain.index_of(element)?;
        self.domain.get(self.perm.image(el))
    }

    /// Whether both bijections are defined over the same domain.
    pub fn same_domain(&self, other: &Bijection<T>) -> bool {
        Arc::ptr_eq(&self.domain, &other.domain) || self.domain == other.domain
    }

    /// Whether this bijection is defined over the given domain.
    pub fn is_over(&self, domain: &Arc<Domain<T>>) -> bool {
        Arc::ptr_eq(&self.domain, domain) || *self.domain == **domain
    }

    /// The bijection applying `self` first, then `next`.
    ///
    /// Returns `None` if the bijections are defined over different domains.
    pub fn then(&self, next: &Bijection<T>) -> Option<Bijection<T>> {
        if !self.same_domain(next) {
            return None;
        }
        let perm = self.perm.then(&next.perm).ok()?;
        Some(Self::from_parts(self.domain.clone(), perm))
    }

    /// The bijection with every `(source, image)` pair reversed.
    pub fn inverse(&self) -> Bijection<T> {
        Self::from_parts(self.domain.clone(), self.perm.inverse().get())
    }

    /// Copy this bijection into a source to image map, in snapshot order.
    pub fn to_map(&self) -> IndexMap<T, T>
    where
        T: Clone,
    {
        self.pairs()
            .map(|(source, image)| (source.clone(), image.clone()))
            .collect()
    }
}

impl<T> Bijection<T> {
    /// The domain snapshot this bijection is defined over.
    pub fn domain(&self) -> &Arc<Domain<T>> {
        &self.domain
    }

    /// The underlying permutation of snapshot indices.
    pub fn perm(&self) -> &Perm {
        &self.perm
    }

    pub fn is_identity(&self) -> bool {
        self.perm.is_identity()
    }

    /// All `(source, image)` pairs, in snapshot order.
    pub fn pairs(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.domain
            .iter()
            .zip(self.perm.images())
            .filter_map(move |(source, &image)| Some((source, self.domain.get(image)?)))
    }

    /// The nontrivial cycles, each listed from its earliest element in snapshot order.
    ///
    /// Every element of a cycle is sent to the next one, and the last back to the first. Fixed
    /// elements are omitted, so the identity has no cycles.
    pub fn cycles(&self) -> Vec<Vec<&T>> {
        self.perm
            .cycles()
            .into_iter()
            .map(|cycle| {
                cycle
                    .into_iter()
                    .filter_map(|index| self.domain.get(index))
                    .collect()
            })
            .collect()
    }

    /// The least positive number of self-compositions giving the identity.
    ///
    /// Returns `None` if that number does not fit a `usize`.
    pub fn order(&self) -> Option<usize> {
        self.perm.order()
    }
}

impl<T> PartialEq for Bijection<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Bijection<T>) -> bool {
        self.perm == other.perm && self.same_domain(other)
    }
}

impl<T> Eq for Bijection<T> where T: Eq + Hash {}

/// Hashes only the permutation, which equal bijections always share.
impl<T> Hash for Bijection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.perm.hash(state);
    }
}

impl<T> fmt::Display for Bijection<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, (source, image)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} -> {}", source, image)?;
        }
        f.write_str("}")
    }
}

impl<T> fmt::Debug for Bijection<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.pairs()).finish()
    }
}

/// All bijections over a domain snapshot.
///
/// Every permutation of the snapshot's indices is paired position by position with the snapshot
/// order. The result has `n!` members, in generation order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(size = domain.len())))]
pub fn bijections_over<T>(domain: &Arc<Domain<T>>) -> Vec<Bijection<T>>
where
    T: Eq + Hash,
{
    let mut indices: Vec<El> = (0..domain.len() as El).collect();
    let mut bijections = Vec::new();

    permutations_in_place(&mut indices, |arrangement| {
        let perm = Perm::from_vec_unchecked(arrangement.to_vec());
        bijections.push(Bijection::from_parts(domain.clone(), perm));
    });

    #[cfg(feature = "tracing")]
    tracing::debug!("Materialized {} bijections", bijections.len());

    bijections
}

/// All bijections of the distinct elements of an iterator.
///
/// Domains larger than [`Config::DEFAULT_MAX_DEGREE`] are refused with
/// [`GroupError::DomainTooLarge`], see [`bijections_of_with_config`].
///
/// ```
/// use bijection_group::bijections_of;
///
/// let bijections = bijections_of(vec![1, 2, 3]).unwrap();
/// assert_eq!(bijections.len(), 6);
/// assert!(bijections[0].is_identity());
/// ```
pub fn bijections_of<T, I>(elements: I) -> Result<Vec<Bijection<T>>, GroupError>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    bijections_of_with_config(elements, &Config::default())
}

/// All bijections of the distinct elements of an iterator, refusing domains larger than
/// `config.max_degree`.
pub fn bijections_of_with_config<T, I>(
    elements: I,
    config: &Config,
) -> Result<Vec<Bijection<T>>, GroupError>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let domain = Arc::new(Domain::new(elements)?);
    config.check(domain.len())?;
    Ok(bijections_over(&domain))
}

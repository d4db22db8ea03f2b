//! The group of all bijections of a finite set.
use std::hash::Hash;
use std::sync::Arc;

use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::assign::AssignValue;
use crate::bijection::{bijections_over, Bijection};
use crate::domain::Domain;
use crate::error::{GroupError, Law};
use crate::generate::factorial;

/// A group, written multiplicatively.
///
/// Implementations must satisfy the group laws over their elements:
///
/// * associativity: `op(op(a, b), c) == op(a, op(b, c))`
/// * identity: `op(e, a) == op(a, e) == a`
/// * inverses: `op(a, inverse(a)) == op(inverse(a), a) == e`
pub trait Group {
    /// Type of the group's elements.
    type Element;
    /// Error returned when an operand does not belong to the group.
    type Error;

    /// The group operation.
    fn binary_operation(
        &self,
        one: &Self::Element,
        other: &Self::Element,
    ) -> Result<Self::Element, Self::Error>;

    /// The identity element.
    fn identity(&self) -> Self::Element;

    /// The unique inverse of an element.
    fn inverse_of(&self, element: &Self::Element) -> Result<Self::Element, Self::Error>;
}

/// Bijection group configuration.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// The largest domain whose bijections will be enumerated.
    ///
    /// Defaults to [`Config::DEFAULT_MAX_DEGREE`].
    pub max_degree: usize,
}

impl Config {
    /// The default largest domain size, yielding at most 10! = 3628800 bijections.
    pub const DEFAULT_MAX_DEGREE: usize = 10;

    /// Fail with [`GroupError::DomainTooLarge`] unless a domain of `size` elements may be
    /// enumerated.
    pub fn check(&self, size: usize) -> Result<(), GroupError> {
        if size > self.max_degree || factorial(size).is_none() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Refusing domain of {} elements, maximum is {}",
                size,
                self.max_degree
            );
            return Err(GroupError::DomainTooLarge {
                size,
                max: self.max_degree,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_degree: Self::DEFAULT_MAX_DEGREE,
        }
    }
}

/// The symmetric group of a finite set: all of its bijections under composition.
///
/// The carrier set is enumerated eagerly on construction and never changes afterwards.
/// Composition applies its left operand first, see [`BijectionGroup::compose`].
#[derive(Debug)]
pub struct BijectionGroup<T> {
    domain: Arc<Domain<T>>,
    elements: Vec<Bijection<T>>,
}

impl<T> Clone for BijectionGroup<T> {
    fn clone(&self) -> Self {
        BijectionGroup {
            domain: self.domain.clone(),
            elements: self.elements.clone(),
        }
    }
}

impl<T> BijectionGroup<T>
where
    T: Eq + Hash,
{
    /// The group of bijections of the distinct elements of an iterator, using the default
    /// [`Config`].
    pub fn new<I>(elements: I) -> Result<BijectionGroup<T>, GroupError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_config(elements, &Config::default())
    }

    /// The group of bijections of the distinct elements of an iterator.
    pub fn with_config<I>(elements: I, config: &Config) -> Result<BijectionGroup<T>, GroupError>
    where
        I: IntoIterator<Item = T>,
    {
        let domain = Arc::new(Domain::new(elements)?);
        Self::over(domain, config)
    }

    /// The group of bijections of an existing domain snapshot.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(size = domain.len())))]
    pub fn over(domain: Arc<Domain<T>>, config: &Config) -> Result<BijectionGroup<T>, GroupError> {
        config.check(domain.len())?;
        let elements = bijections_over(&domain);
        Ok(BijectionGroup { domain, elements })
    }

    /// The domain snapshot all members are defined over.
    pub fn domain(&self) -> &Arc<Domain<T>> {
        &self.domain
    }

    /// The carrier set, in generation order.
    pub fn elements(&self) -> &[Bijection<T>] {
        &self.elements
    }

    /// Number of members, which is the factorial of the domain size.
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// Whether a bijection is a member of this group.
    pub fn contains(&self, bijection: &Bijection<T>) -> bool {
        bijection.is_over(&self.domain)
    }

    /// Build a member from `(source, image)` pairs over this group's domain.
    pub fn from_pairs<I, B>(&self, pairs: I) -> Result<Bijection<T>, GroupError>
    where
        I: IntoIterator<Item = (B, B)>,
        B: std::borrow::Borrow<T>,
    {
        Ok(Bijection::from_pairs(self.domain.clone(), pairs)?)
    }

    fn check_member(&self, bijection: &Bijection<T>) -> Result<(), GroupError> {
        if self.contains(bijection) {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!("Rejecting bijection over a foreign domain");
            Err(GroupError::DomainMismatch)
        }
    }

    /// The bijection applying `f` first, then `g`.
    pub fn compose(&self, f: &Bijection<T>, g: &Bijection<T>) -> Result<Bijection<T>, GroupError> {
        self.check_member(f)?;
        self.check_member(g)?;
        f.then(g).ok_or(GroupError::DomainMismatch)
    }

    /// The bijection sending every element to itself.
    pub fn identity(&self) -> Bijection<T> {
        Bijection::identity(self.domain.clone())
    }

    /// The bijection reversing every `(source, image)` pair of `f`.
    pub fn inverse_of(&self, f: &Bijection<T>) -> Result<Bijection<T>, GroupError> {
        self.check_member(f)?;
        Ok(f.inverse())
    }

    /// `f` composed with itself `exponent` times.
    ///
    /// Negative exponents compose the inverse, a zero exponent gives the identity.
    pub fn pow<E>(&self, f: &Bijection<T>, exponent: E) -> Result<Bijection<T>, GroupError>
    where
        E: Integer + ToPrimitive,
    {
        self.check_member(f)?;
        let perm = f.perm().pow(exponent).get();
        Ok(Bijection::from_images(self.domain.clone(), Vec::from(perm))?)
    }

    /// Verify the group laws over the whole carrier set.
    ///
    /// Checks closure and inverses for every member and pair of members, the identity against
    /// every member, and associativity for every triple. This is cubic in the group order and
    /// meant for small domains.
    pub fn check_laws(&self) -> Result<(), GroupError> {
        let identity = self.identity();
        if !self.elements.contains(&identity) {
            return Err(GroupError::LawViolation(Law::Closure));
        }

        for f in &self.elements {
            if self.compose(&identity, f)? != *f || self.compose(f, &identity)? != *f {
                return Err(GroupError::LawViolation(Law::Identity));
            }

            let inverse = self.inverse_of(f)?;
            if !self.elements.contains(&inverse) {
                return Err(GroupError::LawViolation(Law::Closure));
            }
            if self.compose(f, &inverse)? != identity || self.compose(&inverse, f)? != identity {
                return Err(GroupError::LawViolation(Law::Inverse));
            }

            for g in &self.elements {
                let fg = self.compose(f, g)?;
                if !self.elements.contains(&fg) {
                    return Err(GroupError::LawViolation(Law::Closure));
                }
                for h in &self.elements {
                    if self.compose(&fg, h)? != self.compose(f, &self.compose(g, h)?)? {
                        return Err(GroupError::LawViolation(Law::Associativity));
                    }
                }
            }
        }

        Ok(())
    }
}

impl<T> Group for BijectionGroup<T>
where
    T: Eq + Hash,
{
    type Element = Bijection<T>;
    type Error = GroupError;

    fn binary_operation(
        &self,
        one: &Bijection<T>,
        other: &Bijection<T>,
    ) -> Result<Bijection<T>, GroupError> {
        self.compose(one, other)
    }

    fn identity(&self) -> Bijection<T> {
        BijectionGroup::identity(self)
    }

    fn inverse_of(&self, element: &Bijection<T>) -> Result<Bijection<T>, GroupError> {
        BijectionGroup::inverse_of(self, element)
    }
}

/// The group of bijections of the distinct elements of an iterator.
pub fn bijection_group<T, I>(elements: I) -> Result<BijectionGroup<T>, GroupError>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    BijectionGroup::new(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn rotation_of_three() {
        let group = BijectionGroup::new(vec![1, 2, 3]).unwrap();
        assert_eq!(group.order(), 6);

        let rotate = group.from_pairs(vec![(1, 2), (2, 3), (3, 1)]).unwrap();
        let twice = group.compose(&rotate, &rotate).unwrap();
        let thrice = group.compose(&twice, &rotate).unwrap();
        assert_eq!(thrice, group.identity());
        for x in [1, 2, 3].iter() {
            assert_eq!(thrice.apply(x), Some(x));
        }

        let inverse = group.inverse_of(&rotate).unwrap();
        assert_eq!(inverse.apply(&2), Some(&1));
        assert_eq!(inverse.apply(&3), Some(&2));
        assert_eq!(inverse.apply(&1), Some(&3));
        assert_eq!(group.pow(&rotate, -1).unwrap(), inverse);
        assert_eq!(group.pow(&rotate, 2u8).unwrap(), twice);
    }

    #[test]
    fn laws_hold() {
        for n in 0..=4u8 {
            BijectionGroup::new(0..n).unwrap().check_laws().unwrap();
        }
    }

    #[test]
    fn trivial_groups() {
        let empty = BijectionGroup::<u8>::new(None).unwrap();
        assert_eq!(empty.order(), 1);
        let only = &empty.elements()[0];
        assert_eq!(*only, empty.identity());
        assert_eq!(empty.inverse_of(only).unwrap(), *only);

        let single = bijection_group(Some("x")).unwrap();
        assert_eq!(single.order(), 1);
        let only = &single.elements()[0];
        assert_eq!(only.apply(&"x"), Some(&"x"));
        assert_eq!(*only, single.identity());
        assert_eq!(single.inverse_of(only).unwrap(), *only);
    }

    #[test]
    fn rejects_large_domains() {
        let config = Config { max_degree: 3 };
        assert_eq!(
            BijectionGroup::with_config(0..4, &config).unwrap_err(),
            GroupError::DomainTooLarge { size: 4, max: 3 }
        );
        assert_eq!(
            BijectionGroup::with_config(0..3, &config).unwrap().order(),
            6
        );
    }

    #[test]
    fn config_check_bounds() {
        let config = Config::default();
        assert_eq!(config.check(10), Ok(()));
        assert_eq!(
            config.check(11),
            Err(GroupError::DomainTooLarge { size: 11, max: 10 })
        );

        let unbounded = Config {
            max_degree: usize::MAX,
        };
        assert_eq!(unbounded.check(12), Ok(()));
        assert_eq!(
            unbounded.check(21),
            Err(GroupError::DomainTooLarge {
                size: 21,
                max: usize::MAX
            })
        );
    }

    #[test]
    fn clones_without_cloneable_elements() {
        #[derive(Debug, PartialEq, Eq, Hash)]
        struct Token(u8);

        let group = BijectionGroup::new(vec![Token(0), Token(1)]).unwrap();
        let copy = group.clone();
        assert!(Arc::ptr_eq(group.domain(), copy.domain()));
        assert_eq!(copy.elements(), group.elements());

        let swap = group.elements()[1].clone();
        assert_eq!(swap.apply(&Token(0)), Some(&Token(1)));
        assert!(copy.contains(&swap));
    }

    #[test]
    fn rejects_foreign_bijections() {
        let group = BijectionGroup::new(vec![1, 2, 3]).unwrap();
        let other = BijectionGroup::new(vec![1, 2, 4]).unwrap();
        let f = &group.elements()[1];
        let g = &other.elements()[1];

        assert_eq!(group.compose(f, g), Err(GroupError::DomainMismatch));
        assert_eq!(group.compose(g, f), Err(GroupError::DomainMismatch));
        assert_eq!(group.inverse_of(g), Err(GroupError::DomainMismatch));
        assert!(!group.contains(g));
    }

    #[test]
    fn equal_domains_interoperate() {
        let a = BijectionGroup::new(vec!['a', 'b', 'c']).unwrap();
        let b = BijectionGroup::new(vec!['a', 'b', 'c']).unwrap();
        let f = &b.elements()[4];
        assert!(a.contains(f));
        let inverse = a.inverse_of(f).unwrap();
        assert_eq!(a.compose(f, &inverse).unwrap(), a.identity());
    }

    #[test]
    fn group_trait_delegates() {
        fn square<G: Group>(group: &G, x: &G::Element) -> Result<G::Element, G::Error> {
            group.binary_operation(x, x)
        }

        let group = BijectionGroup::new(vec![1, 2, 3]).unwrap();
        let swap = group.from_pairs(vec![(1, 2), (2, 1), (3, 3)]).unwrap();
        assert_eq!(square(&group, &swap).unwrap(), Group::identity(&group));
        assert_eq!(Group::inverse_of(&group, &swap).unwrap(), swap);
    }

    proptest! {
        #[test]
        fn identity_and_inverses(n in 0..=6u32, pick in any::<prop::sample::Index>()) {
            let group = BijectionGroup::new(0..n).unwrap();
            let f = pick.get(group.elements());
            let e = group.identity();

            for x in 0..n {
                prop_assert_eq!(e.apply(&x), Some(&x));
            }

            let left = group.compose(&e, f).unwrap();
            let right = group.compose(f, &e).unwrap();
            let inverse = group.inverse_of(f).unwrap();
            let cancel_right = group.compose(f, &inverse).unwrap();
            let cancel_left = group.compose(&inverse, f).unwrap();
            for x in 0..n {
                prop_assert_eq!(left.apply(&x), f.apply(&x));
                prop_assert_eq!(right.apply(&x), f.apply(&x));
                prop_assert_eq!(cancel_right.apply(&x), Some(&x));
                prop_assert_eq!(cancel_left.apply(&x), Some(&x));
            }
        }

        #[test]
        fn composition_is_associative(
            n in 0..=6u32,
            picks in any::<[prop::sample::Index; 3]>(),
        ) {
            let group = BijectionGroup::new(0..n).unwrap();
            let [f, g, h] = [
                picks[0].get(group.elements()),
                picks[1].get(group.elements()),
                picks[2].get(group.elements()),
            ];

            let fg_h = group.compose(&group.compose(f, g).unwrap(), h).unwrap();
            let f_gh = group.compose(f, &group.compose(g, h).unwrap()).unwrap();
            for x in 0..n {
                prop_assert_eq!(fg_h.apply(&x), f_gh.apply(&x));
            }
            prop_assert!(group.elements().contains(&fg_h));
        }
    }
}

//! Ordered snapshots of finite sets.
use std::hash::Hash;

use indexmap::IndexSet;

use crate::error::DomainError;
use crate::El;

/// A finite set with a fixed iteration order.
///
/// Each element is identified by its position in the snapshot, an [`El`] index. The order is fixed
/// when the snapshot is taken and never changes, so indices stay valid for the lifetime of the
/// domain.
#[derive(Clone, Debug)]
pub struct Domain<T> {
    elements: IndexSet<T>,
}

impl<T> Domain<T>
where
    T: Eq + Hash,
{
    /// Take a snapshot of the distinct elements of an iterator.
    ///
    /// The first occurrence of an element fixes its position, later duplicates are dropped.
    pub fn new<I>(elements: I) -> Result<Domain<T>, DomainError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::checked(elements.into_iter().collect())
    }

    /// Take a snapshot of a vector whose elements must all be distinct.
    pub fn from_distinct(elements: Vec<T>) -> Result<Domain<T>, DomainError> {
        let mut set = IndexSet::with_capacity(elements.len());
        for (second, element) in elements.into_iter().enumerate() {
            let (first, inserted) = set.insert_full(element);
            if !inserted {
                return Err(DomainError::DuplicateElement { first, second });
            }
        }
        Self::checked(set)
    }

    fn checked(elements: IndexSet<T>) -> Result<Domain<T>, DomainError> {
        if elements.len() > El::max_value() as usize {
            return Err(DomainError::TooLarge(elements.len()));
        }
        Ok(Domain { elements })
    }

    /// Index of an element, if it is part of this domain.
    pub fn index_of(&self, element: &T) -> Option<El> {
        self.elements.get_index_of(element).map(|i| i as El)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }
}

impl<T> Domain<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at an index.
    pub fn get(&self, el: El) -> Option<&T> {
        self.elements.get_index(el as usize)
    }

    /// Elements in snapshot order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Elements in snapshot order, as a slice.
    pub fn elements(&self) -> &indexmap::set::Slice<T> {
        self.elements.as_slice()
    }
}

/// Two domains are equal when they list the same elements in the same order.
impl<T> PartialEq for Domain<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Domain<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Domain<T> where T: Eq + Hash {}

impl<'a, T> IntoIterator for &'a Domain<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_order_is_first_occurrence() {
        let domain = Domain::new(vec!["c", "a", "c", "b", "a"]).unwrap();
        assert_eq!(domain.len(), 3);
        assert_eq!(domain.iter().cloned().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(domain.index_of(&"a"), Some(1));
        assert_eq!(domain.index_of(&"z"), None);
        assert_eq!(domain.get(2), Some(&"b"));
        assert_eq!(domain.get(3), None);
    }

    #[test]
    fn from_distinct_rejects_duplicates() {
        assert_eq!(
            Domain::from_distinct(vec![4, 5, 6, 5]).unwrap_err(),
            DomainError::DuplicateElement {
                first: 1,
                second: 3
            }
        );
        assert_eq!(Domain::from_distinct(vec![4, 5, 6]).unwrap().len(), 3);
    }

    #[test]
    fn empty_domain() {
        let domain = Domain::<u8>::new(None).unwrap();
        assert!(domain.is_empty());
        assert_eq!(domain.elements().len(), 0);
    }

    #[test]
    fn equality_respects_order() {
        let a = Domain::new(vec![1, 2, 3]).unwrap();
        let b = Domain::new(vec![1, 2, 3]).unwrap();
        let c = Domain::new(vec![3, 2, 1]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

//! Group actions.
//!
//! A [`Perm`](crate::perm::Perm) acts on other permutations of the same degree by composition.
//! `p.right_apply(q)` applies `q` first, then `p`.

/// Action on `T` values from the right.
pub trait RightAction<T> {
    /// Scratch space the action needs, reusable across calls.
    type Scratch: Default;

    /// Act on an owned value from the right, returning the result.
    fn right_apply(&self, value: T) -> T {
        self.right_apply_with_scratch(value, &mut Self::Scratch::default())
    }

    /// Like [`Self::right_apply`], with caller-provided scratch space.
    fn right_apply_with_scratch(&self, mut value: T, scratch: &mut Self::Scratch) -> T {
        self.right_apply_to_with_scratch(&mut value, scratch);
        value
    }

    /// Act on a value in place from the right.
    fn right_apply_to(&self, value: &mut T) {
        self.right_apply_to_with_scratch(value, &mut Self::Scratch::default())
    }

    /// Like [`Self::right_apply_to`], with caller-provided scratch space.
    fn right_apply_to_with_scratch(&self, value: &mut T, scratch: &mut Self::Scratch);
}

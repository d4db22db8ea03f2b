//! Traits for writing computed permutations into existing values.
//!
//! Group operations on large domains produce many same-sized results. Writing a result over an
//! existing value keeps its allocation alive instead of requesting a fresh one per operation.

/// A computation whose result can be assigned to a value of type `T`.
///
/// Overwriting an existing value using [`Assign::assign`] allows reuse of existing resources (e.g.
/// allocations).
pub trait AssignValue<T>: Sized
where
    T: ?Sized,
{
    /// Type of scratch space needed to perform assignment.
    type Scratch: Default;

    /// Assign the result to a target.
    fn assign_to(self, target: &mut T) {
        self.assign_to_with_scratch(target, &mut Self::Scratch::default());
    }

    /// Assign the result to a target. Use existing scratch space.
    fn assign_to_with_scratch(self, target: &mut T, scratch: &mut Self::Scratch);

    /// Return the result as a new value.
    fn get(self) -> T
    where
        T: Sized,
    {
        self.get_with_scratch(&mut Self::Scratch::default())
    }

    /// Return the result as a new value. Use existing scratch space.
    fn get_with_scratch(self, scratch: &mut Self::Scratch) -> T
    where
        T: Sized;
}

/// An assignable computation given by a closure that overwrites its target.
pub struct AssignFn<F>(pub F);

impl<T, F> AssignValue<T> for AssignFn<F>
where
    F: FnOnce(&mut T),
    T: Default,
{
    type Scratch = ();

    fn assign_to_with_scratch(self, target: &mut T, _scratch: &mut ()) {
        self.0(target);
    }

    fn get_with_scratch(self, scratch: &mut ()) -> T {
        let mut result = T::default();
        result.assign_with_scratch(self, scratch);
        result
    }
}

/// Provides `assign` methods on targets of [`AssignValue`].
pub trait Assign {
    /// Overwrite `self` with the result of `value`.
    fn assign<T>(&mut self, value: T)
    where
        T: AssignValue<Self>,
    {
        value.assign_to_with_scratch(self, &mut T::Scratch::default());
    }

    /// Overwrite `self` with the result of `value`. Use existing scratch space.
    fn assign_with_scratch<T>(&mut self, value: T, scratch: &mut T::Scratch)
    where
        T: AssignValue<Self>,
    {
        value.assign_to_with_scratch(self, scratch);
    }
}

impl<T> Assign for T {}

//! Sequential folds over named binary operators.
//!
//! [`zip`] applies a list of binary operators pairwise along a list of operands, feeding each
//! result into the next step.
use std::fmt;

use crate::error::FoldError;

/// A named binary operator.
///
/// Returning `None` signals that the operator has no result for the given operands.
pub trait BinaryOp<T> {
    fn name(&self) -> &str;

    fn apply(&self, a: &T, b: &T) -> Option<T>;
}

/// Arithmetic on `f64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arith {
    Plus,
    Minus,
    Mult,
    /// Division. Has no result for a zero divisor.
    Div,
}

impl BinaryOp<f64> for Arith {
    fn name(&self) -> &str {
        match self {
            Arith::Plus => "plus",
            Arith::Minus => "minus",
            Arith::Mult => "mult",
            Arith::Div => "div",
        }
    }

    fn apply(&self, a: &f64, b: &f64) -> Option<f64> {
        match self {
            Arith::Plus => Some(a + b),
            Arith::Minus => Some(a - b),
            Arith::Mult => Some(a * b),
            Arith::Div if *b == 0.0 => None,
            Arith::Div => Some(a / b),
        }
    }
}

impl fmt::Display for Arith {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(BinaryOp::<f64>::name(self))
    }
}

/// A closure with a name.
#[derive(Clone)]
pub struct Named<F> {
    pub name: String,
    pub op: F,
}

impl<F> Named<F> {
    pub fn new(name: impl Into<String>, op: F) -> Named<F> {
        Named {
            name: name.into(),
            op,
        }
    }
}

impl<T, F> BinaryOp<T> for Named<F>
where
    F: Fn(&T, &T) -> Option<T>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, a: &T, b: &T) -> Option<T> {
        (self.op)(a, b)
    }
}

impl<T, O> BinaryOp<T> for &O
where
    O: BinaryOp<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, a: &T, b: &T) -> Option<T> {
        (**self).apply(a, b)
    }
}

/// Fold operands left to right with one operator per adjacent pair.
///
/// Step `i` applies `ops[i]` to the running result and `args[i + 1]`. There must be exactly one
/// operator fewer than there are operands. A single operand with no operators is returned as is.
///
/// ```
/// use bijection_group::fold::{zip, Arith};
///
/// let args = vec![-0.5, 2.0, 3.0, 0.0, 4.0];
/// let ops = [Arith::Plus, Arith::Mult, Arith::Plus, Arith::Div];
/// assert_eq!(zip(args, &ops).unwrap(), 1.125);
/// ```
pub fn zip<T, O>(args: Vec<T>, ops: &[O]) -> Result<T, FoldError>
where
    O: BinaryOp<T>,
{
    if args.len() != ops.len() + 1 {
        return Err(FoldError::CountMismatch {
            operands: args.len(),
            operators: ops.len(),
        });
    }

    let mut args = args.into_iter();
    let mut acc = args.next().ok_or(FoldError::CountMismatch {
        operands: 0,
        operators: ops.len(),
    })?;

    for (step, (op, arg)) in ops.iter().zip(args).enumerate() {
        acc = op.apply(&acc, &arg).ok_or_else(|| FoldError::Undefined {
            step,
            op: op.name().to_string(),
        })?;
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_fold() {
        let ops = [Arith::Plus, Arith::Mult, Arith::Plus, Arith::Div];
        assert_eq!(zip(vec![-0.5, 2.0, 3.0, 0.0, 4.0], &ops), Ok(1.125));
        assert_eq!(zip(vec![5.0, 7.0], &[Arith::Minus]), Ok(-2.0));
    }

    #[test]
    fn string_fold() {
        let concat = Named::new("concat", |a: &String, b: &String| Some(format!("{}{}", a, b)));
        let args: Vec<String> = vec!["a", "n", "t"].into_iter().map(String::from).collect();
        assert_eq!(zip(args, &[&concat, &concat]).unwrap(), "ant");
    }

    #[test]
    fn count_mismatch() {
        assert_eq!(
            zip(vec![1.0, 2.0], &[Arith::Plus, Arith::Plus]),
            Err(FoldError::CountMismatch {
                operands: 2,
                operators: 2
            })
        );
        assert_eq!(
            zip(Vec::<f64>::new(), &[] as &[Arith]),
            Err(FoldError::CountMismatch {
                operands: 0,
                operators: 0
            })
        );
    }

    #[test]
    fn single_operand() {
        assert_eq!(zip(vec![3.5], &[] as &[Arith]), Ok(3.5));
    }

    #[test]
    fn division_by_zero_is_undefined() {
        let ops = [Arith::Plus, Arith::Div];
        assert_eq!(
            zip(vec![1.0, 1.0, 0.0], &ops),
            Err(FoldError::Undefined {
                step: 1,
                op: "div".to_string()
            })
        );
    }

    #[test]
    fn names() {
        assert_eq!(Arith::Plus.to_string(), "plus");
        assert_eq!(Arith::Minus.to_string(), "minus");
        assert_eq!(Arith::Mult.to_string(), "mult");
        assert_eq!(Arith::Div.to_string(), "div");
    }
}

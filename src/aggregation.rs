//! Reduces collections of transactions to totals.

/// Anything that carries a monetary value that can be summed.
pub trait HasValue {
    /// The signed amount of money.
    fn value(&self) -> f64;
}

impl HasValue for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

impl<T: HasValue + ?Sized> HasValue for &T {
    fn value(&self) -> f64 {
        (**self).value()
    }
}

/// Sums the values of `items`.
///
/// Negative values are subtracted, so passing income and expenses signed
/// accordingly gives the net total. An empty slice sums to zero.
pub fn sum<T: HasValue>(items: &[T]) -> f64 {
    items.iter().map(HasValue::value).sum()
}

use crate::model::Money;

/// Ratio with a defined zero instead of a NaN on an empty scope.
pub fn safe_ratio(total: Money, count: usize) -> Money {
    if count == 0 {
        Money::default()
    } else {
        total / count as Money
    }
}

/// A compact conditional expression.  Rust's `if` is already an
/// expression, but `cargo fmt` spreads it over five lines, and the
/// border and shift rules in the carver read better as one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

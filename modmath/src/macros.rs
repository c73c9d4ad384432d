/// Validates a precondition when [`CHECKED`](crate::constants::CHECKED) is set.
///
/// A violation panics with the message of the given [`ArithError`](crate::error::ArithError).
/// In unchecked builds the whole branch is removed at compile time.
macro_rules! check {
    ($cond:expr, $err:expr $(,)?) => {
        if $crate::constants::CHECKED && !($cond) {
            panic!("{}", $err);
        }
    };
}

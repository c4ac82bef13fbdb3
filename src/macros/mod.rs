//! Shortcuts for returning failed outcomes.
//!
//! - [`macro@crate::fail`] - Returns a failed [`Outcome`](crate::Outcome) from
//!   the enclosing function.
//! - [`macro@crate::ensure`] - Returns a failed outcome unless a condition
//!   holds.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure, fail, Outcome};
//!
//! fn withdraw(balance: u64, amount: u64) -> Outcome<u64> {
//!     ensure!(amount > 0, "withdrawal rejected", "amount must be positive");
//!     if amount > balance {
//!         fail!("withdrawal rejected", "insufficient funds");
//!     }
//!     Outcome::success_with(balance - amount)
//! }
//!
//! assert_eq!(withdraw(10, 3).into_data(), Some(7));
//! assert!(withdraw(10, 0).is_failure());
//! assert!(withdraw(1, 3).is_failure());
//! ```

/// Returns a failed [`Outcome`](crate::Outcome) from the enclosing function.
///
/// The first argument is the general message; any further arguments become
/// detail errors, in order. The enclosing function must return an
/// `Outcome<T>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// fn lookup(key: &str) -> Outcome<u32> {
///     if key.is_empty() {
///         fail!("lookup failed", "key is empty");
///     }
///     fail!("lookup failed")
/// }
///
/// let error = lookup("").into_error().unwrap();
/// assert_eq!(error.detail_count(), 1);
/// assert!(lookup("k").into_error().unwrap().details().is_none());
/// ```
#[macro_export]
macro_rules! fail {
    ($general:expr, $($detail:expr),+ $(,)?) => {
        return $crate::Outcome::error_with(
            $general,
            [$($crate::traits::IntoMessage::into_message($detail)),+],
        )
    };
    ($general:expr $(,)?) => {
        return $crate::Outcome::error($crate::Error::new($general))
    };
}

/// Returns a failed [`Outcome`](crate::Outcome) unless `cond` is true.
///
/// Arguments after the condition are passed to [`fail!`](crate::fail).
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure, Outcome};
///
/// fn check_age(age: i32) -> Outcome<i32> {
///     ensure!(age >= 0, "invalid person", "age is negative");
///     Outcome::success_with(age)
/// }
///
/// assert!(check_age(-1).is_failure());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($rest:tt)+) => {
        if !$cond {
            $crate::fail!($($rest)+);
        }
    };
}

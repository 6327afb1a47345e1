/*!
 * Explicit Result Type
 *
 * Two-variant tagged container for fallible operations. Combinators consume
 * `self` and return by value, so move-only payloads flow through without
 * copies and a consumed Result cannot be observed again.
 *
 * # Fatal vs recoverable
 *
 * Extracting the wrong variant (`unwrap` on an `Err`, `unwrap_err` on an
 * `Ok`) is a contract violation and panics: the caller could have checked
 * `is_ok`/`is_err` first, so the mismatch is a programming bug, not a
 * runtime condition. Everything else is data.
 */

use std::fmt;

/// Success-or-failure container holding exactly one of `Ok(T)` or `Err(E)`.
///
/// # Examples
///
/// ```
/// use holdfast::result::Result;
///
/// let doubled = Result::<i32, String>::ok(21).map(|v| v * 2);
/// assert_eq!(doubled.unwrap(), 42);
/// ```
#[must_use = "a Result may hold an error that should be checked"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Result<T, E> {
    /// The operation succeeded with a value
    Ok(T),
    /// The operation failed with an error
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Construct the success variant
    #[inline]
    pub fn ok(value: T) -> Self {
        Result::Ok(value)
    }

    /// Construct the failure variant
    #[inline]
    pub fn err(error: E) -> Self {
        Result::Err(error)
    }

    /// True if this holds a success value
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    /// True if this holds an error value
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Result::Err(_))
    }

    /// Move the success value out
    ///
    /// # Panics
    ///
    /// Panics if this holds an error.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => {
                panic!("called `Result::unwrap()` on an `Err` value: {error:?}")
            }
        }
    }

    /// Move the error value out
    ///
    /// # Panics
    ///
    /// Panics if this holds a success value.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Result::Ok(value) => {
                panic!("called `Result::unwrap_err()` on an `Ok` value: {value:?}")
            }
            Result::Err(error) => error,
        }
    }

    /// Move the success value out, or `default` on error. Never panics.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => default,
        }
    }

    /// Borrow the success value
    ///
    /// # Panics
    ///
    /// Panics if this holds an error.
    #[track_caller]
    pub fn ref_ok(&self) -> &T
    where
        E: fmt::Debug,
    {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => {
                panic!("called `Result::ref_ok()` on an `Err` value: {error:?}")
            }
        }
    }

    /// Borrow the error value
    ///
    /// # Panics
    ///
    /// Panics if this holds a success value.
    #[track_caller]
    pub fn ref_err(&self) -> &E
    where
        T: fmt::Debug,
    {
        match self {
            Result::Ok(value) => {
                panic!("called `Result::ref_err()` on an `Ok` value: {value:?}")
            }
            Result::Err(error) => error,
        }
    }

    /// Apply `f` to the success value; errors pass through untouched
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Result::Ok(value) => Result::Ok(f(value)),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Apply `f` to the error value; success passes through untouched
    pub fn map_err<F, O>(self, f: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(f(error)),
        }
    }

    /// Chain a fallible operation on the success value
    ///
    /// Short-circuits on the first error, leaving its payload untouched.
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Run `f` against a borrow of the success value, returning `self`
    /// unchanged for further chaining
    pub fn inspect_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Result::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` against a borrow of the error value, returning `self`
    /// unchanged for further chaining
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Result::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Convert into the standard library's `Result`, e.g. to use `?`
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }

    /// Convert from the standard library's `Result`
    pub fn from_std(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Result::Ok(value),
            Err(error) => Result::Err(error),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        Self::from_std(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_returns_constructed_value() {
        let result: Result<i32, String> = Result::ok(42);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    #[should_panic(expected = "called `Result::unwrap()` on an `Err` value")]
    fn test_unwrap_on_err_panics() {
        let result: Result<i32, String> = Result::err("boom".into());
        let _ = result.unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Result::unwrap_err()` on an `Ok` value")]
    fn test_unwrap_err_on_ok_panics() {
        let result: Result<i32, String> = Result::ok(42);
        let _ = result.unwrap_err();
    }

    #[test]
    #[should_panic(expected = "called `Result::ref_ok()` on an `Err` value")]
    fn test_ref_ok_on_err_panics() {
        let result: Result<i32, String> = Result::err("boom".into());
        let _ = result.ref_ok();
    }

    #[test]
    fn test_move_only_payload_through_combinators() {
        // String is not Copy; combinators must move it, not clone it
        let result: Result<String, i32> = Result::ok(String::from("hello"));
        let result = result
            .map(|s| s + " world")
            .and_then(|s| Result::ok(s.len()));
        assert_eq!(result.unwrap(), 11);
    }

    #[test]
    fn test_inspect_does_not_consume() {
        let mut seen = None;
        let result: Result<i32, String> = Result::ok(7);
        let result = result.inspect_ok(|v| seen = Some(*v)).inspect_err(|_| {
            panic!("inspect_err callback must not run on Ok");
        });
        assert_eq!(seen, Some(7));
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_std_round_trip() {
        let std_err: std::result::Result<i32, &str> = Err("nope");
        let ours = Result::from_std(std_err);
        assert!(ours.is_err());
        assert_eq!(ours.into_std(), Err("nope"));
    }
}

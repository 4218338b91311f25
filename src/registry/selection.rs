//! 1-based positional selection from user input.
//!
//! Interactive prompts list records with numbers starting at 1. These
//! helpers turn what the user typed back into an index, rejecting anything
//! that is not a number or is out of range.

/// Errors that can occur when selecting a record by position.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    /// There is nothing to select from.
    #[error("No {0} available.")]
    Empty(&'static str),
    /// The input was not a whole number.
    #[error("Invalid selection '{0}': please enter a number.")]
    NotANumber(String),
    /// The number did not correspond to a listed record.
    #[error("Invalid selection {index}: please choose between {min} and {max}.")]
    OutOfRange {
        /// The number entered.
        index: i64,
        /// The smallest valid number.
        min: usize,
        /// The largest valid number.
        max: usize,
    },
}

/// The outcome of a prompt which also accepts `0`.
///
/// Depending on the prompt, `0` means "cancel" or "all of them".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<K> {
    /// The user entered `0`.
    Zero,
    /// The user picked a record.
    Item(K),
}

impl<K> Selection<K> {
    /// Apply a function to the selected record, if there is one.
    pub fn map<T>(self, f: impl FnOnce(K) -> T) -> Selection<T> {
        match self {
            Self::Zero => Selection::Zero,
            Self::Item(key) => Selection::Item(f(key)),
        }
    }
}

/// Parse a 1-based position into a 0-based index into a collection of
/// `len` items.
///
/// `what` names the collection (e.g. `"students"`) for error messages.
pub(crate) fn position(
    input: &str,
    len: usize,
    what: &'static str,
) -> Result<usize, SelectionError> {
    let out_of_range = |index| SelectionError::OutOfRange {
        index,
        min: 1,
        max: len,
    };

    match choice(input, len, what) {
        Ok(Selection::Item(index)) => Ok(index),
        Ok(Selection::Zero) => Err(out_of_range(0)),
        Err(SelectionError::OutOfRange { index, .. }) => Err(out_of_range(index)),
        Err(e) => Err(e),
    }
}

/// As [`position`], but also accepting `0`.
pub(crate) fn choice(
    input: &str,
    len: usize,
    what: &'static str,
) -> Result<Selection<usize>, SelectionError> {
    if len == 0 {
        return Err(SelectionError::Empty(what));
    }

    let trimmed = input.trim();
    let index: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

    match usize::try_from(index) {
        Ok(0) => Ok(Selection::Zero),
        Ok(n) if n <= len => Ok(Selection::Item(n - 1)),
        _ => Err(SelectionError::OutOfRange {
            index,
            min: 0,
            max: len,
        }),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("1", 0)]
    #[test_case(" 3 ", 2)]
    #[test_case("5", 4)]
    fn position_is_one_based(input: &str, expected: usize) {
        assert_eq!(position(input, 5, "students"), Ok(expected));
    }

    #[test_case("0"; "zero")]
    #[test_case("6"; "past the end")]
    #[test_case("-2"; "negative")]
    fn position_rejects_out_of_range(input: &str) {
        assert!(matches!(
            position(input, 5, "students"),
            Err(SelectionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn position_rejects_non_numeric_input() {
        assert_eq!(
            position("two", 5, "courses"),
            Err(SelectionError::NotANumber("two".to_string()))
        );
    }

    #[test]
    fn empty_collection_is_rejected_before_parsing() {
        assert_eq!(
            position("1", 0, "teachers"),
            Err(SelectionError::Empty("teachers"))
        );
        assert_eq!(
            SelectionError::Empty("teachers").to_string(),
            "No teachers available."
        );
    }

    #[test]
    fn choice_accepts_zero() {
        assert_eq!(choice("0", 3, "students"), Ok(Selection::Zero));
        assert_eq!(choice("3", 3, "students"), Ok(Selection::Item(2)));
        assert!(choice("4", 3, "students").is_err());
    }
}

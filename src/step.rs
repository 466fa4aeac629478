/// Outcome of a single `advance` on a cursor
///
/// `EndOfSequence` is the normal termination signal of a traversal, not a
/// failure. Failures travel separately in the `Err` side of the cursor's
/// `Result`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// The next element in the sequence
    Item(T),
    /// No elements remain
    EndOfSequence,
}

impl<T> Step<T> {
    pub fn is_item(&self) -> bool {
        matches!(self, Step::Item(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Step::EndOfSequence)
    }

    /// Convert into an `Option`, mapping `EndOfSequence` to `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Item(value) => Some(value),
            Step::EndOfSequence => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Item(value) => Step::Item(f(value)),
            Step::EndOfSequence => Step::EndOfSequence,
        }
    }

    pub fn as_ref(&self) -> Step<&T> {
        match self {
            Step::Item(value) => Step::Item(value),
            Step::EndOfSequence => Step::EndOfSequence,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Item(value),
            None => Step::EndOfSequence,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    fn from(step: Step<T>) -> Self {
        step.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversion() {
        assert_eq!(Step::from(Some(3)), Step::Item(3));
        assert_eq!(Step::<u8>::from(None), Step::EndOfSequence);
        assert_eq!(Step::Item("a").into_option(), Some("a"));
        assert_eq!(Option::<u8>::from(Step::EndOfSequence), None);
    }

    #[test]
    fn test_predicates() {
        assert!(Step::Item(1).is_item());
        assert!(!Step::Item(1).is_end());
        assert!(Step::<i32>::EndOfSequence.is_end());
    }

    #[test]
    fn test_map_leaves_end_untouched() {
        assert_eq!(Step::Item(2).map(|v| v * 10), Step::Item(20));
        assert_eq!(Step::<i32>::EndOfSequence.map(|v| v * 10), Step::EndOfSequence);
    }
}

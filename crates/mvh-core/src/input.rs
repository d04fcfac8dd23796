//! # Test Inputs
//!
//! An [`InputWithDescription`] pairs a human-readable description with one
//! instance of the value under test. The description becomes the default
//! path key when a validator reports a problem for that input, so output
//! stays readable and reproducible across runs.

/// One value under test, labeled with a human-readable description.
///
/// Immutable once created: registration code constructs it, the suite
/// reads it during [`run`](crate::TestSuite::run), and it is dropped with
/// the suite.
#[derive(Debug, Clone)]
pub struct InputWithDescription<T> {
    description: String,
    value: T,
}

impl<T> InputWithDescription<T> {
    /// Pair a description with a value under test.
    pub fn new(description: impl Into<String>, value: T) -> Self {
        Self {
            description: description.into(),
            value,
        }
    }

    /// The human-readable description. Doubles as the default report path.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The value under test.
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Shorthand constructor for registration sites.
///
/// `input("Good case", value)` reads better than the full struct path in
/// the (often generated) code that registers chains in bulk.
pub fn input<T>(description: impl Into<String>, value: T) -> InputWithDescription<T> {
    InputWithDescription::new(description, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_preserves_description_and_value() {
        let i = input("Good case", 42);
        assert_eq!(i.description(), "Good case");
        assert_eq!(*i.value(), 42);
    }

    #[test]
    fn input_accepts_owned_and_borrowed_descriptions() {
        let a = InputWithDescription::new(String::from("owned"), ());
        let b = InputWithDescription::new("borrowed", ());
        assert_eq!(a.description(), "owned");
        assert_eq!(b.description(), "borrowed");
    }

    #[test]
    fn input_clone_is_independent() {
        let original = input("case", vec![1, 2, 3]);
        let copy = original.clone();
        assert_eq!(copy.description(), original.description());
        assert_eq!(copy.value(), original.value());
    }
}

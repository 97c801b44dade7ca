//! Parameter-name lists.
//!
//! A [`Signature`] is the ordered list of a target's declared parameter names.
//! It is the metadata the named-hook binder aligns positional hooks with, and
//! the list [`Arguments::bind`](super::Arguments::bind) resolves keywords
//! against.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ordered parameter names of a callable.
///
/// Rust function values do not carry their parameter names, so a signature is
/// either written out with [`Signature::new`] / [`Signature::method`] or
/// generated by the `#[hookable]` attribute.
///
/// # Examples
///
/// ```rust
/// use hookwork::hook::Signature;
///
/// let signature = Signature::new(["width", "height"]);
/// assert_eq!(signature.position("height"), Some(1));
/// assert_eq!(signature.len(), 2);
///
/// // The receiver of a method is not a hookable parameter
/// let method = Signature::method(["self", "width", "height"]);
/// assert_eq!(method, signature);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Signature {
    parameters: Vec<String>,
}

impl Signature {
    /// Creates a signature from parameter names in declaration order.
    pub fn new<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a signature for a method, dropping the leading receiver name.
    ///
    /// An empty list stays empty.
    pub fn method<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().skip(1).map(Into::into).collect(),
        }
    }

    /// Returns the index of a parameter, if declared.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.parameters
            .iter()
            .position(|parameter| parameter == name)
    }

    /// Returns `true` if the parameter is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the parameter names in declaration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.parameters.iter().map(String::as_str)
    }

    /// Returns the number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if the signature declares no parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Signature {
    fn from_iter<I: IntoIterator<Item = S>>(parameters: I) -> Self {
        Self::new(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_of_empty_list_is_empty() {
        assert!(Signature::method(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_position_of_undeclared_name() {
        let signature = Signature::new(["a", "b"]);
        assert_eq!(signature.position("c"), None);
        assert!(!signature.contains("c"));
    }

    #[test]
    fn test_names_preserve_declaration_order() {
        let signature: Signature = ["z", "a", "m"].into_iter().collect();
        assert_eq!(signature.names().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }
}

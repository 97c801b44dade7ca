//! The arguments of a single call.
//!
//! [`Arguments`] carries an ordered list of positional values and an ordered
//! list of keyword values with unique names. Every callable in the `hook`
//! module receives exactly one `Arguments` per invocation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ArgumentError, Signature};

/// Positional and keyword arguments of one call.
///
/// Keyword names are unique: inserting a name that is already present
/// replaces its value in place, keeping the original insertion position.
///
/// # Examples
///
/// ```rust
/// use hookwork::hook::Arguments;
///
/// let arguments = Arguments::new()
///     .with(1)
///     .with(2)
///     .with_keyword("c", 3);
///
/// assert_eq!(arguments.positional(), &[1, 2]);
/// assert_eq!(arguments.keyword("c"), Some(&3));
/// assert_eq!(arguments.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "SerializedArguments<T>", bound(deserialize = "T: Deserialize<'de>"))
)]
pub struct Arguments<T> {
    positional: Vec<T>,
    keyword: Vec<(String, T)>,
}

/// Wire form of [`Arguments`]; keyword names are deduplicated on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SerializedArguments<T> {
    positional: Vec<T>,
    keyword: Vec<(String, T)>,
}

#[cfg(feature = "serde")]
impl<T> From<SerializedArguments<T>> for Arguments<T> {
    fn from(serialized: SerializedArguments<T>) -> Self {
        Self::from_parts(serialized.positional, serialized.keyword)
    }
}

impl<T> Default for Arguments<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arguments<T> {
    /// Creates an empty argument list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            keyword: Vec::new(),
        }
    }

    /// Creates an argument list holding only positional values.
    pub fn from_positional<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            positional: values.into_iter().collect(),
            keyword: Vec::new(),
        }
    }

    /// Creates an argument list from its positional and keyword parts.
    ///
    /// Later keywords replace earlier ones with the same name.
    pub fn from_parts<P, K, S>(positional: P, keyword: K) -> Self
    where
        P: IntoIterator<Item = T>,
        K: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut arguments = Self::from_positional(positional);
        for (name, value) in keyword {
            arguments.insert_keyword(name, value);
        }
        arguments
    }

    /// Appends a positional value.
    #[must_use]
    pub fn with(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Sets a keyword value.
    #[must_use]
    pub fn with_keyword(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert_keyword(name, value);
        self
    }

    /// Appends a positional value in place.
    pub fn push(&mut self, value: T) {
        self.positional.push(value);
    }

    /// Sets a keyword value in place, returning the value it replaced.
    pub fn insert_keyword(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        let name = name.into();
        match self.keyword.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.keyword.push((name, value));
                None
            }
        }
    }

    /// Returns the positional values.
    #[inline]
    pub fn positional(&self) -> &[T] {
        &self.positional
    }

    /// Returns the value of a keyword, if supplied.
    pub fn keyword(&self, name: &str) -> Option<&T> {
        self.keyword
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the keyword was supplied.
    pub fn contains_keyword(&self, name: &str) -> bool {
        self.keyword(name).is_some()
    }

    /// Returns the keyword arguments in insertion order.
    pub fn keywords(&self) -> impl ExactSizeIterator<Item = (&str, &T)> {
        self.keyword
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the total number of arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    /// Returns `true` if no arguments were supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Splits the arguments into their positional and keyword parts.
    pub fn into_parts(self) -> (Vec<T>, Vec<(String, T)>) {
        (self.positional, self.keyword)
    }

    /// Appends `later` to these arguments.
    ///
    /// Positional values of `later` follow the current ones; keywords of
    /// `later` replace current keywords with the same name.
    #[must_use]
    pub fn merged(mut self, later: Self) -> Self {
        self.positional.extend(later.positional);
        for (name, value) in later.keyword {
            self.insert_keyword(name, value);
        }
        self
    }

    /// Resolves the arguments against a signature, one value per parameter.
    ///
    /// Positional values fill parameters in declaration order, then keywords
    /// fill the parameters they name.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::TooManyPositional`] if there are more positional
    ///   values than parameters
    /// - [`ArgumentError::UnexpectedKeyword`] if a keyword names no parameter
    /// - [`ArgumentError::MultipleValues`] if a keyword names a parameter that
    ///   was already filled positionally
    /// - [`ArgumentError::MissingArgument`] if a parameter is left unfilled
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hookwork::hook::{Arguments, Signature};
    ///
    /// let signature = Signature::new(["a", "b", "c"]);
    /// let arguments = Arguments::from_positional([1]).with_keyword("c", 3).with_keyword("b", 2);
    ///
    /// assert_eq!(arguments.bind(&signature), Ok(vec![1, 2, 3]));
    /// ```
    pub fn bind(self, signature: &Signature) -> Result<Vec<T>, ArgumentError> {
        if self.positional.len() > signature.len() {
            return Err(ArgumentError::TooManyPositional {
                expected: signature.len(),
                received: self.positional.len(),
            });
        }

        let mut slots: Vec<Option<T>> = self.positional.into_iter().map(Some).collect();
        slots.resize_with(signature.len(), || None);

        for (name, value) in self.keyword {
            let Some(index) = signature.position(&name) else {
                return Err(ArgumentError::UnexpectedKeyword { name });
            };
            if slots[index].is_some() {
                return Err(ArgumentError::MultipleValues { name });
            }
            slots[index] = Some(value);
        }

        slots
            .into_iter()
            .zip(signature.names())
            .map(|(slot, name)| {
                slot.ok_or_else(|| ArgumentError::MissingArgument {
                    name: name.to_string(),
                })
            })
            .collect()
    }

    /// Resolves the arguments against a signature of exactly `N` parameters.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::ArityMismatch`] if the signature does not declare `N`
    /// parameters, and every error of [`Arguments::bind`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hookwork::hook::{Arguments, Signature};
    ///
    /// let signature = Signature::new(["x", "y"]);
    /// let [x, y] = Arguments::from_positional([3, 4]).bind_array::<2>(&signature).unwrap();
    /// assert_eq!(x * y, 12);
    /// ```
    pub fn bind_array<const N: usize>(self, signature: &Signature) -> Result<[T; N], ArgumentError> {
        if signature.len() != N {
            return Err(ArgumentError::ArityMismatch {
                expected: N,
                found: signature.len(),
            });
        }
        let values = self.bind(signature)?;
        let found = values.len();
        <[T; N]>::try_from(values).map_err(|_| ArgumentError::ArityMismatch { expected: N, found })
    }
}

impl<T> FromIterator<T> for Arguments<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_positional(values)
    }
}

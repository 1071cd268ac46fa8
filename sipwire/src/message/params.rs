use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::error::Error;

/// A parameter.
///
/// This struct represents a parameter in a SIP message, consisting of a
/// name and an optional value.
///
/// # Examples
///
/// ```
/// use sipwire::message::Param;
///
/// let param: Param = "param=value".parse().unwrap();
///
/// assert_eq!(param.name, "param");
/// assert_eq!(param.value.as_deref(), Some("value"));
/// ```
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Param {
    /// The parameter name.
    pub name: String,

    /// The parameter optional value.
    pub value: Option<String>,
}

impl FromStr for Param {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name, Some(value.to_owned())),
            None => (s, None),
        };
        if name.is_empty() {
            return Err(Error::InvalidParam(s.to_owned()));
        }

        Ok(Param {
            name: name.to_owned(),
            value,
        })
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Default, Clone)]
/// A collection of SIP parameters.
///
/// A parameter takes the form `name=value` and can appear in a SIP
/// message as either a URI parameter or a header parameter. Insertion
/// order is preserved.
pub struct Params(Vec<Param>);

impl Params {
    /// Creates an empty `Params` list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gets the value of a parameter by name.
    ///
    /// Returns the value associated with the given name, if it exists.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.0
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.value.as_deref())
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.0.iter()
    }

    /// Pushes a name-value parameter pair.
    pub fn push(&mut self, param: Param) {
        self.0.push(param)
    }

    /// Checks if the parameter list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Params {
    /// Renders the parameters joined by `;`, without a leading separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.iter().format_with(";", |param, f| f(param));
        write!(f, "{formatted}")
    }
}

impl FromIterator<Param> for Params {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Params(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valueless_param() {
        let param: Param = "lr".parse().unwrap();

        assert_eq!(param.name, "lr");
        assert_eq!(param.value, None);
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_matches!("=value".parse::<Param>(), Err(Error::InvalidParam(_)));
    }

    #[test]
    fn test_displays_joined_by_semicolon() {
        let params: Params = ["transport=tcp", "lr"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        assert_eq!(params.to_string(), "transport=tcp;lr");
    }
}

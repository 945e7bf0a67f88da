use shelf_domain::constants::ROOT_PATH;
use std::borrow::Cow;
use std::fmt;

/// The navigation location reported by the host, e.g. `/stock?page=2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(Cow<'static, str>);

impl Location {
    pub fn new(location: impl Into<Cow<'static, str>>) -> Self {
        Self(location.into())
    }

    /// The raw location as reported by the host.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part of the location routes are matched against: query string and
    /// fragment removed, empty input treated as the root path.
    #[must_use]
    pub fn path(&self) -> &str {
        let end = self.0.find(['?', '#']).unwrap_or(self.0.len());
        match &self.0[..end] {
            "" => ROOT_PATH,
            path => path,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self(Cow::Borrowed(ROOT_PATH))
    }
}

impl From<&'static str> for Location {
    fn from(location: &'static str) -> Self {
        Self(Cow::Borrowed(location))
    }
}

impl From<String> for Location {
    fn from(location: String) -> Self {
        Self(Cow::Owned(location))
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_strips_query_and_fragment() {
        assert_eq!(Location::from("/stock?page=2").path(), "/stock");
        assert_eq!(Location::from("/perfil#avatar").path(), "/perfil");
        assert_eq!(Location::from("/configuracion").path(), "/configuracion");
    }

    #[test]
    fn empty_location_is_root() {
        assert_eq!(Location::from("").path(), "/");
        assert_eq!(Location::from("?tab=1").path(), "/");
        assert_eq!(Location::default().as_str(), "/");
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(Location::from("/stock/").path(), "/stock/");
        assert_eq!(Location::from("/Stock").path(), "/Stock");
    }
}

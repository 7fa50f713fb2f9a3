//! Location configuration
//!
//! Per-path overrides nested inside a server block.

use std::fmt;
use std::str::FromStr;

/// HTTP methods a location may allow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "DELETE" => Ok(Method::Delete),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `location <path> { ... }` block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationConfig {
    /// URL prefix this block applies to
    pub path: String,
    pub allowed_methods: Vec<Method>,
    /// Empty until the enclosing server block closes and defaulting runs
    pub root: String,
    pub index: String,
    pub autoindex: bool,
    pub cgi_path: String,
    /// Target of a `return` directive
    pub redirect: String,
}

impl LocationConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Whether requests with `method` are accepted here
    pub fn allows(&self, method: Method) -> bool {
        self.allowed_methods.contains(&method)
    }

    pub fn has_cgi(&self) -> bool {
        !self.cgi_path.is_empty()
    }

    pub fn has_redirect(&self) -> bool {
        !self.redirect.is_empty()
    }

    /// Fill `root` and `index` from the server when they were not set
    pub(crate) fn inherit(&mut self, root: &str, index: &str) {
        if self.root.is_empty() {
            self.root = root.to_string();
        }
        if self.index.is_empty() {
            self.index = index.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!("GET".parse::<Method>(), Ok(Method::Get));
        assert_eq!("DELETE".parse::<Method>(), Ok(Method::Delete));
        assert!("get".parse::<Method>().is_err());
        assert!("PUT".parse::<Method>().is_err());
    }

    #[test]
    fn test_allows() {
        let mut location = LocationConfig::new("/upload");
        assert!(!location.allows(Method::Get));
        location.allowed_methods = vec![Method::Post, Method::Delete];
        assert!(location.allows(Method::Post));
        assert!(!location.allows(Method::Get));
    }

    #[test]
    fn test_inherit_keeps_explicit_values() {
        let mut location = LocationConfig::new("/img");
        location.root = "/srv/img".to_string();
        location.inherit("/var/www", "index.html");
        assert_eq!(location.root, "/srv/img");
        assert_eq!(location.index, "index.html");
    }
}

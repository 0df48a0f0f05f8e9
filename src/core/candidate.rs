use crate::normalize::precompute;

/// Incoming search name plus its known aliases, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Normalized primary name
    pub primary: String,

    /// Normalized aliases (may be empty)
    pub aliases: Vec<String>,
}

impl Query {
    /// Build a query from raw strings, normalizing each one
    pub fn new<I, S>(primary: &str, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            primary: precompute(primary),
            aliases: aliases.into_iter().map(|a| precompute(a.as_ref())).collect(),
        }
    }

    /// Build a query from strings that were normalized upstream
    pub fn precomputed(primary: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            primary: primary.into(),
            aliases,
        }
    }
}

/// One record in the searchable pool.
///
/// The normalized name and aliases are computed once when the candidate is
/// created and reused for every query.
#[derive(Debug, Clone)]
pub struct Candidate<T> {
    payload: T,
    name: String,
    aliases: Vec<String>,
}

impl<T> Candidate<T> {
    /// Wrap a payload, normalizing its raw name and aliases
    pub fn new<I, S>(payload: T, name: &str, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            payload,
            name: precompute(name),
            aliases: aliases.into_iter().map(|a| precompute(a.as_ref())).collect(),
        }
    }

    /// Wrap a payload whose name and aliases are already normalized
    pub fn precomputed(payload: T, name: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            payload,
            name: name.into(),
            aliases,
        }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

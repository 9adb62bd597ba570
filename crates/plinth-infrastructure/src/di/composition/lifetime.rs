//! Service lifetimes

use std::fmt;

/// How long a resolved instance lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifetime {
    /// One instance for the whole resolver, created on first use
    #[default]
    Singleton,
    /// One instance per lifetime scope; the resolver root acts as its own scope
    Scoped,
    /// A new instance on every resolution
    Transient,
}

impl Lifetime {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Scoped => "scoped",
            Self::Transient => "transient",
        }
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

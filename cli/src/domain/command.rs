//! Remote command token vectors.

use std::fmt;

/// An immutable program-plus-arguments vector run on a remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a command from `base`, appending `arg` only when it is non-empty.
    #[must_use]
    pub fn with_optional_arg(base: &[&str], arg: &str) -> Self {
        let mut tokens: Vec<String> = base.iter().map(|t| (*t).to_string()).collect();
        if !arg.is_empty() {
            tokens.push(arg.to_string());
        }
        Self { tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

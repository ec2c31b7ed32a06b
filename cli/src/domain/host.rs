//! Host records and normalization of raw infrastructure entries.
//!
//! This module is intentionally free of I/O, async, and external layer imports.

use std::fmt;

use serde::Serialize;

/// A remote machine addressable over its public address.
///
/// Identity is the `name`. Hosts are built once per discovery and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Host {
    /// Human-readable host name.
    pub name: String,
    /// Address used to reach the host from the operator's machine.
    pub public_address: String,
    /// Address on the private network.
    pub private_address: String,
}

impl Host {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        public_address: impl Into<String>,
        private_address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            public_address: public_address.into(),
            private_address: private_address.into(),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:\t{}\t[{}]",
            self.name, self.public_address, self.private_address
        )
    }
}

/// A raw entry read from infrastructure state, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    pub name: Option<String>,
    pub public_address: Option<String>,
    pub private_address: Option<String>,
}

impl HostRecord {
    /// Convert into a [`Host`], or `None` when either address is missing.
    #[must_use]
    pub fn into_host(self) -> Option<Host> {
        let public_address = self.public_address.filter(|a| !a.is_empty())?;
        let private_address = self.private_address.filter(|a| !a.is_empty())?;
        Some(Host {
            name: self.name.unwrap_or_default(),
            public_address,
            private_address,
        })
    }
}

/// Normalize raw records into hosts, preserving directory order.
///
/// Records without both a public and a private address are skipped.
#[must_use]
pub fn normalize(records: impl IntoIterator<Item = HostRecord>) -> Vec<Host> {
    records
        .into_iter()
        .filter_map(HostRecord::into_host)
        .collect()
}

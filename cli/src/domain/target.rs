//! Target selection over the host directory.
//!
//! Pure functions only: no I/O, no async.

use crate::domain::host::Host;

/// Optional predicates selecting a subset of hosts.
///
/// A host matches when it satisfies *any* supplied criterion. With no
/// criterion supplied every host matches. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Select hosts whose name starts with this prefix.
    pub name_prefix: Option<String>,
    /// Select the host with this public address.
    pub public_address: Option<String>,
    /// Select the host whose *name* equals this value.
    pub private_address: Option<String>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new(
        name_prefix: Option<String>,
        public_address: Option<String>,
        private_address: Option<String>,
    ) -> Self {
        Self {
            name_prefix,
            public_address,
            private_address,
        }
    }

    /// Returns `true` when no criterion is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        criterion(self.name_prefix.as_ref()).is_none()
            && criterion(self.public_address.as_ref()).is_none()
            && criterion(self.private_address.as_ref()).is_none()
    }

    /// Check whether `host` is selected by these criteria.
    #[must_use]
    pub fn matches(&self, host: &Host) -> bool {
        if self.is_empty() {
            return true;
        }
        let by_name =
            criterion(self.name_prefix.as_ref()).is_some_and(|p| host.name.starts_with(p));
        let by_public =
            criterion(self.public_address.as_ref()).is_some_and(|ip| host.public_address == ip);
        // The private filter has always keyed on the host name, not `private_address`.
        let by_private = criterion(self.private_address.as_ref()).is_some_and(|p| host.name == p);
        by_name || by_public || by_private
    }
}

fn criterion(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Select the hosts matching `criteria`, in directory order.
///
/// Each host appears at most once even when several criteria select it.
/// Zero matches is not an error.
#[must_use]
pub fn resolve(directory: &[Host], criteria: &FilterCriteria) -> Vec<Host> {
    directory
        .iter()
        .filter(|host| criteria.matches(host))
        .cloned()
        .collect()
}

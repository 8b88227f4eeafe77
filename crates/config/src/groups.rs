//! Virtual desktop groups.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// One virtual desktop, identified by a single-character label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Group {
    /// Identifying label, also the key that switches to the group.
    pub name: String,
}

impl Group {
    /// A group with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The fixed group table, in switch order.
pub fn groups() -> Vec<Group> {
    defaults::GROUP_LABELS
        .chars()
        .map(|c| Group::new(c.to_string()))
        .collect()
}

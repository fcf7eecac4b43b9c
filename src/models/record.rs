use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key injected into every record, holding the file it came from.
pub const PROVENANCE_FIELD: &str = "_filePath";

/// File name that always marks a domain record.
pub const DOMAIN_FILE_NAME: &str = "domain.json";

/// Top-level key whose presence marks a domain record.
pub const ROLES_KEY: &str = "roles";

/// A JSON object loaded from one example file.
pub type Record = Map<String, Value>;

/// Which bucket of the [`Collection`] a record belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Domain,
    Role,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Role => "role",
        }
    }
}

/// Outcome of classifying a parsed example file.
///
/// The rule is a heuristic: a file named `domain.json`, or any object with a
/// top-level `roles` key, is a domain. A role that composes sub-roles through
/// its own `roles` field therefore lands in `domains`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Domain,
    Role,
    /// Content that cannot carry a provenance key, e.g. a top-level array.
    Unclassified { reason: String },
}

impl Classification {
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            Self::Domain => Some(RecordKind::Domain),
            Self::Role => Some(RecordKind::Role),
            Self::Unclassified { .. } => None,
        }
    }
}

/// The merged example data, in discovery order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub domains: Vec<Record>,
    pub roles: Vec<Record>,
}

impl Collection {
    pub fn push(&mut self, kind: RecordKind, record: Record) {
        match kind {
            RecordKind::Domain => self.domains.push(record),
            RecordKind::Role => self.roles.push(record),
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len() + self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

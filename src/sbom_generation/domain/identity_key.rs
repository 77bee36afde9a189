use super::Component;
use std::fmt;

/// Deduplication key derived from a component
///
/// A non-empty purl always wins. Without one, the component is identified by
/// `name:version` (version defaulting to empty). Components that have neither
/// purl nor name are anonymous; whether anonymous components collapse is
/// decided by `AnonymousComponentPolicy`, which also fills in `ordinal`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Purl(String),
    NameVersion {
        name: String,
        version: String,
    },
    Anonymous {
        version: String,
        ordinal: Option<usize>,
    },
}

impl IdentityKey {
    /// Computes the key of a component, leaving anonymous keys unnumbered
    pub fn of(component: &Component) -> Self {
        if let Some(purl) = component.purl() {
            return IdentityKey::Purl(purl.to_string());
        }

        let version = component.version().unwrap_or_default().to_string();
        match component.name() {
            Some(name) => IdentityKey::NameVersion {
                name: name.to_string(),
                version,
            },
            None => IdentityKey::Anonymous {
                version,
                ordinal: None,
            },
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, IdentityKey::Anonymous { .. })
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityKey::Purl(purl) => write!(f, "{}", purl),
            IdentityKey::NameVersion { name, version } => write!(f, "{}:{}", name, version),
            IdentityKey::Anonymous {
                version,
                ordinal: None,
            } => write!(f, "<unnamed>:{}", version),
            IdentityKey::Anonymous {
                version,
                ordinal: Some(ordinal),
            } => write!(f, "<unnamed#{}>:{}", ordinal, version),
        }
    }
}

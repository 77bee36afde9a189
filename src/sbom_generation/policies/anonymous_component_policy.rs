use crate::sbom_generation::domain::IdentityKey;

/// AnonymousComponentPolicy decides how components without purl and name dedupe
///
/// Such components all share the same fallback key, so first-wins dedup
/// would silently reduce them to one entry per version.
///
/// - `Keep` (default): every anonymous component is kept, keyed by position
/// - `Collapse`: anonymous components with the same version collapse, first wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnonymousComponentPolicy {
    #[default]
    Keep,
    Collapse,
}

impl AnonymousComponentPolicy {
    /// Applies the policy to a computed key
    ///
    /// # Arguments
    /// * `key` - Key computed by `IdentityKey::of`
    /// * `position` - Position of the component across all merged documents
    pub fn resolve(self, key: IdentityKey, position: usize) -> IdentityKey {
        match (self, key) {
            (AnonymousComponentPolicy::Keep, IdentityKey::Anonymous { version, .. }) => {
                IdentityKey::Anonymous {
                    version,
                    ordinal: Some(position),
                }
            }
            (_, key) => key,
        }
    }
}

impl std::str::FromStr for AnonymousComponentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(AnonymousComponentPolicy::Keep),
            "collapse" => Ok(AnonymousComponentPolicy::Collapse),
            _ => Err(format!(
                "Invalid anonymous component policy: {}. Please specify 'keep' or 'collapse'",
                s
            )),
        }
    }
}

impl std::fmt::Display for AnonymousComponentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnonymousComponentPolicy::Keep => write!(f, "keep"),
            AnonymousComponentPolicy::Collapse => write!(f, "collapse"),
        }
    }
}

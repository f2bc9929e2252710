//! Value types for host-server configuration.

/// Production host baked in at build time. Packaging can swap it by setting
/// `GROUNDLINK_DEFAULT_HOST` during compilation; it is immutable at runtime.
pub const DEFAULT_HOST: &str = match option_env!("GROUNDLINK_DEFAULT_HOST") {
    Some(host) => host,
    None => "game.example.com",
};

/// An operator-supplied host override. Absent, empty, and whitespace-only
/// candidates all collapse into [`HostOverride::Unset`]; the check lives here
/// so callers never have to repeat it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOverride {
    Unset,
    Set(String),
}

impl HostOverride {
    /// Normalizes a candidate override. Non-blank input is kept verbatim,
    /// untrimmed and unvalidated.
    pub fn new(candidate: Option<&str>) -> Self {
        match candidate {
            Some(host) if !host.trim().is_empty() => Self::Set(host.to_owned()),
            _ => Self::Unset,
        }
    }

    /// The host the application should connect to: the override when set,
    /// [`DEFAULT_HOST`] otherwise. Always non-empty.
    pub fn effective_host(&self) -> &str {
        match self {
            Self::Set(host) => host,
            Self::Unset => DEFAULT_HOST,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Set(host) => Some(host),
            Self::Unset => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Set(host) => Some(host),
            Self::Unset => None,
        }
    }
}

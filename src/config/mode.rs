use std::fmt;

use serde::Serialize;

/// Deployment environment the server runs in.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Demo,
    Dev,
    Prod,
}

impl Mode {
    /// Exact match only; anything else, including the empty string, is demo.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "dev" => Self::Dev,
            "prod" => Self::Prod,
            _ => Self::Demo,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }

    pub fn is_prod(self) -> bool {
        self == Self::Prod
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_known_modes() {
        assert_eq!(Mode::coerce("demo"), Mode::Demo);
        assert_eq!(Mode::coerce("dev"), Mode::Dev);
        assert_eq!(Mode::coerce("prod"), Mode::Prod);
    }

    #[test]
    fn coerces_unknown_and_empty_to_demo() {
        for raw in ["", "production", "PROD", " dev", "staging"] {
            assert_eq!(Mode::coerce(raw), Mode::Demo, "input {raw:?}");
        }
    }

    #[test]
    fn serializes_lowercase() {
        let payload = serde_json::to_string(&Mode::Prod).expect("mode should serialize");
        assert_eq!(payload, "\"prod\"");
    }
}

use std::fmt;

use serde::{Serialize, Serializer};

const ALL: &str = "ALL";
const SEPARATOR: char = ',';

/// Optional server capability toggled through the `feat` setting.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Feature {
    StorageLocal,
    Sso,
    StorageS3,
}

impl Feature {
    pub const KNOWN: [Feature; 3] = [Feature::StorageLocal, Feature::Sso, Feature::StorageS3];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StorageLocal => "STORAGE_LOCAL",
            Self::Sso => "SSO",
            Self::StorageS3 => "STORAGE_S3",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::KNOWN
            .into_iter()
            .find(|feature| feature.as_str() == token)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One comma-separated member of a feature list.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FeatureToken {
    Known(Feature),
    /// Kept verbatim so the list prints back exactly as configured.
    Unrecognized(String),
}

impl FeatureToken {
    fn as_str(&self) -> &str {
        match self {
            Self::Known(feature) => feature.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FeatureSet {
    All,
    Listed(Vec<FeatureToken>),
}

impl FeatureSet {
    pub fn none() -> Self {
        Self::Listed(Vec::new())
    }

    /// Upper-cases `raw` and splits it on commas. `ALL` only counts as the
    /// wildcard when it is the whole string.
    pub fn parse(raw: &str) -> Self {
        let upper = upper_case(raw);
        if upper == ALL {
            return Self::All;
        }
        if upper.is_empty() {
            return Self::none();
        }

        let tokens = upper
            .split(SEPARATOR)
            .map(|token| match Feature::from_token(token) {
                Some(feature) => FeatureToken::Known(feature),
                None => FeatureToken::Unrecognized(token.to_string()),
            })
            .collect();
        Self::Listed(tokens)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Listed(tokens) if tokens.is_empty())
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match self {
            Self::All => true,
            Self::Listed(tokens) => tokens.contains(&FeatureToken::Known(feature)),
        }
    }

    pub fn unrecognized(&self) -> impl Iterator<Item = &str> {
        let tokens = match self {
            Self::All => &[][..],
            Self::Listed(tokens) => tokens.as_slice(),
        };
        tokens.iter().filter_map(|token| match token {
            FeatureToken::Unrecognized(raw) => Some(raw.as_str()),
            FeatureToken::Known(_) => None,
        })
    }
}

/// Per-char simple case mapping: a char whose upper case expands to several
/// chars (`ß`) is kept as is.
fn upper_case(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Listed(tokens) => {
                for (idx, token) in tokens.iter().enumerate() {
                    if idx > 0 {
                        write!(f, "{SEPARATOR}")?;
                    }
                    f.write_str(token.as_str())?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

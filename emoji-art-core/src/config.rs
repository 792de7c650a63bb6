//! Document configuration.
//!
//! The defaults reproduce the permissive behaviour of the model: any size and
//! any content are accepted. Stricter validation is opt-in.

use serde::{Deserialize, Serialize};

use crate::{ArtError, ArtResult};

/// Default nominal size for emoji dropped from a palette.
pub const DEFAULT_DROP_EMOJI_SIZE: f64 = 40.0;

/// Default minimum used when a policy is selected from the environment
/// without an explicit `EMOJI_ART_MIN_SIZE`.
pub const DEFAULT_MIN_SIZE: i32 = 1;

/// How the controller treats computed emoji sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SizePolicy {
    /// Store whatever size was computed, including zero and negatives.
    #[default]
    Accept,
    /// Raise sizes below `min` to `min`.
    Clamp {
        /// Smallest stored size.
        min: i32,
    },
    /// Refuse sizes below `min`, leaving the document unchanged.
    Reject {
        /// Smallest accepted size.
        min: i32,
    },
}

impl SizePolicy {
    /// Apply the policy to a computed size.
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::InvalidSize`] under [`SizePolicy::Reject`] when
    /// `size` is below the minimum.
    pub fn apply(self, size: i32) -> ArtResult<i32> {
        match self {
            Self::Accept => Ok(size),
            Self::Clamp { min } => Ok(size.max(min)),
            Self::Reject { min } if size < min => Err(ArtError::InvalidSize { size, min }),
            Self::Reject { .. } => Ok(size),
        }
    }
}

/// Configuration for an [`EmojiArtDocument`](crate::EmojiArtDocument).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Size validation applied by add and resize intents.
    pub size_policy: SizePolicy,
    /// Refuse to add emoji with empty content.
    pub reject_empty_content: bool,
    /// Nominal size given to emoji dropped onto the canvas, before zoom.
    pub drop_emoji_size: f64,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            size_policy: SizePolicy::Accept,
            reject_empty_content: false,
            drop_emoji_size: DEFAULT_DROP_EMOJI_SIZE,
        }
    }
}

impl DocumentConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::Config`] if the JSON is malformed.
    pub fn from_json(json: &str) -> ArtResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EMOJI_ART_SIZE_POLICY`: `accept`, `clamp` or `reject` (default: accept)
    /// - `EMOJI_ART_MIN_SIZE`: minimum for clamp/reject (default: 1)
    /// - `EMOJI_ART_REJECT_EMPTY`: `true` or `false` (default: false)
    /// - `EMOJI_ART_DROP_SIZE`: drop size in points (default: 40)
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::InvalidEnv`] if a variable is set to an unusable value.
    pub fn from_env() -> ArtResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::InvalidEnv`] if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> ArtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let min = parse_var(&lookup, "EMOJI_ART_MIN_SIZE")?.unwrap_or(DEFAULT_MIN_SIZE);
        if let Some(policy) = lookup("EMOJI_ART_SIZE_POLICY") {
            let mode = policy.trim().to_ascii_lowercase();
            config.size_policy = match mode.as_str() {
                "accept" => SizePolicy::Accept,
                "clamp" => SizePolicy::Clamp { min },
                "reject" => SizePolicy::Reject { min },
                _ => {
                    return Err(ArtError::InvalidEnv {
                        name: "EMOJI_ART_SIZE_POLICY".to_string(),
                        value: policy,
                    });
                }
            };
        }
        if let Some(reject) = parse_var(&lookup, "EMOJI_ART_REJECT_EMPTY")? {
            config.reject_empty_content = reject;
        }
        if let Some(size) = parse_var(&lookup, "EMOJI_ART_DROP_SIZE")? {
            config.drop_emoji_size = size;
        }

        tracing::debug!(?config, "Loaded document configuration");
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> ArtResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(name)
        .map(|value| {
            value.trim().parse().map_err(|_| ArtError::InvalidEnv {
                name: name.to_string(),
                value,
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_accepts_everything() {
        let config = DocumentConfig::default();
        assert_eq!(config.size_policy.apply(-5).expect("accepted"), -5);
        assert!(!config.reject_empty_content);
        assert!((config.drop_emoji_size - DEFAULT_DROP_EMOJI_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_and_reject() {
        assert_eq!(SizePolicy::Clamp { min: 4 }.apply(2).expect("clamped"), 4);
        assert_eq!(SizePolicy::Clamp { min: 4 }.apply(9).expect("kept"), 9);
        assert_eq!(SizePolicy::Reject { min: 4 }.apply(4).expect("boundary"), 4);
        assert!(matches!(
            SizePolicy::Reject { min: 4 }.apply(3),
            Err(ArtError::InvalidSize { size: 3, min: 4 })
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let config = DocumentConfig::from_json(
            r#"{"size_policy": {"mode": "clamp", "min": 8}, "reject_empty_content": true}"#,
        )
        .expect("valid config");
        assert_eq!(config.size_policy, SizePolicy::Clamp { min: 8 });
        assert!(config.reject_empty_content);
        assert!((config.drop_emoji_size - DEFAULT_DROP_EMOJI_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            DocumentConfig::from_json("{not json"),
            Err(ArtError::Config(_))
        ));
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = DocumentConfig::from_lookup(lookup_from(&[])).expect("defaults");
        assert_eq!(config, DocumentConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_all_vars() {
        let config = DocumentConfig::from_lookup(lookup_from(&[
            ("EMOJI_ART_SIZE_POLICY", "Reject"),
            ("EMOJI_ART_MIN_SIZE", "12"),
            ("EMOJI_ART_REJECT_EMPTY", "true"),
            ("EMOJI_ART_DROP_SIZE", "64"),
        ]))
        .expect("valid vars");
        assert_eq!(config.size_policy, SizePolicy::Reject { min: 12 });
        assert!(config.reject_empty_content);
        assert!((config.drop_emoji_size - 64.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let err = DocumentConfig::from_lookup(lookup_from(&[("EMOJI_ART_SIZE_POLICY", "shrink")]))
            .expect_err("unknown policy");
        assert!(matches!(err, ArtError::InvalidEnv { ref name, .. } if name == "EMOJI_ART_SIZE_POLICY"));

        let err = DocumentConfig::from_lookup(lookup_from(&[("EMOJI_ART_MIN_SIZE", "tiny")]))
            .expect_err("non-numeric");
        assert!(matches!(err, ArtError::InvalidEnv { ref name, .. } if name == "EMOJI_ART_MIN_SIZE"));
    }
}

//! Kerning group prefix configuration
//!
//! Prefixes can be built in code or read from a small JSON file such as
//! `{"first": "public.kern1.", "second": "public.kern2."}`. Missing fields
//! fall back to the legacy converter defaults.

use crate::error::{ConversionError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Prefix used by the legacy converter for first-side groups
pub const LEGACY_FIRST_PREFIX: &str = "@KERN_1_";
/// Prefix used by the legacy converter for second-side groups
pub const LEGACY_SECOND_PREFIX: &str = "@KERN_2_";
/// Reserved UFO3 prefix for first-side groups
pub const UFO3_FIRST_PREFIX: &str = "public.kern1.";
/// Reserved UFO3 prefix for second-side groups
pub const UFO3_SECOND_PREFIX: &str = "public.kern2.";

/// The pair of prefixes marking which kerning side a group belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KerningPrefixes {
    pub first: String,
    pub second: String,
}

impl Default for KerningPrefixes {
    fn default() -> Self {
        Self::new(LEGACY_FIRST_PREFIX, LEGACY_SECOND_PREFIX)
    }
}

impl KerningPrefixes {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The `public.kern1.` / `public.kern2.` prefixes reserved by UFO3
    pub fn ufo3() -> Self {
        Self::new(UFO3_FIRST_PREFIX, UFO3_SECOND_PREFIX)
    }

    /// Check that the two sides use different prefixes
    pub fn validate(&self) -> Result<()> {
        if self.first == self.second {
            return Err(ConversionError::IdenticalPrefixes {
                prefix: self.first.clone(),
            });
        }
        Ok(())
    }

    /// Parse and validate prefixes from a JSON string
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let prefixes: Self =
            serde_json::from_str(json).context("Failed to parse kerning prefix config")?;
        prefixes.validate()?;
        Ok(prefixes)
    }

    /// Load prefixes from a JSON config file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read prefix config {:?}", path))?;
        let prefixes = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid prefix config {:?}", path))?;
        debug!("Loaded kerning prefixes from {:?}", path);
        Ok(prefixes)
    }

    /// Write prefixes to a JSON config file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved kerning prefixes to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefixes_are_legacy_ones() {
        let prefixes = KerningPrefixes::default();
        assert_eq!(prefixes.first, "@KERN_1_");
        assert_eq!(prefixes.second, "@KERN_2_");
        assert!(prefixes.validate().is_ok());
    }

    #[test]
    fn identical_prefixes_are_rejected() {
        let prefixes = KerningPrefixes::new("@K_", "@K_");
        assert_eq!(
            prefixes.validate(),
            Err(ConversionError::IdenticalPrefixes {
                prefix: "@K_".to_string()
            })
        );
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let prefixes = KerningPrefixes::from_json_str(r#"{"second": "public.kern2."}"#).unwrap();
        assert_eq!(prefixes.first, LEGACY_FIRST_PREFIX);
        assert_eq!(prefixes.second, UFO3_SECOND_PREFIX);
    }

    #[test]
    fn json_with_identical_prefixes_fails() {
        let err = KerningPrefixes::from_json_str(r#"{"first": "x", "second": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefixes.json");

        KerningPrefixes::ufo3().save(&path).unwrap();
        let loaded = KerningPrefixes::load(&path).unwrap();
        assert_eq!(loaded, KerningPrefixes::ufo3());
    }

    #[test]
    fn loading_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = KerningPrefixes::load(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}

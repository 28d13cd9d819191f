//! Configuration for accessibility checking.

use crate::compliance::{ContrastLevel, PdfUaRequirement};
use crate::error::{Error, Result};
use crate::structure::SemanticType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Accessibility checking configuration.
///
/// # Examples
///
/// ```
/// use pdfua_oxide::compliance::PdfUaRequirement;
/// use pdfua_oxide::config::CheckerConfig;
/// use pdfua_oxide::structure::SemanticType;
///
/// let config = CheckerConfig::new()
///     .with_requirements([PdfUaRequirement::TablesMustHaveHeaders])
///     .with_role("Chapter", SemanticType::Section)
///     .with_warnings(false);
/// assert!(config.is_enabled(PdfUaRequirement::TablesMustHaveHeaders));
/// assert!(!config.is_enabled(PdfUaRequirement::LogicalReadingOrder));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Requirements to check.
    pub enabled_requirements: BTreeSet<PdfUaRequirement>,

    /// Keep warning and info violations in results.
    pub include_warnings: bool,

    /// Stop after the first requirement that fails.
    pub stop_on_first_failure: bool,

    /// Custom structure type name → standard type.
    pub role_map: HashMap<String, SemanticType>,

    /// WCAG level for contrast statistics.
    pub contrast_level: ContrastLevel,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckerConfig {
    /// Create new configuration with defaults: every requirement, warnings
    /// kept, no early stop, empty role map, level AA.
    pub fn new() -> Self {
        Self {
            enabled_requirements: PdfUaRequirement::ALL.into_iter().collect(),
            include_warnings: true,
            stop_on_first_failure: false,
            role_map: HashMap::new(),
            contrast_level: ContrastLevel::Aa,
        }
    }

    /// Check only the given requirements.
    pub fn with_requirements(mut self, requirements: impl IntoIterator<Item = PdfUaRequirement>) -> Self {
        self.enabled_requirements = requirements.into_iter().collect();
        self
    }

    /// Keep or drop warning and info violations.
    pub fn with_warnings(mut self, include: bool) -> Self {
        self.include_warnings = include;
        self
    }

    /// Stop after the first failing requirement.
    pub fn with_stop_on_first_failure(mut self, stop: bool) -> Self {
        self.stop_on_first_failure = stop;
        self
    }

    /// Map a custom structure type name to a standard type.
    pub fn with_role(mut self, name: impl Into<String>, target: SemanticType) -> Self {
        self.role_map.insert(name.into(), target);
        self
    }

    /// Set the WCAG contrast level.
    pub fn with_contrast_level(mut self, level: ContrastLevel) -> Self {
        self.contrast_level = level;
        self
    }

    /// Check if a requirement is enabled.
    pub fn is_enabled(&self, requirement: PdfUaRequirement) -> bool {
        self.enabled_requirements.contains(&requirement)
    }

    /// Load configuration from JSON.
    ///
    /// Missing fields take their defaults. Role-map targets must be standard
    /// structure type names.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCheckerConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// JSON shape with unresolved role-map targets.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCheckerConfig {
    enabled_requirements: Option<BTreeSet<PdfUaRequirement>>,
    include_warnings: Option<bool>,
    stop_on_first_failure: Option<bool>,
    #[serde(default)]
    role_map: HashMap<String, String>,
    contrast_level: Option<ContrastLevel>,
}

impl TryFrom<RawCheckerConfig> for CheckerConfig {
    type Error = Error;

    fn try_from(raw: RawCheckerConfig) -> Result<Self> {
        let defaults = CheckerConfig::new();

        let mut role_map = HashMap::with_capacity(raw.role_map.len());
        for (name, target) in raw.role_map {
            if name.is_empty() {
                return Err(Error::InvalidConfig("role map contains an empty name".to_string()));
            }
            let resolved = SemanticType::from_structure_type_name(&target).ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "role map entry '{}' targets unknown structure type '{}'",
                    name, target
                ))
            })?;
            role_map.insert(name, resolved);
        }

        Ok(Self {
            enabled_requirements: raw
                .enabled_requirements
                .unwrap_or(defaults.enabled_requirements),
            include_warnings: raw.include_warnings.unwrap_or(defaults.include_warnings),
            stop_on_first_failure: raw
                .stop_on_first_failure
                .unwrap_or(defaults.stop_on_first_failure),
            role_map,
            contrast_level: raw.contrast_level.unwrap_or(defaults.contrast_level),
        })
    }
}

//! Garment templates and the catalog the wizard offers.
//!
//! The catalog is fixed once loaded.  [`TemplateCatalog::default`] holds
//! the three built-in garments; [`TemplateCatalog::from_json`] loads an
//! alternative list and rejects catalogs the selector could not present
//! (empty, or with ambiguous ids).

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Dimensions;

/// Identifier of a garment template (e.g. `"tshirt"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named garment type with the output resolution it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Stable identifier recorded as the wizard's selection.
    pub id: TemplateId,
    /// Human-readable garment name.
    pub name: String,
    /// Required output resolution for prints on this garment.
    pub dimensions: Dimensions,
}

impl Template {
    /// Create a template.
    #[must_use]
    pub fn new(id: &str, name: &str, dimensions: Dimensions) -> Self {
        Self {
            id: TemplateId::new(id),
            name: name.to_owned(),
            dimensions,
        }
    }

    /// Glyph shown on the template's selector card.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self.id.as_str() {
            "tshirt" => "👕",
            "hoodie" => "🧥",
            _ => "👔",
        }
    }
}

/// Errors that can occur when loading or querying a template catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("failed to parse template catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog contains no templates.
    #[error("template catalog is empty")]
    Empty,

    /// Two templates share the same id.
    #[error("duplicate template id: {0}")]
    DuplicateId(String),

    /// No template with the requested id exists.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

/// Ordered, non-empty list of templates with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Template>", into = "Vec<Template>")]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Required output resolution shared by the built-in templates.
    pub const DEFAULT_DIMENSIONS: Dimensions = Dimensions::new(3000, 4000);

    /// Build a catalog, checking it is non-empty with unique ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if `templates` is empty.
    /// Returns [`CatalogError::DuplicateId`] if two templates share an id.
    pub fn new(templates: Vec<Template>) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                return Err(CatalogError::DuplicateId(template.id.to_string()));
            }
        }
        Ok(Self { templates })
    }

    /// Parse a catalog from a JSON array of templates.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed JSON, and the same
    /// errors as [`TemplateCatalog::new`] for an invalid list.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let templates: Vec<Template> = serde_json::from_str(json)?;
        Self::new(templates)
    }

    /// Look up a template by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTemplate`] if no template has `id`.
    pub fn get(&self, id: &str) -> Result<&Template, CatalogError> {
        self.templates
            .iter()
            .find(|t| t.id.as_str() == id)
            .ok_or_else(|| CatalogError::UnknownTemplate(id.to_owned()))
    }

    /// All templates in display order.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Number of templates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always `false`; a catalog cannot be constructed empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self {
            templates: vec![
                Template::new("tshirt", "Classic T-Shirt", Self::DEFAULT_DIMENSIONS),
                Template::new("hoodie", "Pullover Hoodie", Self::DEFAULT_DIMENSIONS),
                Template::new("sweatshirt", "Sweatshirt", Self::DEFAULT_DIMENSIONS),
            ],
        }
    }
}

impl TryFrom<Vec<Template>> for TemplateCatalog {
    type Error = CatalogError;

    fn try_from(templates: Vec<Template>) -> Result<Self, Self::Error> {
        Self::new(templates)
    }
}

impl From<TemplateCatalog> for Vec<Template> {
    fn from(catalog: TemplateCatalog) -> Self {
        catalog.templates
    }
}

impl<'a> IntoIterator for &'a TemplateCatalog {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

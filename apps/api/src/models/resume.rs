//! Resume document: the read-only record every answer is formatted from.
//!
//! The document is decoded leniently: each top-level section is read on its own,
//! and a section with the wrong shape loads as empty instead of failing startup.
//! Absent record fields stay `None` here and only become "N/A" when formatted.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

/// Placeholder for any field the document does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Error)]
pub enum ResumeLoadError {
    #[error("failed to read resume document {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("resume document {} is not valid JSON: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Publication {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    /// Carried with the record; answers list titles only.
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "lenient_text")]
    pub doi: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reference {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
}

/// Skills are stored either grouped by category or as a flat list.
/// The shape is fixed when the document loads.
#[derive(Debug, Clone, PartialEq)]
pub enum KeySkills {
    /// Each category mapped to its items, in document order.
    Categorized(Vec<(String, Vec<String>)>),
    Flat(Vec<String>),
}

impl Default for KeySkills {
    fn default() -> Self {
        KeySkills::Flat(Vec::new())
    }
}

impl KeySkills {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(KeySkills::Categorized(
                map.into_iter()
                    .map(|(category, items)| (category, text_list(items)))
                    .collect(),
            )),
            Value::Array(_) => Some(KeySkills::Flat(text_list(value))),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            KeySkills::Categorized(categories) => categories.is_empty(),
            KeySkills::Flat(items) => items.is_empty(),
        }
    }
}

/// The full resume. Immutable once loaded; shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ResumeDocument {
    /// Flat key/value pairs, in document order.
    pub personal_info: Map<String, Value>,
    /// Reverse-chronological: the current role first, the earliest last.
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub key_skills: KeySkills,
    pub certificates: Vec<String>,
    pub research_publications: Vec<Publication>,
    pub achievements: Vec<String>,
    pub references: Vec<Reference>,
}

impl ResumeDocument {
    /// Builds a document from parsed JSON. Never fails: a missing or malformed
    /// section is logged and left empty.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut root) = value else {
            warn!("Resume document root is not a JSON object; all sections will be empty");
            return Self::default();
        };

        let key_skills = match root.remove("key_skills") {
            None | Some(Value::Null) => KeySkills::default(),
            Some(value) => KeySkills::from_value(value).unwrap_or_else(|| {
                warn!(section = "key_skills", "Malformed resume section; treating it as empty");
                KeySkills::default()
            }),
        };

        Self {
            personal_info: section(&mut root, "personal_info"),
            experience: section(&mut root, "experience"),
            education: section(&mut root, "education"),
            projects: section(&mut root, "projects"),
            key_skills,
            certificates: string_section(&mut root, "certificates"),
            research_publications: section(&mut root, "research_publications"),
            achievements: string_section(&mut root, "achievements"),
            references: section(&mut root, "references"),
        }
    }
}

/// Reads and decodes the resume document at `path`.
/// Only an unreadable file or invalid JSON is an error.
pub fn load_resume(path: &Path) -> Result<ResumeDocument, ResumeLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ResumeLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| ResumeLoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let document = ResumeDocument::from_value(value);
    info!(
        path = %path.display(),
        experience = document.experience.len(),
        projects = document.projects.len(),
        "Resume document loaded"
    );
    Ok(document)
}

/// Renders a stored value as answer text. Strings are returned verbatim,
/// other JSON values as their JSON text, `null` as `None`.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn text_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(value_text).collect(),
        other => value_text(&other).into_iter().collect(),
    }
}

fn section<T: DeserializeOwned + Default>(root: &mut Map<String, Value>, key: &str) -> T {
    match root.remove(key) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!(section = key, error = %e, "Malformed resume section; treating it as empty");
            T::default()
        }),
    }
}

/// Lists of plain strings keep their usable items; `null` entries are dropped and
/// other scalars are rendered as text.
fn string_section(root: &mut Map<String, Value>, key: &str) -> Vec<String> {
    match root.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(value @ Value::Array(_)) => text_list(value),
        Some(_) => {
            warn!(section = key, "Malformed resume section; treating it as empty");
            Vec::new()
        }
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_text(&value))
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(text_list(value))
}

// src/types/resume.rs
//! Resume document model shared with the editing front end.
//!
//! Every field is optional at the data level. Deserialization performs the
//! safe defaulting the render path relies on: absent or wrong-typed fields
//! become their defaults, so templates never see a missing array. Only a
//! root value that is not a JSON object is treated as a caller error.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Absorb a wrong-typed field as its default instead of failing the
/// whole document.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Accept a string or a number where the form layer is inconsistent
/// (GPA values arrive as either).
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

// ===== Root document =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    #[serde(deserialize_with = "lenient")]
    pub contact: Contact,
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "lenient")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "lenient")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient")]
    pub skills: Vec<SkillCategory>,
    #[serde(deserialize_with = "lenient")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "lenient")]
    pub achievements: Vec<Achievement>,
    #[serde(deserialize_with = "lenient")]
    pub custom_sections: Vec<CustomSection>,
}

impl ResumeDocument {
    /// Parse a resume from untyped JSON. Per-field anomalies are absorbed
    /// as defaults; only a non-object root is rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            anyhow::bail!("Resume data must be a JSON object");
        }
        serde_json::from_value(value.clone()).context("Failed to deserialize resume data")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub professional_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub address: Address,
    #[serde(deserialize_with = "lenient")]
    pub avatar: Avatar,
    #[serde(deserialize_with = "lenient")]
    pub social_links: Vec<SocialLink>,
}

impl Contact {
    /// Display name assembled from the name parts, empty when both are
    /// absent.
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(deserialize_with = "lenient")]
    pub street: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub zip_code: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub country: Option<String>,
}

impl Address {
    /// Single-line rendering of the non-empty address parts.
    pub fn display(&self) -> String {
        let parts: Vec<&str> = [
            self.street.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zip_code.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
        parts.join(", ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Avatar {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    #[serde(deserialize_with = "lenient")]
    pub platform: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

// ===== Sections =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    #[serde(deserialize_with = "lenient")]
    pub job_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_current: Option<bool>,
    // Bullet entries arrive from the form layer; non-string entries are
    // filtered out at render time.
    #[serde(deserialize_with = "lenient")]
    pub description: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "lenient")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub field_of_study: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_current: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub gpa: Option<Gpa>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gpa {
    #[serde(deserialize_with = "string_or_number")]
    pub value: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: GpaKind,
}

impl Gpa {
    /// Display line such as "CGPA: 8.9", empty when no value is present.
    pub fn display(&self) -> String {
        match self.value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => format!("{}: {}", self.kind.label(), v),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GpaKind {
    #[default]
    #[serde(rename = "GPA")]
    Gpa,
    #[serde(rename = "CGPA")]
    Cgpa,
    Percentage,
    Marks,
}

impl GpaKind {
    pub fn label(&self) -> &'static str {
        match self {
            GpaKind::Gpa => "GPA",
            GpaKind::Cgpa => "CGPA",
            GpaKind::Percentage => "Percentage",
            GpaKind::Marks => "Marks",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub links: Vec<LinkRef>,
    #[serde(deserialize_with = "lenient")]
    pub technologies_used: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkRef {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    #[serde(deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub items: Vec<SkillItem>,
}

/// Skill entries come in two shapes for backward compatibility: a plain
/// string or an object carrying a proficiency level (0-10). Anything else
/// (nulls, legacy garbage) is preserved as `Unknown` and ignored by
/// normalization — `helpers::map_skill_items` is the only place that
/// matches on the tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillItem {
    Plain(String),
    Leveled {
        #[serde(default, deserialize_with = "lenient")]
        value: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        level: Option<f64>,
    },
    Unknown(Value),
}

impl SkillItem {
    /// Numeric proficiency, present only for the leveled shape.
    pub fn level(&self) -> Option<f64> {
        match self {
            SkillItem::Leveled { level, .. } => *level,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub issuing_organization: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub issue_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub expiration_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub credential_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub issuer: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    #[serde(deserialize_with = "lenient")]
    pub section_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub items: Vec<CustomItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomItem {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub sub_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub links: Vec<LinkRef>,
}

// ===== Date range access =====

/// Anything carrying a start/end/current triple. `is_current` takes
/// precedence over an end date when formatting ranges.
pub trait Dated {
    fn start_date(&self) -> Option<&str>;
    fn end_date(&self) -> Option<&str>;
    fn is_current(&self) -> bool {
        false
    }
}

impl Dated for WorkExperience {
    fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }
    fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }
    fn is_current(&self) -> bool {
        self.is_current.unwrap_or(false)
    }
}

impl Dated for Education {
    fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }
    fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }
    fn is_current(&self) -> bool {
        self.is_current.unwrap_or(false)
    }
}

impl Dated for Project {
    fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }
    fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }
}

impl Dated for CustomItem {
    fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }
    fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_requires_object() {
        assert!(ResumeDocument::from_value(&json!("not a resume")).is_err());
        assert!(ResumeDocument::from_value(&json!([1, 2, 3])).is_err());
        assert!(ResumeDocument::from_value(&json!({})).is_ok());
    }

    #[test]
    fn test_wrong_typed_fields_are_absorbed() {
        let doc = ResumeDocument::from_value(&json!({
            "summary": 42,
            "workExperience": "nope",
            "skills": {"category": "oops"},
            "contact": {"firstName": ["x"], "lastName": "Doe"}
        }))
        .unwrap();

        assert!(doc.summary.is_none());
        assert!(doc.work_experience.is_empty());
        assert!(doc.skills.is_empty());
        assert_eq!(doc.contact.full_name(), "Doe");
    }

    #[test]
    fn test_skill_item_dual_shape() {
        let category: SkillCategory = serde_json::from_value(json!({
            "category": "Backend",
            "items": ["Rust", {"value": "Node.js", "level": 8}, null]
        }))
        .unwrap();

        assert_eq!(category.items.len(), 3);
        assert!(matches!(category.items[0], SkillItem::Plain(_)));
        assert_eq!(category.items[1].level(), Some(8.0));
        assert!(matches!(category.items[2], SkillItem::Unknown(_)));
    }

    #[test]
    fn test_gpa_display() {
        let gpa: Gpa = serde_json::from_value(json!({"value": 8.9, "type": "CGPA"})).unwrap();
        assert_eq!(gpa.display(), "CGPA: 8.9");

        let empty = Gpa::default();
        assert_eq!(empty.display(), "");
    }

    #[test]
    fn test_address_display_skips_empty_parts() {
        let address: Address = serde_json::from_value(json!({
            "street": "1 Main St",
            "city": "",
            "country": "France"
        }))
        .unwrap();
        assert_eq!(address.display(), "1 Main St, France");
    }

    #[test]
    fn test_is_current_defaults_false() {
        let exp = WorkExperience::default();
        assert!(!exp.is_current());
    }
}

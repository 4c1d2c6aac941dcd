//! Catalog name records
//!
//! `Name` is the record the catalog supplies to the engine. Every field other
//! than `id` and `name` is optional on the wire; absent lists deserialize as
//! empty and absent text fields as `None`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NamecatError;

/// Whether a name is used as a given name, a family name, or both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameType {
    FirstName,
    Surname,
    #[default]
    Either,
}

impl NameType {
    /// `either` on a record satisfies any requested type.
    pub fn satisfies(self, wanted: NameType) -> bool {
        self == NameType::Either || wanted == NameType::Either || self == wanted
    }
}

impl FromStr for NameType {
    type Err = NamecatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "firstname" | "first-name" | "first" => Ok(NameType::FirstName),
            "surname" | "last" => Ok(NameType::Surname),
            "either" => Ok(NameType::Either),
            other => Err(NamecatError::unsupported(
                "name type",
                other,
                "firstName, surname, either",
            )),
        }
    }
}

/// Grammatical gender associated with a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neutral,
    Any,
}

impl Gender {
    /// `any` on either side matches everything.
    pub fn satisfies(self, wanted: Gender) -> bool {
        self == Gender::Any || wanted == Gender::Any || self == wanted
    }
}

impl FromStr for Gender {
    type Err = NamecatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "masculine" | "m" => Ok(Gender::Masculine),
            "feminine" | "f" => Ok(Gender::Feminine),
            "neutral" | "n" => Ok(Gender::Neutral),
            "any" => Ok(Gender::Any),
            other => Err(NamecatError::unsupported(
                "gender",
                other,
                "masculine, feminine, neutral, any",
            )),
        }
    }
}

/// Catalog workflow status of a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    #[default]
    Available,
    Used,
    Blocked,
}

impl FromStr for Status {
    type Err = NamecatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Status::Available),
            "used" => Ok(Status::Used),
            "blocked" => Ok(Status::Blocked),
            other => Err(NamecatError::unsupported(
                "status",
                other,
                "available, used, blocked",
            )),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Available => write!(f, "available"),
            Status::Used => write!(f, "used"),
            Status::Blocked => write!(f, "blocked"),
        }
    }
}

/// Kind of an explicitly declared relation between two names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationType {
    AlternateSpelling,
    Diminutive,
    MasculineForm,
    FeminineForm,
    NeutralForm,
    OtherLanguage,
    FullForm,
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RelationType::AlternateSpelling => "alternate spelling",
            RelationType::Diminutive => "diminutive",
            RelationType::MasculineForm => "masculine form",
            RelationType::FeminineForm => "feminine form",
            RelationType::NeutralForm => "neutral form",
            RelationType::OtherLanguage => "other language",
            RelationType::FullForm => "full form",
        };
        f.write_str(label)
    }
}

/// A relation declared on a name record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedName {
    #[serde(rename = "type")]
    pub relation: RelationType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feelings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RelatedName {
    /// Create a bare relation with only the kind and name set
    pub fn new(relation: RelationType, name: impl Into<String>) -> Self {
        RelatedName {
            relation,
            name: name.into(),
            pronunciation: None,
            script: None,
            etymology: None,
            gender: None,
            feelings: Vec::new(),
            alternate_origin: None,
            notes: None,
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_type: NameType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Geographic origin paths (continent > region > country > subregion)
    #[serde(default)]
    pub origin: Vec<String>,
    /// Category paths (main > sub > subsub)
    #[serde(default)]
    pub meanings: Vec<String>,
    /// Literal translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
    /// Hyphen-segmented pseudo-IPA
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub roots: Vec<String>,
    #[serde(default)]
    pub feelings: Vec<String>,
    #[serde(default)]
    pub related_names: Vec<RelatedName>,
    #[serde(default)]
    pub status: Status,
}

impl Name {
    /// Create a record with only an id and display name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Name {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether this record declares a relation to `other` by display name
    pub fn declares_relation_to(&self, other: &str) -> bool {
        let other = other.trim().to_lowercase();
        self.related_names
            .iter()
            .any(|r| r.name.trim().to_lowercase() == other)
    }

    /// Whether either record declares a relation to the other
    pub fn is_declared_relative(&self, other: &Name) -> bool {
        self.declares_relation_to(&other.name) || other.declares_relation_to(&self.name)
    }
}

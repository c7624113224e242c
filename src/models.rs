//! Content entities - typed shapes for the four admin collections.
//!
//! Documents come back from the store schema-less; each entity has a
//! `from_document` decoder that applies the defaulting rules exactly once,
//! so nothing partially-typed leaks past the repository layer. Stored field
//! names are camelCase (`postNumber`, `imageUrl`, `downloadUrl`, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::Document;

// ============================================================================
// Field decoding helpers
// ============================================================================

fn get_str(fields: &Value, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// A string field that may legitimately be absent; empty counts as absent.
fn get_opt_str(fields: &Value, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn get_bool(fields: &Value, key: &str, default: bool) -> bool {
    fields.get(key).and_then(Value::as_bool).unwrap_or(default)
}

fn get_u32(fields: &Value, key: &str, default: u32) -> u32 {
    fields
        .get(key)
        .and_then(Value::as_u64)
        .map(|n| n as u32)
        .unwrap_or(default)
}

fn get_str_vec(fields: &Value, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// BlogPost
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    /// RFC 3339 creation timestamp; set once, never rewritten on edit.
    pub date: String,
    /// Unique, monotonically increasing; assigned on create only.
    pub post_number: u32,
    pub published: bool,
    /// Derived from the title on create; not regenerated on edit.
    pub slug: String,
    /// Ids of referenced tags. Weak references: a deleted tag leaves its id
    /// behind here and renderers skip ids with no matching tag.
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

impl BlogPost {
    pub fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            title: get_str(f, "title"),
            content: get_str(f, "content"),
            excerpt: get_str(f, "excerpt"),
            author: {
                let author = get_str(f, "author");
                if author.is_empty() {
                    "Admin".to_string()
                } else {
                    author
                }
            },
            date: get_str(f, "date"),
            post_number: get_u32(f, "postNumber", 1),
            published: get_bool(f, "published", true),
            slug: get_str(f, "slug"),
            tags: get_str_vec(f, "tags"),
            image_url: get_opt_str(f, "imageUrl"),
        }
    }
}

// ============================================================================
// PortfolioItem
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioCategory {
    Wedding,
    Party,
}

impl PortfolioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioCategory::Wedding => "wedding",
            PortfolioCategory::Party => "party",
        }
    }

    /// Unknown values fall back to `wedding`.
    pub fn parse(value: &str) -> Self {
        match value {
            "party" => PortfolioCategory::Party,
            _ => PortfolioCategory::Wedding,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub image: String,
    pub title: String,
    pub couple: String,
    pub location: String,
    /// Free text ("150+", "about 80"), never parsed.
    pub guests: String,
    /// Free text ("March 2024"), never parsed.
    pub date: String,
    pub category: PortfolioCategory,
    pub description: String,
    /// Never contains blank entries once persisted.
    pub highlights: Vec<String>,
}

impl PortfolioItem {
    pub fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            image: get_str(f, "image"),
            title: get_str(f, "title"),
            couple: get_str(f, "couple"),
            location: get_str(f, "location"),
            guests: get_str(f, "guests"),
            date: get_str(f, "date"),
            category: PortfolioCategory::parse(&get_str(f, "category")),
            description: get_str(f, "description"),
            highlights: get_str_vec(f, "highlights"),
        }
    }
}

// ============================================================================
// Tag
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// Unique across the collection; derived from the name.
    pub slug: String,
}

impl Tag {
    pub fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            name: get_str(f, "name"),
            slug: get_str(f, "slug"),
        }
    }
}

// ============================================================================
// Brochure
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrochureType {
    Pdf,
    Image,
    Video,
}

impl BrochureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrochureType::Pdf => "pdf",
            BrochureType::Image => "image",
            BrochureType::Video => "video",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "image" => BrochureType::Image,
            "video" => BrochureType::Video,
            _ => BrochureType::Pdf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrochureCategory {
    Planning,
    Venues,
    Traditions,
    Inspiration,
}

impl BrochureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrochureCategory::Planning => "planning",
            BrochureCategory::Venues => "venues",
            BrochureCategory::Traditions => "traditions",
            BrochureCategory::Inspiration => "inspiration",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "venues" => BrochureCategory::Venues,
            "traditions" => BrochureCategory::Traditions,
            "inspiration" => BrochureCategory::Inspiration,
            _ => BrochureCategory::Planning,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brochure {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub brochure_type: BrochureType,
    /// Currently always empty; no size is computed anywhere.
    pub size: String,
    /// Placeholder 0 for PDFs, absent otherwise.
    pub pages: Option<u32>,
    /// External link (Drive, Dropbox, ...), required.
    pub download_url: String,
    /// Image-hosted preview, optional.
    pub preview_url: Option<String>,
    pub category: BrochureCategory,
    /// At most one brochure in the collection is featured at a time.
    pub featured: bool,
    /// RFC 3339 creation timestamp, immutable.
    pub created_at: String,
}

impl Brochure {
    pub fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            title: get_str(f, "title"),
            description: get_str(f, "description"),
            brochure_type: BrochureType::parse(&get_str(f, "type")),
            size: get_str(f, "size"),
            pages: f.get("pages").and_then(Value::as_u64).map(|n| n as u32),
            download_url: get_str(f, "downloadUrl"),
            preview_url: get_opt_str(f, "previewUrl"),
            category: BrochureCategory::parse(&get_str(f, "category")),
            featured: get_bool(f, "featured", false),
            created_at: get_str(f, "createdAt"),
        }
    }
}

//! Admin panel state: cached collection lists, per-entity forms, and the
//! transient toast. One explicit struct owned by the orchestrator; no
//! globals.

use std::time::{Duration, Instant};

use crate::config::TOAST_TTL;
use crate::models::{
    BlogPost, Brochure, BrochureCategory, BrochureType, PortfolioCategory, PortfolioItem, Tag,
};
use crate::upload::ImageFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification, auto-dismissed after the configured TTL.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Blogs,
    Portfolio,
    Tags,
    Brochures,
}

// ============================================================================
// Forms
// ============================================================================

#[derive(Debug, Clone)]
pub struct BlogForm {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub selected_tags: Vec<String>,
    pub image_file: Option<ImageFile>,
    /// Some(id) while editing an existing post.
    pub editing_id: Option<String>,
    /// Set while a submission is in flight; a second submit is a no-op.
    pub submitting: bool,
}

impl Default for BlogForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            author: "Admin".to_string(),
            selected_tags: Vec::new(),
            image_file: None,
            editing_id: None,
            submitting: false,
        }
    }
}

impl BlogForm {
    pub fn reset(&mut self) {
        let submitting = self.submitting;
        *self = Self::default();
        self.submitting = submitting;
    }

    /// Enter edit mode for an existing post. The image input starts empty;
    /// submitting without choosing a new file keeps the stored image URL.
    pub fn load(&mut self, post: &BlogPost) {
        self.title = post.title.clone();
        self.content = post.content.clone();
        self.excerpt = post.excerpt.clone();
        self.author = post.author.clone();
        self.selected_tags = post.tags.clone();
        self.image_file = None;
        self.editing_id = Some(post.id.clone());
    }

    /// Flip a tag id in the post's tag set.
    pub fn toggle_tag(&mut self, tag_id: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|id| id == tag_id) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag_id.to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioForm {
    /// Stored image URL, kept when editing without choosing a new file.
    pub image_url: String,
    pub image_file: Option<ImageFile>,
    pub title: String,
    pub couple: String,
    pub location: String,
    pub guests: String,
    pub date: String,
    pub category: PortfolioCategory,
    pub description: String,
    /// Always holds at least one slot while being edited; blanks are
    /// dropped at submit time, never stored.
    pub highlights: Vec<String>,
    pub editing_id: Option<String>,
}

impl Default for PortfolioForm {
    fn default() -> Self {
        Self {
            image_url: String::new(),
            image_file: None,
            title: String::new(),
            couple: String::new(),
            location: String::new(),
            guests: String::new(),
            date: String::new(),
            category: PortfolioCategory::Wedding,
            description: String::new(),
            highlights: vec![String::new()],
            editing_id: None,
        }
    }
}

impl PortfolioForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn load(&mut self, item: &PortfolioItem) {
        self.image_url = item.image.clone();
        self.image_file = None;
        self.title = item.title.clone();
        self.couple = item.couple.clone();
        self.location = item.location.clone();
        self.guests = item.guests.clone();
        self.date = item.date.clone();
        self.category = item.category;
        self.description = item.description.clone();
        self.highlights = if item.highlights.is_empty() {
            vec![String::new()]
        } else {
            item.highlights.clone()
        };
        self.editing_id = Some(item.id.clone());
    }

    pub fn add_highlight(&mut self) {
        self.highlights.push(String::new());
    }

    pub fn update_highlight(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.highlights.get_mut(index) {
            *slot = value.to_string();
        }
    }

    /// Removing the last slot restores a single blank one; the form never
    /// shows zero highlight inputs.
    pub fn remove_highlight(&mut self, index: usize) {
        if index < self.highlights.len() {
            self.highlights.remove(index);
        }
        if self.highlights.is_empty() {
            self.highlights.push(String::new());
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrochureForm {
    pub title: String,
    pub description: String,
    pub brochure_type: BrochureType,
    pub category: BrochureCategory,
    pub featured: bool,
    pub download_url: String,
    pub preview_file: Option<ImageFile>,
}

impl Default for BrochureForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            brochure_type: BrochureType::Pdf,
            category: BrochureCategory::Planning,
            featured: false,
            download_url: String::new(),
            preview_file: None,
        }
    }
}

impl BrochureForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// AdminState
// ============================================================================

#[derive(Debug)]
pub struct AdminState {
    pub blogs: Vec<BlogPost>,
    pub portfolio_items: Vec<PortfolioItem>,
    pub tags: Vec<Tag>,
    pub brochures: Vec<Brochure>,

    pub blog_form: BlogForm,
    pub portfolio_form: PortfolioForm,
    pub brochure_form: BrochureForm,
    pub new_tag_name: String,

    pub active_tab: AdminTab,

    toast: Option<Toast>,
    toast_ttl: Duration,
}

impl AdminState {
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            blogs: Vec::new(),
            portfolio_items: Vec::new(),
            tags: Vec::new(),
            brochures: Vec::new(),
            blog_form: BlogForm::default(),
            portfolio_form: PortfolioForm::default(),
            brochure_form: BrochureForm::default(),
            new_tag_name: String::new(),
            active_tab: AdminTab::Blogs,
            toast: None,
            toast_ttl,
        }
    }

    /// The current toast, if one is visible. Expired toasts are hidden.
    pub fn toast(&self) -> Option<&Toast> {
        self.toast
            .as_ref()
            .filter(|t| t.shown_at.elapsed() < self.toast_ttl)
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            kind: ToastKind::Success,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            kind: ToastKind::Error,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new(TOAST_TTL)
    }
}

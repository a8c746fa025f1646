use chrono::{DateTime, Utc};

use crate::validation::{Validateable, ValidationErrors};

/// Post entity - represents a blog post.
///
/// `id` stays `None` until storage has assigned one, and goes back to `None`
/// once the post has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, validator::Validate)]
pub struct Post {
    pub id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[validate(length(
        max = 127,
        message = "Slug cannot be longer than 127 characters"
    ))]
    pub slug: Option<String>,
    #[validate(length(
        max = 255,
        message = "Title cannot be longer than 255 characters"
    ))]
    pub title: Option<String>,
    #[validate(length(
        max = 1023,
        message = "Content cannot be longer than 1023 characters"
    ))]
    pub content: Option<String>,
}

impl Post {
    /// Create a new, not yet persisted post stamped with the current time.
    pub fn new(slug: Option<String>, title: Option<String>, content: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            created_at: now,
            updated_at: now,
            slug,
            title,
            content,
        }
    }

    /// Replace the editable fields and refresh `updated_at`.
    /// `created_at` is left untouched.
    pub fn revise(
        &mut self,
        slug: Option<String>,
        title: Option<String>,
        content: Option<String>,
    ) -> &mut Self {
        self.set_updated_at(Utc::now())
            .set_slug(slug)
            .set_title(title)
            .set_content(content)
    }

    pub fn set_created_at(&mut self, created_at: DateTime<Utc>) -> &mut Self {
        self.created_at = created_at;
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) -> &mut Self {
        self.updated_at = updated_at;
        self
    }

    pub fn set_slug(&mut self, slug: Option<String>) -> &mut Self {
        self.slug = slug;
        self
    }

    pub fn set_title(&mut self, title: Option<String>) -> &mut Self {
        self.title = title;
        self
    }

    pub fn set_content(&mut self, content: Option<String>) -> &mut Self {
        self.content = content;
        self
    }

    /// Forget the storage identifier after the durable record is gone.
    pub fn detach(mut self) -> Self {
        self.id = None;
        self
    }
}

impl Validateable for Post {
    fn validate(&self) -> ValidationErrors {
        ValidationErrors::collect(
            validator::Validate::validate(self),
            &["slug", "title", "content"],
        )
    }
}

//! The post draft as entered in the composer form.
//!
//! DESIGN
//! ======
//! `PostDraft` mirrors the raw form: free text stays `String`, selects are
//! `Option<_>` until chosen, and the date is `None` until picked. Nothing here
//! enforces the form rules; that is `schema`'s job. A draft that passed the
//! schema is promoted to `ValidPost`, whose fields are no longer optional.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};
use time::Date;

// =============================================================================
// CHOICES
// =============================================================================

/// A closed set of select options with a wire value and a display label.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Every option, in the order the select lists them.
    const ALL: &'static [Self];

    /// Value used in `<option value>` and in serialized drafts.
    fn value(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Parse a wire value. Unknown or empty input means "not chosen".
    fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == raw)
    }

    /// `(value, label)` pairs for rendering a select.
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|c| (c.value(), c.label())).collect()
    }
}

/// What the post is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Promotion,
    Product,
    Tips,
    News,
    Entertainment,
    Other,
}

impl Choice for Topic {
    const ALL: &'static [Self] =
        &[Self::Promotion, Self::Product, Self::Tips, Self::News, Self::Entertainment, Self::Other];

    fn value(self) -> &'static str {
        match self {
            Self::Promotion => "promotion",
            Self::Product => "product",
            Self::Tips => "tips",
            Self::News => "news",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Promotion => "Promotion",
            Self::Product => "Product introduction",
            Self::Tips => "Tips & tricks",
            Self::News => "News",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

/// Voice the generated copy should take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Fun,
    Professional,
    Friendly,
    Sales,
    Formal,
}

impl Choice for Tone {
    const ALL: &'static [Self] = &[Self::Fun, Self::Professional, Self::Friendly, Self::Sales, Self::Formal];

    fn value(self) -> &'static str {
        match self {
            Self::Fun => "fun",
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Sales => "sales",
            Self::Formal => "formal",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Fun => "Fun",
            Self::Professional => "Professional",
            Self::Friendly => "Friendly",
            Self::Sales => "Hard sell",
            Self::Formal => "Formal",
        }
    }
}

/// Target page. Not a real platform identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fanpage {
    Page1,
    Page2,
    Page3,
}

impl Choice for Fanpage {
    const ALL: &'static [Self] = &[Self::Page1, Self::Page2, Self::Page3];

    fn value(self) -> &'static str {
        match self {
            Self::Page1 => "page1",
            Self::Page2 => "page2",
            Self::Page3 => "page3",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Page1 => "Fanpage 1",
            Self::Page2 => "Fanpage 2",
            Self::Page3 => "Fanpage 3",
        }
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Form fields, declared in on-screen order. `Ord` follows that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Topic,
    Tone,
    Content,
    Image,
    Fanpage,
    PostDate,
}

impl Field {
    pub const ALL: [Self; 7] =
        [Self::Title, Self::Topic, Self::Tone, Self::Content, Self::Image, Self::Fanpage, Self::PostDate];

    /// Form-level name, matching the serialized draft key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Topic => "topic",
            Self::Tone => "tone",
            Self::Content => "content",
            Self::Image => "image",
            Self::Fanpage => "fanpage",
            Self::PostDate => "postDate",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Post title",
            Self::Topic => "Topic",
            Self::Tone => "Tone of voice",
            Self::Content => "What should the post say?",
            Self::Image => "Illustration",
            Self::Fanpage => "Fanpage",
            Self::PostDate => "Publish date",
        }
    }
}

/// A single user edit, as emitted by one form control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEdit {
    Title(String),
    Topic(Option<Topic>),
    Tone(Option<Tone>),
    Content(String),
    Image(String),
    Fanpage(Option<Fanpage>),
    PostDate(Option<Date>),
}

impl FieldEdit {
    /// The field this edit writes to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Title(_) => Field::Title,
            Self::Topic(_) => Field::Topic,
            Self::Tone(_) => Field::Tone,
            Self::Content(_) => Field::Content,
            Self::Image(_) => Field::Image,
            Self::Fanpage(_) => Field::Fanpage,
            Self::PostDate(_) => Field::PostDate,
        }
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// In-memory record of what the user has typed so far. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub topic: Option<Topic>,
    pub tone: Option<Tone>,
    pub content: String,
    pub image: String,
    pub fanpage: Option<Fanpage>,
    pub post_date: Option<Date>,
}

impl PostDraft {
    /// Write one edit into the draft.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Title(v) => self.title = v,
            FieldEdit::Topic(v) => self.topic = v,
            FieldEdit::Tone(v) => self.tone = v,
            FieldEdit::Content(v) => self.content = v,
            FieldEdit::Image(v) => self.image = v,
            FieldEdit::Fanpage(v) => self.fanpage = v,
            FieldEdit::PostDate(v) => self.post_date = v,
        }
    }
}

/// A draft that satisfied every form rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidPost {
    pub title: String,
    pub topic: Topic,
    pub tone: Tone,
    pub content: String,
    /// Blank image input becomes `None`. The URL itself is not checked.
    pub image: Option<String>,
    pub fanpage: Fanpage,
    pub post_date: Date,
}

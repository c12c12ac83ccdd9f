use serde::{Deserialize, Serialize};

/// Number of generated hero gradients available for placeholders
pub const HERO_STYLE_COUNT: usize = 6;

/// Raw image fields as they appear in a catalog document.
///
/// Several fields may be filled at once; [`ImageRefs::resolve`] picks the
/// authoritative one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageRefs {
    #[serde(default)]
    pub image_style_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

/// The one image representation a view should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyImages {
    /// Generated gradient art, index already wrapped into the palette
    Placeholder(usize),
    Local(String),
    Gallery(Vec<String>),
    Remote(Vec<String>),
}

impl ImageRefs {
    pub fn placeholder(style: usize) -> Self {
        Self {
            image_style_index: style,
            ..Self::default()
        }
    }

    /// Remote URLs win over local galleries, which win over a single local
    /// asset. Empty lists never win.
    pub fn resolve(&self) -> PropertyImages {
        if let Some(urls) = self.image_urls.as_ref().filter(|urls| !urls.is_empty()) {
            return PropertyImages::Remote(urls.clone());
        }
        if let Some(names) = self.image_names.as_ref().filter(|names| !names.is_empty()) {
            return PropertyImages::Gallery(names.clone());
        }
        if let Some(name) = &self.image_name {
            return PropertyImages::Local(name.clone());
        }
        PropertyImages::Placeholder(self.image_style_index % HERO_STYLE_COUNT)
    }
}

impl PropertyImages {
    /// First image reference, `None` for placeholders
    pub fn primary(&self) -> Option<&str> {
        match self {
            PropertyImages::Placeholder(_) => None,
            PropertyImages::Local(name) => Some(name),
            PropertyImages::Gallery(names) => names.first().map(String::as_str),
            PropertyImages::Remote(urls) => urls.first().map(String::as_str),
        }
    }

    /// How many pages a detail carousel shows
    pub fn count(&self) -> usize {
        match self {
            PropertyImages::Placeholder(_) | PropertyImages::Local(_) => 1,
            PropertyImages::Gallery(items) | PropertyImages::Remote(items) => items.len(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, PropertyImages::Remote(_))
    }
}

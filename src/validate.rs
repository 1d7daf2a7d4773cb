//! Form-level checks run before a record is allowed into a store.
//! Checks run in a fixed order and stop at the first missing field, so the operator is
//! always told about the topmost empty input first.

use crate::{Category, Item, MissingField};

/// Field values as entered in the category form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    /// Logical image path; `None` until the operator picks an image.
    pub image: Option<String>,
}

/// Field values as entered in the item form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub picture: Option<String>,
    pub description: String,
    pub price: String,
    /// Selected entry of the category picker.
    pub category: Option<String>,
}

fn present(text: &str) -> bool {
    !text.is_empty()
}

fn bound(path: Option<&str>) -> bool {
    path.is_some_and(present)
}

impl CategoryDraft {
    /// Order: name, image.
    pub fn validate(&self) -> Result<Category, MissingField> {
        if !present(&self.name) {
            return Err(MissingField::Name);
        }
        if !bound(self.image.as_deref()) {
            return Err(MissingField::Image);
        }
        Ok(Category {
            name: self.name.clone(),
            image: self.image.clone().unwrap_or_default(),
        })
    }
}

impl ItemDraft {
    /// Order: name, image, description, price, category. The category must be one of
    /// `known_categories` (the names of the currently loaded category list).
    ///
    /// The returned item has `id == 0`; the store assigns the real id on append.
    pub fn validate(&self, known_categories: &[&str]) -> Result<Item, MissingField> {
        if !present(&self.name) {
            return Err(MissingField::Name);
        }
        if !bound(self.picture.as_deref()) {
            return Err(MissingField::Image);
        }
        if !present(&self.description) {
            return Err(MissingField::Description);
        }
        if !present(&self.price) {
            return Err(MissingField::Price);
        }
        let category = match self.category.as_deref() {
            Some(c) if present(c) && known_categories.contains(&c) => c,
            _ => return Err(MissingField::Category),
        };
        Ok(Item {
            id: 0,
            name: self.name.clone(),
            picture: self.picture.clone().unwrap_or_default(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: category.to_string(),
        })
    }
}

//! UI-agnostic controller for one editing session.
//!
//! The session owns both catalogs, the two form drafts and the policy config. Every
//! operator action is a method that runs to completion and returns either a success
//! [`Notice`] or a [`StoreError`]; [`Notice::from`] turns the latter into something the
//! message surface can show. Failed actions leave the session in its previous state.

use crate::{
    AdminConfig, Category, CategoryDraft, Item, ItemDraft, MissingField, Persistence,
    Record, RecordStore, StoreError, image, statics,
};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A titled message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn info(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title,
            message: message.into(),
        }
    }

    pub fn warning(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title,
            message: message.into(),
        }
    }

    pub fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title,
            message: message.into(),
        }
    }
}

impl From<&StoreError> for Notice {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::Load { .. } => {
                Notice::error(statics::EN_TITLE_LOAD_ERROR, err.to_string())
            }
            StoreError::Save { .. } => {
                Notice::error(statics::EN_TITLE_SAVE_ERROR, err.to_string())
            }
            StoreError::Validation(field) => {
                let (title, message) = missing_field_text(*field);
                Notice::warning(title, message)
            }
            StoreError::NotFound { .. } => {
                Notice::warning(statics::EN_TITLE_NOT_FOUND, err.to_string())
            }
            StoreError::IdExhausted { .. } => {
                Notice::error(statics::EN_TITLE_ID_EXHAUSTED, err.to_string())
            }
            StoreError::NoFileBound { kind } => Notice::warning(
                statics::EN_TITLE_NO_FILE,
                format!("Load the {kind} JSON file first."),
            ),
        }
    }
}

fn missing_field_text(field: MissingField) -> (&'static str, &'static str) {
    match field {
        MissingField::Name => (statics::EN_TITLE_MISSING_NAME, statics::EN_MSG_ENTER_NAME),
        MissingField::Image => (statics::EN_TITLE_MISSING_IMAGE, statics::EN_MSG_PICK_IMAGE),
        MissingField::Description => (
            statics::EN_TITLE_MISSING_DESCRIPTION,
            statics::EN_MSG_ENTER_DESCRIPTION,
        ),
        MissingField::Price => (statics::EN_TITLE_MISSING_PRICE, statics::EN_MSG_ENTER_PRICE),
        MissingField::Category => (
            statics::EN_TITLE_MISSING_CATEGORY,
            statics::EN_MSG_PICK_CATEGORY,
        ),
    }
}

/// Success notice for a mutation, downgraded to a warning when nothing was written.
fn mutation_notice<T: Record>(
    title: &'static str,
    message: String,
    persisted: &Persistence,
) -> Notice {
    match persisted {
        Persistence::Written(_) => Notice::info(title, message),
        Persistence::Unbound => {
            tracing::warn!(kind = T::KIND, "change kept in memory only, no file bound");
            Notice::warning(
                statics::EN_TITLE_NO_FILE,
                format!("{message} Load the {} JSON file first to keep it.", T::KIND),
            )
        }
    }
}

fn no_selection(message: &'static str) -> Notice {
    Notice::warning(statics::EN_TITLE_NO_SELECTION, message)
}

/// Which catalog an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Categories,
    Items,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: AdminConfig,
    categories: RecordStore<Category>,
    items: RecordStore<Item>,
    pub category_form: CategoryDraft,
    pub item_form: ItemDraft,
}

impl Session {
    pub fn new(config: AdminConfig) -> Self {
        Self {
            categories: RecordStore::new(&config),
            items: RecordStore::new(&config),
            category_form: CategoryDraft::default(),
            item_form: ItemDraft::default(),
            config,
        }
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    pub fn categories(&self) -> &RecordStore<Category> {
        &self.categories
    }

    pub fn items(&self) -> &RecordStore<Item> {
        &self.items
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.display_names()
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items.display_names()
    }

    /// Replace the category list with the contents of `path`.
    pub fn open_categories(&mut self, path: &Path) -> Result<Notice, StoreError> {
        let count = self.categories.load(path)?;
        Ok(Self::loaded_notice(path, count))
    }

    /// Replace the item list with the contents of `path`.
    pub fn open_items(&mut self, path: &Path) -> Result<Notice, StoreError> {
        let count = self.items.load(path)?;
        Ok(Self::loaded_notice(path, count))
    }

    fn loaded_notice(path: &Path, count: usize) -> Notice {
        Notice::info(
            statics::EN_TITLE_LOADED,
            format!("Loaded {count} records from {}", path.display()),
        )
    }

    /// Write a catalog to a new file and bind it.
    pub fn save_as(&mut self, catalog: Catalog, path: &Path) -> Result<Notice, StoreError> {
        match catalog {
            Catalog::Categories => self.categories.save_as(path)?,
            Catalog::Items => self.items.save_as(path)?,
        };
        Ok(Notice::info(
            statics::EN_TITLE_SAVED,
            format!("Saved {}", path.display()),
        ))
    }

    /// Resolve a picked image file into the form's logical image reference.
    ///
    /// The file must decode as an image. A file that does not is reported with an
    /// error notice and the form keeps whatever reference it had before.
    pub fn pick_image(&mut self, catalog: Catalog, picked: &Path) -> Notice {
        let picked_text = picked.to_string_lossy();
        let Some(reference) = image::resolve(&picked_text) else {
            return Notice::warning(statics::EN_TITLE_IMAGE, statics::EN_MSG_NO_IMAGE_NAME);
        };
        let (width, height) = match image::check_decodes(picked) {
            Ok(size) => size,
            Err(e) => {
                tracing::warn!(picked = %picked.display(), "image rejected: {e:#}");
                return Notice::error(
                    statics::EN_TITLE_IMAGE_ERROR,
                    format!("{}: {e:#}", statics::EN_MSG_IMAGE_UNREADABLE),
                );
            }
        };
        tracing::debug!(picked = %picked.display(), %reference, width, height, "image picked");
        let notice = Notice::info(statics::EN_TITLE_IMAGE, reference.clone());
        match catalog {
            Catalog::Categories => self.category_form.image = Some(reference),
            Catalog::Items => self.item_form.picture = Some(reference),
        }
        notice
    }

    pub fn add_category(&mut self) -> Result<Notice, StoreError> {
        let category = self.category_form.validate()?;
        let (added, persisted) = self.categories.append(category)?;
        self.category_form = CategoryDraft::default();
        Ok(mutation_notice::<Category>(
            statics::EN_TITLE_ADDED,
            format!("Category {:?} added.", added.name),
            &persisted,
        ))
    }

    /// Overwrite the category named `selected` with the form's values.
    pub fn update_category(&mut self, selected: Option<&str>) -> Result<Notice, StoreError> {
        let Some(key) = selected else {
            return Ok(no_selection(statics::EN_MSG_SELECT_TO_UPDATE));
        };
        let category = self.category_form.validate()?;
        let name = category.name.clone();
        let persisted = self.categories.update_by_key(key, category)?;
        self.category_form = CategoryDraft::default();
        Ok(mutation_notice::<Category>(
            statics::EN_TITLE_UPDATED,
            format!("Category {name:?} updated."),
            &persisted,
        ))
    }

    /// Delete categories named `selected`. Items that reference it are left alone.
    pub fn delete_category(&mut self, selected: Option<&str>) -> Result<Notice, StoreError> {
        let Some(key) = selected else {
            return Ok(no_selection(statics::EN_MSG_SELECT_TO_DELETE));
        };
        let (removed, persisted) = self.categories.remove_by_key(key)?;
        Ok(mutation_notice::<Category>(
            statics::EN_TITLE_DELETED,
            format!("Removed {removed} category record(s) named {key:?}."),
            &persisted,
        ))
    }

    /// Copy the category named `selected` into the form for editing.
    pub fn edit_category(&mut self, selected: Option<&str>) -> Result<Notice, StoreError> {
        let Some(key) = selected else {
            return Ok(no_selection(statics::EN_MSG_SELECT_TO_EDIT));
        };
        let category = self.categories.find(key).ok_or_else(|| StoreError::NotFound {
            kind: Category::KIND,
            key: key.to_string(),
        })?;
        self.category_form = CategoryDraft {
            name: category.name.clone(),
            image: Some(category.image.clone()).filter(|i| !i.is_empty()),
        };
        Ok(Notice::info(statics::EN_TITLE_LOADED, format!("Editing {key:?}")))
    }

    pub fn add_item(&mut self) -> Result<Notice, StoreError> {
        let item = self.item_form.validate(&self.categories.display_names())?;
        let (added, persisted) = self.items.append(item)?;
        self.clear_item_form();
        Ok(mutation_notice::<Item>(
            statics::EN_TITLE_ADDED,
            format!("Item {:?} added with id {}.", added.name, added.id),
            &persisted,
        ))
    }

    /// Overwrite the first item named `selected`; its id is kept.
    pub fn update_item(&mut self, selected: Option<&str>) -> Result<Notice, StoreError> {
        let Some(key) = selected else {
            return Ok(no_selection(statics::EN_MSG_SELECT_TO_UPDATE));
        };
        let item = self.item_form.validate(&self.categories.display_names())?;
        let name = item.name.clone();
        let persisted = self.items.update_by_key(key, item)?;
        self.clear_item_form();
        Ok(mutation_notice::<Item>(
            statics::EN_TITLE_UPDATED,
            format!("Item {name:?} updated."),
            &persisted,
        ))
    }

    pub fn delete_item(&mut self, selected: Option<&str>) -> Result<Notice, StoreError> {
        let Some(key) = selected else {
            return Ok(no_selection(statics::EN_MSG_SELECT_TO_DELETE));
        };
        let (removed, persisted) = self.items.remove_by_key(key)?;
        Ok(mutation_notice::<Item>(
            statics::EN_TITLE_DELETED,
            format!("Removed {removed} item record(s) named {key:?}."),
            &persisted,
        ))
    }

    pub fn edit_item(&mut self, selected: Option<&str>) -> Result<Notice, StoreError> {
        let Some(key) = selected else {
            return Ok(no_selection(statics::EN_MSG_SELECT_TO_EDIT));
        };
        let item = self.items.find(key).ok_or_else(|| StoreError::NotFound {
            kind: Item::KIND,
            key: key.to_string(),
        })?;
        self.item_form = ItemDraft {
            name: item.name.clone(),
            picture: Some(item.picture.clone()).filter(|p| !p.is_empty()),
            description: item.description.clone(),
            price: item.price.clone(),
            category: Some(item.category.clone()).filter(|c| !c.is_empty()),
        };
        Ok(Notice::info(statics::EN_TITLE_LOADED, format!("Editing {key:?}")))
    }

    /// Reset the item form. The category picker keeps its selection so consecutive
    /// items can share a category.
    pub fn clear_item_form(&mut self) {
        let category = self.item_form.category.take();
        self.item_form = ItemDraft {
            category,
            ..Default::default()
        };
    }

    pub fn clear_category_form(&mut self) {
        self.category_form = CategoryDraft::default();
    }
}

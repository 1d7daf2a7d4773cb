//! Core library for Catalog Admin.
//! Maintains two JSON-backed catalogs (categories and items): load a file, edit its
//! records through validated forms, and rewrite the file after every change.

mod codec;
mod config;
mod error;
mod gui;
mod image;
mod record;
pub mod session;
pub mod statics;
mod store;
mod validate;

pub use codec::{decode, encode};
pub use config::{AdminConfig, ConfigError, DeletePolicy, UnboundPolicy};
pub use error::{MissingField, StoreError};
pub use gui::run_gui;
pub use image::{check_decodes as check_image, resolve as resolve_image};
pub use record::{Category, Item, Record};
pub use session::{Catalog, Notice, NoticeLevel, Session};
pub use store::{Persistence, RecordStore, save_records};
pub use validate::{CategoryDraft, ItemDraft};

// Operator-facing text, dialog filters and the image reference root.
// gui.rs and session.rs refer to these by name; nothing here is computed.

// Logical root that image references are stored under.
pub const IMAGE_LOGICAL_ROOT: &str = "/images/";

// File dialog filters.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
pub const JSON_EXTENSIONS: &[&str] = &["json"];

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "Catalog Admin";

pub const EN_FILTER_JSON: &str = "JSON files";
pub const EN_FILTER_IMAGES: &str = "Image files";
pub const EN_FILTER_ALL: &str = "All files";

pub const EN_DIALOG_PICK_CATEGORIES: &str = "Select a category JSON file";
pub const EN_DIALOG_PICK_ITEMS: &str = "Select an item JSON file";
pub const EN_DIALOG_PICK_IMAGE: &str = "Select an image file";
pub const EN_DIALOG_SAVE_AS: &str = "Save catalog as";

pub const EN_TAB_CATEGORIES: &str = "Categories";
pub const EN_TAB_ITEMS: &str = "Items";

pub const EN_BTN_OPEN: &str = "Open...";
pub const EN_BTN_SAVE_AS: &str = "Save As...";
pub const EN_BTN_PICK_IMAGE: &str = "Image...";
pub const EN_BTN_ADD: &str = "Add";
pub const EN_BTN_UPDATE: &str = "Update selected";
pub const EN_BTN_DELETE: &str = "Delete selected";
pub const EN_BTN_EDIT: &str = "Edit selected";
pub const EN_BTN_CLEAR_FORM: &str = "Clear form";
pub const EN_BTN_CLEAR: &str = "Clear";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";

pub const EN_HEADING_LIST: &str = "Records";
pub const EN_HEADING_FORM: &str = "Form";

pub const EN_LABEL_FILE: &str = "File:";
pub const EN_LABEL_NO_FILE: &str = "(no file loaded)";
pub const EN_LABEL_NAME: &str = "Name:";
pub const EN_LABEL_IMAGE: &str = "Image:";
pub const EN_LABEL_NO_IMAGE: &str = "(none)";
pub const EN_LABEL_DESCRIPTION: &str = "Description:";
pub const EN_LABEL_PRICE: &str = "Price:";
pub const EN_LABEL_CATEGORY: &str = "Category:";
pub const EN_LABEL_NO_CATEGORY: &str = "(select)";

pub const EN_COL_ID: &str = "ID";
pub const EN_COL_NAME: &str = "Name";
pub const EN_COL_PRICE: &str = "Price";
pub const EN_COL_CATEGORY: &str = "Category";
pub const EN_COL_IMAGE: &str = "Image";

pub const EN_LIST_EMPTY: &str = "No records.";

// Notice titles.
pub const EN_TITLE_LOAD_ERROR: &str = "Load Error";
pub const EN_TITLE_SAVE_ERROR: &str = "Save Error";
pub const EN_TITLE_MISSING_NAME: &str = "Missing Name";
pub const EN_TITLE_MISSING_IMAGE: &str = "Missing Image";
pub const EN_TITLE_MISSING_DESCRIPTION: &str = "Missing Description";
pub const EN_TITLE_MISSING_PRICE: &str = "Missing Price";
pub const EN_TITLE_MISSING_CATEGORY: &str = "Missing Category";
pub const EN_TITLE_NOT_FOUND: &str = "Not Found";
pub const EN_TITLE_NO_FILE: &str = "No File Loaded";
pub const EN_TITLE_NO_SELECTION: &str = "No Selection";
pub const EN_TITLE_IMAGE: &str = "Image";
pub const EN_TITLE_IMAGE_ERROR: &str = "Image Display Error";
pub const EN_TITLE_ID_EXHAUSTED: &str = "No Ids Left";
pub const EN_TITLE_LOADED: &str = "Loaded";
pub const EN_TITLE_SAVED: &str = "Saved";
pub const EN_TITLE_ADDED: &str = "Added";
pub const EN_TITLE_UPDATED: &str = "Updated";
pub const EN_TITLE_DELETED: &str = "Deleted";

// Notice bodies.
pub const EN_MSG_ENTER_NAME: &str = "Please enter a name.";
pub const EN_MSG_PICK_IMAGE: &str = "Please select an image file first.";
pub const EN_MSG_ENTER_DESCRIPTION: &str = "Please enter a description.";
pub const EN_MSG_ENTER_PRICE: &str = "Please enter a price.";
pub const EN_MSG_PICK_CATEGORY: &str = "Please select a category from the loaded category list.";
pub const EN_MSG_SELECT_TO_DELETE: &str = "Please select a record to delete.";
pub const EN_MSG_SELECT_TO_UPDATE: &str = "Please select a record to update.";
pub const EN_MSG_SELECT_TO_EDIT: &str = "Please select a record to edit.";
pub const EN_MSG_NO_IMAGE_NAME: &str = "The selected path has no file name.";
pub const EN_MSG_IMAGE_UNREADABLE: &str = "The selected file could not be read as an image";

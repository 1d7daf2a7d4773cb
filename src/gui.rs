use crate::session::{Catalog, Notice, NoticeLevel, Session};
use crate::{AdminConfig, StoreError, statics};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::path::{Path, PathBuf};

pub fn run_gui(config: AdminConfig) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(AdminApp::new(config)))
        }),
    )
}

const PREVIEW_MAX_SIZE: [f32; 2] = [240.0, 160.0];

/// The local file behind a form's image reference, kept only for display.
#[derive(Debug, Clone)]
struct Preview {
    reference: String,
    path: PathBuf,
}

/// The main application state and GUI logic.
/// Owns the Session (catalog data + form drafts) and the purely visual state:
/// active tab, list selections, image previews, and the last message shown to the
/// operator.
struct AdminApp {
    session: Session,
    tab: Catalog,
    dialog_dir: Option<PathBuf>,
    selected_category: Option<String>,
    selected_item: Option<String>,
    category_preview: Option<Preview>,
    item_preview: Option<Preview>,
    status: String,
    last_notice: Option<Notice>,
    theme_dark: bool,
}

impl AdminApp {
    fn new(config: AdminConfig) -> Self {
        let session = Session::new(config);
        Self {
            dialog_dir: session.config().dialog_dir.clone(),
            session,
            tab: Catalog::Categories,
            selected_category: None,
            selected_item: None,
            category_preview: None,
            item_preview: None,
            status: String::new(),
            last_notice: None,
            theme_dark: true,
        }
    }

    /// Route an action result to the message surface: info goes to the status line,
    /// warnings and errors to the notice bar.
    fn report(&mut self, result: Result<Notice, StoreError>) {
        let notice = result.unwrap_or_else(|e| Notice::from(&e));
        match notice.level {
            NoticeLevel::Info => {
                self.status = format!("{}: {}", notice.title, notice.message);
                self.last_notice = None;
            }
            NoticeLevel::Warning | NoticeLevel::Error => {
                self.last_notice = Some(notice);
            }
        }
    }

    fn file_dialog(&self, title: &str) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new().set_title(title);
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn json_dialog(&self, title: &str) -> rfd::FileDialog {
        self.file_dialog(title)
            .add_filter(statics::EN_FILTER_JSON, statics::JSON_EXTENSIONS)
            .add_filter(statics::EN_FILTER_ALL, &["*"])
    }

    fn remember_dir(&mut self, path: &Path) {
        self.dialog_dir = path.parent().map(PathBuf::from);
    }

    fn open_catalog(&mut self, catalog: Catalog) {
        let title = match catalog {
            Catalog::Categories => statics::EN_DIALOG_PICK_CATEGORIES,
            Catalog::Items => statics::EN_DIALOG_PICK_ITEMS,
        };
        let Some(path) = self.json_dialog(title).pick_file() else {
            return;
        };
        self.remember_dir(&path);

        let result = match catalog {
            Catalog::Categories => self.session.open_categories(&path),
            Catalog::Items => self.session.open_items(&path),
        };
        if result.is_ok() {
            self.refresh_selections(catalog);
        }
        self.report(result);
    }

    fn save_catalog_as(&mut self, catalog: Catalog) {
        let mut dlg = self.json_dialog(statics::EN_DIALOG_SAVE_AS);
        let current = match catalog {
            Catalog::Categories => self.session.categories().path(),
            Catalog::Items => self.session.items().path(),
        };
        if let Some(file_name) = current.and_then(Path::file_name) {
            dlg = dlg.set_file_name(file_name.to_string_lossy());
        }
        let Some(path) = dlg.save_file() else {
            return;
        };
        self.remember_dir(&path);
        let result = self.session.save_as(catalog, &path);
        self.report(result);
    }

    fn pick_image(&mut self, catalog: Catalog) {
        let Some(path) = self
            .file_dialog(statics::EN_DIALOG_PICK_IMAGE)
            .add_filter(statics::EN_FILTER_IMAGES, statics::IMAGE_EXTENSIONS)
            .add_filter(statics::EN_FILTER_ALL, &["*"])
            .pick_file()
        else {
            return;
        };
        self.bind_image(catalog, path);
    }

    /// Hand a picked file to the session and, when it was accepted, remember it for
    /// the preview.
    fn bind_image(&mut self, catalog: Catalog, path: PathBuf) {
        let notice = self.session.pick_image(catalog, &path);
        if notice.level == NoticeLevel::Info {
            let preview = self.form_image(catalog).map(|reference| Preview {
                reference: reference.to_string(),
                path,
            });
            match catalog {
                Catalog::Categories => self.category_preview = preview,
                Catalog::Items => self.item_preview = preview,
            }
        }
        self.report(Ok(notice));
    }

    fn form_image(&self, catalog: Catalog) -> Option<&str> {
        match catalog {
            Catalog::Categories => self.session.category_form.image.as_deref(),
            Catalog::Items => self.session.item_form.picture.as_deref(),
        }
    }

    /// The picked file for the form's current reference. A reference that came from a
    /// record or was cleared has no preview.
    fn preview_path(&self, catalog: Catalog) -> Option<&Path> {
        let preview = match catalog {
            Catalog::Categories => self.category_preview.as_ref(),
            Catalog::Items => self.item_preview.as_ref(),
        }?;
        (self.form_image(catalog) == Some(preview.reference.as_str()))
            .then_some(preview.path.as_path())
    }

    /// After the lists change, select the first entry (or clear a stale selection)
    /// and keep the item form's category pointing at a loaded category.
    fn refresh_selections(&mut self, catalog: Catalog) {
        let names: Vec<String> = match catalog {
            Catalog::Categories => self.session.category_names(),
            Catalog::Items => self.session.item_names(),
        }
        .into_iter()
        .map(String::from)
        .collect();

        let selected = match catalog {
            Catalog::Categories => &mut self.selected_category,
            Catalog::Items => &mut self.selected_item,
        };
        if !selected.as_ref().is_some_and(|s| names.contains(s)) {
            *selected = names.first().cloned();
        }

        if catalog == Catalog::Categories {
            let form_category = &mut self.session.item_form.category;
            if !form_category.as_ref().is_some_and(|c| names.contains(c)) {
                *form_category = names.first().cloned();
            }
        }
    }

    fn render_file_row(ui: &mut egui::Ui, path: Option<&Path>) {
        ui.horizontal(|ui| {
            ui.label(statics::EN_LABEL_FILE);
            match path {
                Some(p) => ui.monospace(p.display().to_string()),
                None => ui.weak(statics::EN_LABEL_NO_FILE),
            };
        });
    }

    fn render_category_list(&mut self, ui: &mut egui::Ui) {
        ui.heading(statics::EN_HEADING_LIST);
        Self::render_file_row(ui, self.session.categories().path());
        ui.separator();

        let rows: Vec<(String, String)> = self
            .session
            .categories()
            .records()
            .iter()
            .map(|c| (c.name.clone(), c.image.clone()))
            .collect();
        if rows.is_empty() {
            ui.label(statics::EN_LIST_EMPTY);
            return;
        }

        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
        let mut clicked = None;
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(180.0).resizable(true))
            .column(Column::remainder())
            .header(row_h, |mut header| {
                header.col(|ui| {
                    ui.strong(statics::EN_COL_NAME);
                });
                header.col(|ui| {
                    ui.strong(statics::EN_COL_IMAGE);
                });
            })
            .body(|mut body| {
                for (name, image) in &rows {
                    body.row(row_h, |mut row| {
                        let selected = self.selected_category.as_deref() == Some(name.as_str());
                        row.col(|ui| {
                            if ui.selectable_label(selected, name.as_str()).clicked() {
                                clicked = Some(name.clone());
                            }
                        });
                        row.col(|ui| {
                            ui.monospace(image.as_str());
                        });
                    });
                }
            });
        if clicked.is_some() {
            self.selected_category = clicked;
        }
    }

    fn render_item_list(&mut self, ui: &mut egui::Ui) {
        ui.heading(statics::EN_HEADING_LIST);
        Self::render_file_row(ui, self.session.items().path());
        ui.separator();

        let rows: Vec<(i64, String, String, String)> = self
            .session
            .items()
            .records()
            .iter()
            .map(|i| (i.id, i.name.clone(), i.price.clone(), i.category.clone()))
            .collect();
        if rows.is_empty() {
            ui.label(statics::EN_LIST_EMPTY);
            return;
        }

        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
        let mut clicked = None;
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto())
            .column(Column::initial(160.0).resizable(true))
            .column(Column::initial(80.0).resizable(true))
            .column(Column::remainder())
            .header(row_h, |mut header| {
                for col in [
                    statics::EN_COL_ID,
                    statics::EN_COL_NAME,
                    statics::EN_COL_PRICE,
                    statics::EN_COL_CATEGORY,
                ] {
                    header.col(|ui| {
                        ui.strong(col);
                    });
                }
            })
            .body(|mut body| {
                for (id, name, price, category) in &rows {
                    body.row(row_h, |mut row| {
                        let selected = self.selected_item.as_deref() == Some(name.as_str());
                        row.col(|ui| {
                            ui.monospace(id.to_string());
                        });
                        row.col(|ui| {
                            if ui.selectable_label(selected, name.as_str()).clicked() {
                                clicked = Some(name.clone());
                            }
                        });
                        row.col(|ui| {
                            ui.label(price.as_str());
                        });
                        row.col(|ui| {
                            ui.label(category.as_str());
                        });
                    });
                }
            });
        if clicked.is_some() {
            self.selected_item = clicked;
        }
    }

    fn render_image_row(&mut self, ui: &mut egui::Ui, catalog: Catalog) {
        ui.label(statics::EN_LABEL_IMAGE);
        ui.horizontal(|ui| {
            if ui.button(statics::EN_BTN_PICK_IMAGE).clicked() {
                self.pick_image(catalog);
            }
            match self.form_image(catalog) {
                Some(reference) => ui.monospace(reference),
                None => ui.weak(statics::EN_LABEL_NO_IMAGE),
            };
        });
        ui.end_row();

        if let Some(path) = self.preview_path(catalog) {
            let uri = format!("file://{}", path.display());
            ui.label("");
            ui.add(
                egui::Image::from_uri(uri)
                    .max_width(PREVIEW_MAX_SIZE[0])
                    .max_height(PREVIEW_MAX_SIZE[1]),
            );
            ui.end_row();
        }
    }

    fn render_category_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(statics::EN_HEADING_FORM);
        ui.separator();

        egui::Grid::new("category_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(statics::EN_LABEL_NAME);
                ui.text_edit_singleline(&mut self.session.category_form.name);
                ui.end_row();
                self.render_image_row(ui, Catalog::Categories);
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(statics::EN_BTN_ADD).clicked() {
                let result = self.session.add_category();
                self.after_mutation(Catalog::Categories, result);
            }
            if ui.button(statics::EN_BTN_UPDATE).clicked() {
                let selected = self.selected_category.clone();
                let result = self.session.update_category(selected.as_deref());
                self.after_mutation(Catalog::Categories, result);
            }
            if ui.button(statics::EN_BTN_DELETE).clicked() {
                let selected = self.selected_category.clone();
                let result = self.session.delete_category(selected.as_deref());
                self.after_mutation(Catalog::Categories, result);
            }
            if ui.button(statics::EN_BTN_EDIT).clicked() {
                let selected = self.selected_category.clone();
                let result = self.session.edit_category(selected.as_deref());
                self.report(result);
            }
            if ui.button(statics::EN_BTN_CLEAR_FORM).clicked() {
                self.session.clear_category_form();
            }
        });
    }

    fn render_item_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(statics::EN_HEADING_FORM);
        ui.separator();

        let category_names: Vec<String> = self
            .session
            .category_names()
            .into_iter()
            .map(String::from)
            .collect();

        egui::Grid::new("item_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(statics::EN_LABEL_NAME);
                ui.text_edit_singleline(&mut self.session.item_form.name);
                ui.end_row();

                self.render_image_row(ui, Catalog::Items);

                ui.label(statics::EN_LABEL_DESCRIPTION);
                ui.text_edit_multiline(&mut self.session.item_form.description);
                ui.end_row();

                ui.label(statics::EN_LABEL_PRICE);
                ui.text_edit_singleline(&mut self.session.item_form.price);
                ui.end_row();

                ui.label(statics::EN_LABEL_CATEGORY);
                let form_category = &mut self.session.item_form.category;
                let selected_text = form_category
                    .clone()
                    .unwrap_or_else(|| statics::EN_LABEL_NO_CATEGORY.to_string());
                egui::ComboBox::from_id_salt("item_category")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for name in &category_names {
                            ui.selectable_value(form_category, Some(name.clone()), name.as_str());
                        }
                    });
                ui.end_row();
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(statics::EN_BTN_ADD).clicked() {
                let result = self.session.add_item();
                self.after_mutation(Catalog::Items, result);
            }
            if ui.button(statics::EN_BTN_UPDATE).clicked() {
                let selected = self.selected_item.clone();
                let result = self.session.update_item(selected.as_deref());
                self.after_mutation(Catalog::Items, result);
            }
            if ui.button(statics::EN_BTN_DELETE).clicked() {
                let selected = self.selected_item.clone();
                let result = self.session.delete_item(selected.as_deref());
                self.after_mutation(Catalog::Items, result);
            }
            if ui.button(statics::EN_BTN_EDIT).clicked() {
                let selected = self.selected_item.clone();
                let result = self.session.edit_item(selected.as_deref());
                self.report(result);
            }
            if ui.button(statics::EN_BTN_CLEAR_FORM).clicked() {
                self.session.clear_item_form();
            }
        });
    }

    fn after_mutation(&mut self, catalog: Catalog, result: Result<Notice, StoreError>) {
        self.refresh_selections(catalog);
        self.report(result);
    }
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.selectable_value(
                    &mut self.tab,
                    Catalog::Categories,
                    statics::EN_TAB_CATEGORIES,
                );
                ui.selectable_value(&mut self.tab, Catalog::Items, statics::EN_TAB_ITEMS);

                ui.separator();
                if ui.button(statics::EN_BTN_OPEN).clicked() {
                    self.open_catalog(self.tab);
                }
                if ui.button(statics::EN_BTN_SAVE_AS).clicked() {
                    self.save_catalog_as(self.tab);
                }

                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        if let Some(notice) = self.last_notice.clone() {
            egui::TopBottomPanel::top("notice_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let color = match notice.level {
                        NoticeLevel::Error => egui::Color32::RED,
                        _ => egui::Color32::YELLOW,
                    };
                    ui.colored_label(color, format!("{}: {}", notice.title, notice.message));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                            self.last_notice = None;
                        }
                    });
                });
            });
        }

        egui::SidePanel::left("list_panel")
            .resizable(true)
            .default_width(460.0)
            .show(ctx, |ui| match self.tab {
                Catalog::Categories => self.render_category_list(ui),
                Catalog::Items => self.render_item_list(ui),
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Catalog::Categories => self.render_category_form(ui),
            Catalog::Items => self.render_item_form(ui),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::AdminApp;
    use crate::session::{Catalog, NoticeLevel};
    use crate::{AdminConfig, statics};
    use std::path::{Path, PathBuf};

    fn app() -> AdminApp {
        AdminApp::new(AdminConfig::default())
    }

    #[test]
    fn info_goes_to_status_and_clears_notice_bar() {
        let mut app = app();
        app.report(Err(crate::StoreError::NoFileBound { kind: "item" }));
        assert!(app.last_notice.is_some());

        app.report(Ok(crate::Notice::info(statics::EN_TITLE_SAVED, "ok")));
        assert!(app.last_notice.is_none());
        assert_eq!(app.status, "Saved: ok");
    }

    #[test]
    fn warnings_keep_the_status_line() {
        let mut app = app();
        app.status = "Loaded: 3".to_string();
        let result = app.session.delete_category(None);
        app.report(result);
        assert_eq!(app.status, "Loaded: 3");
        let notice = app.last_notice.expect("notice");
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn adding_a_category_selects_it_and_feeds_item_picker() {
        let mut app = app();
        app.session.category_form.name = "Bugs".to_string();
        app.session.category_form.image = Some("/images/bugs.png".to_string());
        let result = app.session.add_category();
        app.after_mutation(Catalog::Categories, result);
        assert_eq!(app.selected_category.as_deref(), Some("Bugs"));
        assert_eq!(app.session.item_form.category.as_deref(), Some("Bugs"));
    }

    #[test]
    fn deleting_selected_category_moves_selection() {
        let mut app = app();
        for name in ["Bugs", "Moths"] {
            app.session.category_form.name = name.to_string();
            app.session.category_form.image = Some(format!("/images/{name}.png"));
            let result = app.session.add_category();
            app.after_mutation(Catalog::Categories, result);
        }
        let selected = app.selected_category.clone();
        let result = app.session.delete_category(selected.as_deref());
        app.after_mutation(Catalog::Categories, result);
        assert_eq!(app.selected_category.as_deref(), Some("Moths"));
    }

    #[test]
    fn dialogs_start_in_the_configured_directory() {
        let app = AdminApp::new(AdminConfig {
            dialog_dir: Some(PathBuf::from("/srv/catalogs")),
            ..Default::default()
        });
        assert_eq!(app.dialog_dir.as_deref(), Some(Path::new("/srv/catalogs")));
    }

    #[test]
    fn accepted_image_gets_a_preview_until_the_form_moves_on() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("ant.png");
        ::image::RgbImage::new(2, 2).save(&path)?;

        let mut app = app();
        app.bind_image(Catalog::Items, path.clone());
        assert_eq!(app.preview_path(Catalog::Items), Some(path.as_path()));
        assert_eq!(app.preview_path(Catalog::Categories), None);

        app.session.clear_item_form();
        assert_eq!(app.preview_path(Catalog::Items), None);
        Ok(())
    }

    #[test]
    fn rejected_image_has_no_preview() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("ant.png");
        std::fs::write(&path, "plain text")?;

        let mut app = app();
        app.bind_image(Catalog::Categories, path);
        assert_eq!(app.preview_path(Catalog::Categories), None);
        let notice = app.last_notice.expect("notice");
        assert_eq!(notice.title, statics::EN_TITLE_IMAGE_ERROR);
        Ok(())
    }
}

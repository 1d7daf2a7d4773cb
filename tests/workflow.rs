use catalog_admin::{
    AdminConfig, Catalog, DeletePolicy, MissingField, Notice, NoticeLevel, Session, StoreError,
    statics,
};
use pretty_assertions::assert_eq;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Fill the item form, picking a real PNG written into `pics`.
fn fill_item(session: &mut Session, pics: &Path, name: &str, category: &str) {
    let picture = pics.join(format!("{name}.png"));
    image::RgbImage::new(4, 4).save(&picture).expect("write png");
    session.item_form.name = name.to_string();
    let notice = session.pick_image(Catalog::Items, &picture);
    assert_eq!(notice.level, NoticeLevel::Info);
    session.item_form.description = format!("{name} description");
    session.item_form.price = "990".to_string();
    session.item_form.category = Some(category.to_string());
}

#[test]
fn operator_session_against_real_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let categories = dir.path().join("categories.json");
    let items = dir.path().join("items.json");
    std::fs::write(
        &categories,
        r#"[{"name": "Bugs", "image": "/images/bugs.png"}]"#,
    )?;
    std::fs::write(&items, "[]")?;

    let mut session = Session::new(AdminConfig::default());
    session.open_categories(&categories)?;
    session.open_items(&items)?;

    fill_item(&mut session, dir.path(), "Ant", "Bugs");
    let notice = session.add_item()?;
    assert_eq!(notice.level, NoticeLevel::Info);
    fill_item(&mut session, dir.path(), "Beetle", "Bugs");
    session.add_item()?;

    let saved: Vec<catalog_admin::Item> =
        catalog_admin::decode(&std::fs::read_to_string(&items)?)?;
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].picture, "/images/Ant.png");
    assert_eq!(saved[1].id, 2);

    // Deleting a category leaves items that reference it untouched.
    session.delete_category(Some("Bugs"))?;
    assert!(session.category_names().is_empty());
    assert_eq!(session.items().records()[0].category, "Bugs");

    // With the category gone, new items cannot pick it.
    fill_item(&mut session, dir.path(), "Moth", "Bugs");
    let err = session.add_item().unwrap_err();
    assert!(matches!(err, StoreError::Validation(MissingField::Category)));
    assert_eq!(session.item_names(), vec!["Ant", "Beetle"]);
    Ok(())
}

#[test]
fn update_keeps_id_and_rewrites_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let categories = dir.path().join("categories.json");
    let items = dir.path().join("items.json");
    std::fs::write(&categories, r#"[{"name": "Bugs", "image": "/images/b.png"}]"#)?;
    std::fs::write(
        &items,
        r#"[{"id": 5, "name": "Ant", "picture": "/images/ant.png", "description": "d", "price": "1", "category": "Bugs"}]"#,
    )?;

    let mut session = Session::default();
    session.open_categories(&categories)?;
    session.open_items(&items)?;

    session.edit_item(Some("Ant"))?;
    session.item_form.price = "2".to_string();
    session.update_item(Some("Ant"))?;

    let saved: Vec<catalog_admin::Item> =
        catalog_admin::decode(&std::fs::read_to_string(&items)?)?;
    assert_eq!(saved[0].id, 5);
    assert_eq!(saved[0].price, "2");
    Ok(())
}

#[test]
fn append_after_largest_possible_id_is_refused() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let categories = dir.path().join("categories.json");
    let items = dir.path().join("items.json");
    std::fs::write(&categories, r#"[{"name": "Bugs", "image": "/images/b.png"}]"#)?;
    let original = r#"[{"id": 9223372036854775807, "name": "Max"}]"#;
    std::fs::write(&items, original)?;

    let mut session = Session::default();
    session.open_categories(&categories)?;
    session.open_items(&items)?;
    fill_item(&mut session, dir.path(), "Next", "Bugs");

    let err = session.add_item().unwrap_err();
    assert!(matches!(err, StoreError::IdExhausted { kind: "item" }));
    assert_eq!(Notice::from(&err).level, NoticeLevel::Error);
    assert_eq!(session.item_names(), vec!["Max"]);
    assert_eq!(session.item_form.name, "Next");
    assert_eq!(std::fs::read_to_string(&items)?, original);
    Ok(())
}

#[test]
fn update_of_unknown_name_reports_not_found() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let categories = dir.path().join("categories.json");
    std::fs::write(&categories, r#"[{"name": "Bugs", "image": "/images/b.png"}]"#)?;

    let mut session = Session::default();
    session.open_categories(&categories)?;
    session.category_form.name = "Ghost".to_string();
    session.category_form.image = Some("/images/ghost.png".to_string());

    let err = session.update_category(Some("Ghost")).unwrap_err();
    assert_eq!(Notice::from(&err).title, statics::EN_TITLE_NOT_FOUND);
    assert_eq!(session.category_names(), vec!["Bugs"]);
    Ok(())
}

#[test]
fn first_match_policy_deletes_one_duplicate() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let categories = dir.path().join("categories.json");
    std::fs::write(
        &categories,
        r#"[{"name": "Bugs", "image": "/images/1.png"}, {"name": "Bugs", "image": "/images/2.png"}]"#,
    )?;

    let mut session = Session::new(AdminConfig {
        delete: DeletePolicy::FirstMatch,
        ..Default::default()
    });
    session.open_categories(&categories)?;
    session.delete_category(Some("Bugs"))?;
    assert_eq!(session.categories().records()[0].image, "/images/2.png");
    Ok(())
}

#[test]
fn failed_open_keeps_previous_catalog() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let good = dir.path().join("categories.json");
    let bad = dir.path().join("broken.json");
    std::fs::write(&good, r#"[{"name": "A", "image": "/images/a.png"}]"#)?;
    std::fs::write(&bad, "not json")?;

    let mut session = Session::default();
    session.open_categories(&good)?;
    let err = session.open_categories(&bad).unwrap_err();
    let notice = Notice::from(&err);
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.title, statics::EN_TITLE_LOAD_ERROR);
    assert_eq!(session.category_names(), vec!["A"]);
    assert_eq!(session.categories().path(), Some(good.as_path()));
    Ok(())
}

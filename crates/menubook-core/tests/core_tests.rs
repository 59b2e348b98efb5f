use menubook_core::{
    Catalog, CategoryMeta, Item, MenuError, MenuPayload, PreviewTemplate, TemplateStyle,
};
use std::fs;
use tempfile::TempDir;

fn sample_json() -> &'static str {
    r#"{
        "restaurant_name": "Harbor Grill",
        "categories": {
            "Starters": [
                {"id": 1, "name": "Bread", "price": 3, "description": "", "image_url": ""},
                {"id": 2, "name": "Soup", "price": 6.5, "description": "Daily", "image_url": null}
            ],
            "Drinks": [
                {"id": "d-1", "name": "Tea", "price": 2}
            ]
        },
        "category_meta": {
            "Drinks": {"description": "Hot and cold", "image_url": "data:image/png;base64,AA=="}
        },
        "template_id": "classic-blue"
    }"#
}

#[test]
fn test_load_menu_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("menu.json");
    fs::write(&path, sample_json()).unwrap();

    let payload = MenuPayload::load(&path).unwrap();
    assert_eq!(payload.restaurant_name, "Harbor Grill");
    assert_eq!(payload.categories.len(), 2);
    assert_eq!(payload.categories.item_count(), 3);

    let names: Vec<_> = payload.categories.items().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Bread", "Soup", "Tea"]);
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = MenuPayload::load(temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, MenuError::NotFound { .. }));
}

#[test]
fn test_load_malformed_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("menu.json");
    fs::write(&path, r#"{"categories": {"Drinks": [{"id": 1}]}}"#).unwrap();

    let err = MenuPayload::load(&path).unwrap_err();
    assert!(matches!(err, MenuError::Parse { .. }));
}

#[test]
fn test_optional_fields_are_falsy() {
    let payload = MenuPayload::from_json(sample_json()).unwrap();
    let starters = payload.categories.get("Starters").unwrap();

    assert!(!starters[0].has_description());
    assert!(!starters[0].has_image());
    assert!(starters[1].has_description());
    assert!(!starters[1].has_image());

    assert_eq!(payload.meta("Starters"), &CategoryMeta::default());
    assert_eq!(payload.meta("Drinks").description_or_empty(), "Hot and cold");
}

#[test]
fn test_catalog_from_iter_keeps_order() {
    let catalog: Catalog = vec![
        ("Mains", vec![Item::new(1, "Steak", 20.0)]),
        ("Desserts", vec![]),
        ("Drinks", vec![Item::new(2, "Tea", 2.0)]),
    ]
    .into_iter()
    .collect();

    let names: Vec<_> = catalog.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Mains", "Desserts", "Drinks"]);
}

#[test]
fn test_preview_with_stored_template() {
    let mut payload = MenuPayload::from_json(sample_json()).unwrap();
    let stored = PreviewTemplate {
        id: "tpl-42".to_string(),
        style_id: Some("custom-upload".to_string()),
        asset_url: Some("https://cdn.example/bg.jpg".to_string()),
        asset_type: Some("image".to_string()),
    };

    payload.apply_preview("tpl-42", Some(&stored));

    assert_eq!(payload.template_id.as_deref(), Some("tpl-42"));
    assert_eq!(payload.style(), TemplateStyle::CustomUpload);
    assert!(payload.has_custom_background());
}

#[test]
fn test_preview_stored_template_keeps_missing_fields() {
    let mut payload = MenuPayload::from_json(sample_json()).unwrap();
    payload.template_style_id = Some("warm-paper".to_string());
    let stored = PreviewTemplate {
        id: "tpl-7".to_string(),
        style_id: Some(String::new()),
        ..PreviewTemplate::default()
    };

    payload.apply_preview("tpl-7", Some(&stored));

    assert_eq!(payload.template_id.as_deref(), Some("tpl-7"));
    assert_eq!(payload.template_style_id.as_deref(), Some("warm-paper"));
}

#[test]
fn test_preview_built_in_style() {
    let mut payload = MenuPayload::from_json(sample_json()).unwrap();
    let stored = PreviewTemplate {
        id: "other".to_string(),
        ..PreviewTemplate::default()
    };

    payload.apply_preview("slate-minimal", Some(&stored));

    assert_eq!(payload.template_id.as_deref(), Some("slate-minimal"));
    assert_eq!(payload.style(), TemplateStyle::SlateMinimal);
}

#[test]
fn test_preview_unknown_id_is_ignored() {
    let original = MenuPayload::from_json(sample_json()).unwrap();
    let mut payload = original.clone();

    payload.apply_preview("does-not-exist", None);

    assert_eq!(payload, original);
}

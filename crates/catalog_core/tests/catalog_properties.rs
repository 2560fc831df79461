use catalog_core::{
    filter_records, reduce_catalog, Catalog, CatalogAction, CatalogConfig, CatalogState,
    FilterState, IconRecord, Lookup,
};
use pretty_assertions::assert_eq;

fn icon(id: usize, name: &str, description: &str, categories: &[&str]) -> IconRecord {
    IconRecord {
        id: format!("icon-{id}"),
        name: name.to_string(),
        description: description.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        image_url: format!("https://cdn.example/icon-{id}.png"),
        image_url_grid: Some(format!("https://cdn.example/icon-{id}-320.png")),
        image_url_preview: None,
    }
}

/// 120 records; every fourth one is tagged "animals".
fn zoo_catalog() -> Catalog {
    let records = (0..120)
        .map(|i| {
            if i % 4 == 0 {
                icon(i, &format!("Creature {i}"), "lives outdoors", &["animals"])
            } else {
                icon(i, &format!("Gadget {i}"), "metal thing", &["tools", "hardware"])
            }
        })
        .collect();
    Catalog::new(records, &CatalogConfig::default().sections)
}

fn dispatch(state: &mut CatalogState, catalog: &Catalog, action: CatalogAction) {
    reduce_catalog(state, catalog, &CatalogConfig::default(), action).expect("reduce");
}

fn ids(records: &[&IconRecord]) -> Vec<String> {
    records.iter().map(|record| record.id.clone()).collect()
}

#[test]
fn unconstrained_filter_returns_every_record_in_order() {
    let catalog = zoo_catalog();
    let filtered = filter_records(catalog.records(), &FilterState::default());
    let expected: Vec<&IconRecord> = catalog.records().iter().collect();
    assert_eq!(filtered, expected);
}

#[test]
fn category_selection_partitions_the_records() {
    let catalog = zoo_catalog();
    let mut filter = FilterState::default();
    filter.select_categories(["ANIMALS", "Hardware"]);
    let selected = ["animals", "hardware"];

    let filtered = filter_records(catalog.records(), &filter);
    for record in catalog.records() {
        let intersects = record
            .categories
            .iter()
            .any(|label| selected.contains(&label.to_lowercase().as_str()));
        let included = filtered.iter().any(|kept| kept.id == record.id);
        assert_eq!(included, intersects, "record {}", record.id);
    }
}

#[test]
fn filtering_is_idempotent_and_does_not_mutate_input() {
    let catalog = zoo_catalog();
    let before = catalog.clone();
    let mut filter = FilterState::default();
    filter.set_query("creature 1");

    let first = ids(&filter_records(catalog.records(), &filter));
    let second = ids(&filter_records(catalog.records(), &filter));
    assert_eq!(first, second);
    assert_eq!(catalog, before);
}

#[test]
fn reveal_more_is_monotonic_and_clamped() {
    let catalog = zoo_catalog();
    let mut state = CatalogState::default();
    let mut previous = state.visible(&catalog).len();
    for _ in 0..10 {
        dispatch(&mut state, &catalog, CatalogAction::RevealMore);
        let revealed = state.visible(&catalog).len();
        assert!(revealed >= previous);
        assert!(revealed <= catalog.len());
        previous = revealed;
    }
    assert_eq!(previous, 120);
    assert!(!state.has_more(&catalog));
}

#[test]
fn any_filter_change_resets_the_cursor_even_when_the_result_is_unchanged() {
    let catalog = zoo_catalog();
    let mut state = CatalogState::default();
    dispatch(&mut state, &catalog, CatalogAction::RevealMore);
    assert_eq!(state.pagination.cursor(), 100);

    dispatch(
        &mut state,
        &catalog,
        CatalogAction::SetQuery {
            query: String::new(),
        },
    );
    assert_eq!(state.pagination.cursor(), 50);

    dispatch(&mut state, &catalog, CatalogAction::RevealMore);
    dispatch(&mut state, &catalog, CatalogAction::ClearFilters);
    assert_eq!(state.pagination.cursor(), 50);

    dispatch(&mut state, &catalog, CatalogAction::RevealMore);
    dispatch(
        &mut state,
        &catalog,
        CatalogAction::ToggleCategory {
            label: "unknown".to_string(),
        },
    );
    dispatch(
        &mut state,
        &catalog,
        CatalogAction::ToggleCategory {
            label: "unknown".to_string(),
        },
    );
    assert_eq!(state.pagination.cursor(), 50);
    assert_eq!(state.visible(&catalog).len(), 50);
}

#[test]
fn selecting_animals_reveals_thirty_and_never_more() {
    let catalog = zoo_catalog();
    let mut state = CatalogState::default();
    dispatch(
        &mut state,
        &catalog,
        CatalogAction::ToggleCategory {
            label: "animals".to_string(),
        },
    );
    assert_eq!(catalog.filtered_len(&state.filter), 30);
    assert_eq!(state.visible(&catalog).len(), 30);
    assert!(!state.has_more(&catalog));

    let before = state.clone();
    dispatch(&mut state, &catalog, CatalogAction::RevealMore);
    dispatch(&mut state, &catalog, CatalogAction::RevealMore);
    assert_eq!(state, before);
}

#[test]
fn cat_query_matches_name_description_and_labels() {
    let records = vec![
        icon(1, "Category Icon", "folder glyph", &["interface"]),
        icon(2, "Tabby", "striped", &["Cats"]),
        icon(3, "Dog", "good boy", &["pets"]),
        icon(4, "Scatter Plot", "chart", &["data"]),
    ];
    let catalog = Catalog::new(records, &CatalogConfig::default().sections);
    let mut state = CatalogState::default();
    dispatch(
        &mut state,
        &catalog,
        CatalogAction::SetQuery {
            query: "cat".to_string(),
        },
    );
    assert_eq!(
        ids(&state.visible(&catalog)),
        vec!["icon-1", "icon-2", "icon-4"]
    );
}

#[test]
fn lookup_of_absent_identifier_is_not_found() {
    let catalog = zoo_catalog();
    assert!(matches!(catalog.lookup("icon-7"), Lookup::Found(_)));
    assert_eq!(
        catalog.lookup("icon-999"),
        Lookup::NotFound {
            id: "icon-999".to_string()
        }
    );
}

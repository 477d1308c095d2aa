// tests/shell_actions.rs
//
// The explorer driven through its actions, as the GUI and CLI do.
//
mod common;

use std::fs;
use std::path::PathBuf;

use common::{names, scenario, wider};
use product_explorer::catalog::{Catalog, Product};
use product_explorer::config::consts::ASSISTANT_MESSAGES;
use product_explorer::config::options::{ExportFormat, ExportOptions};
use product_explorer::error::EmptyCatalogError;
use product_explorer::pick::{self, Deal};
use product_explorer::query::{CategoryFilter, SortKey};
use product_explorer::shell::{Action, Explorer, Outcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

fn explorer(catalog: Catalog) -> Explorer {
    Explorer::with_seed(catalog, ExportOptions::default(), 7)
}

#[test]
fn starts_with_whole_catalog() {
    let ex = explorer(wider());
    assert_eq!(ex.view_len(), 7);
    assert_eq!(ex.selected_category(), &CategoryFilter::All);
    assert_eq!(ex.search_term(), "");
    assert_eq!(ex.categories()[0], "All");
}

#[test]
fn category_then_sort_scenario() {
    let mut ex = explorer(scenario());

    let out = ex.dispatch(Action::CategorySelect("Stationery".into())).unwrap();
    assert_eq!(out, Outcome::ViewChanged { rows: 2 });

    ex.dispatch(Action::SortRequest(SortKey::Rating, false)).unwrap();
    assert_eq!(names(ex.current_view().iter()), ["Notebook", "Pen"]);
    assert_eq!(ex.view_row(0).map(|p| p.name.as_str()), Some("Notebook"));
    assert_eq!(ex.view_row(2), None);
}

#[test]
fn search_uses_selected_category() {
    let mut ex = explorer(wider());
    ex.on_category_select("Stationery");
    assert_eq!(ex.on_search_submit("pen"), 2);
    assert_eq!(names(ex.current_view().iter()), ["Gel Pen", "Pen Stand"]);
}

#[test]
fn category_change_keeps_last_search_term() {
    let mut ex = explorer(wider());
    ex.on_search_submit("pan");
    assert_eq!(ex.on_category_select("Stationery"), 0);
    assert_eq!(ex.on_category_select("All"), 1);
    assert_eq!(names(ex.current_view().iter()), ["Frying Pan"]);
}

#[test]
fn new_search_resets_sort_order() {
    let mut ex = explorer(wider());
    ex.on_sort_request(SortKey::Price, false);
    assert_eq!(ex.view_row(0).unwrap().name, "Frying Pan");

    ex.on_search_submit("");
    assert_eq!(ex.view_row(0).unwrap().name, "Gel Pen");
    assert_eq!(ex.query().sort_params(), None);
}

#[test]
fn export_writes_current_view() {
    let mut ex = explorer(scenario());
    ex.export = ExportOptions { format: ExportFormat::Tsv, include_headers: false };
    ex.on_category_select("Kitchen");

    let dir = tempdir().unwrap();
    let dest = dir.path().join("kitchen.tsv");
    let out = ex.dispatch(Action::ExportRequest(Some(dest.clone()))).unwrap();
    assert_eq!(out, Outcome::Exported(dest.clone()));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "Mug\t150\t4\tKitchen\n");
    assert_eq!(ex.copy_text(), "Mug\t150\t4\tKitchen\n");
}

#[test]
fn cancelled_export_touches_nothing() {
    let mut ex = explorer(scenario());
    assert!(ex.on_export_request(None).unwrap().is_none());
    assert_eq!(ex.dispatch(Action::ExportRequest(None)).unwrap(), Outcome::ExportCancelled);
}

#[test]
fn failed_export_is_an_error_not_a_panic() {
    let mut ex = explorer(scenario());
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "x").unwrap();

    let dest: PathBuf = blocker.join("out.csv");
    assert!(ex.dispatch(Action::ExportRequest(Some(dest))).is_err());
    // Session continues.
    assert_eq!(ex.view_len(), 3);
}

#[test]
fn assistant_answers_from_canned_messages() {
    let mut ex = explorer(scenario());
    for _ in 0..20 {
        match ex.dispatch(Action::AssistantRequest).unwrap() {
            Outcome::Message(msg) => assert!(ASSISTANT_MESSAGES.contains(&msg)),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}

#[test]
fn deal_comes_from_full_catalog_not_view() {
    let mut ex = explorer(wider());
    ex.on_search_submit("zzz");
    assert_eq!(ex.view_len(), 0);

    let deal = ex.deal_of_the_day().unwrap();
    assert!(ex.catalog().products().contains(&deal.0));
}

#[test]
fn singleton_catalog_always_yields_its_product() {
    let only = Product::new("Pen", 10.0, 4.5, "Stationery");
    let mut ex = explorer(Catalog::new(vec![only.clone()]));
    for _ in 0..10 {
        assert_eq!(ex.deal_of_the_day().unwrap(), Deal(only.clone()));
    }
}

#[test]
fn empty_catalog_pick_is_an_error() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(pick::pick_random(&Catalog::default(), &mut rng), Err(EmptyCatalogError));

    let mut ex = explorer(Catalog::default());
    assert_eq!(ex.deal_of_the_day(), Err(EmptyCatalogError));
}

#[test]
fn seeded_picks_are_reproducible() {
    let cat = wider();
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let first: Vec<_> = (0..10).map(|_| pick::pick_random(&cat, &mut a).unwrap().name.clone()).collect();
    let second: Vec<_> = (0..10).map(|_| pick::pick_random(&cat, &mut b).unwrap().name.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn pick_covers_every_product() {
    let cat = scenario();
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = [false; 3];
    for _ in 0..300 {
        let p = pick::pick_random(&cat, &mut rng).unwrap();
        let ix = cat.products().iter().position(|q| q == p).unwrap();
        seen[ix] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn deal_text() {
    let deal = Deal(Product::new("Pen", 10.0, 4.5, "Stationery"));
    assert_eq!(deal.to_string(), "🔥 Pen just at ₹10 (Rating: 4.5⭐)");
}

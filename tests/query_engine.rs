// tests/query_engine.rs
//
// Filter/sort behaviour of the query engine, without UI.
//
mod common;

use std::path::Path;

use common::{names, scenario, wider};
use product_explorer::catalog;
use product_explorer::query::{
    self, CategoryFilter, FilterParams, QueryState, SortKey, SortParams, View,
};

fn stationery() -> FilterParams {
    FilterParams::new("", CategoryFilter::Exact("Stationery".into()))
}

#[test]
fn scenario_filter_then_sort() {
    let catalog = scenario();

    let view = query::filter(&catalog, &stationery());
    assert_eq!(names(view.iter()), ["Pen", "Notebook"]);

    // Tie on price 10: order unchanged.
    let by_price = query::sort(view.clone(), SortParams::new(SortKey::Price, true));
    assert_eq!(names(by_price.iter()), ["Pen", "Notebook"]);

    let by_rating = query::sort(view, SortParams::new(SortKey::Rating, false));
    assert_eq!(names(by_rating.iter()), ["Notebook", "Pen"]);
}

#[test]
fn empty_term_and_all_is_identity() {
    let catalog = wider();
    let view = query::filter(&catalog, &FilterParams::default());
    assert_eq!(view.row_ix(), (0..catalog.len()).collect::<Vec<_>>().as_slice());
}

#[test]
fn search_is_case_insensitive_substring() {
    let catalog = wider();
    let view = query::filter(&catalog, &FilterParams::new("pEn", CategoryFilter::All));
    assert_eq!(names(view.iter()), ["Gel Pen", "Pen Stand"]);
}

#[test]
fn search_and_category_combine() {
    let catalog = wider();
    let params = FilterParams::new("pan", CategoryFilter::Exact("Kitchen".into()));
    assert_eq!(names(query::filter(&catalog, &params).iter()), ["Frying Pan"]);

    let params = FilterParams::new("pan", CategoryFilter::Exact("Stationery".into()));
    assert!(query::filter(&catalog, &params).is_empty());
}

#[test]
fn category_is_exact_and_case_sensitive() {
    let catalog = wider();
    let params = FilterParams::new("", CategoryFilter::Exact("kitchen".into()));
    assert!(query::filter(&catalog, &params).is_empty());

    let params = FilterParams::new("", CategoryFilter::Exact("Garden".into()));
    assert!(query::filter(&catalog, &params).is_empty());
}

#[test]
fn all_sentinel_maps_to_no_constraint() {
    assert_eq!(CategoryFilter::from_choice("All"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_choice("all"), CategoryFilter::Exact("all".into()));
}

#[test]
fn descending_sort_keeps_ties_in_input_order() {
    let catalog = wider();
    // Wireless Mouse and USB Cable share rating 4.3 (in that order).
    let sorted = query::sort(View::full(&catalog), SortParams::new(SortKey::Rating, false));
    let order = names(sorted.iter());
    let mouse = order.iter().position(|n| *n == "Wireless Mouse").unwrap();
    let cable = order.iter().position(|n| *n == "USB Cable").unwrap();
    assert!(mouse < cable);
    assert_eq!(order.first(), Some(&"Notebook"));
}

#[test]
fn state_sort_composes_with_last_filter() {
    let catalog = wider();
    let mut state = QueryState::new(catalog.clone());

    let params = FilterParams::new("", CategoryFilter::Exact("Stationery".into()));
    assert_eq!(state.apply_filter(params.clone()), 3);
    state.apply_sort(SortParams::new(SortKey::Price, false));

    let expected = query::sort(
        query::filter(&catalog, &params),
        SortParams::new(SortKey::Price, false),
    );
    assert_eq!(state.row_ix(), expected.row_ix());
    // Never re-expands to the catalog.
    assert_eq!(state.view().len(), 3);
}

#[test]
fn new_filter_drops_previous_sort() {
    let mut state = QueryState::new(wider());
    state.apply_sort(SortParams::new(SortKey::Price, false));
    assert!(state.sort_params().is_some());

    state.apply_filter(FilterParams::default());
    assert_eq!(state.sort_params(), None);
    assert_eq!(names(state.view().iter())[0], "Gel Pen");
}

#[test]
fn consecutive_sorts_apply_to_current_order() {
    let mut state = QueryState::new(scenario());
    state.apply_sort(SortParams::new(SortKey::Rating, false)); // Notebook, Pen, Mug
    state.apply_sort(SortParams::new(SortKey::Price, true));   // ties keep rating order
    assert_eq!(names(state.view().iter()), ["Notebook", "Pen", "Mug"]);
}

#[test]
fn categories_all_first_then_sorted() {
    assert_eq!(scenario().categories(), ["All", "Kitchen", "Stationery"]);
    assert_eq!(
        wider().categories(),
        ["All", "Electronics", "Kitchen", "Stationery"]
    );
}

#[test]
fn from_indices_drops_out_of_range_rows() {
    let catalog = scenario();
    let view = View::from_indices(&catalog, vec![2, 7, 0]);
    assert_eq!(names(view.iter()), ["Notebook", "Pen"]);
    assert_eq!(view.get(1).map(|p| p.name.as_str()), Some("Pen"));
    assert!(view.get(2).is_none());
}

#[test]
fn signed_zero_prices_tie() {
    let json = r#"[
        {"name":"A","price":0,"rating":4.0,"category":"X"},
        {"name":"B","price":-0,"rating":4.0,"category":"X"},
        {"name":"C","price":-0.0,"rating":4.0,"category":"X"}
    ]"#;
    let catalog = catalog::from_json_str(json, Path::new("inline")).unwrap();

    for ascending in [true, false] {
        let sorted = query::sort(View::full(&catalog), SortParams::new(SortKey::Price, ascending));
        assert_eq!(names(sorted.iter()), ["A", "B", "C"], "ascending={ascending}");
    }
}

#[test]
fn state_remembers_last_filter() {
    let mut state = QueryState::new(wider());
    assert_eq!(state.filter_params(), &FilterParams::default());

    let params = FilterParams::new("pan", CategoryFilter::Exact("Kitchen".into()));
    state.apply_filter(params.clone());
    state.apply_sort(SortParams::new(SortKey::Rating, true));
    assert_eq!(state.filter_params(), &params);
}

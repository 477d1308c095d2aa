// tests/query_props.rs
//
// Properties of filter/sort over arbitrary catalogs.
//
use product_explorer::catalog::{Catalog, Product};
use product_explorer::query::{self, CategoryFilter, FilterParams, SortKey, SortParams, View};
use proptest::prelude::*;

static CATEGORIES: [&str; 3] = ["Stationery", "Kitchen", "Electronics"];
static WORDS: [&str; 6] = ["Pen", "mug", "Cable", "pan", "Note", "stand"];
static TERMS: [&str; 5] = ["", "pen", "PAN", "a", "zzz"];

/// Mostly whole prices, with signed zeros mixed in (JSON `0` and `-0`).
fn price() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => (0u32..2000).prop_map(f64::from),
        1 => Just(0.0),
        1 => Just(-0.0),
    ]
}

fn product() -> impl Strategy<Value = Product> {
    (
        prop::sample::select(&WORDS[..]),
        prop::sample::select(&WORDS[..]),
        price(),
        0u8..=50,
        prop::sample::select(&CATEGORIES[..]),
    )
        .prop_map(|(a, b, price, rating, cat)| {
            Product::new(format!("{a} {b}"), price, f64::from(rating) / 10.0, cat)
        })
}

fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(product(), 0..40).prop_map(Catalog::new)
}

fn category() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        prop::sample::select(&CATEGORIES[..]).prop_map(|c| CategoryFilter::Exact(c.into())),
    ]
}

fn sort_params() -> impl Strategy<Value = SortParams> {
    (prop_oneof![Just(SortKey::Price), Just(SortKey::Rating)], any::<bool>())
        .prop_map(|(key, asc)| SortParams::new(key, asc))
}

fn key_of(key: SortKey, p: &Product) -> f64 {
    match key { SortKey::Price => p.price, SortKey::Rating => p.rating }
}

proptest! {
    #[test]
    fn filter_is_ordered_subsequence(
        cat in catalog(),
        term in prop::sample::select(&TERMS[..]),
        category in category(),
    ) {
        let params = FilterParams::new(term, category.clone());
        let view = query::filter(&cat, &params);

        // Strictly increasing catalog positions.
        prop_assert!(view.row_ix().windows(2).all(|w| w[0] < w[1]));
        // Exactly the matching rows, computed without the engine's predicate.
        let needle = term.to_lowercase();
        let expected: Vec<usize> = cat.products().iter().enumerate()
            .filter(|(_, p)| p.name.to_lowercase().contains(&needle))
            .filter(|(_, p)| match &category {
                CategoryFilter::All => true,
                CategoryFilter::Exact(c) => p.category == *c,
            })
            .map(|(ix, _)| ix)
            .collect();
        prop_assert_eq!(view.row_ix(), expected.as_slice());
    }

    #[test]
    fn sort_is_monotonic_and_stable(cat in catalog(), params in sort_params()) {
        let sorted = query::sort(View::full(&cat), params);
        let rows = sorted.row_ix();

        prop_assert_eq!(rows.len(), cat.len());
        for w in rows.windows(2) {
            let a = key_of(params.key, &cat.products()[w[0]]);
            let b = key_of(params.key, &cat.products()[w[1]]);
            if params.ascending { prop_assert!(a <= b); } else { prop_assert!(a >= b); }
            // Equal keys stay in their input (catalog) order.
            if a == b { prop_assert!(w[0] < w[1]); }
        }
    }

    #[test]
    fn sort_after_filter_is_a_permutation_of_filter(
        cat in catalog(),
        category in category(),
        params in sort_params(),
    ) {
        let filtered = query::filter(&cat, &FilterParams::new("", category));
        let mut before = filtered.row_ix().to_vec();
        let mut after = query::sort(filtered, params).into_indices();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}

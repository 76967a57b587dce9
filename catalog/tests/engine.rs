//! Integration tests for the search, filter and sort pipeline

use assert_matches::assert_matches;
use catalog::core::range::BucketFacet;
use catalog::traits::MockItemSource;
use catalog::*;
use shared::{Cuisine, DietaryTag, ItemId, Offer, OfferCategory, ParsePolicy, Recipe, StoreChain};

mod common;
use common::{TestFixtures, TestHelpers};

#[test]
fn test_end_to_end_price_sort_and_search() {
    let items = TestFixtures::bananas_and_milk();

    let by_price = compute_view(&items, "", &FilterState::new(), SortKey::PriceAsc).unwrap();
    assert_eq!(TestHelpers::ids(&by_price), vec![2, 1]);

    let searched = compute_view(&items, "ban", &FilterState::new(), SortKey::Relevance).unwrap();
    assert_eq!(TestHelpers::ids(&searched), vec![1]);
}

#[test]
fn test_search_is_case_insensitive_and_covers_category_names() {
    let items = TestFixtures::bananas_and_milk();

    let upper = compute_view(&items, "MILCH", &FilterState::new(), SortKey::Relevance).unwrap();
    assert_eq!(TestHelpers::ids(&upper), vec![2]);

    // "Obst & Gemüse" is the display name of the produce category
    let by_category = compute_view(&items, "obst", &FilterState::new(), SortKey::Relevance).unwrap();
    assert_eq!(TestHelpers::ids(&by_category), vec![1]);
}

#[test]
fn test_compute_view_is_idempotent_and_leaves_input_untouched() {
    let items = TestFixtures::tagged_recipes();
    let before = items.clone();
    let filters = TestHelpers::filters::<RecipeFilter>(&["dietary=vegan"]);

    let first = compute_view(&items, "e", &filters, SortKey::Rating).unwrap();
    let second = compute_view(&items, "e", &filters, SortKey::Rating).unwrap();

    assert_eq!(first.ids(), second.ids());
    assert_eq!(items, before);
}

#[test]
fn test_empty_items_give_empty_view() {
    let recipes: Vec<Recipe> = Vec::new();
    let filters = TestHelpers::filters::<RecipeFilter>(&["dietary=vegan", "time=15-30"]);

    let view = compute_view(&recipes, "pasta", &filters, SortKey::Rating).unwrap();
    assert!(view.is_empty());
    assert!(view.page(1, 6).is_empty());
    assert!(count_by_category(&recipes, &filters, RecipeFilterKey::Dietary).is_empty());

    let offers: Vec<Offer> = Vec::new();
    let filters = TestHelpers::filters::<OfferFilter>(&["price=0-2"]);
    let view = compute_view(&offers, "milch", &filters, SortKey::PriceDesc).unwrap();
    assert!(view.is_empty());
    assert!(count_by_category(&offers, &FilterState::new(), OfferFilterKey::Category).is_empty());
    assert!(group_offers_by_store(view.iter()).is_empty());
    assert!(group_offers_by_store(offers.iter()).is_empty());
}

#[test]
fn test_multi_value_filters_use_or_within_a_category() {
    let items = TestFixtures::tagged_recipes();
    let filters = TestHelpers::filters::<RecipeFilter>(&["dietary=vegan,vegetarian"]);

    let view = compute_view(&items, "", &filters, SortKey::Relevance).unwrap();
    assert_eq!(TestHelpers::ids(&view), vec![1, 2, 3, 5]);
}

#[test]
fn test_distinct_categories_combine_with_and() {
    let items = TestFixtures::tagged_recipes();
    let filters = TestHelpers::filters::<RecipeFilter>(&["dietary=vegan", "cuisine=italian"]);

    let view = compute_view(&items, "", &filters, SortKey::Relevance).unwrap();
    assert_eq!(TestHelpers::ids(&view), vec![1]);
}

#[test]
fn test_closed_price_range_includes_both_bounds() {
    let items = TestFixtures::priced_offers();
    let filters = TestHelpers::filters::<OfferFilter>(&["price=5-10"]);

    let view = compute_view(&items, "", &filters, SortKey::Relevance).unwrap();
    let prices: Vec<f64> = view.iter().map(|offer| offer.discounted_price).collect();
    assert_eq!(prices, vec![5.0, 7.5, 10.0]);
}

#[test]
fn test_open_price_range_is_unbounded_above() {
    let items = TestFixtures::priced_offers();
    let filters = TestHelpers::filters::<OfferFilter>(&["price=20+"]);

    let view = compute_view(&items, "", &filters, SortKey::Relevance).unwrap();
    let prices: Vec<f64> = view.iter().map(|offer| offer.discounted_price).collect();
    assert_eq!(prices, vec![20.0, 35.0]);
}

#[test]
fn test_sort_keeps_input_order_for_equal_keys() {
    let items = vec![
        TestFixtures::offer(1, "A", 2.0, OfferCategory::Dairy),
        TestFixtures::offer(2, "B", 1.0, OfferCategory::Dairy),
        TestFixtures::offer(3, "C", 2.0, OfferCategory::Dairy),
        TestFixtures::offer(4, "D", 1.0, OfferCategory::Dairy),
        TestFixtures::offer(5, "E", 2.0, OfferCategory::Dairy),
    ];

    let asc = compute_view(&items, "", &FilterState::new(), SortKey::PriceAsc).unwrap();
    assert_eq!(TestHelpers::ids(&asc), vec![2, 4, 1, 3, 5]);

    let desc = compute_view(&items, "", &FilterState::new(), SortKey::PriceDesc).unwrap();
    assert_eq!(TestHelpers::ids(&desc), vec![1, 3, 5, 2, 4]);

    // Every offer expires on the same day
    let expiring = compute_view(&items, "", &FilterState::new(), SortKey::Expiring).unwrap();
    assert_eq!(TestHelpers::ids(&expiring), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_relevance_keeps_input_order() {
    let items = TestFixtures::tagged_recipes();
    let view = compute_view(&items, "", &FilterState::new(), SortKey::Relevance).unwrap();
    assert_eq!(TestHelpers::ids(&view), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_recipe_sorts_use_their_metric() {
    let mut items = TestFixtures::tagged_recipes();
    items[0].cooking_time = 50;
    items[1].cooking_time = 10;
    items[2].rating = 4.9;
    items[4].is_new = true;

    let quick = compute_view(&items, "", &FilterState::new(), SortKey::TimeAsc).unwrap();
    assert_eq!(TestHelpers::ids(&quick), vec![2, 3, 4, 5, 1]);

    let rated = compute_view(&items, "", &FilterState::new(), SortKey::Rating).unwrap();
    assert_eq!(TestHelpers::ids(&rated)[0], 3);

    let newest = compute_view(&items, "", &FilterState::new(), SortKey::Newest).unwrap();
    assert_eq!(TestHelpers::ids(&newest), vec![5, 1, 2, 3, 4]);
}

#[test]
fn test_sort_key_without_metric_is_rejected() {
    let items = TestFixtures::tagged_recipes();
    let result = compute_view(&items, "", &FilterState::new(), SortKey::Distance);
    assert_matches!(result, Err(CatalogError::UnsupportedSortKey { .. }));
}

#[test]
fn test_count_excludes_the_counted_category() {
    let items = TestFixtures::tagged_recipes();
    let filters = TestHelpers::filters::<RecipeFilter>(&["cuisine=italian"]);

    let counts = count_by_category(&items, &filters, RecipeFilterKey::Dietary);
    assert_eq!(counts.get(&RecipeFacet::Dietary(DietaryTag::Vegan)), Some(&1));
    assert_eq!(counts.get(&RecipeFacet::Dietary(DietaryTag::Vegetarian)), Some(&1));

    let global = count_by_category(&items, &FilterState::new(), RecipeFilterKey::Dietary);
    assert_eq!(global.get(&RecipeFacet::Dietary(DietaryTag::Vegan)), Some(&3));
}

#[test]
fn test_count_matches_filtering_with_the_facet_selected() {
    let items = TestFixtures::tagged_recipes();
    let mut filters = TestHelpers::filters::<RecipeFilter>(&["dietary=vegan"]);

    let counts = count_by_category(&items, &filters, RecipeFilterKey::Cuisine);
    for (facet, count) in &counts {
        filters.toggle(facet);
        let view = compute_view(&items, "", &filters, SortKey::Relevance).unwrap();
        assert_eq!(view.len(), *count, "count for {facet}");
        filters.toggle(facet);
    }
    assert_eq!(counts.get(&RecipeFacet::Cuisine(Cuisine::Indian)), Some(&1));
    assert_eq!(counts.get(&RecipeFacet::Cuisine(Cuisine::German)), None);
}

#[test]
fn test_price_bucket_counts_share_boundaries() {
    let items = TestFixtures::priced_offers();
    let counts = count_by_category(&items, &FilterState::new(), OfferFilterKey::Price);

    let by_label: Vec<(&str, usize)> = counts
        .iter()
        .map(|(facet, count)| match facet {
            OfferFacet::Price(BucketFacet { label, .. }) => (*label, *count),
            other => panic!("unexpected facet {other:?}"),
        })
        .collect();
    assert_eq!(by_label, vec![("0-5", 2), ("5-10", 3), ("10-20", 4), ("20+", 2)]);
}

#[test]
fn test_toggling_last_value_removes_the_category() {
    let mut filters: FilterState<RecipeFilter> = FilterState::new();
    let vegan = RecipeFacet::Dietary(DietaryTag::Vegan);
    let vegetarian = RecipeFacet::Dietary(DietaryTag::Vegetarian);

    filters.toggle(&vegan);
    filters.toggle(&vegetarian);
    assert_eq!(filters.active_count(), 2);
    assert_eq!(filters.len(), 1);

    filters.toggle(&vegan);
    filters.toggle(&vegetarian);
    assert!(filters.is_empty());
    assert!(!filters.contains(RecipeFilterKey::Dietary));
}

#[test]
fn test_malformed_range_is_rejected_under_both_policies() {
    for policy in [ParsePolicy::Strict, ParsePolicy::Lenient] {
        let raw = RawViewRequest {
            filters: vec!["price=abc-10".to_string()],
            ..Default::default()
        };
        assert_matches!(
            ViewRequest::<shared::Offer>::parse(&raw, policy),
            Err(CatalogError::InvalidFilterValue { .. })
        );
    }
}

#[test]
fn test_unknown_sort_key_depends_on_policy() {
    let raw = RawViewRequest {
        sort: Some("cheapest".to_string()),
        ..Default::default()
    };

    assert_matches!(
        ViewRequest::<Recipe>::parse(&raw, ParsePolicy::Strict),
        Err(CatalogError::InvalidSortKey { .. })
    );
    let lenient = ViewRequest::<Recipe>::parse(&raw, ParsePolicy::Lenient).unwrap();
    assert_eq!(lenient.sort, SortKey::Relevance);
}

#[test]
fn test_view_request_runs_against_items() {
    let raw = RawViewRequest {
        query: "vegan".to_string(),
        filters: vec!["cuisine=italian,asian".to_string()],
        sort: Some("rating".to_string()),
    };
    let request = ViewRequest::<Recipe>::parse(&raw, ParsePolicy::Strict).unwrap();
    let items = TestFixtures::tagged_recipes();

    let view = request.run(&items).unwrap();
    assert_eq!(TestHelpers::ids(&view), vec![1, 5]);
}

#[test]
fn test_paging_through_a_view() {
    let items = TestFixtures::priced_offers();
    let view = compute_view(&items, "", &FilterState::new(), SortKey::Relevance).unwrap();

    assert_eq!(view.page(1, 3).len(), 3);
    assert!(view.has_more(2, 3));
    assert_eq!(view.page(3, 3).len(), 2);
    assert!(!view.has_more(3, 3));
    assert!(view.page(4, 3).is_empty());
}

#[test]
fn test_store_filters_and_sorts() {
    let stores = vec![
        TestFixtures::store(1, "REWE Mitte", StoreChain::Rewe, 0.3, 24),
        TestFixtures::store(2, "EDEKA Center", StoreChain::Edeka, 0.8, 31),
        TestFixtures::store(3, "Lidl", StoreChain::Lidl, 1.2, 18),
        TestFixtures::store(4, "Netto", StoreChain::Netto, 2.1, 8),
    ];
    let filters = TestHelpers::filters::<StoreFilter>(&["radius=2"]);

    let popular = compute_view(&stores, "", &filters, SortKey::Popular).unwrap();
    assert_eq!(TestHelpers::ids(&popular), vec![2, 1, 3]);

    assert_matches!(
        compute_view(&stores, "", &filters, SortKey::Rating),
        Err(CatalogError::UnsupportedSortKey { .. })
    );
}

#[test]
fn test_offers_grouped_by_nearest_store() {
    let offers = vec![
        TestFixtures::offer_at(1, "Äpfel", 2.49, "Edeka", 2.0),
        TestFixtures::offer_at(2, "Milch", 0.99, "Aldi", 0.5),
        TestFixtures::offer_at(3, "Hack", 4.99, "Edeka", 2.0),
        TestFixtures::offer_at(4, "Penne", 1.29, "Lidl", 1.0),
    ];

    let groups = group_offers_by_store(&offers);
    let keys: Vec<&str> = groups.iter().map(|group| group.key.as_str()).collect();
    assert_eq!(keys, vec!["Aldi", "Lidl", "Edeka"]);
    assert_eq!(groups[2].items.iter().map(|offer| offer.id.0).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_views_from_a_mocked_item_source() {
    let mut source = MockItemSource::new();
    source
        .expect_offers()
        .times(1)
        .returning(|| Ok(TestFixtures::bananas_and_milk()));

    let offers = source.offers().unwrap();
    let filters = TestHelpers::filters::<OfferFilter>(&["category=dairy"]);
    let view = compute_view(&offers, "", &filters, SortKey::Relevance).unwrap();
    assert_eq!(TestHelpers::ids(&view), vec![2]);
}

#[test]
fn test_marks_survive_a_view_and_leave_other_items_alone() {
    let mut offers = TestFixtures::bananas_and_milk();

    assert!(toggle_favorite(&mut offers, ItemId(2)).unwrap());
    let alert = PriceAlert {
        offer_id: ItemId(1),
        alert_price: 1.49,
        trigger: AlertTrigger::Below,
        notification: NotificationMethod::Email,
    };
    set_price_alert(&mut offers, &alert).unwrap();

    let view = compute_view(&offers, "", &FilterState::new(), SortKey::PriceAsc).unwrap();
    let marks: Vec<(u32, bool, bool)> = view
        .iter()
        .map(|offer| (offer.id.0, offer.is_favorite, offer.has_alert))
        .collect();
    assert_eq!(marks, vec![(2, true, false), (1, false, true)]);

    let mut recipes = TestFixtures::tagged_recipes();
    assert_matches!(
        toggle_favorite(&mut recipes, ItemId(42)),
        Err(CatalogError::ItemNotFound { .. })
    );
    assert!(recipes.iter().all(|recipe| !recipe.is_favorite));
}

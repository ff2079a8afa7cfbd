//! Centralized filter/search state for the product catalog.
//!
//! One `FiltersContext` is created per app session by the layout shell and
//! handed to every consumer through the context tree. All catalog re-fetches
//! go through its trailing-edge debounce; UI code never calls the network
//! directly. Two named reactions drive the store: refetch-on-change (keyed on
//! the serialized state, so equal-value writes never fetch) and
//! prune-on-result (selections absent from a non-empty result set are
//! dropped).

use std::collections::BTreeSet;

use dioxus::core::Task;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::catalog_const::REFETCH_DEBOUNCE_MS;
use common::catalog_query::{
    normalize_search_query, CatalogQueryRequest, PriceSelection, ProductFilter, SortOrder,
};
use common::product::Product;

use crate::api::products_api::query_products;


/// Partial filter update. Each populated field fully replaces the matching
/// field of the current selection; `price` is swapped whole, never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterUpdate {
    pub categories: Option<BTreeSet<String>>,
    pub brands: Option<BTreeSet<String>>,
    pub sort: Option<SortOrder>,
    pub price: Option<PriceSelection>,
}

impl FilterUpdate {
    pub fn apply(self, current: &ProductFilter) -> ProductFilter {
        ProductFilter {
            categories: self.categories.unwrap_or_else(|| current.categories.clone()),
            brands: self.brands.unwrap_or_else(|| current.brands.clone()),
            sort: self.sort.unwrap_or(current.sort),
            price: self.price.unwrap_or_else(|| current.price.clone()),
        }
    }
}

/// Monotonic fetch tickets. Only the most recently issued ticket may apply
/// its response, so a slow early response can never overwrite a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct FetchSequencer {
    issued: u64,
}

impl FetchSequencer {
    pub(crate) fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

/// Intersects the selection with the brand/category values present in a
/// non-empty result set. Returns `None` when nothing would change, so the
/// caller can skip the write and the re-notification it would cause. Empty
/// results never prune; wiping the selection would leave no way back.
pub(crate) fn prune_to_available(
    filter: &ProductFilter,
    products: &[Product],
) -> Option<ProductFilter> {
    if products.is_empty() {
        return None;
    }
    let available_brands: BTreeSet<&str> =
        products.iter().map(|p| p.brand.as_str()).collect();
    let available_categories: BTreeSet<&str> =
        products.iter().map(|p| p.category.as_str()).collect();

    let mut pruned = filter.clone();
    pruned.brands.retain(|b| available_brands.contains(b.as_str()));
    pruned
        .categories
        .retain(|c| available_categories.contains(c.as_str()));

    if pruned == *filter { None } else { Some(pruned) }
}


#[derive(Clone, Copy)]
pub struct FiltersContext {
    filter: Signal<ProductFilter>,
    search_query: Signal<String>,
    products: Signal<Vec<Product>>,
    loading: Signal<bool>,
    pending_refetch: Signal<Option<Task>>,
    sequencer: Signal<FetchSequencer>,
    last_filter_repr: Signal<String>,
    last_query_repr: Signal<String>,
}

/// Creates the store and registers its reactions. Call once, from the layout
/// shell, above every page that consumes it.
pub fn use_filters_provider() -> FiltersContext {
    let ctx = use_context_provider(|| FiltersContext {
        filter: Signal::new(ProductFilter::default()),
        search_query: Signal::new(String::new()),
        products: Signal::new(Vec::new()),
        loading: Signal::new(true),
        pending_refetch: Signal::new(None),
        sequencer: Signal::new(FetchSequencer::default()),
        last_filter_repr: Signal::new(String::new()),
        last_query_repr: Signal::new(String::new()),
    });

    // refetch-on-change: fires once per structural change of
    // (filter, search query), never on equal-value re-notifications
    use_effect(move || ctx.react_to_state_change());

    // prune-on-result: drops selections absent from a non-empty result set
    use_effect(move || ctx.react_to_results());

    ctx
}

pub fn use_filters() -> FiltersContext {
    use_context::<FiltersContext>()
}

impl FiltersContext {
    pub fn filter(&self) -> ReadSignal<ProductFilter> {
        self.filter.into()
    }

    pub fn search_query(&self) -> ReadSignal<String> {
        self.search_query.into()
    }

    pub fn products(&self) -> ReadSignal<Vec<Product>> {
        self.products.into()
    }

    pub fn is_loading(&self) -> ReadSignal<bool> {
        self.loading.into()
    }

    /// Replaces the whole selection atomically and schedules a debounced
    /// re-query.
    pub fn set_filter(&self, new_filter: ProductFilter) {
        let mut filter = self.filter;
        filter.set(new_filter);
        self.debounced_refetch();
    }

    /// Shallow-merges a partial selection and schedules a debounced
    /// re-query.
    pub fn update_filter(&self, update: FilterUpdate) {
        let merged = update.apply(&self.filter.peek());
        let mut filter = self.filter;
        filter.set(merged);
        self.debounced_refetch();
    }

    /// Replaces the free-text query. Does not schedule by itself; the
    /// refetch-on-change reaction picks up any distinct value.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let mut search_query = self.search_query;
        search_query.set(query.into());
    }

    /// Trailing-edge debounce: cancel-and-replace the pending schedule. The
    /// task body snapshots state at fire time, so a burst of calls collapses
    /// to one fetch carrying the state after the last call.
    pub fn debounced_refetch(&self) {
        let mut pending = self.pending_refetch;
        if let Some(task) = pending.take() {
            task.cancel();
        }
        let ctx = *self;
        let task = spawn(async move {
            TimeoutFuture::new(REFETCH_DEBOUNCE_MS).await;
            let mut pending = ctx.pending_refetch;
            pending.set(None);
            ctx.spawn_fetch();
        });
        pending.set(Some(task));
    }

    /// Navigation to the catalog root: defaults back, query cleared.
    pub fn reset_to_root(&self) {
        self.set_filter(ProductFilter::default());
        self.set_search_query(String::new());
        self.debounced_refetch();
    }

    /// Navigation to the search route: defaults back, query taken from the
    /// URL parameter.
    pub fn apply_search_route(&self, route_query: &str) {
        self.set_filter(ProductFilter::default());
        self.set_search_query(normalize_search_query(route_query));
        self.debounced_refetch();
    }

    fn react_to_state_change(&self) {
        let filter_repr =
            serde_json::to_string(&*self.filter.read()).unwrap_or_default();
        let query_repr = self.search_query.read().clone();
        if *self.last_filter_repr.peek() == filter_repr
            && *self.last_query_repr.peek() == query_repr
        {
            return;
        }
        let mut last_filter_repr = self.last_filter_repr;
        let mut last_query_repr = self.last_query_repr;
        last_filter_repr.set(filter_repr);
        last_query_repr.set(query_repr);
        self.debounced_refetch();
    }

    fn react_to_results(&self) {
        let pruned = {
            let products = self.products.read();
            prune_to_available(&self.filter.peek(), products.as_slice())
        };
        if let Some(pruned) = pruned {
            let mut filter = self.filter;
            filter.set(pruned);
        }
    }

    /// Fires one catalog query. The fetch runs as its own task, untracked by
    /// the debounce handle: a superseding schedule never cancels it, the
    /// sequencer just discards its response if it comes back stale.
    fn spawn_fetch(&self) {
        let mut sequencer = self.sequencer;
        let ticket = sequencer.write().issue();
        let request =
            CatalogQueryRequest::from_state(&self.filter.peek(), &self.search_query.peek());
        let mut loading = self.loading;
        loading.set(true);

        let ctx = *self;
        spawn(async move {
            let response = query_products(request).await;
            if !ctx.sequencer.peek().is_current(ticket) {
                return;
            }
            let mut products = ctx.products;
            let mut loading = ctx.loading;
            match response {
                Ok(list) => products.set(list),
                Err(err) => {
                    error!("catalog query failed: {err}");
                    products.set(Vec::new());
                }
            }
            loading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, brand: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("{brand} {category}"),
            brand: brand.to_string(),
            category: category.to_string(),
            price: 19.99,
            suggested_use: "One serving daily.".to_string(),
            image_url: format!("{id}.webp"),
        }
    }

    #[test]
    fn test_sequencer_latest_ticket_wins() {
        let mut sequencer = FetchSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_update_replaces_named_fields_and_keeps_the_rest() {
        let current = ProductFilter::default();
        let update = FilterUpdate {
            brands: Some(BTreeSet::new()),
            sort: Some(SortOrder::PriceDesc),
            ..Default::default()
        };
        let merged = update.apply(&current);
        assert!(merged.brands.is_empty());
        assert_eq!(merged.sort, SortOrder::PriceDesc);
        assert_eq!(merged.categories, current.categories);
        assert_eq!(merged.price, current.price);
    }

    #[test]
    fn test_update_swaps_price_whole() {
        let mut current = ProductFilter::default();
        current.price = PriceSelection { is_custom: true, range: (10.0, 40.0) };
        let update = FilterUpdate {
            price: Some(PriceSelection { is_custom: false, range: (0.0, 25.0) }),
            ..Default::default()
        };
        let merged = update.apply(&current);
        assert_eq!(merged.price, PriceSelection { is_custom: false, range: (0.0, 25.0) });
    }

    #[test]
    fn test_noop_update_keeps_serialized_state_equal() {
        let current = ProductFilter::default();
        let update = FilterUpdate {
            categories: Some(current.categories.clone()),
            ..Default::default()
        };
        let merged = update.clone().apply(&current);
        // same serialized form means the refetch-on-change reaction stays quiet
        assert_eq!(
            serde_json::to_string(&merged).unwrap(),
            serde_json::to_string(&current).unwrap()
        );
        let remerged = update.apply(&merged);
        assert_eq!(remerged, merged);
    }

    #[test]
    fn test_prune_keeps_only_values_present_in_results() {
        let filter = ProductFilter::default();
        let results = vec![
            product("p1", "MyProtein", "creatine"),
            product("p2", "MyProtein", "whey protein"),
        ];
        let pruned = prune_to_available(&filter, &results).expect("selection shrinks");
        assert_eq!(
            pruned.brands.iter().map(|b| b.as_str()).collect::<Vec<_>>(),
            vec!["MyProtein"]
        );
        assert!(pruned.categories.iter().all(|c| {
            results.iter().any(|p| &p.category == c)
        }));
    }

    #[test]
    fn test_prune_is_a_noop_when_selection_already_matches() {
        let mut filter = ProductFilter::default();
        filter.brands = BTreeSet::from(["MyProtein".to_string()]);
        filter.categories = BTreeSet::from(["creatine".to_string()]);
        let results = vec![product("p1", "MyProtein", "creatine")];
        assert_eq!(prune_to_available(&filter, &results), None);
    }

    #[test]
    fn test_empty_results_never_prune() {
        let filter = ProductFilter::default();
        assert_eq!(prune_to_available(&filter, &[]), None);
    }
}

//! Shared catalog constants.

/// Upper bound on the number of products a single catalog query returns.
pub const RESULT_LIMIT: i64 = 100;

/// Maximum number of autocomplete suggestions shown under the searchbar.
pub const SUGGESTION_LIMIT: usize = 8;

/// Quiet period of the store's trailing-edge refetch debounce.
pub const REFETCH_DEBOUNCE_MS: u32 = 400;

/// Quiet period of the searchbar's suggestion/URL-sync debounce.
pub const SEARCHBAR_DEBOUNCE_MS: u32 = 300;

pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 100.0);

pub const PRICE_SLIDER_STEP: f64 = 5.0;

/// Preset price bounds offered in the sidebar, paired with their labels.
pub const PRICE_PRESETS: [((f64, f64), &str); 4] = [
    ((0.0, 100.0), "Any price"),
    ((0.0, 25.0), "Under £25"),
    ((0.0, 50.0), "Under £50"),
    ((0.0, 75.0), "Under £75"),
];

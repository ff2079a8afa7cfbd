//! Dual-bound price range slider.

use dioxus::prelude::*;

/// Two range inputs over a shared track. The bounds clamp against each other
/// so the low thumb can never pass the high one.
#[component]
pub fn PriceRangeSlider(
    range: ReadSignal<(f64, f64)>,
    min: f64,
    max: f64,
    step: f64,
    onchange: Callback<(f64, f64)>,
) -> Element {
    let (low, high) = *range.read();
    let fill_left = to_percentage(low, min, max);
    let fill_width = (to_percentage(high, min, max) - fill_left).max(0.0);

    rsx! {
        div {
            class: "x-price-slider",
            div {
                class: "x-price-slider-track",
                div {
                    class: "x-price-slider-fill",
                    style: "left: {fill_left}%; width: {fill_width}%;",
                }
            }
            div {
                class: "x-price-slider-inputs",
                input {
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    step: "{step}",
                    value: "{low}",
                    aria_label: "Minimum price",
                    oninput: move |event: Event<FormData>| {
                        let value = event.value().parse::<f64>().unwrap_or(low);
                        let (_, current_high) = *range.peek();
                        onchange((value.min(current_high), current_high));
                    },
                }
                input {
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    step: "{step}",
                    value: "{high}",
                    aria_label: "Maximum price",
                    oninput: move |event: Event<FormData>| {
                        let value = event.value().parse::<f64>().unwrap_or(high);
                        let (current_low, _) = *range.peek();
                        onchange((current_low, value.max(current_low)));
                    },
                }
            }
            div {
                class: "x-price-slider-labels",
                span { "£{low}" }
                span { "£{high}" }
            }
        }
    }
}

/// Maps a price to its position on the track, clamped to [0, 100].
pub(crate) fn to_percentage(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_of_bounds() {
        assert_eq!(to_percentage(0.0, 0.0, 100.0), 0.0);
        assert_eq!(to_percentage(100.0, 0.0, 100.0), 100.0);
        assert_eq!(to_percentage(25.0, 0.0, 100.0), 25.0);
    }

    #[test]
    fn test_percentage_clamps_out_of_range_values() {
        assert_eq!(to_percentage(150.0, 0.0, 100.0), 100.0);
        assert_eq!(to_percentage(-10.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_degenerate_track_collapses_to_zero() {
        assert_eq!(to_percentage(50.0, 100.0, 100.0), 0.0);
    }
}

use rust_decimal::Decimal;

use crate::config::{Palette, SliderBounds};

/// position of `value` between `min` and `max` as a percentage in `[0, 100]`
pub fn percentage_of(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    if max <= min {
        return Decimal::ZERO;
    }
    let clamped = value.max(min).min(max);
    max.checked_sub(min)
        .and_then(|range| (clamped - min).checked_div(range))
        .map(|fraction| fraction * Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO)
}

/// fill percentage of a slider at `value`
pub fn fill_percentage(bounds: &SliderBounds, value: Decimal) -> Decimal {
    percentage_of(value, bounds.min, bounds.max)
}

/// css background for a range input filled up to `percentage`
pub fn fill_gradient(percentage: Decimal, palette: &Palette) -> String {
    let pct = percentage.round_dp(2).normalize();
    format!(
        "linear-gradient(to right, {fill} 0%, {fill} {pct}%, {track} {pct}%, {track} 100%)",
        fill = palette.principal,
        track = palette.track,
        pct = pct,
    )
}

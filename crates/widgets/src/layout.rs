//! Column widths, rules and the memory breakdown bar.

use crate::markup::visible_len;

/// Widest visible line in `lines`, or `0` for none.
pub fn content_width<I, S>(lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|l| visible_len(l.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Solid horizontal rule.
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Dashed rule separating sub-tables.
pub fn dash_rule(width: usize) -> String {
    "-".repeat(width)
}

/// Left padding that centres a block of `inner` columns in `width`.
pub fn center_pad(width: usize, inner: usize) -> String {
    " ".repeat(width.saturating_sub(inner) / 2)
}

/// Split `width` blocks between used / cached / buffers / free.
///
/// The first three are floor-truncated shares of `width`; free takes the
/// remainder, so the four counts always add up to `width`. Shares past 100%
/// are clamped in order.
pub fn breakdown_blocks(used_pct: f64, cached_pct: f64, buffers_pct: f64, width: usize) -> [usize; 4] {
    let blocks = |pct: f64| -> usize {
        if pct.is_finite() && pct > 0.0 {
            (pct / 100.0 * width as f64).floor() as usize
        } else {
            0
        }
    };

    let used = blocks(used_pct).min(width);
    let cached = blocks(cached_pct).min(width - used);
    let buffers = blocks(buffers_pct).min(width - used - cached);
    let free = width - used - cached - buffers;
    [used, cached, buffers, free]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn content_width_counts_visible_chars() {
        let lines = ["<span foreground='#ffffff'>abc</span>", "abcd", "°C"];
        assert_eq!(content_width(lines), 4);
        assert_eq!(content_width(Vec::<String>::new()), 0);
    }

    #[test]
    fn rules_have_requested_width() {
        assert_eq!(rule(3), "───");
        assert_eq!(dash_rule(2), "--");
    }

    #[test]
    fn center_pad_never_underflows() {
        assert_eq!(center_pad(70, 25), " ".repeat(22));
        assert_eq!(center_pad(10, 25), "");
    }

    #[test]
    fn free_absorbs_rounding() {
        // 33.3% of 70 = 23.31 → 23 each, free gets 70 - 69
        assert_eq!(breakdown_blocks(33.3, 33.3, 33.3, 70), [23, 23, 23, 1]);
    }

    #[test]
    fn oversubscribed_shares_are_clamped() {
        assert_eq!(breakdown_blocks(80.0, 30.0, 10.0, 10), [8, 2, 0, 0]);
        assert_eq!(breakdown_blocks(150.0, 0.0, 0.0, 10), [10, 0, 0, 0]);
    }

    #[test]
    fn nonsense_shares_are_empty() {
        assert_eq!(breakdown_blocks(f64::NAN, -4.0, 0.0, 5), [0, 0, 0, 5]);
    }

    proptest! {
        #[test]
        fn blocks_sum_to_width(
            used in 0.0f64..=100.0,
            cached in 0.0f64..=100.0,
            buffers in 0.0f64..=100.0,
            width in 0usize..300,
        ) {
            let total: usize = breakdown_blocks(used, cached, buffers, width).iter().sum();
            prop_assert_eq!(total, width);
        }
    }
}

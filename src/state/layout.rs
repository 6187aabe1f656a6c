//! Layout math for the gallery: column counts, masonry balancing and the
//! text truncation used on cards. Kept free of widgets so it can be tested.

use std::ops::Range;

/// Widest the page content grows, in logical pixels
pub const MAX_CONTENT_WIDTH: f32 = 1280.0;
/// Horizontal page padding on each side
pub const PAGE_PADDING: f32 = 16.0;
/// Gap between cards, both directions
pub const CARD_SPACING: f32 = 24.0;
/// Image height of a grid card
pub const GRID_IMAGE_HEIGHT: f32 = 256.0;
/// Estimated height of a card's text block (title, prompt, tags)
pub const CARD_BODY_HEIGHT: f32 = 150.0;
/// Height/width ratio assumed until an image has loaded (400x300)
pub const DEFAULT_ASPECT: f32 = 0.75;
/// Tags shown on a card before collapsing into "+N"
pub const MAX_CARD_TAGS: usize = 3;
/// Roughly two lines of prompt text on a card
pub const PROMPT_PREVIEW_CHARS: usize = 90;

/// Number of columns for a window width: 1 / 2 / 3 / 4 at the
/// 768, 1024 and 1280 breakpoints.
pub fn column_count(window_width: f32) -> usize {
    if window_width < 768.0 {
        1
    } else if window_width < 1024.0 {
        2
    } else if window_width < 1280.0 {
        3
    } else {
        4
    }
}

/// Width available to the cards once padding and the content cap apply
pub fn content_width(window_width: f32) -> f32 {
    (window_width.min(MAX_CONTENT_WIDTH) - 2.0 * PAGE_PADDING).max(0.0)
}

/// Width of one column for a window width
pub fn column_width(window_width: f32) -> f32 {
    let columns = column_count(window_width) as f32;
    ((content_width(window_width) - (columns - 1.0) * CARD_SPACING) / columns).max(0.0)
}

/// Height of the image area of a masonry card, keeping the image aspect
pub fn masonry_image_height(aspect: Option<f32>, column_width: f32) -> f32 {
    let aspect = aspect.filter(|a| a.is_finite() && *a > 0.0).unwrap_or(DEFAULT_ASPECT);
    column_width * aspect
}

/// Estimated total height of a masonry card
pub fn masonry_card_height(aspect: Option<f32>, column_width: f32) -> f32 {
    masonry_image_height(aspect, column_width) + CARD_BODY_HEIGHT
}

/// Bisection steps when searching for the tallest column; f32 precision
/// is exhausted well before this
const BALANCE_STEPS: usize = 40;

/// Split cards into at most `columns` contiguous runs, in order, so that
/// the tallest column is as short as possible.
///
/// Cards flow top to bottom through the first column, then the next,
/// exactly like CSS multi-column layout. Every returned range is non-empty
/// and `min(columns, cards)` ranges are returned.
///
/// Bisects on the tallest column height with a greedy fill as the
/// feasibility check, so the cost is O(n) per step.
pub fn balance_columns(heights: &[f32], columns: usize) -> Vec<Range<usize>> {
    let n = heights.len();
    if n == 0 {
        return Vec::new();
    }
    let k = columns.clamp(1, n);
    let heights: Vec<f32> = heights.iter().map(|height| height.max(0.0)).collect();

    // `high` always fits in k columns, `low` never does (or is the tallest card)
    let mut low = heights.iter().copied().fold(0.0, f32::max);
    let mut high: f32 = heights.iter().sum();
    for _ in 0..BALANCE_STEPS {
        let mid = low + (high - low) / 2.0;
        if mid <= low || mid >= high {
            break;
        }
        if fill_columns(&heights, mid).len() <= k {
            high = mid;
        } else {
            low = mid;
        }
    }

    let mut ranges = fill_columns(&heights, high);
    // use every column: splitting a run never makes the tallest one taller
    while ranges.len() < k {
        let Some(index) = ranges.iter().rposition(|range| range.len() > 1) else {
            break;
        };
        let range = ranges[index].clone();
        ranges[index] = range.start..range.end - 1;
        ranges.insert(index + 1, range.end - 1..range.end);
    }
    ranges
}

/// Greedily pack cards into columns no taller than `cap`. A card taller
/// than `cap` still gets a column of its own.
fn fill_columns(heights: &[f32], cap: f32) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut filled = 0.0;
    for (i, height) in heights.iter().enumerate() {
        if i > start && filled + height > cap {
            ranges.push(start..i);
            start = i;
            filled = 0.0;
        }
        filled += height;
    }
    ranges.push(start..heights.len());
    ranges
}

/// Shorten a prompt for a card, appending an ellipsis when cut.
pub fn truncate_prompt(prompt: &str, max_chars: usize) -> String {
    match prompt.char_indices().nth(max_chars) {
        None => prompt.to_string(),
        Some((cut, _)) => {
            let mut short = prompt[..cut].trim_end().to_string();
            short.push('…');
            short
        }
    }
}

/// Tags shown on a card, and how many more are hidden
pub fn visible_tags(tags: &[String]) -> (&[String], usize) {
    let shown = tags.len().min(MAX_CARD_TAGS);
    (&tags[..shown], tags.len() - shown)
}

//! Icon sizing for the spotlight list view.
//!
//! Spotlight icons fill the whole list view: one icon per "page" with a
//! one-line label underneath. The computed size is also the resolution at
//! which thumbnails are captured, so it must track the view on every resize.

use crate::util::constants::ICON_EXTRA_MARGIN;

/// Width/height pair in logical pixels. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` if either dimension is zero (nothing can be drawn).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Geometry of a list view as reported by the UI on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListViewMetrics {
    /// Current width of the list view.
    pub width: i32,
    /// Current height of the list view.
    pub height: i32,
    /// Spacing around each item.
    pub spacing: i32,
    /// Height of one line of label text.
    pub label_height: i32,
}

impl ListViewMetrics {
    pub const fn new(width: i32, height: i32, spacing: i32, label_height: i32) -> Self {
        Self {
            width,
            height,
            spacing,
            label_height,
        }
    }
}

/// Compute the spotlight icon size for a list view of the given geometry.
///
/// `width - margin - 2*spacing` by `height - margin - label - 2*spacing`,
/// each clamped at zero.
pub fn compute_icon_size(metrics: &ListViewMetrics) -> IconSize {
    let spacing = metrics.spacing.saturating_mul(2);

    let w = metrics
        .width
        .saturating_sub(ICON_EXTRA_MARGIN)
        .saturating_sub(spacing);
    let h = metrics
        .height
        .saturating_sub(ICON_EXTRA_MARGIN)
        .saturating_sub(metrics.label_height)
        .saturating_sub(spacing);

    IconSize::new(clamp_non_negative(w), clamp_non_negative(h))
}

fn clamp_non_negative(v: i32) -> u32 {
    u32::try_from(v).unwrap_or(0)
}

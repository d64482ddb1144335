//! Scroll-into-view for a fixed-height window.
//!
//! Both widgets keep a `start_y` offset over content that is taller than
//! their viewport. [`reflow`] moves that offset the minimum distance needed
//! to bring a target line back into the window.

/// Recompute the first visible line so that `target` (1-based) is visible.
///
/// Content shorter than the window is never scrolled. Otherwise the window
/// retreats when the target is above it and advances when it is below it,
/// retreat taking precedence.
#[must_use]
pub fn reflow(start_y: usize, target: usize, total: usize, height: usize) -> usize {
    if total < height {
        return 0;
    }

    let target_top = target.saturating_sub(1);
    let new_start = if start_y > target_top {
        target_top
    } else if target > start_y + height {
        target - height
    } else {
        start_y
    };

    debug_assert!(
        total == 0 || new_start < total,
        "scroll offset {new_start} outside of {total} lines"
    );
    new_start
}

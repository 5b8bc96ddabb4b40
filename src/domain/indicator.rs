//! Rendering seams driven by a filter pass.
//!
//! The filter engine is pure; whatever displays the listings implements two
//! small traits so a pass can be applied to it:
//!
//! - [`VisibilityRenderer`] receives one shown/hidden flag per listing.
//! - [`IndicatorHost`] owns the singleton "no results" indicator, which
//!   [`sync_indicator`] attaches or detaches idempotently.

/// Instructional text carried by the empty-state indicator.
pub const EMPTY_RESULTS_MESSAGE: &str =
    "No properties found matching your criteria. Try adjusting your filters.";

/// Applies per-listing visibility flags to a presentation.
pub trait VisibilityRenderer {
    /// Shows or hides the listing at `index`.
    fn set_visible(&mut self, index: usize, visible: bool);
}

/// Holder of the singleton empty-state indicator.
pub trait IndicatorHost {
    /// Returns whether an indicator is currently attached.
    fn indicator_present(&self) -> bool;

    /// Attaches an indicator with the given text.
    ///
    /// Only called by [`sync_indicator`] when no indicator is present.
    fn attach_indicator(&mut self, message: &str);

    /// Removes the attached indicator.
    ///
    /// Only called by [`sync_indicator`] when an indicator is present.
    fn detach_indicator(&mut self);
}

/// Presence of the empty-state indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Shown,
    Hidden,
}

impl IndicatorState {
    /// The state a pass with the given aggregate must leave behind.
    #[must_use]
    pub const fn for_results(has_any_visible: bool) -> Self {
        if has_any_visible {
            Self::Hidden
        } else {
            Self::Shown
        }
    }
}

/// What [`sync_indicator`] did to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorChange {
    Attached,
    Detached,
    Unchanged,
}

/// Brings the host's indicator in line with `has_any_visible`.
///
/// Attaches one indicator when nothing is visible and none is present, and
/// detaches it when something is visible. Calling this repeatedly with the
/// same value is a no-op after the first call.
///
/// # Examples
///
/// ```
/// use propsift::domain::indicator::{sync_indicator, IndicatorChange, IndicatorHost};
///
/// #[derive(Default)]
/// struct Grid { notices: Vec<String> }
///
/// impl IndicatorHost for Grid {
///     fn indicator_present(&self) -> bool { !self.notices.is_empty() }
///     fn attach_indicator(&mut self, message: &str) { self.notices.push(message.to_string()); }
///     fn detach_indicator(&mut self) { self.notices.clear(); }
/// }
///
/// let mut grid = Grid::default();
/// assert_eq!(sync_indicator(&mut grid, false), IndicatorChange::Attached);
/// assert_eq!(sync_indicator(&mut grid, false), IndicatorChange::Unchanged);
/// assert_eq!(grid.notices.len(), 1);
/// assert_eq!(sync_indicator(&mut grid, true), IndicatorChange::Detached);
/// assert!(grid.notices.is_empty());
/// ```
pub fn sync_indicator<H>(host: &mut H, has_any_visible: bool) -> IndicatorChange
where
    H: IndicatorHost + ?Sized,
{
    match (IndicatorState::for_results(has_any_visible), host.indicator_present()) {
        (IndicatorState::Shown, false) => {
            host.attach_indicator(EMPTY_RESULTS_MESSAGE);
            IndicatorChange::Attached
        }
        (IndicatorState::Hidden, true) => {
            host.detach_indicator();
            IndicatorChange::Detached
        }
        _ => IndicatorChange::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHost {
        attached: usize,
        attach_calls: usize,
        detach_calls: usize,
    }

    impl IndicatorHost for CountingHost {
        fn indicator_present(&self) -> bool {
            self.attached > 0
        }

        fn attach_indicator(&mut self, message: &str) {
            assert_eq!(message, EMPTY_RESULTS_MESSAGE);
            self.attached += 1;
            self.attach_calls += 1;
        }

        fn detach_indicator(&mut self) {
            self.attached -= 1;
            self.detach_calls += 1;
        }
    }

    #[test]
    fn repeated_empty_passes_attach_once() {
        let mut host = CountingHost::default();
        for _ in 0..5 {
            sync_indicator(&mut host, false);
        }
        assert_eq!(host.attached, 1);
        assert_eq!(host.attach_calls, 1);
    }

    #[test]
    fn visible_results_without_indicator_do_nothing() {
        let mut host = CountingHost::default();
        assert_eq!(sync_indicator(&mut host, true), IndicatorChange::Unchanged);
        assert_eq!(host.detach_calls, 0);
    }

    #[test]
    fn toggling_alternates_attach_and_detach() {
        let mut host = CountingHost::default();
        let changes: Vec<_> = [false, true, false, true]
            .into_iter()
            .map(|visible| sync_indicator(&mut host, visible))
            .collect();
        assert_eq!(
            changes,
            vec![
                IndicatorChange::Attached,
                IndicatorChange::Detached,
                IndicatorChange::Attached,
                IndicatorChange::Detached,
            ]
        );
        assert_eq!(host.attached, 0);
    }

    #[test]
    fn works_through_trait_objects() {
        let mut host = CountingHost::default();
        let dyn_host: &mut dyn IndicatorHost = &mut host;
        sync_indicator(dyn_host, false);
        assert!(host.indicator_present());
    }
}

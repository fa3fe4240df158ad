//! Viewport breakpoints and a hook that tracks the current one.

use leptos::*;

use super::dom::{listen, viewport_width};

/// Named viewport-width ranges, ordered from narrowest to widest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Breakpoint {
    /// Upper bound (inclusive, CSS pixels) of every range except the last.
    const LIMITS: [(f64, Breakpoint); 4] = [
        (480.0, Breakpoint::ExtraSmall),
        (768.0, Breakpoint::Small),
        (992.0, Breakpoint::Medium),
        (1200.0, Breakpoint::Large),
    ];

    pub fn from_width(width: f64) -> Self {
        Self::LIMITS
            .iter()
            .find(|(limit, _)| width <= *limit)
            .map(|(_, breakpoint)| *breakpoint)
            .unwrap_or(Breakpoint::ExtraLarge)
    }

    /// True once the viewport is wider than the small range.
    pub fn is_above_small(self) -> bool {
        self > Breakpoint::Small
    }
}

/// Reactive breakpoint of the browser window, updated on resize.
///
/// Falls back to `Breakpoint::ExtraSmall` when no window is available.
pub fn use_breakpoint() -> Signal<Breakpoint> {
    let breakpoint = create_rw_signal(
        viewport_width()
            .map(Breakpoint::from_width)
            .unwrap_or(Breakpoint::ExtraSmall),
    );

    if let Some(window) = web_sys::window() {
        listen(window.into(), "resize", move |_: web_sys::Event| {
            if let Some(width) = viewport_width() {
                let next = Breakpoint::from_width(width);
                if breakpoint.get_untracked() != next {
                    breakpoint.set(next);
                }
            }
        });
    }

    breakpoint.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width_boundaries() {
        assert_eq!(Breakpoint::from_width(0.0), Breakpoint::ExtraSmall);
        assert_eq!(Breakpoint::from_width(480.0), Breakpoint::ExtraSmall);
        assert_eq!(Breakpoint::from_width(481.0), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(768.5), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(992.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(1200.0), Breakpoint::Large);
        assert_eq!(Breakpoint::from_width(1920.0), Breakpoint::ExtraLarge);
    }

    #[test]
    fn test_is_above_small() {
        assert!(!Breakpoint::ExtraSmall.is_above_small());
        assert!(!Breakpoint::Small.is_above_small());
        assert!(Breakpoint::Medium.is_above_small());
        assert!(Breakpoint::Large.is_above_small());
        assert!(Breakpoint::ExtraLarge.is_above_small());
    }
}

/// Viewport rectangle of the element a dropdown hangs off.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Anchor {
    pub fn from_rect(rect: &web_sys::DomRect) -> Self {
        Self {
            top: rect.top(),
            left: rect.left(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Inline style placing a fixed-position menu under the anchor, right-aligned to it.
    pub fn menu_style(&self, viewport_width: f64) -> String {
        let top = self.top + self.height;
        let right = (viewport_width - (self.left + self.width)).max(0.0);
        format!("position: fixed; top: {}px; right: {}px;", top, right)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DropdownState {
    #[default]
    Closed,
    OpenAt(Anchor),
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        matches!(self, DropdownState::OpenAt(_))
    }

    pub fn anchor(&self) -> Option<Anchor> {
        match self {
            DropdownState::OpenAt(anchor) => Some(*anchor),
            DropdownState::Closed => None,
        }
    }

    pub fn open_at(&mut self, anchor: Anchor) {
        *self = DropdownState::OpenAt(anchor);
    }

    pub fn close(&mut self) {
        *self = DropdownState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_anchor() -> Anchor {
        Anchor {
            top: 8.0,
            left: 900.0,
            width: 40.0,
            height: 40.0,
        }
    }

    #[test]
    fn test_starts_closed() {
        let state = DropdownState::default();
        assert!(!state.is_open());
        assert_eq!(state.anchor(), None);
    }

    #[test]
    fn test_open_records_anchor() {
        let mut state = DropdownState::default();
        state.open_at(button_anchor());
        assert!(state.is_open());
        assert_eq!(state.anchor(), Some(button_anchor()));
    }

    #[test]
    fn test_close_clears_anchor() {
        let mut state = DropdownState::OpenAt(button_anchor());
        state.close();
        assert_eq!(state, DropdownState::Closed);
        assert_eq!(state.anchor(), None);

        state.close();
        assert_eq!(state, DropdownState::Closed);
    }

    #[test]
    fn test_reopen_moves_anchor() {
        let mut state = DropdownState::default();
        state.open_at(button_anchor());
        let moved = Anchor {
            left: 600.0,
            ..button_anchor()
        };
        state.open_at(moved);
        assert_eq!(state.anchor(), Some(moved));
    }

    #[test]
    fn test_menu_style_aligns_to_anchor() {
        let style = button_anchor().menu_style(1000.0);
        assert_eq!(style, "position: fixed; top: 48px; right: 60px;");

        let overflowing = Anchor {
            left: 990.0,
            ..button_anchor()
        };
        assert_eq!(
            overflowing.menu_style(1000.0),
            "position: fixed; top: 48px; right: 0px;"
        );
    }
}

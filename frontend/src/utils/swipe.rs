//! Horizontal swipe detection for the navigation drawer.

/// Touches starting this close to the left screen edge may open the drawer.
pub const EDGE_WIDTH: f64 = 20.0;
/// Minimum horizontal travel for a touch to count as a swipe.
pub const MIN_TRAVEL: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

pub fn starts_at_edge(start_x: f64) -> bool {
    (0.0..=EDGE_WIDTH).contains(&start_x)
}

pub fn classify(start_x: f64, end_x: f64) -> Option<SwipeDirection> {
    let travel = end_x - start_x;
    if travel >= MIN_TRAVEL {
        Some(SwipeDirection::Right)
    } else if travel <= -MIN_TRAVEL {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// An edge swipe to the right opens the drawer.
pub fn is_open_gesture(start_x: f64, end_x: f64) -> bool {
    starts_at_edge(start_x) && classify(start_x, end_x) == Some(SwipeDirection::Right)
}

/// Any leftward swipe over the open drawer closes it.
pub fn is_close_gesture(start_x: f64, end_x: f64) -> bool {
    classify(start_x, end_x) == Some(SwipeDirection::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_requires_min_travel() {
        assert_eq!(classify(100.0, 149.0), None);
        assert_eq!(classify(100.0, 150.0), Some(SwipeDirection::Right));
        assert_eq!(classify(100.0, 50.0), Some(SwipeDirection::Left));
        assert_eq!(classify(100.0, 51.0), None);
    }

    #[test]
    fn test_open_gesture_starts_at_edge() {
        assert!(is_open_gesture(5.0, 120.0));
        assert!(is_open_gesture(20.0, 70.0));
        assert!(!is_open_gesture(21.0, 200.0));
        assert!(!is_open_gesture(5.0, 30.0));
    }

    #[test]
    fn test_close_gesture_is_leftward() {
        assert!(is_close_gesture(250.0, 120.0));
        assert!(!is_close_gesture(120.0, 250.0));
        assert!(!is_close_gesture(250.0, 230.0));
    }
}

use astroplan_types::Rect;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

// Use a small epsilon to handle floating point inaccuracies
const EPSILON: f32 = 0.01;

/// Centralized logic to check if a flowable fits in the remaining frame space.
///
/// * `consumed`: How far the cursor has moved down from the top of `bounds`.
/// * `child_height`: The required height for the flowable.
/// * `bounds`: The content rectangle of the current frame.
pub fn check_child_fit(consumed: f32, child_height: f32, bounds: Rect) -> BreakAnalysis {
    let available = (bounds.height - consumed).max(0.0);
    BreakAnalysis {
        should_break: child_height > available + EPSILON,
        remaining_height: available,
    }
}

/// True when nothing has been placed in the frame yet.
pub fn at_frame_top(consumed: f32) -> bool {
    consumed <= EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_does_not_break() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        let analysis = check_child_fit(20.0, 30.005, bounds);
        assert!(!analysis.should_break);
        assert_eq!(analysis.remaining_height, 30.0);
    }

    #[test]
    fn overflow_breaks_and_clamps_remaining() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        let analysis = check_child_fit(60.0, 1.0, bounds);
        assert!(analysis.should_break);
        assert_eq!(analysis.remaining_height, 0.0);
    }
}

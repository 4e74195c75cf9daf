//! Line renderer for the mdline markdown dialect
//!
//!     mdline is a deliberately flat markdown: one classification per line, no nesting, no
//!     links, headings or lists. A document renders to either structured markup (html tags)
//!     or terminal escapes (ansi).
//!
//!     This is a pure lib, that is, it powers mdline-cli but is shell agnostic. No code here
//!     reads files, prints, or looks at env vars.
//!
//! Architecture
//!
//!     - Document: the source split on line feeds, see [document](document).
//!     - Validation: every line must carry an even number of bold and italic markers, see
//!       [validation](validation). This runs before classification, for every line.
//!     - Classification: a small state machine that tags each line with a [LineKind] given
//!       whether we are inside a preformatted block, see [classification](classification).
//!     - Format trait: one emitter per line category, see [format](format). The two built-in
//!       formats live under [formats](formats).
//!     - Renderer: the single pass that ties it together, see [renderer](renderer).
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── document.rs
//!     ├── token.rs            # logos tokens for inline markers
//!     ├── validation.rs
//!     ├── classification.rs
//!     ├── inlines.rs          # paired markers inside a line
//!     ├── format.rs           # Format trait definition
//!     ├── registry.rs         # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── html.rs
//!     │   ├── ansi.rs
//!     │   └── mod.rs
//!     ├── renderer.rs
//!     ├── inspect.rs
//!     └── lib.rs
//!
//! The Grammar
//!
//!     A line is, in this order:
//!         - inside a preformatted block: a closing fence or verbatim content
//!         - a fence: exactly ``` after trimming
//!         - bold: trimmed text starts and ends with **
//!         - italic: trimmed text starts and ends with _
//!         - a span line: trimmed text starts and ends with any marker, and no text line
//!           sits directly above or below it (otherwise it is text)
//!         - blank
//!         - text

pub mod classification;
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod inlines;
pub mod inspect;
pub mod registry;
pub mod renderer;
pub mod token;
pub mod validation;

pub use classification::{Classifier, LineKind};
pub use document::Document;
pub use error::{Marker, RenderError};
pub use format::{Format, LineContext, RenderSummary};
pub use formats::{AnsiFormat, HtmlFormat, Representation};
pub use inspect::{inspect, LineCategory, LineRecord};
pub use registry::FormatRegistry;
pub use renderer::{render, render_with};

//! Renders parsed MFM (Misskey Flavored Markup) node trees to HTML.
//!
//! This crate consumes the tree an external parser produced (the
//! [`mfm_tree`] types) and emits one HTML string per call. It never
//! parses, never touches the network, and keeps no state between calls;
//! concurrent renders are independent.
//!
//! Every rendered element carries a `data-mfm` attribute naming its
//! source construct, giving consumers a stable styling hook. The whole
//! output is wrapped in a root tag carrying `data-mfm="root"`.
//!
//! # Example
//!
//! ```
//! use mfm_html::{RenderConfig, to_html};
//! use mfm_tree::MfmNode;
//!
//! let nodes = vec![MfmNode::Bold {
//!     children: vec![MfmNode::text("hello")],
//! }];
//! let html = to_html(&nodes, &RenderConfig::default()).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<p data-mfm="root"><b data-mfm="bold"><span data-mfm="text">hello</span></b></p>"#
//! );
//! ```
//!
//! # Security
//!
//! This is not an HTML sanitizer. Text content and attribute values are
//! escaped, with one deliberate exception: block-code content passes
//! through verbatim so pre-highlighted markup survives. Callers are
//! responsible for ensuring block-code content is safe to embed.

mod html;
mod renderer;
mod resolve;
mod util;

pub use html::escape_html;
pub use mfm_tree::{FnArg, MfmNode};
pub use renderer::{RenderConfig, RenderError, to_html};

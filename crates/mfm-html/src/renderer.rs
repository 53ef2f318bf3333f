//! Tree-to-HTML rendering engine.
//!
//! A single [`to_html`] call walks the node sequence depth-first in
//! pre-order, building one [`HtmlNode`] per input node and serializing the
//! result inside a root wrapper tag. The only state carried across the walk
//! is the per-call animation budget in [`RenderState`]; nothing survives
//! between calls, so concurrent renders on separate threads are
//! independent.

use mfm_tree::MfmNode;

use crate::html::{Element, HtmlNode};
use crate::resolve::{emoji_image_url, hashtag_url, mention_url, search_url};
use crate::util::{intersperse, split_line_breaks};

/// Wrapper tag used when [`RenderConfig::root_tag_name`] is unset.
const DEFAULT_ROOT_TAG: &str = "p";

/// How many nodes of each animatable kind receive an animation class.
const ANIMATION_BUDGET: u32 = 3;

/// Configuration for one render call.
///
/// All options are optional; `RenderConfig::default()` renders with
/// relative links, no animation, semantic code tags, and a `<p>` root.
#[derive(Clone, Debug, Default)]
pub struct RenderConfig {
    /// Instance host (e.g. `social.example`) used to build absolute links
    /// for mentions and hashtags and image URLs for custom emoji.
    ///
    /// If `None`, mentions and hashtags get relative hrefs and custom
    /// emoji fall back to their literal `:name:` shortcode.
    pub url: Option<String>,
    /// Attach animation classes to the first few big/motion nodes.
    pub animate: bool,
    /// Render code containers as `<div>`/`<span>` instead of
    /// `<pre>`/`<code>`, for embedding contexts that forbid semantic code
    /// elements.
    pub code_tag_as_div: bool,
    /// Tag name wrapping the whole output. Defaults to `p`.
    pub root_tag_name: Option<String>,
}

impl RenderConfig {
    /// Set the instance host.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Enable or disable animation classes.
    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Swap code containers for generic `<div>`/`<span>` elements.
    #[must_use]
    pub fn with_code_tag_as_div(mut self, as_div: bool) -> Self {
        self.code_tag_as_div = as_div;
        self
    }

    /// Override the root wrapper tag.
    #[must_use]
    pub fn with_root_tag_name(mut self, tag: impl Into<String>) -> Self {
        self.root_tag_name = Some(tag.into());
        self
    }
}

/// Error returned when rendering fails.
///
/// A render call either fully succeeds or fails; no partial output is
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Node kind with no dispatch entry (a parser newer than this
    /// renderer produced the tree).
    #[error("unsupported node kind: {0}")]
    UnsupportedNodeKind(&'static str),
    /// Node props that cannot produce well-formed markup.
    #[error("malformed props on {kind} node: {detail}")]
    MalformedProps {
        kind: &'static str,
        detail: &'static str,
    },
}

/// Per-call animation counters. Created fresh inside [`to_html`] and
/// discarded when it returns.
#[derive(Debug, Default)]
struct RenderState {
    big: u32,
    motion: u32,
}

impl RenderState {
    /// Count a big node; true while the budget allows animating it.
    fn admit_big(&mut self) -> bool {
        self.big += 1;
        self.big <= ANIMATION_BUDGET
    }

    /// Count a motion node; true while the budget allows animating it.
    fn admit_motion(&mut self) -> bool {
        self.motion += 1;
        self.motion <= ANIMATION_BUDGET
    }
}

/// Render a parsed MFM node sequence to an HTML string.
///
/// Returns the empty string for an empty input; otherwise the output is
/// wrapped in `<{tag} data-mfm="root">…</{tag}>` and every rendered
/// element carries a `data-mfm` attribute naming its construct.
///
/// # Security
///
/// Block-code content is injected verbatim (so pre-highlighted markup
/// survives); callers must ensure it is safe to embed. All other text and
/// attribute values are escaped.
pub fn to_html(nodes: &[MfmNode], config: &RenderConfig) -> Result<String, RenderError> {
    if nodes.is_empty() {
        return Ok(String::new());
    }

    tracing::trace!(nodes = nodes.len(), "rendering mfm tree");

    let mut state = RenderState::default();
    let mut body = String::with_capacity(nodes.len() * 32);
    for node in nodes {
        render_node(node, config, &mut state)?.serialize(&mut body);
    }

    let tag = config.root_tag_name.as_deref().unwrap_or(DEFAULT_ROOT_TAG);
    Ok(format!(r#"<{tag} data-mfm="root">{body}</{tag}>"#))
}

/// Render one node, recursing into children in document order.
fn render_node(
    node: &MfmNode,
    config: &RenderConfig,
    state: &mut RenderState,
) -> Result<HtmlNode, RenderError> {
    match node {
        MfmNode::Bold { children } => container("b", "bold", children, config, state),
        MfmNode::Italic { children } => container("i", "italic", children, config, state),
        MfmNode::Strike { children } => container("del", "strike", children, config, state),
        MfmNode::Small { children } => container("small", "small", children, config, state),
        MfmNode::Quote { children } => container("blockquote", "quote", children, config, state),
        MfmNode::Center { children } => container("div", "center", children, config, state),
        MfmNode::Title { children } => container("h1", "title", children, config, state),

        MfmNode::Big { children } => {
            // Counter bumps before the budget check, parent before children.
            let under_budget = state.admit_big();
            let mut el = Element::new("strong");
            render_children(&mut el, children, config, state)?;
            el.set_attr("data-mfm", "big");
            if config.animate && under_budget {
                el.add_class("animated");
                el.add_class("tada");
            }
            Ok(HtmlNode::Element(el))
        }

        MfmNode::Motion { children } => {
            let under_budget = state.admit_motion();
            let mut el = Element::new("i");
            render_children(&mut el, children, config, state)?;
            el.set_attr("data-mfm", "motion");
            if config.animate && under_budget {
                el.add_class("animated");
                el.add_class("rubberBand");
            }
            Ok(HtmlNode::Element(el))
        }

        MfmNode::Fn {
            name,
            args,
            children,
        } => {
            if name.is_empty() {
                return Err(RenderError::MalformedProps {
                    kind: "fn",
                    detail: "empty function name",
                });
            }
            let mut el = Element::new("span");
            render_children(&mut el, children, config, state)?;
            for arg in args {
                el.add_class(arg.name.clone());
            }
            el.set_attr("data-mfm", name.clone());
            Ok(HtmlNode::Element(el))
        }

        MfmNode::Text { text } => {
            let mut el = Element::new("span");
            let fragments = split_line_breaks(text)
                .into_iter()
                .map(|line| HtmlNode::Text(line.to_owned()))
                .collect();
            let br = HtmlNode::Element(Element::new("br"));
            for part in intersperse(&br, fragments) {
                el.append(part);
            }
            el.set_attr("data-mfm", "text");
            Ok(HtmlNode::Element(el))
        }

        MfmNode::InlineCode { code } => {
            let tag = if config.code_tag_as_div { "span" } else { "code" };
            let mut el = Element::new(tag);
            el.append_text(code);
            el.set_attr("data-mfm", "inlineCode");
            Ok(HtmlNode::Element(el))
        }

        MfmNode::BlockCode { code, lang } => {
            let (outer_tag, inner_tag) = if config.code_tag_as_div {
                ("div", "div")
            } else {
                ("pre", "code")
            };
            let mut inner = Element::new(inner_tag);
            // Verbatim so pre-highlighted markup survives; the caller owns
            // the safety of this content.
            inner.append(HtmlNode::Raw(code.clone()));
            inner.set_attr("data-mfm", "blockCode-inner");
            if let Some(lang) = lang {
                inner.add_class(format!("language-{lang}"));
            }
            let mut outer = Element::new(outer_tag);
            outer.append(HtmlNode::Element(inner));
            outer.set_attr("data-mfm", "blockCode");
            Ok(HtmlNode::Element(outer))
        }

        MfmNode::MathInline { formula } => {
            let mut el = Element::new("code");
            el.append_text(formula);
            el.set_attr("data-mfm", "mathInline");
            Ok(HtmlNode::Element(el))
        }

        MfmNode::MathBlock { formula } => {
            let mut el = Element::new("code");
            el.append_text(formula);
            el.set_attr("data-mfm", "mathBlock");
            Ok(HtmlNode::Element(el))
        }

        MfmNode::Url { url } => {
            let mut a = Element::new("a");
            a.set_attr("href", url.clone());
            a.append_text(url);
            a.set_attr("data-mfm", "url");
            Ok(HtmlNode::Element(a))
        }

        MfmNode::Link { url, children } => {
            let mut a = Element::new("a");
            a.set_attr("href", url.clone());
            render_children(&mut a, children, config, state)?;
            a.set_attr("data-mfm", "link");
            Ok(HtmlNode::Element(a))
        }

        MfmNode::Mention {
            username,
            host,
            acct,
        } => {
            if acct.is_empty() {
                return Err(RenderError::MalformedProps {
                    kind: "mention",
                    detail: "empty acct",
                });
            }
            let mut a = Element::new("a");
            a.set_attr(
                "href",
                mention_url(username, host.as_deref(), acct, config.url.as_deref()),
            );
            a.set_attr("target", "_blank");
            a.set_attr("rel", "noopener noreferrer");
            a.append_text(acct);
            a.set_attr("data-mfm", "mention");
            Ok(HtmlNode::Element(a))
        }

        MfmNode::Hashtag { hashtag } => {
            let mut a = Element::new("a");
            a.set_attr("href", hashtag_url(hashtag, config.url.as_deref()));
            a.set_attr("target", "_blank");
            a.set_attr("rel", "noopener noreferrer tag");
            a.append_text(format!("#{hashtag}"));
            a.set_attr("data-mfm", "hashtag");
            Ok(HtmlNode::Element(a))
        }

        MfmNode::EmojiCode { name } => match config.url.as_deref() {
            Some(instance) => {
                let mut img = Element::new("img");
                img.set_attr("src", emoji_image_url(name, instance));
                img.set_attr("alt", name.clone());
                img.set_attr("data-mfm", "emojiCode");
                Ok(HtmlNode::Element(img))
            }
            // Unresolvable without a host: emit the literal shortcode.
            None => Ok(HtmlNode::Text(format!(":{name}:"))),
        },

        MfmNode::UnicodeEmoji { emoji } => Ok(HtmlNode::Text(emoji.clone())),

        MfmNode::Search { query, content } => {
            let mut a = Element::new("a");
            a.set_attr("href", search_url(query));
            a.set_attr("target", "_blank");
            a.set_attr("rel", "noopener noreferrer");
            a.append_text(content);
            a.set_attr("data-mfm", "search");
            Ok(HtmlNode::Element(a))
        }

        // MfmNode is non_exhaustive; kinds added by newer parsers fail the
        // whole call rather than dropping content silently.
        other => Err(RenderError::UnsupportedNodeKind(other.kind())),
    }
}

/// Render a plain container variant: one element of `tag`, children
/// appended in order, `data-mfm` set to `kind`.
fn container(
    tag: &'static str,
    kind: &'static str,
    children: &[MfmNode],
    config: &RenderConfig,
    state: &mut RenderState,
) -> Result<HtmlNode, RenderError> {
    let mut el = Element::new(tag);
    render_children(&mut el, children, config, state)?;
    el.set_attr("data-mfm", kind);
    Ok(HtmlNode::Element(el))
}

/// Render `children` in order and append them to `el`.
fn render_children(
    el: &mut Element,
    children: &[MfmNode],
    config: &RenderConfig,
    state: &mut RenderState,
) -> Result<(), RenderError> {
    for child in children {
        el.append(render_node(child, config, state)?);
    }
    Ok(())
}

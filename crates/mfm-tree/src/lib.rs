//! Node tree types for parsed MFM (Misskey Flavored Markup) documents.
//!
//! A parser produces an ordered sequence of [`MfmNode`]s; consumers such as
//! the `mfm-html` renderer walk the tree read-only. Nodes own their children
//! outright, so the tree has no back-references and no cycles.
//!
//! The enum is `#[non_exhaustive]`: downstream crates must carry a fallback
//! arm when matching, which keeps them honest about node kinds added in
//! later parser versions.
//!
//! With the `serde` feature enabled, nodes serialize as internally tagged
//! maps keyed on `type` with camelCase kind names (`blockCode`,
//! `unicodeEmoji`, ...).

/// A named argument of an [`MfmNode::Fn`] node, e.g. `speed=2s` or a bare
/// flag like `x2`.
///
/// Arguments keep their declaration order. A bare flag has `value: None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FnArg {
    /// Argument name, used as a CSS class by renderers.
    pub name: String,
    /// Argument value, if one was given.
    pub value: Option<String>,
}

/// One node of a parsed MFM document.
///
/// Container variants hold `children`; leaf variants hold the literal data
/// the construct was parsed from. [`MfmNode::Fn`] and [`MfmNode::Link`]
/// carry both.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
#[non_exhaustive]
pub enum MfmNode {
    /// `**text**`
    Bold { children: Vec<MfmNode> },
    /// `<i>text</i>`
    Italic { children: Vec<MfmNode> },
    /// `~~text~~`
    Strike { children: Vec<MfmNode> },
    /// `<small>text</small>`
    Small { children: Vec<MfmNode> },
    /// `***text***`, animated emphasis.
    Big { children: Vec<MfmNode> },
    /// `(((text)))`, legacy animated motion.
    Motion { children: Vec<MfmNode> },
    /// `> text`
    Quote { children: Vec<MfmNode> },
    /// `<center>text</center>`
    Center { children: Vec<MfmNode> },
    /// `[text]`, a document heading.
    Title { children: Vec<MfmNode> },
    /// `$[name.arg=value text]`
    Fn {
        name: String,
        args: Vec<FnArg>,
        children: Vec<MfmNode>,
    },
    /// Plain text, possibly spanning multiple lines.
    Text { text: String },
    /// `` `code` ``
    InlineCode { code: String },
    /// Fenced code block with an optional language tag.
    BlockCode { code: String, lang: Option<String> },
    /// `\(formula\)`
    MathInline { formula: String },
    /// `\[formula\]`
    MathBlock { formula: String },
    /// A bare URL.
    Url { url: String },
    /// `[label](url)`
    Link { url: String, children: Vec<MfmNode> },
    /// `@user` or `@user@host`. `acct` is the full `@user@host` form.
    Mention {
        username: String,
        host: Option<String>,
        acct: String,
    },
    /// `#tag`
    Hashtag { hashtag: String },
    /// `:shortcode:`, a custom emoji reference.
    EmojiCode { name: String },
    /// A literal Unicode emoji character.
    UnicodeEmoji { emoji: String },
    /// `query Search` / `query [Search]`
    Search { query: String, content: String },
}

impl MfmNode {
    /// The node's kind tag, matching the parser's `type` string.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bold { .. } => "bold",
            Self::Italic { .. } => "italic",
            Self::Strike { .. } => "strike",
            Self::Small { .. } => "small",
            Self::Big { .. } => "big",
            Self::Motion { .. } => "motion",
            Self::Quote { .. } => "quote",
            Self::Center { .. } => "center",
            Self::Title { .. } => "title",
            Self::Fn { .. } => "fn",
            Self::Text { .. } => "text",
            Self::InlineCode { .. } => "inlineCode",
            Self::BlockCode { .. } => "blockCode",
            Self::MathInline { .. } => "mathInline",
            Self::MathBlock { .. } => "mathBlock",
            Self::Url { .. } => "url",
            Self::Link { .. } => "link",
            Self::Mention { .. } => "mention",
            Self::Hashtag { .. } => "hashtag",
            Self::EmojiCode { .. } => "emojiCode",
            Self::UnicodeEmoji { .. } => "unicodeEmoji",
            Self::Search { .. } => "search",
        }
    }

    /// Child nodes, if this is a container variant.
    #[must_use]
    pub fn children(&self) -> Option<&[MfmNode]> {
        match self {
            Self::Bold { children }
            | Self::Italic { children }
            | Self::Strike { children }
            | Self::Small { children }
            | Self::Big { children }
            | Self::Motion { children }
            | Self::Quote { children }
            | Self::Center { children }
            | Self::Title { children }
            | Self::Fn { children, .. }
            | Self::Link { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Convenience constructor for a text leaf.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_match_parser_type_strings() {
        assert_eq!(MfmNode::text("x").kind(), "text");
        assert_eq!(
            MfmNode::BlockCode {
                code: String::new(),
                lang: None
            }
            .kind(),
            "blockCode"
        );
        assert_eq!(
            MfmNode::UnicodeEmoji {
                emoji: "🍮".to_owned()
            }
            .kind(),
            "unicodeEmoji"
        );
        assert_eq!(
            MfmNode::Fn {
                name: "tada".to_owned(),
                args: Vec::new(),
                children: Vec::new()
            }
            .kind(),
            "fn"
        );
    }

    #[test]
    fn test_children_accessor() {
        let node = MfmNode::Bold {
            children: vec![MfmNode::text("hi")],
        };
        assert_eq!(node.children().map(<[MfmNode]>::len), Some(1));
        assert_eq!(MfmNode::text("hi").children(), None);
    }

    #[test]
    fn test_link_carries_both_url_and_children() {
        let node = MfmNode::Link {
            url: "https://example.com".to_owned(),
            children: vec![MfmNode::text("label")],
        };
        assert_eq!(node.kind(), "link");
        assert!(node.children().is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_tagged_representation() {
        let node = MfmNode::Bold {
            children: vec![MfmNode::text("hi")],
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "bold");
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["text"], "hi");

        let back: MfmNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_camel_case_kind_tags() {
        let node = MfmNode::EmojiCode {
            name: "smile".to_owned(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "emojiCode");
    }
}

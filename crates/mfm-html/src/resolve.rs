//! Link resolution for mentions, hashtags, hosted emoji, and search.
//!
//! Pure string templating; nothing is fetched or validated here. The
//! `instance` parameter is the configured instance host from
//! [`RenderConfig::url`](crate::RenderConfig::url).

/// Search nodes always point at this engine.
const SEARCH_ENGINE_URL: &str = "https://www.google.com/search?q=";

/// Resolve the destination for a mention.
///
/// `github.com` and `twitter.com` mentions link to the user's profile on
/// those services directly; any other remote host is templated as
/// `https://{host}/{acct}`. Local mentions (no host) resolve against the
/// instance host, or fall back to a relative path when none is configured.
pub(crate) fn mention_url(
    username: &str,
    host: Option<&str>,
    acct: &str,
    instance: Option<&str>,
) -> String {
    match host {
        Some("github.com") => format!("https://github.com/{username}"),
        Some("twitter.com") => format!("https://twitter.com/{username}"),
        Some(host) if !host.is_empty() => format!("https://{host}/{acct}"),
        _ => match instance {
            Some(instance) => format!("https://{instance}/{acct}"),
            None => format!("/{acct}"),
        },
    }
}

/// Resolve the destination for a hashtag: absolute when an instance host
/// is configured, relative otherwise.
pub(crate) fn hashtag_url(hashtag: &str, instance: Option<&str>) -> String {
    match instance {
        Some(instance) => format!("https://{instance}/tags/{hashtag}"),
        None => format!("/tags/{hashtag}"),
    }
}

/// Image source for a custom emoji hosted on `instance`.
pub(crate) fn emoji_image_url(name: &str, instance: &str) -> String {
    format!("https://{instance}/emoji/{name}.webp")
}

/// Destination for a search node.
///
/// The query is appended as-is, without percent-encoding; the href
/// carries whatever characters the parser captured.
pub(crate) fn search_url(query: &str) -> String {
    format!("{SEARCH_ENGINE_URL}{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_github_ignores_origin_host() {
        assert_eq!(
            mention_url("octocat", Some("github.com"), "@octocat@github.com", None),
            "https://github.com/octocat"
        );
    }

    #[test]
    fn test_mention_twitter_ignores_origin_host() {
        assert_eq!(
            mention_url("jack", Some("twitter.com"), "@jack@twitter.com", None),
            "https://twitter.com/jack"
        );
    }

    #[test]
    fn test_mention_remote_host_uses_acct() {
        assert_eq!(
            mention_url(
                "alice",
                Some("remote.example"),
                "@alice@remote.example",
                Some("social.example")
            ),
            "https://remote.example/@alice@remote.example"
        );
    }

    #[test]
    fn test_mention_local_resolves_against_instance() {
        assert_eq!(
            mention_url("alice", None, "@alice", Some("social.example")),
            "https://social.example/@alice"
        );
        // Empty-string host behaves like an absent host.
        assert_eq!(
            mention_url("alice", Some(""), "@alice", Some("social.example")),
            "https://social.example/@alice"
        );
    }

    #[test]
    fn test_mention_local_without_instance_is_relative() {
        assert_eq!(mention_url("alice", None, "@alice", None), "/@alice");
    }

    #[test]
    fn test_hashtag_absolute_and_relative() {
        assert_eq!(
            hashtag_url("rust", Some("social.example")),
            "https://social.example/tags/rust"
        );
        assert_eq!(hashtag_url("rust", None), "/tags/rust");
    }

    #[test]
    fn test_emoji_image_url() {
        assert_eq!(
            emoji_image_url("smile", "example.com"),
            "https://example.com/emoji/smile.webp"
        );
    }

    #[test]
    fn test_search_url() {
        assert_eq!(
            search_url("rust renderer"),
            "https://www.google.com/search?q=rust renderer"
        );
    }
}

use serde::{Deserialize, Serialize};

use super::selectors::{
    AUTHOR_REGION_SEL, AVATAR_SEL, BIO_SEL, POST_ITEM_SEL, POST_LINK_SEL, USERNAME_SEL,
};
use crate::document::{attr, raw_text, text, Document};

/// A byte.co user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Avatar `src` as found in the markup; empty when the profile has none.
    #[serde(rename = "profileImageURL")]
    pub profile_image_url: String,
    /// Bio text, untrimmed.
    pub description: String,
    /// Absolute URLs of the posts shown on the profile, in page order.
    #[serde(rename = "recentPostURLs")]
    pub recent_post_urls: Vec<String>,
    /// Canonical profile URL.
    pub url: String,
}

/// Build a [`User`] from a parsed profile page.
///
/// Missing nodes and attributes become empty values. Post grid entries without
/// a usable link are skipped.
#[must_use]
pub fn extract_user(document: &Document, url: &str, base_url: &str) -> User {
    let author = document.first(&AUTHOR_REGION_SEL);

    let recent_post_urls = document
        .select(&POST_ITEM_SEL)
        .filter_map(|post| {
            post.select(&POST_LINK_SEL)
                .next()
                .and_then(|link| link.value().attr("href"))
                .filter(|href| !href.is_empty())
        })
        .map(|href| format!("{base_url}{href}"))
        .collect();

    User {
        username: text(author, &USERNAME_SEL),
        profile_image_url: attr(author, &AVATAR_SEL, "src"),
        description: raw_text(author, &BIO_SEL),
        recent_post_urls,
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://byte.co";

    fn extract(html: &str) -> User {
        extract_user(&Document::parse(html), "https://byte.co/@alice", BASE)
    }

    #[test]
    fn test_extract_full_profile() {
        let user = extract(
            r#"
            <div class="author">
                <span class="username"> alice </span>
                <img class="avatar" src="/img/a.png">
                <p class="bio">loops and more loops</p>
            </div>
            <div class="post"><a href="/p/1"></a></div>
            <div class="post"><a href="/p/2"></a></div>
            "#,
        );

        assert_eq!(
            user,
            User {
                username: "alice".to_string(),
                profile_image_url: "/img/a.png".to_string(),
                description: "loops and more loops".to_string(),
                recent_post_urls: vec![
                    "https://byte.co/p/1".to_string(),
                    "https://byte.co/p/2".to_string(),
                ],
                url: "https://byte.co/@alice".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_avatar_and_bio() {
        let user = extract(r#"<div class="author"><span class="username">bob</span></div>"#);

        assert_eq!(user.username, "bob");
        assert_eq!(user.profile_image_url, "");
        assert_eq!(user.description, "");
        assert!(user.recent_post_urls.is_empty());
    }

    #[test]
    fn test_bio_is_not_trimmed() {
        let user = extract(
            r#"<div class="author"><span class="username">a</span><p class="bio">  hi there
</p></div>"#,
        );

        assert_eq!(user.description, "  hi there\n");
    }

    #[test]
    fn test_no_author_region() {
        let user = extract("<html><body><p>nothing here</p></body></html>");

        assert_eq!(user.username, "");
        assert_eq!(user.profile_image_url, "");
        assert_eq!(user.url, "https://byte.co/@alice");
    }

    #[test]
    fn test_fields_outside_author_region_ignored() {
        let user = extract(
            r#"
            <span class="username">impostor</span>
            <div class="author"><span class="username">alice</span></div>
            "#,
        );

        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_post_without_link_is_skipped() {
        let user = extract(
            r#"
            <div class="post"><a href="/p/1"></a></div>
            <div class="post"><span>no link</span></div>
            <div class="post"><a>no href</a></div>
            <div class="post"><a href=""></a></div>
            <div class="post"><a href="/p/3"></a></div>
            "#,
        );

        assert_eq!(
            user.recent_post_urls,
            vec!["https://byte.co/p/1", "https://byte.co/p/3"]
        );
    }

    #[test]
    fn test_post_uses_first_link() {
        let user = extract(r#"<div class="post"><a href="/p/9"></a><a href="/@other"></a></div>"#);

        assert_eq!(user.recent_post_urls, vec!["https://byte.co/p/9"]);
    }

    #[test]
    fn test_serializes_with_api_field_names() {
        let user = extract(
            r#"<div class="author"><span class="username">alice</span></div>
               <div class="post"><a href="/p/1"></a></div>"#,
        );
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["username"], "alice");
        assert_eq!(json["profileImageURL"], "");
        assert_eq!(json["recentPostURLs"][0], "https://byte.co/p/1");
        assert_eq!(json["url"], "https://byte.co/@alice");
    }
}

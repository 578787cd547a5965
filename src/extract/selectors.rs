//! CSS selectors for byte.co page markup.
//!
//! All knowledge of the site's class names lives here, so a markup change only
//! touches this file.

use std::sync::LazyLock;

use scraper::Selector;

/// Region holding the profile (or post author) header.
pub const AUTHOR_REGION: &str = ".author";
/// Username inside the author region.
pub const USERNAME: &str = ".username";
/// Avatar image inside the author region.
pub const AVATAR: &str = ".avatar";
/// Profile bio inside the author region.
pub const BIO: &str = ".bio";
/// One entry in a profile's post grid.
pub const POST_ITEM: &str = ".post";
/// Link inside a post grid entry.
pub const POST_LINK: &str = "a";
/// Caption text on a post page.
pub const CAPTION: &str = ".caption";
/// Video player on a post page.
pub const VIDEO: &str = "video";
/// Source element nested inside the video player.
pub const VIDEO_SOURCE: &str = "video source";
/// Publication time on a post page.
pub const POSTED_AT: &str = "time";

fn compile(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid selector")
}

pub static AUTHOR_REGION_SEL: LazyLock<Selector> = LazyLock::new(|| compile(AUTHOR_REGION));
pub static USERNAME_SEL: LazyLock<Selector> = LazyLock::new(|| compile(USERNAME));
pub static AVATAR_SEL: LazyLock<Selector> = LazyLock::new(|| compile(AVATAR));
pub static BIO_SEL: LazyLock<Selector> = LazyLock::new(|| compile(BIO));
pub static POST_ITEM_SEL: LazyLock<Selector> = LazyLock::new(|| compile(POST_ITEM));
pub static POST_LINK_SEL: LazyLock<Selector> = LazyLock::new(|| compile(POST_LINK));
pub static CAPTION_SEL: LazyLock<Selector> = LazyLock::new(|| compile(CAPTION));
pub static VIDEO_SEL: LazyLock<Selector> = LazyLock::new(|| compile(VIDEO));
pub static VIDEO_SOURCE_SEL: LazyLock<Selector> = LazyLock::new(|| compile(VIDEO_SOURCE));
pub static POSTED_AT_SEL: LazyLock<Selector> = LazyLock::new(|| compile(POSTED_AT));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selectors_parse() {
        for css in [
            AUTHOR_REGION,
            USERNAME,
            AVATAR,
            BIO,
            POST_ITEM,
            POST_LINK,
            CAPTION,
            VIDEO,
            VIDEO_SOURCE,
            POSTED_AT,
        ] {
            assert!(Selector::parse(css).is_ok(), "selector {css} should parse");
        }
    }
}

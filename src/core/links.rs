//! # Links
//!
//! The two quick links (Home, Popular) that sit above the sections, and the
//! outbound links in the footer. Outbound links carry no state of their own;
//! activating one just hands its URL to the adapter.

use chrono::{Datelike, Local};

/// Sentinel selection for the front page.
pub const HOMEPAGE: &str = "homepage";
/// Sentinel selection for the most-viewed list.
pub const MOST_VIEWED: &str = "mostviewed";

/// A non-categorized quick link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickLink {
    Home,
    MostViewed,
}

impl QuickLink {
    pub const ALL: [QuickLink; 2] = [QuickLink::Home, QuickLink::MostViewed];

    pub fn sentinel(self) -> &'static str {
        match self {
            QuickLink::Home => HOMEPAGE,
            QuickLink::MostViewed => MOST_VIEWED,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickLink::Home => "HOME",
            QuickLink::MostViewed => "POPULAR",
        }
    }

    pub fn from_sentinel(value: &str) -> Option<Self> {
        match value {
            HOMEPAGE => Some(QuickLink::Home),
            MOST_VIEWED => Some(QuickLink::MostViewed),
            _ => None,
        }
    }
}

/// Links that leave the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundLink {
    /// The logo in the panel header.
    Masthead,
    Subscribe,
    Account,
    Help,
    PrivacyPolicy,
    Terms,
    Copyright,
}

/// The informational links shown in the footer, in display order.
pub const FOOTER_LINKS: [OutboundLink; 5] = [
    OutboundLink::Account,
    OutboundLink::Help,
    OutboundLink::PrivacyPolicy,
    OutboundLink::Terms,
    OutboundLink::Copyright,
];

impl OutboundLink {
    pub fn url(self) -> &'static str {
        match self {
            OutboundLink::Masthead => "https://www.nytimes.com",
            OutboundLink::Subscribe => {
                "https://www.nytimes.com/subscription?source=TikTokNYTimes"
            }
            OutboundLink::Account => "https://www.nytimes.com/account",
            OutboundLink::Help => "https://help.nytimes.com/hc/en-us",
            OutboundLink::PrivacyPolicy => "https://www.nytimes.com/privacy/privacy-policy",
            OutboundLink::Terms => {
                "https://help.nytimes.com/hc/en-us/articles/115014893428-Terms-of-service"
            }
            OutboundLink::Copyright => {
                "https://help.nytimes.com/hc/en-us/articles/115014792127-Copyright-notice"
            }
        }
    }

    pub fn label(self) -> String {
        match self {
            OutboundLink::Masthead => "The New York Times".to_string(),
            OutboundLink::Subscribe => "SUBSCRIBE FOR $1".to_string(),
            OutboundLink::Account => "My Account".to_string(),
            OutboundLink::Help => "Help".to_string(),
            OutboundLink::PrivacyPolicy => "Privacy Policy".to_string(),
            OutboundLink::Terms => "Terms of Service".to_string(),
            OutboundLink::Copyright => format!("©{} New York Times", Local::now().year()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_link_sentinels_round_trip() {
        for link in QuickLink::ALL {
            assert_eq!(QuickLink::from_sentinel(link.sentinel()), Some(link));
        }
        assert_eq!(QuickLink::from_sentinel("world"), None);
    }

    #[test]
    fn test_footer_links_exclude_subscribe() {
        assert_eq!(FOOTER_LINKS.len(), 5);
        assert!(!FOOTER_LINKS.contains(&OutboundLink::Subscribe));
        assert!(!FOOTER_LINKS.contains(&OutboundLink::Masthead));
    }

    #[test]
    fn test_copyright_label_has_current_year() {
        let year = Local::now().year().to_string();
        assert!(OutboundLink::Copyright.label().contains(&year));
    }

    #[test]
    fn test_urls_are_https() {
        assert!(OutboundLink::Subscribe.url().starts_with("https://"));
        assert!(OutboundLink::Masthead.url().starts_with("https://"));
        for link in FOOTER_LINKS {
            assert!(link.url().starts_with("https://"), "{:?}", link);
        }
    }
}

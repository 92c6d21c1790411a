//! Outbound navigation: profile URLs, résumé documents, `mailto:` and `tel:`.
//!
//! Opening is delegated to the desktop. Over SSH or on a headless box there
//! is nothing to open with, so failures are only logged.

use crate::content::{ContactInfo, SocialLink};

/// Something in the hero header that can be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub icon: &'static str,
    pub url: String,
}

impl Link {
    /// Contact links first, then social and résumé links, in display order
    pub fn hero_links(contact: &ContactInfo, social: &[SocialLink]) -> Vec<Link> {
        let mut links = vec![
            Link {
                label: contact.email.to_string(),
                icon: "📧",
                url: contact.mailto(),
            },
            Link {
                label: contact.phone.to_string(),
                icon: "📱",
                url: contact.tel(),
            },
        ];
        links.extend(social.iter().map(|s| Link {
            label: s.name.to_uppercase(),
            icon: s.icon,
            url: s.url.to_string(),
        }));
        links
    }
}

/// Open a URL with the system handler, without blocking the UI.
///
/// Must be called from within the tokio runtime.
pub fn open_url(url: &str) {
    tracing::info!("Opening {}", url);
    let url = url.to_string();
    tokio::task::spawn_blocking(move || {
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open {}: {}", url, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CONTACT, SOCIAL_LINKS};

    #[test]
    fn test_hero_links_order() {
        let links = Link::hero_links(&CONTACT, SOCIAL_LINKS);
        assert_eq!(links.len(), 2 + SOCIAL_LINKS.len());
        assert!(links[0].url.starts_with("mailto:"));
        assert!(links[1].url.starts_with("tel:"));
        assert_eq!(links[2].label, "GITHUB");
        assert_eq!(links[4].url, SOCIAL_LINKS[2].url);
    }
}

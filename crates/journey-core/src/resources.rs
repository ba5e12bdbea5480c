//! External learning resources and the feature-request mail link.
//!
//! Opening a link hands it to the platform opener and returns; nothing is
//! awaited or retried.

use serde::Serialize;

use crate::error::{CoreError, Result, ValidationError};
use crate::storage::ContactConfig;

/// Kind of external resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Video,
    Episode,
    Community,
}

/// A named outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ResourceKind,
    pub url: &'static str,
}

const fn episode(id: &'static str, title: &'static str, url: &'static str) -> Resource {
    Resource {
        id,
        title,
        kind: ResourceKind::Episode,
        url,
    }
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        id: "kegel",
        title: "Kegel Exercises",
        kind: ResourceKind::Video,
        url: "https://www.youtube.com/watch?v=LwqN40QSRTo",
    },
    episode(
        "episode-01",
        "Recovery Guide Episode 01",
        "https://www.facebook.com/groups/538769621474710/permalink/539512831400389/?mibextid=Nif5oz",
    ),
    episode(
        "episode-02",
        "Recovery Guide Episode 02",
        "https://www.facebook.com/groups/538769621474710/permalink/539513424733663/?mibextid=Nif5oz",
    ),
    episode(
        "episode-03",
        "Recovery Guide Episode 03",
        "https://www.facebook.com/groups/538769621474710/permalink/539515314733474/?mibextid=Nif5oz",
    ),
    episode(
        "episode-04",
        "Recovery Guide Episode 04",
        "https://www.facebook.com/groups/538769621474710/permalink/539516278066711/?mibextid=Nif5oz",
    ),
    episode(
        "episode-05",
        "Recovery Guide Episode 05",
        "https://www.facebook.com/groups/538769621474710/permalink/539516584733347/?mibextid=Nif5oz",
    ),
    episode(
        "episode-06",
        "Recovery Guide Episode 06",
        "https://www.facebook.com/groups/538769621474710/permalink/539516871399985/?mibextid=Nif5oz",
    ),
    episode(
        "episode-07",
        "Recovery Guide Episode 07",
        "https://www.facebook.com/groups/538769621474710/permalink/539518534733152/?mibextid=Nif5oz",
    ),
    episode(
        "episode-08",
        "Recovery Guide Episode 08",
        "https://www.facebook.com/groups/538769621474710/permalink/539518974733108/?mibextid=Nif5oz",
    ),
    episode(
        "episode-09",
        "Recovery Guide Episode 09",
        "https://www.facebook.com/groups/538769621474710/permalink/539519368066402/?mibextid=Nif5oz",
    ),
    Resource {
        id: "support-group",
        title: "Nofap Support Group",
        kind: ResourceKind::Community,
        url: "https://web.facebook.com/share/g/12Lyx65eSTF/",
    },
    Resource {
        id: "author",
        title: "Facebook: Muhammad Usman",
        kind: ResourceKind::Community,
        url: "https://web.facebook.com/profile.php?id=61556582417379",
    },
];

const FEATURE_REQUEST_BODY: &str = "Hi,\n\nI would like to request a new feature for the NoFap Journey app:\n\n[Please describe your feature request here]\n\nThanks!";

pub fn find(id: &str) -> Result<&'static Resource> {
    RESOURCES
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ValidationError::UnknownResource(id.to_string()).into())
}

/// `mailto:` link with the feature-request subject and body.
pub fn feature_request_mailto(contact: &ContactConfig) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        contact.email,
        urlencoding::encode(&contact.subject),
        urlencoding::encode(FEATURE_REQUEST_BODY)
    )
}

/// Hand a URL to the system opener.
pub fn open_link(url: &str) -> Result<()> {
    open::that_detached(url).map_err(|e| {
        tracing::error!(url, error = %e, "failed to open link");
        CoreError::Link {
            target: url.to_string(),
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_ids_are_unique() {
        let mut ids: Vec<&str> = RESOURCES.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RESOURCES.len());
        assert_eq!(
            RESOURCES
                .iter()
                .filter(|r| r.kind == ResourceKind::Episode)
                .count(),
            9
        );
    }

    #[test]
    fn find_unknown_resource_fails() {
        assert_eq!(find("kegel").unwrap().kind, ResourceKind::Video);
        assert!(find("nope").is_err());
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let link = feature_request_mailto(&ContactConfig::default());
        assert!(link.starts_with("mailto:usmanrehmaniofficial@gmail.com?subject="));
        assert!(link.contains("NoFap%20Journey%20-%20Feature%20Request"));
        assert!(link.contains("&body=Hi%2C%0A%0A"));
        assert!(!link.contains(' '));
    }
}

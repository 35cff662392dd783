//! Joins repository tags with their releases by tag name.

use std::collections::HashMap;

use super::types::{Release, ReleaseInfo, Tag, TagInfo};

/// Merges independently fetched tag and release lists into one sequence
/// keyed by tag name, preserving the tag list's original order. A tag
/// without a matching release carries no release data at all.
pub fn reconcile(tags: Vec<TagInfo>, releases: Vec<ReleaseInfo>) -> Vec<Tag> {
    let mut by_tag: HashMap<String, ReleaseInfo> = releases
        .into_iter()
        .map(|r| (r.tag_name.clone(), r))
        .collect();

    tags.into_iter()
        .map(|t| {
            let release = by_tag.remove(&t.name).map(Release::from);
            Tag {
                name: t.name,
                release,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> TagInfo {
        TagInfo {
            name: name.to_string(),
        }
    }

    fn release(tag_name: &str, name: &str) -> ReleaseInfo {
        ReleaseInfo {
            tag_name: tag_name.to_string(),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_reconcile_tag_without_release() {
        let merged = reconcile(vec![tag("v2"), tag("v1")], vec![release("v1", "One")]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "v2");
        assert!(merged[0].release.is_none());
        assert_eq!(merged[1].name, "v1");
        assert_eq!(merged[1].release.as_ref().unwrap().name, "One");
    }

    #[test]
    fn test_reconcile_preserves_tag_order() {
        // Release list order is independent of tag list order
        let merged = reconcile(
            vec![tag("v3"), tag("v2"), tag("v1")],
            vec![release("v1", "One"), release("v3", "Three")],
        );

        let names: Vec<&str> = merged.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["v3", "v2", "v1"]);
        assert_eq!(merged[0].release.as_ref().unwrap().name, "Three");
        assert!(merged[1].release.is_none());
        assert_eq!(merged[2].release.as_ref().unwrap().name, "One");
    }

    #[test]
    fn test_reconcile_empty_inputs() {
        assert!(reconcile(vec![], vec![]).is_empty());
        assert!(reconcile(vec![], vec![release("v1", "One")]).is_empty());

        let merged = reconcile(vec![tag("v1")], vec![]);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].release.is_none());
    }

    #[test]
    fn test_reconcile_release_without_tag_is_dropped() {
        // A release whose tag is not in the tag list does not invent a row
        let merged = reconcile(vec![tag("v1")], vec![release("v9", "Nine")]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "v1");
        assert!(merged[0].release.is_none());
    }
}

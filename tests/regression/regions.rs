//! The `content` region only changes through composing content.

use themekit::RegionStore;

#[test]
fn append_and_prepend_skip_content() {
    let mut regions = RegionStore::new();
    regions.append("content", "tail").prepend("content", "head");
    assert_eq!(regions.content(), "");
}

#[test]
fn append_builds_other_regions() {
    let mut regions = RegionStore::new();
    regions.append("sidebar", "b").prepend("sidebar", "a").append("sidebar", "c");
    assert_eq!(regions.get("sidebar", ""), "abc");
}

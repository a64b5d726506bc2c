//! Property tests for dependency ordering

use std::collections::HashMap;

use proptest::prelude::*;
use themekit::{arrange, Asset, AssetGroup};

fn script(name: &str, deps: &[String]) -> Asset {
    Asset::new(name, AssetGroup::Script, format!("js/{name}.js")).with_dependencies(deps.iter())
}

/// Acyclic graph: asset `i` may only depend on assets `0..i`, then the
/// registration order is shuffled.
fn dag() -> impl Strategy<Value = Vec<Asset>> {
    (1usize..12)
        .prop_flat_map(|n| {
            (0..n)
                .map(|i| proptest::sample::subsequence((0..i).collect::<Vec<_>>(), 0..=i))
                .collect::<Vec<_>>()
        })
        .prop_map(|deps| {
            deps.into_iter()
                .enumerate()
                .map(|(i, deps)| {
                    let deps: Vec<String> = deps.into_iter().map(|d| format!("a{d}")).collect();
                    script(&format!("a{i}"), &deps)
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

proptest! {
    #[test]
    fn arranged_assets_follow_their_dependencies(assets in dag()) {
        let sorted = arrange(&assets).unwrap();
        prop_assert_eq!(sorted.len(), assets.len());

        let position: HashMap<&str, usize> = sorted
            .iter()
            .enumerate()
            .map(|(i, a)| (a.name(), i))
            .collect();
        prop_assert_eq!(position.len(), assets.len());

        for asset in &sorted {
            for dep in asset.dependencies() {
                prop_assert!(
                    position[dep.as_str()] < position[asset.name()],
                    "{} emitted before its dependency {}",
                    asset.name(),
                    dep
                );
            }
        }
    }

    #[test]
    fn independent_assets_keep_registration_order(names in proptest::collection::hash_set("[a-z]{1,6}", 0..10)) {
        let assets: Vec<Asset> = names.iter().map(|n| script(n, &[])).collect();
        let sorted = arrange(&assets).unwrap();
        prop_assert_eq!(sorted, assets);
    }

    #[test]
    fn unregistered_dependencies_are_ignored(assets in dag(), ghost in "[A-Z]{3}") {
        let haunted: Vec<Asset> = assets
            .iter()
            .map(|a| {
                let mut deps = a.dependencies().to_vec();
                deps.push(ghost.clone());
                script(a.name(), &deps)
            })
            .collect();

        let names = |list: Vec<Asset>| list.iter().map(|a| a.name().to_string()).collect::<Vec<_>>();
        prop_assert_eq!(names(arrange(&haunted).unwrap()), names(arrange(&assets).unwrap()));
    }
}

#[test]
fn three_way_cycle_is_unresolvable() {
    let assets = vec![
        script("a", &["b".to_string()]),
        script("b", &["c".to_string()]),
        script("c", &["a".to_string()]),
    ];
    let err = arrange(&assets).unwrap_err();
    assert!(err.to_string().contains("unresolvable"), "{err}");
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use themekit::{arrange, Asset, AssetGroup};

// Each byte pair is (asset, dependency) over a small name space, so cycles,
// self references and unknown names all show up.
fuzz_target!(|data: &[u8]| {
    let mut assets: Vec<Asset> = Vec::new();
    for pair in data.chunks(2).take(64) {
        let name = format!("a{}", pair[0] % 16);
        let dependency = pair.get(1).map(|d| format!("a{}", d % 20));
        if assets.iter().any(|a| a.name() == name) {
            continue;
        }
        assets.push(Asset::new(&name, AssetGroup::Script, format!("{name}.js")).with_dependencies(dependency));
    }

    if let Ok(sorted) = arrange(&assets) {
        assert_eq!(sorted.len(), assets.len());
    }
});

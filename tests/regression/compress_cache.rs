//! The compressed cache is judged stale by byte length only.

use themekit::application::UrlResolver;
use themekit::{Asset, AssetCompressor, AssetGroup, FileSystem, MemoryFs};

fn compressor() -> AssetCompressor {
    AssetCompressor::new("public", "cache", UrlResolver::default())
}

fn assets() -> Vec<Asset> {
    vec![Asset::new("app", AssetGroup::Script, "js/app.js")]
}

#[test]
fn same_length_edit_keeps_stale_artifact() {
    let fs = MemoryFs::new().with_file("public/js/app.js", "var a = 1;");
    let c = compressor();
    let first = c.compress(&fs, AssetGroup::Script, &assets(), false).unwrap();
    assert!(first.written);

    fs.insert("public/js/app.js", "var b = 2;");
    let second = c.compress(&fs, AssetGroup::Script, &assets(), false).unwrap();

    assert!(!second.written);
    assert_eq!(fs.read_to_string(&second.file_path).unwrap(), "var a=1;");
}

#[test]
fn length_change_rewrites_artifact() {
    let fs = MemoryFs::new().with_file("public/js/app.js", "var a = 1;");
    let c = compressor();
    c.compress(&fs, AssetGroup::Script, &assets(), false).unwrap();

    fs.insert("public/js/app.js", "var abc = 1;");
    let second = c.compress(&fs, AssetGroup::Script, &assets(), false).unwrap();

    assert!(second.written);
    assert_eq!(fs.read_to_string(&second.file_path).unwrap(), "var abc=1;");
}

#[test]
fn forced_rebuild_picks_up_same_length_edit() {
    let fs = MemoryFs::new().with_file("public/js/app.js", "var a = 1;");
    let c = compressor();
    c.compress(&fs, AssetGroup::Script, &assets(), false).unwrap();

    fs.insert("public/js/app.js", "var b = 2;");
    let forced = c.compress(&fs, AssetGroup::Script, &assets(), true).unwrap();

    assert!(forced.written);
    assert_eq!(fs.read_to_string(&forced.file_path).unwrap(), "var b=2;");
}

#[test]
fn artifact_name_depends_on_sources_not_content() {
    let fs = MemoryFs::new().with_file("public/js/app.js", "one();");
    let c = compressor();
    let first = c.compress(&fs, AssetGroup::Script, &assets(), false).unwrap();

    fs.insert("public/js/app.js", "two(); three();");
    let second = c.compress(&fs, AssetGroup::Script, &assets(), false).unwrap();

    assert_eq!(first.public_path, second.public_path);
}

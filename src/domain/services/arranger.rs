//! Asset arranger
//!
//! Orders the assets of one group so that every asset is emitted after the
//! dependencies it names. Works in passes over the unsorted set:
//!
//! - an asset with no pending dependencies is emitted;
//! - a dependency that was never registered is dropped silently;
//! - a dependency on itself, or on an asset that depends straight back,
//!   is an error;
//! - a dependency already emitted is satisfied and dropped.
//!
//! Assets that become ready in the same pass keep their registration order.

use std::collections::HashSet;

use crate::domain::entities::Asset;
use crate::error::{ThemeError, ThemeResult};

struct Pending<'a> {
    asset: &'a Asset,
    dependencies: Vec<&'a str>,
}

/// Sort assets by their dependencies.
pub fn arrange(assets: &[Asset]) -> ThemeResult<Vec<Asset>> {
    let original: HashSet<&str> = assets.iter().map(Asset::name).collect();
    let mut pending: Vec<Pending<'_>> = assets
        .iter()
        .map(|asset| Pending {
            asset,
            dependencies: asset.dependencies().iter().map(String::as_str).collect(),
        })
        .collect();

    let mut sorted: Vec<Asset> = Vec::with_capacity(assets.len());
    let mut emitted: HashSet<&str> = HashSet::new();

    while !pending.is_empty() {
        let mut progressed = false;
        let mut index = 0;

        while index < pending.len() {
            if pending[index].dependencies.is_empty() {
                let done = pending.remove(index);
                emitted.insert(done.asset.name());
                sorted.push(done.asset.clone());
                progressed = true;
                continue;
            }

            let name = pending[index].asset.name();
            let dependencies = pending[index].dependencies.clone();
            let mut remaining = Vec::with_capacity(dependencies.len());

            for dependency in dependencies {
                if !original.contains(dependency) {
                    progressed = true;
                    continue;
                }
                if dependency == name {
                    return Err(ThemeError::SelfDependency {
                        asset: name.to_string(),
                    });
                }
                let depends_back = pending.iter().any(|other| {
                    other.asset.name() == dependency && other.dependencies.contains(&name)
                });
                if depends_back {
                    return Err(ThemeError::CircularDependency {
                        asset: name.to_string(),
                        dependency: dependency.to_string(),
                    });
                }
                if emitted.contains(dependency) {
                    progressed = true;
                    continue;
                }
                remaining.push(dependency);
            }

            pending[index].dependencies = remaining;
            index += 1;
        }

        if !progressed {
            return Err(ThemeError::UnresolvableDependencies {
                assets: pending
                    .iter()
                    .map(|p| p.asset.name().to_string())
                    .collect(),
            });
        }
    }

    Ok(sorted)
}

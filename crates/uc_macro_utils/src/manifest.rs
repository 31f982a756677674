use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a codec crate as seen from the
/// caller's Cargo.toml.
///
/// Generated code must name `uc_codec` through whatever the invoking crate
/// actually depends on, which is either the engine crate itself or the
/// `uncodable` facade.
///
/// # Example
///
/// ```rust
/// # use uc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::crate_path("uc_codec");
/// ```
///
/// Reading the manifest is not free, so a derive should resolve the path
/// once and pass it around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `uc_` and the caller depends on
///    the facade `uncodable`, return `::uncodable::short_name`
///    (e.g. `uc_codec` -> `::uncodable::codec`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
/// The codec crate refers to itself through `extern crate self as uc_codec;`
/// so that both library code and doctests can use `::uc_codec`.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "uncodable";
const CRATE_PREFIX: &str = "uc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Option<Document<Box<str>>> {
        let manifest = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(manifest).ok()
    }

    // Names handled here are crate identifiers, which are always valid paths.
    #[inline]
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    #[inline]
    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{module}")));
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_path(&format!("::{name}"))
    }

    /// Run `func` against the [Manifest] of the caller's Cargo.toml, or return
    /// `None` when no readable manifest exists (e.g. outside of cargo).
    ///
    /// The parsed manifest is cached per path and re-read when the file's
    /// modified time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> Option<R> {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path()?;
        let modified_time = Self::get_manifest_modified_time(&manifest_path).ok()?;

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return Some(func(manifest));
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path)?,
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        Some(result)
    }

    /// Resolve the path of crate `name` through the caller's manifest, falling
    /// back to `::name` when the manifest is unavailable.
    pub fn crate_path(name: &str) -> syn::Path {
        Self::shared(|manifest| manifest.get_crate_path(name))
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: toml_edit::Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    fn render(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect();
        format!("::{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nuc_codec = \"0.0.1\"\n");
        assert_eq!(render(&m.get_crate_path("uc_codec")), "::uc_codec");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dev-dependencies]\nuncodable = { path = \"..\" }\n");
        assert_eq!(render(&m.get_crate_path("uc_codec")), "::uncodable::codec");
    }

    #[test]
    fn unknown_falls_back() {
        let m = manifest("[package]\nname = \"x\"\n");
        assert_eq!(render(&m.get_crate_path("uc_codec")), "::uc_codec");
    }
}

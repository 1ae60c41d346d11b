//! Compiler-host augmentation.
//!
//! Wraps the underlying compiler host so that, when function-component
//! support is enabled, every request for a `.ts` source is answered with the
//! transform's output instead of the raw file. Everything else delegates
//! unchanged.

use crate::error::HostError;
use crate::options::{FunctionComponentSupport, HostOptions};
use angular_fn_transformer::{compile_angular_fn, TransformOptions};
use camino::Utf8Path;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// The underlying compiler host the integration wraps.
pub trait SourceHost {
    /// Returns the source text the compiler should see for `path`.
    fn get_source(&self, path: &Utf8Path) -> Option<String>;

    /// Reads a file's raw content.
    fn read_file(&self, path: &Utf8Path) -> Option<String>;

    /// Whether a file exists.
    fn file_exists(&self, path: &Utf8Path) -> bool;
}

/// The resource kinds the compiler may ask the host to transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Style,
    Template,
}

/// A compiler host with the function-component transform spliced into its
/// source lookup.
pub struct AugmentedHost<H> {
    inner: H,
    options: HostOptions,
    include: Option<GlobSet>,
}

impl<H: SourceHost> AugmentedHost<H> {
    pub fn new(inner: H, options: HostOptions) -> Result<Self, HostError> {
        let include = match &options.support_function_components {
            FunctionComponentSupport::Include(patterns) => Some(build_include_set(patterns)?),
            _ => None,
        };
        Ok(Self {
            inner,
            options,
            include,
        })
    }

    /// Returns the source text for `path`, transformed when interception
    /// applies, otherwise exactly what the inner host returns.
    pub fn get_source(&self, path: &Utf8Path) -> Result<Option<String>, HostError> {
        if self.intercepts(path) {
            let Some(contents) = self.inner.read_file(path) else {
                return Ok(None);
            };
            let transformed = compile_angular_fn(
                path.as_str(),
                &contents,
                TransformOptions {
                    format: self.options.is_prod,
                },
            )?;
            return Ok(Some(transformed));
        }

        Ok(self.inner.get_source(path))
    }

    fn intercepts(&self, path: &Utf8Path) -> bool {
        if !self.options.support_function_components.is_enabled() {
            return false;
        }
        if !path.as_str().ends_with(".ts") {
            return false;
        }
        match &self.include {
            Some(set) => set.is_match(path.as_std_path()),
            None => true,
        }
    }

    /// Pass-through to the inner host.
    pub fn read_file(&self, path: &Utf8Path) -> Option<String> {
        self.inner.read_file(path)
    }

    /// Pass-through to the inner host.
    pub fn file_exists(&self, path: &Utf8Path) -> bool {
        self.inner.file_exists(path)
    }

    /// Reads a component resource (template or stylesheet).
    pub fn read_resource(&self, path: &Utf8Path) -> Result<String, HostError> {
        self.inner
            .read_file(path)
            .ok_or_else(|| HostError::MissingResource(path.to_owned()))
    }

    /// Resource-transform hook.
    pub fn transform_resource(&self, _data: &str, kind: ResourceKind) -> Option<String> {
        // Only style resources are supported currently.
        if kind != ResourceKind::Style {
            return None;
        }

        None
    }
}

fn build_include_set(patterns: &[String]) -> Result<GlobSet, HostError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| HostError::InvalidIncludePattern {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| HostError::InvalidIncludePattern {
        pattern: e.glob().unwrap_or_default().to_string(),
        message: e.kind().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    const COUNTER: &str = r#"import { Component } from '@analogjs/angular-fn';

Component({ selector: 'app-counter' })(() => {
  const count = 0;
});
"#;

    struct MapHost {
        files: HashMap<Utf8PathBuf, String>,
    }

    impl MapHost {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(path, text)| (Utf8PathBuf::from(path), text.to_string()))
                    .collect(),
            }
        }
    }

    impl SourceHost for MapHost {
        fn get_source(&self, path: &Utf8Path) -> Option<String> {
            self.read_file(path)
        }

        fn read_file(&self, path: &Utf8Path) -> Option<String> {
            self.files.get(path).cloned()
        }

        fn file_exists(&self, path: &Utf8Path) -> bool {
            self.files.contains_key(path)
        }
    }

    fn enabled_options() -> HostOptions {
        HostOptions {
            support_function_components: FunctionComponentSupport::Enabled,
            is_prod: false,
        }
    }

    #[test]
    fn disabled_host_delegates_unchanged() {
        let host = AugmentedHost::new(
            MapHost::new(&[("src/app/my-counter.ts", COUNTER)]),
            HostOptions::default(),
        )
        .unwrap();

        let source = host
            .get_source(Utf8Path::new("src/app/my-counter.ts"))
            .unwrap();
        assert_eq!(source.as_deref(), Some(COUNTER));
    }

    #[test]
    fn enabled_host_transforms_ts_sources() {
        let host = AugmentedHost::new(
            MapHost::new(&[("src/app/my-counter.ts", COUNTER)]),
            enabled_options(),
        )
        .unwrap();

        let source = host
            .get_source(Utf8Path::new("src/app/my-counter.ts"))
            .unwrap()
            .unwrap();
        assert!(source.contains("class MyCounterAnalogComponent"));
        assert!(source.contains("import { Component } from '@angular/core';"));
    }

    #[test]
    fn enabled_host_leaves_other_extensions_alone() {
        let css = "div { color: red; }";
        let host = AugmentedHost::new(
            MapHost::new(&[("src/app/styles.css", css)]),
            enabled_options(),
        )
        .unwrap();

        let source = host.get_source(Utf8Path::new("src/app/styles.css")).unwrap();
        assert_eq!(source.as_deref(), Some(css));
    }

    #[test]
    fn include_globs_scope_the_interception() {
        let host = AugmentedHost::new(
            MapHost::new(&[
                ("src/app/my-counter.ts", COUNTER),
                ("src/lib/my-counter.ts", COUNTER),
            ]),
            HostOptions {
                support_function_components: FunctionComponentSupport::Include(vec![
                    "src/app/**/*.ts".to_string(),
                ]),
                is_prod: false,
            },
        )
        .unwrap();

        let inside = host
            .get_source(Utf8Path::new("src/app/my-counter.ts"))
            .unwrap()
            .unwrap();
        let outside = host
            .get_source(Utf8Path::new("src/lib/my-counter.ts"))
            .unwrap()
            .unwrap();
        assert!(inside.contains("class MyCounterAnalogComponent"));
        assert_eq!(outside, COUNTER);
    }

    #[test]
    fn invalid_include_pattern_fails_construction() {
        let result = AugmentedHost::new(
            MapHost::new(&[]),
            HostOptions {
                support_function_components: FunctionComponentSupport::Include(vec![
                    "src/app/[".to_string(),
                ]),
                is_prod: false,
            },
        );
        assert!(matches!(
            result,
            Err(HostError::InvalidIncludePattern { .. })
        ));
    }

    #[test]
    fn transform_failures_propagate() {
        let source = r#"import { Component } from '@analogjs/angular-fn';

Component({})(() => {
  return 1;
});
"#;
        let host = AugmentedHost::new(
            MapHost::new(&[("src/app/bad.ts", source)]),
            enabled_options(),
        )
        .unwrap();

        assert!(matches!(
            host.get_source(Utf8Path::new("src/app/bad.ts")),
            Err(HostError::Transform(_))
        ));
    }

    #[test]
    fn missing_source_is_not_an_error() {
        let host = AugmentedHost::new(MapHost::new(&[]), enabled_options()).unwrap();
        assert_eq!(host.get_source(Utf8Path::new("src/app/gone.ts")).unwrap(), None);
    }

    #[test]
    fn file_operations_pass_through() {
        let host = AugmentedHost::new(
            MapHost::new(&[("src/app/my-counter.ts", COUNTER)]),
            enabled_options(),
        )
        .unwrap();

        assert_eq!(
            host.read_file(Utf8Path::new("src/app/my-counter.ts")).as_deref(),
            Some(COUNTER)
        );
        assert!(host.file_exists(Utf8Path::new("src/app/my-counter.ts")));
        assert!(!host.file_exists(Utf8Path::new("src/app/other.ts")));
    }

    #[test]
    fn missing_resource_is_an_error() {
        let host = AugmentedHost::new(MapHost::new(&[]), enabled_options()).unwrap();
        let err = host
            .read_resource(Utf8Path::new("src/app/counter.html"))
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("unable to locate component resource"));
    }

    #[test]
    fn resources_are_never_transformed() {
        let host = AugmentedHost::new(MapHost::new(&[]), enabled_options()).unwrap();
        assert_eq!(host.transform_resource("div {}", ResourceKind::Style), None);
        assert_eq!(
            host.transform_resource("<div></div>", ResourceKind::Template),
            None
        );
    }
}

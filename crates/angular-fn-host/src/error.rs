//! Host error types.

use angular_fn_transformer::TransformError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Setup guide shown when the authoring symbol is used without the compiler
/// support being wired in.
pub const FEATURE_DISABLED_GUIDE: &str = "\
You've attempted to use `@analogjs/angular-fn` without enabling the authoring \
functionality in the Vite plugin.

To enable the authoring functionality, add the following to your Vite config:

```
import { defineConfig } from 'vite'
import analog from '@analogjs/platform';

export default defineConfig({
  plugins: [
    analog({
      vite: {
        experimental: {
          supportFunctionComponents: true,
        },
      },
    }),
  ]
})
```

Without this configuration, any of the runtime behavior that depends on the \
authoring functionality (currently everything) will throw this error.";

/// An error raised at the host boundary.
#[derive(Debug, Error)]
pub enum HostError {
    /// A `supportFunctionComponents.include` pattern failed to compile.
    #[error("invalid include pattern `{pattern}`: {message}")]
    InvalidIncludePattern { pattern: String, message: String },

    /// A component resource (template or stylesheet) could not be read.
    #[error("unable to locate component resource: {0}")]
    MissingResource(Utf8PathBuf),

    /// The transform rejected a source file.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The authoring feature was used without the enabling configuration flag.
    #[error("{FEATURE_DISABLED_GUIDE}")]
    FeatureDisabled,
}

/// The placeholder counterpart of the authoring factory.
///
/// The authoring package exposes `Component` at runtime purely so that using
/// it without compiler support fails with a setup guide rather than a silent
/// missing-symbol failure. This produces that diagnostic.
pub fn unconfigured() -> HostError {
    HostError::FeatureDisabled
}

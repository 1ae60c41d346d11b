//! Transform error types.

use thiserror::Error;

/// An error that aborts the transform for one file.
///
/// Every variant is fatal at file scope: the caller must not use any output
/// for the file, and no partial rewrite is ever produced. These are
/// deterministic input-shape failures, so there is nothing to retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The file path has no usable basename to derive a class name from.
    #[error("missing component name for `{path}`")]
    MissingComponentName { path: String },

    /// The file text is not parseable TypeScript.
    #[error("failed to parse `{path}`: {message}")]
    Parse { path: String, message: String },

    /// The authoring module is imported, but not the `Component` symbol.
    ///
    /// Distinct from the feature simply not being used: the import exists but
    /// does not expose what the transform expects.
    #[error("missing named import of `Component` from `{module}` in `{path}`")]
    MissingComponentImport { module: String, path: String },

    /// The resolved local name is bound by more than one import declaration,
    /// so there is no single import to remove.
    #[error("ambiguous import of `{name}` in `{path}`: bound by more than one import declaration")]
    AmbiguousImport { name: String, path: String },

    /// The metadata call has no arguments.
    #[error("missing component metadata argument in `{call}`")]
    MissingMetadata { call: String },

    /// The outer call supplies neither an arrow function nor a function
    /// expression as the component body.
    #[error("missing function body in `{call}`")]
    MissingFunctionBody { call: String },

    /// The body function has no block (e.g. an expression-bodied arrow).
    #[error("missing function block in `{call}`")]
    MissingFunctionBlock { call: String },

    /// The body already contains a top-level `return` statement.
    ///
    /// Merging an authored return value with the synthesized one is not
    /// supported, and silently proceeding would lose data or emit invalid
    /// code.
    #[error(
        "function body already has a return statement in `{call}`.\n\
         Return statements are not currently allowed in Angular function components."
    )]
    ReturnNotSupported { call: String },

    /// A top-level declaration in the body has no simple identifier name
    /// (e.g. a destructuring pattern).
    #[error("missing variable name in `{decl}`")]
    MissingDeclarationName { decl: String },
}

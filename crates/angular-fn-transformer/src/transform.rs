//! Whole-file transform orchestration.

use crate::error::TransformError;
use crate::parse::SourceText;
use crate::{locate, names, parse, rewrite, DECORATOR_MODULE, DECORATOR_SYMBOL};
use text_size::TextRange;

/// Options for the transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    /// Forwarded by the build integration (its production flag). The rewriter
    /// emits its canonical spacing regardless; formatting of the synthesized
    /// output is not implemented yet.
    pub format: bool,
}

/// Rewrites every function-style component in one file into the decorated
/// class form.
///
/// Returns the input text unchanged when the file does not import the
/// authoring module, or imports it but never invokes the factory. Otherwise
/// returns the rewritten text: each curried call replaced by a class
/// declaration, the authoring import replaced by the `@angular/core` import.
///
/// Any precondition violation fails the whole file; no partial rewrite is
/// returned.
pub fn compile_angular_fn(
    file_path: &str,
    file_text: &str,
    options: TransformOptions,
) -> Result<String, TransformError> {
    let _ = options.format;

    let entity_name = names::entity_name(file_path)?;
    let (module, file_start) = parse::parse_module(file_path, file_text)?;
    let src = SourceText::new(file_text, file_start);

    let Some(import) = locate::find_authoring_import(&module, &src, file_path)? else {
        // Nothing to transform.
        return Ok(file_text.to_string());
    };

    let sites = locate::collect_call_sites(&module, &import.local, &src)?;
    if sites.is_empty() {
        return Ok(file_text.to_string());
    }

    let mut replacements: Vec<(TextRange, String)> = sites
        .iter()
        .map(|site| (site.range, rewrite::synthesize_class(site, &entity_name)))
        .collect();
    replacements.push((
        import.range,
        format!("import {{ {DECORATOR_SYMBOL} }} from '{DECORATOR_MODULE}';"),
    ));

    Ok(rewrite::splice(file_text, replacements))
}

//! Rewriting one curried call site into a class declaration.

use crate::error::TransformError;
use crate::parse::SourceText;
use crate::DECORATOR_SYMBOL;
use smol_str::SmolStr;
use swc_common::Spanned;
use swc_ecma_ast::{BlockStmt, BlockStmtOrExpr, CallExpr, Decl, Expr, Pat, Stmt};
use text_size::TextRange;

/// Everything needed to substitute one call site: the span to replace, the
/// raw metadata text, the body function with the synthesized return injected,
/// and the harvested declaration names in source order.
pub(crate) struct CallSiteRewrite {
    pub range: TextRange,
    pub metadata: String,
    pub augmented_fn: String,
    pub names: Vec<SmolStr>,
}

/// Extracts one matched `fn(metadata)(body)` call site.
///
/// `outer` is the body call, `inner` the metadata call. Every precondition
/// failure here aborts the whole file's transform.
pub(crate) fn extract_call_site(
    outer: &CallExpr,
    inner: &CallExpr,
    src: &SourceText,
) -> Result<CallSiteRewrite, TransformError> {
    let call_text = src.slice(outer.span);

    // The metadata object is copied through verbatim, never validated.
    let metadata_arg = inner
        .args
        .first()
        .ok_or_else(|| TransformError::MissingMetadata {
            call: call_text.to_string(),
        })?;
    let metadata = src.slice(metadata_arg.expr.span()).to_string();

    // `() => { ... }` is checked before `function() { ... }`.
    let mut body = None;
    for arg in &outer.args {
        if let Expr::Arrow(arrow) = &*arg.expr {
            let block = match &*arrow.body {
                BlockStmtOrExpr::BlockStmt(block) => Some(block),
                BlockStmtOrExpr::Expr(_) => None,
            };
            body = Some((arg.expr.span(), block));
            break;
        }
    }
    if body.is_none() {
        for arg in &outer.args {
            if let Expr::Fn(fn_expr) = &*arg.expr {
                body = Some((arg.expr.span(), fn_expr.function.body.as_ref()));
                break;
            }
        }
    }

    let Some((fn_span, block)) = body else {
        return Err(TransformError::MissingFunctionBody {
            call: call_text.to_string(),
        });
    };
    let Some(block) = block else {
        return Err(TransformError::MissingFunctionBlock {
            call: call_text.to_string(),
        });
    };

    if block.stmts.iter().any(|stmt| matches!(stmt, Stmt::Return(_))) {
        return Err(TransformError::ReturnNotSupported {
            call: call_text.to_string(),
        });
    }

    let names = harvest_declarations(block, src)?;
    let augmented_fn = augment_body(src.slice(fn_span), src.range(fn_span), src.range(block.span), &names);

    Ok(CallSiteRewrite {
        range: src.range(outer.span),
        metadata,
        augmented_fn,
        names,
    })
}

/// Collects the name of every variable declarator and function declaration
/// that is a direct child of the block, in source order. Declarations nested
/// in inner blocks are deliberately left alone, and duplicate names are kept
/// as-is (the last one wins in the synthesized return object, mirroring the
/// source).
fn harvest_declarations(
    block: &BlockStmt,
    src: &SourceText,
) -> Result<Vec<SmolStr>, TransformError> {
    let mut names = Vec::new();
    for stmt in &block.stmts {
        match stmt {
            Stmt::Decl(Decl::Fn(fn_decl)) => names.push(SmolStr::new(&fn_decl.ident.sym)),
            Stmt::Decl(Decl::Var(var_decl)) => {
                for decl in &var_decl.decls {
                    match &decl.name {
                        Pat::Ident(ident) => names.push(SmolStr::new(&ident.id.sym)),
                        _ => {
                            return Err(TransformError::MissingDeclarationName {
                                decl: src.slice(decl.span).to_string(),
                            })
                        }
                    }
                }
            }
            _ => {}
        }
    }
    Ok(names)
}

/// Injects `return { a: a, b: b };` as the final statement of the body block,
/// producing the function text that the synthesized class invokes.
fn augment_body(fn_text: &str, fn_range: TextRange, block_range: TextRange, names: &[SmolStr]) -> String {
    let props = names
        .iter()
        .map(|name| format!("{name}: {name}"))
        .collect::<Vec<_>>()
        .join(", ");
    let return_stmt = if props.is_empty() {
        "return {};".to_string()
    } else {
        format!("return {{ {props} }};")
    };

    // Split the function text right before the block's closing brace. The
    // newline before the injected statement keeps the output valid even when
    // the last authored statement has no trailing semicolon.
    let close = usize::from(block_range.end() - fn_range.start()) - 1;
    let (head, tail) = fn_text.split_at(close);
    format!("{head}\n{return_stmt}\n{tail}")
}

/// Emits the decorated class that replaces one call site: one `data` field
/// that invokes the augmented body once, and one field per harvested name
/// reading off that invocation result.
pub(crate) fn synthesize_class(site: &CallSiteRewrite, entity_name: &str) -> String {
    let mut fields = String::new();
    for name in &site.names {
        fields.push_str("  ");
        fields.push_str(name);
        fields.push_str(" = this.data.");
        fields.push_str(name);
        fields.push_str(";\n");
    }

    format!(
        "@{decorator}({metadata})\nclass {entity_name} {{\n  data = ({body})();\n\n{fields}}}",
        decorator = DECORATOR_SYMBOL,
        metadata = site.metadata,
        body = site.augmented_fn,
    )
}

/// Replaces non-overlapping spans in one pass, left to right, so earlier
/// substitutions never shift later spans.
pub(crate) fn splice(text: &str, mut replacements: Vec<(TextRange, String)>) -> String {
    replacements.sort_by_key(|(range, _)| range.start());

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    for (range, replacement) in replacements {
        let start = usize::from(range.start());
        let end = usize::from(range.end());
        debug_assert!(start >= cursor, "replacement spans must not overlap");
        out.push_str(&text[cursor..start]);
        out.push_str(&replacement);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(start.into(), end.into())
    }

    #[test]
    fn splice_replaces_single_span() {
        let out = splice("a b c", vec![(range(2, 3), "x".to_string())]);
        assert_eq!(out, "a x c");
    }

    #[test]
    fn splice_handles_unsorted_spans() {
        let out = splice(
            "one two three",
            vec![
                (range(8, 13), "3".to_string()),
                (range(0, 3), "1".to_string()),
            ],
        );
        assert_eq!(out, "1 two 3");
    }

    #[test]
    fn splice_with_no_replacements_is_identity() {
        assert_eq!(splice("unchanged", Vec::new()), "unchanged");
    }

    #[test]
    fn augment_injects_return_before_closing_brace() {
        let fn_text = "() => { const a = 1; }";
        let out = augment_body(
            fn_text,
            range(0, fn_text.len() as u32),
            range(6, fn_text.len() as u32),
            &[SmolStr::new("a")],
        );
        assert_eq!(out, "() => { const a = 1; \nreturn { a: a };\n}");
    }

    #[test]
    fn augment_with_no_names_returns_empty_object() {
        let fn_text = "() => {}";
        let out = augment_body(
            fn_text,
            range(0, fn_text.len() as u32),
            range(6, fn_text.len() as u32),
            &[],
        );
        assert_eq!(out, "() => {\nreturn {};\n}");
    }
}

//! TypeScript parsing and span-to-offset mapping.

use crate::error::TransformError;
use std::sync::Arc;
use swc_common::{BytePos, FileName, SourceMap, Span};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};
use text_size::TextRange;

/// One file's text plus the byte position swc assigned to its start.
///
/// swc spans are absolute within the `SourceMap`, so slicing the original
/// text requires subtracting the file's start position first.
pub(crate) struct SourceText<'a> {
    text: &'a str,
    file_start: BytePos,
}

impl<'a> SourceText<'a> {
    pub(crate) fn new(text: &'a str, file_start: BytePos) -> Self {
        Self { text, file_start }
    }

    pub(crate) fn range(&self, span: Span) -> TextRange {
        let start = span.lo.0.saturating_sub(self.file_start.0);
        let end = span.hi.0.saturating_sub(self.file_start.0);
        TextRange::new(start.into(), end.into())
    }

    pub(crate) fn slice(&self, span: Span) -> &'a str {
        let range = self.range(span);
        &self.text[usize::from(range.start())..usize::from(range.end())]
    }
}

/// Parses one file's text as a TypeScript module.
///
/// Decorators are enabled since the input is Angular-flavored TypeScript.
/// Returns the module plus the file's start position for span mapping.
pub(crate) fn parse_module(
    file_path: &str,
    file_text: &str,
) -> Result<(Module, BytePos), TransformError> {
    let cm: Arc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        FileName::Custom(file_path.to_string()).into(),
        file_text.to_string(),
    );
    let file_start = fm.start_pos;

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: false,
        decorators: true,
        ..Default::default()
    });

    let mut parser = Parser::new(syntax, StringInput::from(&*fm), None);
    let module = parser.parse_module().map_err(|e| TransformError::Parse {
        path: file_path.to_string(),
        message: e.kind().msg().to_string(),
    })?;

    Ok((module, file_start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_common::Spanned;

    #[test]
    fn parses_typescript_with_decorators() {
        let src = "@Component({}) class Foo { x: number = 1; }";
        assert!(parse_module("foo.ts", src).is_ok());
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let err = parse_module("broken.ts", "const = ;").unwrap_err();
        match err {
            TransformError::Parse { path, .. } => assert_eq!(path, "broken.ts"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn slices_spans_relative_to_file_start() {
        let src = "const answer = 42;";
        let (module, file_start) = parse_module("t.ts", src).unwrap();
        let text = SourceText::new(src, file_start);
        let slice = text.slice(module.body[0].span());
        assert!(slice.starts_with("const answer"));
        assert!(slice.contains("42"));
    }
}

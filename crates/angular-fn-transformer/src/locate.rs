//! Locating the authoring import and its curried call sites.

use crate::error::TransformError;
use crate::parse::SourceText;
use crate::rewrite::{extract_call_site, CallSiteRewrite};
use crate::{AUTHORING_MODULE, AUTHORING_SYMBOL};
use smol_str::SmolStr;
use swc_ecma_ast::{
    Callee, CallExpr, Expr, ImportDecl, ImportNamedSpecifier, ImportSpecifier, Module, ModuleDecl,
    ModuleExportName, ModuleItem,
};
use swc_ecma_visit::{Visit, VisitWith};
use text_size::TextRange;

/// The authoring import found in a file: the local name all call-site
/// matching uses (the alias if one was given), and the span of the import
/// declaration so it can be rewritten away.
pub(crate) struct AuthoringImport {
    pub local: SmolStr,
    pub range: TextRange,
}

/// Finds the authoring import, if any.
///
/// Returns `Ok(None)` when the file does not import the authoring module at
/// all — the expected case for every file not using the feature. An import of
/// the module without the `Component` named import is a misuse and fails.
/// A local name bound by more than one import declaration fails as ambiguous,
/// since there would be no single declaration to remove afterwards.
pub(crate) fn find_authoring_import(
    module: &Module,
    src: &SourceText,
    path: &str,
) -> Result<Option<AuthoringImport>, TransformError> {
    let Some(import) = module.body.iter().find_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(import))
            if import.src.value.to_string_lossy() == AUTHORING_MODULE =>
        {
            Some(import)
        }
        _ => None,
    }) else {
        return Ok(None);
    };

    let local = import
        .specifiers
        .iter()
        .find_map(|spec| match spec {
            ImportSpecifier::Named(named) if imported_name(named) == AUTHORING_SYMBOL => {
                Some(SmolStr::new(&named.local.sym))
            }
            _ => None,
        })
        .ok_or_else(|| TransformError::MissingComponentImport {
            module: AUTHORING_MODULE.to_string(),
            path: path.to_string(),
        })?;

    let bindings = module
        .body
        .iter()
        .filter(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => binds_local(import, &local),
            _ => false,
        })
        .count();
    if bindings > 1 {
        return Err(TransformError::AmbiguousImport {
            name: local.to_string(),
            path: path.to_string(),
        });
    }

    Ok(Some(AuthoringImport {
        local,
        range: src.range(import.span),
    }))
}

/// The name a named import specifier refers to in the source module, which is
/// the explicit `imported` name when aliased and the local name otherwise.
fn imported_name(named: &ImportNamedSpecifier) -> String {
    match &named.imported {
        Some(ModuleExportName::Ident(ident)) => ident.sym.to_string(),
        Some(ModuleExportName::Str(s)) => s.value.to_string_lossy().into_owned(),
        None => named.local.sym.to_string(),
    }
}

fn binds_local(import: &ImportDecl, name: &str) -> bool {
    import.specifiers.iter().any(|spec| {
        let local = match spec {
            ImportSpecifier::Named(named) => &named.local,
            ImportSpecifier::Default(default) => &default.local,
            ImportSpecifier::Namespace(ns) => &ns.local,
        };
        &*local.sym == name
    })
}

/// Collects every curried call site of the resolved authoring name, fully
/// extracted and ready for synthesis.
///
/// A site is matched as the whole two-call shape in a single downward scan:
/// an outer call whose callee is itself a call whose callee is exactly the
/// resolved identifier. The identifier appearing in any other position (a
/// property access, a bare reference, a single uncurried call) never matches.
pub(crate) fn collect_call_sites(
    module: &Module,
    target: &str,
    src: &SourceText,
) -> Result<Vec<CallSiteRewrite>, TransformError> {
    let mut collector = CallSiteCollector {
        target,
        src,
        sites: Vec::new(),
        error: None,
    };
    module.visit_with(&mut collector);

    if let Some(error) = collector.error {
        return Err(error);
    }

    // A site nested inside another site's body is already rewritten as part
    // of its container's text; replacing both would overlap.
    let mut sites = collector.sites;
    sites.sort_by_key(|site| site.range.start());
    sites.dedup_by(|next, kept| kept.range.contains_range(next.range));
    Ok(sites)
}

struct CallSiteCollector<'a> {
    target: &'a str,
    src: &'a SourceText<'a>,
    sites: Vec<CallSiteRewrite>,
    error: Option<TransformError>,
}

impl Visit for CallSiteCollector<'_> {
    fn visit_call_expr(&mut self, call: &CallExpr) {
        call.visit_children_with(self);
        if self.error.is_some() {
            return;
        }

        let Callee::Expr(callee) = &call.callee else {
            return;
        };
        let Expr::Call(inner) = &**callee else {
            return;
        };
        let Callee::Expr(inner_callee) = &inner.callee else {
            return;
        };
        let Expr::Ident(ident) = &**inner_callee else {
            return;
        };
        if &*ident.sym != self.target {
            return;
        }

        match extract_call_site(call, inner, self.src) {
            Ok(site) => self.sites.push(site),
            Err(error) => self.error = Some(error),
        }
    }
}

//! Host configuration, mirroring the build tool's plugin options.

use serde::Deserialize;

/// Whether function-component authoring is enabled.
///
/// Deserializes from the build tool's `supportFunctionComponents` value,
/// which is either a bool or `{ "include": ["src/app/**/*.ts"] }` to scope
/// the interception to matching paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "SupportRepr")]
pub enum FunctionComponentSupport {
    /// The feature is off; the host delegates every request unchanged.
    #[default]
    Disabled,
    /// Every `.ts` source is intercepted.
    Enabled,
    /// Only `.ts` sources matching one of the glob patterns are intercepted.
    Include(Vec<String>),
}

impl FunctionComponentSupport {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SupportRepr {
    Flag(bool),
    Include { include: Vec<String> },
}

impl From<SupportRepr> for FunctionComponentSupport {
    fn from(repr: SupportRepr) -> Self {
        match repr {
            SupportRepr::Flag(false) => Self::Disabled,
            SupportRepr::Flag(true) => Self::Enabled,
            SupportRepr::Include { include } => Self::Include(include),
        }
    }
}

/// Options the build tool hands to the host integration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostOptions {
    /// The `supportFunctionComponents` plugin option.
    pub support_function_components: FunctionComponentSupport,
    /// The build tool's production flag, forwarded to the transform.
    pub is_prod: bool,
}

//! Build-time rewriter for Angular function-style components.
//!
//! A component authored as a curried factory call
//! (`Component(metadata)(() => { ... })`, imported from the authoring module)
//! is rewritten into the decorated-class declaration the Angular compiler
//! consumes. Every top-level variable and function declared in the body is
//! promoted to a field on the synthesized class, reading off a single `data`
//! field that invokes the body once.
//!
//! # Example
//!
//! ```
//! use angular_fn_transformer::{compile_angular_fn, TransformOptions};
//!
//! let source = r#"import { Component } from '@analogjs/angular-fn';
//!
//! Component({ selector: 'app-counter', template: '<div>{{count}}</div>' })(() => {
//!   const count = 0;
//!   function inc() {}
//! });
//! "#;
//!
//! let output = compile_angular_fn("my-counter.ts", source, TransformOptions::default()).unwrap();
//! assert!(output.contains("class MyCounterAnalogComponent"));
//! assert!(output.contains("count = this.data.count;"));
//! assert!(output.contains("import { Component } from '@angular/core';"));
//! ```

mod error;
mod locate;
mod names;
mod parse;
mod rewrite;
mod transform;

pub use error::TransformError;
pub use names::{entity_name, to_class_name};
pub use transform::{compile_angular_fn, TransformOptions};

/// Module specifier that opts a file into function-style authoring.
pub const AUTHORING_MODULE: &str = "@analogjs/angular-fn";

/// The factory symbol exported by the authoring module.
pub const AUTHORING_SYMBOL: &str = "Component";

/// Module the synthesized decorator import is taken from.
pub const DECORATOR_MODULE: &str = "@angular/core";

/// The decorator applied to every synthesized class.
pub const DECORATOR_SYMBOL: &str = "Component";

/// Suffix appended to every synthesized class name.
pub const ENTITY_SUFFIX: &str = "AnalogComponent";

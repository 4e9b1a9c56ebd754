//! Transform algebra
//!
//! Decodes and composes the restricted SVG transform grammar the editor
//! works with. Only two functions are understood when *reading* a position:
//!
//! - `translate(tx[, ty])`
//! - `matrix(a, b, c, d, e, f)`
//!
//! Anything else (`rotate`, `scale`, `skew`, ...) is carried through as an
//! opaque string. Composition is syntactic: nested transform lists are
//! concatenated outer-first, never multiplied out.
//!
//! The editor only ever *writes* translations, so the canonical output form
//! of a transform is `translate(x y) <rest>`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::utils::numbers::{format_number, parse_leading_f64};

static FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z][A-Za-z0-9-]*)\s*\(([^)]*)\)").expect("transform function pattern")
});

static LEADING_FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9-]*)\s*\(([^)]*)\)").expect("leading transform pattern")
});

static ARG_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,]+").expect("argument separator pattern"));

/// One `name(args)` entry of a transform list, with its raw argument text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformFunction {
    pub name: String,
    pub args: String,
}

impl TransformFunction {
    /// Argument values. Malformed numbers read as `0`.
    pub fn numbers(&self) -> Vec<f64> {
        let args = self.args.trim();
        if args.is_empty() {
            return Vec::new();
        }
        ARG_SEPARATOR_RE
            .split(args)
            .filter(|arg| !arg.is_empty())
            .map(|arg| parse_leading_f64(arg).unwrap_or(0.0))
            .collect()
    }

    /// Translation carried by this function, if it is one the algebra reads.
    pub fn translation(&self) -> Option<(f64, f64)> {
        let values = self.numbers();
        match (self.name.as_str(), values.as_slice()) {
            ("matrix", [_, _, _, _, e, f]) => Some((*e, *f)),
            ("translate", [tx]) => Some((*tx, 0.0)),
            ("translate", [tx, ty]) => Some((*tx, *ty)),
            _ => None,
        }
    }
}

impl fmt::Display for TransformFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args)
    }
}

/// Split a transform list into its functions, in source order.
///
/// Text between functions that is not itself a function is skipped.
pub fn split_transform(transform: &str) -> Vec<TransformFunction> {
    FUNCTION_RE
        .captures_iter(transform)
        .map(|caps| TransformFunction {
            name: caps[1].to_string(),
            args: caps[2].to_string(),
        })
        .collect()
}

/// Translation `(x, y)` encoded by the leading function of `transform`.
///
/// `matrix(a,b,c,d,e,f)` yields `(e, f)`; `translate(tx[, ty])` yields
/// `(tx, ty)` with `ty` defaulting to 0. Missing, empty, or unrecognized
/// transforms yield `(0, 0)`. This never fails.
///
/// ```
/// use svg_editor_wasm::transform::decode_translation;
///
/// assert_eq!(decode_translation(Some("matrix(1,0,0,1,30,40)")), (30.0, 40.0));
/// assert_eq!(decode_translation(Some("translate(5,7)")), (5.0, 7.0));
/// assert_eq!(decode_translation(Some("rotate(45)")), (0.0, 0.0));
/// assert_eq!(decode_translation(None), (0.0, 0.0));
/// ```
pub fn decode_translation(transform: Option<&str>) -> (f64, f64) {
    let Some(transform) = transform else {
        return (0.0, 0.0);
    };

    LEADING_FUNCTION_RE
        .captures(transform)
        .map(|caps| TransformFunction {
            name: caps[1].to_string(),
            args: caps[2].to_string(),
        })
        .and_then(|function| function.translation())
        .unwrap_or((0.0, 0.0))
}

/// Compose an inherited (outer) transform with an element's own (inner)
/// transform. Purely syntactic: `outer inner`, trimmed.
pub fn compose_transform(outer: &str, inner: &str) -> String {
    format!("{} {}", outer, inner).trim().to_string()
}

/// Canonical `translate(x y)` followed by `rest` when `rest` is non-empty.
pub fn format_translate(x: f64, y: f64, rest: &str) -> String {
    let translate = format!("translate({} {})", format_number(x), format_number(y));
    let rest = rest.trim();
    if rest.is_empty() {
        translate
    } else {
        format!("{} {}", translate, rest)
    }
}

/// Remove every `translate(...)` from a transform list, keeping the other
/// functions in order. This is the part a move leaves untouched.
pub fn strip_translation(transform: &str) -> String {
    split_transform(transform)
        .iter()
        .filter(|function| function.name != "translate")
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

//! Size and offset token interpretation
//!
//! Document geometry fields arrive as loosely-typed values: numbers,
//! `"50%"` (percentage of the canvas axis), `"10%c"` (container
//! percentage, which the target framework also resolves against the
//! canvas), or `"12px"`. Everything here fails soft: a malformed or
//! missing component is replaced by its default, component by
//! component, and no error ever escapes this module.

use tracing::debug;

use super::context::LayoutContext;
use super::geometry::{Point, Size};

/// Default width for a control whose size is missing or malformed
pub const DEFAULT_WIDTH: i32 = 100;

/// Default height for a control whose size is missing or malformed
pub const DEFAULT_HEIGHT: i32 = 40;

use crate::parser::Value;

/// Resolve a raw `size` field to absolute pixels
///
/// Each component defaults independently; `["bad", 300]` yields
/// `(100, 300)`. Components clamp to zero so a normalized size is never
/// negative.
pub fn parse_size(raw: Option<&Value>, ctx: &LayoutContext) -> Size {
    let (w_raw, h_raw) = match raw.and_then(Value::as_array) {
        Some([w, h]) => (Some(w), Some(h)),
        _ => (None, None),
    };
    Size::new(
        size_component(w_raw, ctx.canvas_width, DEFAULT_WIDTH),
        size_component(h_raw, ctx.canvas_height, DEFAULT_HEIGHT),
    )
}

/// Resolve a raw `offset` field to a pixel delta
///
/// An optional `px` suffix is stripped; each component defaults
/// independently to zero.
pub fn parse_offset(raw: Option<&Value>) -> Point {
    let (x_raw, y_raw) = match raw.and_then(Value::as_array) {
        Some([x, y]) => (Some(x), Some(y)),
        _ => (None, None),
    };
    Point::new(offset_component(x_raw), offset_component(y_raw))
}

fn size_component(raw: Option<&Value>, canvas_extent: i32, default: i32) -> i32 {
    let resolved = match raw {
        Some(Value::Number(n)) => Some(*n),
        Some(Value::String(s)) => {
            let s = s.trim();
            if let Some(pct) = s.strip_suffix("%c") {
                pct.parse::<f64>()
                    .ok()
                    .map(|p| f64::from(canvas_extent) * p / 100.0)
            } else if let Some(pct) = s.strip_suffix('%') {
                pct.parse::<f64>()
                    .ok()
                    .map(|p| f64::from(canvas_extent) * p / 100.0)
            } else {
                s.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    match resolved {
        Some(n) if n.is_finite() => (n as i32).max(0),
        _ => {
            if let Some(raw) = raw {
                debug!(?raw, default, "malformed size component, using default");
            }
            default
        }
    }
}

fn offset_component(raw: Option<&Value>) -> i32 {
    let resolved = match raw {
        Some(Value::Number(n)) => Some(*n),
        Some(Value::String(s)) => {
            let s = s.trim();
            let s = s.strip_suffix("px").unwrap_or(s);
            s.trim().parse::<f64>().ok()
        }
        _ => None,
    };
    match resolved {
        Some(n) if n.is_finite() => n as i32,
        _ => 0,
    }
}

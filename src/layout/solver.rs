//! Closed-form position solving
//!
//! A control's base position is fully determined by its anchor pair and
//! size; `offset` is the only independently stored positional state.
//! Because the math is a pair of subtractions over integers, the drag
//! inverse is exact: `offset_for(absolute_position(o)) == o`.

use super::anchor::Anchor;
use super::context::LayoutContext;
use super::geometry::{Point, Size};

/// Position a control would have with zero offset
///
/// `anchor_to` resolves against the canvas; `anchor_from` resolves
/// against the control's own box, with the box acting as its own
/// container.
pub fn base_position(
    anchor_from: Anchor,
    anchor_to: Anchor,
    ctx: &LayoutContext,
    size: Size,
) -> Point {
    let canvas_ref = anchor_to.resolve(ctx.canvas_width, ctx.canvas_height, size.width, size.height);
    let box_ref = anchor_from.resolve(size.width, size.height, size.width, size.height);
    canvas_ref - box_ref
}

/// Absolute position: base plus the stored offset
pub fn absolute_position(
    anchor_from: Anchor,
    anchor_to: Anchor,
    ctx: &LayoutContext,
    size: Size,
    offset: Point,
) -> Point {
    base_position(anchor_from, anchor_to, ctx, size) + offset
}

/// Invert a drag: the offset that places the control at `target`
///
/// Anchors and size are never inferred from a drag; only the offset
/// absorbs the translation.
pub fn offset_for(
    anchor_from: Anchor,
    anchor_to: Anchor,
    ctx: &LayoutContext,
    size: Size,
    target: Point,
) -> Point {
    target - base_position(anchor_from, anchor_to, ctx, size)
}

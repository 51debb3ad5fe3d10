//! Anchor name resolution
//!
//! An anchor is one of nine named reference points on a rectangular
//! region: the four corners, the four edge midpoints, and the center.
//! Controls pin their own `anchor_from` point to the canvas's
//! `anchor_to` point.

use super::geometry::Point;

/// One of the nine named reference points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopMiddle,
    TopRight,
    LeftMiddle,
    Center,
    RightMiddle,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Anchor {
    /// Parse an anchor name
    ///
    /// Unknown names fall back to `TopLeft`, whose reference point is
    /// `(0, 0)` — the defined fallback, not an error.
    pub fn parse(name: &str) -> Anchor {
        match name {
            "top_left" => Anchor::TopLeft,
            "top_middle" => Anchor::TopMiddle,
            "top_right" => Anchor::TopRight,
            "left_middle" => Anchor::LeftMiddle,
            "center" => Anchor::Center,
            "right_middle" => Anchor::RightMiddle,
            "bottom_left" => Anchor::BottomLeft,
            "bottom_middle" => Anchor::BottomMiddle,
            "bottom_right" => Anchor::BottomRight,
            _ => Anchor::TopLeft,
        }
    }

    /// The canonical name, as persisted in documents
    pub fn name(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top_left",
            Anchor::TopMiddle => "top_middle",
            Anchor::TopRight => "top_right",
            Anchor::LeftMiddle => "left_middle",
            Anchor::Center => "center",
            Anchor::RightMiddle => "right_middle",
            Anchor::BottomLeft => "bottom_left",
            Anchor::BottomMiddle => "bottom_middle",
            Anchor::BottomRight => "bottom_right",
        }
    }

    /// All nine anchors, for exhaustive property checks
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopMiddle,
        Anchor::TopRight,
        Anchor::LeftMiddle,
        Anchor::Center,
        Anchor::RightMiddle,
        Anchor::BottomLeft,
        Anchor::BottomMiddle,
        Anchor::BottomRight,
    ];

    /// Reference point for a `box_w` x `box_h` box inside a
    /// `container_w` x `container_h` region
    ///
    /// Edges map to 0 or `container - box`; middles use integer floor
    /// division of the half extents.
    pub fn resolve(self, container_w: i32, container_h: i32, box_w: i32, box_h: i32) -> Point {
        let mid_x = container_w / 2 - box_w / 2;
        let mid_y = container_h / 2 - box_h / 2;
        let (x, y) = match self {
            Anchor::TopLeft => (0, 0),
            Anchor::TopMiddle => (mid_x, 0),
            Anchor::TopRight => (container_w - box_w, 0),
            Anchor::LeftMiddle => (0, mid_y),
            Anchor::Center => (mid_x, mid_y),
            Anchor::RightMiddle => (container_w - box_w, mid_y),
            Anchor::BottomLeft => (0, container_h - box_h),
            Anchor::BottomMiddle => (mid_x, container_h - box_h),
            Anchor::BottomRight => (container_w - box_w, container_h - box_h),
        };
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_formula() {
        let p = Anchor::Center.resolve(200, 100, 50, 20);
        assert_eq!(p, Point::new(75, 40));
    }

    #[test]
    fn test_corners() {
        assert_eq!(Anchor::TopLeft.resolve(200, 100, 50, 20), Point::new(0, 0));
        assert_eq!(
            Anchor::TopRight.resolve(200, 100, 50, 20),
            Point::new(150, 0)
        );
        assert_eq!(
            Anchor::BottomLeft.resolve(200, 100, 50, 20),
            Point::new(0, 80)
        );
        assert_eq!(
            Anchor::BottomRight.resolve(200, 100, 50, 20),
            Point::new(150, 80)
        );
    }

    #[test]
    fn test_edge_midpoints() {
        assert_eq!(
            Anchor::TopMiddle.resolve(200, 100, 50, 20),
            Point::new(75, 0)
        );
        assert_eq!(
            Anchor::LeftMiddle.resolve(200, 100, 50, 20),
            Point::new(0, 40)
        );
        assert_eq!(
            Anchor::RightMiddle.resolve(200, 100, 50, 20),
            Point::new(150, 40)
        );
        assert_eq!(
            Anchor::BottomMiddle.resolve(200, 100, 50, 20),
            Point::new(75, 80)
        );
    }

    #[test]
    fn test_zero_box_matches_edges() {
        // A zero-sized box's reference point sits on the region itself
        for anchor in Anchor::ALL {
            let p = anchor.resolve(200, 100, 0, 0);
            assert!(p.x == 0 || p.x == 100 || p.x == 200, "{:?}", anchor);
            assert!(p.y == 0 || p.y == 50 || p.y == 100, "{:?}", anchor);
        }
    }

    #[test]
    fn test_full_size_box_pins_to_origin() {
        // A box filling the region resolves every anchor to (0, 0)
        for anchor in Anchor::ALL {
            assert_eq!(anchor.resolve(200, 100, 200, 100), Point::new(0, 0));
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_top_left() {
        assert_eq!(Anchor::parse("upper_left"), Anchor::TopLeft);
        assert_eq!(Anchor::parse(""), Anchor::TopLeft);
        assert_eq!(
            Anchor::parse("no_such_anchor").resolve(200, 100, 50, 20),
            Point::new(0, 0)
        );
    }

    #[test]
    fn test_name_round_trip() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::parse(anchor.name()), anchor);
        }
    }

    #[test]
    fn test_middle_uses_floor_division() {
        // 201/2 - 51/2 = 100 - 25
        assert_eq!(
            Anchor::Center.resolve(201, 101, 51, 21),
            Point::new(75, 40)
        );
    }
}

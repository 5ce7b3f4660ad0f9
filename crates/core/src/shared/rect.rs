use crate::shared::error::MotError;

/// An axis-aligned bounding box, `(x, y)` being the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, MotError> {
        if width < 0.0 || height < 0.0 {
            return Err(MotError::InvalidRect { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let ix = self.x.max(other.x);
        let iy = self.y.max(other.y);
        let iw = (self.x + self.width).min(other.x + other.width) - ix;
        let ih = (self.y + self.height).min(other.y + other.height) - iy;
        if iw <= 0.0 || ih <= 0.0 {
            log::trace!("rectangles do not intersect");
            return 0.0;
        }
        iw * ih
    }

    /// Intersection-over-union against another rectangle, in `[0, 1]`.
    pub fn iou(&self, other: &Rect) -> f64 {
        iou(self, other)
    }
}

/// Free-standing form of [`Rect::iou`], matching the component contract
/// that treats IoU as an operation over a pair of rectangles rather
/// than a method of either one.
pub fn iou(a: &Rect, b: &Rect) -> f64 {
    let intersection = a.intersection_area(b);
    if intersection == 0.0 {
        return 0.0;
    }
    let union = a.area() + b.area() - intersection;
    intersection / union
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn rejects_negative_dimensions() {
        assert!(Rect::new(0.0, 0.0, -1.0, 1.0).is_err());
        assert!(Rect::new(0.0, 0.0, 1.0, -1.0).is_err());
    }

    #[test]
    fn zero_area_rect_is_allowed() {
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[rstest]
    #[case::identical(0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 2.0, 2.0, 1.0)]
    #[case::disjoint(0.0, 0.0, 1.0, 1.0, 5.0, 5.0, 1.0, 1.0, 0.0)]
    #[case::half_overlap(0.0, 0.0, 2.0, 2.0, 1.0, 0.0, 2.0, 2.0, 1.0 / 3.0)]
    fn computes_iou(
        #[case] ax: f64,
        #[case] ay: f64,
        #[case] aw: f64,
        #[case] ah: f64,
        #[case] bx: f64,
        #[case] by: f64,
        #[case] bw: f64,
        #[case] bh: f64,
        #[case] expected: f64,
    ) {
        let a = Rect::new(ax, ay, aw, ah).unwrap();
        let b = Rect::new(bx, by, bw, bh).unwrap();
        assert_relative_eq!(a.iou(&b), expected, epsilon = 1e-9);
        assert_relative_eq!(b.iou(&a), expected, epsilon = 1e-9);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = Rect::new(1.0, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn zero_area_rect_has_zero_iou() {
        let a = Rect::new(0.0, 0.0, 0.0, 0.0).unwrap();
        let b = Rect::new(0.0, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(a.iou(&b), 0.0);
    }
}

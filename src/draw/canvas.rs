// src/draw/canvas.rs
//
// The drawing surface the chain renders onto.
// Coordinates are y-down with the origin at the top-left corner,
// rotations are in degrees and turn clockwise on screen.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub weight: f32,
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: rgb(0.1, 0.1, 0.1),
            weight: 5.0,
            cap: LineCap::Round,
        }
    }
}

pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn clear(&mut self, color: Rgb);

    /// Pushes the current transform; paired with `restore`.
    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    fn rotate(&mut self, degrees: f32);

    fn draw_line(&mut self, from: Point2, to: Point2, style: &StrokeStyle);
}

/// Affine transform kept by `RecordingCanvas`: [a c tx; b d ty]
#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    tx: f32,
    ty: f32,
}

impl Affine {
    const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    // self * other: `other` is applied to points first
    fn then_local(&self, other: Affine) -> Affine {
        Affine {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    fn apply(&self, p: Point2) -> Point2 {
        pt2(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Clear(Rgb),
    Save,
    Restore,
    Translate(f32, f32),
    Scale(f32, f32),
    Rotate(f32),
    Line { from: Point2, to: Point2 },
}

/// A line as it lands on the surface, after all transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLine {
    pub from: Point2,
    pub to: Point2,
    pub style: StrokeStyle,
}

/// In-memory canvas that records every call and resolves lines to
/// surface coordinates. Used for headless rendering and tests.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    transform: Affine,
    stack: Vec<Affine>,
    pub ops: Vec<CanvasOp>,
    pub lines: Vec<RecordedLine>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            ops: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn reset(&mut self) {
        self.transform = Affine::IDENTITY;
        self.stack.clear();
        self.ops.clear();
        self.lines.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Rgb) {
        self.ops.push(CanvasOp::Clear(color));
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
        self.ops.push(CanvasOp::Save);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
        self.ops.push(CanvasOp::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.then_local(Affine {
            tx: dx,
            ty: dy,
            ..Affine::IDENTITY
        });
        self.ops.push(CanvasOp::Translate(dx, dy));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.then_local(Affine {
            a: sx,
            d: sy,
            ..Affine::IDENTITY
        });
        self.ops.push(CanvasOp::Scale(sx, sy));
    }

    fn rotate(&mut self, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.transform = self.transform.then_local(Affine {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        });
        self.ops.push(CanvasOp::Rotate(degrees));
    }

    fn draw_line(&mut self, from: Point2, to: Point2, style: &StrokeStyle) {
        self.ops.push(CanvasOp::Line { from, to });
        self.lines.push(RecordedLine {
            from: self.transform.apply(from),
            to: self.transform.apply(to),
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point2, b: Point2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_transforms_compose_in_call_order() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        let style = StrokeStyle::default();

        canvas.translate(10.0, 20.0);
        canvas.rotate(90.0);
        canvas.draw_line(pt2(0.0, 0.0), pt2(5.0, 0.0), &style);

        // clockwise on a y-down surface: +x turns into +y
        let line = &canvas.lines[0];
        assert!(close(line.from, pt2(10.0, 20.0)));
        assert!(close(line.to, pt2(10.0, 25.0)));
    }

    #[test]
    fn test_save_restore() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        let style = StrokeStyle::default();

        canvas.save();
        canvas.translate(50.0, 0.0);
        canvas.scale(-1.0, -1.0);
        canvas.draw_line(pt2(1.0, 1.0), pt2(2.0, 2.0), &style);
        assert_eq!(canvas.depth(), 1);
        canvas.restore();
        canvas.draw_line(pt2(1.0, 1.0), pt2(2.0, 2.0), &style);

        assert_eq!(canvas.depth(), 0);
        assert!(close(canvas.lines[0].from, pt2(49.0, -1.0)));
        assert!(close(canvas.lines[1].from, pt2(1.0, 1.0)));
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut canvas = RecordingCanvas::new(10.0, 10.0);
        canvas.translate(3.0, 3.0);
        canvas.restore();
        canvas.draw_line(pt2(0.0, 0.0), pt2(1.0, 0.0), &StrokeStyle::default());
        assert!(close(canvas.lines[0].from, pt2(3.0, 3.0)));
    }
}

// src/draw/nannou_canvas.rs
//
// Canvas backed by nannou's Draw.
// nannou puts the origin at the window centre with y pointing up; the base
// draw is moved to the top-left corner and flipped so callers get y-down.

use nannou::prelude::*;

use super::{Canvas, LineCap, StrokeStyle};

pub struct DrawCanvas {
    stack: Vec<Draw>, // never empty: the base draw sits at index 0
    width: f32,
    height: f32,
}

impl DrawCanvas {
    pub fn new(draw: &Draw, rect: Rect) -> Self {
        let base = draw
            .translate(vec3(rect.left(), rect.top(), 0.0))
            .scale_axes(vec3(1.0, -1.0, 1.0));
        Self {
            stack: vec![base],
            width: rect.w(),
            height: rect.h(),
        }
    }

    fn current(&self) -> &Draw {
        &self.stack[self.stack.len() - 1]
    }

    fn replace_current(&mut self, draw: Draw) {
        let last = self.stack.len() - 1;
        self.stack[last] = draw;
    }
}

impl Canvas for DrawCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Rgb) {
        self.current().background().color(color);
    }

    fn save(&mut self) {
        let top = self.current().clone();
        self.stack.push(top);
    }

    fn restore(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        let next = self.current().translate(vec3(dx, dy, 0.0));
        self.replace_current(next);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        let next = self.current().scale_axes(vec3(sx, sy, 1.0));
        self.replace_current(next);
    }

    fn rotate(&mut self, degrees: f32) {
        // y is flipped, so a positive turn here is clockwise on screen
        let next = self.current().z_radians(degrees.to_radians());
        self.replace_current(next);
    }

    fn draw_line(&mut self, from: Point2, to: Point2, style: &StrokeStyle) {
        let line = self
            .current()
            .line()
            .start(from)
            .end(to)
            .weight(style.weight)
            .color(style.color);
        match style.cap {
            LineCap::Butt => {
                line.caps_butt();
            }
            LineCap::Round => {
                line.caps_round();
            }
            LineCap::Square => {
                line.caps_square();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_never_drops_base() {
        let draw = Draw::new();
        let mut canvas = DrawCanvas::new(&draw, Rect::from_w_h(200.0, 100.0));
        assert_eq!(canvas.width(), 200.0);
        assert_eq!(canvas.height(), 100.0);

        canvas.save();
        canvas.save();
        canvas.restore();
        canvas.restore();
        canvas.restore();
        assert_eq!(canvas.stack.len(), 1);

        canvas.draw_line(pt2(0.0, 0.0), pt2(10.0, 0.0), &StrokeStyle::default());
    }
}

// src/draw/square_draw.rs
// Draws a node's row of rotating squares with canvas primitives

use nannou::prelude::*;

use crate::config::ChainConfig;
use crate::draw::{Canvas, LineCap, StrokeStyle};
use crate::utilities::scale_math::part_rotation;

/// Stroke used for every row: round caps, width relative to the surface.
pub fn row_stroke(config: &ChainConfig, width: f32, height: f32) -> StrokeStyle {
    StrokeStyle {
        color: config.fore_color,
        weight: width.min(height) / config.stroke_factor,
        cap: LineCap::Round,
    }
}

/// One square of the row: two opposite edges, each hinged at a corner and
/// swung up to a quarter turn by the part's share of the scale.
pub fn draw_rot_square<C: Canvas>(
    canvas: &mut C,
    i: usize,
    w: f32,
    scale: f32,
    parts: usize,
    style: &StrokeStyle,
) {
    let gap = w / parts as f32;
    let sf = part_rotation(scale, i, parts);

    canvas.save();
    canvas.translate(gap * i as f32, 0.0);
    for j in 0..2 {
        let flip = 1.0 - 2.0 * j as f32;
        canvas.save();
        canvas.scale(flip, flip);
        canvas.save();
        canvas.translate(gap / 2.0, gap / 2.0);
        canvas.rotate(90.0 * sf);
        canvas.draw_line(pt2(0.0, 0.0), pt2(-gap, 0.0), style);
        canvas.restore();
        canvas.restore();
    }
    canvas.restore();
}

pub fn draw_multi_rot_square<C: Canvas>(
    canvas: &mut C,
    w: f32,
    scale: f32,
    parts: usize,
    style: &StrokeStyle,
) {
    for i in 0..parts {
        draw_rot_square(canvas, i, w, scale, parts, style);
    }
}

/// Draws the row for node `index`, spaced evenly down the surface.
pub fn draw_node_row<C: Canvas>(
    canvas: &mut C,
    index: usize,
    scale: f32,
    config: &ChainConfig,
    style: &StrokeStyle,
) {
    let w = canvas.width();
    let gap = canvas.height() / (config.node_count + 1) as f32;

    canvas.save();
    canvas.translate(0.0, gap * (index + 1) as f32);
    draw_multi_rot_square(canvas, w, scale, config.parts, style);
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RecordingCanvas;

    fn close(a: Point2, b: Point2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_row_stroke() {
        let config = ChainConfig::default();
        let style = row_stroke(&config, 900.0, 1800.0);
        assert_eq!(style.weight, 10.0);
        assert_eq!(style.cap, LineCap::Round);
        assert_eq!(style.color, config.fore_color);
    }

    #[test]
    fn test_row_draws_two_edges_per_part() {
        let config = ChainConfig::default();
        let mut canvas = RecordingCanvas::new(500.0, 600.0);
        let style = row_stroke(&config, 500.0, 600.0);

        draw_node_row(&mut canvas, 2, 0.3, &config, &style);

        assert_eq!(canvas.lines.len(), 2 * config.parts);
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_resting_row_is_flat() {
        // 5 parts over 500 wide: gap 100. 5 nodes over 600 high: row 0 at y = 100
        let config = ChainConfig::default();
        let mut canvas = RecordingCanvas::new(500.0, 600.0);
        draw_node_row(&mut canvas, 0, 0.0, &config, &StrokeStyle::default());

        // first square, lower edge
        let line = &canvas.lines[0];
        assert!(close(line.from, pt2(50.0, 150.0)));
        assert!(close(line.to, pt2(-50.0, 150.0)));

        // first square, upper edge (mirrored through the square's centre)
        let line = &canvas.lines[1];
        assert!(close(line.from, pt2(-50.0, 50.0)));
        assert!(close(line.to, pt2(50.0, 50.0)));

        // last square is shifted by 4 gaps
        let line = &canvas.lines[8];
        assert!(close(line.from, pt2(450.0, 150.0)));
    }

    #[test]
    fn test_peak_row_edges_stand_upright() {
        let config = ChainConfig::default();
        let mut canvas = RecordingCanvas::new(500.0, 600.0);
        draw_node_row(&mut canvas, 0, 0.5, &config, &StrokeStyle::default());

        // a quarter turn clockwise swings the lower edge up the right side
        let line = &canvas.lines[0];
        assert!(close(line.from, pt2(50.0, 150.0)));
        assert!(close(line.to, pt2(50.0, 50.0)));
    }

    #[test]
    fn test_rows_are_spaced_by_index() {
        let config = ChainConfig::default();
        let mut canvas = RecordingCanvas::new(500.0, 600.0);
        for index in 0..config.node_count {
            draw_node_row(&mut canvas, index, 0.0, &config, &StrokeStyle::default());
        }

        let per_row = 2 * config.parts;
        for index in 0..config.node_count {
            let expected_y = 100.0 * (index + 1) as f32 + 50.0;
            assert!((canvas.lines[index * per_row].from.y - expected_y).abs() < 1e-3);
        }
    }
}

// src/draw/mod.rs
// The drawing module
// Row geometry is issued against the Canvas trait; nannou is one backend

pub mod canvas;
pub mod nannou_canvas;
pub mod square_draw;

pub use canvas::{Canvas, CanvasOp, LineCap, RecordedLine, RecordingCanvas, StrokeStyle};
pub use nannou_canvas::DrawCanvas;
pub use square_draw::{draw_multi_rot_square, draw_node_row, draw_rot_square, row_stroke};

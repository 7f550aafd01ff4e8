// src/main.rs
use nannou::prelude::*;

use bouncysquares::{config::Config, draw::DrawCanvas, render::Renderer};

struct Model {
    renderer: Renderer,
    draw: nannou::Draw,
}

fn main() {
    tracing_subscriber::fmt::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        tracing::error!("failed to load config: {}", e);
        std::process::exit(1);
    });
    let chain_config = config.chain_config().unwrap_or_else(|e| {
        tracing::error!("invalid config: {}", e);
        std::process::exit(1);
    });

    // Create window
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .build()
        .unwrap();
    if config.window.fullscreen {
        if let Some(window) = app.window(window_id) {
            window.set_fullscreen(true);
        }
    }

    tracing::info!(
        "{} nodes of {} parts, step {} every {:?}",
        chain_config.node_count,
        chain_config.parts,
        chain_config.step_size,
        chain_config.frame_delay
    );

    Model {
        renderer: Renderer::new(chain_config),
        draw: nannou::Draw::new(),
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space | Key::Return => {
            model.renderer.handle_tap();
        }
        _ => {}
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.renderer.handle_tap();
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        model.renderer.handle_tap();
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = app.duration.since_start;

    model.draw.reset();
    let mut canvas = DrawCanvas::new(&model.draw, app.window_rect());
    if let Some(outcome) = model.renderer.render(&mut canvas, now) {
        tracing::debug!("step finished: {:?}", outcome);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(e) = model.draw.to_frame(app, &frame) {
        tracing::error!("failed to render frame: {:?}", e);
    }
}

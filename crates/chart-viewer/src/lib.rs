// File: crates/chart-viewer/src/lib.rs
// Summary: Shows a rendered RGBA frame in a window (winit + softbuffer) and blocks until it closes.

use std::num::NonZeroU32;

use image::imageops::FilterType;
use image::RgbaImage;
use thiserror::Error;
use tracing::{debug, info, warn};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// Largest initial window, in logical pixels.
pub const MAX_WINDOW: (u32, u32) = (1440, 1080);

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("frame has no pixels")]
    EmptyFrame,

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("presentation surface failed: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

/// Largest size with the frame's aspect ratio that fits in `bounds`.
pub fn fit_within(frame: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (fw, fh) = (frame.0.max(1) as f64, frame.1.max(1) as f64);
    let scale = (bounds.0 as f64 / fw).min(bounds.1 as f64 / fh);
    (((fw * scale).floor() as u32).max(1), ((fh * scale).floor() as u32).max(1))
}

/// Letterbox `frame` into a `width x height` 0RGB buffer on a white background.
pub fn compose_argb(frame: &RgbaImage, width: u32, height: u32) -> Vec<u32> {
    let mut out = vec![0x00FF_FFFF; width as usize * height as usize];
    if width == 0 || height == 0 {
        return out;
    }
    let (fw, fh) = fit_within(frame.dimensions(), (width, height));
    let scaled = image::imageops::resize(frame, fw, fh, FilterType::Triangle);
    let x0 = (width - fw) / 2;
    let y0 = (height - fh) / 2;
    for (x, y, px) in scaled.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        // Composite over white; softbuffer ignores alpha.
        let blend = |c: u8| -> u32 {
            let a = u32::from(a);
            (u32::from(c) * a + 255 * (255 - a)) / 255
        };
        out[((y0 + y) * width + (x0 + x)) as usize] = (blend(r) << 16) | (blend(g) << 8) | blend(b);
    }
    out
}

/// Open a window titled `title` showing `frame`; returns when the window is
/// closed or Escape is pressed.
pub fn show_blocking(frame: &RgbaImage, title: &str) -> Result<(), ViewerError> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(ViewerError::EmptyFrame);
    }

    let mut event_loop = EventLoop::new();
    let (init_w, init_h) = fit_within(frame.dimensions(), MAX_WINDOW);
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(init_w as f64, init_h as f64))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }?;
    info!(width = frame.width(), height = frame.height(), "showing frame");

    let mut size = window.inner_size();
    let mut cached: Option<(PhysicalSize<u32>, Vec<u32>)> = None;
    let mut failure: Option<ViewerError> = None;

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::NewEvents(StartCause::Init) => window.request_redraw(),
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::Escape), .. },
                    ..
                } => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    failure = Some(e.into());
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                if cached.as_ref().map(|(s, _)| *s) != Some(size) {
                    debug!(width = size.width, height = size.height, "rescaling frame");
                    cached = Some((size, compose_argb(frame, size.width, size.height)));
                }
                let Some((_, pixels)) = cached.as_ref() else { return };
                let result = surface.buffer_mut().and_then(|mut buffer| {
                    let n = buffer.len().min(pixels.len());
                    buffer[..n].copy_from_slice(&pixels[..n]);
                    buffer.present()
                });
                if let Err(e) = result {
                    warn!(error = %e, "present failed");
                    failure = Some(e.into());
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

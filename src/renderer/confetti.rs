//! Confetti canvas
//!
//! Runs its own `requestAnimationFrame` chain that stops once the burst is
//! spent. It never touches board state.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use rand::Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::confetti::Confetti;

pub struct ConfettiCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    confetti: Confetti,
    running: bool,
}

impl ConfettiCanvas {
    /// Attach to `#confetti-canvas`
    pub fn new(document: &Document) -> Option<Self> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("confetti-canvas")?
            .dyn_into()
            .ok()?;
        let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

        let mut this = Self {
            canvas,
            ctx,
            confetti: Confetti::new(),
            running: false,
        };
        this.resize();
        Some(this)
    }

    /// Match the canvas to the viewport
    pub fn resize(&mut self) {
        let (w, h) = viewport();
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
    }

    /// Start a burst from the viewport centre, restarting the loop if idle
    pub fn fire<R: Rng + ?Sized>(this: &Rc<RefCell<Self>>, rng: &mut R) {
        let start = {
            let mut c = this.borrow_mut();
            let (w, h) = viewport();
            c.confetti.burst(Vec2::new(w / 2.0, h / 2.0), rng);
            let idle = !c.running;
            c.running = true;
            idle
        };
        if start {
            request_frame(this.clone());
        }
    }

    fn draw(&self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        for p in &self.confetti.particles {
            self.ctx.set_fill_style_str(p.color);
            self.ctx.fill_rect(
                p.pos.x as f64,
                p.pos.y as f64,
                p.size.x as f64,
                p.size.y as f64,
            );
        }
    }
}

fn viewport() -> (f32, f32) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

fn request_frame(this: Rc<RefCell<ConfettiCanvas>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        frame(this);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn frame(this: Rc<RefCell<ConfettiCanvas>>) {
    let finished = {
        let mut c = this.borrow_mut();
        c.confetti.step();
        c.draw();
        let finished = c.confetti.is_finished();
        if finished {
            c.running = false;
        }
        finished
    };

    if !finished {
        request_frame(this);
    }
}

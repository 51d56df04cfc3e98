use crate::{
    driver::{Driver, Status},
    utils::{Config, FpsLimiter},
};
use eframe::egui::{CentralPanel, Context, Frame, Key, ViewportCommand};
use std::{cell::RefCell, rc::Rc, time::Instant};
use tracing::info;

pub struct App {
    pub(super) driver: Rc<RefCell<Driver>>, // Shared with `main`, which prints the summary.
    pub(super) fps_limiter: FpsLimiter,     // One generation per frame.
    close_at: Option<Instant>,              // When to close the window after extinction.
}

impl App {
    pub fn new(driver: Rc<RefCell<Driver>>, generations_per_second: u32) -> Self {
        Self {
            driver,
            fps_limiter: FpsLimiter::new(generations_per_second),
            close_at: None,
        }
    }

    /// Stops the run on window close or escape.
    fn handle_quit(&mut self, ctx: &Context) {
        let (close_requested, escape) = ctx.input(|input| {
            (
                input.viewport().close_requested(),
                input.key_pressed(Key::Escape),
            )
        });
        if close_requested || escape {
            self.driver.borrow_mut().cancel();
        }
        if escape {
            info!("escape pressed");
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }

    fn update_driver(&mut self) {
        let status = self.driver.borrow_mut().tick();
        if status == Status::Extinct && self.close_at.is_none() {
            self.close_at = Some(Instant::now() + Config::EXTINCTION_LINGER);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_quit(ctx);

        if let Some(close_at) = self.close_at {
            if Instant::now() >= close_at {
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        }

        CentralPanel::default()
            .frame(Frame::none().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| {
                self.draw(ui);
            });

        ctx.request_repaint();
        self.fps_limiter.sleep();

        // shown on the next frame
        self.update_driver();
    }
}

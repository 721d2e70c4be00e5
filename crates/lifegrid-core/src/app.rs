//! The Elm-architecture application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].
//!
//! The loop runs on one thread: the driver's poll is the only blocking
//! point, and the model's `update` is invoked strictly sequentially, so no
//! simulation operation ever overlaps another. Commands returned from
//! `update` run on short-lived background threads and feed their follow-up
//! message back into the loop's channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::messages::Msg;
use crate::view::{BoardView, ViewFrame};

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// Cancellation token shared by the loop, the driver, and command threads.
///
/// Cloning is cheap; all clones observe the same flag.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// A fresh, not-yet-cancelled token.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the loop has been asked to stop.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Ask the loop to stop.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect requested by [`Model::update`].
pub enum Effect {
    /// A one-shot command, run on a background thread; its optional result
    /// message is fed back into the loop. Used for delayed ticks.
    Cmd(Box<dyn FnOnce() -> Option<Msg> + Send>),
    /// Several effects issued at once.
    Batch(Vec<Effect>),
    /// Stop the application loop.
    End,
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cmd(_) => f.write_str("Effect::Cmd(..)"),
            Self::Batch(v) => f.debug_tuple("Effect::Batch").field(&v.len()).finish(),
            Self::End => f.write_str("Effect::End"),
        }
    }
}

/// Wrap a closure as an [`Effect::Cmd`].
pub fn cmd<F>(f: F) -> Effect
where
    F: FnOnce() -> Option<Msg> + Send + 'static,
{
    Effect::Cmd(Box::new(f))
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `view`.
    fn draw(&self, view: &mut BoardView);
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver: the renderer plus input adapter.
///
/// A driver owns the display surface and translates device input into plain
/// [`Msg`] values — in particular, pointer positions into board `(row, col)`
/// coordinates. The core never sees the underlying technology.
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Poll for input, sending translated messages through `tx`. Should
    /// block at most briefly and return once pending events are drained,
    /// honouring `ctx.is_done()`.
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: &ViewFrame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the display surface.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    /// Board dimension N of the views exchanged with the driver.
    pub size: usize,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    size: usize,
}

impl<M: Model, D: Driver> App<M, D> {
    /// Create a new application from a configuration.
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            size: config.size,
        }
    }

    /// Run the main Model-View-Update loop.
    ///
    /// 1. Initialises the driver.
    /// 2. Sends [`Msg::Init`] through the model.
    /// 3. Enters the event loop: poll → update → draw → diff → flush.
    /// 4. Stops when the model returns [`Effect::End`] or the driver
    ///    errors.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;

        let ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();

        tx.send(Msg::Init).ok();

        // No previous view yet: the first frame repaints the whole surface.
        let mut prev_view: Option<BoardView> = None;
        let mut curr_view = BoardView::new(self.size);

        while !ctx.is_done() {
            // The driver's poll is the loop's only blocking point; command
            // messages sent from background threads are picked up on the
            // drain that follows it.
            if let Err(e) = self.driver.poll_msgs(&ctx, tx.clone()) {
                ctx.cancel();
                self.driver.close();
                return Err(e);
            }

            if let Err(e) = self.process_pending(&rx, &ctx, &tx, &mut prev_view, &mut curr_view)
            {
                ctx.cancel();
                self.driver.close();
                return Err(e);
            }
        }

        self.driver.close();
        Ok(())
    }

    /// Drain queued messages, update the model, draw, diff, and flush.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        ctx: &Context,
        tx: &Sender<Msg>,
        prev_view: &mut Option<BoardView>,
        curr_view: &mut BoardView,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut processed = false;

        while let Ok(msg) = rx.try_recv() {
            processed = true;
            if msg == Msg::Redraw {
                // The surface lost its contents; forget the previous view
                // so the next frame repaints every cell, dead ones included.
                *prev_view = None;
            }
            if let Some(effect) = self.model.update(msg) {
                Self::handle_effect(effect, ctx, tx);
            }
            if ctx.is_done() {
                return Ok(());
            }
        }

        if processed {
            self.model.draw(curr_view);
            let frame = match prev_view {
                Some(prev) => curr_view.diff(prev),
                None => curr_view.full_frame(),
            };
            if !frame.is_empty() {
                self.driver.flush(&frame)?;
            }
            match prev_view {
                Some(prev) => prev.clone_from(curr_view),
                None => *prev_view = Some(curr_view.clone()),
            }
        }

        Ok(())
    }

    fn handle_effect(effect: Effect, ctx: &Context, tx: &Sender<Msg>) {
        match effect {
            Effect::End => ctx.cancel(),
            Effect::Cmd(f) => {
                let tx = tx.clone();
                thread::spawn(move || {
                    if let Some(msg) = f() {
                        tx.send(msg).ok();
                    }
                });
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::handle_effect(e, ctx, tx);
                }
            }
        }
    }
}

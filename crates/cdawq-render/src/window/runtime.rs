use std::collections::VecDeque;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, Lifecycle, Transition, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::FrameClock;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl RuntimeConfig {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "cdawq".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// One window waiting to be opened, with the app that drives it.
pub struct WindowSlot {
    config: RuntimeConfig,
    app: Box<dyn App>,
}

impl WindowSlot {
    pub fn new(config: RuntimeConfig, app: impl App + 'static) -> Self {
        Self {
            config,
            app: Box::new(app),
        }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the slots one after another on a single event loop. Each window
    /// opens only after the previous one has shut down.
    ///
    /// Returns the first error any window reported; the remaining slots are
    /// not opened in that case.
    pub fn run_sequence(gpu_init: GpuInit, slots: Vec<WindowSlot>) -> Result<()> {
        if slots.is_empty() {
            log::warn!("no windows to run");
            return Ok(());
        }
        for (i, slot) in slots.iter().enumerate() {
            log::debug!("window {}: '{}'", i + 1, slot.title());
        }

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(gpu_init, slots);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// The window currently on screen.
struct ActiveWindow {
    id: WindowId,
    title: String,
    app: Box<dyn App>,
    lifecycle: Lifecycle,
    entry: WindowEntry,
}

struct AppState {
    gpu_init: GpuInit,
    pending: VecDeque<WindowSlot>,
    active: Option<ActiveWindow>,
    started: bool,
    error: Option<anyhow::Error>,
}

impl AppState {
    fn new(gpu_init: GpuInit, slots: Vec<WindowSlot>) -> Self {
        Self {
            gpu_init,
            pending: slots.into(),
            active: None,
            started: false,
            error: None,
        }
    }

    fn record_error(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn open_window(&self, event_loop: &ActiveEventLoop, slot: WindowSlot) -> Result<ActiveWindow> {
        let WindowSlot { config, mut app } = slot;

        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .with_context(|| format!("failed to create window '{}'", config.title))?;

        let id = window.id();
        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .with_context(|| format!("GPU initialization failed for '{}'", config.title))?;

        let mut lifecycle = Lifecycle::new();
        lifecycle.advance(Transition::Init)?;

        let init = entry.with_gpu(|gpu| app.init(&gpu.render_ctx()));
        if let Err(err) = init {
            app.shutdown();
            return Err(err.context(format!("'{}' failed to initialize", config.title)));
        }

        let adapter = entry.with_gpu(|gpu| gpu.adapter_info());
        log::info!(
            "window '{}' opened on {} ({:?})",
            config.title,
            adapter.name,
            adapter.backend
        );
        entry.with_window(|w| w.request_redraw());

        Ok(ActiveWindow {
            id,
            title: config.title,
            app,
            lifecycle,
            entry,
        })
    }

    /// Opens the next pending slot, or stops the loop when none remain.
    fn open_next(&mut self, event_loop: &ActiveEventLoop) {
        let Some(slot) = self.pending.pop_front() else {
            log::debug!("all windows closed");
            event_loop.exit();
            return;
        };

        match self.open_window(event_loop, slot) {
            Ok(active) => self.active = Some(active),
            Err(err) => {
                self.record_error(err);
                event_loop.exit();
            }
        }
    }

    /// Shuts down the active app, then drops its window and GPU.
    fn close_active(&mut self) {
        let Some(mut active) = self.active.take() else {
            return;
        };

        if let Err(err) = active.lifecycle.advance(Transition::Shutdown) {
            log::warn!("'{}': {err}", active.title);
        }
        active.app.shutdown();

        let ActiveWindow { title, app, entry, .. } = active;
        drop(app);
        drop(entry);

        log::info!("window '{title}' closed");
    }

    /// Closes the active window and either moves on or stops on `err`.
    fn finish_active(&mut self, event_loop: &ActiveEventLoop, err: Option<anyhow::Error>) {
        self.close_active();

        match err {
            Some(err) => {
                self.record_error(err);
                event_loop.exit();
            }
            None => self.open_next(event_loop),
        }
    }

    fn resize_active(&mut self, new_size: PhysicalSize<u32>) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let ActiveWindow {
            app,
            lifecycle,
            entry,
            ..
        } = active;

        entry.with_mut(|fields| {
            fields.gpu.resize(new_size);
            if lifecycle.is_running() {
                app.resize(&fields.gpu.render_ctx());
            }
            fields.window.request_redraw();
        });
    }

    /// Drives one Update → Render step for the active window.
    fn frame(&mut self) -> Result<AppControl> {
        let Some(active) = self.active.as_mut() else {
            return Ok(AppControl::Continue);
        };
        let ActiveWindow {
            app,
            lifecycle,
            entry,
            ..
        } = active;

        entry.with_mut(|fields| -> Result<AppControl> {
            let time = fields.clock.tick();

            lifecycle.advance(Transition::Update)?;
            let control = app.update(fields.input_state, fields.input_frame, time);
            fields.input_frame.clear();
            if control == AppControl::Exit {
                return Ok(AppControl::Exit);
            }

            lifecycle.advance(Transition::Render)?;
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    window: fields.window,
                },
                gpu: fields.gpu,
                time,
            };
            app.render(&mut ctx)
        })
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;
        self.open_next(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the tutorials animate while keys are held.
        if let Some(active) = &self.active {
            active.entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.id != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            active.entry.with_mut(|fields| {
                fields.input_state.apply_event(fields.input_frame, ev);
            });
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::debug!("'{}': close requested", active.title);
                self.finish_active(event_loop, None);
            }

            WindowEvent::Resized(new_size) => self.resize_active(*new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = active.entry.with_window(|w| w.inner_size());
                self.resize_active(new_size);
            }

            WindowEvent::RedrawRequested => match self.frame() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => self.finish_active(event_loop, None),
                Err(err) => self.finish_active(event_loop, Some(err)),
            },

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.close_active();
    }
}

use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{intel::IntelMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::ticker::Ticker,
    infrastructure::{
        config::Config,
        gemini::IntelProvider,
        intel_service::IntelService,
        tui::{self, event_source::EventSource},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Render when a frame was requested by the terminal or by a command.
fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
    queued_render_reqs > 0 || saw_tui_render
}

/// Multiple resizes within one cycle collapse into the last one.
fn decide_resize(events: &[(u16, u16)]) -> Option<(u16, u16)> {
    events.last().copied()
}

/// Drives the Elm runtime: pulls terminal events, runs update cycles,
/// applies terminal commands and renders.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    renderer: Renderer,
    render_rx: mpsc::Receiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    intel_cancel: CancellationToken,
    intel_handle: Option<JoinHandle<()>>,
}

impl AppRunner {
    /// Wire the runtime to a running IntelService and queue the first fetch for `ticker`.
    /// Must be called inside a tokio runtime.
    pub fn new(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
        provider: Arc<dyn IntelProvider>,
        ticker: Ticker,
    ) -> Self {
        let mut runtime = Runtime::new(AppState::new_with_config(ticker.clone(), config));

        let (intel_tx, intel_cancel, intel_service) =
            IntelService::new(provider, runtime.get_raw_sender());
        let intel_handle = intel_service.run();
        runtime.set_intel_sender(intel_tx);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx);
        let (render_tx, render_rx) = mpsc::channel(1);
        runtime.add_render_request_sender(render_tx);

        runtime.send_msg(Msg::Intel(IntelMsg::ChangeTicker(ticker)));

        Self {
            runtime,
            tui,
            events,
            renderer: Renderer::new(),
            render_rx,
            tui_cmd_rx,
            intel_cancel,
            intel_handle: Some(intel_handle),
        }
    }

    /// Runner reading events from the terminal itself
    pub fn new_with_real(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        provider: Arc<dyn IntelProvider>,
        ticker: Ticker,
    ) -> Self {
        let events = EventSource::real(Arc::clone(&tui));
        Self::new(config, tui, events, provider, ticker)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn set_event_source_for_tests(&mut self, events: EventSource) {
        self.events = events;
    }

    pub async fn run_one_cycle_for_tests(&mut self) -> Result<()> {
        self.step().await
    }

    pub async fn render_for_tests(&mut self) -> Result<()> {
        self.render().await
    }

    /// Run until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        while !self.runtime.state().system.should_quit {
            self.step().await?;
        }

        self.shutdown().await
    }

    async fn step(&mut self) -> Result<()> {
        let mut saw_tui_render = false;
        match self.events.next().await {
            Some(tui::Event::Render) => saw_tui_render = true,
            Some(event) => {
                if let Some(raw) = Self::translate_event(event) {
                    self.runtime.send_raw_msg(raw);
                }
            }
            // Nothing queued; let services make progress.
            None => tokio::time::sleep(Duration::from_millis(1)).await,
        }

        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        let mut resizes = vec![];
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => resizes.push((width, height)),
            }
        }
        if let Some((width, height)) = decide_resize(&resizes) {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            saw_tui_render = true;
        }

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
        }

        let mut queued_render_reqs = 0;
        while self.render_rx.try_recv().is_ok() {
            queued_render_reqs += 1;
        }
        if decide_render(queued_render_reqs, saw_tui_render) {
            self.render().await?;
        }

        Ok(())
    }

    fn translate_event(event: tui::Event) -> Option<RawMsg> {
        match event {
            tui::Event::Quit | tui::Event::Closed => Some(RawMsg::Quit),
            tui::Event::Tick => Some(RawMsg::Tick),
            tui::Event::Render => Some(RawMsg::Render),
            tui::Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => Some(RawMsg::Key(key)),
            tui::Event::Paste(text) => Some(RawMsg::Paste(text)),
            tui::Event::Error => {
                log::warn!("Terminal reported an input error");
                None
            }
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Mouse(_) => None,
        }
    }

    /// Suspend returns once the process is continued.
    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }

    async fn shutdown(&mut self) -> Result<()> {
        log::info!("Shutting down: {:?}", self.runtime.get_stats());
        self.intel_cancel.cancel();
        if let Some(handle) = self.intel_handle.take() {
            if let Err(e) = handle.await {
                log::error!("IntelService task failed: {e}");
            }
        }
        self.tui.lock().await.exit()?;
        Ok(())
    }
}

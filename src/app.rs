// src/app.rs
use eframe::egui;
use tokio::runtime::Runtime;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::api::{AnalysisClient, AnalysisError};
use crate::config::{Settings, Theme};
use crate::state::{AppState, FormOptions};
use crate::state::request::top_pick_lines;

type AnalysisOutcome = Result<String, AnalysisError>;

pub struct StockRocketApp {
    state: AppState,
    client: AnalysisClient,
    runtime: Runtime,
    pending: Option<oneshot::Receiver<AnalysisOutcome>>,
    applied_theme: Option<Theme>,
}

impl StockRocketApp {
    pub fn new(settings: Settings, runtime: Runtime) -> Self {
        Self {
            state: AppState::new(FormOptions::from(&settings), settings.theme),
            client: AnalysisClient::new(settings.endpoint),
            runtime,
            pending: None,
            applied_theme: None,
        }
    }

    /// Start one analysis request on the runtime. Does nothing while one is in flight.
    pub fn run_analysis(&mut self, ctx: &egui::Context) {
        let Some(request) = self.state.submit() else {
            debug!("analysis already in flight");
            return;
        };

        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let outcome = client.analyze(&request).await;
            if tx.send(outcome).is_err() {
                debug!("analysis result discarded");
            }
            ctx.request_repaint();
        });

        self.pending = Some(rx);
    }

    fn poll_pending(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(AnalysisError::transport(
                None,
                "analysis task ended without a result",
            )),
        };
        self.pending = None;

        match &outcome {
            Ok(top_picks) => {
                info!(picks = top_pick_lines(top_picks).len(), "analysis succeeded");
            },
            Err(e) => {
                warn!(kind = e.kind(), cause = e.cause().unwrap_or(""), "analysis failed: {}", e);
            },
        }
        self.state.resolve(outcome);
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.state.theme) {
            ctx.set_visuals(self.state.theme.visuals());
            self.applied_theme = Some(self.state.theme);
        }
    }
}

impl eframe::App for StockRocketApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        self.apply_theme(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            crate::ui::header::show_header(ui, &mut self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if crate::ui::form::show_form_view(ui, &mut self.state) {
                    self.run_analysis(ctx);
                }
                crate::ui::results::show_results(ui, &self.state.request);
            });
        });
    }
}

use {
    eframe::{
        Frame,
        egui::Context,
    },
    std::{
        mem,
        sync::mpsc::{self, Receiver, TryRecvError},
    },
};

use crate::{
    Cli,
    app::{
        AppState, ErrorKind, ErrorState, LoadingState, PhaseView, ReadyState, StartupEvent,
        startup::spawn_startup,
    },
    compass::CompassAngles,
    config::DF,
    domain::QiblaBearing,
    sensors::{HeadingCell, OrientationSource, OrientationSubscription},
    ui::{render_error, render_loading, render_ready, setup_custom_visuals},
};

#[cfg(not(target_arch = "wasm32"))]
use crate::sensors::{FixedLocation, NoOrientation};

#[cfg(target_arch = "wasm32")]
use crate::sensors::BrowserOrientation;

pub struct App {
    state: AppState,
    heading: HeadingCell,
    orientation: Option<OrientationSubscription>,
    startup_rx: Option<Receiver<StartupEvent>>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let (tx, rx) = mpsc::channel();

        #[cfg(not(target_arch = "wasm32"))]
        let app = {
            let coords = args
                .coordinates()
                .inspect_err(|e| log::error!("Ignoring --lat/--lon: {}", e))
                .unwrap_or_default();
            spawn_startup(FixedLocation(coords), tx, cc.egui_ctx.clone());
            Self::assemble(&cc.egui_ctx, &NoOrientation, rx)
        };

        #[cfg(target_arch = "wasm32")]
        let app = {
            let _ = args;
            spawn_startup(tx, cc.egui_ctx.clone());
            Self::assemble(&cc.egui_ctx, &BrowserOrientation, rx)
        };

        if !app.has_orientation() {
            log::info!("No orientation sensor; compass stays north-up");
        }
        app
    }

    /// Wire the heading listener and the startup channel. No task is spawned here.
    pub(crate) fn assemble(
        ctx: &Context,
        source: &dyn OrientationSource,
        startup_rx: Receiver<StartupEvent>,
    ) -> Self {
        let heading = HeadingCell::default();
        let sink = heading.clone();
        let repaint = ctx.clone();
        let orientation = source.subscribe(Box::new(move |reading| {
            if sink.apply(reading) {
                repaint.request_repaint();
            }
        }));

        Self {
            state: AppState::default(),
            heading,
            orientation,
            startup_rx: Some(startup_rx),
        }
    }

    pub(crate) fn has_orientation(&self) -> bool {
        self.orientation.is_some()
    }

    pub(crate) fn compass_angles(&self, bearing: QiblaBearing) -> CompassAngles {
        CompassAngles::new(bearing.degrees(), self.heading.degrees())
    }

    /// Stop listening to the device. Nothing is drawn that needs a heading any more.
    pub(crate) fn release_sensors(&mut self) {
        if let Some(subscription) = self.orientation.take() {
            subscription.unsubscribe();
        }
    }

    /// One frame: run the current phase and install whatever state it hands back.
    pub(crate) fn step(&mut self, ctx: &Context) {
        let current = mem::take(&mut self.state);
        let before = current.name();
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Error(mut s) => s.tick(self, ctx),
            AppState::Ready(mut s) => s.tick(self, ctx),
        };
        if DF.log_state_transitions && before != self.state.name() {
            log::info!("State {} -> {}", before, self.state.name());
        }
    }

    fn drain_startup(&mut self, state: &mut LoadingState) -> Option<AppState> {
        let rx = self.startup_rx.as_ref()?;
        let next = loop {
            match rx.try_recv() {
                Ok(event) => {
                    if let Some(next) = state.apply(event) {
                        break next;
                    }
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    log::error!("Startup task ended without reporting a session");
                    break AppState::Error(ErrorState {
                        kind: ErrorKind::PrayerServiceFailure,
                    });
                }
            }
        };
        self.startup_rx = None;
        Some(next)
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context, state: &mut LoadingState) -> AppState {
        match self.drain_startup(state) {
            Some(next) => {
                if matches!(next, AppState::Error(_)) {
                    self.release_sensors();
                }
                ctx.request_repaint();
                next
            }
            None => {
                render_loading(ctx, state);
                AppState::Loading(state.clone())
            }
        }
    }

    pub(crate) fn tick_error_state(&mut self, ctx: &Context, state: &ErrorState) -> AppState {
        render_error(ctx, state);
        AppState::Error(*state)
    }

    pub(crate) fn tick_ready_state(&mut self, ctx: &Context, state: &mut ReadyState) -> AppState {
        let now = chrono::Local::now();
        state.clock.poll(&now);
        ctx.request_repaint_after(state.clock.next_tick_in(&now));

        let angles = self.compass_angles(state.session.qibla);
        render_ready(ctx, state, angles, self.has_orientation());
        AppState::Ready(Box::new(state.clone()))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.step(ctx);
    }
}

use std::time::Duration;

use catalog_core::{update, AppState, AppViewModel, Msg, ProductId};
use catalog_logging::{catalog_debug, catalog_warn};

use crate::effects::{EffectRunner, UiEffect};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no response from the backend within {0:?}")]
    Stalled(Duration),
}

/// One open form plus the engine serving it.
pub struct Session {
    state: AppState,
    runner: EffectRunner,
    wait: Duration,
    alerts: Vec<String>,
    navigation: Option<ProductId>,
}

impl Session {
    /// `wait` bounds how long [`Session::settle`] waits for any single result.
    pub fn new(runner: EffectRunner, wait: Duration) -> Self {
        Self {
            state: AppState::new(),
            runner,
            wait,
            alerts: Vec::new(),
            navigation: None,
        }
    }

    /// Replaces the form and mounts it.
    pub fn open(&mut self, state: AppState) {
        self.state = state;
        self.navigation = None;
        self.dispatch(Msg::Mounted);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for ui in self.runner.enqueue(effects) {
            match ui {
                UiEffect::Alert(text) => {
                    catalog_warn!("Alert: {}", text);
                    self.alerts.push(text);
                }
                UiEffect::Navigate(product_id) => self.navigation = Some(product_id),
            }
        }
    }

    /// Feeds engine results to the reducer until nothing is in flight.
    pub fn settle(&mut self) -> Result<(), SessionError> {
        while self.state.is_busy() {
            let msg = self
                .runner
                .next_msg(self.wait)
                .ok_or(SessionError::Stalled(self.wait))?;
            catalog_debug!("Engine result: {:?}", msg);
            self.dispatch(msg);
        }
        Ok(())
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn navigation(&self) -> Option<ProductId> {
        self.navigation
    }
}

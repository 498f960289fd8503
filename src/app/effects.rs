//! Runs reducer effects as background tasks
//!
//! Each task reports back by sending a result [`Action`] on the app channel.

use std::future::Future;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use super::action::{Action, Effect};
use crate::config::Config;
use crate::services::{self, Locator, PlannerClient, WeatherClient, WeatherKeyStore};

pub struct EffectRunner {
    locator: Locator,
    weather: WeatherClient,
    planner: PlannerClient,
    tx: mpsc::UnboundedSender<Action>,
    tasks: JoinSet<()>,
}

impl EffectRunner {
    /// Build the service clients described by `config`
    pub fn new(config: &Config, tx: mpsc::UnboundedSender<Action>) -> Result<Self> {
        let client = services::http_client(config.request_timeout())
            .context("Failed to build HTTP client")?;
        let api_key = WeatherKeyStore::resolve(config.weather_api_key.as_deref());
        if api_key.is_none() {
            tracing::warn!("No weather API key configured; weather will be unavailable");
        }

        Ok(Self {
            locator: Locator::new(client.clone(), config.location.clone(), &config.ip_lookup_url),
            weather: WeatherClient::new(client.clone(), &config.weather_url, api_key),
            planner: PlannerClient::new(client, &config.planner_url),
            tx,
            tasks: JoinSet::new(),
        })
    }

    /// Start the work for `effect`
    pub fn run(&mut self, effect: Effect) {
        tracing::debug!("effect {:?}", effect);
        match effect {
            Effect::ResolveLocation => {
                let locator = self.locator.clone();
                self.spawn(async move {
                    match locator.locate().await {
                        Ok(coordinates) => Action::LocationDidResolve(coordinates),
                        Err(e) => {
                            tracing::warn!("Location unavailable: {}", e);
                            Action::LocationDidFail(e.to_string())
                        }
                    }
                });
            }
            Effect::FetchWeather(coordinates) => {
                let weather = self.weather.clone();
                self.spawn(async move {
                    match weather.current(coordinates).await {
                        Ok(snapshot) => {
                            tracing::info!(
                                "Weather loaded: {} {:.1}°C",
                                snapshot.condition,
                                snapshot.temperature_c
                            );
                            Action::WeatherDidLoad(snapshot)
                        }
                        Err(e) => {
                            if e.requires_setup() {
                                tracing::warn!("Weather needs setup: {}", e);
                            } else {
                                tracing::error!("Weather request failed: {}", e);
                            }
                            Action::WeatherDidError(e.to_string())
                        }
                    }
                });
            }
            Effect::SubmitPlan(request) => {
                let planner = self.planner.clone();
                self.spawn(async move {
                    match planner.submit(&request).await {
                        Ok(()) => Action::PlanDidSubmit,
                        Err(e) => {
                            tracing::error!("Trip plan submission failed: {}", e);
                            Action::PlanDidFail(e.to_string())
                        }
                    }
                });
            }
        }
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.tasks.spawn(async move {
            // The app may already be shutting down
            let _ = tx.send(task.await);
        });
    }

    /// Collect finished tasks, logging any that panicked
    pub fn reap(&mut self) {
        while let Some(joined) = self.tasks.try_join_next() {
            if let Err(e) = joined {
                if e.is_panic() {
                    tracing::error!("Effect task panicked: {}", e);
                }
            }
        }
    }

    /// Number of tasks still running
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Abort everything still in flight
    pub fn shutdown(&mut self) {
        self.tasks.abort_all();
    }
}

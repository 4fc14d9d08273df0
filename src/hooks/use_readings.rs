use chrono::{DateTime, Utc};
use gloo::console;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::reading::{Reading, Readings};
use crate::models::view_state::TimeWindow;
use crate::services::api::{Fetched, fetch_history, fetch_latest};

#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    Loading,
    Loaded(Rc<Fetched<T>>),
}

impl<T> DataState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data once a fetch has completed (possibly the empty fallback)
    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(fetched) => Some(&fetched.data),
            DataState::Loading => None,
        }
    }

    /// Returns the error behind a fallback, if the last fetch failed
    pub fn warning(&self) -> Option<&AppError> {
        match self {
            DataState::Loaded(fetched) => fetched.warning.as_ref(),
            DataState::Loading => None,
        }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match self {
            DataState::Loaded(fetched) => Some(fetched.fetched_at),
            DataState::Loading => None,
        }
    }
}

#[hook]
pub fn use_latest_reading(api_base: String) -> UseStateHandle<DataState<Reading>> {
    let state = use_state(|| DataState::Loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, api_base), move |(_, api_base)| {
            let api_base = api_base.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let fetched = fetch_latest(&api_base, Utc::now()).await;
                if aborted_check.get() {
                    return;
                }

                log_warning("latest reading", &fetched);
                state.set(DataState::Loaded(Rc::new(fetched)));

                schedule_next(trigger, aborted_check).await;
            });

            move || aborted.set(true)
        });
    }

    state
}

#[hook]
pub fn use_history(api_base: String, window: TimeWindow) -> UseStateHandle<DataState<Readings>> {
    let state = use_state(|| DataState::Loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with(
            (trigger_value, api_base, window),
            move |(_, api_base, window)| {
                let api_base = api_base.clone();
                let window = *window;
                let aborted = Rc::new(Cell::new(false));
                let aborted_check = aborted.clone();

                spawn_local(async move {
                    let now = Utc::now();
                    let query = window.history_query(now);

                    let fetched = fetch_history(&api_base, &query, now).await;
                    if aborted_check.get() {
                        return;
                    }

                    log_warning("history", &fetched);
                    state.set(DataState::Loaded(Rc::new(fetched)));

                    schedule_next(trigger, aborted_check).await;
                });

                move || aborted.set(true)
            },
        );
    }

    state
}

fn log_warning<T>(what: &str, fetched: &Fetched<T>) {
    if let Some(e) = &fetched.warning {
        console::warn!(&format!("Falling back to empty {what}: {e}"));
    }
}

/// Bumps the trigger after the polling interval unless the effect was torn down.
async fn schedule_next(trigger: UseStateHandle<u32>, aborted: Rc<Cell<bool>>) {
    if !crate::config::Config::ENABLE_AUTO_REFRESH || aborted.get() {
        return;
    }

    TimeoutFuture::new(crate::config::Config::POLLING_INTERVAL_MS).await;
    if !aborted.get() {
        trigger.set(*trigger + 1); // Trigger next fetch
    }
}

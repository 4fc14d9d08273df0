use chrono::Utc;
use gloo::console;
use gloo_storage::{SessionStorage, Storage};
use gloo_timers::callback::Interval;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config::Config;
use crate::models::view_state::{ViewAction, ViewState, merge_query};

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            // Same Rc means no re-render
            None => self,
        }
    }
}

/// View state shared by the whole page, persisted in sessionStorage and mirrored to the URL.
#[hook]
pub fn use_view_state() -> UseReducerHandle<ViewState> {
    let state = use_reducer(|| {
        ViewState::resolve(load_session_state(), &current_query(), Utc::now())
    });

    // Effect: persist and mirror every change
    {
        let current = (*state).clone();
        use_effect_with(current, |state| {
            save_session_state(state);
            sync_url(state);
            || ()
        });
    }

    // Effect: run the slideshow clock while enabled
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.slideshow_enabled, move |enabled| {
            let interval = enabled.then(|| {
                Interval::new(Config::SLIDESHOW_TICK_MS, move || {
                    dispatcher.dispatch(ViewAction::Tick(Utc::now()));
                })
            });

            move || drop(interval)
        });
    }

    state
}

fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Rewrites the query string in place, only when a value differs.
fn sync_url(state: &ViewState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();

    let query = location.search().unwrap_or_default();
    let Some(merged) = merge_query(&query, &state.query_pairs()) else {
        return;
    };

    let path = location.pathname().unwrap_or_default();
    let url = format!("{path}?{merged}");

    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(e) = result {
        console::warn!(&format!("Failed to update URL: {e:?}"));
    }
}

/// Load view state saved earlier in this tab
fn load_session_state() -> Option<ViewState> {
    SessionStorage::get(Config::SESSION_KEY).ok()
}

/// Save view state for the rest of this tab's session
fn save_session_state(state: &ViewState) {
    if let Err(e) = SessionStorage::set(Config::SESSION_KEY, state) {
        console::warn!(&format!("Failed to save view state: {e:?}"));
    }
}

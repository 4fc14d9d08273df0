use chrono::{DateTime, Duration, DurationRound, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::i18n::{Language, TextKey};
use super::query::HistoryQuery;
use crate::config::Config;

const LANG_PARAM: &str = "lang";
const SLIDE_PARAM: &str = "slide";
const KIOSK_PARAM: &str = "kiosk";
const API_PARAM: &str = "api";

/// Lookback span of the history chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl TimeWindow {
    pub fn all() -> &'static [TimeWindow] {
        &[
            TimeWindow::Day,
            TimeWindow::Week,
            TimeWindow::Month,
            TimeWindow::Year,
        ]
    }

    pub fn lookback(&self) -> Duration {
        match self {
            TimeWindow::Day => Duration::days(1),
            TimeWindow::Week => Duration::days(7),
            TimeWindow::Month => Duration::days(30),
            TimeWindow::Year => Duration::days(365),
        }
    }

    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.lookback()
    }

    /// History request covering this window. The start is cut to the minute
    /// so that repeated requests share a cache key.
    pub fn history_query(&self, now: DateTime<Utc>) -> HistoryQuery {
        let now = now.duration_trunc(Duration::minutes(1)).unwrap_or(now);
        HistoryQuery::since(self.start(now))
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            TimeWindow::Day => TextKey::Day,
            TimeWindow::Week => TextKey::Week,
            TimeWindow::Month => TextKey::Month,
            TimeWindow::Year => TextKey::Year,
        }
    }
}

/// What the user is looking at, shared between URL, session and widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub language: Language,
    pub kiosk: bool,
    pub slideshow_enabled: bool,
    pub api_base: String,
    #[serde(default)]
    pub time_window: TimeWindow,
    pub slide_last_switch: DateTime<Utc>,
}

/// A change requested by a widget or timer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    SetLanguage(Language),
    SetKiosk(bool),
    SetSlideshow {
        enabled: bool,
        now: DateTime<Utc>,
    },
    SetApiBase(String),
    SetTimeWindow(TimeWindow),
    /// Slideshow clock check
    Tick(DateTime<Utc>),
}

impl ViewState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            language: Language::default(),
            kiosk: false,
            slideshow_enabled: false,
            api_base: Config::DEFAULT_API_BASE.to_string(),
            time_window: TimeWindow::default(),
            slide_last_switch: now,
        }
    }

    /// Reads `lang`, `slide`, `kiosk` and `api` from a query string, leading `?` optional.
    /// Missing or unsupported values fall back to defaults.
    pub fn from_query(query: &str, now: DateTime<Utc>) -> Self {
        let mut state = Self::new(now);
        state.merge_url_params(query, now);
        state
    }

    /// Starts from the saved tab state when there is one, then lets every
    /// parameter present in the URL override it. Keys the URL does not carry
    /// keep their saved values.
    pub fn resolve(session: Option<Self>, query: &str, now: DateTime<Utc>) -> Self {
        let mut state = session.unwrap_or_else(|| Self::new(now));
        state.merge_url_params(query, now);
        state
    }

    fn merge_url_params(&mut self, query: &str, now: DateTime<Utc>) {
        for (key, value) in parse_query(query) {
            match key.as_str() {
                LANG_PARAM => self.language = value.parse().unwrap_or_default(),
                SLIDE_PARAM => {
                    let enabled = parse_bool(&value);
                    if enabled && !self.slideshow_enabled {
                        self.slide_last_switch = now;
                    }
                    self.slideshow_enabled = enabled;
                }
                KIOSK_PARAM => self.kiosk = parse_bool(&value),
                API_PARAM if !value.trim().is_empty() => self.api_base = value.trim().to_string(),
                _ => {}
            }
        }
    }

    /// Parameters echoed into the page URL.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (LANG_PARAM, self.language.code().to_string()),
            (SLIDE_PARAM, format_bool(self.slideshow_enabled)),
            (KIOSK_PARAM, format_bool(self.kiosk)),
            (API_PARAM, self.api_base.clone()),
        ]
    }

    /// Flips the language once the slideshow interval has elapsed.
    /// Returns true if the language changed.
    pub fn tick_slideshow(&mut self, now: DateTime<Utc>) -> bool {
        if !self.slideshow_enabled {
            return false;
        }

        if now - self.slide_last_switch >= Duration::seconds(Config::SLIDESHOW_INTERVAL_SECS) {
            self.language = self.language.toggled();
            self.slide_last_switch = now;
            return true;
        }

        false
    }

    /// Applies an action. Returns `None` when nothing changed.
    pub fn apply(&self, action: ViewAction) -> Option<Self> {
        let mut next = self.clone();

        match action {
            ViewAction::SetLanguage(language) => next.language = language,
            ViewAction::SetKiosk(kiosk) => next.kiosk = kiosk,
            ViewAction::SetSlideshow { enabled, now } => {
                if enabled && !self.slideshow_enabled {
                    next.slide_last_switch = now;
                }
                next.slideshow_enabled = enabled;
            }
            ViewAction::SetApiBase(api_base) => next.api_base = api_base.trim().to_string(),
            ViewAction::SetTimeWindow(window) => next.time_window = window,
            ViewAction::Tick(now) => {
                next.tick_slideshow(now);
            }
        }

        (next != *self).then_some(next)
    }

    /// The history request for the selected window.
    pub fn history_query(&self, now: DateTime<Utc>) -> HistoryQuery {
        self.time_window.history_query(now)
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        self.language.text(key)
    }
}

/// `1`, `true`, `yes` and `y` are true, any other value false.
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}

fn format_bool(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Writes `updates` into `query`, keeping unrelated parameters in place.
/// Returns the new query string only if a value actually changed.
pub fn merge_query(query: &str, updates: &[(&str, String)]) -> Option<String> {
    let mut pairs = parse_query(query);
    let mut changed = false;

    for (key, value) in updates {
        match pairs.iter_mut().find(|(k, _)| k.as_str() == *key) {
            Some((_, existing)) if *existing == *value => {}
            Some((_, existing)) => {
                *existing = value.clone();
                changed = true;
            }
            None => {
                pairs.push(((*key).to_string(), value.clone()));
                changed = true;
            }
        }
    }

    changed.then(|| {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults_without_query() {
        let state = ViewState::from_query("", t0());
        assert_eq!(state, ViewState::new(t0()));
        assert_eq!(state.api_base, "http://localhost:5000");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let state = ViewState::from_query("lang=fr", t0());
        assert_eq!(state.language, Language::En);
    }

    #[test]
    fn test_api_param() {
        let state = ViewState::from_query("?api=http%3A%2F%2Fpv.local%3A8080", t0());
        assert_eq!(state.api_base, "http://pv.local:8080");
    }

    #[test]
    fn test_bool_parsing() {
        for truthy in ["1", "true", "TRUE", "yes", "Y"] {
            assert!(parse_bool(truthy), "{truthy}");
        }
        for falsy in ["0", "false", "no", "", "on"] {
            assert!(!parse_bool(falsy), "{falsy}");
        }
    }

    #[test]
    fn test_url_overrides_saved_state() {
        let mut session = ViewState::new(t0());
        session.language = Language::De;
        session.time_window = TimeWindow::Month;
        session.api_base = "http://saved:1".to_string();

        let state = ViewState::resolve(Some(session), "lang=en&kiosk=1", t0());
        assert_eq!(state.language, Language::En);
        assert!(state.kiosk);
        // Keys absent from the URL keep their saved values
        assert_eq!(state.time_window, TimeWindow::Month);
        assert_eq!(state.api_base, "http://saved:1");
    }

    #[test]
    fn test_saved_state_used_without_query() {
        let mut session = ViewState::new(t0());
        session.language = Language::De;
        session.kiosk = true;

        let state = ViewState::resolve(Some(session.clone()), "", t0() + Duration::seconds(30));
        assert_eq!(state, session);
    }

    #[test]
    fn test_url_slide_keeps_running_clock() {
        let mut session = ViewState::new(t0());
        session.slideshow_enabled = true;
        let later = t0() + Duration::seconds(5);

        let kept = ViewState::resolve(Some(session.clone()), "slide=1", later);
        assert_eq!(kept.slide_last_switch, t0());

        session.slideshow_enabled = false;
        let started = ViewState::resolve(Some(session), "slide=1", later);
        assert_eq!(started.slide_last_switch, later);
    }

    #[test]
    fn test_merge_query_only_on_change() {
        let updates = vec![("lang", "de".to_string()), ("kiosk", "1".to_string())];
        assert_eq!(merge_query("lang=de&kiosk=1", &updates), None);

        let merged = merge_query("foo=bar&lang=en", &updates).unwrap();
        assert_eq!(merged, "foo=bar&lang=de&kiosk=1");
    }

    #[test]
    fn test_merge_query_encodes_values() {
        let updates = vec![("api", "http://a:1/x".to_string())];
        let merged = merge_query("", &updates).unwrap();
        assert_eq!(merged, "api=http%3A%2F%2Fa%3A1%2Fx");
        assert_eq!(merge_query(&merged, &updates), None);
    }

    #[test]
    fn test_apply_reports_no_change() {
        let state = ViewState::new(t0());
        assert!(state.apply(ViewAction::SetKiosk(false)).is_none());
        assert!(state.apply(ViewAction::Tick(t0())).is_none());
        assert!(state.apply(ViewAction::SetKiosk(true)).is_some());
    }

    #[test]
    fn test_enabling_slideshow_restarts_clock() {
        let state = ViewState::new(t0());
        let later = t0() + Duration::seconds(60);

        let next = state
            .apply(ViewAction::SetSlideshow { enabled: true, now: later })
            .unwrap();
        assert_eq!(next.slide_last_switch, later);
        assert_eq!(next.language, Language::En);
    }

    #[test]
    fn test_slideshow_disabled_never_flips() {
        let mut state = ViewState::new(t0());
        assert!(!state.tick_slideshow(t0() + Duration::seconds(120)));
        assert_eq!(state.language, Language::En);
    }

    #[test]
    fn test_history_query_window() {
        let mut state = ViewState::new(t0());
        state.time_window = TimeWindow::Week;
        let query = state.history_query(t0());
        assert_eq!(query.start, Some(t0() - Duration::days(7)));
        assert_eq!(query.limit, 10_000);
    }

    #[test]
    fn test_history_query_stable_within_minute() {
        let state = ViewState::new(t0());
        assert_eq!(
            state.history_query(t0() + Duration::seconds(5)),
            state.history_query(t0() + Duration::seconds(50))
        );
    }
}

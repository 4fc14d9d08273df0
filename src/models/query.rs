use chrono::{DateTime, Utc};

use crate::config::Config;

/// Sort order accepted by the history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Parameters of a history request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub limit: u32,
    pub order: SortOrder,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            limit: Config::HISTORY_LIMIT,
            order: SortOrder::Asc,
        }
    }
}

impl HistoryQuery {
    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }

    /// Query parameters in request order. Unset bounds are omitted.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(start) = self.start {
            params.push(("start", start.to_rfc3339()));
        }
        if let Some(end) = self.end {
            params.push(("end", end.to_rfc3339()));
        }
        params.push(("limit", self.limit.to_string()));
        params.push(("order", self.order.as_str().to_string()));
        params
    }
}

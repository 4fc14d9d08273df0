pub mod error;
pub mod i18n;
pub mod query;
pub mod reading;
pub mod view_state;

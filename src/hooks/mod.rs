pub mod use_asset;
pub mod use_readings;
pub mod use_view_state;

pub mod battery_chart;
pub mod chart;
pub mod controls;
pub mod energy_flow;
pub mod generation_panel;
pub mod header;
pub mod kiosk_bar;
pub mod language_selector;
pub mod metrics;
pub mod power_chart;
pub mod status;
pub mod time_window_selector;

pub use controls::Controls;
pub use energy_flow::EnergyFlow;
pub use generation_panel::GenerationPanel;
pub use header::Header;
pub use kiosk_bar::KioskBar;
pub use metrics::Metrics;

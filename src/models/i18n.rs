use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Display language of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Returns the code used in the `lang` URL parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Returns the language's own name, as shown in the selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }

    /// The other language. Used by the slideshow.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::De]
    }

    /// Looks up a label in this language's dictionary.
    pub fn text(&self, key: TextKey) -> &'static str {
        match self {
            Language::En => english(key),
            Language::De => german(key),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            _ => Err(AppError::Config(format!("Unsupported language: {s}"))),
        }
    }
}

/// Every label the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    ThiPhotovoltaics,
    LastUpdated,
    LifetimeKpis,
    Production,
    Average,
    Income,
    NoLiveKpis,
    Controls,
    LanguagePicker,
    Language,
    Slideshow,
    ApiBase,
    KioskOn,
    KioskOff,
    PvGeneration,
    PowerDistribution,
    DistributionPlaceholder,
    BatteryCharge,
    TimeWindow,
    Day,
    Week,
    Month,
    Year,
    ApiError,
    HistoricalNone,
    Loading,
}

impl TextKey {
    pub fn all() -> &'static [TextKey] {
        &[
            TextKey::Title,
            TextKey::ThiPhotovoltaics,
            TextKey::LastUpdated,
            TextKey::LifetimeKpis,
            TextKey::Production,
            TextKey::Average,
            TextKey::Income,
            TextKey::NoLiveKpis,
            TextKey::Controls,
            TextKey::LanguagePicker,
            TextKey::Language,
            TextKey::Slideshow,
            TextKey::ApiBase,
            TextKey::KioskOn,
            TextKey::KioskOff,
            TextKey::PvGeneration,
            TextKey::PowerDistribution,
            TextKey::DistributionPlaceholder,
            TextKey::BatteryCharge,
            TextKey::TimeWindow,
            TextKey::Day,
            TextKey::Week,
            TextKey::Month,
            TextKey::Year,
            TextKey::ApiError,
            TextKey::HistoricalNone,
            TextKey::Loading,
        ]
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "THI Photovoltaic Module Monitor",
        TextKey::ThiPhotovoltaics => "THI Photovoltaics",
        TextKey::LastUpdated => "Last updated",
        TextKey::LifetimeKpis => "LIFETIME KEY METRICS",
        TextKey::Production => "Production",
        TextKey::Average => "Average",
        TextKey::Income => "Income equivalent",
        TextKey::NoLiveKpis => "No live KPIs",
        TextKey::Controls => "Controls",
        TextKey::LanguagePicker => "Language / Sprache",
        TextKey::Language => "Language",
        TextKey::Slideshow => "Slideshow (alternate EN/DE)",
        TextKey::ApiBase => "API base URL",
        TextKey::KioskOn => "Enter Display Mode",
        TextKey::KioskOff => "Exit Display Mode",
        TextKey::PvGeneration => "PV Generation",
        TextKey::PowerDistribution => "Power Distribution",
        TextKey::DistributionPlaceholder => "Distribution view placeholder",
        TextKey::BatteryCharge => "Battery charge (%)",
        TextKey::TimeWindow => "Time window",
        TextKey::Day => "Day",
        TextKey::Week => "Week",
        TextKey::Month => "Month",
        TextKey::Year => "Year",
        TextKey::ApiError => "Failed to fetch data",
        TextKey::HistoricalNone => "No historical readings for this selection.",
        TextKey::Loading => "Loading data...",
    }
}

fn german(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "THI Photovoltaik-Modulmonitor",
        TextKey::ThiPhotovoltaics => "THI-Photovoltaik",
        TextKey::LastUpdated => "Zuletzt aktualisiert",
        TextKey::LifetimeKpis => "KENNZAHLEN (GESAMT)",
        TextKey::Production => "Erzeugung",
        TextKey::Average => "Durchschnitt",
        TextKey::Income => "Ertragsäquivalent",
        TextKey::NoLiveKpis => "Keine Live-Kennzahlen",
        TextKey::Controls => "Steuerung",
        TextKey::LanguagePicker => "Language / Sprache",
        TextKey::Language => "Sprache",
        TextKey::Slideshow => "Diashow (EN/DE im Wechsel)",
        TextKey::ApiBase => "API-Basis-URL",
        TextKey::KioskOn => "Anzeigemodus starten",
        TextKey::KioskOff => "Anzeigemodus beenden",
        TextKey::PvGeneration => "PV-Erzeugung",
        TextKey::PowerDistribution => "Leistungsverteilung",
        TextKey::DistributionPlaceholder => "Platzhalter für die Verteilungsansicht",
        TextKey::BatteryCharge => "Batterieladung (%)",
        TextKey::TimeWindow => "Zeitraum",
        TextKey::Day => "Tag",
        TextKey::Week => "Woche",
        TextKey::Month => "Monat",
        TextKey::Year => "Jahr",
        TextKey::ApiError => "Abruf fehlgeschlagen",
        TextKey::HistoricalNone => "Keine historischen Messwerte für diese Auswahl.",
        TextKey::Loading => "Daten werden geladen...",
    }
}

use serde::{de::Deserializer, Deserialize, Serialize};
use std::fmt;

/// Stores viewer-configurable presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Display currency code for summary figures.
    pub currency: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub default_view: DefaultView,
    #[serde(default)]
    pub time_format: TimeFormat,
    /// When set, inactive subscriptions are shown (dimmed) in list views
    /// instead of being hidden.
    #[serde(default = "Preferences::default_show_inactive")]
    pub show_inactive: bool,
    /// How many days before a billing date reminders should fire.
    #[serde(default = "Preferences::default_reminder_lead_days")]
    pub reminder_lead_days: u32,
    #[serde(default = "Preferences::default_notifications_enabled")]
    pub email_notifications: bool,
    #[serde(default)]
    pub push_notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            theme: Theme::default(),
            default_view: DefaultView::default(),
            time_format: TimeFormat::default(),
            show_inactive: Self::default_show_inactive(),
            reminder_lead_days: Self::default_reminder_lead_days(),
            email_notifications: Self::default_notifications_enabled(),
            push_notifications: false,
        }
    }
}

impl Preferences {
    pub fn default_show_inactive() -> bool {
        true
    }

    pub fn default_reminder_lead_days() -> u32 {
        3
    }

    pub fn default_notifications_enabled() -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::parse(v.trim()))
            .unwrap_or_else(Theme::default)
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    List,
    Grid,
    Calendar,
}

impl DefaultView {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => DefaultView::List,
            "calendar" => DefaultView::Calendar,
            _ => DefaultView::Grid,
        }
    }
}

impl Default for DefaultView {
    fn default() -> Self {
        DefaultView::Grid
    }
}

impl fmt::Display for DefaultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DefaultView::List => "list",
            DefaultView::Grid => "grid",
            DefaultView::Calendar => "calendar",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for DefaultView {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|v| DefaultView::parse(&v))
            .unwrap_or_else(DefaultView::default))
    }
}

/// Clock rendering preference for billing dates and reminders.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "24h" => TimeFormat::TwentyFourHour,
            _ => TimeFormat::TwelveHour,
        }
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat::TwelveHour
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeFormat::TwelveHour => "12h",
            TimeFormat::TwentyFourHour => "24h",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for TimeFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|v| TimeFormat::parse(&v))
            .unwrap_or_else(TimeFormat::default))
    }
}

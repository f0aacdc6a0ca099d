use serde::Deserialize;

use crate::domain::{
    errors::ConfigurationError,
    lottery::{DEFAULT_HISTORY_CAPACITY, LocatorSettings},
    theme::THEME_STORAGE_KEY,
};

pub const DEFAULT_DRAW_API_BASE_URL: &str =
    "https://www.dhlottery.co.kr/common.do?method=getLottoNumber&drwNo=";
pub const DEFAULT_RECENT_DRAW_COUNT: usize = 5;

/// Ids of the page elements the app drives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub generate_button: String,
    pub theme_toggle: String,
    pub current_numbers: String,
    pub history_list: String,
    pub draw_section: String,
    pub draw_list: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            generate_button: "generate-button".into(),
            theme_toggle: "theme-toggle".into(),
            current_numbers: "lottery-numbers".into(),
            history_list: "history-list".into(),
            draw_section: "draw-history-section".into(),
            draw_list: "draw-history".into(),
        }
    }
}

/// Runtime configuration; every field has a default so a partial JS object works
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub draw_api_base_url: String,
    pub locator: LocatorSettings,
    pub history_capacity: usize,
    pub recent_draw_count: usize,
    pub theme_storage_key: String,
    pub elements: ElementIds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            draw_api_base_url: DEFAULT_DRAW_API_BASE_URL.into(),
            locator: LocatorSettings::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            recent_draw_count: DEFAULT_RECENT_DRAW_COUNT,
            theme_storage_key: THEME_STORAGE_KEY.into(),
            elements: ElementIds::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.draw_api_base_url.is_empty() {
            return Err(ConfigurationError::Malformed("drawApiBaseUrl is empty".into()));
        }
        let counts = [
            ("historyCapacity", self.history_capacity as u64),
            ("recentDrawCount", self.recent_draw_count as u64),
            ("locator.schedule.periodMs", self.locator.schedule.period_ms),
            ("locator.forwardBudget", self.locator.forward_budget as u64),
            ("locator.backwardBudget", self.locator.backward_budget as u64),
            ("locator.fallbackDraw", self.locator.fallback_draw as u64),
        ];
        match counts.iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(ConfigurationError::ZeroValue(*field)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.elements.generate_button, "generate-button");
        assert_eq!(config.recent_draw_count, 5);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = AppConfig::from_json(
            r#"{"historyCapacity": 3, "locator": {"fallbackDraw": 900}}"#,
        )
        .unwrap();
        assert_eq!(config.history_capacity, 3);
        assert_eq!(config.locator.fallback_draw, 900);
        assert_eq!(config.locator.forward_budget, 50);
    }

    #[test]
    fn zero_values_are_rejected() {
        assert_eq!(
            AppConfig::from_json(r#"{"historyCapacity": 0}"#),
            Err(ConfigurationError::ZeroValue("historyCapacity"))
        );
        assert!(matches!(
            AppConfig::from_json("not json"),
            Err(ConfigurationError::Malformed(_))
        ));
    }
}

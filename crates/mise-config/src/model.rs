use mise_domain::BusinessStage;
use serde::{de::Deserializer, Deserialize, Serialize};

/// Preferences shared by every screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(
        rename = "businessStage",
        default,
        deserialize_with = "deserialize_stage"
    )]
    pub business_stage: BusinessStage,
    #[serde(rename = "showAIAgents", default)]
    pub show_ai_agents: bool,
    #[serde(rename = "isDarkMode", default)]
    pub is_dark_mode: bool,
}

/// Envelope written under the storage key: `{"state": {...}, "version": 0}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub state: Preferences,
    #[serde(default)]
    pub version: u32,
}

impl PersistedState {
    pub const VERSION: u32 = 0;

    pub fn new(state: Preferences) -> Self {
        Self {
            state,
            version: Self::VERSION,
        }
    }
}

/// Unknown or non-string stages fall back to the default stage.
fn deserialize_stage<'de, D>(deserializer: D) -> Result<BusinessStage, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_uses_camel_case_keys() {
        let state = PersistedState::new(Preferences {
            business_stage: BusinessStage::Planning,
            show_ai_agents: true,
            is_dark_mode: false,
        });
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "state": {
                    "businessStage": "planning",
                    "showAIAgents": true,
                    "isDarkMode": false
                },
                "version": 0
            })
        );
    }

    #[test]
    fn unknown_stage_falls_back_to_ideation() {
        let raw = r#"{"state":{"businessStage":"expansion","isDarkMode":true},"version":0}"#;
        let state: PersistedState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.state.business_stage, BusinessStage::Ideation);
        assert!(state.state.is_dark_mode);
        assert!(!state.state.show_ai_agents);

        let numeric: PersistedState =
            serde_json::from_str(r#"{"state":{"businessStage":3}}"#).unwrap();
        assert_eq!(numeric.state.business_stage, BusinessStage::Ideation);
    }
}

//! Persistence codec: categories and widget data values to pretty JSON and
//! back.
//!
//! Only data attributes cross the boundary; animation and interaction state
//! never serialize. Widget polymorphism rides on a `type` tag matching the
//! original file format, and button actions are stored as sentinel-wrapped
//! ids (`/Action(save_replay)/`) so they are distinguishable from plain
//! strings without ever putting executable code in the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::widgets::{
    Button, ColorPicker, Setting, Slider, StringSelector, TextInput, Toggle,
};

/// Deterministic per-module settings file name.
pub fn file_name(module: &str) -> String {
    format!(".{module}-settings.json")
}

#[derive(Debug, Serialize, Deserialize)]
struct CategoryRecord {
    name: String,
    settings: Vec<SettingRecord>,
}

/// On-disk shape of one widget; the closed dispatch over the six type tags.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SettingRecord {
    Toggle {
        name: String,
        value: bool,
    },
    Slider {
        name: String,
        value: f32,
        min: f32,
        max: f32,
        #[serde(default)]
        round: u8,
    },
    ColorPicker {
        name: String,
        value: [u8; 3],
    },
    StringSelector {
        name: String,
        value: usize,
        options: Vec<String>,
    },
    Button {
        name: String,
        text: String,
        #[serde(with = "action_ref")]
        action: String,
    },
    TextInput {
        name: String,
        text: String,
    },
}

/// Sentinel wrapping for action ids, plus tolerant decoding of legacy files
/// that stored function source. Legacy bodies come back verbatim as ids that
/// can never resolve, which disables the button instead of executing them.
mod action_ref {
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::warn;

    pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("/Action({id})/"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Some(id) = raw
            .strip_prefix("/Action(")
            .and_then(|rest| rest.strip_suffix(")/"))
        {
            return Ok(id.to_string());
        }
        if raw.starts_with("/Function(") {
            warn!("persisted button carries legacy function source; ignoring it");
        }
        Ok(raw)
    }
}

/// Serialize the category tree to the pretty-printed on-disk form.
pub fn encode(categories: &[Category]) -> Result<String> {
    let records: Vec<CategoryRecord> = categories
        .iter()
        .map(|category| CategoryRecord {
            name: category.name.clone(),
            settings: category.settings.iter().map(record_of).collect(),
        })
        .collect();
    serde_json::to_string_pretty(&records).context("serializing settings")
}

/// Parse the on-disk form back into live categories with fresh animation
/// state. Every invariant is re-clamped on the way in, so a hand-edited file
/// cannot produce an out-of-range value.
pub fn decode(text: &str) -> Result<Vec<Category>> {
    let records: Vec<CategoryRecord> =
        serde_json::from_str(text).context("parsing settings")?;
    Ok(records
        .into_iter()
        .map(|record| Category {
            name: record.name,
            settings: record.settings.into_iter().map(setting_of).collect(),
        })
        .collect())
}

fn record_of(setting: &Setting) -> SettingRecord {
    match setting {
        Setting::Toggle(w) => SettingRecord::Toggle {
            name: w.name.clone(),
            value: w.value,
        },
        Setting::Slider(w) => SettingRecord::Slider {
            name: w.name.clone(),
            value: w.value,
            min: w.min,
            max: w.max,
            round: w.round,
        },
        Setting::ColorPicker(w) => SettingRecord::ColorPicker {
            name: w.name.clone(),
            value: w.value,
        },
        Setting::StringSelector(w) => SettingRecord::StringSelector {
            name: w.name.clone(),
            value: w.value,
            options: w.options.clone(),
        },
        Setting::Button(w) => SettingRecord::Button {
            name: w.name.clone(),
            text: w.text.clone(),
            action: w.action.clone(),
        },
        Setting::TextInput(w) => SettingRecord::TextInput {
            name: w.name.clone(),
            text: w.text.clone(),
        },
    }
}

fn setting_of(record: SettingRecord) -> Setting {
    match record {
        SettingRecord::Toggle { name, value } => Toggle::new(name, value).into(),
        SettingRecord::Slider {
            name,
            value,
            min,
            max,
            round,
        } => Slider::new(name, value, min, max).with_round(round).into(),
        SettingRecord::ColorPicker { name, value } => ColorPicker::new(name, value).into(),
        SettingRecord::StringSelector {
            name,
            value,
            options,
        } => StringSelector::new(name, value, options).into(),
        SettingRecord::Button { name, text, action } => Button::new(name, text, action).into(),
        SettingRecord::TextInput { name, text } => TextInput::new(name, text).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Vec<Category> {
        vec![
            Category::new(
                "Video",
                vec![
                    Toggle::new("vsync", true).into(),
                    Slider::new("fov", 90.0, 30.0, 120.0).into(),
                    Slider::new("gamma", 0.75, 0.0, 1.0).with_round(2).into(),
                    ColorPicker::new("accent", [66, 167, 244]).into(),
                ],
            ),
            Category::new(
                "Chat",
                vec![
                    StringSelector::new(
                        "position",
                        1,
                        vec!["left".into(), "center".into(), "right".into()],
                    )
                    .into(),
                    Button::new("history", "clear", "clear_history").into(),
                    TextInput::new("prefix", "> ").into(),
                ],
            ),
        ]
    }

    #[test]
    fn test_roundtrip_preserves_all_data_fields() {
        let tree = sample_tree();
        let encoded = encode(&tree).unwrap();
        let decoded = decode(&encoded).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].name, "Video");
        assert_eq!(decoded[1].name, "Chat");

        match &decoded[0].settings[0] {
            Setting::Toggle(w) => {
                assert_eq!(w.name, "vsync");
                assert!(w.value);
            }
            other => panic!("expected toggle, got {}", other.type_tag()),
        }
        match &decoded[0].settings[1] {
            Setting::Slider(w) => {
                assert_eq!((w.value, w.min, w.max, w.round), (90.0, 30.0, 120.0, 0));
            }
            other => panic!("expected slider, got {}", other.type_tag()),
        }
        match &decoded[0].settings[2] {
            Setting::Slider(w) => {
                assert_eq!((w.value, w.round), (0.75, 2));
            }
            other => panic!("expected slider, got {}", other.type_tag()),
        }
        match &decoded[0].settings[3] {
            Setting::ColorPicker(w) => assert_eq!(w.value, [66, 167, 244]),
            other => panic!("expected color picker, got {}", other.type_tag()),
        }
        match &decoded[1].settings[0] {
            Setting::StringSelector(w) => {
                assert_eq!(w.value, 1);
                assert_eq!(w.options, vec!["left", "center", "right"]);
            }
            other => panic!("expected string selector, got {}", other.type_tag()),
        }
        match &decoded[1].settings[1] {
            Setting::Button(w) => {
                assert_eq!(w.text, "clear");
                assert_eq!(w.action, "clear_history");
            }
            other => panic!("expected button, got {}", other.type_tag()),
        }
        match &decoded[1].settings[2] {
            Setting::TextInput(w) => assert_eq!(w.text, "> "),
            other => panic!("expected text input, got {}", other.type_tag()),
        }
    }

    #[test]
    fn test_encoded_form_is_tagged_pretty_json() {
        let encoded = encode(&sample_tree()).unwrap();
        assert!(encoded.contains("\"type\": \"toggle\""));
        assert!(encoded.contains("\"type\": \"string_selector\""));
        assert!(encoded.contains('\n'), "output should be pretty-printed");
    }

    #[test]
    fn test_action_ids_use_sentinel_marker() {
        let encoded = encode(&sample_tree()).unwrap();
        assert!(encoded.contains("/Action(clear_history)/"));
        assert!(!encoded.contains("\"clear_history\""));
    }

    #[test]
    fn test_legacy_function_source_is_never_evaluated() {
        let legacy = r#"[
            {
                "name": "Misc",
                "settings": [
                    {
                        "type": "button",
                        "name": "danger",
                        "text": "run",
                        "action": "/Function(function() { evil(); })/"
                    }
                ]
            }
        ]"#;
        let decoded = decode(legacy).unwrap();
        match &decoded[0].settings[0] {
            Setting::Button(w) => {
                // Comes through as an id that can never resolve.
                assert!(w.action.starts_with("/Function("));
                assert!(w.enabled());
            }
            other => panic!("expected button, got {}", other.type_tag()),
        }
    }

    #[test]
    fn test_decode_clamps_out_of_range_values() {
        let edited = r#"[
            {
                "name": "Video",
                "settings": [
                    { "type": "slider", "name": "fov", "value": 999.0, "min": 30.0, "max": 120.0 },
                    { "type": "string_selector", "name": "mode", "value": 42, "options": ["a", "b"] }
                ]
            }
        ]"#;
        let decoded = decode(edited).unwrap();
        match &decoded[0].settings[0] {
            Setting::Slider(w) => assert_eq!(w.value, 120.0),
            other => panic!("expected slider, got {}", other.type_tag()),
        }
        match &decoded[0].settings[1] {
            Setting::StringSelector(w) => assert_eq!(w.value, 1),
            other => panic!("expected string selector, got {}", other.type_tag()),
        }
    }

    #[test]
    fn test_non_array_content_fails_to_decode() {
        assert!(decode("{}").is_err());
        assert!(decode("null").is_err());
        assert!(decode("not json at all").is_err());
    }

    #[test]
    fn test_unknown_type_tag_fails_to_decode() {
        let unknown = r#"[
            { "name": "X", "settings": [ { "type": "dial", "name": "n", "value": 1 } ] }
        ]"#;
        assert!(decode(unknown).is_err());
    }

    #[test]
    fn test_file_name_is_deterministic() {
        assert_eq!(file_name("mymod"), ".mymod-settings.json");
    }
}

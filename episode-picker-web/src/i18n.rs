use serde_json::{Map, Value};
use std::collections::BTreeMap;

const EN_BUNDLE: &str = include_str!("../i18n/en.json");

thread_local! {
    static BUNDLE: Value = serde_json::from_str(EN_BUNDLE).unwrap_or_else(|err| {
        log::error!("failed to parse i18n bundle: {err}");
        Value::Object(Map::new())
    });
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

/// Translate a key
///
/// Simple translation without variable substitution.
/// Returns the key itself when it is missing from the bundle.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    BUNDLE
        .with(|bundle| get_nested_value(bundle, key).and_then(|v| render_value(v, args)))
        .unwrap_or_else(|| key.to_string())
}

//! Localization collaborator interface

/// Resolves a translation key with named parameters into display text.
///
/// Used for human readable text only; no game logic depends on the output.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, params: &[(&str, String)]) -> String;
}

/// Translator that renders the key itself, e.g. `SocratesDesc(value=2)`
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return key.to_string();
        }
        let rendered: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        format!("{}({})", key, rendered.join(", "))
    }
}

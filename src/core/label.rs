//! Closed sets of values that carry a wire key, a short label and a human description.

use std::fmt::Formatter;

#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownLabel {
    kind: &'static str,
    value: String,
}

pub trait Labelled: Copy + 'static {
    /// What the values are, used in error messages.
    const KIND: &'static str;

    const ALL: &'static [Self];

    /// Key as it appears in the API payloads.
    fn key(self) -> &'static str;

    /// Short label, for units this is the symbol.
    fn label(self) -> &'static str;

    fn description(self) -> &'static str {
        self.label()
    }

    /// Case-insensitive lookup by either the key or the label.
    fn lookup(value: &str) -> Result<Self, UnknownLabel> {
        let normalized = normalize(value);
        Self::ALL
            .iter()
            .copied()
            .find(|item| normalize(item.key()) == normalized || normalize(item.label()) == normalized)
            .ok_or_else(|| UnknownLabel { kind: Self::KIND, value: value.to_owned() })
    }

    fn fmt_label(self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower-case and unify the separators, so that `GAS_ENERGY`, `gas-energy` and `Gas Energy` are one key.
fn normalize(value: &str) -> String {
    value.trim().chars().fold(String::with_capacity(value.len()), |mut normalized, character| {
        if matches!(character, '_' | '-' | ' ') {
            normalized.push(' ');
        } else {
            normalized.extend(character.to_lowercase());
        }
        normalized
    })
}

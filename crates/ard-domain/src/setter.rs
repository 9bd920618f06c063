//! Setter naming conventions

use serde::{Deserialize, Serialize};

/// Maps a field name onto the name of its fallback setter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetterConvention {
    /// `set` followed by the field name with its first letter upper-cased (`setValue`)
    #[default]
    JavaBean,
    /// `set_` followed by the field name unchanged (`set_value`)
    SnakeCase,
}

impl SetterConvention {
    /// Name of the setter for `field` under this convention
    pub fn setter_name(&self, field: &str) -> String {
        match self {
            SetterConvention::JavaBean => {
                let mut chars = field.chars();
                match chars.next() {
                    Some(first) => {
                        let mut name = String::with_capacity(field.len() + 3);
                        name.push_str("set");
                        name.extend(first.to_uppercase());
                        name.push_str(chars.as_str());
                        name
                    }
                    None => "set".to_string(),
                }
            }
            SetterConvention::SnakeCase => format!("set_{}", field),
        }
    }
}

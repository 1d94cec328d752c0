use thiserror::Error;

/// The HTML input widget used to collect a single argument's value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    Checkbox,
    DateTimeLocal,
    Number,
    #[default]
    Text,
}
impl InputKind {
    /// The value used for this kind in an `<input type="...">` attribute.
    pub fn html_type(&self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::DateTimeLocal => "datetime-local",
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}
impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.html_type())
    }
}
impl std::str::FromStr for InputKind {
    type Err = ParseInputKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkbox" => Ok(Self::Checkbox),
            "datetime-local" => Ok(Self::DateTimeLocal),
            "number" => Ok(Self::Number),
            "text" => Ok(Self::Text),
            other => Err(ParseInputKindError(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "Unknown input kind `{0}`. Expected one of: checkbox, datetime-local, \
    number, text"
)]
pub struct ParseInputKindError(pub String);

use thiserror::Error;

/// The HTTP method a form submits with.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Delete,
    Get,
    Patch,
    #[default]
    Post,
    Put,
}
impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
            Self::Get => "GET",
            Self::Patch => "PATCH",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }

    /// `GET` requests carry the operation in the URL's query string; every
    /// other method sends it as a JSON body.
    pub fn sends_body(&self) -> bool {
        !matches!(self, Self::Get)
    }
}
impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::str::FromStr for HttpMethod {
    type Err = ParseHttpMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DELETE" => Ok(Self::Delete),
            "GET" => Ok(Self::Get),
            "PATCH" => Ok(Self::Patch),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            _ => Err(ParseHttpMethodError(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Unsupported form method `{0}`. Expected one of: GET, POST, PUT, PATCH, DELETE")]
pub struct ParseHttpMethodError(pub String);

use crate::domain::error::{CliError, CliResult};

/// Positional arguments following the command name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    tokens: Vec<String>,
}

/// Parse a whole `true`/`false` token, ignoring case
pub fn parse_bool(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

impl Arguments {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw token at a 0-based position
    pub fn get(&self, position: usize) -> Option<&str> {
        self.tokens.get(position).map(String::as_str)
    }

    /// Required string argument
    pub fn string(&self, position: usize, missing: &str) -> CliResult<&str> {
        self.get(position)
            .ok_or_else(|| CliError::MissingArgument(missing.to_string()))
    }

    /// Required unsigned 32 bit argument, e.g. a controller serial number
    pub fn uint32(&self, position: usize, missing: &str, invalid: &str) -> CliResult<u32> {
        let token = self.string(position, missing)?;
        token
            .parse::<u32>()
            .map_err(|_| CliError::InvalidArgument(format!("{}: {}", invalid, token)))
    }

    /// Required boolean argument
    pub fn boolean(&self, position: usize, missing: &str, invalid: &str) -> CliResult<bool> {
        let token = self.string(position, missing)?;
        parse_bool(token).ok_or_else(|| CliError::InvalidArgument(format!("{}: {}", invalid, token)))
    }

    /// Optional boolean argument. Absent resolves to `default`, anything
    /// other than `true` or `false` is rejected.
    pub fn optional_boolean(&self, position: usize, default: bool, invalid: &str) -> CliResult<bool> {
        match self.get(position) {
            None => Ok(default),
            Some(token) => parse_bool(token)
                .ok_or_else(|| CliError::InvalidArgument(format!("{}: {}", invalid, token))),
        }
    }
}

//! Application parameters passed with `--args`
//!
//! Each argument has the form `NAME=VALUE`. Scripts reference parameters as
//! `${NAME}` or `${NAME:default}`; substitution happens on the script text
//! before it is parsed.

use crate::error::ScriptError;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

fn placeholder() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::([^}]*))?\}").expect("valid placeholder regex")
    })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Named values available to scripts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    /// Parse `NAME=VALUE` arguments; later values win
    ///
    /// # Errors
    /// Returns `ScriptError::InvalidArgument` for tokens without `=` or with
    /// a name that is not an identifier
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ScriptError> {
        let mut values = BTreeMap::new();

        for arg in args {
            let arg = arg.as_ref();
            let (name, value) = arg
                .split_once('=')
                .filter(|(name, _)| is_identifier(name))
                .ok_or_else(|| ScriptError::InvalidArgument(arg.to_string()))?;
            values.insert(name.to_string(), value.to_string());
        }

        Ok(Self { values })
    }

    /// Look up a parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no parameters were given
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace every placeholder in `source`
    ///
    /// `path` is only used for error reporting.
    pub fn substitute(&self, source: &str, path: &Path) -> Result<String, ScriptError> {
        let mut missing = None;

        let replaced = placeholder().replace_all(source, |caps: &Captures<'_>| {
            let name = &caps[1];
            match (self.get(name), caps.get(2)) {
                (Some(value), _) => value.to_string(),
                (None, Some(default)) => default.as_str().to_string(),
                (None, None) => {
                    missing.get_or_insert_with(|| name.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(name) => Err(ScriptError::UndefinedParameter {
                name,
                path: path.to_path_buf(),
            }),
            None => Ok(replaced.into_owned()),
        }
    }
}

//! Application handler
//!
//! Turns a path from the command line into a validated [`Document`].

use crate::app::Params;
use crate::domain::Document;
use crate::error::ScriptError;
use std::path::{Path, PathBuf};

/// Script file names looked up inside an application directory, in order
pub const MAIN_SCRIPTS: [&str; 2] = ["main.toml", "main.json"];

/// Script encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Toml,
    Json,
}

impl ScriptKind {
    /// Detect the kind from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Where an application's script lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationSource {
    /// A standalone script file
    Script { path: PathBuf, kind: ScriptKind },
    /// A directory with a main script
    Directory { main: PathBuf, kind: ScriptKind },
}

impl ApplicationSource {
    /// Classify `path` as a script or application directory
    pub fn locate(path: &Path) -> Result<Self, ScriptError> {
        if !path.exists() {
            return Err(ScriptError::PathNotFound(path.to_path_buf()));
        }

        if path.is_dir() {
            return MAIN_SCRIPTS
                .iter()
                .map(|name| path.join(name))
                .find(|main| main.is_file())
                .and_then(|main| {
                    ScriptKind::from_path(&main).map(|kind| Self::Directory { main, kind })
                })
                .ok_or_else(|| ScriptError::MissingMain(path.to_path_buf()));
        }

        let kind = ScriptKind::from_path(path)
            .ok_or_else(|| ScriptError::UnsupportedScript(path.to_path_buf()))?;
        Ok(Self::Script {
            path: path.to_path_buf(),
            kind,
        })
    }

    /// Path of the script file to read
    pub fn script_path(&self) -> &Path {
        match self {
            Self::Script { path, .. } => path,
            Self::Directory { main, .. } => main,
        }
    }

    /// Encoding of the script file
    pub fn kind(&self) -> ScriptKind {
        match self {
            Self::Script { kind, .. } | Self::Directory { kind, .. } => *kind,
        }
    }
}

/// Loads applications with a fixed set of pass-through parameters
#[derive(Debug, Clone, Default)]
pub struct ApplicationHandler {
    params: Params,
}

impl ApplicationHandler {
    /// Create a handler from `--args` tokens
    pub fn new<S: AsRef<str>>(args: &[S]) -> Result<Self, ScriptError> {
        Ok(Self {
            params: Params::from_args(args)?,
        })
    }

    /// Parameters handed to every application
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Load and validate the application at `path`
    pub fn load(&self, path: &Path) -> Result<Document, ScriptError> {
        let source = ApplicationSource::locate(path)?;
        let script = source.script_path();
        log::debug!("Loading application {} from {}", path.display(), script.display());

        let text = std::fs::read_to_string(script).map_err(|e| ScriptError::Read {
            path: script.to_path_buf(),
            source: e,
        })?;
        let text = self.params.substitute(&text, script)?;

        let document = parse_document(&text, source.kind()).map_err(|message| ScriptError::Parse {
            path: script.to_path_buf(),
            message,
        })?;

        document.validate().map_err(|e| ScriptError::Invalid {
            path: script.to_path_buf(),
            source: e,
        })?;

        Ok(document)
    }
}

fn parse_document(text: &str, kind: ScriptKind) -> Result<Document, String> {
    match kind {
        ScriptKind::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        ScriptKind::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
    }
}

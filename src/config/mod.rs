//! rc file configuration
//!
//! Lives at `~/.etiqueta/rc`, one `key=value` per line:
//!
//! ```text
//! # show unknown backend values verbatim
//! resolve.raw_label_on_miss=true
//! priority.high.label=High
//! sprint-status.unknown.color=neutral
//! ```

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::classify::{build_table, ResolveOptions};
use crate::error::ClassifyError;
use crate::models::{normalize_code, ClassificationTable, ColorToken, Dimension, EntryOverride, FALLBACK_CODE};
use crate::utils::did_you_mean;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub resolve: ResolveOptions,
    /// Locale table: per-dimension label/color replacements keyed by code
    pub overrides: BTreeMap<Dimension, BTreeMap<String, EntryOverride>>,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".etiqueta").join("rc"))
    }

    /// Load configuration from the default location; a missing file means defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)?;
        log::debug!(
            "Loaded config from {} ({} dimension override set(s))",
            path.display(),
            config.overrides.len()
        );
        Ok(config)
    }

    /// Parse rc file content
    pub fn parse(content: &str) -> Result<Self, ClassifyError> {
        let mut config = Self::default();
        let mut last_line: BTreeMap<Dimension, usize> = BTreeMap::new();
        // Line that last set each (dimension, code, field)
        let mut set_on: BTreeMap<(Dimension, String, &'static str), usize> = BTreeMap::new();

        for (idx, raw_line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| ClassifyError::ConfigParse {
                line: line_no,
                message: format!("expected key=value, got '{}'", line),
            })?;
            let key = key.trim();
            let value = value.trim();

            if key == "resolve.raw_label_on_miss" {
                config.resolve.raw_label_on_miss = parse_bool(value).ok_or_else(|| ClassifyError::ConfigParse {
                    line: line_no,
                    message: format!("expected true or false for {}, got '{}'", key, value),
                })?;
                continue;
            }

            let parts: Vec<&str> = key.split('.').collect();
            if parts.len() != 3 || !matches!(parts[2], "label" | "color") {
                log::warn!("Ignoring unrecognized config key '{}' on line {}", key, line_no);
                continue;
            }

            let dimension: Dimension = parts[0].parse().map_err(|e: ClassifyError| e.at_line(line_no))?;
            let code = normalize_code(parts[1]);
            let builtin = build_table(dimension);
            if builtin.get(&code).is_none() {
                let known: Vec<&str> = builtin.entries().iter().map(|e| e.code.as_str()).collect();
                let err = ClassifyError::UnknownCode {
                    dimension: dimension.as_str().to_string(),
                    code: code.clone(),
                };
                return Err(ClassifyError::ConfigParse {
                    line: line_no,
                    message: format!("{}{}", err, did_you_mean(&code, &known)),
                });
            }

            let field = if parts[2] == "label" { "label" } else { "color" };
            set_on.insert((dimension, code.clone(), field), line_no);
            let entry = config.overrides.entry(dimension).or_default().entry(code).or_default();
            if field == "label" {
                if value.is_empty() {
                    return Err(ClassifyError::ConfigParse {
                        line: line_no,
                        message: format!("{} cannot be empty", key),
                    });
                }
                entry.label = Some(value.to_string());
            } else {
                let color: ColorToken = value.parse().map_err(|e: ClassifyError| e.at_line(line_no))?;
                entry.color = Some(color);
            }
            last_line.insert(dimension, line_no);
        }

        // Overridden tables must still satisfy every table invariant
        for (dimension, line_no) in last_line {
            if let Err(e) = config.table(dimension) {
                let line = offending_line(&e, dimension, &set_on).unwrap_or(line_no);
                return Err(e.at_line(line));
            }
        }

        Ok(config)
    }

    /// Table for a dimension with this config's overrides applied
    pub fn table(&self, dimension: Dimension) -> Result<Cow<'static, ClassificationTable>, ClassifyError> {
        let builtin = build_table(dimension);
        match self.overrides.get(&dimension) {
            Some(overrides) if !overrides.is_empty() => Ok(Cow::Owned(builtin.with_overrides(overrides)?)),
            _ => Ok(Cow::Borrowed(builtin)),
        }
    }
}

/// Later of the lines that set the clashing field on the entry and on the fallback
fn offending_line(
    err: &ClassifyError,
    dimension: Dimension,
    set_on: &BTreeMap<(Dimension, String, &'static str), usize>,
) -> Option<usize> {
    match err {
        ClassifyError::FallbackNotDistinct { field, code, .. } => {
            let line_of = |c: &str| set_on.get(&(dimension, c.to_string(), *field)).copied();
            line_of(code).max(line_of(FALLBACK_CODE))
        }
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

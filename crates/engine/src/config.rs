use serde::Deserialize;

use crate::error::EngineError;

// ---------------------------------------------------------------------------
// Tabulation
// ---------------------------------------------------------------------------

/// Field separator for tokenizing list text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    /// Sniff per input; tab wins when it splits the sample consistently.
    Auto,
    Tab,
    /// Runs of two or more spaces, the shape of column-aligned OCR output.
    MultiSpace,
}

impl Default for Separator {
    fn default() -> Self {
        Self::Auto
    }
}

impl Separator {
    /// Tokenize one trimmed line. `Auto` decides per line by the presence of
    /// a tab; resolve against the whole input first for consistent tables.
    pub fn split<'a>(self, line: &'a str) -> Vec<&'a str> {
        match self {
            Self::Tab => line.split('\t').map(str::trim).collect(),
            Self::MultiSpace => split_multi_space(line),
            Self::Auto => {
                if line.contains('\t') {
                    Self::Tab.split(line)
                } else {
                    Self::MultiSpace.split(line)
                }
            }
        }
    }
}

/// Split on runs of two or more spaces. Single spaces stay inside a field,
/// so "HEA 200" survives as one cell.
fn split_multi_space(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b' ' {
            let run_start = i;
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            if i - run_start >= 2 {
                fields.push(line[start..run_start].trim());
                start = i;
            }
        } else {
            i += 1;
        }
    }
    fields.push(line[start..].trim());
    fields
}

/// Policy for lines that tokenize into at least two fields but fewer than
/// the header count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortRowPolicy {
    /// Keep the line, padding the missing cells with empty strings.
    Pad,
    /// Drop the line and count it in `Table::skipped`.
    Skip,
}

impl Default for ShortRowPolicy {
    fn default() -> Self {
        Self::Pad
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TabulateConfig {
    #[serde(default)]
    pub separator: Separator,
    #[serde(default)]
    pub short_rows: ShortRowPolicy,
    /// How many leading lines are examined for the header line.
    #[serde(default = "default_header_scan_lines")]
    pub header_scan_lines: usize,
}

fn default_header_scan_lines() -> usize {
    20
}

impl Default for TabulateConfig {
    fn default() -> Self {
        Self {
            separator: Separator::default(),
            short_rows: ShortRowPolicy::default(),
            header_scan_lines: default_header_scan_lines(),
        }
    }
}

impl TabulateConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| EngineError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.header_scan_lines == 0 {
            return Err(EngineError::ConfigValidation(
                "header_scan_lines must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Job config (config-driven runs)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub list: ListSource,
    pub model: ModelSource,
    #[serde(default)]
    pub roles: RoleOverrides,
}

/// The raw list text to tabulate.
#[derive(Debug, Deserialize)]
pub struct ListSource {
    pub file: String,
    #[serde(default)]
    pub tabulate: TabulateConfig,
}

/// The entity inventory discovered from the model.
#[derive(Debug, Deserialize)]
pub struct ModelSource {
    pub file: String,
    #[serde(default)]
    pub columns: EntityColumns,
}

/// Header-name mapping for entity CSV files.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityColumns {
    #[serde(default = "default_container_column")]
    pub container: String,
    #[serde(default = "default_member_column")]
    pub member: String,
    #[serde(default = "default_mark_column")]
    pub mark: String,
}

fn default_container_column() -> String {
    "model".into()
}

fn default_member_column() -> String {
    "object".into()
}

fn default_mark_column() -> String {
    "mark".into()
}

impl Default for EntityColumns {
    fn default() -> Self {
        Self {
            container: default_container_column(),
            member: default_member_column(),
            mark: default_mark_column(),
        }
    }
}

/// Manual role assignments overriding the header guess.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleOverrides {
    #[serde(default)]
    pub mark: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

impl JobConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| EngineError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.name.trim().is_empty() {
            return Err(EngineError::ConfigValidation("name must not be empty".into()));
        }
        if self.list.file.trim().is_empty() {
            return Err(EngineError::ConfigValidation("list.file must not be empty".into()));
        }
        if self.model.file.trim().is_empty() {
            return Err(EngineError::ConfigValidation("model.file must not be empty".into()));
        }
        self.list.tabulate.validate()
    }
}

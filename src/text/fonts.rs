use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{ScorchError, ScorchResult};

/// Named, ordered lists of font files.
///
/// Built once at start-up and passed to the renderer; a render picks a chain
/// by name (or the default chain) and uses the first font that loads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontChains {
    named: BTreeMap<String, Vec<PathBuf>>,
    default: Option<Vec<PathBuf>>,
}

/// Font file contents plus where they came from.
#[derive(Clone, Debug)]
pub struct LoadedFont {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl FontChains {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{ "name": ["path", ...], ... }`. Relative paths are joined onto `base_dir`.
    pub fn from_json_str(json: &str, base_dir: &Path) -> ScorchResult<Self> {
        let raw: BTreeMap<String, Vec<PathBuf>> = serde_json::from_str(json)
            .map_err(|e| ScorchError::validation(format!("invalid font chain table: {e}")))?;

        let mut out = Self::new();
        for (name, chain) in raw {
            let chain = chain
                .into_iter()
                .map(|p| if p.is_relative() { base_dir.join(p) } else { p })
                .collect();
            out.insert(name, chain)?;
        }
        Ok(out)
    }

    /// Load a JSON font chain table from disk.
    pub fn load(path: &Path) -> ScorchResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read font chain table '{}'", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_json_str(&json, base)
    }

    /// Split a `;`-separated list of font paths, skipping empty entries.
    pub fn parse_chain_list(list: &str) -> Vec<PathBuf> {
        list.split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, chain: Vec<PathBuf>) -> ScorchResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ScorchError::validation("font chain name must be non-empty"));
        }
        if chain.is_empty() {
            return Err(ScorchError::validation(format!(
                "font chain \"{name}\" lists no fonts"
            )));
        }
        self.named.insert(name, chain);
        Ok(())
    }

    pub fn with_default(mut self, chain: Vec<PathBuf>) -> Self {
        self.default = if chain.is_empty() { None } else { Some(chain) };
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }

    /// Chain for `name`, or the default chain when `name` is `None`.
    pub fn resolve(&self, name: Option<&str>) -> ScorchResult<&[PathBuf]> {
        match name {
            Some(name) => self.named.get(name).map(Vec::as_slice).ok_or_else(|| {
                ScorchError::validation(format!("unknown font chain \"{name}\""))
            }),
            None => self
                .default
                .as_deref()
                .ok_or_else(|| ScorchError::validation("no default font chain configured")),
        }
    }

    /// Read every readable font of a chain, in order.
    pub fn read_chain(chain: &[PathBuf]) -> ScorchResult<Vec<LoadedFont>> {
        let mut fonts = Vec::with_capacity(chain.len());
        for path in chain {
            match std::fs::read(path) {
                Ok(bytes) => fonts.push(LoadedFont {
                    path: path.clone(),
                    bytes,
                }),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font");
                }
            }
        }
        if fonts.is_empty() {
            return Err(ScorchError::font(format!(
                "none of the {} font(s) in the chain could be read",
                chain.len()
            )));
        }
        Ok(fonts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Run naming scheme.
//!
//! Folders are named `SIZE-<n>-O<opt>`; the sample files inside them are
//! named `SIZE-<n>-NTH-<tt>-O<opt>[-<variant>].csv` where `<tt>` is a
//! two-digit thread count and `00` marks the serial run. Both patterns are
//! anchored: near-miss names like `SIZE-abc-O1` or `SIZE-100` are rejected,
//! not prefix-matched.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use veloce_core::{Result, VeloceError};

static FOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SIZE-([0-9]+)-O([0-9]+)$").expect("folder regex"));

static FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^SIZE-([0-9]+)-NTH-([0-9]{2})-O([0-9])(?:-(\w+))?\.csv$").expect("file regex")
});

/// Whether a run is the serial baseline or a parallel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    /// The NTH-00 baseline run.
    Serial,
    /// Any nonzero thread count.
    Parallel,
}

impl Version {
    /// Table label for this version.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Serial => "Serial",
            Self::Parallel => "Parallel",
        }
    }
}

/// Parsed `SIZE-<n>-O<opt>` folder name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderName {
    /// Problem size.
    pub size: u64,
    /// Optimization token including the leading `O`, e.g. `O2`.
    pub opt: String,
}

impl FolderName {
    /// Parse a folder name, rejecting anything that does not match the
    /// anchored `SIZE-<digits>-O<digits>` pattern.
    ///
    /// # Errors
    /// [`VeloceError::BadName`] when the name does not conform.
    pub fn parse(name: &str) -> Result<Self> {
        let caps = FOLDER_RE.captures(name).ok_or_else(|| VeloceError::BadName {
            name: name.to_string(),
            kind: "folder",
        })?;
        let size = caps[1].parse().map_err(|_| VeloceError::BadName {
            name: name.to_string(),
            kind: "folder",
        })?;
        Ok(Self {
            size,
            opt: format!("O{}", &caps[2]),
        })
    }

    /// Whether a name conforms without constructing the parse.
    #[must_use]
    pub fn matches(name: &str) -> bool {
        FOLDER_RE.is_match(name)
    }

    /// Table artifact name for this folder: `psize-<size>-<opt>-table.csv`.
    #[must_use]
    pub fn table_filename(&self) -> String {
        format!("psize-{}-{}-table.csv", self.size, self.opt)
    }

    /// Plot artifact name for this folder: `speedup-<size>-<opt>.png`.
    #[must_use]
    pub fn plot_filename(&self) -> String {
        format!("speedup-{}-{}.png", self.size, self.opt)
    }
}

/// Parsed `SIZE-<n>-NTH-<tt>-O<opt>[-<variant>].csv` file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFile {
    /// Problem size.
    pub size: u64,
    /// Serial or parallel, from the two-digit thread token.
    pub version: Version,
    /// Effective thread count: 1 for the serial run, the parsed token
    /// otherwise.
    pub threads: u32,
    /// Optimization digit.
    pub opt: u8,
    /// Optional trailing variant token.
    pub variant: Option<String>,
}

impl RunFile {
    /// Parse a sample file name.
    ///
    /// The `00` thread token maps to [`Version::Serial`] with an effective
    /// thread count of 1; any other token is [`Version::Parallel`] with the
    /// token's integer value.
    ///
    /// # Errors
    /// [`VeloceError::BadName`] when the name does not conform.
    pub fn parse(name: &str) -> Result<Self> {
        let caps = FILE_RE.captures(name).ok_or_else(|| VeloceError::BadName {
            name: name.to_string(),
            kind: "run file",
        })?;
        let bad = || VeloceError::BadName {
            name: name.to_string(),
            kind: "run file",
        };
        let size = caps[1].parse().map_err(|_| bad())?;
        let token: u32 = caps[2].parse().map_err(|_| bad())?;
        let opt = caps[3].parse().map_err(|_| bad())?;
        let (version, threads) = if token == 0 {
            (Version::Serial, 1)
        } else {
            (Version::Parallel, token)
        };
        Ok(Self {
            size,
            version,
            threads,
            opt,
            variant: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }

    /// Whether a file name conforms.
    #[must_use]
    pub fn matches(name: &str) -> bool {
        FILE_RE.is_match(name)
    }
}

//! Where a command reads its relationship payload from

use std::io;
use std::path::{Path, PathBuf};

use crate::constants::input::STDIN_MARKER;
use crate::error::OrbitError;
use crate::payload::{RelationshipPayload, STDIN_SOURCE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    Stdin,
    File(PathBuf),
}

impl PayloadSource {
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == STDIN_MARKER {
            PayloadSource::Stdin
        } else {
            PayloadSource::File(arg.to_path_buf())
        }
    }

    /// Name used in diagnostics and status lines
    pub fn name(&self) -> String {
        match self {
            PayloadSource::Stdin => STDIN_SOURCE_NAME.to_string(),
            PayloadSource::File(path) => path.display().to_string(),
        }
    }

    pub fn load(&self) -> Result<RelationshipPayload, OrbitError> {
        match self {
            PayloadSource::Stdin => {
                RelationshipPayload::read_from(&mut io::stdin().lock(), STDIN_SOURCE_NAME)
            }
            PayloadSource::File(path) => RelationshipPayload::parse_file(path),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
use crate::domain::layer::LayerId;
use std::fmt;

/// Errors raised at the I/O boundaries (settings file, project file).
///
/// In-memory editing never fails; see [`crate::editor::Event::Ignored`].
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Encoding(String),
    Project(ProjectError),
}

/// Structural problems found in a saved project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    /// The file was written by a newer, unknown format version.
    UnsupportedVersion(u32),
    /// Two layers share an id.
    DuplicateId(LayerId),
    /// A layer's `group_id` names a layer that does not exist.
    MissingParent { layer: LayerId, parent: LayerId },
    /// A layer's `group_id` names a layer that is not a group.
    ParentNotGroup { layer: LayerId, parent: LayerId },
    /// A group lists a child id that does not exist.
    MissingChild { group: LayerId, child: LayerId },
    /// A group lists a child whose `group_id` points elsewhere, or a layer is
    /// missing from its parent's children list.
    ChildParentMismatch { group: LayerId, child: LayerId },
    /// A layer is its own ancestor.
    Cycle(LayerId),
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectError::UnsupportedVersion(version) => {
                write!(f, "Unsupported project version: {}", version)
            }
            ProjectError::DuplicateId(id) => write!(f, "Duplicate layer id: {}", id),
            ProjectError::MissingParent { layer, parent } => {
                write!(f, "Layer {} references missing group {}", layer, parent)
            }
            ProjectError::ParentNotGroup { layer, parent } => {
                write!(f, "Layer {} references non-group layer {}", layer, parent)
            }
            ProjectError::MissingChild { group, child } => {
                write!(f, "Group {} lists missing child {}", group, child)
            }
            ProjectError::ChildParentMismatch { group, child } => {
                write!(f, "Group {} and layer {} disagree on parentage", group, child)
            }
            ProjectError::Cycle(id) => write!(f, "Layer {} is its own ancestor", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Encoding(e) => write!(f, "Encoding Error: {}", e),
            Error::Project(e) => write!(f, "Project Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ProjectError> for Error {
    fn from(err: ProjectError) -> Self {
        Error::Project(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Encoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

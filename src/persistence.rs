// SPDX-License-Identifier: MPL-2.0
//! Saved projects.
//!
//! A [`Project`] is the hand-off shape between an editing session and the
//! outside world: the layer collection plus the viewport. It is encoded as
//! CBOR. Loading validates every grouping invariant so a session never
//! starts from a broken hierarchy.
//!
//! # Example
//!
//! ```
//! use productify_canvas::persistence::Project;
//!
//! let project = Project::default();
//! let mut bytes = Vec::new();
//! project.write_to(&mut bytes).unwrap();
//! let loaded = Project::read_from(bytes.as_slice()).unwrap();
//! assert_eq!(loaded, project);
//! ```

use crate::config::defaults;
use crate::domain::layer::{Layer, LayerId};
use crate::error::{ProjectError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Current project format version.
pub const PROJECT_VERSION: u32 = 1;

/// Viewport stored with a project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedViewport {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for SavedViewport {
    fn default() -> Self {
        Self {
            zoom: defaults::DEFAULT_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

/// A saved canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub version: u32,
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub viewport: SavedViewport,
}

impl Default for Project {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Project {
    #[must_use]
    pub fn new(layers: Vec<Layer>) -> Self {
        Self {
            version: PROJECT_VERSION,
            layers,
            viewport: SavedViewport::default(),
        }
    }

    /// Checks the format version and the layer hierarchy.
    pub fn validate(&self) -> std::result::Result<(), ProjectError> {
        if self.version > PROJECT_VERSION {
            return Err(ProjectError::UnsupportedVersion(self.version));
        }

        let mut by_id: HashMap<LayerId, &Layer> = HashMap::with_capacity(self.layers.len());
        for layer in &self.layers {
            if by_id.insert(layer.id, layer).is_some() {
                return Err(ProjectError::DuplicateId(layer.id));
            }
        }

        for layer in &self.layers {
            if let Some(parent_id) = layer.group_id {
                let Some(parent) = by_id.get(&parent_id) else {
                    return Err(ProjectError::MissingParent {
                        layer: layer.id,
                        parent: parent_id,
                    });
                };
                if !parent.is_group() {
                    return Err(ProjectError::ParentNotGroup {
                        layer: layer.id,
                        parent: parent_id,
                    });
                }
                if !parent.children().contains(&layer.id) {
                    return Err(ProjectError::ChildParentMismatch {
                        group: parent_id,
                        child: layer.id,
                    });
                }
            }

            let mut listed = HashSet::new();
            for child_id in layer.children() {
                let Some(child) = by_id.get(child_id) else {
                    return Err(ProjectError::MissingChild {
                        group: layer.id,
                        child: *child_id,
                    });
                };
                if child.group_id != Some(layer.id) || !listed.insert(*child_id) {
                    return Err(ProjectError::ChildParentMismatch {
                        group: layer.id,
                        child: *child_id,
                    });
                }
            }
        }

        for layer in &self.layers {
            let mut current = layer.group_id;
            let mut steps = 0;
            while let Some(parent_id) = current {
                if parent_id == layer.id || steps > self.layers.len() {
                    return Err(ProjectError::Cycle(layer.id));
                }
                steps += 1;
                current = by_id.get(&parent_id).and_then(|parent| parent.group_id);
            }
        }

        Ok(())
    }

    /// Encodes the project as CBOR.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        ciborium::into_writer(self, writer)?;
        Ok(())
    }

    /// Decodes and validates a CBOR project.
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let project: Project = ciborium::from_reader(reader)?;
        project.validate()?;
        Ok(project)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::read_from(BufReader::new(file))
    }
}

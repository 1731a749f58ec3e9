// SPDX-License-Identifier: MPL-2.0
//! Hand-off between an editing session and a saved project.

use crate::config::EditorSettings;
use crate::editor::State;
use crate::error::Result;
use crate::persistence::{Project, SavedViewport, PROJECT_VERSION};
use kurbo::Vec2;

impl State {
    /// Starts a session from a saved project. The history begins with a
    /// single snapshot of the loaded layers.
    pub fn from_project(project: Project, settings: EditorSettings) -> Result<Self> {
        project.validate()?;
        let Project {
            layers, viewport, ..
        } = project;

        let mut state = Self::with_layers(layers, settings);
        state.viewport.set_zoom(viewport.zoom);
        state.viewport.set_pan(Vec2::new(viewport.pan_x, viewport.pan_y));
        tracing::debug!(layers = state.layers.len(), "loaded project");
        Ok(state)
    }

    /// Current layers and viewport as a project.
    #[must_use]
    pub fn to_project(&self) -> Project {
        let pan = self.viewport.pan();
        Project {
            version: PROJECT_VERSION,
            layers: self.layers.clone(),
            viewport: SavedViewport {
                zoom: self.viewport.zoom(),
                pan_x: pan.x,
                pan_y: pan.y,
            },
        }
    }
}

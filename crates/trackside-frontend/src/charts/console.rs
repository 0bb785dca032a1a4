//! Headless rendering collaborator that draws chart summaries into the log.
//!
//! This backend stands in for a real canvas toolkit: surfaces are registered
//! by id at startup, instances are summaries of what would be drawn, and
//! visibility toggles are logged. It keeps the whole refresh/render pipeline
//! runnable (and inspectable) without a GUI attached.

use std::collections::HashSet;

use crate::charts::registry::{ChartBackend, ChartInstance};
use crate::charts::spec::ChartSpec;

pub struct ConsoleBackend {
    surfaces: HashSet<String>,
}

impl ConsoleBackend {
    /// A backend with the given drawable surface ids.
    pub fn with_surfaces<I, S>(surfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            surfaces: surfaces.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct ConsoleChart {
    surface_id: String,
}

impl ChartInstance for ConsoleChart {
    fn destroy(self) {
        log::debug!("[{}] chart destroyed", self.surface_id);
    }

    fn snapshot_png(&self) -> Option<Vec<u8>> {
        // a log line is not rasterizable; PDF export embeds nothing here
        None
    }
}

impl ChartBackend for ConsoleBackend {
    type Instance = ConsoleChart;

    fn surface_exists(&self, surface_id: &str) -> bool {
        self.surfaces.contains(surface_id)
    }

    fn create(&mut self, surface_id: &str, spec: &ChartSpec) -> ConsoleChart {
        log::info!(
            "[{surface_id}] {:?} chart {:?}: {} dataset(s) over {} label(s)",
            spec.kind,
            spec.title.as_deref().unwrap_or("untitled"),
            spec.datasets.len(),
            spec.labels.len(),
        );
        ConsoleChart {
            surface_id: surface_id.to_string(),
        }
    }

    fn set_surface_visible(&mut self, surface_id: &str, visible: bool) {
        log::debug!("[{surface_id}] visible = {visible}");
    }
}

use std::collections::HashMap;

use crate::charts::spec::ChartSpec;

/// Failure modes of a render call.
///
/// A missing surface is expected on pages that simply do not include that
/// widget, so call sites treat it as a silent no-op rather than an error
/// worth surfacing.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no rendering surface with id {0:?}")]
    SurfaceNotFound(String),
}

/// The opaque rendering collaborator.
///
/// The registry never looks inside a chart instance; it only creates,
/// destroys, and toggles surface visibility through this trait. Chart-library
/// internals stay on the other side of it.
pub trait ChartBackend {
    type Instance: ChartInstance;

    /// Whether a drawable surface with this id exists at all.
    fn surface_exists(&self, surface_id: &str) -> bool;

    /// Constructs a chart bound to the surface. Only called after any prior
    /// instance on the same surface has been destroyed.
    fn create(&mut self, surface_id: &str, spec: &ChartSpec) -> Self::Instance;

    /// Shows or hides the backing surface element.
    fn set_surface_visible(&mut self, surface_id: &str, visible: bool);
}

/// One live chart owned by the registry.
pub trait ChartInstance {
    /// Tears the instance down, releasing collaborator-internal state.
    fn destroy(self);

    /// Raster snapshot of the rendered chart for report embedding, when the
    /// collaborator can produce one.
    fn snapshot_png(&self) -> Option<Vec<u8>>;
}

/// Registry enforcing at most one live chart instance per surface id.
///
/// `render` always destroys the prior instance on a surface before
/// constructing the new one, synchronously; skipping that step leaks
/// collaborator state and stacks duplicate visuals on the surface.
pub struct ChartRenderer<B: ChartBackend> {
    backend: B,
    live: HashMap<String, B::Instance>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: HashMap::new(),
        }
    }

    /// Renders `spec` onto the surface, replacing whatever was there.
    ///
    /// An empty spec hides the surface instead of drawing; a non-empty one
    /// shows it. Both paths destroy the previous instance first.
    pub fn render(&mut self, surface_id: &str, spec: &ChartSpec) -> Result<(), RenderError> {
        if !self.backend.surface_exists(surface_id) {
            return Err(RenderError::SurfaceNotFound(surface_id.to_string()));
        }

        if let Some(previous) = self.live.remove(surface_id) {
            previous.destroy();
        }

        if spec.is_empty() {
            self.backend.set_surface_visible(surface_id, false);
            return Ok(());
        }

        self.backend.set_surface_visible(surface_id, true);
        let instance = self.backend.create(surface_id, spec);
        self.live.insert(surface_id.to_string(), instance);
        Ok(())
    }

    /// Destroys the chart on the surface, if any. Returns whether one lived
    /// there.
    pub fn destroy(&mut self, surface_id: &str) -> bool {
        match self.live.remove(surface_id) {
            Some(instance) => {
                instance.destroy();
                true
            }
            None => false,
        }
    }

    pub fn has_chart(&self, surface_id: &str) -> bool {
        self.live.contains_key(surface_id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Raster snapshot of the chart on the surface, for report embedding.
    pub fn snapshot_png(&self, surface_id: &str) -> Option<Vec<u8>> {
        self.live.get(surface_id).and_then(|i| i.snapshot_png())
    }
}

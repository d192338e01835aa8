use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

/// Addressable region a chart is drawn into.
///
/// Surfaces are created, styled, and destroyed by the embedding document
/// layer. Renderers only read the background style and draw through the
/// backend; they never own a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSurface {
    id: String,
    background_color: String,
}

impl TargetSurface {
    #[must_use]
    pub fn new(id: impl Into<String>, background_color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            background_color: background_color.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current background-color style of the surface.
    ///
    /// Pie charts read this at render time, so restyling the surface changes
    /// the background of the next draw.
    #[must_use]
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn set_background_color(&mut self, background_color: impl Into<String>) {
        self.background_color = background_color.into();
    }
}

/// Document-side capability that resolves surface ids.
pub trait SurfaceRegistry {
    /// Resolves `id`, failing with [`ChartError::SurfaceNotFound`] when the
    /// document has no such surface. Renderers never pre-validate ids; they
    /// propagate this error unchanged.
    fn lookup(&self, id: &str) -> ChartResult<&TargetSurface>;
}

/// Insertion-ordered surface registry for hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurfaceRegistry {
    surfaces: IndexMap<String, TargetSurface>,
}

impl InMemorySurfaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `surface`, replacing any surface already under its id.
    pub fn insert(&mut self, surface: TargetSurface) {
        self.surfaces.insert(surface.id().to_owned(), surface);
    }

    #[must_use]
    pub fn with_surface(mut self, surface: TargetSurface) -> Self {
        self.insert(surface);
        self
    }

    pub fn remove(&mut self, id: &str) -> Option<TargetSurface> {
        self.surfaces.shift_remove(id)
    }

    #[must_use]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut TargetSurface> {
        self.surfaces.get_mut(id)
    }

    /// Registered surface ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl SurfaceRegistry for InMemorySurfaceRegistry {
    fn lookup(&self, id: &str) -> ChartResult<&TargetSurface> {
        self.surfaces
            .get(id)
            .ok_or_else(|| ChartError::SurfaceNotFound { id: id.to_owned() })
    }
}

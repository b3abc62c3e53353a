use crate::LayoutError;
use crate::frame::{Frame, PageGeometry};
use astroplan_render_core::Canvas;

/// Drawing invoked once at the start of every page that uses a template,
/// before any story content is placed.
pub trait PageDecoration {
    fn decorate(
        &self,
        canvas: &mut dyn Canvas,
        geometry: &PageGeometry,
        page_number: usize,
    ) -> Result<(), LayoutError>;
}

impl<F> PageDecoration for F
where
    F: Fn(&mut dyn Canvas, &PageGeometry, usize) -> Result<(), LayoutError>,
{
    fn decorate(
        &self,
        canvas: &mut dyn Canvas,
        geometry: &PageGeometry,
        page_number: usize,
    ) -> Result<(), LayoutError> {
        self(canvas, geometry, page_number)
    }
}

/// A named arrangement of frames plus the decoration drawn on each page using it.
pub struct PageTemplate<'a> {
    pub id: String,
    pub frames: Vec<Frame>,
    decoration: Option<Box<dyn PageDecoration + 'a>>,
}

impl<'a> PageTemplate<'a> {
    pub fn new(id: impl Into<String>, frames: Vec<Frame>) -> Self {
        Self {
            id: id.into(),
            frames,
            decoration: None,
        }
    }

    pub fn with_decoration(mut self, decoration: impl PageDecoration + 'a) -> Self {
        self.decoration = Some(Box::new(decoration));
        self
    }

    /// Closure form of `with_decoration`.
    pub fn on_page<F>(self, f: F) -> Self
    where
        F: Fn(&mut dyn Canvas, &PageGeometry, usize) -> Result<(), LayoutError> + 'a,
    {
        self.with_decoration(f)
    }

    pub(crate) fn decorate(
        &self,
        canvas: &mut dyn Canvas,
        geometry: &PageGeometry,
        page_number: usize,
    ) -> Result<(), LayoutError> {
        match &self.decoration {
            Some(decoration) => decoration.decorate(canvas, geometry, page_number),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for PageTemplate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageTemplate")
            .field("id", &self.id)
            .field("frames", &self.frames)
            .field("decorated", &self.decoration.is_some())
            .finish()
    }
}

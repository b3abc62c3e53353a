use crate::LayoutError;
use crate::algorithms::pagination::{at_frame_top, check_child_fit};
use crate::flowable::Flowable;
use crate::frame::PageGeometry;
use crate::template::PageTemplate;
use astroplan_render_core::DocumentRenderer;
use astroplan_types::BoxConstraints;
use std::collections::VecDeque;

/// One element of the story consumed by `DocTemplate::render`.
#[derive(Debug)]
pub enum StoryItem {
    Flow(Box<dyn Flowable>),
    /// Continue in the next frame of the current page (or a new page after the last frame).
    FrameBreak,
    /// Close the page and switch to the next page template.
    PageBreak,
}

impl StoryItem {
    pub fn flow(flowable: impl Flowable + 'static) -> Self {
        StoryItem::Flow(Box::new(flowable))
    }
}

/// Cursor state for the page currently being filled.
struct PageCursor {
    template_index: usize,
    frame_index: usize,
    consumed: f32,
}

/// Paginates a story into the frames of an ordered list of page templates.
///
/// Page breaks advance to the next template; the last template repeats.
/// Content overflowing the last frame of a page continues on a new page
/// that reuses the same template.
#[derive(Debug)]
pub struct DocTemplate<'a> {
    geometry: PageGeometry,
    templates: Vec<PageTemplate<'a>>,
}

impl<'a> DocTemplate<'a> {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            templates: Vec::new(),
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn add_template(&mut self, template: PageTemplate<'a>) -> &mut Self {
        self.templates.push(template);
        self
    }

    pub fn templates(&self) -> &[PageTemplate<'a>] {
        &self.templates
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.templates.is_empty() {
            return Err(LayoutError::NoTemplates);
        }
        if let Some(t) = self.templates.iter().find(|t| t.frames.is_empty()) {
            return Err(LayoutError::EmptyTemplate(t.id.clone()));
        }
        Ok(())
    }

    fn open_page<R: DocumentRenderer>(
        &self,
        renderer: &mut R,
        template_index: usize,
    ) -> Result<PageCursor, LayoutError> {
        let size = self.geometry.page_size;
        renderer.begin_page(size.width, size.height)?;
        let page_number = renderer.page_count() + 1;
        let template = &self.templates[template_index];
        log::debug!("Starting page {} with template '{}'", page_number, template.id);
        template.decorate(renderer, &self.geometry, page_number)?;
        Ok(PageCursor {
            template_index,
            frame_index: 0,
            consumed: 0.0,
        })
    }

    /// Moves to the next frame, closing the page when its frames are exhausted.
    /// A closed page hands its template on to the page that follows it.
    fn advance_frame<R: DocumentRenderer>(
        &self,
        renderer: &mut R,
        mut cursor: PageCursor,
        next_template: &mut usize,
    ) -> Result<Option<PageCursor>, LayoutError> {
        if cursor.frame_index + 1 < self.templates[cursor.template_index].frames.len() {
            cursor.frame_index += 1;
            cursor.consumed = 0.0;
            return Ok(Some(cursor));
        }
        renderer.end_page()?;
        *next_template = cursor.template_index;
        Ok(None)
    }

    /// Lays out `story` and draws it through `renderer`. Returns the number of pages produced.
    ///
    /// An empty story still produces one decorated page.
    pub fn render<R: DocumentRenderer>(
        &self,
        story: Vec<StoryItem>,
        renderer: &mut R,
    ) -> Result<usize, LayoutError> {
        self.validate()?;
        let last_template = self.templates.len() - 1;
        let start_pages = renderer.page_count();

        let mut queue: VecDeque<StoryItem> = story.into();
        let mut cursor: Option<PageCursor> = None;
        let mut next_template = 0;

        while let Some(item) = queue.pop_front() {
            let mut c = match cursor.take() {
                Some(c) => c,
                None => self.open_page(renderer, next_template)?,
            };

            match item {
                StoryItem::PageBreak => {
                    next_template = (c.template_index + 1).min(last_template);
                    renderer.end_page()?;
                }
                StoryItem::FrameBreak => {
                    cursor = self.advance_frame(renderer, c, &mut next_template)?;
                }
                StoryItem::Flow(flowable) => {
                    let frame = &self.templates[c.template_index].frames[c.frame_index];
                    let bounds = frame.content_rect();
                    let size = flowable.measure(BoxConstraints::tight_width(bounds.width));
                    let fit = check_child_fit(c.consumed, size.height, bounds);
                    let top = bounds.top() - c.consumed;

                    if !fit.should_break {
                        flowable.draw(renderer, bounds.x, top, bounds.width)?;
                        c.consumed += size.height;
                        cursor = Some(c);
                        continue;
                    }

                    if flowable.collapses_at_frame_end() {
                        log::debug!("Dropping {:?} at the end of frame '{}'", flowable, frame.id);
                        c.consumed = bounds.height;
                        cursor = Some(c);
                        continue;
                    }

                    if let Some((head, tail)) = flowable.split(bounds.width, fit.remaining_height) {
                        head.draw(renderer, bounds.x, top, bounds.width)?;
                        queue.push_front(StoryItem::Flow(tail));
                    } else if at_frame_top(c.consumed) {
                        log::warn!(
                            "Content of height {:.2} exceeds frame '{}' ({:.2}); placing it anyway",
                            size.height,
                            frame.id,
                            bounds.height
                        );
                        flowable.draw(renderer, bounds.x, top, bounds.width)?;
                        c.consumed += size.height;
                        cursor = Some(c);
                        continue;
                    } else {
                        queue.push_front(StoryItem::Flow(flowable));
                    }

                    cursor = self.advance_frame(renderer, c, &mut next_template)?;
                }
            }
        }

        if cursor.is_some() {
            renderer.end_page()?;
        } else if renderer.page_count() == start_pages {
            self.open_page(renderer, 0)?;
            renderer.end_page()?;
        }

        let pages = renderer.page_count() - start_pages;
        log::debug!("Story laid out on {} page(s)", pages);
        Ok(pages)
    }
}

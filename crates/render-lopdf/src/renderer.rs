use crate::helpers::{color_operands, path_operations, standard_font_dictionary, text_operations};
use astroplan_render_core::{
    Canvas, DocumentRenderer, PaintMode, PathSegment, RenderError, StandardFont,
};
use astroplan_types::{Color, Rect, ResourceKey, SharedData};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat, dictionary};
use std::collections::BTreeMap;

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph page by page and serializes it in `finish`.
pub struct LopdfRenderer {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    images: BTreeMap<ResourceKey, (ObjectId, String)>,
    page: Option<PageContext>,
    title: Option<String>,
}

struct PageContext {
    width: f32,
    height: f32,
    content: Content,
    state: PageRenderState,
    saved: Vec<PageRenderState>,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

impl PageContext {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            saved: Vec::new(),
        }
    }

    fn push(&mut self, op: Operation) {
        self.content.operations.push(op);
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            images: BTreeMap::new(),
            page: None,
            title: None,
        }
    }

    /// Sets the `/Title` entry of the document information dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn page_mut(&mut self) -> Option<&mut PageContext> {
        if self.page.is_none() {
            log::warn!("Drawing call issued outside of a page; it will be dropped");
        }
        self.page.as_mut()
    }

    fn register_image(
        &mut self,
        key: &ResourceKey,
        data: &SharedData,
    ) -> Result<String, RenderError> {
        if let Some((_, name)) = self.images.get(key) {
            return Ok(name.clone());
        }
        let stream = lopdf::xobject::image_from(data.as_ref().clone())
            .map_err(|e| RenderError::Image(key.to_string(), e.to_string()))?;
        let id = self.document.add_object(stream);
        let name = format!("Im{}", self.images.len() + 1);
        log::debug!("Embedded image '{}' as /{}", key, name);
        self.images.insert(key.clone(), (id, name.clone()));
        Ok(name)
    }

    fn resources_dictionary(&self) -> Dictionary {
        let mut resources = dictionary! {
            "Font" => standard_font_dictionary(),
        };
        if !self.images.is_empty() {
            let mut xobjects = Dictionary::new();
            for (id, name) in self.images.values() {
                xobjects.set(name.as_str(), Object::Reference(*id));
            }
            resources.set("XObject", xobjects);
        }
        resources
    }
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for LopdfRenderer {
    fn save_state(&mut self) {
        if let Some(page) = self.page_mut() {
            page.saved.push(page.state.clone());
            page.push(Operation::new("q", vec![]));
        }
    }

    fn restore_state(&mut self) {
        if let Some(page) = self.page_mut() {
            page.state = page.saved.pop().unwrap_or_default();
            page.push(Operation::new("Q", vec![]));
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        if let Some(page) = self.page_mut() {
            if page.state.fill_color.as_ref() != Some(color) {
                page.push(Operation::new("rg", color_operands(color)));
                page.state.fill_color = Some(color.clone());
            }
        }
    }

    fn set_stroke_color(&mut self, color: &Color) {
        if let Some(page) = self.page_mut() {
            if page.state.stroke_color.as_ref() != Some(color) {
                page.push(Operation::new("RG", color_operands(color)));
                page.state.stroke_color = Some(color.clone());
            }
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if let Some(page) = self.page_mut() {
            if page.state.line_width != Some(width) {
                page.push(Operation::new("w", vec![width.into()]));
                page.state.line_width = Some(width);
            }
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        if let Some(page) = self.page_mut() {
            page.push(Operation::new("m", vec![x1.into(), y1.into()]));
            page.push(Operation::new("l", vec![x2.into(), y2.into()]));
            page.push(Operation::new("S", vec![]));
        }
    }

    fn draw_path(&mut self, segments: &[PathSegment], mode: PaintMode) {
        if segments.is_empty() {
            return;
        }
        if let Some(page) = self.page_mut() {
            page.content
                .operations
                .extend(path_operations(segments, mode));
        }
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str, font: StandardFont, size: f32) {
        if text.is_empty() {
            return;
        }
        if let Some(page) = self.page_mut() {
            page.content
                .operations
                .extend(text_operations(x, y, text, font, size));
        }
    }

    fn draw_image(
        &mut self,
        key: &ResourceKey,
        data: &SharedData,
        rect: Rect,
    ) -> Result<(), RenderError> {
        if self.page.is_none() {
            return Err(RenderError::NoOpenPage);
        }
        let name = self.register_image(key, data)?;
        let page = self.page.as_mut().ok_or(RenderError::NoOpenPage)?;
        page.push(Operation::new("q", vec![]));
        page.push(Operation::new(
            "cm",
            vec![
                rect.width.into(),
                0.0.into(),
                0.0.into(),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        ));
        page.push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
        page.push(Operation::new("Q", vec![]));
        Ok(())
    }
}

impl DocumentRenderer for LopdfRenderer {
    type Output = Vec<u8>;

    fn begin_page(&mut self, width: f32, height: f32) -> Result<(), RenderError> {
        if self.page.is_some() {
            return Err(RenderError::Other("Previous page was never ended".into()));
        }
        self.page = Some(PageContext::new(width, height));
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self.page.take().ok_or(RenderError::NoOpenPage)?;
        let content_id = self
            .document
            .add_object(lopdf::Stream::new(dictionary! {}, page.content.encode()?));

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page.width.into(), page.height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::debug!("Closed page {} ({} ops)", self.page_ids.len(), page.content.operations.len());
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        if self.page.is_some() {
            return Err(RenderError::Other("Document finished with an open page".into()));
        }

        let resources = self.resources_dictionary();
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::String(b"astroplan".to_vec(), StringFormat::Literal),
        };
        if let Some(title) = &self.title {
            info.set(
                "Title",
                Object::String(title.as_bytes().to_vec(), StringFormat::Literal),
            );
        }
        let info_id = self.document.add_object(info);
        self.document.trailer.set("Info", info_id);

        self.document.compress();
        let mut buffer = Vec::new();
        self.document.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

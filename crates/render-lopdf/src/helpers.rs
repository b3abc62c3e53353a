//! Small conversions from planner drawing primitives to lopdf content operations.

use astroplan_render_core::utils::to_win_ansi;
use astroplan_render_core::{PaintMode, PathSegment, StandardFont};
use astroplan_types::Color;
use lopdf::content::Operation;
use lopdf::{Dictionary, Object, StringFormat, dictionary};

pub(crate) fn color_operands(color: &Color) -> Vec<Object> {
    color.unit_rgb().into_iter().map(Object::from).collect()
}

pub(crate) fn path_operations(segments: &[PathSegment], mode: PaintMode) -> Vec<Operation> {
    let mut ops: Vec<Operation> = segments
        .iter()
        .map(|segment| match segment {
            PathSegment::MoveTo(p) => Operation::new("m", vec![p.x.into(), p.y.into()]),
            PathSegment::LineTo(p) => Operation::new("l", vec![p.x.into(), p.y.into()]),
            PathSegment::CurveTo { c1, c2, end } => Operation::new(
                "c",
                vec![
                    c1.x.into(),
                    c1.y.into(),
                    c2.x.into(),
                    c2.y.into(),
                    end.x.into(),
                    end.y.into(),
                ],
            ),
            PathSegment::Close => Operation::new("h", vec![]),
        })
        .collect();
    let paint = match mode {
        PaintMode::Fill => "f",
        PaintMode::Stroke => "S",
        PaintMode::FillStroke => "B",
    };
    ops.push(Operation::new(paint, vec![]));
    ops
}

pub(crate) fn text_operations(x: f32, y: f32, text: &str, font: StandardFont, size: f32) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(font.resource_name().as_bytes().to_vec()),
                size.into(),
            ],
        ),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

/// The shared `/Font` resource dictionary for the four Helvetica faces.
pub(crate) fn standard_font_dictionary() -> Dictionary {
    let mut fonts = Dictionary::new();
    for font in StandardFont::ALL {
        let font_dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        };
        fonts.set(font.resource_name(), Object::Dictionary(font_dict));
    }
    fonts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_path_ends_with_stroke_operator() {
        let ops = path_operations(
            &[
                PathSegment::MoveTo(Default::default()),
                PathSegment::Close,
            ],
            PaintMode::Stroke,
        );
        assert_eq!(ops.last().unwrap().operator, "S");
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn text_is_wrapped_in_a_text_object() {
        let ops = text_operations(10.0, 20.0, "Moon", StandardFont::HelveticaBold, 12.0);
        let names: Vec<_> = ops.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(names, ["BT", "Tf", "Td", "Tj", "ET"]);
    }

    #[test]
    fn font_dictionary_lists_all_faces() {
        let fonts = standard_font_dictionary();
        assert_eq!(fonts.len(), 4);
        assert!(fonts.has(b"F2"));
    }
}

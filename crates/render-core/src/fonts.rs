//! The standard 14 Helvetica family and its advance widths.
//!
//! The planner only uses the non-embedded Type1 Helvetica faces, so text can be
//! measured from the published AFM metrics without loading any font files.

use crate::utils::win_ansi_byte;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

// Advance widths (1/1000 em) for WinAnsi codes 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, //
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, //
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, //
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

impl StandardFont {
    pub const ALL: [StandardFont; 4] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
    ];

    /// Pick the face for a weight/slant combination.
    pub fn styled(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => StandardFont::Helvetica,
            (true, false) => StandardFont::HelveticaBold,
            (false, true) => StandardFont::HelveticaOblique,
            (true, true) => StandardFont::HelveticaBoldOblique,
        }
    }

    /// PostScript name written into the font dictionary's `BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Name of the font inside the shared page resources dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
            StandardFont::HelveticaOblique => "F3",
            StandardFont::HelveticaBoldOblique => "F4",
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(
            self,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique
        )
    }

    /// Advance width of a single character in 1/1000 em units.
    pub fn char_width(self, c: char) -> u16 {
        let bold = self.is_bold();
        let Some(byte) = win_ansi_byte(c) else {
            // Rendered as '?'.
            return if bold { 611 } else { 556 };
        };
        match byte {
            32..=126 => {
                let table = if bold {
                    &HELVETICA_BOLD_WIDTHS
                } else {
                    &HELVETICA_WIDTHS
                };
                table[(byte - 32) as usize]
            }
            0x95 => 350,
            0x96 => 556,
            0x85 | 0x97 => 1000,
            0x91 | 0x92 => {
                if bold {
                    278
                } else {
                    222
                }
            }
            0x93 | 0x94 => {
                if bold {
                    500
                } else {
                    333
                }
            }
            0xA0 => 278,
            _ => {
                if bold {
                    611
                } else {
                    556
                }
            }
        }
    }

    /// Width of `text` in points at `size`.
    pub fn string_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_278_units_in_every_face() {
        for font in StandardFont::ALL {
            assert_eq!(font.char_width(' '), 278);
        }
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let regular = StandardFont::Helvetica.string_width("Ritual Kit", 10.0);
        let bold = StandardFont::HelveticaBold.string_width("Ritual Kit", 10.0);
        assert!(bold > regular);
    }

    #[test]
    fn width_scales_with_size() {
        let w = StandardFont::Helvetica.string_width("M", 10.0);
        assert!((w - 8.33).abs() < 0.001);
    }

    #[test]
    fn styled_selects_expected_face() {
        assert_eq!(StandardFont::styled(true, false), StandardFont::HelveticaBold);
        assert_eq!(StandardFont::styled(false, true).base_font(), "Helvetica-Oblique");
    }
}

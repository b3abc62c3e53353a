//! Moon-phase indicator drawn next to the phase label in the header.

use astroplan_render_core::{Canvas, KAPPA, PaintMode, PathBuilder};
use astroplan_types::Color;

/// Disc radius relative to the indicator's nominal size.
const DISC_RATIO: f32 = 0.4;
/// Horizontal half-width of a curved terminator relative to the radius.
const TERMINATOR_RATIO: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Maps a phase name such as `"Waxing Crescent"` (any case, surrounding
    /// whitespace ignored) to its phase. Unknown names fall back to `Full`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "new moon" => MoonPhase::New,
            "waxing crescent" => MoonPhase::WaxingCrescent,
            "first quarter" => MoonPhase::FirstQuarter,
            "waxing gibbous" => MoonPhase::WaxingGibbous,
            "full moon" => MoonPhase::Full,
            "waning gibbous" => MoonPhase::WaningGibbous,
            "last quarter" => MoonPhase::LastQuarter,
            "waning crescent" => MoonPhase::WaningCrescent,
            _ => MoonPhase::Full,
        }
    }

    /// Phase of a `"<phase> in <sign>"` string; the whole string is the phase when there is no sign.
    pub fn from_phase_sign(phase_sign: &str) -> Self {
        let phase = phase_sign.split(" in ").next().unwrap_or(phase_sign);
        Self::from_label(phase)
    }

    /// Side of the disc that is dark (-1 left, +1 right) and the signed
    /// x-offset of the terminator, in radii. `None` for the full moon.
    fn shadow(self) -> Option<(f32, f32)> {
        match self {
            MoonPhase::Full => None,
            MoonPhase::New => Some((-1.0, 1.0)),
            MoonPhase::WaxingCrescent => Some((-1.0, TERMINATOR_RATIO)),
            MoonPhase::FirstQuarter => Some((-1.0, 0.0)),
            MoonPhase::WaxingGibbous => Some((-1.0, -TERMINATOR_RATIO)),
            MoonPhase::WaningGibbous => Some((1.0, TERMINATOR_RATIO)),
            MoonPhase::LastQuarter => Some((1.0, 0.0)),
            MoonPhase::WaningCrescent => Some((1.0, -TERMINATOR_RATIO)),
        }
    }

    /// Draws the indicator in a `size`-wide box whose left edge is `x`, vertically
    /// centred a little above `baseline` so it sits with adjacent text.
    pub fn draw(self, canvas: &mut dyn Canvas, x: f32, baseline: f32, size: f32, color: &Color) {
        let r = size * DISC_RATIO;
        let (cx, cy) = (x + size / 2.0, baseline + size * 0.35);

        canvas.save_state();
        canvas.set_line_width(0.8);
        canvas.set_stroke_color(color);
        canvas.set_fill_color(&Color::WHITE);
        let disc = PathBuilder::new().circle(cx, cy, r).build();
        canvas.draw_path(&disc, PaintMode::FillStroke);

        if let Some((side, terminator)) = self.shadow() {
            canvas.set_fill_color(color);
            let q = KAPPA * r;
            let e = terminator * r;
            let shadow = PathBuilder::new()
                .move_to(cx, cy + r)
                .curve_to((cx + side * q, cy + r), (cx + side * r, cy + q), (cx + side * r, cy))
                .curve_to((cx + side * r, cy - q), (cx + side * q, cy - r), (cx, cy - r))
                .curve_to((cx + e * KAPPA, cy - r), (cx + e, cy - q), (cx + e, cy))
                .curve_to((cx + e, cy + q), (cx + e * KAPPA, cy + r), (cx, cy + r))
                .close()
                .build();
            canvas.draw_path(&shadow, PaintMode::Fill);
        }
        canvas.restore_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astroplan_render_core::{DrawCommand, RecordingRenderer};

    #[test]
    fn labels_are_trimmed_and_case_insensitive() {
        assert_eq!(MoonPhase::from_label("  Full Moon  "), MoonPhase::from_label("full moon"));
        assert_eq!(MoonPhase::from_label("WAXING crescent"), MoonPhase::WaxingCrescent);
    }

    #[test]
    fn unknown_phase_defaults_to_full() {
        assert_eq!(MoonPhase::from_label("blue moon"), MoonPhase::Full);
        assert_eq!(MoonPhase::from_label(""), MoonPhase::Full);
    }

    #[test]
    fn sign_suffix_is_ignored() {
        assert_eq!(
            MoonPhase::from_phase_sign("Last Quarter in Capricorn"),
            MoonPhase::LastQuarter
        );
        assert_eq!(MoonPhase::from_phase_sign("New Moon"), MoonPhase::New);
    }

    fn path_count(phase: MoonPhase) -> usize {
        let mut canvas = RecordingRenderer::new();
        phase.draw(&mut canvas, 0.0, 0.0, 14.0, &Color::BLACK);
        canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Path { .. }))
            .count()
    }

    #[test]
    fn full_moon_is_an_open_disc_and_other_phases_add_a_shadow() {
        assert_eq!(path_count(MoonPhase::Full), 1);
        assert_eq!(path_count(MoonPhase::FirstQuarter), 2);
        assert_eq!(path_count(MoonPhase::WaningCrescent), 2);
    }
}

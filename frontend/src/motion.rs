//! Scroll and pointer driven motion values for the hero.

use crate::config;

/// Progress of a section scrolling out through the top of the viewport:
/// 0 when its top edge touches the viewport top, 1 once its bottom edge does.
pub fn scroll_progress(rect_top: f64, rect_height: f64) -> f64 {
    if rect_height <= 0.0 {
        return 0.0;
    }
    (-rect_top / rect_height).clamp(0.0, 1.0)
}

/// Map `value` linearly from `input` onto `output`, clamping outside the input range.
pub fn transform(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_start;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroMotion {
    pub network_scale: f64,
    pub network_y: f64,
    pub headline_scale: f64,
    pub headline_opacity: f64,
    pub indicator_opacity: f64,
}

impl HeroMotion {
    pub fn at(progress: f64) -> Self {
        Self {
            network_scale: transform(progress, (0.0, 1.0), (1.0, 0.7)),
            network_y: transform(progress, (0.0, 1.0), (0.0, -150.0)),
            headline_scale: transform(progress, (0.0, 1.0), (1.0, 0.85)),
            headline_opacity: transform(progress, (0.0, 1.0), (1.0, 0.3)),
            indicator_opacity: transform(progress, (0.0, 0.2), (1.0, 0.0)),
        }
    }

    pub fn headline_style(&self) -> String {
        format!(
            "transform: scale({}); opacity: {};",
            self.headline_scale, self.headline_opacity
        )
    }

    pub fn network_style(&self) -> String {
        format!(
            "transform: translateY({}px) scale({});",
            self.network_y, self.network_scale
        )
    }

    pub fn indicator_style(&self) -> String {
        format!("opacity: {};", self.indicator_opacity)
    }
}

impl Default for HeroMotion {
    fn default() -> Self {
        Self::at(0.0)
    }
}

/// Damped pointer-follow offset in pixels for a pointer at `(client_x, client_y)`.
pub fn parallax_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (client_x / width - 0.5) * config::PARALLAX_MAX_PX;
    let y = (client_y / height - 0.5) * config::PARALLAX_MAX_PX;
    (x * config::PARALLAX_DAMPING, y * config::PARALLAX_DAMPING)
}

pub fn parallax_style(offset: (f64, f64)) -> String {
    format!("transform: translate3d({}px, {}px, 0);", offset.0, offset.1)
}

/// Entrance delay in seconds for headline line `index`.
pub fn headline_delay(index: usize) -> f64 {
    index as f64 * config::HEADLINE_STAGGER_S
}

/// Entrance delay of an element revealed `extra` seconds after all `lines` headline lines.
pub fn after_headline_delay(lines: usize, extra: f64) -> f64 {
    lines as f64 * config::HEADLINE_STAGGER_S + extra
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn progress_clamps_to_unit_range() {
        assert_eq!(scroll_progress(100.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 800.0), 0.0);
        assert!(close(scroll_progress(-400.0, 800.0), 0.5));
        assert_eq!(scroll_progress(-1600.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-10.0, 0.0), 0.0);
    }

    #[test]
    fn transform_interpolates_and_clamps() {
        assert!(close(transform(0.5, (0.0, 1.0), (1.0, 0.7)), 0.85));
        assert_eq!(transform(-1.0, (0.0, 1.0), (1.0, 0.7)), 1.0);
        assert!(close(transform(2.0, (0.0, 1.0), (1.0, 0.7)), 0.7));
        assert_eq!(transform(0.3, (0.0, 0.0), (4.0, 9.0)), 4.0);
    }

    #[test]
    fn hero_motion_endpoints() {
        let top = HeroMotion::at(0.0);
        assert_eq!(top.network_scale, 1.0);
        assert_eq!(top.network_y, 0.0);
        assert_eq!(top.headline_opacity, 1.0);
        assert_eq!(top.indicator_opacity, 1.0);

        let out = HeroMotion::at(1.0);
        assert!(close(out.network_scale, 0.7));
        assert!(close(out.network_y, -150.0));
        assert!(close(out.headline_scale, 0.85));
        assert!(close(out.headline_opacity, 0.3));
        assert_eq!(out.indicator_opacity, 0.0);
    }

    #[test]
    fn scroll_hint_fades_within_first_fifth() {
        assert!(close(HeroMotion::at(0.1).indicator_opacity, 0.5));
        assert_eq!(HeroMotion::at(0.25).indicator_opacity, 0.0);
    }

    #[test]
    fn parallax_is_centred_and_damped() {
        assert_eq!(parallax_offset(960.0, 540.0, 1920.0, 1080.0), (0.0, 0.0));
        let (x, y) = parallax_offset(0.0, 1080.0, 1920.0, 1080.0);
        assert!(close(x, -1.5));
        assert!(close(y, 1.5));
        assert_eq!(parallax_offset(5.0, 5.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn entrance_delays_stagger_lines() {
        assert_eq!(headline_delay(0), 0.0);
        assert!(close(headline_delay(3), 2.4));
        assert!(close(after_headline_delay(4, 1.2), 4.4));
        assert!(close(after_headline_delay(4, 1.8), 5.0));
    }

    #[test]
    fn styles_render_css() {
        assert_eq!(parallax_style((1.5, -0.75)), "transform: translate3d(1.5px, -0.75px, 0);");
        assert_eq!(HeroMotion::at(0.0).indicator_style(), "opacity: 1;");
    }
}

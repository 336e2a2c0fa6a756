//! Continuous color scale for map points.
//!
//! Viridis, sampled from the matplotlib original at nine evenly spaced
//! stops and interpolated linearly in sRGB.

/// A continuous color ramp defined by evenly spaced sRGB control points.
pub struct ColorRamp {
    /// Name understood by the renderer for its own colorbar.
    pub name: &'static str,
    points: &'static [[u8; 3]],
}

impl ColorRamp {
    /// Sample the ramp at `t` (clamped to `[0, 1]`) as `#rrggbb`.
    pub fn sample_hex(&self, t: f64) -> String {
        let [r, g, b] = self.sample(t);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn sample(&self, t: f64) -> [u8; 3] {
        let n = self.points.len();
        match n {
            0 => return [0, 0, 0],
            1 => return self.points[0],
            _ => {}
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (n - 1) as f64;
        let lo = (scaled as usize).min(n - 2);
        let frac = scaled - lo as f64;
        let a = self.points[lo];
        let b = self.points[lo + 1];
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
        [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
    }

    /// Color for `value` on a `[min, max]` scale. A degenerate range maps
    /// everything to the middle of the ramp.
    pub fn color_for(&self, value: f64, min: f64, max: f64) -> String {
        let span = max - min;
        let t = if span > 0.0 { (value - min) / span } else { 0.5 };
        self.sample_hex(t)
    }
}

pub static VIRIDIS: ColorRamp = ColorRamp {
    name: "Viridis",
    points: &[
        [0x44, 0x01, 0x54], // 0 - dark purple
        [0x47, 0x2d, 0x7b],
        [0x3b, 0x52, 0x8b],
        [0x2c, 0x72, 0x8e],
        [0x21, 0x91, 0x8c], // 0.5 - teal
        [0x28, 0xae, 0x80],
        [0x5e, 0xc9, 0x62],
        [0xad, 0xdc, 0x30],
        [0xfd, 0xe7, 0x25], // 1 - yellow
    ],
};

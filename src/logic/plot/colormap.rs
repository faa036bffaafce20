//! Diverging red-yellow-green colormap (ColorBrewer RdYlGn, 11 classes).

use plotters::style::RGBColor;

/// Anchors from red (0.0) to green (1.0), evenly spaced
const RD_YL_GN: [(u8, u8, u8); 11] = [
    (0xa5, 0x00, 0x26),
    (0xd7, 0x30, 0x27),
    (0xf4, 0x6d, 0x43),
    (0xfd, 0xae, 0x61),
    (0xfe, 0xe0, 0x8b),
    (0xff, 0xff, 0xbf),
    (0xd9, 0xef, 0x8b),
    (0xa6, 0xd9, 0x6a),
    (0x66, 0xbd, 0x63),
    (0x1a, 0x98, 0x50),
    (0x00, 0x68, 0x37),
];

/// RdYlGn: low values red, high values green. Input clamped to [0, 1].
pub fn rd_yl_gn(value: f64) -> RGBColor {
    let t = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };

    let last = RD_YL_GN.len() - 1;
    let pos = t * last as f64;
    let lower = (pos.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let frac = pos - lower as f64;

    let (r0, g0, b0) = RD_YL_GN[lower];
    let (r1, g1, b1) = RD_YL_GN[upper];
    RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
}

/// Reversed RdYlGn: high importance red, low importance green
pub fn rd_yl_gn_r(value: f64) -> RGBColor {
    let t = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    rd_yl_gn(1.0 - t)
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(rd_yl_gn(0.0), RGBColor(0xa5, 0x00, 0x26));
        assert_eq!(rd_yl_gn(1.0), RGBColor(0x00, 0x68, 0x37));
        assert_eq!(rd_yl_gn(0.5), RGBColor(0xff, 0xff, 0xbf));
    }

    #[test]
    fn test_reversed_puts_red_at_high_values() {
        assert_eq!(rd_yl_gn_r(1.0), RGBColor(0xa5, 0x00, 0x26));
        assert_eq!(rd_yl_gn_r(0.0), RGBColor(0x00, 0x68, 0x37));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(rd_yl_gn_r(7.5), rd_yl_gn_r(1.0));
        assert_eq!(rd_yl_gn_r(-3.0), rd_yl_gn_r(0.0));
        assert_eq!(rd_yl_gn_r(f64::NAN), rd_yl_gn_r(0.0));
    }

    #[test]
    fn test_interpolates_between_anchors() {
        let mid = rd_yl_gn(0.05);
        assert_eq!(mid, RGBColor(0xbe, 0x18, 0x27));
    }
}

//! Coordinate units and the fixed slide canvas.
//!
//! Layout code works in inches on a fixed 16:9 canvas. Conversion to EMUs
//! (English Metric Units, the native OOXML unit) happens only at the
//! serializer boundary.
//! - 1 inch = 914,400 EMUs
//! - 1 point = 12,700 EMUs

/// EMUs per inch.
pub const EMUS_PER_INCH: i64 = 914_400;

/// EMUs per point (1/72 inch).
pub const EMUS_PER_POINT: i64 = 12_700;

/// Canvas width in inches (16:9 slide).
pub const CANVAS_WIDTH: f64 = 10.0;

/// Canvas height in inches (16:9 slide).
pub const CANVAS_HEIGHT: f64 = 5.625;

/// Convert inches to EMUs, rounding to the nearest unit.
#[inline]
pub fn emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Convert points to EMUs, rounding to the nearest unit.
#[inline]
pub fn emu_from_points(points: f64) -> i64 {
    (points * EMUS_PER_POINT as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_is_16_9() {
        assert_eq!(emu(CANVAS_WIDTH), 9_144_000);
        assert_eq!(emu(CANVAS_HEIGHT), 5_143_500);
    }

    #[test]
    fn test_point_conversion() {
        assert_eq!(emu_from_points(6.0), 76_200);
        assert_eq!(emu_from_points(2.0), 25_400);
    }
}

//! Unit conversion utilities.
//!
//! DrawingML measures shape geometry in English Metric Units (EMU) and
//! font sizes in hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const CENTIPOINTS_PER_PT: f64 = 100.0;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * CENTIPOINTS_PER_PT) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches_to_emu(1.0), 914_400);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
        // Fractional widths truncate toward zero
        assert_eq!(inches_to_emu(13.333), 12_191_695);
        assert_eq!(inches_to_emu(-2.0), -1_828_800);
    }

    #[test]
    fn test_pt_to_centipoints() {
        assert_eq!(pt_to_centipoints(60.0), 6000);
        assert_eq!(pt_to_centipoints(22.0), 2200);
        assert_eq!(pt_to_centipoints(10.5), 1050);
    }
}

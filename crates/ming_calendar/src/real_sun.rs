//! Equation-of-time correction for real-sun time.
//!
//! Local solar time (longitude * 240 seconds from UTC) is further shifted by
//! a per-day correction approximating the equation of time. The tables are
//! empirical, indexed by day of year starting at 1; index 0 is a placeholder.
//! They are preserved exactly as curated, including their irregular entries.

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Correction in seconds for a day of year (1-based). Out-of-range days
/// answer 0.
pub fn real_sun_fix(year: i32, day_of_year: u32) -> i32 {
    let table: &[i32] = if is_leap_year(year) {
        &REAL_SUN_FIX_LEAP
    } else {
        &REAL_SUN_FIX_NORMAL
    };
    *table.get(day_of_year as usize).unwrap_or(&0)
}

const REAL_SUN_FIX_LEAP: [i32; 367] = [
    0, -189, -218, -246, -273, -301, -327, -354, -380, -405,
    -430, -455, -479, -502, -525, -547, -568, -589, -609, -628,
    -647, -665, -682, -698, -714, -728, -742, -755, -779, -790,
    -799, -817, -824, -830, -836, -841, -845, -849, -851, -853,
    -854, -855, -854, -853, -851, -848, -845, -841, -836, -831,
    -824, -818, -810, -802, -793, -664, -774, -763, -752, -741,
    -728, -716, -703, -689, -675, -661, -647, -632, -616, -601,
    -585, -568, -552, -535, -518, -501, -484, -466, -449, -431,
    -413, -395, -377, -358, -340, -322, -304, -285, -267, -249,
    -231, -213, -196, -178, -161, -144, -127, -110, -93, -77,
    -61, 46, 30, 16, 1, 13, 27, 41, 54, 66,
    79, 91, 102, 113, 124, 134, 143, 153, 161, 169,
    177, 184, 70, 196, 201, 206, 210, 217, 216, 219,
    220, 222, 222, 222, 222, 221, 219, 217, 214, 211,
    207, 203, 198, 193, 187, 181, 174, 167, 159, 151,
    142, 133, 124, 114, 104, 94, 83, 72, 60, 48,
    36, 24, 12, 1, 14, 39, 52, -65, -78, -91,
    -105, -117, -130, -143, -156, -168, -181, -193, -205, -217,
    -229, -240, -251, -262, -273, -283, -293, -302, -311, -320,
    -328, -336, -343, -350, -356, -362, -368, -372, -376, -380,
    -383, -385, -387, -389, -389, -389, -389, -388, -386, -384,
    -381, -377, -373, -368, -363, -357, -351, -344, -336, -328,
    -319, -310, -300, -290, -279, -267, -255, -242, -229, -216,
    -201, -187, -171, -156, -140, -123, -107, -89, -72, 54,
    35, 17, 2, 21, 41, 60, 80, 100, 121, 141,
    162, 183, 183, 204, 225, 246, 267, 288, 310, 331,
    353, 374, 395, 417, 438, 459, 480, 501, 522, 542,
    562, 582, 602, 621, 640, 659, 678, 696, 696, 713,
    731, 748, 764, 780, 796, 796, 811, 825, 839, 853,
    866, 878, 890, 901, 912, 921, 931, 940, 948, 955,
    961, 967, 972, 976, 980, 982, 984, 985, 985, 984,
    983, 981, 977, 973, 969, 963, 956, 949, 941, 932,
    922, 911, 900, 887, 874, 860, 846, 830, 814, 797,
    779, 760, 741, 721, 700, 678, 656, 633, 609, 585,
    561, 535, 509, 483, 456, 429, 402, 374, 346, 317,
    288, 259, 230, 201, 171, 142, 112, 82, 52, 23,
    7, 37, -66, -96, -125, -154, -183,];

const REAL_SUN_FIX_NORMAL: [i32; 366] = [
    0, -189, -218, -246, -273, -301, -327, -354, -380, -405,
    -430, -455, -479, -502, -525, -547, -568, -589, -609, -628,
    -647, -665, -682, -698, -714, -728, -742, -755, -779, -790,
    -799, -817, -824, -830, -836, -841, -845, -849, -851, -853,
    -854, -855, -854, -853, -851, -848, -845, -841, -836, -831,
    -824, -818, -810, -802, -793, -664, -774, -763, -752, -741,
    -716, -703, -689, -675, -661, -647, -632, -616, -601, -585,
    -568, -552, -535, -518, -501, -484, -466, -449, -431, -413,
    -395, -377, -358, -340, -322, -304, -285, -267, -249, -231,
    -213, -196, -178, -161, -144, -127, -110, -93, -77, -61,
    46, 30, 16, 1, 13, 27, 41, 54, 66, 79,
    91, 102, 113, 124, 134, 143, 153, 161, 169, 177,
    184, 70, 196, 201, 206, 210, 217, 216, 219, 220,
    222, 222, 222, 222, 221, 219, 217, 214, 211, 207,
    203, 198, 193, 187, 181, 174, 167, 159, 151, 142,
    133, 124, 114, 104, 94, 83, 72, 60, 48, 36,
    24, 12, 1, 14, 39, 52, -65, -78, -91, -105,
    -117, -130, -143, -156, -168, -181, -193, -205, -217, -229,
    -240, -251, -262, -273, -283, -293, -302, -311, -320, -328,
    -336, -343, -350, -356, -362, -368, -372, -376, -380, -383,
    -385, -387, -389, -389, -389, -389, -388, -386, -384, -381,
    -377, -373, -368, -363, -357, -351, -344, -336, -328, -319,
    -310, -300, -290, -279, -267, -255, -242, -229, -216, -201,
    -187, -171, -156, -140, -123, -107, -89, -72, 54, 35,
    17, 2, 21, 41, 60, 80, 100, 121, 141, 162,
    183, 183, 204, 225, 246, 267, 288, 310, 331, 353,
    374, 395, 417, 438, 459, 480, 501, 522, 542, 562,
    582, 602, 621, 640, 659, 678, 696, 696, 713, 731,
    748, 764, 780, 796, 796, 811, 825, 839, 853, 866,
    878, 890, 901, 912, 921, 931, 940, 948, 955, 961,
    967, 972, 976, 980, 982, 984, 985, 985, 984, 983,
    981, 977, 973, 969, 963, 956, 949, 941, 932, 922,
    911, 900, 887, 874, 860, 846, 830, 814, 797, 779,
    760, 741, 721, 700, 678, 656, 633, 609, 585, 561,
    535, 509, 483, 456, 429, 402, 374, 346, 317, 288,
    259, 230, 201, 171, 142, 112, 82, 52, 23, 7,
    37, -66, -96, -125, -154, -183,];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn table_shapes() {
        assert_eq!(REAL_SUN_FIX_LEAP.len(), 367);
        assert_eq!(REAL_SUN_FIX_NORMAL.len(), 366);
        assert_eq!(REAL_SUN_FIX_LEAP[0], 0);
        assert_eq!(REAL_SUN_FIX_NORMAL[0], 0);
    }

    #[test]
    fn spot_values() {
        // Early February trough.
        assert_eq!(real_sun_fix(2024, 41), -855);
        assert_eq!(real_sun_fix(2023, 41), -855);
        // Out of range is neutral.
        assert_eq!(real_sun_fix(2023, 366), 0);
        assert_eq!(real_sun_fix(2024, 366), -183);
        assert_eq!(real_sun_fix(2024, 367), 0);
        assert_eq!(real_sun_fix(2024, 0), 0);
    }
}

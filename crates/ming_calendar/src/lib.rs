//! Calendar conversion for a UTC instant at a geographic location.
//!
//! A [`Calendar`] carries five parallel readings of one instant (system
//! local, UTC, fixed China time, longitude-based local solar time, and
//! real-sun time corrected by the equation-of-time tables) plus three
//! derived sub-reports: Gregorian solar, lunisolar, and the four sexagenary
//! pillars. Everything is computed eagerly at construction and never
//! mutated.
//!
//! Solar-term boundary instants are supplied by a [`SolarTermProvider`];
//! the shipped [`ApproxSolarTerms`] is day-accurate, which is sufficient
//! for pillar boundaries. Precise term data can be injected instead.

pub mod calendar;
pub mod lunar;
pub mod pillars;
pub mod real_sun;
pub mod solar;
pub mod solar_terms;
pub mod time_spec;

pub use calendar::Calendar;
pub use lunar::LunarReport;
pub use pillars::{GanzhiReport, pair_alias};
pub use real_sun::{is_leap_year, real_sun_fix};
pub use solar::SolarReport;
pub use solar_terms::{ApproxSolarTerms, SolarTermProvider, ganzhi_year_terms};
pub use time_spec::TimeSpec;

/// Seconds of zone offset per degree of longitude (4 minutes per degree).
pub const SECONDS_PER_LONGITUDE_DEGREE: f64 = 240.0;

/// Fixed China zone offset in seconds (UTC+8).
pub const CHINA_OFFSET_SECONDS: i32 = 8 * 3600;

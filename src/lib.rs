//! # Sunrise Almanac
//!
//! Sunrise and sunset times from the classical *Almanac for Computers*
//! (1990) approximation.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library computes the local clock time of sunrise and sunset for a
//! calendar date, geographic location, and sun-zenith definition. It targets
//! embedded and low-resource callers that need day/night scheduling (e.g.
//! lighting controllers) without a full ephemeris library: the whole
//! calculation is a fixed handful of floating-point operations, stateless
//! and allocation-free.
//!
//! ## Features
//!
//! - First-order closed form, within about one minute of USNO tables at mid
//!   latitudes
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`,
//!   math via native or `libm`
//! - Thread-safe: immutable configuration, pure functions
//! - Explicit polar day/night classification alongside the classic
//!   midnight-sentinel outputs
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library math functions
//! - `chrono` (default): Enable the `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! sunrise-almanac = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! sunrise-almanac = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use sunrise_almanac::{SunriseSunset, Zenith};
//!
//! // San Francisco, official zenith
//! let calculator = SunriseSunset::new(37.7749, -122.4194, Zenith::Official);
//!
//! let date = "2023-06-21T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let (sunrise, sunset) = calculator.calculate_hhmm(&date, -420);
//! assert_eq!(sunrise, 548);  // 05:48 PDT
//! assert_eq!(sunset, 2035);  // 20:35 PDT
//!
//! // Or as absolute timestamps on the same calendar date
//! let (sunrise, sunset) = calculator.calculate(&date, -420).unwrap();
//! println!("sunrise {sunrise}, sunset {sunset}");
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use sunrise_almanac::{RiseSet, SunriseSunset, Zenith};
//!
//! let calculator = SunriseSunset::new(75.0, 0.0, Zenith::Official);
//!
//! // Arctic summer: the sun never sets
//! match calculator.rise_set_for_date(2023, 6, 21, 0) {
//!     RiseSet::RegularDay { sunrise, sunset } => {
//!         println!("up {}, down {}", sunrise.hhmm(), sunset.hhmm());
//!     }
//!     RiseSet::PolarDay => println!("sun never sets"),
//!     RiseSet::PolarNight => println!("sun never rises"),
//! }
//! ```
//!
//! ## Limitations
//!
//! The reference algorithm's quirks are preserved deliberately, because its
//! accuracy was validated with them in place:
//!
//! - Angle normalization is a single correction step, not a full modulo.
//! - The classic integer and timestamp outputs report circumpolar days as
//!   midnight, indistinguishable from a real 00:00 event; the [`RiseSet`]
//!   API makes the condition explicit.
//! - Coordinates are not validated; out-of-range values give degenerate
//!   but non-panicking results.
//! - The caller supplies a fixed UTC offset in minutes. There is no
//!   time-zone database and no DST handling.
//!
//! ## References
//!
//! - Almanac for Computers, 1990. Nautical Almanac Office,
//!   United States Naval Observatory, Washington DC.
//! - Williams, E. "Sunrise/Sunset Algorithm", Aviation Formulary
//!   (transcription of the above).
//!
//! ## Coordinate System
//!
//! - **Latitude**: degrees, north positive (-90° to +90°)
//! - **Longitude**: degrees, east positive (-180° to +180°)
//! - **Zenith angle**: 0° = directly overhead; sunrise/sunset definitions
//!   are a little past 90° (see [`Zenith`])

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::float_cmp, // Exact comparisons of reference values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::riseset::{SunriseSunset, event_for_ordinal_day, rise_set_for_ordinal_day};
pub use crate::types::{ClockTime, RiseSet, SolarEvent, Zenith};

// Algorithm module
pub mod riseset;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, Timelike, Utc};

    #[test]
    fn test_integer_and_timestamp_variants_agree() {
        let calculator = SunriseSunset::new(42.93, -83.62, Zenith::Official);
        let date = "2023-06-21T09:30:00-04:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();

        let (sunrise_code, sunset_code) = calculator.calculate_hhmm(&date, -240);
        let (sunrise, sunset) = calculator.calculate(&date, -240).unwrap();

        let decoded_sunrise = (u32::from(sunrise_code / 100), u32::from(sunrise_code % 100));
        let decoded_sunset = (u32::from(sunset_code / 100), u32::from(sunset_code % 100));
        assert_eq!((sunrise.hour(), sunrise.minute()), decoded_sunrise);
        assert_eq!((sunset.hour(), sunset.minute()), decoded_sunset);
    }

    #[test]
    fn test_only_date_portion_matters() {
        let calculator = SunriseSunset::new(42.93, -83.62, Zenith::Official);
        let morning = "2023-06-21T00:00:01-04:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let evening = "2023-06-21T23:59:59-04:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();

        assert_eq!(
            calculator.calculate_hhmm(&morning, -240),
            calculator.calculate_hhmm(&evening, -240)
        );
    }

    #[test]
    fn test_utc_timestamps() {
        let calculator = SunriseSunset::new(42.93, -83.62, Zenith::Official);
        let date = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

        let (sunrise, sunset) = calculator.calculate(&date, 0).unwrap();
        assert_eq!((sunrise.hour(), sunrise.minute(), sunrise.second()), (9, 56, 0));
        // Sunset in UTC lands past midnight but is composed onto the input
        // date, matching the classic contract.
        assert_eq!((sunset.hour(), sunset.minute(), sunset.second()), (1, 17, 0));
    }
}

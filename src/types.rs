//! Core data types for sunrise/sunset calculations.

/// Predefined sun-zenith angles for sunrise/sunset calculations.
///
/// The zenith angle is the angular distance of the sun's center from
/// directly overhead at the moment of the event. The four named values are
/// the standard visibility thresholds; `Custom` accepts any angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zenith {
    /// Official sunrise/sunset (upper limb touches the horizon, 90°50')
    Official,
    /// Civil twilight (sun 6° below the horizon)
    Civil,
    /// Nautical twilight (sun 12° below the horizon)
    Nautical,
    /// Astronomical twilight (sun 18° below the horizon)
    Astronomical,
    /// Custom zenith angle in degrees
    Custom(f64),
}

impl Zenith {
    /// Gets the zenith angle in degrees for this definition.
    ///
    /// # Example
    /// ```
    /// # use sunrise_almanac::Zenith;
    /// assert_eq!(Zenith::Official.degrees(), 90.83333);
    /// assert_eq!(Zenith::Civil.degrees(), 96.0);
    /// ```
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Official => 90.83333,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
            Self::Custom(angle) => *angle,
        }
    }
}

/// The solar event to calculate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent {
    /// Sun crossing the zenith angle on its way up
    Sunrise,
    /// Sun crossing the zenith angle on its way down
    Sunset,
}

/// A local wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// 00:00, doubling as the classic "no event" sentinel in the
    /// sentinel-returning calculation variants.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Creates a clock time from an hour (normally 0–23) and minute (0–59).
    ///
    /// The hour is not range-checked. Times produced by the calculator stay
    /// in 0–23 except at the day-wrap boundary, where the +30 second
    /// rounding bias can nudge a result just past 24.0 and yield hour 24 —
    /// a quirk inherited from the reference algorithm and kept for
    /// compatibility.
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Gets the hour (normally 0–23; see [`Self::new`] for the day-wrap
    /// edge case).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Gets the minute (0–59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Encodes the time as the compact integer `hour * 100 + minute`.
    ///
    /// # Example
    /// ```
    /// # use sunrise_almanac::ClockTime;
    /// assert_eq!(ClockTime::new(5, 56).hhmm(), 556);
    /// assert_eq!(ClockTime::new(21, 17).hhmm(), 2117);
    /// ```
    #[must_use]
    pub const fn hhmm(&self) -> u16 {
        self.hour as u16 * 100 + self.minute as u16
    }
}

/// Result of a sunrise/sunset calculation for a given day.
///
/// At extreme latitudes the sun may not cross the requested zenith at all;
/// the polar variants make that condition explicit. The classic integer and
/// timestamp calculation variants instead absorb it into a midnight
/// sentinel, which is indistinguishable from a legitimate 00:00 event —
/// use this type when the distinction matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiseSet<T> {
    /// Regular day with distinct sunrise and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - the sun stays above the configured zenith and never sets
    PolarDay,
    /// Polar night - the sun stays below the configured zenith and never rises
    PolarNight,
}

impl<T> RiseSet<T> {
    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::PolarDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::PolarNight)
    }

    /// Gets the sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets the sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}

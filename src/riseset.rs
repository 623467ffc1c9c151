//! Sunrise and sunset calculation.
//!
//! Implements the spherical-astronomy approximation from the
//! *Almanac for Computers*, 1990 (Nautical Almanac Office, Washington DC),
//! widely circulated as the "sunrise/sunset algorithm". It is a first-order
//! closed form: no ephemeris tables, no iteration, a fixed handful of
//! floating-point operations per event. Against USNO tables it agrees to
//! within about one minute at mid latitudes, which is plenty for day/night
//! scheduling.
//!
//! Quirks of the reference algorithm are preserved on purpose, since the
//! accuracy above was validated with them in place: the truncated π
//! constant, single-step angle wraparound, and a fixed +30 second bias
//! before the minute truncation.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::math::{
    acos, adjust_to_24, adjust_to_360, asin, atan, cos, degrees_to_radians, floor,
    radians_to_degrees, sin, tan,
};
use crate::time;
use crate::types::{ClockTime, RiseSet, SolarEvent, Zenith};
#[cfg(feature = "chrono")]
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone};

/// +30 seconds in fractional hours, added before the minute truncation so
/// the truncated value rounds to the nearest minute.
const MINUTE_ROUNDING_BIAS: f64 = 0.00833333;

/// Outcome of a single event calculation, keeping the circumpolar reason.
enum EventOutcome {
    At(ClockTime),
    NeverRises,
    NeverSets,
}

/// Core evaluation of the almanac algorithm for one event on one day.
///
/// All angles are in degrees. `utc_offset_hours` is the caller's fixed
/// offset from UTC in fractional hours; no time-zone or DST logic happens
/// here. Latitude and longitude are not validated: out-of-range values
/// yield degenerate (possibly NaN) but non-panicking results.
fn event_outcome(
    ordinal_day: u32,
    event: SolarEvent,
    utc_offset_hours: f64,
    latitude: f64,
    longitude: f64,
    zenith_degrees: f64,
) -> EventOutcome {
    // Longitude as an hour value, and the approximate event time.
    let lon_hour = longitude / 15.0;
    let t = match event {
        SolarEvent::Sunrise => f64::from(ordinal_day) + ((6.0 - lon_hour) / 24.0),
        SolarEvent::Sunset => f64::from(ordinal_day) + ((18.0 - lon_hour) / 24.0),
    };

    // Sun's mean anomaly.
    let m = (0.9856 * t) - 3.289;

    // Sun's true longitude.
    let sin_m = sin(degrees_to_radians(m));
    let sin_2m = sin(2.0 * degrees_to_radians(m));
    let l = adjust_to_360(m + (1.916 * sin_m) + (0.02 * sin_2m) + 282.634);

    // Sun's right ascension, shifted into the same quadrant as L and
    // converted to hours.
    let tan_l = 0.91764 * tan(degrees_to_radians(l));
    let mut ra = adjust_to_360(radians_to_degrees(atan(tan_l)));
    let l_quadrant = floor(l / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;
    ra += l_quadrant - ra_quadrant;
    ra /= 15.0;

    // Sun's declination.
    let sin_dec = 0.39782 * sin(degrees_to_radians(l));
    let cos_dec = cos(asin(sin_dec));

    // Sun's local hour angle at the requested zenith.
    let cos_h = (cos(degrees_to_radians(zenith_degrees)) - (sin_dec * sin(degrees_to_radians(latitude))))
        / (cos_dec * cos(degrees_to_radians(latitude)));
    if cos_h > 1.0 {
        return EventOutcome::NeverRises;
    }
    if cos_h < -1.0 {
        return EventOutcome::NeverSets;
    }

    // Hour angle in hours; sunrise is on the western half of the circle.
    let h = match event {
        SolarEvent::Sunrise => 360.0 - radians_to_degrees(acos(cos_h)),
        SolarEvent::Sunset => radians_to_degrees(acos(cos_h)),
    } / 15.0;

    // Local mean time of the event.
    let t = h + ra - (0.06571 * t) - 6.622;

    // Back to UTC, then into the caller's zone. The bias makes the
    // truncation below round to the nearest minute instead of sometimes
    // landing on h:60. Right at the day-wrap boundary it can push the
    // value just past 24.0, so an hour of 24 is possible (see
    // `ClockTime::new`).
    let ut = adjust_to_24(t - lon_hour);
    let ut = adjust_to_24(ut + utc_offset_hours) + MINUTE_ROUNDING_BIAS;

    let hour = floor(ut);
    let minute = 60.0 * (ut - hour);
    EventOutcome::At(ClockTime::new(hour as u8, minute as u8))
}

/// Computes a single sunrise or sunset for an ordinal day (1–366).
///
/// Returns `None` when the sun does not cross the zenith on that day at
/// that latitude (polar day or night); use
/// [`rise_set_for_ordinal_day`] when the two conditions need to be told
/// apart.
///
/// # Example
/// ```
/// # use sunrise_almanac::{riseset, ClockTime, SolarEvent, Zenith};
/// // San Francisco, June 21 (day 172), UTC-7
/// let sunrise = riseset::event_for_ordinal_day(
///     172,
///     SolarEvent::Sunrise,
///     -7.0,
///     37.7749,
///     -122.4194,
///     Zenith::Official,
/// );
/// assert_eq!(sunrise, Some(ClockTime::new(5, 48)));
/// ```
#[must_use]
pub fn event_for_ordinal_day(
    ordinal_day: u32,
    event: SolarEvent,
    utc_offset_hours: f64,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Option<ClockTime> {
    match event_outcome(
        ordinal_day,
        event,
        utc_offset_hours,
        latitude,
        longitude,
        zenith.degrees(),
    ) {
        EventOutcome::At(clock_time) => Some(clock_time),
        EventOutcome::NeverRises | EventOutcome::NeverSets => None,
    }
}

/// Computes sunrise and sunset for an ordinal day, classifying polar
/// day/night explicitly.
#[must_use]
pub fn rise_set_for_ordinal_day(
    ordinal_day: u32,
    utc_offset_hours: f64,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> RiseSet<ClockTime> {
    let zenith_degrees = zenith.degrees();
    let sunrise = match event_outcome(
        ordinal_day,
        SolarEvent::Sunrise,
        utc_offset_hours,
        latitude,
        longitude,
        zenith_degrees,
    ) {
        EventOutcome::At(clock_time) => clock_time,
        EventOutcome::NeverRises => return RiseSet::PolarNight,
        EventOutcome::NeverSets => return RiseSet::PolarDay,
    };
    match event_outcome(
        ordinal_day,
        SolarEvent::Sunset,
        utc_offset_hours,
        latitude,
        longitude,
        zenith_degrees,
    ) {
        EventOutcome::At(sunset) => RiseSet::RegularDay { sunrise, sunset },
        EventOutcome::NeverRises => RiseSet::PolarNight,
        EventOutcome::NeverSets => RiseSet::PolarDay,
    }
}

/// A configured observer location and zenith definition.
///
/// Immutable once constructed; every calculation is a pure function of the
/// configuration and its arguments, so sharing one instance across threads
/// is safe.
///
/// Latitude is in degrees, north positive; longitude in degrees, east
/// positive. Neither is validated — values outside the physical ranges
/// produce mathematically degenerate but non-panicking results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseSunset {
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
}

impl SunriseSunset {
    /// Creates a calculator for the given location and zenith definition.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, zenith: Zenith) -> Self {
        Self {
            latitude,
            longitude,
            zenith,
        }
    }

    /// Gets the configured latitude in degrees (north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the configured longitude in degrees (east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the configured zenith definition.
    #[must_use]
    pub const fn zenith(&self) -> Zenith {
        self.zenith
    }

    fn event(&self, ordinal_day: u32, event: SolarEvent, utc_offset_hours: f64) -> EventOutcome {
        event_outcome(
            ordinal_day,
            event,
            utc_offset_hours,
            self.latitude,
            self.longitude,
            self.zenith.degrees(),
        )
    }

    /// Computes sunrise and sunset for a calendar date, with explicit
    /// polar day/night classification.
    ///
    /// `utc_offset_minutes` is the fixed difference between the caller's
    /// local clock and UTC, in minutes (e.g. -240 for UTC-4).
    ///
    /// # Example
    /// ```
    /// # use sunrise_almanac::{ClockTime, RiseSet, SunriseSunset, Zenith};
    /// let flint = SunriseSunset::new(42.93, -83.62, Zenith::Official);
    /// let result = flint.rise_set_for_date(2023, 6, 21, -240);
    /// assert_eq!(
    ///     result,
    ///     RiseSet::RegularDay {
    ///         sunrise: ClockTime::new(5, 56),
    ///         sunset: ClockTime::new(21, 17),
    ///     }
    /// );
    /// ```
    #[must_use]
    pub fn rise_set_for_date(
        &self,
        year: i32,
        month: u32,
        day: u32,
        utc_offset_minutes: i32,
    ) -> RiseSet<ClockTime> {
        rise_set_for_ordinal_day(
            time::ordinal_day(year, month, day),
            f64::from(utc_offset_minutes) / 60.0,
            self.latitude,
            self.longitude,
            self.zenith,
        )
    }

    /// Computes sunrise and sunset for a calendar date as compact
    /// `hour * 100 + minute` codes.
    ///
    /// When the sun never crosses the zenith on that day the affected code
    /// is `0` (midnight sentinel) — indistinguishable from a legitimate
    /// 00:00 event. Use [`Self::rise_set_for_date`] to tell the
    /// conditions apart.
    #[must_use]
    pub fn hhmm_for_date(
        &self,
        year: i32,
        month: u32,
        day: u32,
        utc_offset_minutes: i32,
    ) -> (u16, u16) {
        let ordinal_day = time::ordinal_day(year, month, day);
        let offset_hours = f64::from(utc_offset_minutes) / 60.0;
        let sunrise = match self.event(ordinal_day, SolarEvent::Sunrise, offset_hours) {
            EventOutcome::At(clock_time) => clock_time,
            _ => ClockTime::MIDNIGHT,
        };
        let sunset = match self.event(ordinal_day, SolarEvent::Sunset, offset_hours) {
            EventOutcome::At(clock_time) => clock_time,
            _ => ClockTime::MIDNIGHT,
        };
        (sunrise.hhmm(), sunset.hhmm())
    }

    /// Computes sunrise and sunset for the timestamp's calendar date as
    /// `hour * 100 + minute` codes.
    ///
    /// Only the date portion of `timestamp` enters the calculation; the
    /// time of day is ignored. See [`Self::hhmm_for_date`] for the
    /// midnight-sentinel behavior on polar days/nights.
    ///
    /// # Example
    /// ```
    /// # use chrono::{DateTime, FixedOffset};
    /// # use sunrise_almanac::{SunriseSunset, Zenith};
    /// let flint = SunriseSunset::new(42.93, -83.62, Zenith::Official);
    /// let t = "2023-06-21T12:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// let (sunrise, sunset) = flint.calculate_hhmm(&t, -240);
    /// assert_eq!((sunrise, sunset), (556, 2117));
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn calculate_hhmm<Tz: TimeZone>(
        &self,
        timestamp: &DateTime<Tz>,
        utc_offset_minutes: i32,
    ) -> (u16, u16) {
        self.hhmm_for_date(
            timestamp.year(),
            timestamp.month(),
            timestamp.day(),
            utc_offset_minutes,
        )
    }

    /// Computes sunrise and sunset as absolute timestamps on the
    /// timestamp's calendar date.
    ///
    /// The returned timestamps reuse the input's year, month, day, and time
    /// zone, with the hour and minute replaced by the computed event time
    /// and the seconds set to zero for both outputs. On a polar day or
    /// night the affected timestamp is midnight (the classic sentinel).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDateTime`] if the computed local time has no
    /// representation in the timestamp's time zone.
    ///
    /// # Example
    /// ```
    /// # use chrono::{DateTime, FixedOffset, Timelike};
    /// # use sunrise_almanac::{SunriseSunset, Zenith};
    /// let flint = SunriseSunset::new(42.93, -83.62, Zenith::Official);
    /// let t = "2023-06-21T12:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// let (sunrise, sunset) = flint.calculate(&t, -240).unwrap();
    /// assert_eq!((sunrise.hour(), sunrise.minute(), sunrise.second()), (5, 56, 0));
    /// assert_eq!((sunset.hour(), sunset.minute(), sunset.second()), (21, 17, 0));
    /// ```
    #[cfg(feature = "chrono")]
    pub fn calculate<Tz: TimeZone>(
        &self,
        timestamp: &DateTime<Tz>,
        utc_offset_minutes: i32,
    ) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let (sunrise_code, sunset_code) = self.calculate_hhmm(timestamp, utc_offset_minutes);
        let sunrise = compose(timestamp, sunrise_code)?;
        let sunset = compose(timestamp, sunset_code)?;
        Ok((sunrise, sunset))
    }

    /// Computes sunrise and sunset for the timestamp's calendar date, with
    /// explicit polar day/night classification.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn rise_set<Tz: TimeZone>(
        &self,
        timestamp: &DateTime<Tz>,
        utc_offset_minutes: i32,
    ) -> RiseSet<ClockTime> {
        self.rise_set_for_date(
            timestamp.year(),
            timestamp.month(),
            timestamp.day(),
            utc_offset_minutes,
        )
    }
}

/// Recomposes a computed hhmm code onto the input timestamp's date.
#[cfg(feature = "chrono")]
fn compose<Tz: TimeZone>(timestamp: &DateTime<Tz>, hhmm: u16) -> Result<DateTime<Tz>> {
    let (hour, minute) = (u32::from(hhmm / 100), u32::from(hhmm % 100));
    timestamp
        .timezone()
        .with_ymd_and_hms(
            timestamp.year(),
            timestamp.month(),
            timestamp.day(),
            hour,
            minute,
            0,
        )
        .earliest()
        .ok_or(Error::invalid_datetime(
            "computed event time does not exist in this time zone",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLINT: SunriseSunset = SunriseSunset::new(42.93, -83.62, Zenith::Official);

    #[test]
    fn test_summer_solstice_mid_latitude() {
        // Agrees with USNO tables to the minute (EDT)
        assert_eq!(FLINT.hhmm_for_date(2023, 6, 21, -240), (556, 2117));
    }

    #[test]
    fn test_winter_solstice_mid_latitude() {
        // EST
        assert_eq!(FLINT.hhmm_for_date(2023, 12, 21, -300), (802, 1703));
    }

    #[test]
    fn test_utc_offset_zero_wraps_past_midnight() {
        // Same instant expressed in UTC: sunset lands past midnight UTC.
        assert_eq!(FLINT.hhmm_for_date(2023, 6, 21, 0), (956, 117));
    }

    #[test]
    fn test_civil_twilight_is_wider() {
        let civil = SunriseSunset::new(42.93, -83.62, Zenith::Civil);
        assert_eq!(civil.hhmm_for_date(2023, 6, 21, -240), (520, 2152));
    }

    #[test]
    fn test_event_for_ordinal_day_matches_date_api() {
        let (sunrise_code, sunset_code) = FLINT.hhmm_for_date(2023, 6, 21, -240);
        let sunrise =
            event_for_ordinal_day(172, SolarEvent::Sunrise, -4.0, 42.93, -83.62, Zenith::Official)
                .unwrap();
        let sunset =
            event_for_ordinal_day(172, SolarEvent::Sunset, -4.0, 42.93, -83.62, Zenith::Official)
                .unwrap();
        assert_eq!(sunrise.hhmm(), sunrise_code);
        assert_eq!(sunset.hhmm(), sunset_code);
    }

    #[test]
    fn test_polar_day_classification() {
        // 75°N at the June solstice: the sun never sets.
        let arctic = SunriseSunset::new(75.0, 0.0, Zenith::Official);
        assert_eq!(
            arctic.rise_set_for_date(2023, 6, 21, 0),
            RiseSet::PolarDay
        );
        // The classic variant absorbs both events into the midnight sentinel.
        assert_eq!(arctic.hhmm_for_date(2023, 6, 21, 0), (0, 0));
    }

    #[test]
    fn test_polar_night_classification() {
        let arctic = SunriseSunset::new(75.0, 0.0, Zenith::Official);
        assert_eq!(
            arctic.rise_set_for_date(2023, 12, 21, 0),
            RiseSet::PolarNight
        );
        assert_eq!(arctic.hhmm_for_date(2023, 12, 21, 0), (0, 0));
    }

    #[test]
    fn test_circumpolar_event_is_absent() {
        assert_eq!(
            event_for_ordinal_day(172, SolarEvent::Sunset, 0.0, 75.0, 0.0, Zenith::Official),
            None
        );
        assert_eq!(
            event_for_ordinal_day(355, SolarEvent::Sunrise, 0.0, 75.0, 0.0, Zenith::Official),
            None
        );
    }

    #[test]
    fn test_out_of_range_latitude_does_not_panic() {
        // No validation by design: degenerate input, degenerate output.
        let bogus = SunriseSunset::new(123.0, -500.0, Zenith::Official);
        let _ = bogus.hhmm_for_date(2023, 6, 21, 0);
        let _ = bogus.rise_set_for_date(2023, 6, 21, 0);
    }

    #[test]
    fn test_idempotent() {
        let first = FLINT.rise_set_for_date(2023, 6, 21, -240);
        let second = FLINT.rise_set_for_date(2023, 6, 21, -240);
        assert_eq!(first, second);

        let a = FLINT.hhmm_for_date(2023, 12, 21, -300);
        let b = FLINT.hhmm_for_date(2023, 12, 21, -300);
        assert_eq!(a, b);
    }
}

//! Stats formatting and the HUD sink
//!
//! The core never touches UI widgets; it pushes formatted strings to a
//! [`StatsSink`] implemented by the host (DOM on web, log natively).

use crate::group_thousands;
use crate::sim::FlightReport;

/// Receiver for HUD text and panel visibility
pub trait StatsSink {
    /// Current distance label, every tick
    fn distance(&mut self, text: &str);
    /// Persisted coin total
    fn total_coins(&mut self, text: &str);
    /// End-of-flight summary
    fn flight_report(&mut self, report: &FormattedReport);
    fn instructions_visible(&mut self, visible: bool);
    fn game_over_visible(&mut self, visible: bool);
}

/// A flight report rendered to display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReport {
    pub distance: String,
    pub coins_earned: String,
    pub max_altitude: String,
    pub max_speed: String,
    pub duration: String,
}

impl FormattedReport {
    pub fn new(report: &FlightReport) -> Self {
        Self {
            distance: format_distance(report.distance as f64),
            coins_earned: format!("+ {} coins", group_thousands(report.coins_earned)),
            max_altitude: format_distance(report.max_altitude as f64),
            max_speed: format_speed(report.max_speed),
            duration: format_duration(report.duration_secs),
        }
    }
}

/// Meters as "123 m", or kilometers with two decimals from 1000 up
/// ("1 km", "2.35 km"); a ".00" fraction is dropped
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        let hundredths = (meters / 10.0).round() as u64;
        let (km, frac) = (hundredths / 100, hundredths % 100);
        if frac == 0 {
            format!("{} km", km)
        } else {
            format!("{}.{:02} km", km, frac)
        }
    } else {
        format!("{} m", meters.round())
    }
}

/// HUD label for the current distance
pub fn distance_label(meters: u64) -> String {
    format!("Distance: {}", format_distance(meters as f64))
}

/// Top speed in display units (tenths of a pixel per tick)
pub fn format_speed(speed: f32) -> String {
    format!("{}", (speed * 10.0).round() as i64)
}

/// Seconds with one decimal
pub fn format_duration(secs: f64) -> String {
    format!("{:.1} s", secs)
}

/// Sink that writes everything to the log
#[derive(Debug, Default)]
pub struct LogStats {
    last_distance: String,
}

impl StatsSink for LogStats {
    fn distance(&mut self, text: &str) {
        if text != self.last_distance {
            log::debug!("{}", text);
            self.last_distance = text.to_string();
        }
    }

    fn total_coins(&mut self, text: &str) {
        log::info!("Total coins: {}", text);
    }

    fn flight_report(&mut self, report: &FormattedReport) {
        log::info!(
            "Flight: {} | {} | altitude {} | speed {} | {}",
            report.distance,
            report.coins_earned,
            report.max_altitude,
            report.max_speed,
            report.duration
        );
    }

    fn instructions_visible(&mut self, _visible: bool) {}

    fn game_over_visible(&mut self, _visible: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(999.0), "999 m");
        assert_eq!(format_distance(1000.0), "1 km");
        assert_eq!(format_distance(2345.0), "2.35 km");
        assert_eq!(format_distance(2500.0), "2.50 km");
        assert_eq!(format_distance(12003.0), "12 km");
        assert_eq!(format_distance(412.4), "412 m");
    }

    #[test]
    fn test_distance_label() {
        assert_eq!(distance_label(1500), "Distance: 1.50 km");
    }

    #[test]
    fn test_format_report() {
        let report = FlightReport {
            distance: 12345,
            coins_earned: 1234,
            total_coins: 5000,
            max_altitude: 812.6,
            max_speed: 45.03,
            duration_secs: 17.26,
        };
        let f = FormattedReport::new(&report);
        assert_eq!(f.distance, "12.35 km");
        assert_eq!(f.coins_earned, "+ 1,234 coins");
        assert_eq!(f.max_altitude, "813 m");
        assert_eq!(f.max_speed, "450");
        assert_eq!(f.duration, "17.3 s");
    }
}

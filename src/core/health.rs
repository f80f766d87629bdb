use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

pub const STATUS_OK: &str = "ok";

/// Liveness payload: `{ "status": "ok", "uptime": <seconds>, "timestamp": <RFC 3339> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub uptime: f64,
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UptimeClock {
    started: Instant,
}

impl UptimeClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn report(&self) -> HealthReport {
        HealthReport {
            status: STATUS_OK.to_string(),
            uptime: self.uptime().as_secs_f64(),
            timestamp: Utc::now(),
        }
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shape() {
        let clock = UptimeClock::start();
        let report = clock.report();

        assert!(report.is_ok());
        assert!(report.uptime >= 0.0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["uptime"].is_number());
        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_uptime_grows() {
        let clock = UptimeClock::start();
        let first = clock.report();
        std::thread::sleep(Duration::from_millis(5));
        let second = clock.report();

        assert!(second.uptime > first.uptime);
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn test_parses_backend_payload() {
        let report: HealthReport = serde_json::from_str(
            r#"{"status":"ok","uptime":12.5,"timestamp":"2026-10-19T08:00:00.000Z"}"#,
        )
        .unwrap();

        assert!(report.is_ok());
        assert_eq!(report.uptime, 12.5);
    }
}

//! Registration payload shapes.

use std::collections::BTreeSet;

use jiff::civil::Time;
use jiff::tz::TimeZone;
use serde_json::{Map, Value, json};

/// Free-form registration payload, sent verbatim as the request body
pub type Payload = Map<String, Value>;

/// Daily window during which the provider should hold back notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuietTime {
    pub start: Time,
    pub end: Time,
}

impl QuietTime {
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// Renders the window as `{"start": "HH:MM", "end": "HH:MM"}`
    pub fn to_json(&self) -> Value {
        json!({
            "start": format_hour_minute(self.start),
            "end": format_hour_minute(self.end),
        })
    }
}

fn format_hour_minute(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Typed registration fields understood by structured providers.
///
/// Every field is optional; providers leave absent fields out of the body.
/// `tags` distinguishes "not supplied" (`None`) from "clear all tags"
/// (`Some` of an empty set).
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub alias: Option<String>,
    pub badge: Option<u32>,
    pub tags: Option<BTreeSet<String>>,
    pub time_zone: Option<TimeZone>,
    pub quiet_time: Option<QuietTime>,
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    pub fn quiet_time(mut self, start: Time, end: Time) -> Self {
        self.quiet_time = Some(QuietTime::new(start, end));
        self
    }

    /// Alias, with an empty string treated as absent
    pub fn effective_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }

    /// IANA name of the time zone, if one is set and it has a name.
    ///
    /// Fixed-offset zones carry no IANA identifier and are skipped.
    pub fn time_zone_name(&self) -> Option<&str> {
        self.time_zone.as_ref().and_then(TimeZone::iana_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::time;

    #[test]
    fn test_quiet_time_json() {
        let quiet = QuietTime::new(time(22, 0, 0, 0), time(7, 30, 0, 0));
        assert_eq!(quiet.to_json(), json!({"start": "22:00", "end": "07:30"}));
    }

    #[test]
    fn test_tags_are_deduplicated() {
        let registration = Registration::new().tags(["b", "a", "b"]);
        let tags: Vec<_> = registration.tags.unwrap().into_iter().collect();
        assert_eq!(tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_empty_alias_is_absent() {
        assert_eq!(Registration::new().alias("").effective_alias(), None);
        assert_eq!(Registration::new().alias("jdoe").effective_alias(), Some("jdoe"));
    }

    #[test]
    fn test_time_zone_name() {
        let registration =
            Registration::new().time_zone(TimeZone::get("America/Los_Angeles").unwrap());
        assert_eq!(registration.time_zone_name(), Some("America/Los_Angeles"));

        let fixed = Registration::new().time_zone(TimeZone::fixed(jiff::tz::offset(-5)));
        assert_eq!(fixed.time_zone_name(), None);
    }
}

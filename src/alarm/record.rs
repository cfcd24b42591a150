use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::alarm::{AlarmError, AlarmId, AlarmState, Day, DaysActive};

/// Plain form of an alarm:
/// `{id, hour, minute, daysActive: {sunday: bool, ..., saturday: bool}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmRecord {
    pub id: AlarmId,
    pub hour: u32,
    pub minute: u32,
    pub days_active: DaysActive,
}

impl AlarmRecord {
    pub fn to_json_text(&self) -> Result<String, AlarmError> {
        serde_json::to_string_pretty(self).map_err(|err| AlarmError::Encode(err.to_string()))
    }
}

impl AlarmState {
    pub fn to_serializable(&self) -> AlarmRecord {
        AlarmRecord {
            id: self.id(),
            hour: self.hour(),
            minute: self.minute(),
            days_active: *self.days_active(),
        }
    }

    /// Rebuilds an alarm with the record's id. Restoring the record of an
    /// alarm that is still alive yields a second alarm with the same id.
    pub fn from_record(record: AlarmRecord) -> Result<Self, AlarmError> {
        Self::from_parts(record.id, record.hour, record.minute, record.days_active)
    }
}

pub fn parse_alarm_record_text(content: &str) -> Result<AlarmState, AlarmError> {
    let raw = serde_json::from_str::<AlarmRecordFile>(content).map_err(|err| {
        warn!(line = err.line(), column = err.column(), "rejected alarm record");
        AlarmError::MalformedRecord(format!(
            "invalid JSON at line {}, column {}: {err}",
            err.line(),
            err.column()
        ))
    })?;

    let id = raw.id.parse::<AlarmId>()?;
    let (hour, minute) = time_from_raw(raw.hour, raw.minute)?;
    let days_active = days_from_entries(raw.days_active.0)?;
    AlarmState::from_record(AlarmRecord {
        id,
        hour,
        minute,
        days_active,
    })
}

/// Narrows the decoded integers; range checks happen in `AlarmState::from_record`.
fn time_from_raw(hour: i64, minute: i64) -> Result<(u32, u32), AlarmError> {
    match (u32::try_from(hour), u32::try_from(minute)) {
        (Ok(hour), Ok(minute)) => Ok((hour, minute)),
        _ => {
            warn!(hour, minute, "rejected out of range alarm time");
            Err(AlarmError::InvalidTimeValue { hour, minute })
        }
    }
}

fn days_from_entries(entries: Vec<(String, bool)>) -> Result<DaysActive, AlarmError> {
    let mut seen = [false; 7];
    let mut days = DaysActive::none();
    for (key, active) in entries {
        let day = key.parse::<Day>()?;
        if seen[day.index()] {
            return Err(AlarmError::MalformedRecord(format!(
                "duplicate day key '{key}'"
            )));
        }
        seen[day.index()] = true;
        days.set(day, active);
    }

    if let Some(missing) = Day::ALL.into_iter().find(|day| !seen[day.index()]) {
        return Err(AlarmError::MissingDayKey(missing));
    }
    Ok(days)
}

impl Serialize for AlarmId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for DaysActive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Day::ALL.len()))?;
        for (day, active) in self.iter() {
            map.serialize_entry(day.key(), &active)?;
        }
        map.end()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlarmRecordFile {
    id: String,
    hour: i64,
    minute: i64,
    days_active: DayEntries,
}

/// Day map entries in document order, duplicates kept so they can be rejected.
#[derive(Debug)]
struct DayEntries(Vec<(String, bool)>);

impl<'de> Deserialize<'de> for DayEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = DayEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of day names to booleans")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(7));
                while let Some((key, active)) = access.next_entry::<String, bool>()? {
                    entries.push((key, active));
                }
                Ok(DayEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    const VALID_ID: &str = "6f1c2a9e-3b7d-4c55-9a10-2f8e6d4b1c07";

    fn record_json(days: &str) -> String {
        format!(
            r#"{{ "id": "{VALID_ID}", "hour": 6, "minute": 45, "daysActive": {{ {days} }} }}"#
        )
    }

    fn full_week(monday: bool) -> String {
        format!(
            r#""sunday": false, "monday": {monday}, "tuesday": false, "wednesday": true,
               "thursday": false, "friday": true, "saturday": false"#
        )
    }

    #[test]
    fn serializes_every_day_in_sunday_first_order() {
        let mut alarm = AlarmState::with_time(9, 5).expect("valid time");
        alarm.set_day_active(Day::Monday, true);

        let text = alarm.to_serializable().to_json_text().expect("encode");
        let value: Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["id"], alarm.id().to_string());
        assert_eq!(value["hour"], 9);
        assert_eq!(value["minute"], 5);
        let days = value["daysActive"].as_object().expect("day map");
        assert_eq!(days.len(), 7);
        assert_eq!(days["monday"], true);
        assert_eq!(days["friday"], false);

        let sunday = text.find("\"sunday\"").expect("sunday key");
        let saturday = text.find("\"saturday\"").expect("saturday key");
        assert!(sunday < saturday);
    }

    #[test]
    fn round_trip_reproduces_alarm() {
        let mut alarm = AlarmState::with_time(23, 59).expect("valid time");
        for day in [Day::Sunday, Day::Tuesday, Day::Saturday] {
            alarm.set_day_active(day, true);
        }

        let text = alarm.to_serializable().to_json_text().expect("encode");
        let restored = parse_alarm_record_text(&text).expect("decode");
        assert_eq!(restored, alarm);
        assert_eq!(restored.to_serializable(), alarm.to_serializable());
    }

    #[test]
    fn parses_valid_record() {
        let alarm = parse_alarm_record_text(&record_json(&full_week(true))).expect("valid record");
        assert_eq!(alarm.id().to_string(), VALID_ID);
        assert_eq!(alarm.formatted_time(), "06:45");
        assert_eq!(
            alarm.active_day_list(),
            vec![Day::Monday, Day::Wednesday, Day::Friday]
        );
    }

    #[test]
    fn rejects_missing_day_key() {
        let days = r#""sunday": false, "monday": true, "tuesday": false, "wednesday": true,
                      "thursday": false, "friday": true"#;
        let err = parse_alarm_record_text(&record_json(days)).expect_err("missing saturday");
        assert_eq!(err, AlarmError::MissingDayKey(Day::Saturday));
    }

    #[test]
    fn rejects_unknown_day_key() {
        let days = format!(r#"{}, "funday": true"#, full_week(false));
        let err = parse_alarm_record_text(&record_json(&days)).expect_err("unknown key");
        assert_eq!(err, AlarmError::UnknownDayKey("funday".to_string()));

        let days = full_week(false).replace("\"monday\"", "\"Monday\"");
        let err = parse_alarm_record_text(&record_json(&days)).expect_err("capitalized key");
        assert_eq!(err, AlarmError::UnknownDayKey("Monday".to_string()));
    }

    #[test]
    fn rejects_duplicate_day_key() {
        let days = format!(r#"{}, "monday": false"#, full_week(true));
        let err = parse_alarm_record_text(&record_json(&days)).expect_err("duplicate key");
        assert!(err.to_string().contains("duplicate day key 'monday'"));
    }

    #[test]
    fn rejects_out_of_range_time() {
        let text = record_json(&full_week(true)).replace("\"hour\": 6", "\"hour\": 24");
        let err = parse_alarm_record_text(&text).expect_err("hour 24");
        assert_eq!(err, AlarmError::InvalidTimeValue { hour: 24, minute: 45 });
    }

    #[test]
    fn rejects_negative_and_oversized_time_as_invalid_time() {
        let text = record_json(&full_week(true)).replace("\"hour\": 6", "\"hour\": -1");
        let err = parse_alarm_record_text(&text).expect_err("hour -1");
        assert_eq!(err, AlarmError::InvalidTimeValue { hour: -1, minute: 45 });
        assert!(!err.to_string().contains("invalid JSON"));

        let text =
            record_json(&full_week(true)).replace("\"minute\": 45", "\"minute\": 4294967296");
        let err = parse_alarm_record_text(&text).expect_err("minute above u32::MAX");
        assert_eq!(
            err,
            AlarmError::InvalidTimeValue {
                hour: 6,
                minute: 4_294_967_296
            }
        );
    }

    #[test]
    fn rejects_bad_id_and_malformed_json() {
        let text = record_json(&full_week(true)).replace(VALID_ID, "U1234");
        assert_eq!(
            parse_alarm_record_text(&text),
            Err(AlarmError::InvalidId("U1234".to_string()))
        );

        let err = parse_alarm_record_text("{ not-valid-json ").expect_err("bad json");
        assert!(err.to_string().contains("invalid JSON"));
    }
}

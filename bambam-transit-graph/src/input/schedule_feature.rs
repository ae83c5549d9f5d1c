use super::{
    property_ops::{get_i64, get_string},
    InputError,
};
use crate::schedule::{parse_run_time, ScheduleRecord};
use geojson::Feature;

/// property names of the line/stop schedule collection
mod fieldname {
    pub const LINE_ID: &str = "id";
    pub const STOP_ID: &str = "stop_id";
    pub const SEQUENCE: &str = "sequenza";
    pub const RUN: &str = "corsa";
}

impl TryFrom<&Feature> for ScheduleRecord {
    type Error = InputError;

    fn try_from(feature: &Feature) -> Result<Self, Self::Error> {
        let run = parse_run_time(&get_string(feature, fieldname::RUN)?)?;
        Ok(ScheduleRecord::new(
            get_i64(feature, fieldname::LINE_ID)?,
            get_i64(feature, fieldname::STOP_ID)?,
            get_i64(feature, fieldname::SEQUENCE)?,
            run,
        ))
    }
}

#[cfg(test)]
mod test {
    use crate::{
        input::InputError,
        schedule::{ScheduleError, ScheduleRecord},
    };
    use chrono::NaiveTime;
    use geojson::Feature;
    use serde_json::json;

    fn mock_schedule_feature(corsa: &str) -> Feature {
        Feature::from_json_value(json!({
            "type": "Feature",
            "geometry": null,
            "properties": { "id": 10, "stop_id": "2", "sequenza": "1", "corsa": corsa }
        }))
        .expect("test invariant failed: invalid feature")
    }

    #[test]
    fn test_schedule_record_from_feature() {
        let feature = mock_schedule_feature("07:50");
        let record = ScheduleRecord::try_from(&feature).expect("should read record");
        let expected = ScheduleRecord::new(
            10,
            2,
            1,
            NaiveTime::from_hms_opt(7, 50, 0).expect("valid time"),
        );
        assert_eq!(record, expected);
    }

    #[test]
    fn test_schedule_record_invalid_run() {
        let feature = mock_schedule_feature("7.50");
        let result = ScheduleRecord::try_from(&feature);
        assert!(matches!(
            result,
            Err(InputError::Schedule(ScheduleError::InvalidRunTime(_)))
        ));
    }
}

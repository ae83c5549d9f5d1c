use super::GraphError;
use chrono::NaiveTime;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// property map of a node or edge
pub type Properties = serde_json::Map<String, Value>;

pub mod fieldname {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const GEOMETRY: &str = "geometry";
    pub const SEQUENCE: &str = "sequence";
    pub const RUN: &str = "run";
    pub const DURATION: &str = "duration";
    pub const LINE_ID: &str = "line_id";
}

/// attributes written once when a stop node is created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopAttributes {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// street identifier, carried as-is from the survey
    pub strada_id: Option<Value>,
    /// auxiliary array, carried as-is from the survey
    pub l_array: Option<Value>,
    /// text encoding of the stop point
    pub geometry: String,
}

/// attributes written once when a line node is created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineAttributes {
    pub id: i64,
    pub name: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub network: Option<String>,
    pub operator: Option<String>,
    /// text encoding of the line route
    pub geometry: String,
}

/// attributes of a `STOP_IN` edge, taken from the first run that links the line and stop.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipAttributes {
    pub sequence: i64,
    pub run: NaiveTime,
}

/// attributes of a `LINEA_ID` edge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceAttributes {
    /// travel time in whole minutes
    pub duration: i64,
    /// the line whose schedule produced this edge
    pub line_id: i64,
}

/// serializes an attribute struct into a property map.
pub fn into_properties<T: Serialize>(attributes: &T) -> Result<Properties, GraphError> {
    match serde_json::to_value(attributes) {
        Ok(Value::Object(properties)) => Ok(properties),
        Ok(other) => Err(GraphError::InvalidProperty(
            String::from("<root>"),
            format!("expected an object of properties, found '{other}'"),
        )),
        Err(e) => Err(GraphError::InvalidProperty(
            String::from("<root>"),
            e.to_string(),
        )),
    }
}

/// reads an attribute struct back from a property map.
pub fn from_properties<T: DeserializeOwned>(properties: &Properties) -> Result<T, GraphError> {
    serde_json::from_value(Value::Object(properties.clone()))
        .map_err(|e| GraphError::InvalidProperty(String::from("<root>"), e.to_string()))
}

#[cfg(test)]
mod test {
    use super::{fieldname, from_properties, into_properties, MembershipAttributes};
    use chrono::NaiveTime;
    use serde_json::json;

    #[test]
    fn test_membership_run_is_stored_as_clock_text() {
        let attributes = MembershipAttributes {
            sequence: 4,
            run: NaiveTime::from_hms_opt(7, 50, 0).expect("valid time"),
        };
        let properties = into_properties(&attributes).expect("should serialize");
        assert_eq!(properties.get(fieldname::RUN), Some(&json!("07:50:00")));
        assert_eq!(properties.get(fieldname::SEQUENCE), Some(&json!(4)));

        let decoded: MembershipAttributes =
            from_properties(&properties).expect("should deserialize");
        assert_eq!(decoded, attributes);
    }
}

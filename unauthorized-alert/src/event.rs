use serde_json::Value;


pub const UNKNOWN: &str = "Unknown";

static NULL: Value = Value::Null;

/// Walks `path` through nested objects in `record`.
///
/// A missing key, a non-object along the way or a `null` leaf all yield `default`.
/// String leaves are returned as-is, anything else as compact JSON.
pub fn get_or(record: &Value, path: &[&str], default: &str) -> String {
    let leaf = path
        .iter()
        .try_fold(record, |value, key| value.get(*key));

    match leaf {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(value)) => value.clone(),
        Some(other) => other.to_string(),
    }
}


/// The fields of an access-denied audit event that end up in the alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDeniedAlert {
    pub user: String,
    pub operation: String,
    pub bucket: String,
    pub region: String,
}

impl AccessDeniedAlert {
    pub fn from_event(event: &Value) -> Self {
        let detail = event.get("detail").unwrap_or(&NULL);

        AccessDeniedAlert {
            user: get_or(detail, &["userIdentity", "arn"], UNKNOWN),
            operation: get_or(detail, &["eventName"], UNKNOWN),
            bucket: get_or(detail, &["requestParameters", "bucketName"], UNKNOWN),
            region: get_or(detail, &["awsRegion"], UNKNOWN),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "\n    🚨 Unauthorized S3 Access Attempt Detected 🚨\n\n    User: {}\n    Operation: {}\n    Bucket: {}\n    Region: {}\n    Error: AccessDenied\n    ",
            self.user, self.operation, self.bucket, self.region
        )
    }
}

use serde::Deserialize;
use serde_json::{Map, Value};

/// One activity as the backend stores it, keyed by `name` in the
/// `GET /activities` object.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

// Wire shape of a single entry (the name is the object key).
#[derive(Debug, Deserialize)]
struct ActivityDetails {
    description: String,
    schedule: String,
    max_participants: i64,
    participants: Vec<String>,
}

impl Activity {
    fn from_details(name: String, d: ActivityDetails) -> Self {
        Self {
            name,
            description: d.description,
            schedule: d.schedule,
            max_participants: d.max_participants,
            participants: d.participants,
        }
    }

    /// Capacity minus current roster size. Negative when the backend
    /// has overfilled the activity.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left())
    }
}

/// Parses the `GET /activities` body, keeping the backend's key order.
pub fn parse_activities(json: &str) -> Result<Vec<Activity>, serde_json::Error> {
    let map: Map<String, Value> = serde_json::from_str(json)?;
    map.into_iter()
        .map(|(name, v)| {
            let details: ActivityDetails = serde_json::from_value(v)?;
            Ok::<_, serde_json::Error>(Activity::from_details(name, details))
        })
        .collect()
}

/// Removes the first `email` from `activity`'s roster.
/// Returns false when either is unknown.
pub fn remove_participant(activities: &mut [Activity], activity: &str, email: &str) -> bool {
    let Some(a) = activities.iter_mut().find(|a| a.name == activity) else {
        return false;
    };
    match a.participants.iter().position(|p| p == email) {
        Some(i) => {
            a.participants.remove(i);
            true
        }
        None => false,
    }
}

/// Error payload of a non-2xx response: `{ detail }` or `{ message }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    pub detail: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn from_value(v: &Value) -> Self {
        Self {
            detail: v.get("detail").and_then(json_text),
            message: v.get("message").and_then(json_text),
        }
    }

    /// An unparsable body counts as empty.
    pub fn parse_lenient(text: &str) -> Self {
        serde_json::from_str::<Value>(text)
            .map(|v| Self::from_value(&v))
            .unwrap_or_default()
    }
}

/// Text of a JSON field for display. Null and "" count as absent; non-string
/// values (e.g. validation error arrays) are shown as compact JSON.
pub fn json_text(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chess_club() -> Activity {
        Activity {
            name: "Chess Club".into(),
            description: "d".into(),
            schedule: "Mon".into(),
            max_participants: 10,
            participants: vec!["a@x.com".into()],
        }
    }

    #[test]
    fn chess_club_has_nine_spots_left() {
        let json = r#"{"Chess Club": {"description":"d","schedule":"Mon","max_participants":10,"participants":["a@x.com"]}}"#;
        let activities = parse_activities(json).unwrap();
        assert_eq!(activities, vec![chess_club()]);
        assert_eq!(activities[0].availability_text(), "9 spots left");
        assert_eq!(activities[0].participants.len(), 1);
    }

    #[test]
    fn parse_keeps_backend_order() {
        let json = r#"{
            "Programming Class": {"description":"p","schedule":"Tue","max_participants":20,"participants":[]},
            "Art Club": {"description":"a","schedule":"Wed","max_participants":5,"participants":[]},
            "Chess Club": {"description":"c","schedule":"Fri","max_participants":12,"participants":[]}
        }"#;
        let names: Vec<_> = parse_activities(json)
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["Programming Class", "Art Club", "Chess Club"]);
    }

    #[test]
    fn parse_rejects_missing_fields_and_non_objects() {
        assert!(parse_activities(r#"{"X": {"description":"d","schedule":"s"}}"#).is_err());
        assert!(parse_activities("[]").is_err());
        assert!(parse_activities("not json").is_err());
    }

    #[test]
    fn spots_left_goes_negative_when_overfilled() {
        let mut a = chess_club();
        a.max_participants = 1;
        a.participants.push("b@x.com".into());
        assert_eq!(a.spots_left(), -1);
        assert_eq!(a.availability_text(), "-1 spots left");
    }

    #[test]
    fn remove_participant_drops_exactly_one() {
        let mut activities = vec![chess_club()];
        activities[0].participants.push("b@x.com".into());

        assert!(remove_participant(&mut activities, "Chess Club", "a@x.com"));
        assert_eq!(activities[0].participants, ["b@x.com"]);
        assert_eq!(activities[0].spots_left(), 9);
    }

    #[test]
    fn remove_participant_unknown_is_noop() {
        let mut activities = vec![chess_club()];
        assert!(!remove_participant(&mut activities, "Chess Club", "z@x.com"));
        assert!(!remove_participant(&mut activities, "Drama", "a@x.com"));
        assert_eq!(activities, vec![chess_club()]);
    }

    #[test]
    fn error_body_reads_detail_and_message() {
        let body = ErrorBody::from_value(&json!({"detail": "Student already signed up"}));
        assert_eq!(body.detail.as_deref(), Some("Student already signed up"));
        assert_eq!(body.message, None);

        let body = ErrorBody::parse_lenient(r#"{"message": "gone", "detail": ""}"#);
        assert_eq!(body.detail, None);
        assert_eq!(body.message.as_deref(), Some("gone"));
    }

    #[test]
    fn error_body_tolerates_garbage() {
        assert_eq!(ErrorBody::parse_lenient(""), ErrorBody::default());
        assert_eq!(ErrorBody::parse_lenient("<html>"), ErrorBody::default());
    }

    #[test]
    fn json_text_renders_structured_detail() {
        let v = json!([{"loc": ["query", "email"]}]);
        assert_eq!(json_text(&v).as_deref(), Some(r#"[{"loc":["query","email"]}]"#));
        assert_eq!(json_text(&Value::Null), None);
    }
}

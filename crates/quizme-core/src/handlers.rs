//! Request handlers, one per endpoint.
//!
//! These are transport-independent: each takes the store it works on and the
//! raw request input, and returns either the response body or a
//! [`FlashcardError`] whose message and status code the server sends as-is.
//! Bodies arrive as untyped JSON so a missing field and a field of the wrong
//! type can be told apart.

use serde_json::Value;

use crate::error::FlashcardError;
use crate::model::{
    ClearedResponse, LoadResponse, SaveResponse, SavedScoreResponse, ScoreRecord, ScoresResponse,
    SetsResponse,
};
use crate::scores::ScoreLog;
use crate::store::SetStore;

/// Shape of a single field in a request body.
enum Field<'a> {
    Missing,
    NotString,
    Str(&'a str),
}

fn field<'a>(body: &'a Value, key: &str) -> Field<'a> {
    match body.get(key) {
        None => Field::Missing,
        Some(Value::String(s)) => Field::Str(s),
        Some(_) => Field::NotString,
    }
}

/// `POST /api/save` with `{name, value}`.
pub fn save(store: &mut SetStore, body: &Value) -> Result<SaveResponse, FlashcardError> {
    let name = match field(body, "name") {
        Field::Str(name) if !name.is_empty() => name,
        _ => return Err(FlashcardError::MissingArgument("name")),
    };

    let text = match field(body, "value") {
        Field::Missing => return Err(FlashcardError::MissingArgument("text")),
        Field::NotString => return Err(FlashcardError::NotAString("text")),
        Field::Str(text) => text,
    };

    let check = store.contains(name);
    store.create(name, text)?;
    tracing::info!(set = name, "created flashcard set");

    Ok(SaveResponse { check })
}

/// `GET /api/lists`.
pub fn lists(store: &SetStore) -> SetsResponse {
    SetsResponse {
        sets: store.names(),
    }
}

/// `GET /api/load?name=...`.
pub fn load(store: &SetStore, name: Option<&str>) -> Result<LoadResponse, FlashcardError> {
    let name = name.ok_or(FlashcardError::MissingArgument("name"))?;
    let content = store.load(name)?.to_vec();
    Ok(LoadResponse {
        name: name.to_string(),
        content,
    })
}

/// `GET /api/clear`.
pub fn clear(store: &mut SetStore) -> ClearedResponse {
    let removed = store.len();
    let cleared = store.clear();
    tracing::info!(removed, "cleared flashcard sets");
    ClearedResponse { cleared }
}

/// `POST /api/saveScore` with `{username, setName, percent}`.
pub fn save_score(log: &mut ScoreLog, body: &Value) -> Result<SavedScoreResponse, FlashcardError> {
    let required = |key: &'static str| match field(body, key) {
        Field::Str(s) => Ok(s.to_string()),
        Field::Missing | Field::NotString => Err(FlashcardError::MissingParameter(key)),
    };

    let username = required("username")?;
    let set_name = required("setName")?;
    let percent = required("percent")?;

    tracing::info!(%username, set = %set_name, %percent, "saved score");
    log.append(ScoreRecord {
        username,
        set_name,
        percent,
    });

    Ok(SavedScoreResponse { savedscore: true })
}

/// `GET /api/listScores`.
pub fn list_scores(log: &ScoreLog) -> ScoresResponse {
    ScoresResponse {
        scores: log.records().to_vec(),
    }
}

/// `GET /api/clearScore`.
pub fn clear_scores(log: &mut ScoreLog) -> ClearedResponse {
    let removed = log.len();
    let cleared = log.clear();
    tracing::info!(removed, "cleared scores");
    ClearedResponse { cleared }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QnA;
    use serde_json::json;

    #[test]
    fn save_new_set_reports_check_false() {
        let mut store = SetStore::new();
        let body = json!({"name": "Set1", "value": "Question1|Answer1\nQuestion2|Answer2"});
        assert_eq!(save(&mut store, &body).unwrap(), SaveResponse { check: false });
        assert_eq!(lists(&store).sets, vec!["Set1"]);
    }

    #[test]
    fn save_validation_messages() {
        let mut store = SetStore::new();

        let err = save(&mut store, &json!({"value": "Q|A"})).unwrap_err();
        assert_eq!(err.to_string(), "required argument \"name\" was missing");

        let err = save(&mut store, &json!({"name": 7, "value": "Q|A"})).unwrap_err();
        assert_eq!(err.to_string(), "required argument \"name\" was missing");

        let err = save(&mut store, &json!({"name": "", "value": "Q|A"})).unwrap_err();
        assert_eq!(err.to_string(), "required argument \"name\" was missing");

        let err = save(&mut store, &json!({"name": "Set2"})).unwrap_err();
        assert_eq!(err.to_string(), "required argument \"text\" was missing");

        let err = save(&mut store, &json!({"name": "Set3", "value": 123})).unwrap_err();
        assert_eq!(err.to_string(), "required argument \"text\" is not a string");

        let err = save(&mut store, &json!({"name": "Set1", "value": "NewQuestion NewAnswer"}))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Must have a question/answer or must have a \"|\" separating front and back"
        );

        let err = save(&mut store, &json!({"name": "Set1", "value": "NewQuestion|"})).unwrap_err();
        assert_eq!(err.status_code(), 400);

        assert!(store.is_empty());
    }

    #[test]
    fn save_non_object_body_is_missing_name() {
        let mut store = SetStore::new();
        let err = save(&mut store, &Value::Null).unwrap_err();
        assert_eq!(err, FlashcardError::MissingArgument("name"));
    }

    #[test]
    fn save_duplicate_name() {
        let mut store = SetStore::new();
        save(&mut store, &json!({"name": "Set1", "value": "Q1|A1"})).unwrap();
        let err = save(&mut store, &json!({"name": "Set1", "value": "NewQuestion|NewAnswer"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Name of the Set Already Exists");
        assert_eq!(
            load(&store, Some("Set1")).unwrap().content,
            vec![QnA::new("Q1", "A1")]
        );
    }

    #[test]
    fn load_cases() {
        let mut store = SetStore::new();
        save(&mut store, &json!({"name": "Set1", "value": "Q1|A1\nQ2|A2"})).unwrap();

        let body = load(&store, Some("Set1")).unwrap();
        assert_eq!(
            body,
            LoadResponse {
                name: "Set1".into(),
                content: vec![QnA::new("Q1", "A1"), QnA::new("Q2", "A2")],
            }
        );

        let err = load(&store, Some("NonExistingSet")).unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "No file under the name NonExistingSet");

        let err = load(&store, None).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "required argument \"name\" was missing");
    }

    #[test]
    fn clear_sets() {
        let mut store = SetStore::new();
        save(&mut store, &json!({"name": "Set1", "value": "Q1|A1"})).unwrap();
        assert!(clear(&mut store).cleared);
        assert!(lists(&store).sets.is_empty());
        assert!(clear(&mut store).cleared);
        assert!(lists(&store).sets.is_empty());
    }

    #[test]
    fn save_score_and_list() {
        let mut log = ScoreLog::new();
        let body = json!({"username": "user1", "setName": "Set1", "percent": "80"});
        assert!(save_score(&mut log, &body).unwrap().savedscore);

        let body = json!({"username": "user2", "setName": "Set1", "percent": "NaN"});
        save_score(&mut log, &body).unwrap();

        let scores = list_scores(&log).scores;
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0], ScoreRecord::new("user1", "Set1", "80"));
        assert_eq!(scores[1].percent, "NaN");
    }

    #[test]
    fn save_score_missing_fields() {
        let mut log = ScoreLog::new();

        let err = save_score(&mut log, &json!({"setName": "Set1", "percent": "80"})).unwrap_err();
        assert_eq!(err.to_string(), "missing 'username' parameter");

        let err = save_score(&mut log, &json!({"username": "user1", "percent": "80"})).unwrap_err();
        assert_eq!(err.to_string(), "missing 'setName' parameter");

        let err =
            save_score(&mut log, &json!({"username": "user1", "setName": "Set1"})).unwrap_err();
        assert_eq!(err.to_string(), "missing 'percent' parameter");

        let err = save_score(
            &mut log,
            &json!({"username": "user1", "setName": "Set1", "percent": 80}),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "missing 'percent' parameter");

        assert!(log.is_empty());
    }

    #[test]
    fn clear_scores_twice() {
        let mut log = ScoreLog::new();
        save_score(
            &mut log,
            &json!({"username": "user1", "setName": "Set1", "percent": "80"}),
        )
        .unwrap();
        assert!(clear_scores(&mut log).cleared);
        assert!(list_scores(&log).scores.is_empty());
        assert!(clear_scores(&mut log).cleared);
        assert!(list_scores(&log).scores.is_empty());
    }
}

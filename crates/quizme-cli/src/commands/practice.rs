//! The `quizme practice` command.

use std::io::{BufRead, Write};

use anyhow::Result;

use quizme_core::model::ScoreRecord;
use quizme_core::practice::{PracticeSession, PracticeState, Side};
use quizme_core::traits::FlashcardBackend;

use super::{prompt, Connection};

pub async fn execute(conn: &Connection, name: String, username: Option<String>) -> Result<()> {
    let backend = conn.backend()?;
    let stdin = std::io::stdin();
    run_session(
        &backend,
        &name,
        username,
        &mut stdin.lock(),
        &mut std::io::stdout(),
    )
    .await?;
    Ok(())
}

/// Load `name`, walk its cards, and save the score once finished.
///
/// Returns the saved record, or `None` if the user quit early or the set had
/// no cards.
pub(crate) async fn run_session(
    backend: &dyn FlashcardBackend,
    name: &str,
    username: Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<ScoreRecord>> {
    let set = backend.load_set(name).await?;
    let mut session = PracticeSession::new(set.name, set.content);

    writeln!(out, "== {} ==", session.set_name())?;

    while let PracticeState::Showing { index, side } = session.state() {
        let (correct, incorrect) = session.tally();
        let label = match side {
            Side::Question => "Q",
            Side::Answer => "A",
        };
        writeln!(
            out,
            "\n[{}/{}] Correct: {correct} | Incorrect: {incorrect}",
            index + 1,
            session.len()
        )?;
        writeln!(out, "{label}: {}", session.visible_text().unwrap_or_default())?;

        let Some(choice) = prompt(input, out, "(f)lip (c)orrect (i)ncorrect (d)one > ")? else {
            return Ok(None);
        };
        match choice.to_lowercase().as_str() {
            "f" | "flip" | "" => session.flip(),
            "c" | "correct" => session.mark_correct(),
            "i" | "incorrect" => session.mark_incorrect(),
            "d" | "done" => {
                writeln!(out, "Stopped without saving.")?;
                return Ok(None);
            }
            other => writeln!(out, "Unknown choice '{other}'")?,
        }
    }

    let (correct, incorrect) = session.tally();
    writeln!(out, "\nEnd of Quiz")?;
    writeln!(out, "Correct: {correct} | Incorrect: {incorrect}")?;

    if session.is_empty() {
        writeln!(out, "This set has no cards; nothing to save.")?;
        return Ok(None);
    }

    let username = match username.filter(|u| !u.is_empty()) {
        Some(u) => u,
        None => loop {
            match prompt(input, out, "Name: ")? {
                None => return Ok(None),
                Some(u) if u.is_empty() => writeln!(out, "Must Type Something In")?,
                Some(u) => break u,
            }
        },
    };

    let record = session.score_record(&username)?;
    backend.save_score(&record).await?;
    writeln!(
        out,
        "Saved score {}% for {} on {}",
        record.percent, record.username, record.set_name
    )?;

    Ok(Some(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizme_client::MockBackend;

    async fn backend_with_set() -> MockBackend {
        let backend = MockBackend::new();
        backend
            .save_set("Capitals", "France|Paris\nPeru|Lima\nChad|N'Djamena")
            .await
            .unwrap();
        backend
    }

    async fn run(backend: &MockBackend, keys: &str, user: Option<&str>) -> (Option<ScoreRecord>, String) {
        let mut input = keys.as_bytes();
        let mut out = Vec::new();
        let record = run_session(
            backend,
            "Capitals",
            user.map(str::to_string),
            &mut input,
            &mut out,
        )
        .await
        .unwrap();
        (record, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn full_run_saves_floored_percent() {
        let backend = backend_with_set().await;
        let (record, out) = run(&backend, "f\nc\ni\ni\n", Some("ann")).await;

        assert_eq!(record, Some(ScoreRecord::new("ann", "Capitals", "33")));
        assert!(out.contains("A: Paris"));
        assert!(out.contains("Correct: 1 | Incorrect: 2"));
        assert_eq!(
            backend.list_scores().await.unwrap(),
            vec![ScoreRecord::new("ann", "Capitals", "33")]
        );
    }

    #[tokio::test]
    async fn prompts_until_name_given() {
        let backend = backend_with_set().await;
        let (record, out) = run(&backend, "c\nc\nc\n\nbob\n", None).await;

        assert!(out.contains("Must Type Something In"));
        assert_eq!(record.unwrap().percent, "100");
    }

    #[tokio::test]
    async fn done_quits_without_saving() {
        let backend = backend_with_set().await;
        let (record, out) = run(&backend, "c\nd\n", Some("ann")).await;

        assert!(record.is_none());
        assert!(out.contains("Stopped without saving."));
        assert!(backend.list_scores().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn end_of_input_quits() {
        let backend = backend_with_set().await;
        let (record, _) = run(&backend, "c\n", Some("ann")).await;
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn unknown_set_is_an_error() {
        let backend = MockBackend::new();
        let mut input = "".as_bytes();
        let err = run_session(&backend, "nope", None, &mut input, &mut Vec::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No file under the name nope"));
    }
}

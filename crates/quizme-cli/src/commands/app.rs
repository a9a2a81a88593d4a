//! The `quizme app` command: a page-by-page terminal study front end.

use std::io::{BufRead, Write};

use anyhow::Result;

use quizme_client::ClientError;
use quizme_core::practice::Page;
use quizme_core::traits::FlashcardBackend;

use super::practice::run_session;
use super::scores::render_scores;
use super::{prompt, Connection};

pub async fn execute(conn: &Connection) -> Result<()> {
    let backend = conn.backend()?;
    let stdin = std::io::stdin();
    run_app(&backend, &mut stdin.lock(), &mut std::io::stdout()).await
}

/// Drive the pages until the user quits or input ends.
pub(crate) async fn run_app(
    backend: &dyn FlashcardBackend,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut page = Page::default();
    loop {
        tracing::debug!(%page, "showing page");
        let next = match page {
            Page::List => list_page(backend, input, out).await?,
            Page::Create => create_page(backend, input, out).await?,
            Page::Practice { name } => {
                match run_session(backend, &name, None, input, out).await {
                    Ok(Some(_)) => Some(Page::Scores),
                    Ok(None) => Some(Page::List),
                    Err(e) => {
                        report(out, &e)?;
                        Some(Page::List)
                    }
                }
            }
            Page::Scores => scores_page(backend, input, out).await?,
        };
        match next {
            Some(p) => page = p,
            None => return Ok(()),
        }
    }
}

/// Show a server rejection to the user; anything else is fatal.
fn report(out: &mut impl Write, e: &anyhow::Error) -> Result<()> {
    match e.downcast_ref::<ClientError>() {
        Some(client) if client.is_rejection() => {
            writeln!(out, "{}", client.server_message().unwrap_or_default())?;
            Ok(())
        }
        _ => Err(anyhow::anyhow!("{e:#}")),
    }
}

async fn list_page(
    backend: &dyn FlashcardBackend,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<Page>> {
    let sets = backend.list_sets().await?;

    writeln!(out, "\nQuizMe\nCurrent Lists of Active Sets")?;
    if sets.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (i, name) in sets.iter().enumerate() {
        writeln!(out, "{:>3}. {name}", i + 1)?;
    }

    loop {
        let Some(choice) = prompt(
            input,
            out,
            "number to practice, (n)ew, (s)cores, (c)lear, (q)uit > ",
        )?
        else {
            return Ok(None);
        };

        match choice.as_str() {
            "n" => return Ok(Some(Page::Create)),
            "s" => return Ok(Some(Page::Scores)),
            "q" => return Ok(None),
            "c" => {
                backend.clear_sets().await?;
                writeln!(out, "Cleared")?;
                return Ok(Some(Page::List));
            }
            other => match other.parse::<usize>() {
                Ok(n) if (1..=sets.len()).contains(&n) => {
                    return Ok(Some(Page::Practice {
                        name: sets[n - 1].clone(),
                    }));
                }
                _ => writeln!(out, "Unknown choice '{other}'")?,
            },
        }
    }
}

async fn create_page(
    backend: &dyn FlashcardBackend,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<Page>> {
    writeln!(out, "\nCreate New Study Set")?;
    let Some(name) = prompt(input, out, "Study Set Name: ")? else {
        return Ok(None);
    };

    writeln!(out, "Cards, one per line as front|back; blank line to finish:")?;
    let mut lines = Vec::new();
    while let Some(line) = prompt(input, out, "> ")? {
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }

    if name.is_empty() || lines.is_empty() {
        writeln!(out, "Must Input a Name or Enter Some Card Values")?;
        return Ok(Some(Page::List));
    }

    match backend.save_set(&name, &lines.join("\n")).await {
        Ok(_) => writeln!(out, "Saved '{name}'")?,
        Err(e) => report(out, &e)?,
    }
    Ok(Some(Page::List))
}

async fn scores_page(
    backend: &dyn FlashcardBackend,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<Page>> {
    let scores = backend.list_scores().await?;
    writeln!(out, "\nScores\n{}", render_scores(&scores))?;

    match prompt(input, out, "(c)lear or Enter to go back > ")? {
        None => Ok(None),
        Some(choice) if choice == "c" => {
            backend.clear_scores().await?;
            writeln!(out, "Cleared")?;
            Ok(Some(Page::Scores))
        }
        Some(_) => Ok(Some(Page::List)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizme_client::MockBackend;
    use quizme_core::model::ScoreRecord;

    async fn drive(backend: &MockBackend, keys: &str) -> String {
        let mut input = keys.as_bytes();
        let mut out = Vec::new();
        run_app(backend, &mut input, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn create_practice_and_view_scores() {
        let backend = MockBackend::new();
        let keys = "n\nCapitals\nFrance|Paris\nPeru|Lima\n\n1\nc\ni\nann\n\nq\n";
        let out = drive(&backend, keys).await;

        assert!(out.contains("Saved 'Capitals'"));
        assert!(out.contains("  1. Capitals"));
        let saved = out.find("Saved score 50% for ann on Capitals").unwrap();
        assert!(out[saved..].contains("\nScores\n"));
        assert!(out[saved..].contains("50%"));
        assert_eq!(
            backend.list_scores().await.unwrap(),
            vec![ScoreRecord::new("ann", "Capitals", "50")]
        );
    }

    #[tokio::test]
    async fn duplicate_name_is_reported_not_fatal() {
        let backend = MockBackend::new();
        backend.save_set("Capitals", "France|Paris").await.unwrap();

        let out = drive(&backend, "n\nCapitals\nPeru|Lima\n\nq\n").await;
        assert!(out.contains("Name of the Set Already Exists"));
        assert_eq!(
            backend.load_set("Capitals").await.unwrap().content.len(),
            1
        );
    }

    #[tokio::test]
    async fn create_without_cards_goes_back() {
        let backend = MockBackend::new();
        let out = drive(&backend, "n\nEmpty\n\nq\n").await;
        assert!(out.contains("Must Input a Name or Enter Some Card Values"));
        assert!(backend.list_sets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_from_list_and_scores() {
        let backend = MockBackend::new();
        backend.save_set("A", "q|a").await.unwrap();
        backend
            .save_score(&ScoreRecord::new("ann", "A", "100"))
            .await
            .unwrap();

        drive(&backend, "s\nc\n\nc\nq\n").await;
        assert!(backend.list_sets().await.unwrap().is_empty());
        assert!(backend.list_scores().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn quitting_practice_returns_to_list() {
        let backend = MockBackend::new();
        backend.save_set("A", "q|a").await.unwrap();

        let out = drive(&backend, "1\nd\nq\n").await;
        let stopped = out.find("Stopped without saving.").unwrap();
        assert!(out[stopped..].contains("Current Lists of Active Sets"));
        assert!(!out.contains("\nScores\n"));
    }

    #[tokio::test]
    async fn bad_choice_reprompts() {
        let backend = MockBackend::new();
        let out = drive(&backend, "7\nq\n").await;
        assert!(out.contains("Unknown choice '7'"));
    }
}

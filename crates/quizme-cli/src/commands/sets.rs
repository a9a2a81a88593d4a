//! The `quizme create`, `list`, `show` and `clear` commands.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizme_core::traits::FlashcardBackend;

use super::Connection;

pub async fn create(
    conn: &Connection,
    name: String,
    file: Option<PathBuf>,
    cards: Option<String>,
) -> Result<()> {
    let text = match (file, cards) {
        (Some(path), _) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read cards file: {}", path.display()))?,
        (None, Some(cards)) => cards,
        (None, None) => anyhow::bail!("provide the cards with --file or --cards"),
    };
    // Editors usually end files with a newline; the server treats it as an empty card.
    let text = text.trim_end_matches(['\n', '\r']);

    let backend = conn.backend()?;
    create_set(&backend, &name, text, &mut std::io::stdout()).await
}

pub(crate) async fn create_set(
    backend: &dyn FlashcardBackend,
    name: &str,
    text: &str,
    out: &mut impl Write,
) -> Result<()> {
    anyhow::ensure!(
        !name.is_empty() && !text.is_empty(),
        "must input a name and some card values"
    );
    backend.save_set(name, text).await?;
    let count = text.split('\n').count();
    writeln!(out, "Created set '{name}' ({count} cards)")?;
    Ok(())
}

pub async fn list(conn: &Connection) -> Result<()> {
    let backend = conn.backend()?;
    print_sets(&backend, &mut std::io::stdout()).await
}

pub(crate) async fn print_sets(backend: &dyn FlashcardBackend, out: &mut impl Write) -> Result<()> {
    let sets = backend.list_sets().await?;
    if sets.is_empty() {
        writeln!(out, "No flashcard sets yet. Create one with `quizme create`.")?;
        return Ok(());
    }
    for (i, name) in sets.iter().enumerate() {
        writeln!(out, "{:>3}. {name}", i + 1)?;
    }
    Ok(())
}

pub async fn show(conn: &Connection, name: String, json: bool) -> Result<()> {
    let backend = conn.backend()?;
    let set = backend.load_set(&name).await?;
    let mut out = std::io::stdout();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&set)?)?;
        return Ok(());
    }

    writeln!(out, "{} ({} cards)", set.name, set.content.len())?;
    for card in &set.content {
        writeln!(out, "  {} | {}", card.question, card.answer)?;
    }
    Ok(())
}

pub async fn clear(conn: &Connection) -> Result<()> {
    let backend = conn.backend()?;
    if backend.clear_sets().await? {
        println!("Cleared all flashcard sets.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizme_client::MockBackend;

    #[tokio::test]
    async fn create_then_print() {
        let backend = MockBackend::new();
        let mut out = Vec::new();
        create_set(&backend, "Capitals", "France|Paris\nPeru|Lima", &mut out)
            .await
            .unwrap();
        print_sets(&backend, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Created set 'Capitals' (2 cards)"));
        assert!(text.contains("  1. Capitals"));
    }

    #[tokio::test]
    async fn create_surfaces_server_message() {
        let backend = MockBackend::new();
        let err = create_set(&backend, "Bad", "no pipe", &mut Vec::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("separating front and back"));
    }

    #[tokio::test]
    async fn empty_input_rejected_locally() {
        let backend = MockBackend::new();
        assert!(create_set(&backend, "", "q|a", &mut Vec::new()).await.is_err());
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_listing() {
        let backend = MockBackend::new();
        let mut out = Vec::new();
        print_sets(&backend, &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No flashcard sets yet"));
    }
}

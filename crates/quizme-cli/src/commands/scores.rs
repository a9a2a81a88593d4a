//! The `quizme scores` and `clear-scores` commands.

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizme_core::model::ScoreRecord;
use quizme_core::traits::FlashcardBackend;

use super::Connection;

pub async fn list(conn: &Connection) -> Result<()> {
    let backend = conn.backend()?;
    let scores = backend.list_scores().await?;
    println!("{}", render_scores(&scores));
    Ok(())
}

pub async fn clear(conn: &Connection) -> Result<()> {
    let backend = conn.backend()?;
    if backend.clear_scores().await? {
        println!("Cleared all scores.");
    }
    Ok(())
}

/// Render scores as a table, or a short note when there are none.
pub(crate) fn render_scores(scores: &[ScoreRecord]) -> String {
    if scores.is_empty() {
        return "No scores saved yet.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["User", "Flashcard Set", "Score"]);
    for score in scores {
        table.add_row(vec![
            Cell::new(&score.username),
            Cell::new(&score.set_name),
            Cell::new(format!("{}%", score.percent)),
        ]);
    }
    table.to_string()
}

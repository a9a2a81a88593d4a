//! The `quizme init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizme.toml").exists() {
        println!("quizme.toml already exists, skipping.");
    } else {
        std::fs::write("quizme.toml", SAMPLE_CONFIG)?;
        println!("Created quizme.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizme serve");
    println!("  2. Run: quizme create --name Capitals --cards 'France|Paris'");
    println!("  3. Run: quizme practice --name Capitals");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizme configuration

# Server
host = "0.0.0.0"
port = 8088
cors = true

# Client
server_url = "http://localhost:8088"
request_timeout_secs = 10
"#;

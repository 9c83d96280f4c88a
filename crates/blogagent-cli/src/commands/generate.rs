use std::path::PathBuf;

use anyhow::{Context, Result};

use blogagent_client::{Config, GenerationClient};
use blogagent_core::{demo, FormInput, GenerationResult};

/// Run one generation and print (or save) the markdown.
///
/// Validation failures, transport failures, and backend errors all
/// surface as errors here; demo mode is the only path that fabricates
/// content locally, and it never contacts the backend.
pub async fn run_generate(
    config: &Config,
    input: FormInput,
    demo_mode: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let request = input.to_request()?;

    let result: GenerationResult = if demo_mode {
        log::info!("demo mode: fabricating placeholder content locally");
        demo::placeholder(&request)
    } else {
        let client = GenerationClient::new(&config.endpoint, config.timeout())
            .context("Failed to create HTTP client")?;
        log::info!(
            "requesting generation from {} (title: {:?})",
            config.endpoint,
            request.title
        );
        client.generate(&request).await?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &result.content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} bytes to {}", result.content.len(), path.display());
        }
        None => {
            println!("{}", result.content);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");

        let input = FormInput::new("Rust");
        run_generate(&Config::default(), input, true, Some(path.clone()))
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Rust"));
    }

    #[tokio::test]
    async fn test_blank_title_is_an_error() {
        let input = FormInput::new("  ");
        let result = run_generate(&Config::default(), input, true, None).await;
        assert!(result.is_err());
    }
}

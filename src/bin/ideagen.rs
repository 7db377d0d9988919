use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;

use idea_forge::client::{self, GeminiClient};
use idea_forge::config::Config;
use idea_forge::format::{DisplayLine, format_idea};
use idea_forge::prompt::IdeaRequest;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a startup idea from an industry and a trend", long_about = None)]
struct Args {
    /// Industry to build in (e.g. Food, Technology, Healthcare)
    #[arg(long)]
    industry: String,

    /// Trend to ride (e.g. AI, Sustainability, Remote Work)
    #[arg(long)]
    trend: String,

    /// Print the response text as-is, without styling
    #[arg(long)]
    raw: bool,

    /// Override the configured model for this run
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(model) = args.model {
        config.api.model = model;
    }

    tracing_subscriber::fmt()
        .with_env_filter(config.runtime.log_level.as_str())
        .with_ansi(false)
        .init();

    let Some(request) = IdeaRequest::new(args.industry, args.trend) else {
        anyhow::bail!("--industry and --trend must both be non-empty");
    };

    let client = GeminiClient::new(&config)?;
    let idea = client::generate_idea(&client, &request).await;

    if args.raw {
        println!("{}", idea);
        return Ok(());
    }

    // Color only when stdout is a terminal, so piped output stays clean
    let styled = std::io::stdout().is_terminal();
    for line in format_idea(&idea) {
        println!("{}", render_line(line, styled));
    }

    Ok(())
}

fn render_line(line: DisplayLine, styled: bool) -> String {
    match line {
        DisplayLine::Heading(text) => {
            if styled {
                format!("{}", text.bold().yellow())
            } else {
                text
            }
        }
        DisplayLine::Field { title, content } => {
            if content.is_empty() {
                if styled {
                    format!("{}", title.yellow())
                } else {
                    title
                }
            } else if styled {
                format!("{}: {}", title.yellow(), content)
            } else {
                format!("{}: {}", title, content)
            }
        }
        DisplayLine::Bullet(text) => {
            if styled {
                format!("  {} {}", "•".yellow(), text)
            } else {
                format!("  • {}", text)
            }
        }
        DisplayLine::Paragraph(text) => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering_carries_no_escape_codes() {
        let lines = format_idea("## Idea\nIndustry: Food\nKey Features:\n* Fast\nSome notes");
        for line in lines {
            let rendered = render_line(line, false);
            assert!(
                !rendered.contains('\x1b'),
                "escape code in plain output: {:?}",
                rendered
            );
        }
    }

    #[test]
    fn test_plain_rendering_keeps_text_and_layout() {
        assert_eq!(
            render_line(DisplayLine::Heading("Idea".to_string()), false),
            "Idea"
        );
        assert_eq!(
            render_line(
                DisplayLine::Field {
                    title: "Industry".to_string(),
                    content: "Food".to_string(),
                },
                false
            ),
            "Industry: Food"
        );
        assert_eq!(
            render_line(DisplayLine::Bullet("Fast".to_string()), false),
            "  • Fast"
        );
        assert_eq!(
            render_line(DisplayLine::Paragraph("Some notes".to_string()), false),
            "Some notes"
        );
    }

    #[test]
    fn test_styled_rendering_emits_escape_codes() {
        let rendered = render_line(DisplayLine::Heading("Idea".to_string()), true);
        assert!(rendered.contains("\x1b["));
        assert!(rendered.contains("Idea"));
    }
}

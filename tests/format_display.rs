//! End-to-end checks for the line classifier against reply-shaped text

use idea_forge::format::{DisplayLine, format_idea};

#[test]
fn test_reference_reply_classifies_in_order() {
    let text = "## Idea\nIndustry: Food\n* Fast\n* Cheap\nSome notes";
    let lines = format_idea(text);

    assert_eq!(
        lines,
        vec![
            DisplayLine::Heading("Idea".to_string()),
            DisplayLine::Field {
                title: "Industry".to_string(),
                content: "Food".to_string(),
            },
            DisplayLine::Bullet("Fast".to_string()),
            DisplayLine::Bullet("Cheap".to_string()),
            DisplayLine::Paragraph("Some notes".to_string()),
        ]
    );
}

#[test]
fn test_formatting_twice_yields_identical_output() {
    let text = "## Idea\n\nIndustry: Food\n* Fast\nclosing line\n";
    assert_eq!(format_idea(text), format_idea(text));
}

#[test]
fn test_line_count_and_order_are_preserved() {
    let text = "one\n## two\n* three\nFour: x\n\nsix";
    let lines = format_idea(text);
    assert_eq!(lines.len(), 6);

    // Reassemble the raw text from the classified lines; nothing may be
    // dropped or reordered
    let rebuilt: Vec<String> = lines
        .into_iter()
        .map(|line| match line {
            DisplayLine::Heading(text) => format!("## {}", text),
            DisplayLine::Field { title, content } => {
                if content.is_empty() {
                    title
                } else {
                    format!("{}: {}", title, content)
                }
            }
            DisplayLine::Bullet(text) => format!("* {}", text),
            DisplayLine::Paragraph(text) => text,
        })
        .collect();
    assert_eq!(rebuilt.join("\n"), text);
}

#[test]
fn test_full_template_shaped_reply() {
    let text = "## Startup Idea: PlateMate\n\
                Industry: Food\n\
                Trend: AI\n\
                Concept: Meal planning that learns your pantry.\n\
                Key Features:\n\
                * Pantry scanning\n\
                * Waste tracking\n\
                * Weekly menus\n\
                Target Audience:\n\
                * Busy families\n\
                * Budget cooks\n\
                Revenue Model:\n\
                * Subscriptions\n\
                * Grocery partnerships\n\
                One-Liner Pitch:\n\
                Your pantry, planned by AI.";
    let lines = format_idea(text);

    assert_eq!(
        lines[0],
        DisplayLine::Heading("Startup Idea: PlateMate".to_string())
    );
    assert_eq!(
        lines[1],
        DisplayLine::Field {
            title: "Industry".to_string(),
            content: "Food".to_string(),
        }
    );
    // Group headers like "Key Features:" carry no ": " separator, so the
    // colon stays in the title and the content is empty
    assert_eq!(
        lines[4],
        DisplayLine::Field {
            title: "Key Features:".to_string(),
            content: String::new(),
        }
    );
    assert_eq!(lines[5], DisplayLine::Bullet("Pantry scanning".to_string()));
    // The hyphen in "One-Liner" falls outside the field pattern, so this
    // group header degrades to a paragraph
    assert_eq!(
        lines[14],
        DisplayLine::Paragraph("One-Liner Pitch:".to_string())
    );
    assert_eq!(
        lines[15],
        DisplayLine::Paragraph("Your pantry, planned by AI.".to_string())
    );

    let bullets = lines
        .iter()
        .filter(|l| matches!(l, DisplayLine::Bullet(_)))
        .count();
    assert_eq!(bullets, 7);
}

#[test]
fn test_fallback_strings_render_as_paragraphs() {
    assert_eq!(
        format_idea("No idea generated."),
        vec![DisplayLine::Paragraph("No idea generated.".to_string())]
    );
    assert_eq!(
        format_idea("Error generating idea. Try again."),
        vec![DisplayLine::Paragraph(
            "Error generating idea. Try again.".to_string()
        )]
    );
}

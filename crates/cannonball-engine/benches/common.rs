// Shared by the bench targets in this directory; each one compiles it as
// its own module, so not every helper is used everywhere.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and `code`.\n\n- [ ] Task item\n\t- [x] Nested task\n- [?] Open question\n- Plain bullet\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {}\n\n", section));
        content.push_str(&generate_nested_content(depth, 2));
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    content.push_str(&format!(
        "{} Subsection Level {}\n\n",
        "#".repeat(current_level),
        current_level
    ));
    content.push_str("Some paragraph content with multiple sentences. This helps create realistic note structure.\n\n");

    // One task list per level, nested by tabs.
    for i in 0..3 {
        let indent = "\t".repeat((current_level - 2).min(3));
        content.push_str(&format!("{indent}- [ ] Task {i} at level {current_level}\n"));
    }
    content.push('\n');

    if current_level % 3 == 0 {
        content.push_str("- [d] Pick a venue\n\t- Option A\n\t- Option B\n\n");
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content
}

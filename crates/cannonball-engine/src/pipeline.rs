use serde::Serialize;

use crate::{
    classifier::{SemanticLabel, classify},
    context::{ContextWindow, extract_context},
    parsing::CursorPos,
    prompts::{render, system_prompt},
};

/// Everything needed for one completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptRequest {
    /// System turn.
    pub system: String,
    /// User turn: the label's template around the marked context.
    pub user: String,
    pub label: SemanticLabel,
    pub context: ContextWindow,
}

/// Runs the prompt-assembly pipeline for a cursor in `raw_text`.
///
/// The label comes from the line rules around the cursor in the whole
/// document; the context comes from the document tree. The cursor is moved
/// into the context's line numbering before the marker is inserted.
pub fn build_prompt(raw_text: &str, cursor: CursorPos, instruction: &str) -> PromptRequest {
    let label = classify(raw_text, cursor);
    let context = extract_context(raw_text, cursor);
    let user = render(label, &context.text, instruction, context.rebase(cursor));
    let system = system_prompt();

    log::debug!(
        "label {label} for cursor {}:{}, context starts at line {}",
        cursor.line,
        cursor.ch,
        context.first_line
    );
    log::debug!("system prompt:\n{system}");
    log::debug!("user prompt:\n{user}");

    PromptRequest {
        system,
        user,
        label,
        context,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::remove_cursor_marker;
    use pretty_assertions::assert_eq;

    const NOTE: &str = "# Trip\n\nSome intro text.\n\nMore words.\n\nEven more.\n\n- [ ] Book flights\n- [ ] Pack bags";

    #[test]
    fn task_list_end_to_end() {
        let request = build_prompt(NOTE, CursorPos::new(9, 15), "add packing tasks");
        assert_eq!(request.label, SemanticLabel::TaskList);
        assert_eq!(request.context.text, "- [ ] Book flights\n- [ ] Pack bags");
        assert_eq!(request.context.first_line, 8);
        assert!(
            request
                .user
                .contains("```markdown\n- [ ] Book flights\n- [ ] Pack bags<CURSOR>\n```")
        );
        assert!(request.user.contains("The user prompt is: add packing tasks"));
        assert!(request.user.contains("Format tasks using standard Markdown task syntax"));
        assert_eq!(request.system, system_prompt());
    }

    #[test]
    fn paragraph_gets_generic_template() {
        let request = build_prompt(NOTE, CursorPos::new(2, 4), "rephrase");
        assert_eq!(request.label, SemanticLabel::GenericText);
        assert_eq!(request.context.text, "Some intro text.");
        assert!(request.user.contains("Some<CURSOR> intro text."));
    }

    #[test]
    fn marker_removal_restores_context() {
        let request = build_prompt(NOTE, CursorPos::new(8, 3), "x");
        let start = request.user.find("```markdown\n").unwrap() + "```markdown\n".len();
        let end = request.user[start..].find("\n```").unwrap() + start;
        assert_eq!(
            remove_cursor_marker(&request.user[start..end]),
            request.context.text
        );
    }
}

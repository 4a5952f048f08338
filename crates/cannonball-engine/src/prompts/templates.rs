use serde::Serialize;

use crate::{classifier::SemanticLabel, parsing::CursorPos};

use super::marker::insert_cursor_marker;

/// The instruction shared by every request, whatever the label.
pub fn system_prompt() -> String {
    "\
You are a helpful AI assistant embedded in a note-taking application.
The user will provide a document with the current cursor position, indicated with \"<CURSOR>\",
and a user prompt.

Respond to the user prompt while considering the document content as context. Do not wrap your response in a
code fence. Do not repeat the entire document, just provide the relevant information or suggestions considering the
cursor position.

Your response will be inserted in the document verbatim at the <CURSOR> position. For example, if you are invoked in a
bullet point context, return additional bullet points (optionally with a preceding newline if required).
"
    .to_string()
}

/// A label's user-turn template: an intro line above the fenced document,
/// and formatting guidance below the user's instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptTemplate {
    pub label: SemanticLabel,
    pub intro: &'static str,
    pub guidance: &'static [&'static str],
}

const INSERTED_AT_CURSOR: &str = "Your response will be inserted at the <CURSOR> position.";

const GENERIC_TEXT: PromptTemplate = PromptTemplate {
    label: SemanticLabel::GenericText,
    intro: "The current document content is:",
    guidance: &[
        "Remember that your response will be inserted at the <CURSOR> position. Format your response appropriately for the context.",
    ],
};

const TASK_LIST: PromptTemplate = PromptTemplate {
    label: SemanticLabel::TaskList,
    intro: "The current document contains a task list:",
    guidance: &[
        "Focus on task management operations like creating new tasks, breaking down tasks, prioritizing, or marking tasks complete.",
        "Format tasks using standard Markdown task syntax: \"- [ ] Task description\"",
        "If the line at the cursor already starts with a checkbox such as \"- [ ] \", continue that line and do not repeat the checkbox.",
        "If the cursor is at the end of a line that already has content, begin your response with a newline.",
        "Keep the nesting and indentation level of the line at the cursor for every task you add.",
        INSERTED_AT_CURSOR,
    ],
};

const QUESTION: PromptTemplate = PromptTemplate {
    label: SemanticLabel::Question,
    intro: "The current document contains a question node marked with \"- [?]\":",
    guidance: &[
        "Focus on exploring the question: answer it where you can and list what still needs to be found out.",
        "Format your response as bullet points nested under the question.",
        INSERTED_AT_CURSOR,
    ],
};

const DECISION: PromptTemplate = PromptTemplate {
    label: SemanticLabel::Decision,
    intro: "The current document contains a decision node marked with \"- [d]\" or \"- [D]\":",
    guidance: &[
        "Focus on evaluating options for the decision and the trade-offs between them.",
        "Format options as bullet points nested under the decision, each with nested pros and cons bullets.",
        INSERTED_AT_CURSOR,
    ],
};

const BULLET_LIST: PromptTemplate = PromptTemplate {
    label: SemanticLabel::BulletList,
    intro: "The current document contains a bullet list:",
    guidance: &[
        "Structure your output as a bullet list that continues the list at the cursor.",
        "Format bullets using standard Markdown \"- \" syntax and match the indentation of the line at the cursor.",
        INSERTED_AT_CURSOR,
    ],
};

/// The template used for `label`.
pub fn template_for(label: SemanticLabel) -> PromptTemplate {
    match label {
        SemanticLabel::TaskList => TASK_LIST,
        SemanticLabel::Question => QUESTION,
        SemanticLabel::Decision => DECISION,
        SemanticLabel::BulletList => BULLET_LIST,
        SemanticLabel::GenericText => GENERIC_TEXT,
    }
}

impl PromptTemplate {
    /// Builds the user turn: `context` with the cursor marked, fenced as
    /// markdown, followed by the instruction and this template's guidance.
    pub fn render(&self, context: &str, instruction: &str, cursor: CursorPos) -> String {
        let marked = insert_cursor_marker(context, cursor);
        format!(
            "{intro}\n```markdown\n{marked}\n```\n\nThe user prompt is: {instruction}\n\n{guidance}\n",
            intro = self.intro,
            guidance = self.guidance.join("\n"),
        )
    }
}

/// Renders the user turn for `label`.
pub fn render(label: SemanticLabel, context: &str, instruction: &str, cursor: CursorPos) -> String {
    template_for(label).render(context, instruction, cursor)
}

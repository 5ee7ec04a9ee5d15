use crate::{context::DataSelection, ContextTag, DataSnapshot};
use serde_json::Value;

/// Persona and output format shared by every insight prompt.
pub const CORE_INSTRUCTION: &str = "\
You are a dedicated analytical assistant acting as the user's chief of staff. \
Study the data below and reply using exactly this structure:

### Analysis
Comment on patterns, deviations and achievements. Every statement must cite concrete figures, dates or names taken from the data.

### Next Steps
Give 2-3 concrete, actionable items as a bulleted list.

Do not add a greeting, an introduction or a closing summary. Output only the two sections above.";

/// Appended after the user question in answer prompts.
pub const ANSWER_INSTRUCTION: &str = "\
Answer the user's question directly, concisely and helpfully, using only the context and data above. \
Do not use the Analysis / Next Steps format for this reply.";

const EMPTY_DUMP: &str = "{}";

/// Build the insight prompt for `context` from the relevant parts of `data`.
///
/// Pure: the same arguments always give the same string.
#[must_use]
pub fn construct_prompt(context: &ContextTag, data: &DataSnapshot) -> String {
    let brief = context.brief();
    let dump = match brief.selection {
        DataSelection::Keys(keys) => keys
            .iter()
            .map(|key| format!("{key}:\n{}", render(data.get(key))))
            .collect::<Vec<_>>()
            .join("\n\n"),
        DataSelection::All => format!("Data:\n{}", render_all(data)),
    };

    [CORE_INSTRUCTION, &*brief.instruction, dump.as_str()].join("\n\n")
}

/// Build the prompt of a free-form question about `context`.
#[must_use]
pub fn construct_answer_prompt(question: &str, context: &ContextTag, data: &DataSnapshot) -> String {
    format!(
        "{}\n\nUser Question: \"{question}\"\n\n{ANSWER_INSTRUCTION}",
        construct_prompt(context, data)
    )
}

fn render(value: Option<&Value>) -> String {
    value
        .filter(|value| !value.is_null())
        .and_then(|value| serde_json::to_string_pretty(value).ok())
        .unwrap_or_else(|| EMPTY_DUMP.to_string())
}

fn render_all(data: &DataSnapshot) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| EMPTY_DUMP.to_string())
}

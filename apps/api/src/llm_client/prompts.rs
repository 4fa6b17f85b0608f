// Cross-cutting prompt fragments shared by every analysis prompt.

/// Appended to system messages so the reply is a bare JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with a single valid JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

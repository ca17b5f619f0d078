//! LLM prompt engineering for contract extraction

/// Builds prompts for the LLM to extract contract terms
pub struct PromptBuilder<'a> {
    text: &'a str,
    schema: Option<&'a serde_json::Value>,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(text: &'a str) -> Self {
        Self { text, schema: None }
    }

    /// Spell out the target schema in the prompt body
    pub fn with_schema(mut self, schema: &'a serde_json::Value) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        if let Some(schema) = self.schema {
            prompt.push_str("JSON Schema of the expected output:\n");
            prompt.push_str(
                &serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string()),
            );
            prompt.push_str("\n\n");
        }

        prompt.push_str("Contract text:\n");
        prompt.push_str("---\n");
        prompt.push_str(self.text.trim());
        prompt.push_str("\n---\n\n");

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are analyzing a legal contract for a software license and services deal.
Extract the contract's key terms into a single JSON object.

Rules:
- Use only information stated in the text; never invent values
- Use null for any scalar you cannot determine
- Use an empty array for any list with no entries
- Dates must be calendar dates in the format YYYY-MM-DD
- Monetary amounts are plain numbers; put the currency code in its own field
- Keep descriptive fields short and close to the contract's wording
- List each product, service, payment, penalty, SLA, deliverable and party as its own entry"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Remember: Return ONLY a valid JSON object, no markdown code blocks, no explanations.";

//! Prompt assembly for the simplification request.

use crate::models::DocumentType;

/// Headings the backend is asked to produce, in order.
pub const SECTION_HEADINGS: [&str; 3] = [
    "1. One-Sentence Summary",
    "2. Key Risks & Obligations",
    "3. Simplified Version (8th Grade Level)",
];

/// Build the full prompt for `legal_text`.
///
/// The text is embedded verbatim between `"""` fences; nothing is escaped.
pub fn build_prompt(legal_text: &str, document_type: DocumentType) -> String {
    format!(
        r#"You are an expert legal assistant specialized in simplifying complex legal documents for non-lawyers.
Your task is to analyze the following legal text from a "{document_type}" and provide a clear, concise, and easy-to-understand breakdown.

**Legal Text to Analyze:**
"""
{legal_text}
"""

**Instructions:**
Please format your response in Markdown and structure it into the following three distinct sections with the exact headings as shown below:

### {summary}
Provide a single, concise sentence that summarizes the core purpose and meaning of the provided legal text.

### {risks}
Identify and list up to 5 of the most important risks, responsibilities, or obligations for the primary user or signatory of this document. Use a bulleted list.

### {simplified}
Rewrite the entire legal text in simple, plain English, as if you were explaining it to someone with an 8th-grade reading level. Avoid jargon and complex sentence structures. Ensure the rewritten text is clear and easy to follow.
"#,
        document_type = document_type.label(),
        legal_text = legal_text,
        summary = SECTION_HEADINGS[0],
        risks = SECTION_HEADINGS[1],
        simplified = SECTION_HEADINGS[2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_document_type_and_text() {
        let prompt = build_prompt("The Licensee shall indemnify.", DocumentType::Nda);
        assert!(prompt.contains("legal text from a \"NDA\""));
        assert!(prompt.contains("\"\"\"\nThe Licensee shall indemnify.\n\"\"\""));
    }

    #[test]
    fn prompt_requests_all_three_sections() {
        let prompt = build_prompt("x", DocumentType::Other);
        for heading in SECTION_HEADINGS {
            assert!(prompt.contains(&format!("### {}", heading)), "{}", heading);
        }
        assert!(prompt.contains("up to 5"));
    }

    #[test]
    fn text_is_passed_through_unescaped() {
        let tricky = "{legal_text} \"\"\" ### 4. Injected <b>&</b>";
        let prompt = build_prompt(tricky, DocumentType::PrivacyPolicy);
        assert!(prompt.contains(tricky));
    }
}

//! Prompt templates for document segmentation

/// One-line system instruction sent ahead of every segmentation prompt
pub const SYSTEM_PROMPT: &str = "You are an AI that segments markdown documents into slides.";

/// Segmentation rules; `{target_sections}` is substituted before sending
const SEGMENT_RULES: &str = r#"You are an AI that segments markdown documents into presentation-ready sections. Follow these exact rules:

CONTENT PRESERVATION
- Split the document into exactly {target_sections} sections.
- Do **NOT** modify, rewrite, or remove **ANY** text.
- The sections must match the original document **exactly** when rejoined.
- **Preserve ALL markdown formatting**, including:
  - **Headings** (`#`, `##`, `**Bold**`)
  - **Lists** (`-`, `*`, numbered) **Do not split lists across sections**
  - **Code blocks** (```) **Treat code blocks as single units**
  - **Tables** (`| Column | Data |`) **Keep tables intact within the section**
  - **Links** (e.g., `[mistral.ai](http://mistral.ai)`)
  - **Whitespace and line breaks** (do not collapse spacing).

SECTION BOUNDARIES
- Each section must contain **ONE complete, coherent idea**.
- **Use headings (#, ##, **Bold**) as primary split points**.
- **NEVER split in the middle of:**
  - A **sentence** (ensures readability)
  - A **code block** (ensures proper function if it's a script)
  - A **list** (bulleted or numbered)
  - A **table** (maintains readability)
  - A **footnote**, **citation**, or **special markdown element** (e.g., blockquote)
- **If no headings exist**, segment based on **topic transitions** (logical paragraph shifts).
- **DO NOT create sections with only a heading and no content**.

LENGTH BALANCING
- Ensure sections are **roughly equal in length** while keeping ideas intact.
- **If too few major ideas:** **Combine smaller related sections**.
- **If too many ideas:** **Split larger sections at natural transition points** (e.g., a change in focus, a new example).
- **For documents with NO HEADINGS:**  
  - Identify **logical topic changes** and split accordingly.
  - **Do NOT arbitrarily break paragraphs**—each section must remain a self-contained idea.

OUTPUT FORMAT
- **Return ONLY a JSON array of strings:** `["section1", "section2", ...]`
- Each string should contain **the complete, unmodified section text.**
- **Preserve ALL original whitespace and markdown formatting.**
- **NO extra explanations, comments, or metadata—ONLY return the JSON.**

Now, process the following document:"#;

/// Prompt asking the model to split `document` into `target_sections` sections.
///
/// The count is not range-checked here; the document is embedded verbatim
/// after the rules.
pub fn segment_prompt(document: &str, target_sections: u32) -> String {
    format!(
        "{}\n\n{}\n",
        SEGMENT_RULES.replace("{target_sections}", &target_sections.to_string()),
        document
    )
}

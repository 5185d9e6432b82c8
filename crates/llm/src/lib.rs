//! slidesplit LLM integration
//!
//! Chat-completion client and model-driven document splitting

mod client;
mod llm_trait;
mod prompts;
mod splitter;
mod types;

pub use client::{api_error, first_choice_content, OpenAiClient};
pub use llm_trait::ChatClient;
pub use prompts::{segment_prompt, SYSTEM_PROMPT};
pub use splitter::{parse_sections, DocumentSplitter};
pub use types::{
    ApiErrorDetail, ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice,
    ResponseMessage, Role,
};

//! Mapping between abstraction types and Gemini types

use crate::llm::core::{
    config::GenerationConfig,
    error::LlmError,
    types::{ChatMessage, ChatRequest, ChatRole},
};

use super::types::{
    Content, GeminiGenerationConfig, GenerateContentRequest, GenerateContentResponse, Part,
    SystemInstruction,
};

/// Convert our abstraction request to Gemini's request format
pub fn to_gemini_request(request: ChatRequest) -> GenerateContentRequest {
    let mut contents = to_gemini_history(&request.history);
    contents.push(Content {
        role: "user".to_string(),
        parts: vec![Part::text(request.message)],
    });

    GenerateContentRequest {
        contents,
        system_instruction: Some(SystemInstruction {
            parts: vec![Part::text(request.system)],
        }),
        generation_config: Some(to_gemini_generation_config(request.config)),
    }
}

/// Map the transcript to Gemini contents, starting at the first user turn
///
/// Gemini rejects a conversation that opens with a model turn, so any leading
/// non-user entries are dropped.
pub fn to_gemini_history(history: &[ChatMessage]) -> Vec<Content> {
    history
        .iter()
        .skip_while(|m| m.role != ChatRole::User)
        .map(to_gemini_content)
        .collect()
}

/// Convert a message to Gemini's content format
fn to_gemini_content(message: &ChatMessage) -> Content {
    let role = match message.role {
        ChatRole::User => "user",
        ChatRole::Model | ChatRole::Assistant | ChatRole::System => "model",
    };

    Content {
        role: role.to_string(),
        parts: vec![Part::text(message.text.clone())],
    }
}

/// Convert generation config to Gemini's format
fn to_gemini_generation_config(config: GenerationConfig) -> GeminiGenerationConfig {
    GeminiGenerationConfig {
        temperature: config.temperature,
        max_output_tokens: config.max_tokens,
    }
}

/// Extract the reply text from a Gemini response
///
/// The text parts of the first candidate are concatenated.
pub fn from_gemini_response(response: GenerateContentResponse) -> Result<String, LlmError> {
    if let Some(error) = response.error {
        return Err(LlmError::ProviderError {
            message: error.message.unwrap_or_default(),
        });
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!("prompt blocked ({})", r))
            .unwrap_or_else(|| "response contained no candidates".to_string());
        return Err(LlmError::InvalidResponse(reason));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        if let Some(reason) = candidate.finish_reason.filter(|r| r != "STOP") {
            return Err(LlmError::InvalidResponse(format!(
                "response finished without text ({})",
                reason
            )));
        }
    }

    Ok(text)
}

//! # Smart Import Pipeline
//!
//! Turns a block of free text into knowledge entries: the LLM extracts 3–10
//! question/answer pairs as JSON, each surviving pair is auto-classified, and
//! the batch is inserted pair by pair. A parse failure is a recoverable
//! "nothing to import" outcome, and a single failed insert never aborts the
//! rest of the batch.

use crate::{
    classify::classify,
    errors::ProviderError,
    prompts::{QA_EXTRACTION_SYSTEM_PROMPT, QA_EXTRACTION_USER_PROMPT},
    providers::{ai::ChatProvider, db::SqliteProvider},
    types::{KnowledgeEntry, QaPair},
};
use tracing::{debug, info, warn};

/// Extraction needs more room than chat: 3–10 Thai Q&A pairs as a JSON array
/// can overrun a conversational cap and truncate into unparseable output.
const EXTRACTION_MAX_TOKENS: u32 = 2048;

/// Asks the LLM to extract question/answer pairs from `text`.
///
/// Returns an empty list when the response is not a valid JSON array; only
/// transport-level provider errors propagate.
pub async fn extract_qa_pairs(
    ai: &dyn ChatProvider,
    text: &str,
) -> Result<Vec<QaPair>, ProviderError> {
    let user_prompt = QA_EXTRACTION_USER_PROMPT.replace("{text}", text);
    let llm_response = ai
        .chat(
            QA_EXTRACTION_SYSTEM_PROMPT,
            &[],
            &user_prompt,
            EXTRACTION_MAX_TOKENS,
        )
        .await?;
    debug!("LLM extraction response: {}", llm_response);

    let cleaned_response = llm_response
        .trim()
        .strip_prefix("```json")
        .or_else(|| llm_response.trim().strip_prefix("```"))
        .unwrap_or(llm_response.trim())
        .strip_suffix("```")
        .unwrap_or(llm_response.trim())
        .trim();

    let pairs: Vec<QaPair> = match serde_json::from_str(cleaned_response) {
        Ok(pairs) => pairs,
        Err(e) => {
            warn!("Failed to parse Q&A extraction response, treating as zero extractions. Error: {e}");
            return Ok(Vec::new());
        }
    };

    Ok(pairs
        .into_iter()
        .filter(|p| !p.question.trim().is_empty() && !p.answer.trim().is_empty())
        .collect())
}

/// Runs the full Smart Import pipeline and returns the inserted entries.
///
/// Each pair is classified with empty caller metadata so the classifier always
/// runs. Per-pair insert failures are logged and skipped.
pub async fn run_smart_import(
    store: &SqliteProvider,
    ai: &dyn ChatProvider,
    text: &str,
) -> Result<Vec<KnowledgeEntry>, ProviderError> {
    let pairs = extract_qa_pairs(ai, text).await?;
    info!("Smart import extracted {} Q&A pairs.", pairs.len());

    let mut inserted = Vec::new();
    for pair in pairs {
        let classification = classify(&pair.question, &pair.answer);
        match store
            .insert_knowledge(
                &pair.question,
                &pair.answer,
                &classification.keywords,
                &classification.category,
            )
            .await
        {
            Ok(entry) => inserted.push(entry),
            Err(e) => warn!("Failed to insert extracted Q&A pair, skipping: {e}"),
        }
    }

    info!("Smart import stored {} knowledge entries.", inserted.len());
    Ok(inserted)
}

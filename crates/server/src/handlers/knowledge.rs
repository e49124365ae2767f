use crate::{auth::is_staff_session, errors::AppError, state::AppState};
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use schoolchat::{
    classify::{build_keywords, detect_category, is_auto_category},
    ingest::run_smart_import,
    types::KnowledgeEntry,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

// --- API Payloads ---

#[derive(Deserialize, Debug)]
pub struct KnowledgeUpsertRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct DeleteParams {
    pub id: i64,
}

#[derive(Deserialize, Debug)]
pub struct SmartImportRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct SmartImportResponse {
    pub ok: bool,
    pub items: Vec<KnowledgeEntry>,
    pub count: usize,
}

/// Resolves caller-supplied metadata: explicit values are kept, sentinel or
/// blank values trigger the classifier.
fn resolve_metadata(
    question: &str,
    answer: &str,
    keywords: Option<&str>,
    category: Option<&str>,
) -> (String, String) {
    let final_category = if is_auto_category(category) {
        detect_category(question, answer).to_string()
    } else {
        category.unwrap_or_default().trim().to_string()
    };
    let final_keywords = match keywords {
        Some(kw) if !kw.trim().is_empty() => kw.to_string(),
        _ => build_keywords(&final_category, question, answer),
    };
    (final_category, final_keywords)
}

// --- Handlers ---

/// Handler for `GET /api/admin/knowledge`.
pub async fn list_knowledge_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    if !is_staff_session(&headers) {
        return Err(AppError::Unauthorized);
    }
    let knowledge = app_state.store.list_all_knowledge().await?;
    Ok(Json(json!({ "ok": true, "knowledge": knowledge })))
}

/// Handler for `POST /api/admin/knowledge` (manual entry).
pub async fn create_knowledge_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<KnowledgeUpsertRequest>,
) -> Result<Json<Value>, AppError> {
    if !is_staff_session(&headers) {
        return Err(AppError::Unauthorized);
    }
    if payload.question.trim().is_empty() || payload.answer.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Question and answer are required".to_string(),
        ));
    }

    let (category, keywords) = resolve_metadata(
        &payload.question,
        &payload.answer,
        payload.keywords.as_deref(),
        payload.category.as_deref(),
    );
    let entry = app_state
        .store
        .insert_knowledge(&payload.question, &payload.answer, &keywords, &category)
        .await?;
    info!(id = entry.id, category = %entry.category, "Created knowledge entry");
    Ok(Json(json!({ "ok": true, "id": entry.id })))
}

/// Handler for `PUT /api/admin/knowledge`.
pub async fn update_knowledge_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<KnowledgeUpsertRequest>,
) -> Result<Json<Value>, AppError> {
    if !is_staff_session(&headers) {
        return Err(AppError::Unauthorized);
    }
    let Some(id) = payload.id else {
        return Err(AppError::BadRequest(
            "ID, question and answer are required".to_string(),
        ));
    };
    if payload.question.trim().is_empty() || payload.answer.trim().is_empty() {
        return Err(AppError::BadRequest(
            "ID, question and answer are required".to_string(),
        ));
    }

    let (category, keywords) = resolve_metadata(
        &payload.question,
        &payload.answer,
        payload.keywords.as_deref(),
        payload.category.as_deref(),
    );
    app_state
        .store
        .update_knowledge(id, &payload.question, &payload.answer, &keywords, &category)
        .await?;
    Ok(Json(json!({ "ok": true })))
}

/// Handler for `DELETE /api/admin/knowledge?id=N`.
pub async fn delete_knowledge_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Value>, AppError> {
    if !is_staff_session(&headers) {
        return Err(AppError::Unauthorized);
    }
    app_state.store.delete_knowledge(params.id).await?;
    Ok(Json(json!({ "ok": true })))
}

/// Handler for `POST /api/admin/knowledge/smart-import`.
///
/// Zero extracted pairs is a user-facing failure, not an exception: the
/// client is asked to add more detail. Upstream LLM errors are folded into
/// the same outcome.
pub async fn smart_import_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SmartImportRequest>,
) -> Result<Json<SmartImportResponse>, AppError> {
    if !is_staff_session(&headers) {
        return Err(AppError::Unauthorized);
    }
    if payload.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text is required".to_string()));
    }

    let items = match &app_state.ai_provider {
        Some(ai) => match run_smart_import(&app_state.store, ai.as_ref(), &payload.text).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Smart import extraction failed: {e}");
                Vec::new()
            }
        },
        None => {
            warn!("Smart import requested but no chat provider is configured.");
            Vec::new()
        }
    };

    if items.is_empty() {
        return Err(AppError::BadRequest(
            "ไม่สามารถแปลงข้อความเป็น Q&A ได้ กรุณาลองใหม่หรือเพิ่มเนื้อหาให้มากขึ้น".to_string(),
        ));
    }

    let count = items.len();
    Ok(Json(SmartImportResponse {
        ok: true,
        items,
        count,
    }))
}

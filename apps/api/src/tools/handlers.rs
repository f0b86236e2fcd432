use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tools::{call_tool, tool_descriptors, ToolDescriptor};

#[derive(Debug, Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Serialize)]
pub struct ToolCallResponse {
    pub call_id: Uuid,
    pub tool: String,
    pub content: String,
}

/// GET /api/v1/tools
pub async fn handle_list_tools() -> Json<Vec<ToolDescriptor>> {
    Json(tool_descriptors())
}

/// POST /api/v1/tools/call
pub async fn handle_call_tool(
    State(state): State<AppState>,
    Json(req): Json<ToolCallRequest>,
) -> Result<Json<ToolCallResponse>, AppError> {
    let call_id = Uuid::new_v4();
    let span = info_span!("tool_call", %call_id, tool = %req.name);
    let content = call_tool(&state, &req.name, req.arguments)
        .instrument(span)
        .await?;

    Ok(Json(ToolCallResponse {
        call_id,
        tool: req.name,
        content,
    }))
}

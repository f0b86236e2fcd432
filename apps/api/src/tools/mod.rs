//! Tool surface: the two operations a host agent can call.
//!
//! Tool outputs are always strings. Only a request that names an unknown tool or
//! carries unusable arguments becomes an `AppError`.

pub mod handlers;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::notify::send_notification;
use crate::resume::query_resume;
use crate::state::AppState;

pub const QUERY_RESUME: &str = "query_resume";
pub const SEND_NOTIFICATION: &str = "send_notification";

/// Name, description and JSON Schema of a callable tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Deserialize)]
struct QueryResumeArgs {
    question: String,
}

#[derive(Debug, Deserialize)]
struct SendNotificationArgs {
    recipient: String,
    subject: String,
    body: String,
}

pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: QUERY_RESUME,
            description: "Answer a free-text question about the resume (experience, education, \
                          projects, skills, certificates, publications, achievements, references, \
                          contact details).",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "question": {"type": "string"}
                },
                "required": ["question"]
            }),
        },
        ToolDescriptor {
            name: SEND_NOTIFICATION,
            description: "Send a plain-text email and report whether delivery succeeded.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "recipient": {"type": "string"},
                    "subject": {"type": "string"},
                    "body": {"type": "string"}
                },
                "required": ["recipient", "subject", "body"]
            }),
        },
    ]
}

/// Runs the named tool with JSON `arguments` and returns its text output.
pub async fn call_tool(state: &AppState, name: &str, arguments: Value) -> Result<String, AppError> {
    match name {
        QUERY_RESUME => {
            let args: QueryResumeArgs = parse_args(name, arguments)?;
            Ok(query_resume(&state.resume, &state.keywords, &args.question))
        }
        SEND_NOTIFICATION => {
            let args: SendNotificationArgs = parse_args(name, arguments)?;
            Ok(send_notification(
                state.mailer.as_ref(),
                &args.recipient,
                &args.subject,
                &args.body,
            )
            .await)
        }
        other => Err(AppError::NotFound(format!("Unknown tool '{other}'"))),
    }
}

fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, AppError> {
    serde_json::from_value(arguments)
        .map_err(|e| AppError::Validation(format!("Invalid arguments for '{tool}': {e}")))
}

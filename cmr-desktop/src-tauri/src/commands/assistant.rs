use tauri::State;

use cmr_core::assistant::{ChatMessage, PREDEFINED_PROMPTS, REPLY_DELAY};

use crate::app::AppState;

#[tauri::command]
pub async fn list_chat_messages(state: State<'_, AppState>) -> Result<Vec<ChatMessage>, String> {
    Ok(state.assistant.lock().await.messages().to_vec())
}

/// Sends a message and returns the scripted reply after the simulated
/// thinking delay. Blank input is ignored.
#[tauri::command]
pub async fn send_chat_message(
    content: String,
    state: State<'_, AppState>,
) -> Result<Option<ChatMessage>, String> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    // The delay runs outside the transcript lock.
    tokio::time::sleep(REPLY_DELAY).await;

    Ok(state.assistant.lock().await.send(&content))
}

/// Resets the transcript and returns the fresh greeting.
#[tauri::command]
pub async fn clear_chat(state: State<'_, AppState>) -> Result<Vec<ChatMessage>, String> {
    let mut assistant = state.assistant.lock().await;
    assistant.clear();
    Ok(assistant.messages().to_vec())
}

/// The quick prompts offered above the input box.
#[tauri::command]
pub async fn quick_prompts() -> Result<Vec<String>, String> {
    Ok(PREDEFINED_PROMPTS.iter().map(|p| p.to_string()).collect())
}

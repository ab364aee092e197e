//! Clipboard Helpers
//!
//! Browser clipboard access for card actions.

use wasm_bindgen_futures::JsFuture;

use board_core::TaskId;

/// Text placed on the clipboard by a card's copy-id action
pub fn task_id_text(id: &TaskId) -> String {
    format!("Task ID: {}", id)
}

/// Write `text` to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard write failed: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_text() {
        assert_eq!(task_id_text(&TaskId::from("t3")), "Task ID: t3");
        assert_eq!(task_id_text(&TaskId::from("1700000000000")), "Task ID: 1700000000000");
    }
}

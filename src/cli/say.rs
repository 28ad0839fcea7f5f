//! TUI-less "say" command

use std::error::Error;

use crate::core::controller::ConversationController;

/// Send one prompt and return the reply, or the user-facing error text.
pub async fn say_once(
    controller: &mut ConversationController,
    prompt: &str,
) -> Result<String, String> {
    if !controller.submit(prompt).await {
        return Err("Nothing to send".to_string());
    }

    let state = controller.state();
    if !state.error().is_empty() {
        return Err(state.error().to_string());
    }

    state
        .messages()
        .last()
        .filter(|message| message.is_assistant())
        .map(|message| message.content.clone())
        .ok_or_else(|| "No reply received".to_string())
}

pub async fn run_say(
    prompt: Vec<String>,
    mut controller: ConversationController,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: nimdie say <prompt>");
        std::process::exit(1);
    }

    match say_once(&mut controller, &prompt).await {
        Ok(reply) => {
            println!("{reply}");
            Ok(())
        }
        Err(message) => {
            eprintln!("❌ Error: {message}");
            std::process::exit(1);
        }
    }
}

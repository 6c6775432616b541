use super::message_input_state::MessageInputState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    running: bool,
    message_input: MessageInputState,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            running: true,
            message_input: MessageInputState::default(),
        }
    }
}

impl FormState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn message_input(&self) -> &MessageInputState {
        &self.message_input
    }

    pub fn message_input_mut(&mut self) -> &mut MessageInputState {
        &mut self.message_input
    }
}

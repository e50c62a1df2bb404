use rps_gameroom::*;

/// Prints room events to stdout, either as prose or as JSON lines.
#[derive(Debug, Default)]
pub struct Console {
    json: bool,
}

impl Console {
    pub fn json() -> Self {
        Self { json: true }
    }
    /// The line this console would print for `event`.
    pub fn render(&self, event: &Event) -> String {
        match self.json {
            false => event.to_string(),
            true => Message::from(event)
                .to_json()
                .unwrap_or_else(|e| format!("{{\"type\":\"error\",\"reason\":\"{}\"}}", e)),
        }
    }
}

#[async_trait::async_trait]
impl Observer for Console {
    async fn notify(&mut self, event: &Event) {
        println!("{}", self.render(event));
    }
}

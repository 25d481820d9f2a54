use console::style;

/// Operator-facing console messages
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✅").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("Error:").red().bold(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

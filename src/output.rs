use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(success: usize, skipped: usize, failure: usize) -> Self {
        match (success, skipped, failure) {
            (_, _, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} installed, {} failed", success.green(), f.red()),
            },
            (s, _, _) if s > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} component(s) installed", s.green()),
            },
            (_, k, _) if k > 0 => Self {
                prefix: "•".yellow().to_string(),
                message: format!("No components installed ({} skipped)", k.yellow()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No components requested".to_string(),
            },
        }
    }
}

//! Minimal PGN writer: ordered header tags plus an annotated movetext.

/// One applied move: canonical SAN plus an optional `{...}` comment.
#[derive(Debug, Clone)]
pub struct AnnotatedMove {
    pub san: String,
    pub comment: Option<String>,
}

/// A finished game ready for serialization. Headers render in insertion
/// order; the movetext ends with the Result tag's value (or `*`).
#[derive(Debug, Clone)]
pub struct PgnGame {
    headers: Vec<(String, String)>,
    moves: Vec<AnnotatedMove>,
}

impl PgnGame {
    pub fn from_moves(moves: Vec<AnnotatedMove>) -> Self {
        Self {
            headers: Vec::new(),
            moves,
        }
    }

    /// Set a header tag, replacing any existing value for the same tag.
    pub fn set_header(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.headers.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.headers.push((key.to_string(), value.to_string()));
        }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize to PGN text: one `[Tag "Value"]` line per header, a blank
    /// line, then the movetext on a single line. No trailing newline, so
    /// callers control inter-game separation.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.headers {
            out.push_str(&format!("[{} \"{}\"]\n", key, escape_tag_value(value)));
        }
        out.push('\n');

        let mut tokens: Vec<String> = Vec::new();
        for (i, mv) in self.moves.iter().enumerate() {
            // Move numbers precede white's move only
            if i % 2 == 0 {
                tokens.push(format!("{}.", i / 2 + 1));
            }
            tokens.push(mv.san.clone());
            if let Some(comment) = &mv.comment {
                tokens.push(format!("{{{comment}}}"));
            }
        }
        tokens.push(self.header("Result").unwrap_or("*").to_string());

        out.push_str(&tokens.join(" "));
        out
    }
}

/// Backslash and quote must be escaped inside a PGN tag value.
fn escape_tag_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

//! Slash-command parsing.

/// A parsed `/name[@bot] [args]` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Lowercased command name without the leading slash.
    pub name: String,
    /// Bot username after `@`, if the command was addressed explicitly.
    pub mention: Option<String>,
    /// Remaining text after the command token, trimmed.
    pub args: String,
}

impl Command {
    /// Parses a message text. Returns `None` unless the text starts with `/` at offset 0.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix('/')?;

        let (token, args) = match rest.split_once(char::is_whitespace) {
            Some((token, args)) => (token, args.trim()),
            None => (rest, ""),
        };

        let (name, mention) = match token.split_once('@') {
            Some((name, mention)) => (name, Some(mention.to_string())),
            None => (token, None),
        };

        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_lowercase(),
            mention,
            args: args.to_string(),
        })
    }

    /// True unless the command names a different bot than `bot_username`. Unknown own username accepts everything.
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (&self.mention, bot_username) {
            (Some(mention), Some(own)) => mention.eq_ignore_ascii_case(own),
            _ => true,
        }
    }
}

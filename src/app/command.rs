use crate::search::SubstituteMode;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every line with its number
    Display,
    /// Insert text so it becomes line n
    Insert(usize, String),
    /// Delete line n
    Delete(usize),
    /// Overwrite line n
    Replace(usize, String),
    /// Add a line at the end
    Append(String),
    /// List lines matching a regex
    Search(String),
    /// Regex substitution, first matching line or every line
    Substitute {
        pattern: String,
        replacement: String,
        mode: SubstituteMode,
    },
    /// Copy an inclusive line range to the clipboard
    Copy(usize, usize),
    /// Paste the clipboard before a line. The line number is kept as typed
    /// and parsed after the clipboard is checked for content.
    Paste(String),
    /// Write the buffer to disk
    Save,
    /// Leave, offering to save unsaved changes
    Quit,
    /// Show the command reference
    Help,
}

/// Input that could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid line number: {0}")]
    InvalidLineNumber(String),

    #[error("Invalid line numbers")]
    InvalidLineNumbers,

    #[error("Unknown command: {0} (type 'help' for commands)")]
    UnknownCommand(String),
}

pub const USAGE: &str = "\
linedit - line-oriented file editor

USAGE:
    linedit <filename>

COMMANDS:
    display, d                   - Display file contents
    insert <line> <text>         - Insert text at line number
    delete <line>                - Delete line number
    replace <line> <text>        - Replace line with text
    append <text>                - Append text to end of file
    search <pattern>             - Search for regex pattern
    substitute <pattern> <repl>  - Replace matches on the first matching line
    global <pattern> <repl>      - Replace matches on every line
    copy <start> <end>           - Copy lines to clipboard
    paste <line>                 - Paste clipboard at line
    save, w                      - Save file
    quit, q                      - Quit (asks to save unsaved changes)
    help, h                      - Show this help

EXAMPLES:
    insert 5 Hello World         - Insert \"Hello World\" at line 5
    delete 10                    - Delete line 10
    search func.*main            - Find lines matching regex
    substitute old new           - Replace \"old\" on the first line containing it
    global TODO DONE             - Replace all \"TODO\" with \"DONE\"
";

impl Command {
    /// Parse one line of input.
    ///
    /// Returns `Ok(None)` for blank input. Tokens are whitespace separated;
    /// free text arguments are the remaining tokens joined by single spaces.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for unknown commands, wrong argument counts,
    /// or line numbers that are not non-negative integers.
    pub fn parse(input: &str) -> Result<Option<Self>, ParseError> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((&name, args)) = parts.split_first() else {
            return Ok(None);
        };

        let command = match name {
            "display" | "d" => Self::Display,
            "insert" => {
                let [line, text @ ..] = args else {
                    return Err(ParseError::Usage("insert <line> <text>"));
                };
                if text.is_empty() {
                    return Err(ParseError::Usage("insert <line> <text>"));
                }
                Self::Insert(parse_line(line)?, text.join(" "))
            }
            "delete" => {
                let [line] = args else {
                    return Err(ParseError::Usage("delete <line>"));
                };
                Self::Delete(parse_line(line)?)
            }
            "replace" => {
                let [line, text @ ..] = args else {
                    return Err(ParseError::Usage("replace <line> <text>"));
                };
                if text.is_empty() {
                    return Err(ParseError::Usage("replace <line> <text>"));
                }
                Self::Replace(parse_line(line)?, text.join(" "))
            }
            "append" => {
                if args.is_empty() {
                    return Err(ParseError::Usage("append <text>"));
                }
                Self::Append(args.join(" "))
            }
            "search" => {
                let [pattern] = args else {
                    return Err(ParseError::Usage("search <pattern>"));
                };
                Self::Search((*pattern).to_string())
            }
            "substitute" | "global" => {
                let [pattern, replacement] = args else {
                    return Err(ParseError::Usage(if name == "global" {
                        "global <pattern> <replacement>"
                    } else {
                        "substitute <pattern> <replacement>"
                    }));
                };
                Self::Substitute {
                    pattern: (*pattern).to_string(),
                    replacement: (*replacement).to_string(),
                    mode: if name == "global" {
                        SubstituteMode::Global
                    } else {
                        SubstituteMode::First
                    },
                }
            }
            "copy" => {
                let [start, end] = args else {
                    return Err(ParseError::Usage("copy <start> <end>"));
                };
                match (start.parse(), end.parse()) {
                    (Ok(start), Ok(end)) => Self::Copy(start, end),
                    _ => return Err(ParseError::InvalidLineNumbers),
                }
            }
            "paste" => {
                let [line] = args else {
                    return Err(ParseError::Usage("paste <line>"));
                };
                Self::Paste((*line).to_string())
            }
            "save" | "w" => Self::Save,
            "quit" | "q" => Self::Quit,
            "help" | "h" => Self::Help,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

pub(crate) fn parse_line(token: &str) -> Result<usize, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidLineNumber(token.to_string()))
}

// Copyright (C) Brian G. Milnes 2025

//! Balanced-parenthesis argument extraction
//!
//! Purely lexical: every `(` and `)` counts, including ones inside string
//! literals or comments of the host language.

pub mod extractor {

    /// Argument of one call plus the input offset just past its closing paren
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Extracted<'a> {
        pub argument: &'a str,
        pub next: usize,
    }

    /// Text ended before the opening parenthesis was matched
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Unbalanced {
        /// Offset the scan started from
        pub from: usize,
        /// Depth still open when the text ran out
        pub depth: usize,
    }

    impl std::fmt::Display for Unbalanced {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "unbalanced parentheses: {} still open at end of text (scan started at offset {})",
                self.depth, self.from
            )
        }
    }

    impl std::error::Error for Unbalanced {}

    /// Scan from just past an opening parenthesis to its matching closer.
    ///
    /// Returns the trimmed inner expression and the offset just past the
    /// closer. Parentheses are ASCII, so byte offsets found here always fall
    /// on char boundaries.
    pub fn extract(text: &str, after_open: usize) -> Result<Extracted<'_>, Unbalanced> {
        let bytes = text.as_bytes();
        let mut depth: usize = 1;
        let mut pos = after_open;

        while pos < bytes.len() {
            match bytes[pos] {
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(Extracted {
                            argument: text[after_open..pos].trim(),
                            next: pos + 1,
                        });
                    }
                }
                _ => {}
            }
            pos += 1;
        }

        Err(Unbalanced { from: after_open, depth })
    }
}

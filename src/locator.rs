// Copyright (C) Brian G. Milnes 2025

//! Call-site location for the deprecated `withOpacity` call head

pub mod locator {
    use anyhow::{Context, Result};
    use regex::Regex;

    /// The deprecated call head, up to and including its opening parenthesis
    pub const CALL_HEAD: &str = ".withOpacity(";

    /// Half-open byte range `[start, end)` of one call head occurrence
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MatchSpan {
        pub start: usize,
        pub end: usize,
    }

    /// Finds call heads in raw text. Holds the compiled head pattern.
    #[derive(Debug, Clone)]
    pub struct CallSiteLocator {
        head: Regex,
    }

    impl CallSiteLocator {
        /// Locator for the default `.withOpacity(` head
        pub fn new() -> Result<Self> {
            Self::for_head(CALL_HEAD)
        }

        /// Locator for an arbitrary literal head. The head must end with `(`
        /// so that the match end sits just past the opening parenthesis.
        pub fn for_head(head: &str) -> Result<Self> {
            if !head.ends_with('(') {
                anyhow::bail!("call head must end with '(': {head:?}");
            }
            let head = Regex::new(&regex::escape(head))
                .with_context(|| format!("Failed to compile call head pattern {head:?}"))?;
            Ok(CallSiteLocator { head })
        }

        /// Next call head at or after `from`, or None
        pub fn locate(&self, text: &str, from: usize) -> Option<MatchSpan> {
            if from > text.len() {
                return None;
            }
            self.head.find_at(text, from).map(|m| MatchSpan {
                start: m.start(),
                end: m.end(),
            })
        }
    }
}

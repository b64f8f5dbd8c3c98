// Copyright (C) Brian G. Milnes 2025

//! Single left-to-right rewrite pass over one file's text
//!
//! The pass is a small state machine:
//! - Scanning: look for the next call head from the cursor
//! - Extracting: balance the call's parentheses and emit the replacement
//! - Copying: copy the tail of the input verbatim, then stop
//!
//! The cursor always indexes the input, never the output.

pub mod file_rewriter {
    use anyhow::Result;
    use crate::extractor::extractor::{extract, Unbalanced};
    use crate::locator::locator::{CallSiteLocator, MatchSpan};
    use crate::rewriter::rewriter::rewrite;

    /// How a pass ended
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PassEnd {
        /// No further call heads
        Done { changed: bool },
        /// A call head at `at` had no matching closer; everything from `at`
        /// onward was copied verbatim. `line` is 1-based.
        Aborted { changed: bool, at: usize, line: usize, reason: Unbalanced },
    }

    impl PassEnd {
        pub fn changed(&self) -> bool {
            match *self {
                PassEnd::Done { changed } | PassEnd::Aborted { changed, .. } => changed,
            }
        }
    }

    /// Result of rewriting one file's text
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RewriteOutcome {
        pub text: String,
        pub replacements: usize,
        pub end: PassEnd,
    }

    impl RewriteOutcome {
        pub fn changed(&self) -> bool {
            self.end.changed()
        }

        /// Input offset of the call head that could not be balanced, if any
        pub fn unbalanced_at(&self) -> Option<usize> {
            match self.end {
                PassEnd::Aborted { at, .. } => Some(at),
                PassEnd::Done { .. } => None,
            }
        }

        pub fn unbalanced_line(&self) -> Option<usize> {
            match self.end {
                PassEnd::Aborted { line, .. } => Some(line),
                PassEnd::Done { .. } => None,
            }
        }

        /// Why the pass stopped early, if it did
        pub fn unbalanced(&self) -> Option<&Unbalanced> {
            match &self.end {
                PassEnd::Aborted { reason, .. } => Some(reason),
                PassEnd::Done { .. } => None,
            }
        }
    }

    #[derive(Debug, Clone, Copy)]
    enum State {
        Scanning,
        Extracting(MatchSpan),
        Copying { from: usize, aborted: Option<Unbalanced> },
    }

    /// Drives the rewrite pass. Reusable across files; holds no per-file state.
    #[derive(Debug, Clone)]
    pub struct FileRewriter {
        locator: CallSiteLocator,
    }

    impl FileRewriter {
        pub fn new() -> Result<Self> {
            Ok(FileRewriter { locator: CallSiteLocator::new()? })
        }

        pub fn with_locator(locator: CallSiteLocator) -> Self {
            FileRewriter { locator }
        }

        pub fn rewrite(&self, source: &str) -> RewriteOutcome {
            let mut out = String::with_capacity(source.len());
            let mut cursor = 0;
            let mut replacements = 0;
            let mut state = State::Scanning;

            loop {
                state = match state {
                    State::Scanning => match self.locator.locate(source, cursor) {
                        None => State::Copying { from: cursor, aborted: None },
                        Some(span) => {
                            out.push_str(&source[cursor..span.start]);
                            State::Extracting(span)
                        }
                    },
                    State::Extracting(span) => match extract(source, span.end) {
                        Ok(extracted) => {
                            out.push_str(&rewrite(extracted.argument));
                            replacements += 1;
                            cursor = extracted.next;
                            State::Scanning
                        }
                        Err(reason) => State::Copying { from: span.start, aborted: Some(reason) },
                    },
                    State::Copying { from, aborted } => {
                        out.push_str(&source[from..]);
                        let changed = replacements > 0;
                        let end = match aborted {
                            Some(reason) => PassEnd::Aborted {
                                changed,
                                at: from,
                                line: line_of_offset(source, from),
                                reason,
                            },
                            None => PassEnd::Done { changed },
                        };
                        return RewriteOutcome { text: out, replacements, end };
                    }
                };
            }
        }
    }

    /// 1-based line containing byte `offset`
    pub fn line_of_offset(text: &str, offset: usize) -> usize {
        let end = offset.min(text.len());
        text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
    }

    /// Rewrite with the default `.withOpacity(` locator
    pub fn rewrite_source(source: &str) -> Result<RewriteOutcome> {
        Ok(FileRewriter::new()?.rewrite(source))
    }
}

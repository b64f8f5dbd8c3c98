// Copyright (C) Brian G. Milnes 2025

//! Replacement text for one extracted `withOpacity` argument

pub mod rewriter {

    /// `.withAlpha((<expr> * 255).round())` with `expr` embedded unmodified
    pub fn rewrite(expr: &str) -> String {
        format!(".withAlpha(({expr} * 255).round())")
    }
}

// Copyright (C) Brian G. Milnes 2025

//! Tests for replacement text

use alphafix::rewrite;

#[test]
fn test_rewrite_literal() {
    assert_eq!(rewrite("0.5"), ".withAlpha((0.5 * 255).round())");
}

#[test]
fn test_rewrite_embeds_expression_unmodified() {
    assert_eq!(
        rewrite("a + (b * c)"),
        ".withAlpha((a + (b * c) * 255).round())"
    );
    assert_eq!(
        rewrite("widget.opacity ?? 1.0"),
        ".withAlpha((widget.opacity ?? 1.0 * 255).round())"
    );
}

//! Text normalization for the base-14 Helvetica faces
//!
//! The standard PDF fonts only cover WinAnsi, and several glyphs that content
//! authors love (arrows, smart quotes, the pound sign) either fall outside it or
//! render inconsistently across viewers. Everything drawn onto a page goes
//! through [`sanitize`] first.

/// Normalize typographic characters to a font-safe ASCII subset and trim.
///
/// None of the replacements produce a character that is itself replaced, so
/// the function is idempotent.
///
/// ```rust
/// use investor_summary::sanitize;
///
/// assert_eq!(sanitize("Revenue → £100 — up 10×"), "Revenue -> GBP 100 - up 10x");
/// ```
pub fn sanitize(text: &str) -> String {
    let decoded = text.replace("&lt;", "<").replace("&gt;", ">");

    let mut out = String::with_capacity(decoded.len());
    for ch in decoded.chars() {
        match ch {
            '→' => out.push_str("->"),
            '←' => out.push_str("<-"),
            '•' => out.push('-'),
            '≈' => out.push('~'),
            '×' => out.push('x'),
            '—' | '–' => out.push('-'),
            '‘' | '’' => out.push('\''),
            '“' | '”' => out.push('"'),
            '…' => out.push_str("..."),
            '£' => out.push_str("GBP "),
            other => out.push(other),
        }
    }

    out.trim().to_string()
}

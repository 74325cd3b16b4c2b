//! Table-name template rewriting.
//!
//! Query templates name tables symbolically, e.g. `{bug}`, and the configured
//! site prefix/suffix are spliced in before execution. Rewriting is applied to
//! every template before it reaches a driver and before log reconstruction.

const PREFIX_DELIMITER: char = '{';
const SUFFIX_DELIMITER: char = '}';

/// Replace every `{` with `<prefix>_` and every `}` with the suffix.
/// No other characters are modified. Pure and deterministic.
pub fn rewrite_table_names(sql: &str, prefix: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(sql.len() + prefix.len() + suffix.len());
    for ch in sql.chars() {
        match ch {
            PREFIX_DELIMITER => {
                out.push_str(prefix);
                out.push('_');
            }
            SUFFIX_DELIMITER => out.push_str(suffix),
            _ => out.push(ch),
        }
    }
    out
}

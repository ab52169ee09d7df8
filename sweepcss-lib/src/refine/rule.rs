use crate::refine::selector;
use crate::report::Report;

/// Reassemble each at-rule block with its inner selectors refined.
///
/// One level of header extraction only: the header is the text before the
/// first `{`, the body everything strictly between that `{` and the last
/// `}`. An at-rule nested inside the body is not recognized and its text
/// falls through the selector refiner as ordinary lines.
pub fn refine(rule_blocks: &[String], report: &mut Report) -> String {
    rule_blocks
        .iter()
        .map(|block| refine_block(block, report))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn refine_block(block: &str, report: &mut Report) -> String {
    let header = block
        .split('{')
        .next()
        .unwrap_or_default()
        .trim();
    let body = match (block.find('{'), block.rfind('}')) {
        (Some(open), Some(close)) if close > open => block[open + 1..close].trim(),
        _ => "",
    };
    let refined = selector::refine(body, report);
    format!("{header} {{\n{refined}\n}}")
}

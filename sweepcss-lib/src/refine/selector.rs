use std::collections::{BTreeMap, BTreeSet};

use crate::lines::logical_lines;
use crate::report::Report;

/// Group, deduplicate and sort `selector { declarations }` text.
///
/// Selectors are keyed by the exact trimmed text before `{`; a selector
/// seen twice contributes to one merged group. Declarations dedupe by
/// exact string match only. Both levels come back in lexicographic byte
/// order, so the function is idempotent on its own output.
pub fn refine(css: &str, report: &mut Report) -> String {
    // BTreeMap/BTreeSet keep both levels sorted; sorted output is the
    // whole point, so the ordered containers are the natural fit.
    let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut current_selector = String::new();
    let mut inside_block = false;
    let mut declaration_buffer: Vec<String> = Vec::new();

    for line in logical_lines(css) {
        if line.contains('{') {
            current_selector = line
                .split('{')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            inside_block = true;
            declaration_buffer.clear();
            continue;
        }

        if inside_block {
            if line.contains('}') {
                inside_block = false;
                // A block with no selector text (e.g. a bare `{`) has
                // nowhere to merge into; its declarations are dropped.
                if !current_selector.is_empty() {
                    let set = groups.entry(current_selector.clone()).or_default();
                    for declaration in declaration_buffer.drain(..) {
                        set.insert(declaration);
                    }
                } else if !declaration_buffer.is_empty() {
                    report.warn(format!(
                        "{} declaration(s) in a selector-less block dropped",
                        declaration_buffer.len()
                    ));
                    declaration_buffer.clear();
                }
                continue;
            }

            if line.contains(':') && line.contains(';') {
                declaration_buffer.push(line.to_string());
            } else if !line.is_empty() {
                report.warn(format!("unrecognized line inside a block dropped: `{line}`"));
            }
        } else if !line.is_empty() {
            report.warn(format!("line outside any block dropped: `{line}`"));
        }
    }

    if inside_block && !declaration_buffer.is_empty() {
        report.warn(format!(
            "block for `{current_selector}` never closed, {} declaration(s) dropped",
            declaration_buffer.len()
        ));
    }

    let mut output = String::new();
    for (selector, declarations) in &groups {
        let body = declarations
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n    ");
        output.push_str(&format!("{selector} {{\n    {body}\n}}\n\n"));
    }
    output.trim().to_string()
}

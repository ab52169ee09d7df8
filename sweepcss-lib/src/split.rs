use crate::lines::logical_lines;
use crate::report::Report;

/// Partition CSS text into the plain-selector region and the list of
/// top-level at-rule blocks.
///
/// The scan is line-oriented over logical lines (see `lines`): brace depth
/// moves one step per line, an `@`-line carrying `{` opens a block at
/// depth 1, and the block closes when depth returns to zero. Nested
/// at-rules are not understood: an `@`-line seen while a block is open
/// discards the open buffer and starts over.
pub fn split(source: &str, report: &mut Report) -> (String, Vec<String>) {
    let mut inside_rule = false;
    let mut depth = 0usize;
    let mut rule_buffer = String::new();
    let mut plain_buffer = String::new();
    let mut rule_blocks = Vec::new();

    for line in logical_lines(source) {
        if line.starts_with('@') && line.contains('{') {
            if inside_rule {
                report.warn(format!(
                    "unterminated at-rule discarded before `{}`",
                    first_line(&rule_buffer)
                ));
            }
            inside_rule = true;
            depth = 1;
            rule_buffer.clear();
            rule_buffer.push_str(&line);
            rule_buffer.push('\n');
            continue;
        }

        if inside_rule {
            rule_buffer.push_str(&line);
            rule_buffer.push('\n');
            if line.contains('{') {
                depth += 1;
            }
            if line.contains('}') {
                depth -= 1;
            }
            if depth == 0 {
                inside_rule = false;
                rule_blocks.push(rule_buffer.trim().to_string());
                rule_buffer.clear();
            }
        } else {
            plain_buffer.push_str(&line);
            plain_buffer.push('\n');
        }
    }

    if inside_rule {
        report.warn(format!(
            "at-rule never closed, dropped: `{}`",
            first_line(&rule_buffer)
        ));
    }

    log::debug!(
        "split: {} plain byte(s), {} at-rule block(s)",
        plain_buffer.trim().len(),
        rule_blocks.len()
    );

    (plain_buffer.trim().to_string(), rule_blocks)
}

fn first_line(buffer: &str) -> &str {
    buffer.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_only_input_yields_no_rule_blocks() {
        let mut report = Report::new();
        let (plain, rules) = split(".a {\n    color: red;\n}", &mut report);
        assert_eq!(plain, ".a {\ncolor: red;\n}");
        assert!(rules.is_empty());
        assert!(!report.has_warnings());
    }

    #[test]
    fn media_block_is_separated_from_plain_css() {
        let css = "\
.a {
    color: red;
}
@media (min-width: 600px) {
    .x {
        color: red;
    }
}
.b {
    margin: 0;
}";
        let mut report = Report::new();
        let (plain, rules) = split(css, &mut report);
        assert_eq!(plain, ".a {\ncolor: red;\n}\n.b {\nmargin: 0;\n}");
        assert_eq!(rules.len(), 1);
        assert!(rules[0].starts_with("@media (min-width: 600px) {"));
        assert!(rules[0].ends_with('}'));
    }

    #[test]
    fn block_count_matches_top_level_at_rules() {
        let css = "\
@media (min-width: 600px) {
    .x {
        color: red;
    }
}
@keyframes fade {
    from {
        opacity: 0;
    }
    to {
        opacity: 1;
    }
}";
        let mut report = Report::new();
        let (plain, rules) = split(css, &mut report);
        assert_eq!(plain, "");
        assert_eq!(rules.len(), 2);
        assert!(!report.has_warnings());
    }

    #[test]
    fn depth_steps_once_per_logical_line() {
        let css = "\
@media screen {
    .x {
        color: red;
    }
    .y {
        margin: 0;
    }
}";
        let mut report = Report::new();
        let (_, rules) = split(css, &mut report);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].lines().count(), 8);
    }

    #[test]
    fn compact_media_block_is_still_detected() {
        let css = "@media (min-width: 600px) { .x { color: red; } }";
        let mut report = Report::new();
        let (plain, rules) = split(css, &mut report);
        assert_eq!(plain, "");
        assert_eq!(rules.len(), 1);
        assert!(rules[0].starts_with("@media (min-width: 600px) {"));
        assert!(!report.has_warnings());
    }

    #[test]
    fn unterminated_at_rule_is_dropped_with_warning() {
        let css = "@media screen {\n    .x {\n        color: red;\n    }";
        let mut report = Report::new();
        let (plain, rules) = split(css, &mut report);
        assert_eq!(plain, "");
        assert!(rules.is_empty());
        assert!(report.has_warnings());
        assert!(report.summary().contains("@media screen {"));
    }

    #[test]
    fn new_at_rule_discards_an_open_buffer() {
        let css = "\
@media screen {
    .x {
        color: red;
    }
@media print {
    .y {
        margin: 0;
    }
}";
        let mut report = Report::new();
        let (_, rules) = split(css, &mut report);
        assert_eq!(rules.len(), 1);
        assert!(rules[0].starts_with("@media print {"));
        assert!(report.summary().contains("@media screen {"));
    }

    #[test]
    fn at_rule_without_brace_on_its_line_stays_plain() {
        // Documented limitation: the opening brace must share a logical
        // line with the `@` for the block to be detected.
        let css = "@media screen\n{\n    .x {\n        color: red;\n    }\n}";
        let mut report = Report::new();
        let (plain, rules) = split(css, &mut report);
        assert!(rules.is_empty());
        assert!(plain.contains("@media screen"));
    }
}

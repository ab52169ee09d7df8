/// Break source text into the logical lines the scanners operate on.
///
/// Physical lines are split further so that `{` and `;` end a logical line
/// and `}` stands alone. On the one-brace-per-line layout this tool emits,
/// the result is exactly the trimmed physical lines; compact one-liners
/// like `.a { color: red; }` expand to the same three-line shape instead
/// of losing their declarations to the selector-open check.
pub(crate) fn logical_lines(source: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for raw_line in source.lines() {
        for ch in raw_line.chars() {
            match ch {
                '{' | ';' => {
                    current.push(ch);
                    flush(&mut lines, &mut current);
                }
                '}' => {
                    flush(&mut lines, &mut current);
                    current.push('}');
                    flush(&mut lines, &mut current);
                }
                _ => current.push(ch),
            }
        }
        flush(&mut lines, &mut current);
    }
    lines
}

fn flush(lines: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    current.clear();
}

/// Derive the output filename from the input filename and an optional
/// explicit output argument.
///
/// A `-tooptimize` marker in the input wins over everything: a trailing
/// `-tooptimize.css` / `-tooptimize.scss` is rewritten to the bare
/// extension, and a marker anywhere else leaves the name untouched (the
/// explicit argument is ignored either way). Without the marker, the
/// explicit argument is used verbatim if present, else the tool writes
/// back in place.
pub fn derive_output_path(input: &str, explicit: Option<&str>) -> String {
    if input.contains("-tooptimize") {
        for ext in [".css", ".scss"] {
            let marker = format!("-tooptimize{ext}");
            if let Some(stem) = input.strip_suffix(marker.as_str()) {
                return format!("{stem}{ext}");
            }
        }
        return input.to_string();
    }

    match explicit {
        Some(path) => path.to_string(),
        None => input.to_string(),
    }
}

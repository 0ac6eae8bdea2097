use std::collections::HashMap;

/// One raw template invocation lifted from page wikitext: the template name
/// plus its `key = value` fields. Unnamed fields get positional keys
/// (`"1"`, `"2"`, ...). Values keep their wikitext verbatim, nested markup
/// included.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub name: String,
    pub fields: HashMap<String, String>,
}

/// Extracts every template invocation from `wikitext`, nested invocations
/// included, in document order of their opening braces.
///
/// Invocation bodies are split only at top-level `|` characters; pipes
/// inside nested `{{...}}` templates or `[[...]]` links belong to the
/// enclosing value. Unbalanced braces are tolerated: unmatched openers are
/// dropped, stray closers ignored.
pub fn extract_templates(wikitext: &str) -> Vec<Template> {
    let bytes = wikitext.as_bytes();
    let mut open_stack: Vec<usize> = Vec::new();
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                let run_start = i;
                while i < bytes.len() && bytes[i] == b'{' {
                    i += 1;
                }
                let run = i - run_start;
                // An odd leading brace ("{{{") stays literal text; each
                // remaining pair opens one invocation, outermost first.
                let literal = run % 2;
                for pair in 0..run / 2 {
                    open_stack.push(run_start + literal + 2 * (pair + 1));
                }
            }
            b'}' => {
                let run_start = i;
                while i < bytes.len() && bytes[i] == b'}' {
                    i += 1;
                }
                let run = i - run_start;
                for pair in 0..run / 2 {
                    if let Some(start) = open_stack.pop() {
                        spans.push((start, run_start + 2 * pair));
                    }
                }
            }
            _ => i += 1,
        }
    }

    spans.sort_by_key(|&(start, _)| start);
    spans
        .into_iter()
        .filter(|&(start, end)| start < end)
        .filter_map(|(start, end)| parse_invocation(&wikitext[start..end]))
        .collect()
}

fn parse_invocation(content: &str) -> Option<Template> {
    let mut segments = split_top_level(content, b'|').into_iter();
    let name = segments.next()?.trim().to_string();
    if name.is_empty() {
        return None;
    }

    let mut fields = HashMap::new();
    let mut position = 1usize;
    for segment in segments {
        match top_level_positions(segment, b'=').first() {
            Some(&eq) => {
                let key = segment[..eq].trim().to_string();
                let value = segment[eq + 1..].trim().to_string();
                fields.insert(key, value);
            }
            None => {
                fields.insert(position.to_string(), segment.trim().to_string());
                position += 1;
            }
        }
    }

    Some(Template { name, fields })
}

fn split_top_level(content: &str, sep: u8) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for pos in top_level_positions(content, sep) {
        parts.push(&content[start..pos]);
        start = pos + 1;
    }
    parts.push(&content[start..]);
    parts
}

/// Byte offsets of `sep` at nesting depth zero with respect to `{{ }}`
/// templates and `[[ ]]` links. `sep` must be ASCII.
fn top_level_positions(content: &str, sep: u8) -> Vec<usize> {
    fn pair_at(bytes: &[u8], i: usize, b: u8) -> bool {
        i + 1 < bytes.len() && bytes[i] == b && bytes[i + 1] == b
    }

    let bytes = content.as_bytes();
    let mut positions = Vec::new();
    let mut brace_depth = 0u32;
    let mut link_depth = 0u32;
    let mut i = 0;

    while i < bytes.len() {
        if pair_at(bytes, i, b'{') {
            brace_depth += 1;
            i += 2;
        } else if pair_at(bytes, i, b'}') && brace_depth > 0 {
            brace_depth -= 1;
            i += 2;
        } else if pair_at(bytes, i, b'[') {
            link_depth += 1;
            i += 2;
        } else if pair_at(bytes, i, b']') && link_depth > 0 {
            link_depth -= 1;
            i += 2;
        } else {
            if bytes[i] == sep && brace_depth == 0 && link_depth == 0 {
                positions.push(i);
            }
            i += 1;
        }
    }

    positions
}

// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of `name=...` inside an open tag. Tolerates double quotes,
/// single quotes, and no quotes; attribute names match case-insensitively.
pub fn attr_value_ci(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let pat = format!("{}=", to_lower(name));
    let mut from = 0usize;
    loop {
        let i = lc[from..].find(&pat)? + from;
        // require a word boundary before the attribute name
        if i > 0 {
            let prev = lc.as_bytes()[i - 1];
            if prev.is_ascii_alphanumeric() || prev == b'-' || prev == b'_' {
                from = i + pat.len();
                continue;
            }
        }
        let rest = &open_tag[i + pat.len()..];
        return Some(match rest.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let inner = &rest[1..];
                match inner.find(q) {
                    Some(e) => inner[..e].to_string(),
                    None => inner.to_string(),
                }
            }
            _ => rest
                .split(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .next()
                .unwrap_or("")
                .to_string(),
        });
    }
}

/// One `<script>` block as found in a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptBlock {
    /// `<script src=…>` reference; value is the raw src attribute.
    External(String),
    /// Inline `<script>…</script>` body, verbatim.
    Inline(String),
}

/// Scan a whole document for `<script>` blocks, in document order.
/// An external reference wins over any body it may carry; inline
/// blocks with a blank body are dropped.
pub fn script_blocks(doc: &str) -> Vec<ScriptBlock> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some((s, e)) = next_tag_block_ci(doc, "<script", "</script>", pos) {
        let block = &doc[s..e];
        pos = e;

        let open_end = match block.find('>') { Some(i) => i, None => continue };
        let open_tag = &block[..open_end + 1];

        if let Some(src) = attr_value_ci(open_tag, "src") {
            if !src.is_empty() {
                out.push(ScriptBlock::External(src));
                continue;
            }
        }

        let body = inner_after_open_tag(block);
        if !body.trim().is_empty() {
            out.push(ScriptBlock::Inline(body));
        }
    }

    out
}

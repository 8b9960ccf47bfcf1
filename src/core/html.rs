// src/core/html.rs
//! Tolerant, case-insensitive tag scanning over raw HTML.

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

/// Byte range of the next `<o ...> … </c>` block at or after `from`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    next_tag_block_lc(s, &to_lower(s), &to_lower(o), &to_lower(c), from)
}

/// `next_tag_block_ci` over a caller-lowered copy `lc` of `s`, for repeated scans.
/// Lowercasing is ASCII-only, so offsets in `lc` and `s` agree.
/// `o` and `c` must already be lowercase.
pub fn next_tag_block_lc(s: &str, lc: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let start = lc.get(from..)?.find(o)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(c)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&out))
}

/// The first `<table>` after the element carrying `id="<id>"`
/// (the section heading anchor on MediaWiki pages).
pub fn section_table<'a>(doc: &'a str, id: &str) -> Option<&'a str> {
    let anchor = [format!(r#"id="{id}""#), format!("id='{id}'")]
        .iter()
        .filter_map(|pat| doc.find(pat.as_str()))
        .min()?;
    let (ts, te) = next_tag_block_ci(doc, "<table", "</table>", anchor)?;
    Some(&doc[ts..te])
}

/// A `<th>` or `<td>` cell: raw inner HTML plus whether it was a header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub inner: String,
    pub header: bool,
}

impl Cell {
    /// Visible text, whitespace collapsed.
    pub fn text(&self) -> String {
        strip_tags(&self.inner)
    }
}

/// Rows of a table block, each a list of cells in document order.
pub fn table_rows(table: &str) -> Vec<Vec<Cell>> {
    let lc = to_lower(table);
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_lc(table, &lc, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;
        rows.push(row_cells(tr));
    }
    rows
}

fn row_cells(tr: &str) -> Vec<Cell> {
    let lc = to_lower(tr);
    let mut cells = Vec::new();
    let mut pos = 0usize;

    while let Some((start, header)) = next_cell_open(&lc, pos) {
        let Some(open_end) = tr[start..].find('>').map(|e| start + e + 1) else { break };
        let close = if header { "</th>" } else { "</td>" };
        // Unclosed cells run to the next cell or the end of the row.
        let end = match (lc[open_end..].find(close), next_cell_open(&lc, open_end)) {
            (Some(c), Some((n, _))) if open_end + c > n => n,
            (Some(c), _) => open_end + c,
            (None, Some((n, _))) => n,
            (None, None) => tr.len(),
        };
        cells.push(Cell { inner: s!(&tr[open_end..end]), header });
        pos = end;
    }
    cells
}

/// Next `<th` / `<td` opener (not `<thead`, `<tbody`…) in lowercased text.
fn next_cell_open(lc: &str, from: usize) -> Option<(usize, bool)> {
    let bytes = lc.as_bytes();
    let mut i = from;
    while let Some(off) = lc.get(i..)?.find("<t") {
        let at = i + off;
        let kind = bytes.get(at + 2).copied();
        let after = bytes.get(at + 3).copied();
        let boundary = matches!(after, Some(b'>' | b' ' | b'\t' | b'\n' | b'\r' | b'/'));
        match kind {
            Some(b'h') if boundary => return Some((at, true)),
            Some(b'd') if boundary => return Some((at, false)),
            _ => i = at + 2,
        }
    }
    None
}

/// Split inner HTML on `<br>`, `<br/>`, `<br />` and return the visible text of each piece.
pub fn split_on_br(inner: &str) -> Vec<String> {
    let lc = to_lower(inner);
    let mut pieces = Vec::new();
    let mut last = 0usize;
    let mut pos = 0usize;

    while let Some(off) = lc[pos..].find("<br") {
        let at = pos + off;
        let boundary = matches!(lc.as_bytes().get(at + 3), Some(b'>' | b'/' | b' '));
        let Some(end) = lc[at..].find('>').map(|e| at + e + 1) else { break };
        if boundary {
            pieces.push(strip_tags(&inner[last..at]));
            last = end;
        }
        pos = end;
    }
    pieces.push(strip_tags(&inner[last..]));
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <p>intro</p>
        <table class="infobox"><tr><td>not this one</td></tr></table>
        <h2><span class="mw-headline" id="Equipment">Equipment</span></h2>
        <table class="wikitable">
          <tbody>
            <tr><th>Weapons</th><td>Falchion<br/>Javelin (Throwing)</td></tr>
            <tr><th>Mount</th><td>N/A</td></tr>
          </tbody>
        </table>
    "#;

    #[test]
    fn section_table_follows_anchor() {
        let table = section_table(PAGE, "Equipment").unwrap();
        assert!(table.contains("Falchion"));
        assert!(!table.contains("not this one"));
        assert!(section_table(PAGE, "Skills").is_none());
    }

    #[test]
    fn rows_mix_th_and_td_and_skip_tbody() {
        let table = section_table(PAGE, "Equipment").unwrap();
        let rows = table_rows(table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert!(rows[0][0].header);
        assert_eq!(rows[0][0].text(), "Weapons");
        assert!(!rows[1][1].header);
        assert_eq!(rows[1][1].text(), "N/A");
    }

    #[test]
    fn lowered_scan_matches_ci_scan() {
        let doc = "<P>x</P><TR><TD>a</TD></TR><tr><td>b</td></tr>";
        let lc = to_lower(doc);
        let mut pos = 0;
        while let Some(block) = next_tag_block_ci(doc, "<TR", "</TR>", pos) {
            assert_eq!(next_tag_block_lc(doc, &lc, "<tr", "</tr>", pos), Some(block));
            pos = block.1;
        }
        assert_eq!(pos, doc.len());
    }

    #[test]
    fn many_rows_in_mixed_case() {
        let body: String = (0..500)
            .map(|i| {
                if i % 2 == 0 {
                    format!("<TR><TH>r{i}</TH><TD>v{i}</TD></TR>")
                } else {
                    format!("<tr><th>r{i}</th><td>v{i}</td></tr>")
                }
            })
            .collect();
        let rows = table_rows(&format!("<table>{body}</table>"));
        assert_eq!(rows.len(), 500);
        assert_eq!(rows[499][1].text(), "v499");
        assert!(rows[0][0].header);
    }

    #[test]
    fn br_variants_split_cells() {
        assert_eq!(split_on_br("A<br>B<BR />C<br/>D"), vec!["A", "B", "C", "D"]);
        assert_eq!(split_on_br("<a href=\"x\">Axe</a>"), vec!["Axe"]);
        // <bra> is not a break
        assert_eq!(split_on_br("x<bra>y"), vec!["xy"]);
    }

    #[test]
    fn strip_tags_decodes_entities() {
        assert_eq!(strip_tags("<b>Noble&#39;s&nbsp;Son</b>"), "Noble's Son");
    }
}

/// Cell extraction for the archive's season pages: the line sheet is the
/// first `<table>` in the document. Scanning works on a lowercased shadow of
/// the input so tag case never matters; slices index the original text.
pub fn extract_table_rows(html: &str) -> Vec<Vec<String>> {
    let lower = html.to_ascii_lowercase();
    let Some(table_start) = lower.find("<table") else {
        return Vec::new();
    };
    let table_end = lower[table_start..]
        .find("</table>")
        .map(|i| table_start + i)
        .unwrap_or(html.len());
    let table = &html[table_start..table_end];
    let ltable = &lower[table_start..table_end];

    let mut rows = Vec::new();
    let mut pos = 0;
    while let Some(offset) = ltable[pos..].find("<tr") {
        let row_tag = pos + offset;
        let Some(body_offset) = ltable[row_tag..].find('>') else {
            break;
        };
        let body_start = row_tag + body_offset + 1;
        let body_end = ltable[body_start..]
            .find("</tr>")
            .map(|i| body_start + i)
            .unwrap_or(ltable.len());
        rows.push(extract_cells(
            &table[body_start..body_end],
            &ltable[body_start..body_end],
        ));
        pos = body_end;
    }
    rows
}

fn extract_cells(row: &str, lrow: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0;
    loop {
        let td = lrow[pos..].find("<td");
        let th = lrow[pos..].find("<th");
        let Some(offset) = [td, th].into_iter().flatten().min() else {
            break;
        };
        let cell_tag = pos + offset;
        let Some(body_offset) = lrow[cell_tag..].find('>') else {
            break;
        };
        let body_start = cell_tag + body_offset + 1;
        let body_end = ["</td", "</th", "<td", "<th"]
            .iter()
            .filter_map(|marker| lrow[body_start..].find(marker))
            .min()
            .map(|i| body_start + i)
            .unwrap_or(lrow.len());
        cells.push(clean_cell(&row[body_start..body_end]));
        pos = body_end;
    }
    cells
}

fn clean_cell(fragment: &str) -> String {
    html_decode(&strip_tags(fragment)).trim().to_string()
}

fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decode the handful of entities the archive pages actually use. `&amp;`
/// goes last so `&amp;nbsp;` stays a literal.
pub fn html_decode(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&#x2F;", "/")
        .replace("&amp;", "&")
}

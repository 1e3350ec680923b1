use std::borrow::Cow;
use std::io::{self, Write};

use wordcount_core::WordCounts;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `& < > "` in words and the title. Off by default so reports
    /// stay byte-compatible with earlier output.
    pub escape_html: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("word {0:?} has no count in the table")]
    MissingCount(String),
}

/// Writes the full HTML report: header, one row per word in `ordered`, footer.
///
/// `ordered` is consumed; each word yields exactly one row.
pub fn render_report<W: Write>(
    out: &mut W,
    title: &str,
    counts: &WordCounts,
    ordered: Vec<&str>,
    options: &RenderOptions,
) -> Result<(), ReportError> {
    write_header(out, &escape(title, options))?;
    for word in ordered {
        let count = counts
            .get(word)
            .ok_or_else(|| ReportError::MissingCount(word.to_string()))?;
        write_row(out, &escape(word, options), count)?;
    }
    write_footer(out)?;
    Ok(())
}

fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "<html>")?;
    writeln!(out, "<head> <title> Words Counted in {title}</title> </head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2> Words Counted in {title}</h2>")?;
    writeln!(out, "<hr />")?;
    writeln!(out, "<table border=\"1\" >")?;
    writeln!(out, "<tr>")?;
    writeln!(out, "<th> Words </th>")?;
    writeln!(out, "<th> Counts </th>")?;
    writeln!(out, "</tr>")
}

fn write_row<W: Write>(out: &mut W, word: &str, count: u64) -> io::Result<()> {
    writeln!(out, "<tr>")?;
    writeln!(out, "<td> {word} </td>")?;
    writeln!(out, "<td> {count} </td>")?;
    writeln!(out, "</tr>")
}

fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</table>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn escape<'a>(text: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if !options.escape_html || !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordcount_core::{count_words, ordered_words, SeparatorSet};

    fn render_to_string(title: &str, lines: &[&str], options: RenderOptions) -> String {
        let counts = count_words(lines, &SeparatorSet::default());
        let mut buf = Vec::new();
        render_report(&mut buf, title, &counts, ordered_words(&counts), &options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_table_renders_header_and_footer_only() {
        let html = render_to_string("in.txt", &[], RenderOptions::default());
        assert!(html.starts_with("<html>\n"));
        assert!(html.ends_with("</tr>\n</table>\n</body>\n</html>\n"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn row_carries_word_and_count() {
        let html = render_to_string("in.txt", &["a a"], RenderOptions::default());
        assert!(html.contains("<tr>\n<td> a </td>\n<td> 2 </td>\n</tr>\n"));
    }

    #[test]
    fn escaping_is_opt_in() {
        let raw = render_to_string("a&b", &["<b>"], RenderOptions::default());
        assert!(raw.contains("<td> <b> </td>"));
        assert!(raw.contains("Words Counted in a&b</title>"));

        let escaped = render_to_string("a&b", &["<b>"], RenderOptions { escape_html: true });
        assert!(escaped.contains("<td> &lt;b&gt; </td>"));
        assert!(escaped.contains("Words Counted in a&amp;b</title>"));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let counts = WordCounts::new();
        let mut buf = Vec::new();
        let err = render_report(&mut buf, "t", &counts, vec!["ghost"], &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, ReportError::MissingCount(word) if word == "ghost"));
    }
}

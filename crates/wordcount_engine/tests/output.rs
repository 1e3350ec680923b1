use pretty_assertions::assert_eq;
use wordcount_core::{count_words, ordered_words, SeparatorSet};
use wordcount_engine::{render_report, RenderOptions};

fn render(title: &str, lines: &[&str]) -> String {
    let counts = count_words(lines, &SeparatorSet::default());
    let mut buf = Vec::new();
    render_report(
        &mut buf,
        title,
        &counts,
        ordered_words(&counts),
        &RenderOptions::default(),
    )
    .unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn report_matches_the_published_layout() {
    let html = render("data/cat.txt", &["The cat sat, the Cat ran."]);
    let expected = "\
<html>
<head> <title> Words Counted in data/cat.txt</title> </head>
<body>
<h2> Words Counted in data/cat.txt</h2>
<hr />
<table border=\"1\" >
<tr>
<th> Words </th>
<th> Counts </th>
</tr>
<tr>
<td> Cat </td>
<td> 1 </td>
</tr>
<tr>
<td> cat </td>
<td> 1 </td>
</tr>
<tr>
<td> ran </td>
<td> 1 </td>
</tr>
<tr>
<td> sat </td>
<td> 1 </td>
</tr>
<tr>
<td> The </td>
<td> 1 </td>
</tr>
<tr>
<td> the </td>
<td> 1 </td>
</tr>
</table>
</body>
</html>
";
    assert_eq!(html, expected);
}

#[test]
fn empty_input_keeps_header_and_footer() {
    let html = render("empty.txt", &[]);
    let expected = "\
<html>
<head> <title> Words Counted in empty.txt</title> </head>
<body>
<h2> Words Counted in empty.txt</h2>
<hr />
<table border=\"1\" >
<tr>
<th> Words </th>
<th> Counts </th>
</tr>
</table>
</body>
</html>
";
    assert_eq!(html, expected);
}

#[test]
fn rendering_is_repeatable() {
    let lines = ["one two, two-three", "three three"];
    assert_eq!(render("in.txt", &lines), render("in.txt", &lines));
}

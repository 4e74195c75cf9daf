//! Whole-document snapshots covering every line kind at once

use mdline_parser::{inspect, render, Representation};

const KITCHENSINK: &str = "**Title**
Intro line one
intro line two with _emphasis_

```
fn main() {}
```
_the end_";

#[test]
fn test_kitchensink_html() {
    let html = render(KITCHENSINK, Representation::StructuredMarkup).unwrap();
    insta::assert_debug_snapshot!(html, @r###""<b>Title</b>Intro line one intro line two with <i>emphasis</i> </p><br><pre>fn main() {}\n</pre><i>the end</i>""###);
}

#[test]
fn test_kitchensink_ansi() {
    let ansi = render(KITCHENSINK, Representation::TerminalEscape).unwrap();
    insta::assert_debug_snapshot!(ansi, @r###""\u{1b}[1mTitle\u{1b}[0mIntro line one intro line two with \u{1b}[3memphasis\u{1b}[0m \n\n\u{1b}[7mfn main() {}\n\u{1b}[0m\u{1b}[3mthe end\u{1b}[0m""###);
}

#[test]
fn test_kitchensink_categories() {
    let categories: Vec<String> = inspect(KITCHENSINK)
        .unwrap()
        .into_iter()
        .map(|record| format!("{}:{:?}", record.line, record.category))
        .collect();
    insta::assert_snapshot!(categories.join("\n"), @r###"
    1:Bold
    2:Text
    3:Text
    4:Blank
    5:FenceOpen
    6:Preformatted
    7:FenceClose
    8:Italic
    "###);
}

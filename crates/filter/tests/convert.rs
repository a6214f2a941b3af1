use d2lmd_filter::{Options, WrapperTemplate, convert};

const CHAPTER: &str = "\
# Loops \u{2014} part 1

It\u{2019}s a \u{201c}test\u{201d} \u{2014} done\u{2026}

<!--  -->

<!-- keep -->

```java

  System.out.println(1);

```

```rust
fn main() {}
```

See [the docs](https://docs.oracle.com) or [above](#loops----part-1).
";

fn body_only() -> Options {
    Options {
        wrap_document: false,
        ..Options::default()
    }
}

#[test]
fn chapter_body() {
    let html = convert(CHAPTER, &body_only()).expect("convert should succeed");
    let expected = "\
<h1 id=\"loops----part-1\">Loops -- part 1</h1>
<p>It's a \"test\" -- done...</p>
<!-- keep -->
<pre class=\"line-numbers d2l-code\"><code class=\"language-java\">System.out.println(1);
</code></pre>
<pre class=\"rust\"><code>fn main() {}</code></pre>
<p>See <a href=\"https://docs.oracle.com\" target=\"_blank\">the docs</a> or <a href=\"#loops----part-1\">above</a>.</p>
";
    assert_eq!(html, expected);
}

#[test]
fn wrapped_page_has_exactly_one_header_and_footer() {
    let html = convert(CHAPTER, &Options::default()).expect("convert should succeed");
    let template = WrapperTemplate::default();

    assert!(html.starts_with(&template.header()));
    assert!(html.ends_with("</body>\n</html>\n"));
    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert_eq!(html.matches("</html>").count(), 1);
    assert!(html.contains("<h1 id=\"loops----part-1\">"));
}

#[test]
fn separate_runs_wrap_independently() {
    let options = Options::default();
    let first = convert("one\n", &options).unwrap();
    let second = convert("two\n", &options).unwrap();
    assert!(first.starts_with("<!DOCTYPE html>"));
    assert!(second.starts_with("<!DOCTYPE html>"));
}

#[test]
fn heading_ids_follow_normalized_text() {
    let html = convert("## Don\u{2019}t stop \u{2013} go\u{2026}\n", &body_only()).unwrap();
    assert_eq!(html, "<h2 id=\"dont-stop----go...\">Don't stop -- go...</h2>\n");

    let raw = Options {
        normalize_text: false,
        ..body_only()
    };
    let html = convert("## Don\u{2019}t stop \u{2013} go\n", &raw).unwrap();
    assert!(html.starts_with("<h2 id=\"dont-stop--go\">"));
}

#[test]
fn inline_blank_comments_are_removed() {
    let html = convert("a <!-- --> b <!-- c --> d\n", &body_only()).unwrap();
    assert_eq!(html, "<p>a  b <!-- c --> d</p>\n");
}

#[test]
fn custom_languages_and_plain_links() {
    let options = Options {
        wrap_document: false,
        links_in_new_tab: false,
        languages: vec!["rust".to_string()],
        ..Options::default()
    };
    let html = convert("```rust\nfn main() {}\n```\n\n```java\nx\n```\n\n[a](b)\n", &options).unwrap();
    assert_eq!(
        html,
        "<pre class=\"line-numbers d2l-code\"><code class=\"language-rust\">fn main() {}\n</code></pre>\n<pre class=\"java\"><code>x</code></pre>\n<p><a href=\"b\">a</a></p>\n"
    );
}

use hero_scrape::dom;
use hero_scrape::element::ImageElement;
use hero_scrape::extractor::{candidates, Scope};
use hero_scrape::locators::{favicon, logo};
use hero_scrape::oracle::verify;
use hero_scrape::selector::exclusion::is_excluded;
use hero_scrape::SizeVerdict;
use url::Url;

const PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Telemedicine trends</title>
    <link rel="stylesheet" href="/css/site.css">
    <link rel="apple-touch-icon" href="/apple-touch-icon.png">
    <link rel="icon" type="image/png" href="/favicon-32x32.png">
</head>
<body>
    <header class="site-header">
        <a href="/" class="custom-logo-link"><img src="/wp-content/uploads/logo.svg" alt="Clinic"></a>
        <nav id="nav"><ul><li><a href="/blog">Blog</a></li></ul></nav>
    </header>
    <div class="ad-slot"><img src="https://ads.example/banner-728x90.gif"></div>
    <main>
        <article>
            <figure class="wp-block-image">
                <img src="/wp-content/uploads/2025/02/hero-1024x576.jpg"
                     width="1024" height="576">
            </figure>
            <img src="data:image/gif;base64,R0lGODlhAQABAI" data-lazy-src="/related.jpg">
            <p>Body text.</p>
            <img src="/wp-content/uploads/2025/02/author-150x150.jpg" width="150" height="150">
        </article>
    </main>
</body>
</html>
"#;

fn base() -> Url {
    Url::parse("https://clinic.example/blog/telemedicine/").expect("valid base")
}

fn verdict_for(html: &str, src: &str) -> SizeVerdict {
    let doc = dom::parse(html);
    let img = ImageElement::new(doc.select("img"));
    let url = base().join(src).expect("resolvable");
    verify(&url, &img, 150)
}

#[test]
fn realistic_page_candidates_per_scope() {
    let doc = dom::parse(PAGE);

    let header: Vec<String> = candidates::extract(&doc, Scope::HeaderNav, &base(), 20)
        .map(|c| c.url.to_string())
        .collect();
    assert_eq!(header, vec!["https://clinic.example/wp-content/uploads/logo.svg"]);

    let figures: Vec<String> = candidates::extract(&doc, Scope::Container("figure"), &base(), 20)
        .map(|c| c.url.to_string())
        .collect();
    assert_eq!(
        figures,
        vec!["https://clinic.example/wp-content/uploads/2025/02/hero-1024x576.jpg"]
    );

    // the only div is an ad slot
    assert_eq!(candidates::extract(&doc, Scope::Container("div"), &base(), 20).count(), 0);

    assert_eq!(candidates::extract(&doc, Scope::Document, &base(), 20).count(), 4);
    assert_eq!(candidates::extract(&doc, Scope::Document, &base(), 2).count(), 2);
}

#[test]
fn realistic_page_verdicts() {
    let doc = dom::parse(PAGE);
    let verdicts: Vec<SizeVerdict> = candidates::extract(&doc, Scope::Document, &base(), 20)
        .map(|c| verify(&c.url, &c.element, 150))
        .collect();

    assert_eq!(
        verdicts,
        vec![
            SizeVerdict::Reject,  // logo.svg
            SizeVerdict::Unknown, // banner-728x90, only one side is small
            SizeVerdict::Accept,  // hero with 1024x576 attributes
            SizeVerdict::Reject,  // author-150x150
        ]
    );
}

#[test]
fn realistic_page_locators() {
    let doc = dom::parse(PAGE);

    assert_eq!(
        favicon::locate(&doc, &base()).map(String::from).as_deref(),
        Some("https://clinic.example/favicon-32x32.png")
    );
    assert_eq!(
        logo::locate(&doc, &base()).map(String::from).as_deref(),
        Some("https://clinic.example/wp-content/uploads/logo.svg")
    );
}

#[test]
fn svg_rejected_even_with_large_attributes() {
    let html = r#"<img width="1200" height="800">"#;
    assert_eq!(verdict_for(html, "/chart.svg"), SizeVerdict::Reject);
    assert_eq!(verdict_for(html, "/chart.svg?size=large"), SizeVerdict::Reject);
    assert_eq!(verdict_for(html, "/chart.svg.png"), SizeVerdict::Accept);
}

#[test]
fn thumbnail_hints_in_url() {
    let html = "<img>";
    assert_eq!(verdict_for(html, "/a-150x150.jpg"), SizeVerdict::Reject);
    assert_eq!(verdict_for(html, "/resize/120x60/a.jpg"), SizeVerdict::Reject);
    assert_eq!(verdict_for(html, "/resize/1200x600/a.jpg"), SizeVerdict::Unknown);
    assert_eq!(verdict_for(html, "/a.jpg"), SizeVerdict::Unknown);
}

#[test]
fn attribute_thresholds() {
    assert_eq!(verdict_for(r#"<img width="151" height="151">"#, "/a.jpg"), SizeVerdict::Accept);
    assert_eq!(verdict_for(r#"<img width="150" height="200">"#, "/a.jpg"), SizeVerdict::Reject);
    assert_eq!(verdict_for(r#"<img width="auto" height="200">"#, "/a.jpg"), SizeVerdict::Unknown);
}

#[test]
fn exclusion_is_substring_based() {
    let doc = dom::parse(
        r#"<div id="one" class="ad-banner-top"></div>
           <div id="sponsor-link" class=""></div>
           <div id="three" class="additional-content"></div>
           <div id="four" class="article-body"></div>"#,
    );
    let flags: Vec<bool> = dom::elements(&doc.select("div")).iter().map(is_excluded).collect();
    assert_eq!(flags, vec![true, true, true, false]);
}

//! Parsed page view
//!
//! [`ParsedPage`] wraps a parsed HTML document and exposes the views the
//! record builder and the structured extractors need: flattened text, the
//! main content container, tables, lists, media references, resolved links,
//! and heading-then-next-block lookup.
//!
//! Navigational subtrees (scripts, headers, footers, nav/aside elements, and
//! anything whose class looks like chrome) are invisible to every view
//! except [`ParsedPage::breadcrumb`], which reads the full document so that
//! positional breadcrumb extraction keeps working.

use crate::crawler::error::CrawlError;
use crate::crawler::text::tidy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use url::Url;

/// Tags whose subtrees never contribute content
const EXCLUDED_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "svg", "header", "footer", "nav", "aside",
];

/// Link prefixes that are not crawlable targets
const SKIPPED_LINK_PREFIXES: &[&str] = &["javascript:", "mailto:", "tel:", "#", "whatsapp:"];

/// Selectors tried in order to find the main content container
const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    r#"[role="main"]"#,
    ".content",
    ".main-content",
    "#content",
    ".page-content",
];

fn sel(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

fn excluded_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)header|footer|nav|menu|sidebar|social|cookie").expect("valid regex"))
}

fn breadcrumb_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)breadcrumb").expect("valid regex"))
}

fn document_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.(pdf|doc|docx|xls|xlsx|ppt|pptx)$").expect("valid regex"))
}

fn featured_image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)featured|main|article").expect("valid regex"))
}

fn is_excluded(el: &ElementRef) -> bool {
    let name = el.value().name();
    if EXCLUDED_TAGS.contains(&name) {
        return true;
    }
    el.value()
        .attr("class")
        .is_some_and(|class| excluded_class_re().is_match(class))
}

fn in_excluded_subtree(el: &ElementRef) -> bool {
    if is_excluded(el) {
        return true;
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| is_excluded(&ancestor))
}

fn element_text(el: &ElementRef) -> String {
    let parts: Vec<&str> = el.text().map(str::trim).filter(|t| !t.is_empty()).collect();
    parts.join(" ")
}

/// Lowercase for keyword matching, with combining dots stripped so dotted
/// capital İ compares equal to plain i
fn match_key(text: &str) -> String {
    text.to_lowercase().replace('\u{0307}', "")
}

/// A parsed table: header cells (from `th` elements anywhere in the table)
/// and all rows, header row included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Header cell texts
    pub headers: Vec<String>,
    /// Row cell texts, in document order
    pub rows: Vec<Vec<String>>,
}

/// An image or document reference
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaRef {
    /// Absolute URL of the resource
    pub url: String,
    /// Alt text or link label
    pub label: String,
}

/// The block element following a matched heading
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineBlock {
    /// An unordered or ordered list's item texts
    List(Vec<String>),
    /// A table's rows
    Table(Vec<Vec<String>>),
    /// A paragraph's text
    Paragraph(String),
}

/// Exclusion-aware view over one fetched page
pub struct ParsedPage {
    url: Url,
    document: Html,
}

impl ParsedPage {
    /// Parse a fetched HTML body
    pub fn new(url: &str, html: &str) -> Result<Self, CrawlError> {
        Ok(Self {
            url: Url::parse(url)?,
            document: Html::parse_document(html),
        })
    }

    /// The page's own URL, used for resolving relative links
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Raw `<title>` text
    pub fn title(&self) -> Option<String> {
        static SEL: OnceLock<Selector> = OnceLock::new();
        let title_sel = SEL.get_or_init(|| sel("title"));
        self.document
            .select(title_sel)
            .next()
            .map(|el| element_text(&el))
            .filter(|t| !t.is_empty())
    }

    /// Text of the first non-navigational `<h1>`
    pub fn primary_heading(&self) -> Option<String> {
        static SEL: OnceLock<Selector> = OnceLock::new();
        let h1_sel = SEL.get_or_init(|| sel("h1"));
        self.document
            .select(h1_sel)
            .find(|el| !in_excluded_subtree(el))
            .map(|el| tidy(&element_text(&el)))
            .filter(|t| !t.is_empty())
    }

    /// Content of the description meta tag
    pub fn meta_description(&self) -> Option<String> {
        static SEL: OnceLock<Selector> = OnceLock::new();
        let meta_sel = SEL.get_or_init(|| sel(r#"meta[name="description"]"#));
        self.document
            .select(meta_sel)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|c| c.to_string())
            .filter(|c| !c.is_empty())
    }

    /// All text of the document with excluded subtrees pruned
    ///
    /// Used by extractors that scan for regex patterns anywhere on the page.
    pub fn text(&self) -> String {
        static SEL: OnceLock<Selector> = OnceLock::new();
        let any_sel = SEL.get_or_init(|| sel("*"));
        let mut out = String::new();
        for el in self.document.select(any_sel) {
            if in_excluded_subtree(&el) {
                continue;
            }
            for child in el.children() {
                if let Some(text) = child.value().as_text() {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        out.push_str(trimmed);
                        out.push(' ');
                    }
                }
            }
        }
        out.trim_end().to_string()
    }

    /// Flattened text of the main content container
    ///
    /// Gathers paragraph, heading, and list-item elements and keeps blocks
    /// longer than ten characters, so link farms and one-word labels do not
    /// pollute the record content.
    pub fn content_text(&self) -> String {
        static SEL: OnceLock<Selector> = OnceLock::new();
        let block_sel = SEL.get_or_init(|| sel("p, h1, h2, h3, h4, h5, h6, li"));
        let container = self.main_content();
        let mut parts = Vec::new();
        for el in container.select(block_sel) {
            if in_excluded_subtree(&el) {
                continue;
            }
            let text = element_text(&el);
            if text.chars().count() > 10 {
                parts.push(text);
            }
        }
        parts.join(" ")
    }

    /// Tables inside the main content container
    pub fn tables(&self) -> Vec<Table> {
        static TABLE: OnceLock<Selector> = OnceLock::new();
        let table_sel = TABLE.get_or_init(|| sel("table"));
        self.main_content()
            .select(table_sel)
            .filter(|el| !in_excluded_subtree(el))
            .map(|el| parse_table(&el))
            .collect()
    }

    /// Lists inside the main content container, as direct-child item texts
    pub fn lists(&self) -> Vec<Vec<String>> {
        static LIST: OnceLock<Selector> = OnceLock::new();
        let list_sel = LIST.get_or_init(|| sel("ul, ol"));
        self.main_content()
            .select(list_sel)
            .filter(|el| !in_excluded_subtree(el))
            .map(|el| {
                el.children()
                    .filter_map(ElementRef::wrap)
                    .filter(|child| child.value().name() == "li")
                    .map(|li| tidy(&element_text(&li)))
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .collect()
    }

    /// Images inside the main content container, capped at ten
    pub fn images(&self) -> Vec<MediaRef> {
        static IMG: OnceLock<Selector> = OnceLock::new();
        let img_sel = IMG.get_or_init(|| sel("img"));
        self.main_content()
            .select(img_sel)
            .filter_map(|el| {
                let src = el.value().attr("src")?;
                let url = self.url.join(src).ok()?;
                Some(MediaRef {
                    url: url.to_string(),
                    label: el.value().attr("alt").unwrap_or_default().to_string(),
                })
            })
            .take(10)
            .collect()
    }

    /// Links to downloadable documents anywhere on the page, capped at ten
    pub fn document_links(&self) -> Vec<MediaRef> {
        static A: OnceLock<Selector> = OnceLock::new();
        let a_sel = A.get_or_init(|| sel("a[href]"));
        self.document
            .select(a_sel)
            .filter_map(|el| {
                let href = el.value().attr("href")?;
                if !document_link_re().is_match(href) {
                    return None;
                }
                let url = self.url.join(href).ok()?;
                Some(MediaRef {
                    url: url.to_string(),
                    label: tidy(&element_text(&el)),
                })
            })
            .take(10)
            .collect()
    }

    /// Outbound hyperlinks, resolved to absolute URLs
    ///
    /// Javascript/mailto/tel/fragment/whatsapp targets are skipped, fragments
    /// are stripped, trailing slashes trimmed, and unresolvable hrefs are
    /// dropped individually. Links inside excluded subtrees do not count;
    /// navigation menus would otherwise dominate the frontier.
    pub fn links(&self) -> Vec<String> {
        static A: OnceLock<Selector> = OnceLock::new();
        let a_sel = A.get_or_init(|| sel("a[href]"));
        let mut seen = std::collections::HashSet::new();
        let mut links = Vec::new();
        for el in self.document.select(a_sel) {
            if in_excluded_subtree(&el) {
                continue;
            }
            let Some(href) = el.value().attr("href") else {
                continue;
            };
            if SKIPPED_LINK_PREFIXES.iter().any(|p| href.starts_with(p)) {
                continue;
            }
            let Ok(mut resolved) = self.url.join(href) else {
                continue;
            };
            resolved.set_fragment(None);
            let link = resolved.to_string().trim_end_matches('/').to_string();
            if link.is_empty() {
                continue;
            }
            if seen.insert(link.clone()) {
                links.push(link);
            }
        }
        links
    }

    /// Breadcrumb trail entries
    ///
    /// Reads the full document: breadcrumbs live inside `<nav>` elements,
    /// which every other view prunes.
    pub fn breadcrumb(&self) -> Vec<String> {
        static NAV: OnceLock<Selector> = OnceLock::new();
        static A: OnceLock<Selector> = OnceLock::new();
        let nav_sel = NAV.get_or_init(|| sel("nav"));
        let a_sel = A.get_or_init(|| sel("a"));
        let Some(nav) = self.document.select(nav_sel).find(|el| {
            el.value()
                .attr("class")
                .is_some_and(|class| breadcrumb_class_re().is_match(class))
        }) else {
            return Vec::new();
        };
        nav.select(a_sel)
            .map(|a| tidy(&element_text(&a)))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Find the first `h2`/`h3`/`h4` whose text contains any keyword and
    /// return the next following block whose tag is in `follow`
    ///
    /// "Following" is document order, the way a reader scans past a heading,
    /// not strict siblinghood.
    pub fn heading_block(&self, keywords: &[&str], follow: &[&str]) -> Option<OutlineBlock> {
        static ANY: OnceLock<Selector> = OnceLock::new();
        let any_sel = ANY.get_or_init(|| sel("*"));
        let elements: Vec<ElementRef> = self.document.select(any_sel).collect();

        let heading_idx = elements.iter().position(|el| {
            matches!(el.value().name(), "h2" | "h3" | "h4")
                && !in_excluded_subtree(el)
                && {
                    let key = match_key(&element_text(el));
                    keywords.iter().any(|kw| key.contains(kw))
                }
        })?;

        let block = elements[heading_idx + 1..]
            .iter()
            .find(|el| follow.contains(&el.value().name()) && !in_excluded_subtree(el))?;

        Some(match block.value().name() {
            "table" => OutlineBlock::Table(parse_table(block).rows),
            "ul" | "ol" => OutlineBlock::List(list_items(block)),
            _ => OutlineBlock::Paragraph(tidy(&element_text(block))),
        })
    }

    /// Text of the first non-navigational paragraph
    pub fn first_paragraph(&self) -> Option<String> {
        static P: OnceLock<Selector> = OnceLock::new();
        let p_sel = P.get_or_init(|| sel("p"));
        self.document
            .select(p_sel)
            .filter(|el| !in_excluded_subtree(el))
            .map(|el| tidy(&element_text(&el)))
            .find(|t| !t.is_empty())
    }

    /// Datetime attribute (or text) of the first `<time>` element
    pub fn time_datetime(&self) -> Option<String> {
        static TIME: OnceLock<Selector> = OnceLock::new();
        let time_sel = TIME.get_or_init(|| sel("time"));
        let el = self.document.select(time_sel).next()?;
        match el.value().attr("datetime") {
            Some(dt) => Some(dt.to_string()),
            None => Some(tidy(&element_text(&el))).filter(|t| !t.is_empty()),
        }
    }

    /// Paragraph texts inside the first `<article>` element
    pub fn article_paragraphs(&self) -> Vec<String> {
        static ARTICLE: OnceLock<Selector> = OnceLock::new();
        static P: OnceLock<Selector> = OnceLock::new();
        let article_sel = ARTICLE.get_or_init(|| sel("article"));
        let p_sel = P.get_or_init(|| sel("p"));
        let Some(article) = self.document.select(article_sel).next() else {
            return Vec::new();
        };
        article
            .select(p_sel)
            .map(|p| tidy(&element_text(&p)))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Absolute URL of an image marked as featured/main/article
    pub fn featured_image(&self) -> Option<String> {
        static IMG: OnceLock<Selector> = OnceLock::new();
        let img_sel = IMG.get_or_init(|| sel("img"));
        self.document
            .select(img_sel)
            .find(|el| {
                el.value()
                    .attr("class")
                    .is_some_and(|class| featured_image_re().is_match(class))
            })
            .and_then(|el| el.value().attr("src"))
            .and_then(|src| self.url.join(src).ok())
            .map(|url| url.to_string())
    }

    fn main_content(&self) -> ElementRef<'_> {
        static SELS: OnceLock<Vec<Selector>> = OnceLock::new();
        static BODY: OnceLock<Selector> = OnceLock::new();
        let candidates = SELS.get_or_init(|| MAIN_CONTENT_SELECTORS.iter().map(|s| sel(s)).collect());
        for candidate in candidates {
            if let Some(el) = self.document.select(candidate).next() {
                return el;
            }
        }
        let body_sel = BODY.get_or_init(|| sel("body"));
        self.document
            .select(body_sel)
            .next()
            .unwrap_or_else(|| self.document.root_element())
    }
}

fn list_items(el: &ElementRef) -> Vec<String> {
    static LI: OnceLock<Selector> = OnceLock::new();
    let li_sel = LI.get_or_init(|| sel("li"));
    el.select(li_sel)
        .map(|li| tidy(&element_text(&li)))
        .filter(|item| !item.is_empty())
        .collect()
}

fn parse_table(el: &ElementRef) -> Table {
    static TR: OnceLock<Selector> = OnceLock::new();
    static CELL: OnceLock<Selector> = OnceLock::new();
    static TH: OnceLock<Selector> = OnceLock::new();
    let tr_sel = TR.get_or_init(|| sel("tr"));
    let cell_sel = CELL.get_or_init(|| sel("td, th"));
    let th_sel = TH.get_or_init(|| sel("th"));

    let headers = el
        .select(th_sel)
        .map(|th| tidy(&element_text(&th)))
        .filter(|t| !t.is_empty())
        .collect();

    let rows = el
        .select(tr_sel)
        .filter_map(|tr| {
            let cells: Vec<String> = tr
                .select(cell_sel)
                .map(|cell| tidy(&element_text(&cell)))
                .filter(|c| !c.is_empty())
                .collect();
            (!cells.is_empty()).then_some(cells)
        })
        .collect();

    Table { headers, rows }
}

//! Banner and notice detection on the INPI results page

use regex::Regex;
use scraper::{ElementRef, Html};

use super::table::selector;
use crate::error::Result;

/// Phrase that opens the "N processes found" announcement
pub const RESULTS_BANNER: &str = "Foram encontrados";

/// Phrase the portal prints when a search matched nothing
pub const NO_RESULTS_NOTICE: &str = "Nenhum resultado foi encontrado";

/// Extracts the total announced by the results banner
///
/// Finds the text node containing [`RESULTS_BANNER`] and returns the first
/// emphasized (`<b>`/`<strong>`) integer that follows it within the same
/// element. Returns 0 when no banner is present.
pub fn parse_total_reported(document: &Html) -> Result<u32> {
    let emphasis = selector("b, strong")?;

    for node in document.tree.nodes() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        if !text.contains(RESULTS_BANNER) {
            continue;
        }

        let total = node
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find_map(|sibling| {
                if emphasis.matches(&sibling) {
                    parse_count(&sibling.text().collect::<String>())
                } else {
                    sibling
                        .select(&emphasis)
                        .find_map(|el| parse_count(&el.text().collect::<String>()))
                }
            });

        if let Some(total) = total {
            return Ok(total);
        }
    }

    Ok(0)
}

/// Whether the raw page carries the explicit "no results" notice
pub fn has_no_results_notice(html: &str) -> bool {
    html.contains(NO_RESULTS_NOTICE)
}

/// Parses an integer such as "1.234" (pt-BR thousands separator)
fn parse_count(text: &str) -> Option<u32> {
    let Ok(re) = Regex::new(r"\d{1,3}(?:\.\d{3})+|\d+") else {
        return None;
    };
    let digits = re.find(text)?.as_str().replace('.', "");
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(html: &str) -> u32 {
        parse_total_reported(&Html::parse_document(html)).unwrap()
    }

    #[test]
    fn test_parse_total_reported() {
        let html = r#"
        <html><body>
            <font class="normal">Foram encontrados <b>37</b> processos que satisfazem à pesquisa.
            Mostrando página <b>1</b> de <b>1</b>.</font>
        </body></html>
        "#;
        assert_eq!(total(html), 37);
    }

    #[test]
    fn test_parse_total_reported_thousands_separator() {
        let html = "<div>Foram encontrados <strong>1.234</strong> processos</div>";
        assert_eq!(total(html), 1234);
    }

    #[test]
    fn test_parse_total_reported_ignores_emphasis_outside_banner() {
        let html = r#"
        <html><body>
            <p><b>7</b> avisos</p>
            <div>Foram encontrados <b>120</b> processos</div>
        </body></html>
        "#;
        assert_eq!(total(html), 120);
    }

    #[test]
    fn test_parse_total_reported_skips_emphasis_before_banner() {
        let html = "<div><b>7</b> avisos. Foram encontrados <b>120</b> processos</div>";
        assert_eq!(total(html), 120);
    }

    #[test]
    fn test_parse_total_reported_absent() {
        assert_eq!(total("<html><body><b>12</b></body></html>"), 0);
    }

    #[test]
    fn test_parse_total_reported_without_number() {
        assert_eq!(total("<p>Foram encontrados <b>vários</b> processos</p>"), 0);
    }

    #[test]
    fn test_has_no_results_notice() {
        assert!(has_no_results_notice(
            "<font>Nenhum resultado foi encontrado para a sua pesquisa.</font>"
        ));
        assert!(!has_no_results_notice("<html></html>"));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count(" 2.500 "), Some(2500));
        assert_eq!(parse_count("none"), None);
    }
}

//! URL and form helpers for the INPI portal
//!
//! Provides functions for building the portal endpoints and the
//! form-encoded payloads they expect.

use crate::types::{Credentials, SearchMode};

/// Public portal address
pub const BASE_URL: &str = "https://busca.inpi.gov.br";

const LOGIN_PATH: &str = "/pePI/servlet/LoginController";
const WARMUP_PATH: &str = "/pePI/jsp/marcas/Pesquisa_classe_basica.jsp";
const SEARCH_PATH: &str = "/pePI/servlet/MarcasServletController";

/// Results requested per page; only the first page is ever fetched
pub const PAGE_SIZE: &str = "100";

/// Builds the login endpoint URL
///
/// # Example
/// ```
/// use inpi_core::url::build_login_url;
/// let url = build_login_url("https://busca.inpi.gov.br");
/// assert_eq!(url, "https://busca.inpi.gov.br/pePI/servlet/LoginController");
/// ```
pub fn build_login_url(base_url: &str) -> String {
    join(base_url, LOGIN_PATH)
}

/// Builds the basic-classification search page URL, fetched before searching
pub fn build_warmup_url(base_url: &str) -> String {
    join(base_url, WARMUP_PATH)
}

/// Builds the search form submission URL
pub fn build_search_url(base_url: &str) -> String {
    join(base_url, SEARCH_PATH)
}

fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Form fields for the login POST
pub fn login_form(credentials: &Credentials) -> Vec<(&'static str, String)> {
    vec![
        ("T_Login", credentials.login.clone()),
        ("T_Senha", credentials.secret.clone()),
        ("action", "login".to_string()),
    ]
}

/// Form fields for the mark search POST
///
/// # Example
/// ```
/// use inpi_core::SearchMode;
/// use inpi_core::url::search_form;
/// let form = search_form("ACME", SearchMode::Exact);
/// assert!(form.contains(&("buscaExata", "sim".to_string())));
/// ```
pub fn search_form(mark: &str, mode: SearchMode) -> Vec<(&'static str, String)> {
    let (exact, free_text) = match mode {
        SearchMode::Exact => ("sim", ""),
        SearchMode::Radical => ("nao", "Pesquisa Radical"),
    };

    vec![
        ("buscaExata", exact.to_string()),
        ("txt", free_text.to_string()),
        ("marca", mark.to_string()),
        ("registerPerPage", PAGE_SIZE.to_string()),
        ("Action", "searchMarca".to_string()),
        ("tipoPesquisa", "BY_MARCA_CLASSIF_BASICA".to_string()),
    ]
}

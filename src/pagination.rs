use serde::Deserialize;
use url::Url;

/// Page size used by every listing route. The viewer renders fixed-size
/// pages and the upstream indexer expects the size as `count`.
pub const PAGE_COUNT: i32 = 20;

#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: i32,
    pub count: i32,
}

impl Pagination {
    pub fn from_query(query: PaginationQuery) -> Self {
        Self {
            page: get_page_param(query.page),
            count: PAGE_COUNT,
        }
    }
}

/// Pages are zero-based. An absent or malformed `page` falls back to the
/// first page; the raw string is never forwarded upstream.
pub fn get_page_param(param: Option<String>) -> i32 {
    let Some(page) = param else {
        return 0;
    };

    if page.is_empty() || !page.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }

    page.parse().unwrap_or(0)
}

pub trait ApplyPagination {
    fn apply_pagination(&mut self, pagination: &Pagination);
}

impl ApplyPagination for Url {
    fn apply_pagination(&mut self, pagination: &Pagination) {
        self.query_pairs_mut()
            .append_pair("page", &pagination.page.to_string())
            .append_pair("count", &pagination.count.to_string());
    }
}

#[cfg(test)]
mod tests {
    use crate::pagination::{ApplyPagination, PAGE_COUNT, Pagination, get_page_param};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use url::Url;

    #[rstest]
    #[case(None, 0)]
    #[case(Some("0".to_string()), 0)]
    #[case(Some("3".to_string()), 3)]
    #[case(Some("".to_string()), 0)]
    #[case(Some("string".to_string()), 0)]
    #[case(Some("-1".to_string()), 0)]
    #[case(Some("2.5".to_string()), 0)]
    #[case(Some("99999999999999999999".to_string()), 0)]
    fn test_get_page_param(#[case] input: Option<String>, #[case] expected: i32) {
        assert_eq!(get_page_param(input), expected);
    }

    #[rstest]
    #[case(
        "http://indexer.local/stake/delegations",
        0,
        "http://indexer.local/stake/delegations?page=0&count=20"
    )]
    #[case(
        "http://indexer.local/gov-action-proposals",
        3,
        "http://indexer.local/gov-action-proposals?page=3&count=20"
    )]
    fn test_apply_pagination(#[case] base: &str, #[case] page: i32, #[case] expected: &str) {
        let mut url = Url::parse(base).unwrap();

        url.apply_pagination(&Pagination {
            page,
            count: PAGE_COUNT,
        });

        assert_eq!(url.as_str(), expected);
    }
}

//! The volume search query: category, term and options rendered into a request target.

use std::str::FromStr;

use url::form_urlencoded;

use super::{Query, SearchOptions};

/// Path of the volume search resource, relative to the API host.
pub const VOLUMES_PATH: &str = "/books/v1/volumes";

/// Full URL of the volume search resource on the production API.
pub const VOLUMES_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Which part of a volume record the search term is matched against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchCategory {
    Title,
    Author,
    Publisher,
    Subject,
    Isbn,
    Lccn,
    Oclc,
    /// Plain keyword search across the whole record.
    #[default]
    Unrestricted,
}
impl SearchCategory {
    /// The `q` keyword for this category, or `None` for a plain keyword search.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            SearchCategory::Title => Some("intitle"),
            SearchCategory::Author => Some("inauthor"),
            SearchCategory::Publisher => Some("inpublisher"),
            SearchCategory::Subject => Some("subject"),
            SearchCategory::Isbn => Some("isbn"),
            SearchCategory::Lccn => Some("lccn"),
            SearchCategory::Oclc => Some("oclc"),
            SearchCategory::Unrestricted => None,
        }
    }
}
impl std::fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SearchCategory::Title => "title",
                SearchCategory::Author => "author",
                SearchCategory::Publisher => "publisher",
                SearchCategory::Subject => "subject",
                SearchCategory::Isbn => "isbn",
                SearchCategory::Lccn => "lccn",
                SearchCategory::Oclc => "oclc",
                SearchCategory::Unrestricted => "any",
            }
        )?;
        Ok(())
    }
}
impl FromStr for SearchCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" | "intitle" => Ok(SearchCategory::Title),
            "author" | "inauthor" => Ok(SearchCategory::Author),
            "publisher" | "inpublisher" => Ok(SearchCategory::Publisher),
            "subject" => Ok(SearchCategory::Subject),
            "isbn" => Ok(SearchCategory::Isbn),
            "lccn" => Ok(SearchCategory::Lccn),
            "oclc" => Ok(SearchCategory::Oclc),
            "any" | "unrestricted" => Ok(SearchCategory::Unrestricted),
            _ => Err(()),
        }
    }
}

/// A single volume search: what to match, where to match it, and how to shape the results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub category: SearchCategory,
    pub term: String,
    pub options: Option<SearchOptions>,
}

impl Query for SearchQuery {
    fn append_pairs<T: form_urlencoded::Target>(
        &self,
        pairs: &mut form_urlencoded::Serializer<'_, T>,
    ) {
        if let Some(options) = &self.options {
            options.append_pairs(pairs);
        }
        pairs.append_pair("q", &self.q());
    }
}

impl SearchQuery {
    pub fn new(category: SearchCategory, term: &str) -> Self {
        Self {
            category,
            term: term.to_string(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// The unencoded value of the `q` parameter, e.g. `isbn:9780321774637`.
    pub fn q(&self) -> String {
        match self.category.prefix() {
            Some(prefix) => format!("{}:{}", prefix, self.term),
            None => self.term.clone(),
        }
    }

    /// The complete request target against the production endpoint.
    pub fn to_request_target(&self) -> String {
        format!("{}?{}", VOLUMES_ENDPOINT, self.to_query_string())
    }
}

/// Builds the encoded request target for a volume search without touching the network.
///
/// ```
/// use gbsearch_api::{build_query, SearchCategory};
///
/// let target = build_query(SearchCategory::Isbn, "9780321774637", None);
/// assert_eq!(
///     target,
///     "https://www.googleapis.com/books/v1/volumes?q=isbn%3A9780321774637"
/// );
/// ```
pub fn build_query(
    category: SearchCategory,
    term: &str,
    options: Option<&SearchOptions>,
) -> String {
    let query = SearchQuery {
        category,
        term: term.to_string(),
        options: options.cloned(),
    };
    query.to_request_target()
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{
        build_query, OrderBy, Query, SearchCategory, SearchOptions, SearchQuery, VOLUMES_ENDPOINT,
        VOLUMES_PATH,
    };

    #[test]
    fn test_endpoint_is_host_plus_path() {
        let url = Url::parse(VOLUMES_ENDPOINT).unwrap();
        assert_eq!(url.host_str(), Some("www.googleapis.com"));
        assert_eq!(url.path(), VOLUMES_PATH);
    }

    #[test]
    fn test_volume_query() {
        insta::assert_snapshot!(
            build_query(SearchCategory::Title, "Programming in Go", None),
            @"https://www.googleapis.com/books/v1/volumes?q=intitle%3AProgramming+in+Go"
        );

        insta::assert_snapshot!(
            build_query(SearchCategory::Unrestricted, "rust & go", None),
            @"https://www.googleapis.com/books/v1/volumes?q=rust+%26+go"
        );

        let options = SearchOptions::new()
            .with_max_results(5)
            .with_order_by(OrderBy::Newest);
        insta::assert_snapshot!(
            build_query(SearchCategory::Author, "Mark Summerfield", Some(&options)),
            @"https://www.googleapis.com/books/v1/volumes?maxResults=5&orderBy=newest&q=inauthor%3AMark+Summerfield"
        );
    }

    #[test]
    fn test_empty_term_keeps_prefix() {
        let query = SearchQuery::new(SearchCategory::Lccn, "");
        assert_eq!(query.q(), "lccn:");
        assert_eq!(query.to_query_string(), "q=lccn%3A");
    }

    #[test]
    fn test_add_to_url_keeps_custom_base() {
        let base = Url::parse("http://127.0.0.1:8080/books/v1/volumes").unwrap();
        let url = SearchQuery::new(SearchCategory::Subject, "fiction").add_to_url(&base);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/books/v1/volumes?q=subject%3Afiction"
        );
    }

    #[test]
    fn test_category_names_parse() {
        assert_eq!("intitle".parse::<SearchCategory>(), Ok(SearchCategory::Title));
        assert_eq!("author".parse::<SearchCategory>(), Ok(SearchCategory::Author));
        assert_eq!("any".parse::<SearchCategory>(), Ok(SearchCategory::Unrestricted));
        assert!("keyword".parse::<SearchCategory>().is_err());
        assert_eq!(SearchCategory::Unrestricted.prefix(), None);
    }
}

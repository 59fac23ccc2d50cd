//! Optional search modifiers: filtering, paging, ordering and locale restriction.

use std::str::FromStr;

use url::form_urlencoded;

use super::Query;

/// Optional settings applied to a volume search.
///
/// Every field starts out unset. Setters that receive an empty or
/// out-of-range value leave the field as it was instead of failing, so a
/// caller can pass through whatever it has without pre-checking it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    epub_only: Option<bool>,
    filter: Option<Filter>,
    language_code: Option<String>,
    start_index: Option<i64>,
    max_results: Option<i64>,
    projection: Option<Projection>,
    print_type: Option<PrintType>,
    order_by: Option<OrderBy>,
    country_code: Option<String>,
}

impl Query for SearchOptions {
    fn append_pairs<T: form_urlencoded::Target>(
        &self,
        pairs: &mut form_urlencoded::Serializer<'_, T>,
    ) {
        if self.epub_only == Some(true) {
            pairs.append_pair("download", "epub");
        }
        if let Some(filter) = self.filter {
            pairs.append_pair("filter", filter.as_str());
        }
        if let Some(language_code) = &self.language_code {
            pairs.append_pair("langRestrict", language_code);
        }
        if let Some(start_index) = self.start_index {
            pairs.append_pair("startIndex", &start_index.to_string());
        }
        if let Some(max_results) = self.max_results {
            pairs.append_pair("maxResults", &max_results.to_string());
        }
        if let Some(projection) = self.projection {
            pairs.append_pair("projection", projection.as_str());
        }
        if let Some(print_type) = self.print_type {
            pairs.append_pair("printType", print_type.as_str());
        }
        if let Some(order_by) = self.order_by {
            pairs.append_pair("orderBy", order_by.as_str());
        }
        if let Some(country_code) = &self.country_code {
            pairs.append_pair("country", country_code);
        }
    }
}

impl SearchOptions {
    /// Options with nothing set. Equivalent to `SearchOptions::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to volumes with a downloadable EPub.
    ///
    /// Only `true` adds a parameter; `false` is recorded but renders nothing.
    pub fn with_epub_only(mut self, epub_only: bool) -> Self {
        self.epub_only = Some(epub_only);
        self
    }

    /// Sets the viewability / ebook filter. `None` leaves the current value.
    pub fn with_filter(mut self, filter: impl Into<Option<Filter>>) -> Self {
        if let Some(filter) = filter.into() {
            self.filter = Some(filter);
        }
        self
    }

    /// Restricts results to an ISO-639-1 language code such as `en` or `fr`.
    /// An empty code leaves the current value.
    pub fn with_language_code(mut self, language_code: &str) -> Self {
        if !language_code.is_empty() {
            self.language_code = Some(language_code.to_string());
        }
        self
    }

    /// Zero-based offset of the first result. Values `<= 0` are ignored.
    pub fn with_start_index(mut self, start_index: i64) -> Self {
        if start_index > 0 {
            self.start_index = Some(start_index);
        }
        self
    }

    /// Page size. The API accepts at most 40; values `<= 0` are ignored.
    pub fn with_max_results(mut self, max_results: i64) -> Self {
        if max_results > 0 {
            self.max_results = Some(max_results);
        }
        self
    }

    /// Sets how much of each volume the API returns. `None` leaves the current value.
    pub fn with_projection(mut self, projection: impl Into<Option<Projection>>) -> Self {
        if let Some(projection) = projection.into() {
            self.projection = Some(projection);
        }
        self
    }

    /// Restricts results to books or magazines. `None` leaves the current value.
    pub fn with_print_type(mut self, print_type: impl Into<Option<PrintType>>) -> Self {
        if let Some(print_type) = print_type.into() {
            self.print_type = Some(print_type);
        }
        self
    }

    /// Sets the result ordering. `None` leaves the current value.
    pub fn with_order_by(mut self, order_by: impl Into<Option<OrderBy>>) -> Self {
        if let Some(order_by) = order_by.into() {
            self.order_by = Some(order_by);
        }
        self
    }

    /// Restricts results to what is available from an ISO-3166-1 country,
    /// e.g. `us`. An empty code leaves the current value.
    pub fn with_country_code(mut self, country_code: &str) -> Self {
        if !country_code.is_empty() {
            self.country_code = Some(country_code.to_string());
        }
        self
    }

    pub fn epub_only(&self) -> bool {
        self.epub_only.unwrap_or(false)
    }

    pub fn filter(&self) -> Option<Filter> {
        self.filter
    }

    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    pub fn start_index(&self) -> Option<i64> {
        self.start_index
    }

    pub fn max_results(&self) -> Option<i64> {
        self.max_results
    }

    pub fn projection(&self) -> Option<Projection> {
        self.projection
    }

    pub fn print_type(&self) -> Option<PrintType> {
        self.print_type
    }

    pub fn order_by(&self) -> Option<OrderBy> {
        self.order_by
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }
}

/// Restricts results by viewability or ebook availability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    /// At least part of the text is previewable.
    Partial,
    /// All of the text is viewable.
    Full,
    /// Free Google eBooks.
    FreeEbooks,
    /// Google eBooks with a price.
    PaidEbooks,
    /// Google eBooks, paid or free.
    Ebooks,
}
impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::Partial => "partial",
            Filter::Full => "full",
            Filter::FreeEbooks => "free-ebooks",
            Filter::PaidEbooks => "paid-ebooks",
            Filter::Ebooks => "ebooks",
        }
    }
}
impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Filter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partial" => Ok(Filter::Partial),
            "full" => Ok(Filter::Full),
            "free-ebooks" => Ok(Filter::FreeEbooks),
            "paid-ebooks" => Ok(Filter::PaidEbooks),
            "ebooks" => Ok(Filter::Ebooks),
            _ => Err(()),
        }
    }
}

/// Restricts results to a kind of publication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintType {
    All,
    Books,
    Magazines,
}
impl PrintType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrintType::All => "all",
            PrintType::Books => "books",
            PrintType::Magazines => "magazines",
        }
    }
}
impl std::fmt::Display for PrintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for PrintType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PrintType::All),
            "books" => Ok(PrintType::Books),
            "magazines" => Ok(PrintType::Magazines),
            _ => Err(()),
        }
    }
}

/// How much of each volume the API returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    /// All volume metadata.
    Full,
    /// A subset of volume and access metadata.
    Lite,
}
impl Projection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::Full => "full",
            Projection::Lite => "lite",
        }
    }
}
impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Projection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Projection::Full),
            "lite" => Ok(Projection::Lite),
            _ => Err(()),
        }
    }
}

/// Result ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderBy {
    /// Most relevant first. This is what the API does when no order is sent.
    Relevance,
    /// Most recently published first.
    Newest,
}
impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Relevance => "relevance",
            OrderBy::Newest => "newest",
        }
    }
}
impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for OrderBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(OrderBy::Relevance),
            "newest" => Ok(OrderBy::Newest),
            _ => Err(()),
        }
    }
}

use gbsearch_api::types::SearchResponse;
use gbsearch_api::DecodeError;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_isbn_volume_full() {
    let json = load_fixture("volumes_isbn.json");
    let resp = SearchResponse::decode(json.as_bytes()).unwrap();
    assert_eq!(resp.kind, "books#volumes");
    assert_eq!(resp.total_items, 1);
    assert_eq!(resp.items.len(), 1);

    let item = &resp.items[0];
    assert_eq!(item.kind, "books#volume");
    assert_eq!(item.id, "Ro7yU7hjBZUC");
    assert_eq!(item.etag, "kT3aJp9sQ1w");
    assert_eq!(
        item.self_link,
        "https://www.googleapis.com/books/v1/volumes/Ro7yU7hjBZUC"
    );

    let volume = &item.volume_info;
    assert_eq!(volume.title, "Programming in Go");
    assert_eq!(volume.subtitle, "Creating Applications for the 21st Century");
    assert_eq!(volume.authors, vec!["Mark Summerfield".to_string()]);
    assert_eq!(volume.publisher, "Addison-Wesley");
    assert_eq!(volume.published_date, "2012-04-29");
    assert_eq!(volume.industry_identifiers.len(), 1);
    assert_eq!(volume.industry_identifiers[0].kind, "ISBN_13");
    assert_eq!(volume.industry_identifiers[0].identifier, "9780321774637");
    assert_eq!(volume.page_count, 475);
    assert_eq!(volume.dimensions.height, "23.00 cm");
    assert_eq!(volume.print_type, "BOOK");
    assert_eq!(volume.main_category, "Computers / Programming Languages / General");
    assert_eq!(volume.categories, vec!["Computers".to_string()]);
    assert_eq!(volume.average_rating, 4.5);
    assert_eq!(volume.ratings_count, 12);
    assert_eq!(volume.content_version, "1.4.4.0.preview.0");
    assert!(volume.image_links.thumbnail.ends_with("zoom=1"));
    assert_eq!(volume.image_links.large, "");
    assert_eq!(volume.language, "en");
    assert!(volume.preview_link.contains("isbn:9780321774637"));
    assert!(volume.info_link.starts_with("http://books.google.com/books?id="));
    assert!(volume.canonical_volume_link.contains("Programming_in_Go"));
    assert_eq!(volume.isbn_13(), Some("9780321774637"));
    assert_eq!(volume.published_year(), Some(2012));

    let sale = &item.sale_info;
    assert_eq!(sale.country, "US");
    assert_eq!(sale.saleability, "FOR_SALE");
    assert!(sale.is_ebook);
    assert_eq!(sale.list_price.amount, 27.99);
    assert_eq!(sale.retail_price.currency_code, "USD");
    assert!(sale.buy_link.starts_with("https://play.google.com/"));
    assert_eq!(sale.offers.len(), 1);
    assert_eq!(sale.offers[0].finsky_offer_type, 1);
    assert_eq!(sale.offers[0].list_price.value(), 27.99);

    let access = &item.access_info;
    assert_eq!(access.viewability, "PARTIAL");
    assert!(access.embeddable);
    assert!(!access.public_domain);
    assert_eq!(access.text_to_speech_permission, "ALLOWED_FOR_ACCESSIBILITY");
    assert!(access.epub.is_available);
    assert!(access.epub.acs_token_link.contains("format=epub"));
    assert!(!access.pdf.is_available);
    assert_eq!(access.pdf.acs_token_link, "");
    assert_eq!(access.access_view_status, "SAMPLE");

    assert!(item.search_info.text_snippet.contains("<b>Go</b>"));
}

#[test]
fn deserialize_missing_nested_records_uses_defaults() {
    let json = load_fixture("volumes_author.json");
    let resp = SearchResponse::decode(json.as_bytes()).unwrap();
    assert_eq!(resp.total_items, 27);
    assert_eq!(resp.items.len(), 2);

    let first = &resp.items[0];
    assert_eq!(first.etag, "");
    assert_eq!(first.sale_info.country, "");
    assert!(!first.sale_info.is_ebook);
    assert!(first.sale_info.offers.is_empty());
    assert_eq!(first.sale_info.list_price.amount, 0.0);
    assert!(first.access_info.epub.is_available);
    assert!(!first.access_info.embeddable);
    assert_eq!(first.search_info.text_snippet, "");
    assert_eq!(first.volume_info.isbn_10(), Some("0321774639"));
    assert_eq!(first.volume_info.published_date(), None);

    let second = &resp.items[1];
    assert_eq!(second.volume_info.title, "Python in Practice");
    assert!(second.volume_info.industry_identifiers.is_empty());
    assert!(second.volume_info.categories.is_empty());
    assert_eq!(second.volume_info.average_rating, 0.0);
    assert_eq!(second.access_info.viewability, "");
    assert_eq!(second.volume_info.page_count, 323);
}

#[test]
fn deserialize_unknown_fields_are_ignored() {
    let json = r#"{"kind": "books#volumes", "totalItems": 1, "nextPage": "abc",
        "items": [{"id": "x", "layerInfo": {"layers": []}, "volumeInfo": {"title": "T", "panelizationSummary": {}}}]}"#;
    let resp = SearchResponse::decode(json.as_bytes()).unwrap();
    assert_eq!(resp.items[0].volume_info.title, "T");
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let result = SearchResponse::decode(b"<html>Service Unavailable</html>");
    assert!(matches!(result, Err(DecodeError::Malformed { .. })));
}

#[test]
fn deserialize_truncated_json_returns_error() {
    let json = load_fixture("volumes_isbn.json");
    let truncated = &json.as_bytes()[..json.len() / 2];
    let result = SearchResponse::decode(truncated);
    assert!(matches!(result, Err(DecodeError::Malformed { .. })));
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let result = SearchResponse::decode(br#"{"kind": "books#volumes", "items": []}"#);
    assert!(matches!(result, Err(DecodeError::Schema { .. })));
}

#[test]
fn deserialize_mistyped_nested_field_returns_error() {
    let json = r#"{"totalItems": 1, "items": [{"volumeInfo": {"authors": "Mark Summerfield"}}]}"#;
    let result = SearchResponse::decode(json.as_bytes());
    assert!(matches!(result, Err(DecodeError::Schema { .. })));
}

#[test]
fn deserialize_null_items_decodes_empty() {
    let resp = SearchResponse::decode(br#"{"kind": null, "totalItems": 0, "items": null}"#).unwrap();
    assert_eq!(resp.kind, "");
    assert_eq!(resp.total_items, 0);
    assert!(resp.is_empty());
}

#[test]
fn deserialize_null_nested_record_uses_defaults() {
    let json = r#"{"totalItems": 1, "items": [{"id": "x", "saleInfo": null, "searchInfo": null,
        "accessInfo": {"epub": null, "pdf": {"isAvailable": null}}}]}"#;
    let resp = SearchResponse::decode(json.as_bytes()).unwrap();
    let item = &resp.items[0];
    assert_eq!(item.id, "x");
    assert_eq!(item.sale_info.saleability, "");
    assert!(item.sale_info.offers.is_empty());
    assert_eq!(item.search_info.text_snippet, "");
    assert!(!item.access_info.epub.is_available);
    assert!(!item.access_info.pdf.is_available);
}

#[test]
fn deserialize_null_leaf_fields_use_defaults() {
    let json = r#"{"totalItems": 40, "items": [
        {"id": "a", "volumeInfo": {"title": "Dune", "subtitle": null, "authors": null,
            "pageCount": null, "averageRating": null, "industryIdentifiers": null,
            "imageLinks": {"thumbnail": null}}},
        {"id": "b", "volumeInfo": {"title": "Dune Messiah", "subtitle": "Book Two"}}
    ]}"#;
    let resp = SearchResponse::decode(json.as_bytes()).unwrap();
    assert_eq!(resp.items.len(), 2);

    let first = &resp.items[0].volume_info;
    assert_eq!(first.title, "Dune");
    assert_eq!(first.subtitle, "");
    assert!(first.authors.is_empty());
    assert_eq!(first.page_count, 0);
    assert_eq!(first.average_rating, 0.0);
    assert_eq!(first.isbn_13(), None);
    assert_eq!(first.image_links.best(), None);

    assert_eq!(resp.items[1].volume_info.subtitle, "Book Two");
}

#[test]
fn deserialize_null_total_items_returns_error() {
    let result = SearchResponse::decode(br#"{"totalItems": null}"#);
    assert!(matches!(result, Err(DecodeError::Schema { .. })));
}

//! Shared query infrastructure: the [`Query`] trait.

use url::{form_urlencoded, Url};

/// Trait implemented by everything that contributes query-string parameters.
///
/// Implementors only describe which pairs they emit and in what order;
/// percent-encoding is left to [`form_urlencoded`], so values such as
/// `inauthor:Mark Summerfield` come out as `inauthor%3AMark+Summerfield`.
pub trait Query {
    /// Appends this query's parameters, in a stable order, to the serializer.
    fn append_pairs<T: form_urlencoded::Target>(
        &self,
        pairs: &mut form_urlencoded::Serializer<'_, T>,
    );

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        self.append_pairs(&mut url.query_pairs_mut());
        url
    }

    /// Renders only the encoded parameters, without a leading `?`.
    fn to_query_string(&self) -> String {
        let mut pairs = form_urlencoded::Serializer::new(String::new());
        self.append_pairs(&mut pairs);
        pairs.finish()
    }
}

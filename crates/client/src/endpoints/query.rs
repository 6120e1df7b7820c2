//! Query string assembly for listing endpoints.

use url::Url;

use crate::error::Result;
use crate::models::QueryParams;

/// Append the pairs of `params` to `url`. `None` leaves the URL untouched.
pub fn with_query<Q: QueryParams>(url: &str, params: Option<&Q>) -> Result<String> {
    let Some(params) = params else {
        return Ok(url.to_string());
    };
    let mut parsed = Url::parse(url)?;
    {
        let mut pairs = parsed.query_pairs_mut();
        for (key, value) in params.query_pairs() {
            pairs.append_pair(key, &value);
        }
    }
    Ok(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SavedObjectRequest;

    #[test]
    fn test_none_appends_nothing() {
        let url = "http://localhost:5601/api/saved_objects/_find";
        assert_eq!(with_query::<SavedObjectRequest>(url, None).unwrap(), url);
    }

    #[test]
    fn test_pairs_are_encoded() {
        let request = SavedObjectRequest::builder()
            .with_type("index-pattern")
            .with_fields(["title", "time field"])
            .with_per_page(15)
            .build()
            .unwrap();
        let url = with_query(
            "http://localhost:5601/api/saved_objects/_find",
            Some(&request),
        )
        .unwrap();
        assert_eq!(
            url,
            "http://localhost:5601/api/saved_objects/_find?type=index-pattern&fields=title&fields=time+field&per_page=15"
        );
    }

    #[test]
    fn test_invalid_base_is_url_error() {
        let request = SavedObjectRequest::default();
        let err = with_query("not a url", Some(&request)).unwrap_err();
        assert!(matches!(err, crate::error::ClientError::InvalidUrl(_)));
    }
}

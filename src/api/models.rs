use crate::error::ApiError;

/// Longest document id the store accepts, in bytes.
pub const MAX_ID_LEN: usize = 512;

/// `/movies/id/<id>`
#[derive(Debug, PartialEq)]
pub struct MovieIdPath {
    pub id: String,
}

/// `/autocomplete/<query>`
#[derive(Debug, PartialEq)]
pub struct AutocompletePath {
    pub query: String,
}

/// Percent-decode a request path and split it on `/`.
///
/// The leading slash yields an empty first segment, and a trailing slash an
/// empty last one.
pub fn path_segments(path: &str) -> Result<Vec<String>, ApiError> {
    let decoded = urlencoding::decode(path).map_err(|_| ApiError::InvalidPath)?;
    Ok(decoded.split('/').map(str::to_string).collect())
}

impl MovieIdPath {
    pub fn parse(path: &str) -> Result<Self, ApiError> {
        let segments = path_segments(path)?;
        let [_, _, _, id] = segments.as_slice() else {
            return Err(ApiError::PathSegments);
        };
        if id.len() > MAX_ID_LEN {
            return Err(ApiError::IdTooLong);
        }
        Ok(MovieIdPath { id: id.clone() })
    }
}

impl AutocompletePath {
    pub fn parse(path: &str) -> Result<Self, ApiError> {
        let segments = path_segments(path)?;
        let [_, _, query] = segments.as_slice() else {
            return Err(ApiError::PathSegments);
        };
        Ok(AutocompletePath {
            query: query.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_path_needs_four_segments() {
        assert_eq!(
            MovieIdPath::parse("/movies/id/test_id").unwrap(),
            MovieIdPath {
                id: "test_id".to_string()
            }
        );
        assert!(matches!(
            MovieIdPath::parse("/movies/id/test_id/extra"),
            Err(ApiError::PathSegments)
        ));
        assert!(matches!(
            MovieIdPath::parse("/movies/id/test_id/"),
            Err(ApiError::PathSegments)
        ));
        assert!(matches!(
            MovieIdPath::parse("/movies/id"),
            Err(ApiError::PathSegments)
        ));
    }

    #[test]
    fn movie_id_length_limit() {
        let at_limit = "a".repeat(MAX_ID_LEN);
        assert_eq!(
            MovieIdPath::parse(&format!("/movies/id/{at_limit}")).unwrap().id,
            at_limit
        );

        let too_long = "a".repeat(MAX_ID_LEN + 1);
        assert!(matches!(
            MovieIdPath::parse(&format!("/movies/id/{too_long}")),
            Err(ApiError::IdTooLong)
        ));
    }

    #[test]
    fn id_length_counts_bytes_not_chars() {
        // 256 two-byte chars = 512 bytes, one more pushes it over.
        let ok = "é".repeat(256);
        assert!(MovieIdPath::parse(&format!("/movies/id/{ok}")).is_ok());
        let over = "é".repeat(257);
        assert!(matches!(
            MovieIdPath::parse(&format!("/movies/id/{over}")),
            Err(ApiError::IdTooLong)
        ));
    }

    #[test]
    fn segments_are_percent_decoded() {
        assert_eq!(
            AutocompletePath::parse("/autocomplete/star%20wars").unwrap().query,
            "star wars"
        );
        // An encoded slash becomes a real separator.
        assert!(matches!(
            AutocompletePath::parse("/autocomplete/a%2Fb"),
            Err(ApiError::PathSegments)
        ));
        assert!(matches!(
            AutocompletePath::parse("/autocomplete/%FF"),
            Err(ApiError::InvalidPath)
        ));
    }

    #[test]
    fn autocomplete_path_needs_three_segments() {
        assert_eq!(AutocompletePath::parse("/autocomplete/").unwrap().query, "");
        assert!(matches!(
            AutocompletePath::parse("/autocomplete/alien/extra"),
            Err(ApiError::PathSegments)
        ));
    }
}

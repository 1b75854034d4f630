use std::collections::HashMap;

/// Per-run memo of artist id to genre tags.
///
/// Only successful lookups are stored. A disabled cache never returns or
/// keeps anything, which makes every artist reference cost one request.
pub struct ArtistGenreCache {
    enabled: bool,
    genres: HashMap<String, Vec<String>>,
}

impl ArtistGenreCache {
    pub fn new() -> Self {
        Self {
            enabled: true,
            genres: HashMap::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            genres: HashMap::new(),
        }
    }

    pub fn get(&self, artist_id: &str) -> Option<&Vec<String>> {
        if !self.enabled {
            return None;
        }
        self.genres.get(artist_id)
    }

    pub fn insert(&mut self, artist_id: &str, genres: Vec<String>) {
        if self.enabled {
            self.genres.insert(artist_id.to_string(), genres);
        }
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

impl Default for ArtistGenreCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_cache_returns_stored_genres() {
        let mut cache = ArtistGenreCache::new();
        cache.insert("a1", vec!["pop".to_string()]);

        assert_eq!(cache.get("a1"), Some(&vec!["pop".to_string()]));
        assert_eq!(cache.get("a2"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn disabled_cache_keeps_nothing() {
        let mut cache = ArtistGenreCache::disabled();
        cache.insert("a1", vec!["pop".to_string()]);

        assert!(cache.get("a1").is_none());
        assert!(cache.is_empty());
    }
}

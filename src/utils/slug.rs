/// Derive a URL-safe slug from a human-readable name.
/// Lowercases, keeps ASCII alphanumerics, collapses everything else
/// into single hyphens. Stable: slugify(slugify(x)) == slugify(x).
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true; // suppress leading hyphen

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_names() {
        assert_eq!(slugify("Mars"), "mars");
        assert_eq!(slugify("Proxima Centauri b"), "proxima-centauri-b");
        assert_eq!(slugify("TRAPPIST-1e"), "trappist-1e");
    }

    #[test]
    fn test_squeezes_separators() {
        assert_eq!(slugify("  Kepler -- 452b  "), "kepler-452b");
        assert_eq!(slugify("Titan!"), "titan");
    }

    #[test]
    fn test_stable_under_repetition() {
        let once = slugify("Europa Station #7");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(slugify("Céres"), "c-res");
        assert_eq!(slugify("🌍 Earth"), "earth");
    }
}

//! "Did you mean?" hints for missing attributes.

/// Known names scoring below this are not worth suggesting.
#[cfg(feature = "suggestions")]
const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Pick the known name closest to `unknown`.
#[cfg(feature = "suggestions")]
pub(crate) fn closest<'a, I>(unknown: &str, known: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, f64)> = None;
    for candidate in known {
        if candidate == unknown {
            continue;
        }
        let similarity = strsim::jaro_winkler(unknown, candidate);
        if similarity >= SIMILARITY_THRESHOLD
            && best.is_none_or(|(_, best_sim)| similarity > best_sim)
        {
            best = Some((candidate, similarity));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Pick the known name closest to `unknown` (no-op without strsim).
#[cfg(not(feature = "suggestions"))]
pub(crate) fn closest<'a, I>(_unknown: &str, _known: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    None
}

//! Dot-separated version comparison for the capability advisory checks.

/// Returns true if `actual` sorts below `minimum`, comparing dot-separated
/// numeric segments. Missing segments count as zero; non-numeric segments
/// count as zero as well, so garbage never upgrades a component.
pub(crate) fn version_below(actual: &str, minimum: &str) -> bool {
    let parse = |s: &str| -> Vec<u64> {
        s.split('.')
            .map(|part| part.trim().parse::<u64>().unwrap_or(0))
            .collect()
    };
    let a = parse(actual);
    let m = parse(minimum);
    let len = a.len().max(m.len());
    for i in 0..len {
        let av = a.get(i).copied().unwrap_or(0);
        let mv = m.get(i).copied().unwrap_or(0);
        if av != mv {
            return av < mv;
        }
    }
    false
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;

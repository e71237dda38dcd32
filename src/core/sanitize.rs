// src/core/sanitize.rs

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Replace every run of two or more whitespace chars with one space.
/// Single whitespace chars (and the ends) are left alone.
pub fn collapse_ws_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = 0usize;
    let mut pending: Option<char> = None;
    for ch in s.chars() {
        if ch.is_whitespace() {
            run += 1;
            if run == 1 { pending = Some(ch); }
            continue;
        }
        match run {
            0 => {}
            1 => out.extend(pending.take()),
            _ => out.push(' '),
        }
        run = 0;
        pending = None;
        out.push(ch);
    }
    match run {
        0 => {}
        1 => out.extend(pending),
        _ => out.push(' '),
    }
    out
}

/// Drop every thousands-separator char. Idempotent.
pub fn strip_separators(s: &str, seps: &[char]) -> String {
    s.chars().filter(|c| !seps.contains(c)).collect()
}

/// Remove the first occurrence of `pat` along with whitespace right before it.
pub fn remove_first(s: &str, pat: &str) -> String {
    match s.find(pat) {
        Some(i) => {
            let head = s[..i].trim_end();
            join!(head, &s[i + pat.len()..])
        }
        None => s.to_string(),
    }
}

/// Lenient integer parse: trims, then anything non-numeric is None.
pub fn parse_int(s: &str) -> Option<i64> {
    let t = s.trim();
    if t.is_empty() { return None; }
    t.parse::<i64>().ok()
}

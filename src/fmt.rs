/// Format an amount as Vietnamese đồng with dot thousands separators:
/// 1234567 -> "1.234.567 ₫". Fractional amounts keep two comma decimals.
pub fn vnd(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let rendered = if (abs - abs.trunc()).abs() < 0.005 {
        format!("{:.0}", abs)
    } else {
        format!("{:.2}", abs)
    };
    let (int_part, dec_part) = match rendered.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (rendered.as_str(), None),
    };

    let mut with_dots = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_dots.push('.');
        }
        with_dots.push(c);
    }
    let mut out: String = with_dots.chars().rev().collect();
    if let Some(d) = dec_part {
        out.push(',');
        out.push_str(d);
    }
    if negative {
        out.insert(0, '-');
    }
    out.push_str(" ₫");
    out
}

/// Human-readable file size for `status`/`backup` output.
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

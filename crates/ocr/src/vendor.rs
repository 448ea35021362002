/// Merchant names sit at the top of a receipt; only this many lines are read.
const VENDOR_SCAN_LINES: usize = 6;

/// Banner and label words that never appear in a merchant line we want.
const BOILERPLATE: &[&str] = &[
    "welcome", "invoice", "receipt", "thank", "sales", "pos", "staff", "reg", "cashier",
];

// Company registration / tax ids.
re!(re_long_digit_run, r"[0-9]{6,}");

/// First line among the top few that reads like a merchant name.
pub fn extract_vendor(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(VENDOR_SCAN_LINES)
        .find(|l| is_vendor_line(l))
        .map(str::to_string)
}

fn is_vendor_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    if BOILERPLATE.iter().any(|w| lower.contains(w)) {
        return false;
    }

    // Mostly digits or symbols: barcodes, amounts, timestamps.
    let letters = line.chars().filter(char::is_ascii_alphabetic).count();
    let others = line.chars().count() - letters;
    if letters < 2 || letters < others {
        return false;
    }

    !re_long_digit_run().is_match(line)
}

/// Clean raw OCR output before extraction.
///
/// Drops carriage returns and anything outside printable ASCII (newlines
/// excepted), collapses runs of newlines into one, and trims the result.
/// Total over all input; `normalize("")` is `""`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\n' => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            ' '..='~' => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "\n\n\n",
        "STARBUCKS\r\n\r\nTotal 5.50\r\n",
        "Caf\u{e9} Latte\t\t15.00",
        "  \u{feff}AEON\u{200b} BIG\n\n\n\nRM 12.00  ",
        "A\n \nB",
        "\u{1F600}\n\u{1F600}\nX",
    ];

    #[test]
    fn strips_carriage_returns_and_collapses_blank_lines() {
        assert_eq!(normalize("STARBUCKS\r\n\r\nTotal 5.50\r\n"), "STARBUCKS\nTotal 5.50");
    }

    #[test]
    fn drops_non_ascii_and_control_chars() {
        assert_eq!(normalize("Caf\u{e9} Latte\t15.00"), "Caf Latte15.00");
        assert_eq!(normalize("\u{feff}AEON\u{200b} BIG"), "AEON BIG");
    }

    #[test]
    fn newlines_separated_by_dropped_chars_collapse() {
        assert_eq!(normalize("A\n\u{1F600}\nB"), "A\nB");
    }

    #[test]
    fn empty_and_noise_only_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\u{1F600}\r\n\t"), "");
    }

    #[test]
    fn space_only_line_is_kept_between_newlines() {
        assert_eq!(normalize("A\n \nB"), "A\n \nB");
    }

    #[test]
    fn idempotent() {
        for s in SAMPLES {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn output_is_printable_ascii_without_blank_line_pairs() {
        for s in SAMPLES {
            let out = normalize(s);
            assert!(!out.contains("\n\n"), "input {s:?}");
            assert!(out.chars().all(|c| c == '\n' || (' '..='~').contains(&c)));
            assert_eq!(out.trim(), out);
            // Every output char was present in the input.
            assert!(out.chars().all(|c| s.contains(c)));
        }
    }
}

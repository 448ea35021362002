use resit_core::Money;

/// Labels that introduce the amount payable. Checked as substrings, so
/// `total` alone also covers the longer labels; the order is documentation.
const TOTAL_LABELS: &[&str] = &[
    "grand total",
    "total amount",
    "amount due",
    "total sales",
    "net total",
    "sub-total",
    "subtotal",
    "total",
];

/// Payment breakdown lines: what the customer handed over, not what the
/// purchase cost.
const PAYMENT_CONTEXT: &[&str] = &[
    "received",
    "paid",
    "payment method",
    "change",
    "cash",
    "wallet",
    "tng",
];

re!(re_amount, r"[0-9]+\.[0-9]{2}");

/// The receipt's grand total.
///
/// A labelled total line is preferred. Without one, the largest amount
/// outside the payment breakdown is taken instead.
pub fn extract_total(text: &str) -> Option<Money> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    labelled_total(&lines).or_else(|| largest_amount(&lines))
}

/// First amount on the first total-labelled, non-payment line that has one.
fn labelled_total(lines: &[&str]) -> Option<Money> {
    lines
        .iter()
        .filter(|line| {
            let lower = line.to_lowercase();
            contains_any(&lower, TOTAL_LABELS) && !contains_any(&lower, PAYMENT_CONTEXT)
        })
        .find_map(|line| amounts(line).next())
}

/// Largest amount anywhere, skipping payment lines and the line after each
/// of them (the amount often sits on the line below its label).
// TODO: the next-line skip is an empirical rule; measure it against a labelled
// receipt set before tightening it.
fn largest_amount(lines: &[&str]) -> Option<Money> {
    let mut skip_next = false;
    let mut largest: Option<Money> = None;

    for line in lines {
        let is_payment = contains_any(&line.to_lowercase(), PAYMENT_CONTEXT);
        let skip = is_payment || skip_next;
        skip_next = is_payment;
        if skip {
            continue;
        }
        largest = amounts(line).fold(largest, |best, amount| best.max(Some(amount)));
    }

    largest
}

fn amounts(line: &str) -> impl Iterator<Item = Money> + '_ {
    re_amount()
        .find_iter(line)
        .filter_map(|m| m.as_str().parse::<Money>().ok())
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

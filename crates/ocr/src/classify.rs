//! Keyword classifiers for spending category and payment method.
//!
//! Each table is an ordered list of (label, pattern). The first pattern that
//! matches anywhere in the text decides, so a receipt that mentions both a
//! hotel and a restaurant is filed under whichever comes first here.

use std::sync::OnceLock;

use regex::Regex;
use resit_core::{Category, PaymentMethod};

const CATEGORY_PATTERNS: &[(Category, &str)] = &[
    (Category::Utilities,
     r"(?i)\b(water|syabas|electric|electricity|power|tenaga|gas|lpg|pipedgas|internet|broadband|wifi|fiber|fibre|unifi|streamyx|maxis|celcom|digi|tmnet|telco|postpaid|prepaid|sim|data|airtime|sms|mms|tv|astro|netflix|disney|hbo|primevideo|iflix|tonton|mytv|subscription|utility|utilities|bill|billing)s?\b"),
    (Category::Travel,
     r"(?i)\b(hotel|motel|hostel|lodging|accommodation|airbnb|stay|flight|airline|airfare|airasia|malaysiaairlines|mas|boarding|jetstar|passport|immigration|travel|tour|itinerary|reservation|monorail|carhire|ferry)s?\b"),
    (Category::Food,
     r"(?i)\b(food|restaurant|cafe|coffee|dining|snack|drink|meal|meals|eatery|eateries|beverage|beverages|lunch|breakfast|dinner|kopitiam|fastfood|takeaway|take-out|takeout|bistro|canteen|stall|buffet|foodcourt|mamak|fnb|deli)s?\b"),
    (Category::Groceries,
     r"(?i)\b(grocer|grocery|supermarket|hypermarket|market|minimart|(?:\w+\s?)?mart|tesco|mydin|aeon|lotus|giant|jaya|99speedmart|wetmarket|daily\sneeds|grocerystore|coldstorage|bens|villagegrocer|econsave)s?\b"),
    (Category::Transport,
     r"(?i)\b(grab|uber|taxi|ride|bus|train|mrt|lrt|monorail|toll|parking|fare|fuel|petrol|diesel|shell|petronas|mobil|caltex|bicycle|bike|parkinglot|ezlink|myrapid|rapidkl|ktm|transport|transportation|commute|rideshare|ride-hailing)s?\b"),
    (Category::Health,
     r"(?i)\b(pharmacy|vitamin|medicine|medication|supplement|drugs|watsons|guardian|clinic|hospital|health|wellness|personal\s?care|dental|denture|eyecare|optical|prescription|skinclinic|derma|medicalcheckup|medicines)s?\b"),
    (Category::Clothing,
     r"(?i)\b(clothing|clothes|fashion|apparel|shirt|t[\s\-]?shirt|blouse|pants|trousers|dress|wear|footwear|jeans|jacket|sock|shoe|sneaker|accessory|accessories|hat|cap|scarf|belt|glove|outfit|undergarment|innerwear)s?\b"),
    (Category::Household,
     r"(?i)\b(furniture|cleaning|cleaner|detergent|kitchen|cookware|utensil|home|household|decor|bed|bedding|blanket|pillow|curtain|rug|storage|light|lighting|repair|tool|hardware|diy|maintenance|appliance|freshener)s?\b"),
    (Category::Personal,
     r"(?i)\b(haircut|salon|spa|beauty|makeup|cosmetic|skincare|massage|grooming|facial|manicure|pedicure|waxing|barber|selfcare|personal\s?care)s?\b"),
    (Category::Entertainment,
     r"(?i)\b(movie|cinema|entertainment|netflix|spotify|youtube|game|gaming|concert|show|leisure|funfair|event|livestream|streaming|disney|hbo|theater|music|musical|poker)s?\b"),
    (Category::Education,
     r"(?i)\b(book|tuition|course|study|studies|school|exam|learning|class|classes|college|university|online\s?course|tuition\s?fee)s?\b"),
    (Category::Office,
     r"(?i)\b(office|stationery|paper|printer|ink|file|files|desk|chair|pen|pencil|notebook|textbook|supply|supplies|print|toner|folder|label|envelope|clip|whiteboard|planner|calendar|stapler)s?\b"),
    (Category::Electronics,
     r"(?i)\b(electronic|gadget|laptop|tablet|tech|device|charger|usb|accessory|accessories|appliance|machine|computer|monitor|screen|tv|smartwatch|headphone|earphone|camera|drone)s?\b"),
    (Category::Charity,
     r"(?i)\b(donation|donations|zakat|tabung|charity|offering|wakaf|sumbangan|fund|funds|nonprofit|amal|sedekah|yayasan|relief|infaq|qurban)s?\b"),
];

const PAYMENT_PATTERNS: &[(PaymentMethod, &str)] = &[
    (PaymentMethod::Tng, r"(?i)\b(touch[ -]?n[ -]?go|tng|tngo|touchngo|tngewallet)\b"),
    (PaymentMethod::GrabPay, r"(?i)\b(grabpay|grab pay|paid with grab)\b"),
    (PaymentMethod::ShopeePay, r"(?i)\b(shopeepay|shopee pay|paid with shopee)\b"),
    (PaymentMethod::Card, r"(?i)\b(credit card|debit card|visa|mastercard|amex|american express)\b"),
    (PaymentMethod::Cash, r"(?i)\b(cash|tunai)\b"),
    (PaymentMethod::Bank,
     r"(?i)\b(maybank|cimb|rhb|public bank|ambank|bank islam|bank rakyat|hsbc|ocbc|uob|affin)\b"),
    (PaymentMethod::Fpx,
     r"(?i)\b(fpx|online banking|internet banking|bank transfer|instant transfer)\b"),
    (PaymentMethod::Boost, r"(?i)\b(boostpay|boost)\b"),
    (PaymentMethod::DuitNow, r"(?i)\b(duitnow)\b"),
    (PaymentMethod::BigPay, r"(?i)\b(bigpay|big pay)\b"),
    (PaymentMethod::PayPal, r"(?i)\b(paypal)\b"),
    (PaymentMethod::Stripe, r"(?i)\b(stripe)\b"),
    (PaymentMethod::Qr, r"(?i)\b(qr ?pay(ment)?|scan ?& ?pay|qr code|qr)\b"),
    (PaymentMethod::UnionPay, r"(?i)\b(union ?pay)\b"),
    (PaymentMethod::AliPay, r"(?i)\b(ali ?pay)\b"),
    (PaymentMethod::WechatPay, r"(?i)\b(wechat ?pay)\b"),
    (PaymentMethod::ApplePay, r"(?i)\b(apple ?pay)\b"),
    (PaymentMethod::GooglePay, r"(?i)\b(google ?pay|gpay)\b"),
    (PaymentMethod::SamsungPay, r"(?i)\b(samsung ?pay)\b"),
];

fn compile<L: Copy>(table: &[(L, &str)]) -> Vec<(L, Regex)> {
    table
        .iter()
        .map(|&(label, pat)| (label, Regex::new(pat).expect("invalid classifier pattern")))
        .collect()
}

fn category_table() -> &'static [(Category, Regex)] {
    static T: OnceLock<Vec<(Category, Regex)>> = OnceLock::new();
    T.get_or_init(|| compile(CATEGORY_PATTERNS))
}

fn payment_table() -> &'static [(PaymentMethod, Regex)] {
    static T: OnceLock<Vec<(PaymentMethod, Regex)>> = OnceLock::new();
    T.get_or_init(|| compile(PAYMENT_PATTERNS))
}

fn first_match<L: Copy>(table: &[(L, Regex)], text: &str) -> Option<L> {
    table.iter().find(|(_, re)| re.is_match(text)).map(|(label, _)| *label)
}

pub fn extract_category(text: &str) -> Option<Category> {
    first_match(category_table(), text)
}

pub fn extract_payment_method(text: &str) -> Option<PaymentMethod> {
    first_match(payment_table(), text)
}

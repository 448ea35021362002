use serde::{Deserialize, Serialize};
use std::fmt;

/// How a receipt was settled. Order is classification priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Touch 'n Go eWallet.
    Tng,
    GrabPay,
    ShopeePay,
    Card,
    Cash,
    Bank,
    Fpx,
    Boost,
    DuitNow,
    BigPay,
    PayPal,
    Stripe,
    Qr,
    UnionPay,
    AliPay,
    WechatPay,
    ApplePay,
    GooglePay,
    SamsungPay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 19] = [
        PaymentMethod::Tng,
        PaymentMethod::GrabPay,
        PaymentMethod::ShopeePay,
        PaymentMethod::Card,
        PaymentMethod::Cash,
        PaymentMethod::Bank,
        PaymentMethod::Fpx,
        PaymentMethod::Boost,
        PaymentMethod::DuitNow,
        PaymentMethod::BigPay,
        PaymentMethod::PayPal,
        PaymentMethod::Stripe,
        PaymentMethod::Qr,
        PaymentMethod::UnionPay,
        PaymentMethod::AliPay,
        PaymentMethod::WechatPay,
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
        PaymentMethod::SamsungPay,
    ];

    /// Canonical lowercase key.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Tng => "tng",
            PaymentMethod::GrabPay => "grabpay",
            PaymentMethod::ShopeePay => "shopeepay",
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Bank => "bank",
            PaymentMethod::Fpx => "fpx",
            PaymentMethod::Boost => "boost",
            PaymentMethod::DuitNow => "duitnow",
            PaymentMethod::BigPay => "bigpay",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::Stripe => "stripe",
            PaymentMethod::Qr => "qr",
            PaymentMethod::UnionPay => "unionpay",
            PaymentMethod::AliPay => "alipay",
            PaymentMethod::WechatPay => "wechatpay",
            PaymentMethod::ApplePay => "applepay",
            PaymentMethod::GooglePay => "googlepay",
            PaymentMethod::SamsungPay => "samsungpay",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PaymentMethod::Tng => "Touch 'n Go",
            PaymentMethod::GrabPay => "GrabPay",
            PaymentMethod::ShopeePay => "ShopeePay",
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Bank => "Bank",
            PaymentMethod::Fpx => "FPX",
            PaymentMethod::Boost => "Boost",
            PaymentMethod::DuitNow => "DuitNow",
            PaymentMethod::BigPay => "BigPay",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Stripe => "Stripe",
            PaymentMethod::Qr => "QR",
            PaymentMethod::UnionPay => "UnionPay",
            PaymentMethod::AliPay => "Alipay",
            PaymentMethod::WechatPay => "WeChat Pay",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::GooglePay => "Google Pay",
            PaymentMethod::SamsungPay => "Samsung Pay",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == key)
            .ok_or_else(|| format!("Unknown payment method: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn key_roundtrip() {
        for m in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_str(m.as_str()).unwrap(), m);
        }
    }

    #[test]
    fn serde_key_matches_as_str() {
        for m in PaymentMethod::ALL {
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, format!("\"{}\"", m.as_str()));
        }
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert_eq!(PaymentMethod::from_str("CASH").unwrap(), PaymentMethod::Cash);
        assert!(PaymentMethod::from_str("cheque").is_err());
    }
}

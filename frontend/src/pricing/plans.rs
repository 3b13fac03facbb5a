use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Billing {
    #[default]
    Monthly,
    Annual,
}

impl Billing {
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Billing::Annual
        } else {
            Billing::Monthly
        }
    }

    pub fn is_annual(self) -> bool {
        self == Billing::Annual
    }

    pub fn label(self) -> &'static str {
        match self {
            Billing::Monthly => "Monthly",
            Billing::Annual => "Annual",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    Pro,
    Agency,
}

/// Site licenses sold with a plan. Serializes as `1` or `"unlimited"`, the
/// shapes the checkout widget accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Licenses {
    Sites(u32),
    Unlimited(UnlimitedTag),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlimitedTag {
    Unlimited,
}

impl Plan {
    pub fn name(self) -> &'static str {
        match self {
            Plan::Pro => "Pro",
            Plan::Agency => "Agency",
        }
    }

    /// Name shown in the checkout dialog, e.g. `MBA Gallery Pro (Annual)`.
    pub fn checkout_name(self, billing: Billing) -> String {
        format!("MBA Gallery {} ({})", self.name(), billing.label())
    }

    pub fn licenses(self) -> Licenses {
        match self {
            Plan::Pro => Licenses::Sites(1),
            Plan::Agency => Licenses::Unlimited(UnlimitedTag::Unlimited),
        }
    }

    pub fn button_id(self) -> &'static str {
        match self {
            Plan::Pro => "get_pro",
            Plan::Agency => "get_agency",
        }
    }

    pub fn prices(self) -> Prices {
        match self {
            Plan::Pro => Prices { monthly: 9.99, annual: 79.0 },
            Plan::Agency => Prices { monthly: 29.99, annual: 239.0 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prices {
    pub monthly: f64,
    pub annual: f64,
}

impl Prices {
    /// Whole-percent saving of paying annually over twelve monthly payments.
    pub fn annual_savings_percent(self) -> u32 {
        let yearly_at_monthly = self.monthly * 12.0;
        if yearly_at_monthly <= 0.0 || self.annual >= yearly_at_monthly {
            return 0;
        }
        ((1.0 - self.annual / yearly_at_monthly) * 100.0).round() as u32
    }
}

pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_maps_to_billing() {
        assert_eq!(Billing::from_toggle(false), Billing::Monthly);
        assert_eq!(Billing::from_toggle(true), Billing::Annual);
        assert_eq!(Billing::default(), Billing::Monthly);
    }

    #[test]
    fn checkout_names_follow_billing() {
        assert_eq!(Plan::Pro.checkout_name(Billing::Annual), "MBA Gallery Pro (Annual)");
        assert_eq!(Plan::Pro.checkout_name(Billing::Monthly), "MBA Gallery Pro (Monthly)");
        assert_eq!(Plan::Agency.checkout_name(Billing::Annual), "MBA Gallery Agency (Annual)");
        assert_eq!(Plan::Agency.checkout_name(Billing::Monthly), "MBA Gallery Agency (Monthly)");
    }

    #[test]
    fn licenses_serialize_as_checkout_expects() {
        assert_eq!(serde_json::to_value(Plan::Pro.licenses()).unwrap(), serde_json::json!(1));
        assert_eq!(
            serde_json::to_value(Plan::Agency.licenses()).unwrap(),
            serde_json::json!("unlimited")
        );
    }

    #[test]
    fn annual_savings() {
        assert_eq!(Plan::Pro.prices().annual_savings_percent(), 34);
        assert_eq!(Prices { monthly: 10.0, annual: 120.0 }.annual_savings_percent(), 0);
        assert_eq!(Prices { monthly: 0.0, annual: 0.0 }.annual_savings_percent(), 0);
    }

    #[test]
    fn prices_format_without_trailing_zeros() {
        assert_eq!(format_price(79.0), "$79");
        assert_eq!(format_price(9.99), "$9.99");
    }
}

use serde::{Deserialize, Serialize};

use crate::seat::{SeatId, SeatMap, SeatTier};

const BPS_DENOMINATOR: u64 = 10_000;

/// Ticket prices and surcharges. Rates are basis points (500 = 5%).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConfig {
    /// Price of a seat in rows before the premium threshold
    pub regular_price_inr: u32,

    /// Price of a seat in the premium rows
    pub premium_price_inr: u32,

    /// Convenience fee applied to the seat subtotal
    pub convenience_fee_bps: u32,

    /// GST applied to subtotal plus convenience fee
    pub tax_bps: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            regular_price_inr: 200,
            premium_price_inr: 300,
            convenience_fee_bps: 500,
            tax_bps: 1_800,
        }
    }
}

/// Amounts shown on the payment summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal_inr: u32,
    pub convenience_fee_inr: u32,
    pub taxes_inr: u32,
    pub total_inr: u32,
}

pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn tier_price(&self, tier: SeatTier) -> u32 {
        match tier {
            SeatTier::Regular => self.config.regular_price_inr,
            SeatTier::Premium => self.config.premium_price_inr,
        }
    }

    pub fn seat_price(&self, seat_map: &SeatMap, seat: &SeatId) -> u32 {
        self.tier_price(seat_map.tier(seat))
    }

    /// Fee and tax for an arbitrary subtotal.
    ///
    /// The fee is rounded before tax is computed on `subtotal + fee`, so the
    /// two roundings compound exactly as they do on the summary screen.
    pub fn breakdown(&self, subtotal_inr: u32) -> PriceBreakdown {
        let convenience_fee_inr = apply_rate(subtotal_inr, self.config.convenience_fee_bps);
        let taxes_inr = apply_rate(subtotal_inr + convenience_fee_inr, self.config.tax_bps);

        PriceBreakdown {
            subtotal_inr,
            convenience_fee_inr,
            taxes_inr,
            total_inr: subtotal_inr + convenience_fee_inr + taxes_inr,
        }
    }

    pub fn quote<'a>(
        &self,
        seat_map: &SeatMap,
        seats: impl IntoIterator<Item = &'a SeatId>,
    ) -> PriceBreakdown {
        let subtotal = seats
            .into_iter()
            .map(|seat| self.seat_price(seat_map, seat))
            .sum();
        self.breakdown(subtotal)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

/// `round(amount * bps / 10_000)` with ties rounded up, in integer math.
pub fn apply_rate(amount: u32, bps: u32) -> u32 {
    let scaled = amount as u64 * bps as u64;
    ((scaled + BPS_DENOMINATOR / 2) / BPS_DENOMINATOR) as u32
}

use cinetime_catalog::{PricingConfig, SeatError, SeatId, SeatMap};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingRules,
    #[serde(default)]
    pub seats: SeatRules,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 { 3000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PricingRules {
    pub regular_price_inr: u32,
    pub premium_price_inr: u32,
    pub convenience_fee_bps: u32, // 500 = 5%
    pub tax_bps: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        let base = PricingConfig::default();
        Self {
            regular_price_inr: base.regular_price_inr,
            premium_price_inr: base.premium_price_inr,
            convenience_fee_bps: base.convenience_fee_bps,
            tax_bps: base.tax_bps,
        }
    }
}

impl PricingRules {
    pub fn to_pricing_config(&self) -> PricingConfig {
        PricingConfig {
            regular_price_inr: self.regular_price_inr,
            premium_price_inr: self.premium_price_inr,
            convenience_fee_bps: self.convenience_fee_bps,
            tax_bps: self.tax_bps,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SeatRules {
    pub last_row: char,
    pub seats_per_row: u16,
    pub premium_from: char,
    pub max_seats: usize,
    pub blocked: Vec<String>,
}

impl Default for SeatRules {
    fn default() -> Self {
        Self {
            last_row: 'J',
            seats_per_row: 12,
            premium_from: 'F',
            max_seats: 10,
            blocked: cinetime_catalog::seat::DEFAULT_BLOCKED_SEATS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SeatRules {
    /// Fails on the first blocked seat that does not parse.
    pub fn seat_map(&self) -> Result<SeatMap, SeatError> {
        let blocked = self
            .blocked
            .iter()
            .map(|s| s.parse::<SeatId>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SeatMap::new(self.last_row, self.seats_per_row, self.premium_from, blocked))
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AssistantConfig {
    pub help_desk_reply_delay_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            help_desk_reply_delay_ms: 1500,
        }
    }
}

/// Artificial latency of the in-memory backends, and a switch that makes
/// every booking submission fail.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub catalog_latency_ms: u64,
    pub payment_latency_ms: u64,
    pub history_latency_ms: u64,
    pub contact_latency_ms: u64,
    pub fail_payments: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            catalog_latency_ms: 0,
            payment_latency_ms: 2000,
            history_latency_ms: 1000,
            contact_latency_ms: 2000,
            fail_payments: false,
        }
    }
}

impl SimulationConfig {
    /// No artificial delays. Used by tests.
    pub fn instant() -> Self {
        Self {
            catalog_latency_ms: 0,
            payment_latency_ms: 0,
            history_latency_ms: 0,
            contact_latency_ms: 0,
            fail_payments: false,
        }
    }

    pub fn catalog_latency(&self) -> Duration { Duration::from_millis(self.catalog_latency_ms) }
    pub fn payment_latency(&self) -> Duration { Duration::from_millis(self.payment_latency_ms) }
    pub fn history_latency(&self) -> Duration { Duration::from_millis(self.history_latency_ms) }
    pub fn contact_latency(&self) -> Duration { Duration::from_millis(self.contact_latency_ms) }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. CINETIME__SERVER__PORT=8080
            .add_source(config::Environment::with_prefix("CINETIME").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_box_office_rules() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.pricing.to_pricing_config(), PricingConfig::default());
        assert_eq!(config.seats.max_seats, 10);

        let map = config.seats.seat_map().unwrap();
        assert_eq!(map.capacity(), 120);
        assert!(map.is_blocked(&"C3".parse().unwrap()));
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let source = config::Config::builder()
            .add_source(config::File::from_str(
                "[pricing]\ntax_bps = 1200\n\n[simulation]\nfail_payments = true\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: Config = source.try_deserialize().unwrap();

        assert_eq!(config.pricing.tax_bps, 1200);
        assert_eq!(config.pricing.regular_price_inr, 200);
        assert!(config.simulation.fail_payments);
        assert_eq!(config.simulation.payment_latency_ms, 2000);
        assert_eq!(config.assistant.help_desk_reply_delay_ms, 1500);
    }

    #[test]
    fn test_bad_blocked_seat_is_reported() {
        let rules = SeatRules {
            blocked: vec!["A1".into(), "??".into()],
            ..SeatRules::default()
        };
        assert!(rules.seat_map().is_err());
    }
}

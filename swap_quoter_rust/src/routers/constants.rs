use lazy_static::lazy_static;
use rust_decimal::Decimal;

// https://0x.org/docs/0x-swap-api/api-references/get-swap-v1-price
pub const ZERO_X_PRICE_PATH: &str = "/swap/v1/price";
// https://0x.org/docs/0x-swap-api/api-references/get-swap-v1-quote
pub const ZERO_X_QUOTE_PATH: &str = "/swap/v1/quote";

pub const ZERO_X_API_KEY_HEADER: &str = "0x-api-key";

pub const AFFILIATE_FEE_RECIPIENT: &str = "0xeE15d275dbC6392019FCdE476d4A6f000F76F6A9";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliateFeeConfig {
    /// Receives the affiliate fee and the positive slippage surplus
    pub fee_recipient: String,
    /// Fraction of the buy amount, 0.01 = 1%
    pub buy_token_percentage_fee: Decimal,
}

lazy_static! {
    pub static ref AFFILIATE_FEE: AffiliateFeeConfig = AffiliateFeeConfig {
        fee_recipient: AFFILIATE_FEE_RECIPIENT.to_string(),
        buy_token_percentage_fee: Decimal::new(1, 2),
    };
}

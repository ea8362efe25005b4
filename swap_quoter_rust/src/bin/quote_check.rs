use std::process;

use swap_models::log::init_tracing;
use swap_quoter_rust::{
    config::ZeroXConfig,
    error::ReportDisplayExt,
    routers::{
        NetworkDescriptor, TokenDescriptor,
        estimate::PriceRequest,
        swap::QuoteRequest,
        zero_x::{transport::HttpTransport, zero_x::QuoteService},
    },
};

const USAGE: &str = "usage: quote_check <price|quote> <chain_id> <sell_token> <sell_decimals> <buy_token> <buy_decimals> <amount>";

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("quote_check error: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    init_tracing(false);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [kind, chain_id, sell_token, sell_decimals, buy_token, buy_decimals, amount] =
        args.as_slice()
    else {
        return Err(USAGE.to_string());
    };

    let chain_id: u32 = chain_id
        .parse()
        .map_err(|_| format!("invalid chain id {chain_id}"))?;
    let network = NetworkDescriptor {
        id: chain_id,
        name: format!("chain {chain_id}"),
    };
    let sell_token = token(sell_token, sell_decimals)?;
    let buy_token = token(buy_token, buy_decimals)?;

    let config = ZeroXConfig::from_env().map_err(|e| format!("{e:?}"))?;
    let transport = HttpTransport::from_config(&config).map_err(|e| format!("{e:?}"))?;
    let service = QuoteService::new(transport);

    match kind.as_str() {
        "price" => {
            let request = PriceRequest {
                network,
                sell_token,
                buy_token,
                amount: amount.clone(),
            };
            match service.fetch_price(&request).await {
                Ok(Some(price)) => println!("price={} rate={}", price.price, price.rate),
                Ok(None) => println!("pricing unavailable"),
                Err(e) => return Err(format!("{}: {}", e.current_context(), e.format())),
            }
        }
        "quote" => {
            let request = QuoteRequest {
                network,
                sell_token,
                buy_token,
                amount: amount.clone(),
            };
            match service.fetch_quote(&request).await {
                Ok(Some(quote)) => println!(
                    "{}",
                    serde_json::to_string_pretty(&quote).map_err(|e| e.to_string())?
                ),
                Ok(None) => println!("pricing unavailable"),
                Err(e) => return Err(format!("{}: {}", e.current_context(), e.format())),
            }
        }
        other => return Err(format!("unknown lookup {other}\n{USAGE}")),
    }

    Ok(())
}

fn token(address: &str, decimals: &str) -> Result<TokenDescriptor, String> {
    let decimals: u8 = decimals
        .parse()
        .map_err(|_| format!("invalid decimals {decimals} for {address}"))?;
    Ok(TokenDescriptor {
        address: address.to_string(),
        decimals,
        symbol: address.to_string(),
    })
}

//! Paylike CLI
//!
//! Tokenizes card data and runs payment flows from the command line.

mod config;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paylike_client::{
    CardDataType, CardExpiry, CreatePaymentRequest, CurrencyCode, PaylikeClient, PaymentAmount,
    PaymentTest,
};

use config::Config;

#[derive(Parser)]
#[command(name = "paylike")]
#[command(author, version, about = "Paylike payment flow client", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange a card number or security code for a vault token
    Tokenize {
        #[arg(long, value_enum)]
        kind: Kind,
        value: String,
    },
    /// Exchange an Apple Pay token for a payment token
    TokenizeApplePay { token: String },
    /// Tokenize a card and run the payment flow
    Pay {
        /// Public integration key
        #[arg(long)]
        key: String,
        #[arg(long)]
        number: String,
        #[arg(long)]
        cvc: String,
        #[arg(long)]
        month: u32,
        /// Two or four digit year
        #[arg(long)]
        year: u32,
        /// Decimal amount, e.g. 12.34
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long, default_value = "EUR")]
        currency: String,
        /// Descriptor shown on the statement
        #[arg(long)]
        text: Option<String>,
        /// Run against the test environment
        #[arg(long)]
        test: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    /// Card number
    Pcn,
    /// Card security code
    Pcsc,
}

impl From<Kind> for CardDataType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Pcn => CardDataType::Pcn,
            Kind::Pcsc => CardDataType::Pcsc,
        }
    }
}

fn parse_currency(s: &str) -> Result<CurrencyCode> {
    s.parse().map_err(|e: String| anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,paylike_flow=debug,paylike_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = PaylikeClient::with_config(cli.config.client_config()?)?;

    match cli.command {
        Commands::Tokenize { kind, value } => {
            let token = client.tokenize_card_data(kind.into(), value).await?;
            println!("{}", token.token);
        }
        Commands::TokenizeApplePay { token } => {
            let token = client.tokenize_apple_pay(token).await?;
            println!("{}", token.token);
        }
        Commands::Pay {
            key,
            number,
            cvc,
            month,
            year,
            amount,
            currency,
            text,
            test,
        } => {
            let expiry = CardExpiry::new(month, year)?;
            let amount = match amount {
                Some(value) => Some(PaymentAmount::from_decimal(parse_currency(&currency)?, value)?),
                None => None,
            };

            let card = client.tokenize_card(&number, &cvc, expiry).await?;
            let mut request = CreatePaymentRequest::with_card(key, card);
            if let Some(amount) = amount {
                request = request.amount(amount);
            }
            if let Some(text) = text {
                request = request.text(text);
            }
            if test {
                request = request.test(PaymentTest::default());
            }

            let result = client.create_payment(&mut request).await?;
            tracing::info!(payment_id = ?result.payment_id(), "payment finished");
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

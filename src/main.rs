use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use sberpay::gateways::{GatewayResult, PaymentGateway, PaymentRequest, SberbankClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Sberbank acquiring command-line client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register an order and print the payment page URL
    Register {
        #[arg(long)]
        order_number: String,

        /// Amount in major units, e.g. 10.50
        #[arg(long)]
        amount: Decimal,

        #[arg(long)]
        return_url: String,

        #[arg(long)]
        fail_url: String,

        #[arg(long)]
        description: String,

        #[arg(long, default_value = "ru")]
        language: String,

        /// ISO 4217 alpha code (RUB, USD, EUR)
        #[arg(long)]
        currency: Option<String>,

        /// Extra gateway parameter as KEY=VALUE, repeatable
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// Print the extended status of an order
    Status {
        /// Gateway order id
        #[arg(required_unless_present = "order_number")]
        payment_id: Option<String>,

        /// Look up by merchant order number instead
        #[arg(long, conflicts_with = "payment_id")]
        order_number: Option<String>,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sberpay=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the result JSON, logs go to stderr
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let client = SberbankClient::from_env().context("Failed to configure Sberbank client")?;

    tracing::debug!(
        register = %client.endpoints().register,
        token_auth = client.is_token_auth(),
        "Sberbank client ready"
    );

    let result: GatewayResult = match cli.command {
        Command::Register {
            order_number,
            amount,
            return_url,
            fail_url,
            description,
            language,
            currency,
            params,
        } => {
            let mut request = PaymentRequest::new(
                order_number,
                amount,
                return_url,
                fail_url,
                description,
                language,
            );
            request.currency = currency;
            request
                .extra
                .extend(params.into_iter().map(|(key, value)| (key, value.into())));

            client.initiate_payment(request).await
        }
        Command::Status {
            payment_id,
            order_number,
        } => match (payment_id, order_number) {
            (Some(payment_id), _) => client.get_payment_state(&payment_id).await,
            (None, Some(order_number)) => {
                client.order_status_by_number(&order_number).await.into()
            }
            (None, None) => anyhow::bail!("either a payment id or --order-number is required"),
        },
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.success {
        std::process::exit(1);
    }

    Ok(())
}

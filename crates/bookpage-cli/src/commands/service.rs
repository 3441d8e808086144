use anyhow::Result;
use clap::Subcommand;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::config::Config;
use crate::output::Format;

#[derive(Subcommand)]
pub enum Commands {
    /// List your services, newest first
    List,
    /// Add a service to your catalog
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "30", help = "Duration in minutes (minimum 15)")]
        duration: i32,
        #[arg(long, help = "Price as a decimal, e.g. 25.50")]
        price: Option<String>,
    },
    /// Offer a service on the booking page
    Enable {
        #[arg(help = "Service ID")]
        id: Uuid,
    },
    /// Hide a service from the booking page
    Disable {
        #[arg(help = "Service ID")]
        id: Uuid,
    },
}

#[derive(Debug, Serialize)]
struct CreateRequest {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    duration_minutes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
}

#[derive(Debug, Serialize)]
struct SetActiveRequest {
    active: bool,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    #[tabled(rename = "minutes")]
    pub duration_minutes: i32,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[tabled(display_with = "display_price")]
    pub price: Option<Decimal>,
    #[tabled(rename = "active")]
    pub is_active: bool,
}

fn display_price(price: &Option<Decimal>) -> String {
    price
        .map(|p| format!("${:.2}", p))
        .unwrap_or_else(|| "-".into())
}

pub async fn run(cmd: Commands, config: &Config, format: Format) -> Result<()> {
    let client = ApiClient::new(config);

    match cmd {
        Commands::List => {
            let services: Vec<Service> = client.get("/v1/business/services").await?;
            format.show_all(services, "No services yet")?;
        }
        Commands::Create {
            name,
            description,
            duration,
            price,
        } => {
            let req = CreateRequest {
                name,
                description,
                duration_minutes: duration,
                price,
            };
            let service: Service = client.post("/v1/business/services", &req).await?;
            format.show_created(service, "Service")?;
        }
        Commands::Enable { id } => set_active(&client, id, true, format).await?,
        Commands::Disable { id } => set_active(&client, id, false, format).await?,
    }

    Ok(())
}

async fn set_active(client: &ApiClient, id: Uuid, active: bool, format: Format) -> Result<()> {
    let service: Service = client
        .put(
            &format!("/v1/business/services/{}/active", id),
            &SetActiveRequest { active },
        )
        .await?;
    format.show(service)
}

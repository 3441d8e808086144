use anyhow::Result;
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::config::Config;
use crate::output::{self, Format};

#[derive(Subcommand)]
pub enum Commands {
    /// Create your business profile (once per owner)
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Show your business and its booking link
    Show,
    /// Show the public profile of any business
    Get {
        #[arg(help = "Business ID")]
        id: Uuid,
    },
}

#[derive(Debug, Serialize)]
struct CreateRequest {
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[tabled(display_with = "output::display_option")]
    pub phone: Option<String>,
    #[tabled(skip)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[tabled(skip)]
    pub booking_url: Option<String>,
}

/// The owner's view ends with the shareable booking link in table mode.
fn show_owned(business: Business, format: Format) -> Result<()> {
    let booking_url = business.booking_url.clone();
    format.show(business)?;

    if let (Format::Table, Some(url)) = (format, booking_url) {
        println!();
        println!("Share this booking link with your customers:");
        println!("  {}", url);
    }
    Ok(())
}

pub async fn run(cmd: Commands, config: &Config, format: Format) -> Result<()> {
    let client = ApiClient::new(config);

    match cmd {
        Commands::Create {
            name,
            email,
            phone,
            description,
        } => {
            let req = CreateRequest {
                name,
                email,
                phone,
                description,
            };
            let business: Business = client.post("/v1/business", &req).await?;
            format.headline("Business created");
            show_owned(business, format)?;
        }
        Commands::Show => {
            let business: Business = client.get("/v1/business").await?;
            show_owned(business, format)?;
        }
        Commands::Get { id } => {
            let business: Business = client
                .get(&format!("/v1/public/businesses/{}", id))
                .await?;
            format.show(business)?;
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use uuid::Uuid;

use super::appointment::Appointment;
use super::service::Service;
use crate::client::ApiClient;
use crate::config::Config;
use crate::output::Format;

#[derive(Subcommand)]
pub enum Commands {
    /// List the services a business offers publicly
    Services {
        #[arg(help = "Business ID from the booking link")]
        business_id: Uuid,
    },
    /// Book an appointment as a customer
    Submit {
        #[arg(help = "Business ID from the booking link")]
        business_id: Uuid,
        #[arg(long)]
        service_id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, help = "Date as YYYY-MM-DD")]
        date: String,
        #[arg(long, help = "Time as HH:MM, interpreted as UTC")]
        time: String,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct Customer {
    name: String,
    email: String,
    phone: String,
}

#[derive(Debug, Serialize)]
struct BookingRequest {
    service_id: Uuid,
    customer: Customer,
    date: String,
    time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

pub async fn run(cmd: Commands, config: &Config, format: Format) -> Result<()> {
    let client = ApiClient::new(config);

    match cmd {
        Commands::Services { business_id } => {
            let services: Vec<Service> = client
                .get(&format!("/v1/public/businesses/{}/services", business_id))
                .await?;
            format.show_all(services, "No services are currently offered")?;
        }
        Commands::Submit {
            business_id,
            service_id,
            name,
            email,
            phone,
            date,
            time,
            notes,
        } => {
            let req = BookingRequest {
                service_id,
                customer: Customer { name, email, phone },
                date,
                time,
                notes,
            };
            let appointment: Appointment = client
                .post(
                    &format!("/v1/public/businesses/{}/appointments", business_id),
                    &req,
                )
                .await?;
            format.show_created(appointment, "Booking")?;
        }
    }

    Ok(())
}

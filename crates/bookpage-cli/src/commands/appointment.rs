use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::config::Config;
use crate::output::{self, Format};

#[derive(Subcommand)]
pub enum Commands {
    /// List appointments by scheduled time
    List,
    /// Change an appointment's status
    SetStatus {
        #[arg(help = "Appointment ID")]
        id: Uuid,
        #[arg(value_enum)]
        status: Status,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Serialize)]
struct UpdateStatusRequest {
    status: Status,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct Appointment {
    pub id: Uuid,
    #[tabled(rename = "when")]
    pub appointment_at: DateTime<Utc>,
    #[serde(default)]
    #[tabled(rename = "service", display_with = "output::display_option")]
    pub service_name: Option<String>,
    #[tabled(rename = "customer")]
    pub customer_name: String,
    #[tabled(rename = "email")]
    pub customer_email: String,
    #[tabled(rename = "phone")]
    pub customer_phone: String,
    pub status: String,
    #[tabled(display_with = "output::display_option")]
    pub notes: Option<String>,
}

pub async fn run(cmd: Commands, config: &Config, format: Format) -> Result<()> {
    let client = ApiClient::new(config);

    match cmd {
        Commands::List => {
            let appointments: Vec<Appointment> = client.get("/v1/business/appointments").await?;
            format.show_all(
                appointments,
                "No appointments yet. Share your booking link to start receiving bookings!",
            )?;
        }
        Commands::SetStatus { id, status } => {
            let appointment: Appointment = client
                .put(
                    &format!("/v1/business/appointments/{}/status", id),
                    &UpdateStatusRequest { status },
                )
                .await?;
            format.show(appointment)?;
        }
    }

    Ok(())
}

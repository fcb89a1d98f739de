//! List all devices of an account with their current readings.
//!
//! Run: SMARTME_USERNAME=... SMARTME_PASSWORD=... cargo run --example list_devices

use std::time::Duration;

use smartme::api::obis;
use smartme::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::from_env().or_else(|_| Credentials::from_default_file())?;
    let client = SmartMeClient::from_credentials(&credentials)?;
    let ctx = RequestContext::background().with_timeout(Duration::from_secs(30));

    let devices = client.get_devices(&ctx).await?;
    println!("Found {} devices", devices.len());

    for device in &devices {
        let name = device.name.as_deref().unwrap_or("<unnamed>");
        let unit = device.active_power_unit.as_deref().unwrap_or("");
        match device.active_power {
            Some(power) => println!("  {}: {} {}", name, power, unit),
            None => println!("  {}: no power reading", name),
        }

        let Some(id) = device.id.as_deref() else { continue };
        match client.get_values(&ctx, id).await {
            Ok(values) => {
                if let Some(import) = values.value_for(obis::ACTIVE_ENERGY_IMPORT) {
                    println!("    import total: {} kWh at {}", import, values.date);
                }
            }
            Err(e) => println!("    values unavailable: {}", e),
        }
    }

    Ok(())
}

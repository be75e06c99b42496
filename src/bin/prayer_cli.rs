//! Terminal front-end: one fetch for a fixed position, printed as a table.
//!
//! `PRAYER_API_KEY=... prayer-cli --lat 51.5072 --lon -0.1276 --heading 40 --all`

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use {
        anyhow::{Context, Result},
        clap::Parser,
        qibla_times::{
            ApiKey, CompassAngles, Coordinates, PrayerDataFetcher, PrayerSession, ReqwestClient,
        },
        tabled::{Table, Tabled, settings::Style},
    };

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Print today's prayer times and Qibla bearing")]
    pub(crate) struct Args {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Device heading in degrees clockwise from north, to show compass rotations
        #[arg(long, allow_hyphen_values = true)]
        heading: Option<f64>,
        /// Also list sunrise, sunset, imsak and the night divisions
        #[arg(long, default_value_t = false)]
        all: bool,
    }

    #[derive(Tabled)]
    struct TimeRow {
        #[tabled(rename = "Prayer")]
        name: &'static str,
        #[tabled(rename = "Time")]
        time: String,
    }

    fn time_rows(session: &PrayerSession, all: bool) -> Vec<TimeRow> {
        session
            .times
            .iter()
            .filter(|(name, _)| all || name.is_obligatory())
            .map(|(name, time)| TimeRow {
                name: name.label(),
                time: time.to_owned(),
            })
            .collect()
    }

    pub(crate) async fn run(args: Args) -> Result<()> {
        let coords = Coordinates::new(args.lat, args.lon).context("Invalid position")?;
        let api_key = ApiKey::from_env().context("Prayer service key missing")?;
        let client = ReqwestClient::new().context("Failed to build HTTP client")?;
        let fetcher = PrayerDataFetcher::new(client, api_key);

        log::info!("Fetching prayer times for {}", coords);
        let session = fetcher
            .fetch(coords)
            .await
            .context("Could not fetch prayer data")?;

        if let Some(name) = &session.location_name {
            println!("{}", name);
        }
        println!("{} | {}", session.date.gregorian, session.date.hijri);
        println!(
            "{}",
            Table::new(time_rows(&session, args.all)).with(Style::rounded())
        );
        println!("Qibla: {:.2}°", session.qibla.degrees());

        if let Some(heading) = args.heading {
            let angles = CompassAngles::new(session.qibla.degrees(), heading);
            println!(
                "Heading {:.1}°: dial {:.2}°, needle {:.2}°",
                heading, angles.dial, angles.needle
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    cli::run(cli::Args::parse()).await
}
